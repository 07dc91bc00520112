//! Splits a document into slides and assembles the deck.

use crate::slide::build_slide;
use crate::types::Presentation;

/// Separator between slides: one blank line.
pub const SLIDE_DELIMITER: &str = "\n\n";

/// Strip carriage returns so line splitting sees bare `\n`.
pub fn normalize_document(raw: &str) -> String {
    raw.replace('\r', "")
}

/// Split document text into per-slide segments.
///
/// Segments may be empty; the document is not trimmed.
pub fn split(document: &str) -> Vec<&str> {
    document.split(SLIDE_DELIMITER).collect()
}

/// Parse a whole document into a presentation.
pub fn assemble(document: &str) -> Presentation {
    let slides = split(document)
        .into_iter()
        .enumerate()
        .map(|(index, segment)| build_slide(segment, index))
        .collect::<Vec<_>>();

    log::debug!("assembled {} slides", slides.len());

    Presentation::new(slides)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ContentBlock;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_strips_carriage_returns() {
        assert_eq!(normalize_document("a\r\n\r\nb\r"), "a\n\nb");
    }

    #[test]
    fn test_split_keeps_empty_segments() {
        assert_eq!(split(""), vec![""]);
        assert_eq!(split("a\n\n\n\nb"), vec!["a", "", "b"]);
        assert_eq!(split("a\n\n\nb"), vec!["a", "\nb"]);
        assert_eq!(split("a\n\n"), vec!["a", ""]);
    }

    #[test]
    fn test_assemble_title_and_list() {
        let presentation = assemble("Title\n\nBar\n- foo!");

        assert_eq!(presentation.len(), 3);

        let title = &presentation.slides()[0];
        assert_eq!(
            title.blocks,
            vec![ContentBlock::Heading {
                level: 1,
                text: "Title".into()
            }]
        );
        assert!(title.centered);

        let second = &presentation.slides()[1];
        assert_eq!(
            second.blocks,
            vec![
                ContentBlock::Heading {
                    level: 2,
                    text: "Bar".into()
                },
                ContentBlock::BulletList {
                    items: vec!["foo!".into()]
                },
            ]
        );
        assert!(!second.centered);

        let end = &presentation.slides()[2];
        assert!(end.is_end());
        assert_eq!(end.index, 2);
        assert!(end.blocks.is_empty());
    }

    #[test]
    fn test_assemble_empty_document() {
        let presentation = assemble("");

        assert_eq!(presentation.len(), 2);
        assert_eq!(
            presentation.slides()[0].blocks,
            vec![ContentBlock::Heading {
                level: 1,
                text: String::new()
            }]
        );
        assert!(presentation.slides()[1].is_end());
    }

    #[test]
    fn test_only_first_slide_gets_level_one() {
        let presentation = assemble("A\n\nB\n\nC");
        let levels: Vec<u8> = presentation
            .content_slides()
            .iter()
            .map(|s| match &s.blocks[0] {
                ContentBlock::Heading { level, .. } => *level,
                other => panic!("expected heading, got {:?}", other),
            })
            .collect();
        assert_eq!(levels, vec![1, 2, 2]);
    }

    proptest! {
        #[test]
        fn prop_slide_count_is_segments_plus_end(document in "(?s).{0,200}") {
            let presentation = assemble(&document);
            prop_assert_eq!(presentation.len(), split(&document).len() + 1);
            prop_assert!(presentation.end_slide().is_end());
        }

        #[test]
        fn prop_indices_are_contiguous(document in "[a-z\\- \n]{0,120}") {
            let presentation = assemble(&document);
            for (position, slide) in presentation.slides().iter().enumerate() {
                prop_assert_eq!(slide.index, position);
            }
        }

        #[test]
        fn prop_assemble_is_idempotent(document in "(?s).{0,200}") {
            prop_assert_eq!(assemble(&document), assemble(&document));
        }

        #[test]
        fn prop_single_plain_line_is_centered(line in "[a-zA-Z0-9 .,!?]{0,40}") {
            let presentation = assemble(&line);
            prop_assert!(presentation.slides()[0].centered);
        }

        #[test]
        fn prop_bullet_line_decenters(
            header in "[a-zA-Z ]{0,20}",
            before in proptest::collection::vec("[a-z][a-z ]{0,9}", 0..3),
            marker in "[-*]",
            item in "[a-z ]{0,10}",
        ) {
            let mut lines = vec![header];
            lines.extend(before);
            lines.push(format!("{}{}", marker, item));
            let presentation = assemble(&lines.join("\n"));
            prop_assert!(!presentation.slides()[0].centered);
        }

        #[test]
        fn prop_multiple_plain_lines_decenter(
            lines in proptest::collection::vec("[a-zA-Z][a-zA-Z ]{0,20}", 3..6),
        ) {
            let presentation = assemble(&lines.join("\n"));
            prop_assert!(!presentation.slides()[0].centered);
        }

        #[test]
        fn prop_code_lines_round_trip(
            code in proptest::collection::vec(" {0,3}[a-z0-9;(){}=]{1,12}", 1..6),
        ) {
            let body: Vec<String> = code.iter().map(|line| format!("  {}", line)).collect();
            let document = format!("Code\n{}", body.join("\n"));
            let presentation = assemble(&document);

            let lines = match &presentation.slides()[0].blocks[..] {
                [_, ContentBlock::CodeBlock { lines }] => lines.clone(),
                other => panic!("expected heading and code block, got {:?}", other),
            };
            let expected: String = code.iter().map(|line| format!("{}\n", line)).collect();
            prop_assert_eq!(lines.concat(), expected);
        }
    }
}
