//! Builds a single slide from its text.
//!
//! The first line is the header. Every later line is classified and either
//! extends the currently open list, gallery, or code block, or closes it and
//! starts something new.

use crate::classify::{classify, trim_line, LineKind, MediaRef};
use crate::types::{ContentBlock, MediaItem, Slide};

/// Prefix for the subtitle of an uncaptioned full-bleed image.
const UNCAPTIONED_PREFIX: &str = "Image: ";

/// A multi-line block still accepting lines.
#[derive(Debug)]
enum OpenBlock {
    List(Vec<String>),
    Gallery(Vec<MediaItem>),
    Code(Vec<String>),
}

impl OpenBlock {
    fn into_block(self) -> ContentBlock {
        match self {
            Self::List(items) => ContentBlock::BulletList { items },
            Self::Gallery(items) => ContentBlock::Gallery { items },
            Self::Code(lines) => ContentBlock::CodeBlock { lines },
        }
    }
}

/// Line-by-line state for one slide.
#[derive(Debug)]
struct SlideBuilder {
    slide: Slide,
    open: Option<OpenBlock>,
}

impl SlideBuilder {
    fn new(index: usize) -> Self {
        Self {
            slide: Slide::new(index),
            open: None,
        }
    }

    fn push(&mut self, block: ContentBlock) {
        self.slide.blocks.push(block);
    }

    fn flush(&mut self) {
        if let Some(open) = self.open.take() {
            self.slide.blocks.push(open.into_block());
        }
    }

    fn header(&mut self, raw: &str) {
        let line = trim_line(raw);

        match MediaRef::parse(line) {
            Some(media) => {
                let subtitle = match &media.caption {
                    Some(caption) => caption.clone(),
                    None => format!("{}{}", UNCAPTIONED_PREFIX, media.url),
                };
                let alt = media.alt_text().to_string();
                self.push(ContentBlock::Subtitle { text: subtitle });
                self.push(ContentBlock::FullBleedMedia {
                    url: media.url,
                    alt,
                });
            }
            None => {
                let level = if self.slide.index == 0 { 1 } else { 2 };
                self.push(ContentBlock::Heading {
                    level,
                    text: line.to_string(),
                });
            }
        }
    }

    fn body(&mut self, position: usize, raw: &str) {
        let kind = classify(raw);
        log::trace!("slide {} line {}: {:?}", self.slide.index, position, kind);

        match kind {
            LineKind::Bullet(item) => match &mut self.open {
                Some(OpenBlock::List(items)) => items.push(item),
                _ => self.open_block(OpenBlock::List(vec![item])),
            },
            LineKind::Media(media) => {
                let alt = media.alt_text().to_string();
                let item = MediaItem::new(media.url, alt);
                match &mut self.open {
                    Some(OpenBlock::Gallery(items)) => items.push(item),
                    _ => self.open_block(OpenBlock::Gallery(vec![item])),
                }
            }
            LineKind::Code(text) => {
                let line = format!("{}\n", text);
                match &mut self.open {
                    Some(OpenBlock::Code(lines)) => lines.push(line),
                    _ => self.open_block(OpenBlock::Code(vec![line])),
                }
            }
            LineKind::Plain(text) => {
                self.flush();
                // More than one subtitle after the header: not a title slide.
                if position >= 2 {
                    self.slide.centered = false;
                }
                self.push(ContentBlock::Paragraph { text });
            }
        }
    }

    fn open_block(&mut self, block: OpenBlock) {
        self.flush();
        self.open = Some(block);
        self.slide.centered = false;
    }

    fn finish(mut self) -> Slide {
        self.flush();
        self.slide
    }
}

/// Build the slide at `index` from its text.
///
/// Never fails: empty text yields a slide holding one empty heading.
pub fn build_slide(text: &str, index: usize) -> Slide {
    let mut builder = SlideBuilder::new(index);

    for (position, raw) in text.split('\n').enumerate() {
        if position == 0 {
            builder.header(raw);
        } else {
            builder.body(position, raw);
        }
    }

    builder.finish()
}
