//! Static markup output.
//!
//! Each slide is wrapped in a link to the next one, so a rendered deck can
//! be stepped through by clicking, or printed, without any script.

use crate::types::{ContentBlock, Presentation, Slide};
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write;

const DEFAULT_TITLE: &str = "10k Slides";
const DEFAULT_STYLESHEET: &str = "styles/10kslides.css";
const DEFAULT_HOME_HREF: &str = "/";
const VIEWPORT: &str = "width=device-width, initial-scale=1, maximum-scale=2, user-scalable=yes";

/// Renderer for self-contained HTML pages.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    /// Page `<title>`.
    title: String,
    /// Stylesheet href.
    stylesheet: String,
    /// Where the end slide links to.
    home_href: String,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            stylesheet: DEFAULT_STYLESHEET.to_string(),
            home_href: DEFAULT_HOME_HREF.to_string(),
        }
    }
}

impl HtmlRenderer {
    /// Create a renderer with the default page shell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the stylesheet href.
    pub fn with_stylesheet(mut self, href: impl Into<String>) -> Self {
        self.stylesheet = href.into();
        self
    }

    /// Set the link target of the end slide.
    pub fn with_home_href(mut self, href: impl Into<String>) -> Self {
        self.home_href = href.into();
        self
    }

    /// Render a full HTML document.
    pub fn render_document(&self, presentation: &Presentation) -> String {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html><html><head><meta charset=\"utf-8\"/>");
        let _ = write!(out, "<title>{}</title>", encode_text(&self.title));
        let _ = write!(
            out,
            "<link rel=\"stylesheet\" href=\"{}\"/>",
            encode_double_quoted_attribute(&self.stylesheet)
        );
        let _ = write!(out, "<meta name=\"viewport\" content=\"{}\"/>", VIEWPORT);
        out.push_str("</head><body><main id=\"present\" class=\"u-visible built\">");
        out.push_str(&self.render_slides(presentation));
        out.push_str("</main></body></html>");
        out
    }

    /// Render every slide, end slide included, back to back.
    pub fn render_slides(&self, presentation: &Presentation) -> String {
        presentation
            .slides()
            .iter()
            .map(|slide| self.render_slide(slide))
            .collect()
    }

    /// Render one slide inside its navigation link.
    pub fn render_slide(&self, slide: &Slide) -> String {
        if slide.is_end() {
            return format!(
                "<a href=\"{}\"><section class=\"slide--end\"></section></a>",
                encode_double_quoted_attribute(&self.home_href)
            );
        }

        let mut out = String::new();
        let _ = write!(out, "<a href=\"#s{}\">", slide.next_index());
        if slide.centered {
            out.push_str("<section class=\"slide--centered\" ");
        } else {
            out.push_str("<section ");
        }
        let _ = write!(out, "id=\"{}\">", slide.anchor_id());
        for block in &slide.blocks {
            render_block(&mut out, block);
        }
        out.push_str("</section></a>");
        out
    }
}

/// CSS declaration showing `url` as a background image.
///
/// The URL is written as a quoted CSS string so that parentheses or
/// semicolons in it cannot end the declaration.
pub fn background_image_style(url: &str) -> String {
    let mut style = String::with_capacity(url.len() + 26);
    style.push_str("background-image:url(\"");
    for c in url.chars() {
        match c {
            '"' => style.push_str("\\\""),
            '\\' => style.push_str("\\\\"),
            '\n' => style.push_str("\\A "),
            '\r' => style.push_str("\\D "),
            _ => style.push(c),
        }
    }
    style.push_str("\")");
    style
}

fn render_block(out: &mut String, block: &ContentBlock) {
    match block {
        ContentBlock::Heading { level, text } => {
            let _ = write!(out, "<h{0}>{1}</h{0}>", level, encode_text(text));
        }
        ContentBlock::Subtitle { text } | ContentBlock::Paragraph { text } => {
            let _ = write!(out, "<p>{}</p>", encode_text(text));
        }
        ContentBlock::FullBleedMedia { url, .. } => {
            let _ = write!(
                out,
                "<div class=\"full-bleed\" style=\"{}\"></div>",
                encode_double_quoted_attribute(&background_image_style(url))
            );
        }
        ContentBlock::BulletList { items } => {
            out.push_str("<ul>");
            for item in items {
                let _ = write!(out, "<li>{}</li>", encode_text(item));
            }
            out.push_str("</ul>");
        }
        ContentBlock::Gallery { items } => {
            out.push_str("<ul class=\"gallery\">");
            for item in items {
                let _ = write!(
                    out,
                    "<li><img src=\"{}\" alt=\"{}\"></li>",
                    encode_double_quoted_attribute(&item.url),
                    encode_double_quoted_attribute(&item.alt)
                );
            }
            out.push_str("</ul>");
        }
        ContentBlock::CodeBlock { lines } => {
            let _ = write!(out, "<pre>{}</pre>", encode_text(&lines.concat()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble;

    #[test]
    fn test_render_title_and_list() {
        let html = HtmlRenderer::new().render_slides(&assemble("Title\n\nBar\n- foo!"));
        assert_eq!(
            html,
            "<a href=\"#s1\"><section class=\"slide--centered\" id=\"s0\"><h1>Title</h1></section></a>\
             <a href=\"#s2\"><section id=\"s1\"><h2>Bar</h2><ul><li>foo!</li></ul></section></a>\
             <a href=\"/\"><section class=\"slide--end\"></section></a>"
        );
    }

    #[test]
    fn test_render_full_bleed_header() {
        let presentation = assemble("http://x.com/a.png (A cat)");
        let html = HtmlRenderer::new().render_slide(&presentation.slides()[0]);
        assert_eq!(
            html,
            "<a href=\"#s1\"><section class=\"slide--centered\" id=\"s0\"><p>A cat</p>\
             <div class=\"full-bleed\" style=\"background-image:url(&quot;http://x.com/a.png&quot;)\"></div>\
             </section></a>"
        );
    }

    #[test]
    fn test_background_image_style_quotes_url() {
        assert_eq!(
            background_image_style("http://x.com/a.png"),
            "background-image:url(\"http://x.com/a.png\")"
        );
        assert_eq!(
            background_image_style("http://x.com/a\"b\\c.png"),
            "background-image:url(\"http://x.com/a\\\"b\\\\c.png\")"
        );
        assert_eq!(
            background_image_style("a\nb"),
            "background-image:url(\"a\\A b\")"
        );
    }

    #[test]
    fn test_full_bleed_url_cannot_close_declaration() {
        let presentation = assemble("http://x.com/a.png);background:red;x:url(http://e");
        let html = HtmlRenderer::new().render_slide(&presentation.slides()[0]);
        assert!(html.contains(
            "style=\"background-image:url(&quot;http://x.com/a.png);background:red;x:url(http://e&quot;)\""
        ));
    }

    #[test]
    fn test_render_gallery_and_code() {
        let presentation = assemble("H\nhttp://x.com/a.png (A \"cat\")\n  a < b");
        let html = HtmlRenderer::new().render_slide(&presentation.slides()[0]);
        assert!(html.contains(
            "<ul class=\"gallery\"><li><img src=\"http://x.com/a.png\" alt=\"A &quot;cat&quot;\"></li></ul>"
        ));
        assert!(html.contains("<pre>a &lt; b\n</pre>"));
    }

    #[test]
    fn test_render_escapes_text() {
        let presentation = assemble("<script>alert(1)</script>");
        let html = HtmlRenderer::new().render_slides(&presentation);
        assert!(html.contains("<h1>&lt;script&gt;alert(1)&lt;/script&gt;</h1>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_render_document_shell() {
        let renderer = HtmlRenderer::new()
            .with_title("Deck")
            .with_stylesheet("/deck.css")
            .with_home_href("/editor");
        let html = renderer.render_document(&assemble("Hello"));

        assert!(html.starts_with("<!DOCTYPE html><html><head><meta charset=\"utf-8\"/><title>Deck</title>"));
        assert!(html.contains("<link rel=\"stylesheet\" href=\"/deck.css\"/>"));
        assert!(html.contains("<meta name=\"viewport\""));
        assert!(html.contains("<main id=\"present\" class=\"u-visible built\">"));
        assert!(html.contains("<a href=\"/editor\"><section class=\"slide--end\"></section></a>"));
        assert!(html.ends_with("</main></body></html>"));
    }
}
