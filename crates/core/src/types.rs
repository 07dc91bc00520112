//! Domain types for representing a parsed presentation.

use serde::{Deserialize, Serialize};

/// An image referenced by URL, with its alternative text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Image URL, exactly as written.
    pub url: String,

    /// Alternative text taken from the caption. Empty when none was given.
    pub alt: String,
}

impl MediaItem {
    /// Create a new media item.
    pub fn new(url: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: alt.into(),
        }
    }
}

/// A structured content unit within a slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Slide header. Level 1 on the first slide, level 2 elsewhere.
    Heading { level: u8, text: String },

    /// Caption shown above a full-bleed header image.
    Subtitle { text: String },

    /// A header-position image spanning the whole slide.
    FullBleedMedia { url: String, alt: String },

    /// A free-standing line of text.
    Paragraph { text: String },

    /// A contiguous run of bullet lines.
    BulletList { items: Vec<String> },

    /// A contiguous run of image lines.
    Gallery { items: Vec<MediaItem> },

    /// A contiguous run of indented lines, each newline-terminated.
    CodeBlock { lines: Vec<String> },
}

/// Whether a slide carries authored content or marks the end of the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideRole {
    /// Built from one segment of the document.
    Content,
    /// The synthetic terminal slide.
    End,
}

/// A single slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// 0-based position in the deck.
    pub index: usize,

    /// Content blocks in source order.
    pub blocks: Vec<ContentBlock>,

    /// Title styling: no lists, galleries, code, or repeated subtitles.
    pub centered: bool,

    /// Content or end marker.
    pub role: SlideRole,
}

impl Slide {
    /// Create an empty content slide at the given index.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            blocks: Vec::new(),
            centered: true,
            role: SlideRole::Content,
        }
    }

    /// Create the terminal end slide for a deck of `index` content slides.
    pub fn end(index: usize) -> Self {
        Self {
            index,
            blocks: Vec::new(),
            centered: false,
            role: SlideRole::End,
        }
    }

    /// Whether this is the terminal end slide.
    pub fn is_end(&self) -> bool {
        self.role == SlideRole::End
    }

    /// Index of the slide this one links to.
    pub fn next_index(&self) -> usize {
        self.index + 1
    }

    /// Fragment id used to address this slide, e.g. `s3`.
    pub fn anchor_id(&self) -> String {
        format!("s{}", self.index)
    }
}

/// An entire presentation: content slides followed by the end slide.
///
/// Only built through [`Presentation::new`], so the end slide is always last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Presentation {
    slides: Vec<Slide>,
}

impl Presentation {
    /// Build a presentation from content slides, appending the end slide.
    pub fn new(mut slides: Vec<Slide>) -> Self {
        let end = Slide::end(slides.len());
        slides.push(end);
        Self { slides }
    }

    /// All slides, the end slide last.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Slides built from the document, without the end slide.
    pub fn content_slides(&self) -> &[Slide] {
        &self.slides[..self.slides.len() - 1]
    }

    /// The terminal end slide.
    pub fn end_slide(&self) -> &Slide {
        &self.slides[self.slides.len() - 1]
    }

    /// Total slide count, the end slide included.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false: a presentation holds at least its end slide.
    pub fn is_empty(&self) -> bool {
        false
    }
}
