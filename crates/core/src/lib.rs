//! Plain-text outline to slide deck: line classification, slide building,
//! presentation assembly, rendering, and navigation.

pub mod classify;
pub mod error;
pub mod html;
pub mod navigation;
pub mod presentation;
pub mod slide;
pub mod tree;
pub mod types;

pub use classify::{classify, trim_line, LineKind, MediaRef};
pub use error::{Error, Result};
pub use html::HtmlRenderer;
pub use navigation::{parse_anchor, Deck, NavCommand, Position};
pub use presentation::{assemble, normalize_document, split};
pub use slide::build_slide;
pub use tree::{Node, SlideTree};
pub use types::{ContentBlock, MediaItem, Presentation, Slide, SlideRole};
