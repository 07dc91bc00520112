//! Error types for deck navigation.
//!
//! Parsing and rendering are total over all input text and never fail;
//! only addressing a slide by index or anchor can.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while addressing slides in a deck.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A slide index past the end of the deck.
    #[error("Slide {index} is out of range for a deck of {count} slides")]
    SlideOutOfRange { index: usize, count: usize },

    /// A location fragment that does not name a slide (`#s<n>`).
    #[error("Invalid slide anchor: {0:?}")]
    InvalidAnchor(String),
}
