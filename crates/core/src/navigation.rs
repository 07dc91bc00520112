//! Presentation navigation as a finite-state cursor.
//!
//! The cursor never touches the slides themselves: it tracks a position
//! within a deck of known length, and hosts bind input events to its
//! transitions.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Prefix of a slide fragment id, as in `#s3`.
const ANCHOR_PREFIX: &str = "#s";

/// Host-independent navigation commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavCommand {
    /// Advance one slide.
    Next,
    /// Go back one slide.
    Previous,
    /// Leave the presentation.
    Leave,
}

impl NavCommand {
    /// Map a DOM `keyCode` to a command.
    ///
    /// Escape leaves, Left/Up go back, Right/Down advance.
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            27 => Some(Self::Leave),
            37 | 38 => Some(Self::Previous),
            39 | 40 => Some(Self::Next),
            _ => None,
        }
    }
}

/// Where the audience is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    /// Showing the slide at `current`.
    Presenting { current: usize },
    /// Out of the presentation, back in the editor.
    Left,
}

/// A cursor over a deck of `count` slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    count: usize,
    position: Position,
}

impl Deck {
    /// Start presenting a deck of `count` slides at its first slide.
    ///
    /// A deck with no slides starts out already left.
    pub fn new(count: usize) -> Self {
        let position = if count == 0 {
            Position::Left
        } else {
            Position::Presenting { current: 0 }
        };
        Self { count, position }
    }

    /// Number of slides in the deck.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Current position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Index of the slide being shown, if presenting.
    pub fn current(&self) -> Option<usize> {
        match self.position {
            Position::Presenting { current } => Some(current),
            Position::Left => None,
        }
    }

    /// Advance one slide. Advancing past the last slide leaves.
    pub fn next(self) -> Self {
        match self.position {
            Position::Presenting { current } if current + 1 < self.count => Self {
                position: Position::Presenting {
                    current: current + 1,
                },
                ..self
            },
            Position::Presenting { .. } => self.leave(),
            Position::Left => self,
        }
    }

    /// Go back one slide, staying put on the first.
    pub fn previous(self) -> Self {
        match self.position {
            Position::Presenting { current } => Self {
                position: Position::Presenting {
                    current: current.saturating_sub(1),
                },
                ..self
            },
            Position::Left => self,
        }
    }

    /// Leave the presentation.
    pub fn leave(self) -> Self {
        Self {
            position: Position::Left,
            ..self
        }
    }

    /// Present from the first slide again.
    pub fn restart(self) -> Self {
        Self::new(self.count)
    }

    /// Jump directly to a slide.
    pub fn jump_to(self, index: usize) -> Result<Self> {
        if index >= self.count {
            return Err(Error::SlideOutOfRange {
                index,
                count: self.count,
            });
        }
        Ok(Self {
            position: Position::Presenting { current: index },
            ..self
        })
    }

    /// Apply a command.
    pub fn apply(self, command: NavCommand) -> Self {
        match command {
            NavCommand::Next => self.next(),
            NavCommand::Previous => self.previous(),
            NavCommand::Leave => self.leave(),
        }
    }
}

/// Parse a slide fragment such as `#s3` into its index.
pub fn parse_anchor(fragment: &str) -> Result<usize> {
    fragment
        .strip_prefix(ANCHOR_PREFIX)
        .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|digits| digits.parse().ok())
        .ok_or_else(|| Error::InvalidAnchor(fragment.to_string()))
}
