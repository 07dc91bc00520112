//! Line classification for slide text.
//!
//! Every line after a slide's header falls into exactly one role, tested in
//! this order: bullet, media reference, code, plain text.

use regex::Regex;
use std::sync::LazyLock;

/// A URL candidate: contains a scheme separator and no whitespace at all.
/// The byte order mark counts as whitespace here, as it does for `trim_line`.
static URL_CANDIDATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s\x{FEFF}]*://[^\s\x{FEFF}]*$").unwrap());

/// Byte order mark, left in place by `str::trim`.
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Separator between an image URL and its caption.
const CAPTION_OPEN: &str = " (";

/// Indentation that turns a line into code.
const CODE_INDENT: &str = "  ";

/// A media reference line: `URL` or `URL (caption)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRef {
    /// The URL portion, before the caption.
    pub url: String,

    /// Caption text without its parentheses, if one was given.
    pub caption: Option<String>,
}

impl MediaRef {
    /// Parse a trimmed line as a media reference.
    ///
    /// The line is split at the first `" ("`. The part before must contain
    /// `://` and no whitespace. A caption, when present, must end with `)`;
    /// one closing parenthesis is stripped and the rest kept verbatim.
    /// An unterminated caption disqualifies the line entirely.
    pub fn parse(line: &str) -> Option<Self> {
        let (candidate, caption) = match line.split_once(CAPTION_OPEN) {
            Some((url, caption)) => (url, Some(caption)),
            None => (line, None),
        };

        if !URL_CANDIDATE_REGEX.is_match(candidate) {
            return None;
        }

        let caption = match caption {
            Some(caption) => Some(caption.strip_suffix(')')?.to_string()),
            None => None,
        };

        Some(Self {
            url: candidate.to_string(),
            caption,
        })
    }

    /// Alternative text for the image; empty without a caption.
    pub fn alt_text(&self) -> &str {
        self.caption.as_deref().unwrap_or("")
    }
}

/// The structural role of a single body line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// A `-` or `*` bullet, holding the item text.
    Bullet(String),
    /// An image reference bound for a gallery.
    Media(MediaRef),
    /// An indented line, holding the text with its indentation removed.
    Code(String),
    /// Anything else, holding the trimmed text.
    Plain(String),
}

/// Trim surrounding whitespace, byte order marks included.
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
}

/// Whether a trimmed line is a media reference.
pub fn is_media_reference(line: &str) -> bool {
    MediaRef::parse(line).is_some()
}

/// Whether a trimmed line starts with a bullet marker.
pub fn is_bullet_marker(line: &str) -> bool {
    line.starts_with(['-', '*'])
}

/// Whether an untrimmed line is indented as code.
pub fn is_code_line(raw: &str) -> bool {
    raw.starts_with(CODE_INDENT)
}

/// Classify a raw (untrimmed) body line.
pub fn classify(raw: &str) -> LineKind {
    let line = trim_line(raw);

    if is_bullet_marker(line) {
        // Markers are single-byte, and the item may be written "-x" or "- x".
        return LineKind::Bullet(trim_line(&line[1..]).to_string());
    }

    if let Some(media) = MediaRef::parse(line) {
        return LineKind::Media(media);
    }

    if is_code_line(raw) {
        return LineKind::Code(raw[CODE_INDENT.len()..].to_string());
    }

    LineKind::Plain(line.to_string())
}
