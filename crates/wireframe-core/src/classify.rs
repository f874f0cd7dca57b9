//! Mode classifier.
//!
//! Decides, given an element and the active editing mode, whether the element may be modified
//! and which content slot the substitution targets. [`classify`] is a pure function: calling it
//! any number of times on the same element/mode pair never mutates anything, which is what lets
//! the session re-run it freely when modes change.

use crate::page::{ContentKind, PageNode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tags whose text content may be replaced with placeholder copy.
pub const TEXT_TAGS: [&str; 12] = [
    "p", "h1", "h2", "h3", "h4", "h5", "h6", "span", "div", "a", "button", "label",
];

/// Active editing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Replace text content with placeholder copy.
    Text,
    /// Replace image sources with placeholder references.
    Image,
    /// Mark text elements pending; content arrives later over the command channel.
    Ai,
}

impl Mode {
    /// Channel-facing name of this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Text => "text",
            Mode::Image => "image",
            Mode::Ai => "ai",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a channel mode string does not name a known mode.
///
/// Routers treat this as "ineligible / ignore", never as a hard failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseModeError(pub String);

impl fmt::Display for ParseModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown mode: {:?}", self.0)
    }
}

impl std::error::Error for ParseModeError {}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Mode::Text),
            "image" => Ok(Mode::Image),
            "ai" => Ok(Mode::Ai),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}

/// Outcome of classifying one element under one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    /// The element may be modified; the substitution targets this content slot.
    Eligible(ContentKind),
    /// The element is not a target under the given mode.
    Ineligible,
}

impl Eligibility {
    /// `true` for [`Eligibility::Eligible`].
    pub fn is_eligible(self) -> bool {
        matches!(self, Eligibility::Eligible(_))
    }
}

/// Classify one element under the active mode.
///
/// - `Text`: tag must be in [`TEXT_TAGS`] and the trimmed text content non-empty.
/// - `Image`: `img`, `video`, or a `div` exposing a background-image style.
/// - `Ai`: same predicate as `Text`; the caller only marks the element pending, the
///   substitution happens when external content arrives.
pub fn classify(node: &PageNode, mode: Mode) -> Eligibility {
    match mode {
        Mode::Text | Mode::Ai => {
            if TEXT_TAGS.contains(&node.tag()) && !node.text_content().trim().is_empty() {
                Eligibility::Eligible(ContentKind::Text)
            } else {
                Eligibility::Ineligible
            }
        }
        Mode::Image => {
            let image_bearing = matches!(node.tag(), "img" | "video")
                || (node.tag() == "div" && node.has_background_image());
            if image_bearing {
                Eligibility::Eligible(ContentKind::Image)
            } else {
                Eligibility::Ineligible
            }
        }
    }
}
