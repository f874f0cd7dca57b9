#![warn(missing_docs)]
//! `wireframe-content` - canned mock copy for `wireframe-core`.
//!
//! This crate intentionally stays lightweight and does **not** depend on the kernel or on any
//! network/AI client. It provides the static lookup tables a host uses to produce "generated"
//! content for the `ApplyExternalContent` command: one phrase per content type and tone.
//!
//! The kernel never calls into this crate; content always arrives over the command channel as a
//! plain string. Keeping the tables in a separate crate keeps that boundary honest.

use std::fmt;
use std::str::FromStr;

/// The shape of copy being requested (headline, body text, etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// Short attention-grabbing headline.
    Headline,
    /// A sentence or two of body copy.
    Body,
    /// Call-to-action label (button-sized).
    Cta,
    /// One-line product/feature description.
    Description,
}

/// The voice the copy is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Polished corporate voice.
    Professional,
    /// Relaxed, informal voice.
    Casual,
    /// Warm and encouraging voice.
    Friendly,
    /// Precise, jargon-friendly voice.
    Technical,
    /// Evocative marketing voice.
    Creative,
}

/// Error returned when parsing a [`ContentType`] or [`Tone`] from channel input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseContentError {
    /// The field that failed to parse (`"content type"` or `"tone"`).
    pub field: &'static str,
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for ParseContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: {:?}", self.field, self.input)
    }
}

impl std::error::Error for ParseContentError {}

impl ContentType {
    /// Channel-facing name of this content type.
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Headline => "headline",
            ContentType::Body => "body",
            ContentType::Cta => "cta",
            ContentType::Description => "description",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = ParseContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "headline" => Ok(ContentType::Headline),
            "body" => Ok(ContentType::Body),
            "cta" => Ok(ContentType::Cta),
            "description" => Ok(ContentType::Description),
            other => Err(ParseContentError {
                field: "content type",
                input: other.to_string(),
            }),
        }
    }
}

impl Tone {
    /// Channel-facing name of this tone.
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Friendly => "friendly",
            Tone::Technical => "technical",
            Tone::Creative => "creative",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = ParseContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "professional" => Ok(Tone::Professional),
            "casual" => Ok(Tone::Casual),
            "friendly" => Ok(Tone::Friendly),
            "technical" => Ok(Tone::Technical),
            "creative" => Ok(Tone::Creative),
            other => Err(ParseContentError {
                field: "tone",
                input: other.to_string(),
            }),
        }
    }
}

/// Look up the canned phrase for a content type and tone.
///
/// Total over both enums, so every combination yields a phrase.
///
/// ```rust
/// use wireframe_content::{ContentType, Tone, mock_content};
///
/// assert_eq!(mock_content(ContentType::Cta, Tone::Friendly), "Get Started Now");
/// ```
pub fn mock_content(content_type: ContentType, tone: Tone) -> &'static str {
    match (content_type, tone) {
        (ContentType::Headline, Tone::Professional) => {
            "Innovative Solutions for Modern Challenges"
        }
        (ContentType::Headline, Tone::Casual) => "Cool Stuff That Actually Works",
        (ContentType::Headline, Tone::Friendly) => "We're Here to Help You Succeed",
        (ContentType::Headline, Tone::Technical) => "Advanced Implementation Strategies",
        (ContentType::Headline, Tone::Creative) => "Unleash Your Potential Today",

        (ContentType::Body, Tone::Professional) => {
            "Our comprehensive approach ensures optimal results through strategic \
             implementation and continuous optimization."
        }
        (ContentType::Body, Tone::Casual) => {
            "We make things simple and fun. No complicated stuff, just results that matter."
        }
        (ContentType::Body, Tone::Friendly) => {
            "Let's work together to make your vision a reality. We're excited to help you \
             succeed!"
        }
        (ContentType::Body, Tone::Technical) => {
            "Utilizing advanced algorithms and robust architecture to deliver scalable \
             solutions."
        }
        (ContentType::Body, Tone::Creative) => {
            "Imagine the possibilities when innovation meets inspiration. Your journey starts \
             here."
        }

        (ContentType::Cta, Tone::Professional) => "Contact Us Today",
        (ContentType::Cta, Tone::Casual) => "Let's Do This!",
        (ContentType::Cta, Tone::Friendly) => "Get Started Now",
        (ContentType::Cta, Tone::Technical) => "Initialize Process",
        (ContentType::Cta, Tone::Creative) => "Begin Your Journey",

        (ContentType::Description, Tone::Professional) => {
            "A comprehensive solution designed to meet your specific requirements and exceed \
             expectations."
        }
        (ContentType::Description, Tone::Casual) => {
            "The perfect tool for getting things done without the hassle."
        }
        (ContentType::Description, Tone::Friendly) => {
            "Everything you need to succeed, all in one place."
        }
        (ContentType::Description, Tone::Technical) => {
            "High-performance system with advanced features and robust security."
        }
        (ContentType::Description, Tone::Creative) => {
            "Where imagination meets reality in perfect harmony."
        }
    }
}
