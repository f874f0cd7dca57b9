//! Placeholder content generation.
//!
//! Text replacements come from fixed per-tag candidate pools; `p` and `div` additionally split
//! into short/long pools based on a coarse length bucket of the original text, so a long
//! paragraph gets lorem-ipsum body copy while a short one gets a label-sized phrase. The bucket
//! only selects the candidate pool, it has no other effect.
//!
//! Candidate choice is deterministically random: the generator owns a seeded [`SmallRng`], so
//! the same seed and call sequence always produce the same replacements.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use unicode_segmentation::UnicodeSegmentation;

const H1_POOL: [&str; 3] = ["Main Headline Here", "Primary Title", "Hero Header"];
const H2_POOL: [&str; 3] = ["Section Header", "Subheading Text", "Secondary Title"];
const H3_POOL: [&str; 3] = ["Subsection Title", "Topic Header", "Content Header"];
const P_SHORT_POOL: [&str; 3] = [
    "Sample paragraph text",
    "Content description here",
    "Placeholder text content",
];
const P_LONG_POOL: [&str; 1] = [
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt \
     ut labore et dolore magna aliqua.",
];
const A_POOL: [&str; 3] = ["Link Text", "Click Here", "Learn More"];
const BUTTON_POOL: [&str; 3] = ["Button Text", "Click Me", "Submit"];
const SPAN_POOL: [&str; 3] = ["Inline Text", "Label", "Tag"];
const DIV_SHORT_POOL: [&str; 2] = ["Content Block", "Text Container"];
const DIV_LONG_POOL: [&str; 1] =
    ["Content block with multiple lines of text to demonstrate layout"];
const FALLBACK_POOL: [&str; 1] = ["Placeholder Text"];

/// Fallback width for image placeholders when no rendered size is available.
pub const FALLBACK_IMAGE_WIDTH: u32 = 300;
/// Fallback height for image placeholders when no rendered size is available.
pub const FALLBACK_IMAGE_HEIGHT: u32 = 200;

/// Length-bucket thresholds, in grapheme clusters of the original text.
///
/// An original longer than the threshold selects the "long" candidate pool for that tag. The
/// defaults mirror the observed behavior of the tables these pools were lifted from; nothing in
/// the kernel depends on the exact values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderConfig {
    /// `p` originals longer than this use body-length copy.
    pub paragraph_long_threshold: usize,
    /// `div` originals longer than this use block-length copy.
    pub block_long_threshold: usize,
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self {
            paragraph_long_threshold: 100,
            block_long_threshold: 50,
        }
    }
}

/// Deterministically-random placeholder text generator.
#[derive(Debug)]
pub struct PlaceholderGenerator {
    config: PlaceholderConfig,
    rng: SmallRng,
}

impl PlaceholderGenerator {
    /// Create a generator with default thresholds and the given RNG seed.
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, PlaceholderConfig::default())
    }

    /// Create a generator with explicit thresholds.
    pub fn with_config(seed: u64, config: PlaceholderConfig) -> Self {
        Self {
            config,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Active thresholds.
    pub fn config(&self) -> PlaceholderConfig {
        self.config
    }

    /// Pick replacement text for an element with the given tag and original text.
    pub fn text_for(&mut self, tag: &str, original: &str) -> String {
        let pool = self.pool_for(tag, original.graphemes(true).count());
        let choice = self.rng.gen_range(0..pool.len());
        pool[choice].to_string()
    }

    fn pool_for(&self, tag: &str, original_len: usize) -> &'static [&'static str] {
        match tag {
            "h1" => &H1_POOL,
            "h2" => &H2_POOL,
            "h3" => &H3_POOL,
            "p" if original_len > self.config.paragraph_long_threshold => &P_LONG_POOL,
            "p" => &P_SHORT_POOL,
            "a" => &A_POOL,
            "button" => &BUTTON_POOL,
            "span" => &SPAN_POOL,
            "div" if original_len > self.config.block_long_threshold => &DIV_LONG_POOL,
            "div" => &DIV_SHORT_POOL,
            _ => &FALLBACK_POOL,
        }
    }

    /// The candidate pool a tag/original pair would draw from (exposed for hosts that preview).
    pub fn candidates(&self, tag: &str, original: &str) -> &'static [&'static str] {
        self.pool_for(tag, original.graphemes(true).count())
    }
}

/// Synthesize a placeholder image reference encoding the rendered size.
///
/// Dimensions of zero count as unavailable, matching how layout reports collapsed elements;
/// unavailable dimensions fall back to 300x200.
pub fn placeholder_image(rendered_size: Option<(u32, u32)>) -> String {
    let (w, h) = rendered_size.unwrap_or((0, 0));
    let width = if w > 0 { w } else { FALLBACK_IMAGE_WIDTH };
    let height = if h > 0 { h } else { FALLBACK_IMAGE_HEIGHT };
    format!("https://via.placeholder.com/{width}x{height}/cccccc/666666?text=Placeholder+Image")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = PlaceholderGenerator::new(7);
        let mut b = PlaceholderGenerator::new(7);
        for _ in 0..20 {
            assert_eq!(a.text_for("p", "Hello"), b.text_for("p", "Hello"));
        }
    }

    #[test]
    fn test_choice_comes_from_the_right_pool() {
        let mut generator = PlaceholderGenerator::new(0);
        for _ in 0..10 {
            let text = generator.text_for("h1", "Old Title");
            assert!(H1_POOL.contains(&text.as_str()));
        }
    }

    #[test]
    fn test_length_bucket_selects_pool() {
        let mut generator = PlaceholderGenerator::new(0);

        let long_original = "x".repeat(101);
        assert_eq!(generator.text_for("p", &long_original), P_LONG_POOL[0]);
        assert!(P_SHORT_POOL.contains(&generator.text_for("p", "short").as_str()));

        let long_block = "y".repeat(51);
        assert_eq!(generator.text_for("div", &long_block), DIV_LONG_POOL[0]);
    }

    #[test]
    fn test_threshold_is_configurable() {
        let config = PlaceholderConfig {
            paragraph_long_threshold: 3,
            block_long_threshold: 3,
        };
        let mut generator = PlaceholderGenerator::with_config(0, config);
        assert_eq!(generator.text_for("p", "abcd"), P_LONG_POOL[0]);
    }

    #[test]
    fn test_length_measured_in_graphemes() {
        let generator = PlaceholderGenerator::with_config(
            0,
            PlaceholderConfig {
                paragraph_long_threshold: 4,
                block_long_threshold: 4,
            },
        );
        // Four family emoji are four graphemes even though they span many scalars.
        let emoji = "👨‍👩‍👧‍👦👨‍👩‍👧‍👦👨‍👩‍👧‍👦👨‍👩‍👧‍👦";
        assert_eq!(generator.candidates("p", emoji), &P_SHORT_POOL);
    }

    #[test]
    fn test_unknown_tag_falls_back() {
        let mut generator = PlaceholderGenerator::new(0);
        assert_eq!(generator.text_for("h6", "deep heading"), "Placeholder Text");
        assert_eq!(generator.text_for("blockquote", "quote"), "Placeholder Text");
    }

    #[test]
    fn test_placeholder_image_encodes_size() {
        assert_eq!(
            placeholder_image(Some((640, 480))),
            "https://via.placeholder.com/640x480/cccccc/666666?text=Placeholder+Image"
        );
        assert_eq!(
            placeholder_image(None),
            "https://via.placeholder.com/300x200/cccccc/666666?text=Placeholder+Image"
        );
        // Collapsed dimensions fall back individually.
        assert_eq!(
            placeholder_image(Some((640, 0))),
            "https://via.placeholder.com/640x200/cccccc/666666?text=Placeholder+Image"
        );
    }
}
