//! Text heuristics over variation names and image labels.
//!
//! Two pure functions live here: the color-axis classifier, which decides
//! whether a variation name refers to color in any supported language, and
//! the label normalizer, which canonicalizes free text for comparison.

mod classify;
mod normalize;

pub use classify::{color_language, is_color, is_color_opt};
pub use normalize::{normalize_label, slug};
