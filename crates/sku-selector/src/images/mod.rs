//! Association of illustrative images with variation values.
//!
//! Image selection is a heuristic over editorial image labels. A catalog-wide
//! [`ImageMap`] is derived from the item list in one pass and recomputed
//! whenever the catalog or the label filter changes.

mod filter;
mod map;
mod matcher;
mod url;

pub use filter::{LabelFilter, filter_labeled_images};
pub use map::{ImageMap, ValueImage, VariationImages};
pub use matcher::find_image;
pub use url::{MAX_IMAGE_DIMENSION, resize_image_url};
