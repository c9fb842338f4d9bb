//! Variation selection engine for SKU catalogs.
//!
//! A product is sold as a set of SKU items, each defined by one value per
//! variation (Color=Red, Size=M). This crate narrows a partial, possibly
//! contradictory choice of values down to a single item:
//!
//! - [`resolve_pick`] applies a click, auto-completes variations left with a
//!   single option and resolves the matching item.
//! - [`is_impossible`] and [`option_states`] report which values can still
//!   be reached.
//! - [`ImageMap`] associates an illustrative image with every value by
//!   matching normalized image labels.
//! - [`is_color`] recognizes color axes in fifteen languages.
//! - [`Coordinator`] ties these together for one product on a page and
//!   reports to a [`SelectorHost`].

pub mod catalog;
pub mod config;
pub mod coordinator;
pub mod images;
pub mod resolver;
pub mod text;
pub mod types;

pub use catalog::{Catalog, CatalogError, CatalogIssue, RawCatalog, RawItem};
pub use config::{ConfigError, InitialSelection, SelectorConfig};
pub use coordinator::{Coordinator, Navigation, ProductEvent, RecordingHost, SelectorHost};
pub use images::{
    ImageMap, LabelFilter, ValueImage, VariationImages, filter_labeled_images, find_image,
    resize_image_url,
};
pub use resolver::{
    ColorSignal, OptionState, Pick, Resolution, ResolveError, VariationOptions,
    compute_suggestions, find_item, first_consistent_item, initial_selection, is_impossible,
    option_states, possible_items, resolve_pick, unique_options,
};
pub use text::{color_language, is_color, is_color_opt, normalize_label, slug};
pub use types::{Image, ItemId, Selection, SkuItem, Variation, VariationValue, Variations};
