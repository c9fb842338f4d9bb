//! Selection resolution over a SKU catalog.
//!
//! The resolver is a set of pure functions over the item list, the variation
//! definitions and the current [`Selection`](crate::Selection). A user pick
//! produces a [`Resolution`] describing the new selection, any values that
//! were filled in automatically, and the item the selection now designates.
//! Nothing here holds state between calls.

mod error;
mod initial;
mod query;
mod transition;

pub use error::{ResolveError, compute_suggestions};
pub use initial::initial_selection;
pub use query::{
    OptionState, VariationOptions, find_item, first_consistent_item, is_impossible, option_states,
    possible_items,
};
pub use transition::{ColorSignal, Pick, Resolution, resolve_pick, unique_options};
