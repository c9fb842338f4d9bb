use tracing::trace;

use crate::config::InitialSelection;
use crate::types::{Selection, SkuItem, Variations};

/// The selection a selector starts from.
///
/// Without an active item every variation starts unset. With one:
/// - `Complete` copies the item's value for every variation.
/// - `Image` copies only the value of the first color variation.
/// - `Unset` leaves everything unset.
///
/// `sku_pinned` reports that the host location already names a specific
/// item; the selection then starts complete whatever the mode.
pub fn initial_selection(
    variations: &Variations,
    active_item: Option<&SkuItem>,
    mode: InitialSelection,
    sku_pinned: bool,
) -> Selection {
    let empty = Selection::empty(variations);
    let Some(item) = active_item else {
        return empty;
    };

    if sku_pinned || mode == InitialSelection::Complete {
        return Selection::from_item(item, variations);
    }

    if mode == InitialSelection::Image {
        let mut selection = empty;
        if let Some(variation) = variations.color_variation() {
            let value = item
                .value_of(&variation.name)
                .filter(|value| variation.has_value(value));
            trace!(variation = %variation.name, ?value, "Initial color value");
            selection.set(&variation.name, value.map(str::to_string));
        }
        return selection;
    }

    empty
}
