use tracing::{debug, trace};

use crate::resolver::error::{ResolveError, compute_suggestions};
use crate::resolver::query::{find_item, first_consistent_item};
use crate::types::{ItemId, Selection, SkuItem, Variation, Variations};

/// A shopper's click on one variation value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pick {
    /// Variation name.
    pub variation: String,
    /// Value name within the variation.
    pub value: String,
    /// Start a fresh selection holding only this value.
    ///
    /// Set by the presentation when the previous combination was already
    /// impossible and the clicked value cannot be combined with it.
    pub resetting: bool,
}

impl Pick {
    /// A regular pick that keeps the other variations.
    pub fn new(variation: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            variation: variation.into(),
            value: value.into(),
            resetting: false,
        }
    }

    /// Mark this pick as clearing every other variation.
    pub fn clearing_others(mut self) -> Self {
        self.resetting = true;
        self
    }
}

/// What a pick on a color variation reports to the rest of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorSignal {
    /// The pick was not on a color variation.
    Untouched,
    /// The color value was removed, or no item carries it.
    Cleared,
    /// The item now representing the chosen color.
    Selected(ItemId),
}

/// The outcome of resolving one pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The new selection, including auto-resolved values.
    pub selection: Selection,
    /// The pick clicked the value that was already selected and cleared it.
    pub removing: bool,
    /// `(variation, value)` pairs filled in because only one value remained.
    pub auto_resolved: Vec<(String, String)>,
    /// Every variation holds a value.
    pub all_selected: bool,
    /// The item matching the complete selection. `None` while incomplete.
    pub item: Option<ItemId>,
    /// The first item in catalog order consistent with the new selection.
    /// Equals `item` when the selection is complete.
    pub representative: Option<ItemId>,
    /// Side channel for color variations.
    pub color_signal: ColorSignal,
}

impl Resolution {
    /// The item to navigate to: the matched item once every variation is
    /// chosen, otherwise nothing.
    pub fn redirect_target(&self) -> Option<&ItemId> {
        self.item.as_ref()
    }
}

/// Apply a pick to `current` and resolve the result against `items`.
///
/// Clicking the value that is already selected removes it. Otherwise the
/// value is set (or, for a resetting pick, set alone) and every still-unset
/// variation for which the consistent items offer a single value receives
/// that value. This auto-resolution is one pass over the tentative selection:
/// values it fills in do not narrow the items further within the same pick.
/// Removals skip auto-resolution so a cleared value stays cleared.
///
/// Returns [`ResolveError::NoMatchingItem`] if the selection becomes complete
/// but no item carries it.
pub fn resolve_pick(
    items: &[SkuItem],
    variations: &Variations,
    current: &Selection,
    pick: &Pick,
) -> Result<Resolution, ResolveError> {
    let variation = lookup(variations, pick)?;
    let current = align(current, variations);

    let removing = current.get(&pick.variation) == Some(pick.value.as_str());

    let mut selection = if pick.resetting {
        let mut fresh = current.cleared();
        fresh.set(&pick.variation, Some(pick.value.clone()));
        fresh
    } else {
        let mut next = current.clone();
        let value = (!removing).then(|| pick.value.clone());
        next.set(&pick.variation, value);
        next
    };

    let auto_resolved = if removing {
        Vec::new()
    } else {
        unique_options(items, variations, &selection)
    };
    for (name, value) in &auto_resolved {
        trace!(variation = %name, value = %value, "Auto-resolved unique option");
        selection.set(name, Some(value.clone()));
    }

    let all_selected = selection.is_complete();
    let item = if all_selected {
        let found = find_item(items, &selection).ok_or_else(|| ResolveError::NoMatchingItem {
            selection: selection.clone(),
        })?;
        Some(found.item_id.clone())
    } else {
        None
    };
    let representative = match &item {
        Some(id) => Some(id.clone()),
        None => first_consistent_item(items, &selection).map(|found| found.item_id.clone()),
    };

    let color_signal = if !variation.is_color() {
        ColorSignal::Untouched
    } else if removing {
        ColorSignal::Cleared
    } else {
        representative
            .clone()
            .map_or(ColorSignal::Cleared, ColorSignal::Selected)
    };

    debug!(
        variation = %pick.variation,
        value = %pick.value,
        removing,
        resetting = pick.resetting,
        all_selected,
        item = ?item,
        "Resolved pick"
    );

    Ok(Resolution {
        selection,
        removing,
        auto_resolved,
        all_selected,
        item,
        representative,
        color_signal,
    })
}

/// Values that are forced for unset variations under `selection`.
///
/// For each unset variation, looks at the items consistent with every set
/// variation; if they all carry the same value, that pair is returned. Items
/// are filtered once against `selection` as given.
pub fn unique_options(
    items: &[SkuItem],
    variations: &Variations,
    selection: &Selection,
) -> Vec<(String, String)> {
    let consistent: Vec<&SkuItem> = items.iter().filter(|item| item.satisfies(selection)).collect();

    selection
        .unset_variations()
        .filter_map(|name| {
            let variation = variations.get(name)?;
            let mut values = consistent.iter().filter_map(|item| item.value_of(name));
            let first = values.next()?;
            let unique = values.all(|value| value == first) && variation.has_value(first);
            unique.then(|| (name.to_string(), first.to_string()))
        })
        .collect()
}

fn lookup<'a>(variations: &'a Variations, pick: &Pick) -> Result<&'a Variation, ResolveError> {
    let Some(variation) = variations.get(&pick.variation) else {
        let available: Vec<String> = variations.names().map(str::to_string).collect();
        return Err(ResolveError::UnknownVariation {
            name: pick.variation.clone(),
            suggestions: compute_suggestions(&pick.variation, &available),
        });
    };
    if !variation.has_value(&pick.value) {
        let available: Vec<String> = variation.value_names().map(str::to_string).collect();
        return Err(ResolveError::UnknownValue {
            variation: pick.variation.clone(),
            value: pick.value.clone(),
            suggestions: compute_suggestions(&pick.value, &available),
        });
    }
    Ok(variation)
}

/// Rebuild `current` so it has exactly one entry per variation and only
/// values those variations define.
fn align(current: &Selection, variations: &Variations) -> Selection {
    let mut aligned = Selection::empty(variations);
    for (name, value) in current.iter_set() {
        if variations.get(name).is_some_and(|v| v.has_value(value)) {
            aligned.set(name, Some(value.to_string()));
        }
    }
    aligned
}
