use serde::Serialize;

use crate::types::{ItemId, Selection, SkuItem, Variations};

/// The item carrying every value of a complete selection.
///
/// Returns the first such item in catalog order, or `None` if the selection
/// is incomplete or unmatched.
pub fn find_item<'a>(items: &'a [SkuItem], selection: &Selection) -> Option<&'a SkuItem> {
    items.iter().find(|item| item.matches_exactly(selection))
}

/// The first item in catalog order consistent with the set variations.
pub fn first_consistent_item<'a>(items: &'a [SkuItem], selection: &Selection) -> Option<&'a SkuItem> {
    items.iter().find(|item| item.satisfies(selection))
}

/// Items still reachable from `selection`.
///
/// When `except` names a variation, its current value is ignored, giving the
/// items that remain if that variation were changed.
pub fn possible_items<'a>(
    items: &'a [SkuItem],
    selection: &Selection,
    except: Option<&str>,
) -> Vec<&'a SkuItem> {
    items
        .iter()
        .filter(|item| match except {
            Some(skip) => item.satisfies_except(selection, skip),
            None => item.satisfies(selection),
        })
        .collect()
}

/// Returns true if choosing `value` for `variation` can match no item given
/// the other variations set in `selection`.
///
/// The variation's own current value is ignored, so alternatives to a chosen
/// value are judged against the rest of the selection only.
pub fn is_impossible(items: &[SkuItem], selection: &Selection, variation: &str, value: &str) -> bool {
    !items.iter().any(|item| {
        item.value_of(variation) == Some(value) && item.satisfies_except(selection, variation)
    })
}

/// Display state of one value under the current selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionState {
    /// Value name.
    pub value: String,
    /// The value is the one currently chosen.
    pub selected: bool,
    /// No item carries this value together with the rest of the selection.
    pub impossible: bool,
    /// The first item that would be reached by choosing this value.
    pub item: Option<ItemId>,
}

/// Display state of every value of one variation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariationOptions {
    /// Variation name.
    pub variation: String,
    /// One entry per value, in display order.
    pub options: Vec<OptionState>,
}

/// Selected and impossible flags for every value of every variation.
///
/// Recomputed from scratch for each selection.
pub fn option_states(
    items: &[SkuItem],
    variations: &Variations,
    selection: &Selection,
) -> Vec<VariationOptions> {
    variations
        .iter()
        .map(|variation| {
            let reachable = possible_items(items, selection, Some(&variation.name));
            let options = variation
                .value_names()
                .map(|value| {
                    let item = reachable
                        .iter()
                        .find(|item| item.value_of(&variation.name) == Some(value))
                        .map(|item| item.item_id.clone());
                    OptionState {
                        value: value.to_string(),
                        selected: selection.get(&variation.name) == Some(value),
                        impossible: item.is_none(),
                        item,
                    }
                })
                .collect();
            VariationOptions {
                variation: variation.name.clone(),
                options,
            }
        })
        .collect()
}
