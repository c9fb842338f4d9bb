use std::collections::BTreeMap;

use bon::Builder;
use serde::{Deserialize, Serialize};

use super::{ItemId, Selection};

/// An image attached to a SKU item.
///
/// The label is free text entered by catalog editors, in any language, and
/// is the only signal used to associate an image with a variation value.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// Absolute or scheme-relative image URL.
    pub url: String,

    /// Optional editorial label, e.g. "Cor Tampo Branco".
    #[serde(default)]
    pub label: Option<String>,
}

impl Image {
    /// Create an image without a label.
    pub fn new(url: impl Into<String>) -> Self {
        Image::builder().url(url.into()).build()
    }

    /// Create an image carrying a label.
    pub fn labeled(url: impl Into<String>, label: impl Into<String>) -> Self {
        Image::builder()
            .url(url.into())
            .label(label.into())
            .build()
    }

    /// The label, if present and not blank.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref().filter(|label| !label.is_empty())
    }
}

/// One purchasable catalog entry.
///
/// Each item carries exactly one value per variation it participates in.
/// The combination of values is expected to be unique across the catalog;
/// the resolver relies on this to pick a single match but does not enforce
/// it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkuItem {
    /// Catalog identifier.
    pub item_id: ItemId,

    /// Variation name to value name.
    pub variation_values: BTreeMap<String, String>,

    /// Images in display order, possibly empty.
    #[serde(default)]
    pub images: Vec<Image>,
}

impl SkuItem {
    /// Create an item from `(variation, value)` pairs, without images.
    pub fn new<I, K, V>(item_id: impl Into<ItemId>, values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            item_id: item_id.into(),
            variation_values: values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            images: Vec::new(),
        }
    }

    /// Replace the image list, returning the updated item.
    pub fn with_images(mut self, images: Vec<Image>) -> Self {
        self.images = images;
        self
    }

    /// The value this item carries for `variation`, if any.
    pub fn value_of(&self, variation: &str) -> Option<&str> {
        self.variation_values.get(variation).map(String::as_str)
    }

    /// Returns true if this item agrees with every variation set in
    /// `selection`. Unset variations place no constraint.
    pub fn satisfies(&self, selection: &Selection) -> bool {
        selection
            .iter_set()
            .all(|(variation, value)| self.value_of(variation) == Some(value))
    }

    /// Like [`SkuItem::satisfies`], ignoring the entry for `skip`.
    pub fn satisfies_except(&self, selection: &Selection, skip: &str) -> bool {
        selection
            .iter_set()
            .filter(|(variation, _)| *variation != skip)
            .all(|(variation, value)| self.value_of(variation) == Some(value))
    }

    /// Returns true if this item carries exactly the value of every variation
    /// in `selection`, which must be complete for this to be meaningful.
    pub fn matches_exactly(&self, selection: &Selection) -> bool {
        selection
            .iter()
            .all(|(variation, value)| value.is_some() && self.value_of(variation) == value)
    }
}
