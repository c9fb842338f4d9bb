use std::borrow::Cow;

use serde::Serialize;
use tracing::debug;

use crate::images::{LabelFilter, filter_labeled_images, find_image};
use crate::types::{Image, SkuItem, Variations};

/// The image resolved for one variation value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueImage {
    /// Value name.
    pub value: String,
    /// Matched image, or `None` to render the value as text.
    pub image: Option<Image>,
}

/// Resolved images for every value of one variation, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariationImages {
    /// Variation name.
    pub variation: String,
    /// One entry per variation value.
    pub values: Vec<ValueImage>,
}

impl VariationImages {
    /// Returns true if at least one value has an image.
    pub fn has_images(&self) -> bool {
        self.values.iter().any(|v| v.image.is_some())
    }
}

/// Catalog-wide mapping from `(variation, value)` to an illustrative image.
///
/// Alongside the map, the build pass emits the deduplicated list of image
/// labels it matched so that other page widgets can suppress those images.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageMap {
    variations: Vec<VariationImages>,
    collected_labels: Vec<String>,
}

impl ImageMap {
    /// Derive the image map for a catalog.
    ///
    /// When `filter` is given the catalog runs in thumbnail mode: item images
    /// are first reduced with [`filter_labeled_images`] and each value takes
    /// the first remaining image of its representative item. Otherwise images
    /// are matched by label with [`find_image`].
    ///
    /// The representative item of a value is the first item in catalog order
    /// that carries it.
    pub fn build(items: &[SkuItem], variations: &Variations, filter: Option<&LabelFilter>) -> Self {
        let items: Cow<'_, [SkuItem]> = match filter {
            Some(filter) => Cow::Owned(filter_labeled_images(items, filter)),
            None => Cow::Borrowed(items),
        };
        let thumbnail_mode = filter.is_some();

        let mut collected_labels: Vec<String> = Vec::new();
        let mut result = Vec::with_capacity(variations.len());

        for variation in variations {
            let mut values = Vec::with_capacity(variation.values.len());
            for value in &variation.values {
                let item = items
                    .iter()
                    .find(|item| item.value_of(&variation.name) == Some(value.name.as_str()));
                let image = find_image(
                    item,
                    variation.original_name(),
                    value.original_name(),
                    thumbnail_mode,
                )
                .cloned();

                if let Some(label) = image.as_ref().and_then(Image::label) {
                    if !collected_labels.iter().any(|l| l == label) {
                        collected_labels.push(label.to_string());
                    }
                }

                values.push(ValueImage {
                    value: value.name.clone(),
                    image,
                });
            }
            result.push(VariationImages {
                variation: variation.name.clone(),
                values,
            });
        }

        debug!(
            variations = result.len(),
            labels = collected_labels.len(),
            thumbnail_mode,
            "Built image map"
        );

        Self {
            variations: result,
            collected_labels,
        }
    }

    /// The image resolved for a value, if any.
    pub fn get(&self, variation: &str, value: &str) -> Option<&Image> {
        self.variation(variation)?
            .values
            .iter()
            .find(|v| v.value == value)
            .and_then(|v| v.image.as_ref())
    }

    /// All resolved images of one variation.
    pub fn variation(&self, name: &str) -> Option<&VariationImages> {
        self.variations.iter().find(|v| v.variation == name)
    }

    /// Iterate over variations in display order.
    pub fn iter(&self) -> impl Iterator<Item = &VariationImages> {
        self.variations.iter()
    }

    /// Labels of every matched image, deduplicated in first-seen order.
    pub fn collected_labels(&self) -> &[String] {
        &self.collected_labels
    }

    /// An order-independent key for the collected labels, used to detect
    /// when the label set changed between builds.
    pub fn labels_key(&self) -> String {
        let mut sorted: Vec<&str> = self.collected_labels.iter().map(String::as_str).collect();
        sorted.sort_unstable();
        sorted.join("|")
    }
}
