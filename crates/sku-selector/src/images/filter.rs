use regex::{Regex, RegexBuilder};

use crate::config::ConfigError;
use crate::types::SkuItem;

/// A case-insensitive pattern selecting the images that represent variations.
///
/// Built from the `thumbnailImage` configuration string.
#[derive(Debug, Clone)]
pub struct LabelFilter {
    regex: Regex,
}

impl LabelFilter {
    /// Compile a label pattern.
    ///
    /// Returns an error if the pattern is not a valid regular expression.
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| ConfigError::InvalidLabelPattern {
                pattern: pattern.to_string(),
                source,
            })?;
        Ok(Self { regex })
    }

    /// The source pattern.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Returns true if `label` is present and matches the pattern.
    pub fn matches(&self, label: Option<&str>) -> bool {
        label.is_some_and(|label| self.regex.is_match(label))
    }
}

/// Reduce each item's images to those whose label matches `filter`.
///
/// Items with no matching image keep their original image list, including
/// unlabeled images.
pub fn filter_labeled_images(items: &[SkuItem], filter: &LabelFilter) -> Vec<SkuItem> {
    items
        .iter()
        .map(|item| {
            let has_variation_image = item.images.iter().any(|image| filter.matches(image.label()));
            if !has_variation_image {
                return item.clone();
            }
            let images = item
                .images
                .iter()
                .filter(|image| filter.matches(image.label()))
                .cloned()
                .collect();
            item.clone().with_images(images)
        })
        .collect()
}
