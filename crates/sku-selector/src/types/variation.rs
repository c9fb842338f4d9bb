use std::slice::Iter;

use serde::{Deserialize, Serialize};

use crate::text::is_color;

/// One selectable value of a variation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariationValue {
    /// Lookup key, unique within its variation.
    pub name: String,

    /// Display form used by image-label heuristics when it differs from
    /// `name`.
    #[serde(default)]
    pub original_name: Option<String>,
}

impl VariationValue {
    /// Create a value whose display form is its name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            original_name: None,
        }
    }

    /// Create a value with a distinct display form.
    pub fn with_original_name(name: impl Into<String>, original_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            original_name: Some(original_name.into()),
        }
    }

    /// The display form, falling back to the lookup name.
    pub fn original_name(&self) -> &str {
        self.original_name.as_deref().unwrap_or(&self.name)
    }
}

/// A named product axis such as "Color" or "Size".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variation {
    /// Stable internal identifier used as the key in items and selections.
    pub name: String,

    /// Source name used for classification and image-label matching.
    #[serde(default)]
    pub original_name: String,

    /// Values in display order.
    pub values: Vec<VariationValue>,
}

impl Variation {
    /// Create a variation whose original name equals its name.
    pub fn new<I, V>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let name = name.into();
        Self {
            original_name: name.clone(),
            name,
            values: values.into_iter().map(VariationValue::new).collect(),
        }
    }

    /// Replace the original name, returning the updated variation.
    pub fn with_original_name(mut self, original_name: impl Into<String>) -> Self {
        self.original_name = original_name.into();
        self
    }

    /// The source name, falling back to `name` when none was given.
    pub fn original_name(&self) -> &str {
        if self.original_name.is_empty() {
            &self.name
        } else {
            &self.original_name
        }
    }

    /// Look up a value by name.
    pub fn value(&self, name: &str) -> Option<&VariationValue> {
        self.values.iter().find(|v| v.name == name)
    }

    /// Returns true if `name` is one of this variation's values.
    pub fn has_value(&self, name: &str) -> bool {
        self.value(name).is_some()
    }

    /// Value names in display order.
    pub fn value_names(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|v| v.name.as_str())
    }

    /// Returns true if either the internal or the source name denotes a
    /// color axis.
    pub fn is_color(&self) -> bool {
        is_color(&self.name) || is_color(self.original_name())
    }
}

/// The ordered set of variations defined for a product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Variations(Vec<Variation>);

impl Variations {
    /// Create from variations in display order.
    pub fn new(variations: Vec<Variation>) -> Self {
        Self(variations)
    }

    /// Look up a variation by name.
    pub fn get(&self, name: &str) -> Option<&Variation> {
        self.0.iter().find(|v| v.name == name)
    }

    /// Returns true if a variation with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate over variations in display order.
    pub fn iter(&self) -> Iter<'_, Variation> {
        self.0.iter()
    }

    /// Variation names in display order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|v| v.name.as_str())
    }

    /// Number of variations.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no variations are defined.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The first color-classified variation, if any.
    pub fn color_variation(&self) -> Option<&Variation> {
        self.0.iter().find(|v| v.is_color())
    }
}

impl FromIterator<Variation> for Variations {
    fn from_iter<T: IntoIterator<Item = Variation>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Variations {
    type Item = &'a Variation;
    type IntoIter = Iter<'a, Variation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
