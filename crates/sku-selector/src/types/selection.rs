use serde::ser::{Serialize, SerializeMap, Serializer};

use super::{SkuItem, Variations};

/// The shopper's current choice for every variation.
///
/// A selection always holds exactly one entry per variation of the catalog it
/// was built from, in variation display order. Each entry is either a value
/// name that exists in that variation or unset. Selections are replaced
/// wholesale on every transition rather than edited in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    entries: Vec<(String, Option<String>)>,
}

impl Selection {
    /// A selection with every variation unset.
    pub fn empty(variations: &Variations) -> Self {
        Self {
            entries: variations.names().map(|name| (name.to_string(), None)).collect(),
        }
    }

    /// A selection carrying `item`'s value for every variation.
    ///
    /// Variations the item does not carry, or carries with a value the
    /// variation does not define, stay unset.
    pub fn from_item(item: &SkuItem, variations: &Variations) -> Self {
        Self {
            entries: variations
                .iter()
                .map(|variation| {
                    let value = item
                        .value_of(&variation.name)
                        .filter(|value| variation.has_value(value))
                        .map(str::to_string);
                    (variation.name.clone(), value)
                })
                .collect(),
        }
    }

    /// The value selected for `variation`, or `None` if unset or unknown.
    pub fn get(&self, variation: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == variation)
            .and_then(|(_, value)| value.as_deref())
    }

    /// Returns true if the selection has an entry for `variation`.
    pub fn contains(&self, variation: &str) -> bool {
        self.entries.iter().any(|(name, _)| name == variation)
    }

    /// Returns true if `variation` currently holds a value.
    pub fn is_set(&self, variation: &str) -> bool {
        self.get(variation).is_some()
    }

    /// Iterate over every entry in variation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_deref()))
    }

    /// Iterate over the entries that hold a value.
    pub fn iter_set(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter()
            .filter_map(|(name, value)| value.map(|value| (name, value)))
    }

    /// Names of the variations that are still unset.
    pub fn unset_variations(&self) -> impl Iterator<Item = &str> {
        self.iter()
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| name)
    }

    /// Number of entries, one per variation.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the selection covers no variations.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of variations that hold a value.
    pub fn selected_count(&self) -> usize {
        self.iter_set().count()
    }

    /// Returns true if every variation holds a value.
    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(|(_, value)| value.is_some())
    }

    /// Set or clear an existing entry. Unknown variations are ignored.
    pub(crate) fn set(&mut self, variation: &str, value: Option<String>) {
        if let Some(entry) = self.entries.iter_mut().find(|(name, _)| name == variation) {
            entry.1 = value;
        }
    }

    /// A copy of this selection with every entry unset.
    pub(crate) fn cleared(&self) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .map(|(name, _)| (name.clone(), None))
                .collect(),
        }
    }
}

impl Serialize for Selection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(name, value)| format!("{name}={}", value.unwrap_or("-")))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}
