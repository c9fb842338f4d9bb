//! Catalog snapshots and their conversion from the host product payload.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Image, ItemId, SkuItem, Variation, VariationValue, Variations};

/// Errors that occur while loading a catalog snapshot.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// File I/O error when reading the snapshot.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot is not valid JSON or does not have the expected shape.
    #[error("{origin}:{line}:{column}: {message}")]
    Parse {
        origin: String,
        line: usize,
        column: usize,
        message: String,
    },
}

/// A data problem that breaks the resolver's assumptions about a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CatalogIssue {
    /// Two items carry the same combination of values.
    DuplicateCombination { first: ItemId, second: ItemId },
    /// An item carries a value its variation does not define.
    UndefinedValue {
        item: ItemId,
        variation: String,
        value: String,
    },
    /// An item carries no value for a defined variation.
    MissingVariation { item: ItemId, variation: String },
}

impl std::fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogIssue::DuplicateCombination { first, second } => {
                write!(f, "items '{first}' and '{second}' share the same combination")
            }
            CatalogIssue::UndefinedValue {
                item,
                variation,
                value,
            } => write!(
                f,
                "item '{item}' carries value '{value}' not defined by variation '{variation}'"
            ),
            CatalogIssue::MissingVariation { item, variation } => {
                write!(f, "item '{item}' has no value for variation '{variation}'")
            }
        }
    }
}

/// One variation entry of a raw item: the name and the values it carries.
#[derive(Debug, Clone, Deserialize)]
pub struct RawItemVariation {
    pub name: String,
    #[serde(default)]
    pub values: Vec<String>,
}

/// A raw image entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawImage {
    pub image_url: String,
    #[serde(default)]
    pub image_label: Option<String>,
}

/// An item as delivered by the product payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawItem {
    pub item_id: String,
    #[serde(default)]
    pub variations: Vec<RawItemVariation>,
    #[serde(default)]
    pub images: Vec<RawImage>,
}

impl From<RawItem> for SkuItem {
    /// Takes the first value of each raw variation. Variations without values
    /// are dropped.
    fn from(raw: RawItem) -> Self {
        let values = raw.variations.into_iter().filter_map(|variation| {
            let value = variation.values.into_iter().next()?;
            Some((variation.name, value))
        });
        let images = raw
            .images
            .into_iter()
            .map(|image| Image {
                url: image.image_url,
                label: image.image_label,
            })
            .collect();
        SkuItem::new(raw.item_id, values).with_images(images)
    }
}

/// A catalog snapshot document.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCatalog {
    pub items: Vec<RawItem>,
    /// Variation definitions in display order. Derived from the items when
    /// absent.
    #[serde(default)]
    pub variations: Option<Variations>,
}

/// The items and variations of one product, immutable for a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<SkuItem>,
    variations: Variations,
}

impl Catalog {
    /// Create a catalog from converted items and variation definitions.
    pub fn new(items: Vec<SkuItem>, variations: Variations) -> Self {
        Self { items, variations }
    }

    /// Convert a raw snapshot.
    ///
    /// Without explicit variation definitions, variations and their values
    /// are collected from the items in first-seen order.
    pub fn from_raw(raw: RawCatalog) -> Self {
        let variations = match raw.variations {
            Some(variations) => variations,
            None => derive_variations(&raw.items),
        };
        let items = raw.items.into_iter().map(SkuItem::from).collect();
        Self { items, variations }
    }

    /// Parse a JSON snapshot.
    ///
    /// # Example
    ///
    /// ```
    /// use sku_selector::Catalog;
    ///
    /// let catalog = Catalog::from_json_str(r#"{
    ///     "items": [
    ///         { "itemId": "1", "variations": [{ "name": "Color", "values": ["Red"] }] },
    ///         { "itemId": "2", "variations": [{ "name": "Color", "values": ["Blue"] }] }
    ///     ]
    /// }"#).unwrap();
    /// assert_eq!(catalog.items().len(), 2);
    /// assert_eq!(catalog.variations().len(), 1);
    /// ```
    pub fn from_json_str(content: &str) -> Result<Self, CatalogError> {
        Self::parse(content, "<string>")
    }

    /// Read and parse a JSON snapshot file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    fn parse(content: &str, origin: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_json::from_str(content).map_err(|e| CatalogError::Parse {
            origin: origin.to_string(),
            line: e.line(),
            column: e.column(),
            message: e.to_string(),
        })?;
        Ok(Self::from_raw(raw))
    }

    /// Items in catalog order.
    pub fn items(&self) -> &[SkuItem] {
        &self.items
    }

    /// Variation definitions in display order.
    pub fn variations(&self) -> &Variations {
        &self.variations
    }

    /// Look up an item by id.
    pub fn item(&self, id: &str) -> Option<&SkuItem> {
        self.items.iter().find(|item| item.item_id.as_str() == id)
    }

    /// Report items that break the coverage or uniqueness assumptions.
    pub fn issues(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();
        let mut seen: HashMap<Vec<Option<&str>>, &ItemId> = HashMap::new();

        for item in &self.items {
            for variation in &self.variations {
                match item.value_of(&variation.name) {
                    None => issues.push(CatalogIssue::MissingVariation {
                        item: item.item_id.clone(),
                        variation: variation.name.clone(),
                    }),
                    Some(value) if !variation.has_value(value) => {
                        issues.push(CatalogIssue::UndefinedValue {
                            item: item.item_id.clone(),
                            variation: variation.name.clone(),
                            value: value.to_string(),
                        });
                    }
                    Some(_) => {}
                }
            }

            let key: Vec<Option<&str>> = self
                .variations
                .iter()
                .map(|variation| item.value_of(&variation.name))
                .collect();
            if let Some(first) = seen.get(&key) {
                issues.push(CatalogIssue::DuplicateCombination {
                    first: (*first).clone(),
                    second: item.item_id.clone(),
                });
            } else {
                seen.insert(key, &item.item_id);
            }
        }

        issues
    }
}

fn derive_variations(items: &[RawItem]) -> Variations {
    let mut variations: Vec<Variation> = Vec::new();
    for raw in items {
        for entry in &raw.variations {
            let Some(value) = entry.values.first() else {
                continue;
            };
            let index = match variations.iter().position(|v| v.name == entry.name) {
                Some(index) => index,
                None => {
                    variations.push(Variation::new(entry.name.clone(), Vec::<String>::new()));
                    variations.len() - 1
                }
            };
            let variation = &mut variations[index];
            if !variation.has_value(value) {
                variation.values.push(VariationValue::new(value.clone()));
            }
        }
    }
    Variations::new(variations)
}
