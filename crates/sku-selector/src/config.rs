//! Integrator-facing configuration of the selector.

use std::convert::Infallible;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use bon::Builder;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::images::LabelFilter;

/// Errors in selector configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The `thumbnailImage` label pattern is not a valid regular expression.
    #[error("invalid thumbnail label pattern '{pattern}': {source}")]
    InvalidLabelPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The configuration document could not be parsed.
    #[error("invalid selector configuration: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },
}

/// How the selection is pre-populated when the selector is created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum InitialSelection {
    /// Every variation starts unset. Unrecognized modes also map here.
    Unset,
    /// Every variation starts with the active item's value.
    #[default]
    Complete,
    /// Only the color variation starts with the active item's value.
    Image,
}

impl FromStr for InitialSelection {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "complete" => InitialSelection::Complete,
            "image" => InitialSelection::Image,
            _ => InitialSelection::Unset,
        })
    }
}

impl From<String> for InitialSelection {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(mode) => mode,
            Err(never) => match never {},
        }
    }
}

impl Display for InitialSelection {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            InitialSelection::Unset => "unset",
            InitialSelection::Complete => "complete",
            InitialSelection::Image => "image",
        };
        write!(f, "{name}")
    }
}

/// Selector options recognized by the engine.
///
/// # Example
///
/// ```
/// use sku_selector::{InitialSelection, SelectorConfig};
///
/// let config = SelectorConfig::from_json_str(
///     r#"{ "initialSelection": "image", "thumbnailImage": "^cor" }"#,
/// ).unwrap();
/// assert_eq!(config.initial_selection, InitialSelection::Image);
/// assert!(config.label_filter().unwrap().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectorConfig {
    /// Starting state of the selection.
    #[builder(default)]
    pub initial_selection: InitialSelection,

    /// Label pattern for variation images.
    ///
    /// When present the image map runs in thumbnail mode: item images are
    /// reduced to those whose label matches, and each value shows the first
    /// remaining image of its item.
    pub thumbnail_image: Option<String>,

    /// Presentation hint for hover previews. Not consumed by the engine.
    #[builder(default)]
    pub show_image_popper: bool,

    /// Report selections through a callback instead of rewriting the
    /// location's SKU.
    #[builder(default)]
    pub notify_sku_selected: bool,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        SelectorConfig::builder().build()
    }
}

impl SelectorConfig {
    /// Parse a JSON configuration document. Missing keys take their defaults.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|source| ConfigError::Json { source })
    }

    /// Compile the thumbnail label pattern, if configured.
    pub fn label_filter(&self) -> Result<Option<LabelFilter>, ConfigError> {
        self.thumbnail_image
            .as_deref()
            .filter(|pattern| !pattern.is_empty())
            .map(LabelFilter::new)
            .transpose()
    }
}
