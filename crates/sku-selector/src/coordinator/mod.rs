//! Orchestration of the resolver, the image map and the host page.
//!
//! The [`Coordinator`] owns the selection and the image map for one catalog
//! and turns each user pick into outputs for a [`SelectorHost`]. Every
//! operation computes its full result before touching state or dispatching,
//! so a failed pick leaves the coordinator unchanged.

mod host;

pub use host::{Navigation, ProductEvent, RecordingHost, SelectorHost};

use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::config::{ConfigError, SelectorConfig};
use crate::images::{ImageMap, LabelFilter};
use crate::resolver::{
    ColorSignal, Pick, Resolution, ResolveError, VariationOptions, initial_selection,
    is_impossible, option_states, resolve_pick,
};
use crate::types::{ItemId, Selection};

/// Selection state and derived data for one product on a page.
///
/// # Example
///
/// ```
/// use sku_selector::{
///     Catalog, Coordinator, Navigation, Pick, RecordingHost, SelectorConfig, SkuItem,
///     Variation, Variations,
/// };
///
/// let catalog = Catalog::new(
///     vec![
///         SkuItem::new("1", [("Color", "Red"), ("Size", "M")]),
///         SkuItem::new("2", [("Color", "Blue"), ("Size", "L")]),
///     ],
///     Variations::new(vec![
///         Variation::new("Color", ["Red", "Blue"]),
///         Variation::new("Size", ["M", "L"]),
///     ]),
/// );
/// let mut host = RecordingHost::new();
/// let mut coordinator =
///     Coordinator::new(catalog, SelectorConfig::default(), None, false, &mut host).unwrap();
///
/// let resolution = coordinator.select(&Pick::new("Color", "Blue"), &mut host).unwrap();
/// assert_eq!(resolution.item.as_deref(), Some("2"));
/// assert_eq!(
///     host.navigations.last(),
///     Some(&Navigation::SetQuerySku(Some("2".into())))
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Coordinator {
    catalog: Catalog,
    config: SelectorConfig,
    label_filter: Option<LabelFilter>,
    image_map: ImageMap,
    selection: Selection,
    active_item: Option<ItemId>,
    /// Key of the label set last sent to the host.
    published_labels: String,
}

impl Coordinator {
    /// Create a coordinator for `catalog`.
    ///
    /// Builds the image map, computes the initial selection from
    /// `active_item` and the configured mode, and reports the collected image
    /// labels and the all-selected state to `host`. When the integrator
    /// handles selections through a callback, the active item is reported to
    /// it once.
    ///
    /// Returns an error if the configured label pattern does not compile.
    pub fn new(
        catalog: Catalog,
        config: SelectorConfig,
        active_item: Option<ItemId>,
        sku_pinned: bool,
        host: &mut impl SelectorHost,
    ) -> Result<Self, ConfigError> {
        let label_filter = config.label_filter()?;
        let image_map = ImageMap::build(
            catalog.items(),
            catalog.variations(),
            label_filter.as_ref(),
        );
        report_issues(&catalog);

        let mut coordinator = Self {
            catalog,
            config,
            label_filter,
            image_map,
            selection: Selection::default(),
            active_item: None,
            published_labels: String::new(),
        };
        coordinator.active_item = coordinator.known_item(active_item);
        coordinator.selection = coordinator.initial(sku_pinned);
        coordinator.publish_labels(host);
        coordinator.report_all_selected(host);

        if coordinator.config.notify_sku_selected {
            if let Some(active) = &coordinator.active_item {
                host.navigate(Navigation::SkuSelected(Some(active.clone())));
            }
        }

        Ok(coordinator)
    }

    /// The catalog this coordinator resolves against.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The active configuration.
    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// The current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The image map for the current catalog and label filter.
    pub fn image_map(&self) -> &ImageMap {
        &self.image_map
    }

    /// The item the page currently shows, if known.
    pub fn active_item(&self) -> Option<&ItemId> {
        self.active_item.as_ref()
    }

    /// Returns true if every variation holds a value.
    pub fn all_selected(&self) -> bool {
        self.selection.is_complete()
    }

    /// Selected and impossible flags for every value under the current
    /// selection.
    pub fn option_states(&self) -> Vec<VariationOptions> {
        option_states(
            self.catalog.items(),
            self.catalog.variations(),
            &self.selection,
        )
    }

    /// Returns true if `value` cannot be combined with the rest of the
    /// current selection.
    pub fn is_impossible(&self, variation: &str, value: &str) -> bool {
        is_impossible(self.catalog.items(), &self.selection, variation, value)
    }

    /// Apply a user pick.
    ///
    /// A pick on the first variation whose value cannot be combined with the
    /// rest of the selection starts a fresh selection holding only that value,
    /// as if [`Pick::clearing_others`] had been set.
    ///
    /// On success the new selection replaces the old one and the host
    /// receives, in order: loading hints, the color signal for color
    /// variations, the all-selected state and at most one navigation
    /// request. On error nothing changes and nothing is reported.
    pub fn select(
        &mut self,
        pick: &Pick,
        host: &mut impl SelectorHost,
    ) -> Result<Resolution, ResolveError> {
        let pick = self.effective_pick(pick);
        let resolution = resolve_pick(
            self.catalog.items(),
            self.catalog.variations(),
            &self.selection,
            &pick,
        )
        .inspect_err(|e| warn!(error = %e, "Pick rejected"))?;

        let target = resolution.representative.as_ref();
        if let Some(active) = &self.active_item {
            if target == Some(active) {
                host.dispatch(ProductEvent::SetLoadingItem(false));
            } else if !resolution.removing {
                host.dispatch(ProductEvent::SetLoadingItem(true));
            }
        }

        let is_color = match &resolution.color_signal {
            ColorSignal::Untouched => false,
            ColorSignal::Cleared => {
                host.dispatch(ProductEvent::SelectImageVariation(None));
                true
            }
            ColorSignal::Selected(id) => {
                host.dispatch(ProductEvent::SelectImageVariation(Some(id.clone())));
                true
            }
        };

        if !resolution.all_selected {
            host.dispatch(ProductEvent::SetLoadingItem(false));
        }

        self.selection = resolution.selection.clone();
        self.report_all_selected(host);

        let target = resolution.redirect_target().cloned();
        if self.config.notify_sku_selected {
            host.navigate(Navigation::SkuSelected(target));
        } else if !resolution.removing && (resolution.all_selected || is_color) {
            host.navigate(Navigation::SetQuerySku(target));
        }

        Ok(resolution)
    }

    /// Replace the configuration, recompiling the label filter and rebuilding
    /// the image map. The selection is kept.
    ///
    /// Returns an error and changes nothing if the new label pattern does not
    /// compile.
    pub fn replace_config(
        &mut self,
        config: SelectorConfig,
        host: &mut impl SelectorHost,
    ) -> Result<(), ConfigError> {
        let label_filter = config.label_filter()?;
        self.image_map = ImageMap::build(
            self.catalog.items(),
            self.catalog.variations(),
            label_filter.as_ref(),
        );
        self.label_filter = label_filter;
        self.config = config;
        debug!(thumbnail = ?self.config.thumbnail_image, "Configuration replaced");
        self.publish_labels(host);
        Ok(())
    }

    /// Re-initialize the selection after the page's active item changed.
    pub fn sync_active_item(
        &mut self,
        active_item: Option<ItemId>,
        sku_pinned: bool,
        host: &mut impl SelectorHost,
    ) {
        self.active_item = self.known_item(active_item);
        self.selection = self.initial(sku_pinned);
        debug!(selection = %self.selection, "Selection re-initialized");
        self.report_all_selected(host);
    }

    /// Replace the catalog, rebuilding the image map and the selection.
    pub fn replace_catalog(
        &mut self,
        catalog: Catalog,
        active_item: Option<ItemId>,
        sku_pinned: bool,
        host: &mut impl SelectorHost,
    ) {
        report_issues(&catalog);
        self.image_map = ImageMap::build(
            catalog.items(),
            catalog.variations(),
            self.label_filter.as_ref(),
        );
        self.catalog = catalog;
        self.publish_labels(host);
        self.sync_active_item(active_item, sku_pinned, host);
    }

    /// Turn a pick on the first variation into a resetting one when its value
    /// is impossible under the current selection.
    fn effective_pick(&self, pick: &Pick) -> Pick {
        let on_first = self
            .catalog
            .variations()
            .iter()
            .next()
            .is_some_and(|first| first.name == pick.variation && first.has_value(&pick.value));
        if pick.resetting
            || !on_first
            || !is_impossible(
                self.catalog.items(),
                &self.selection,
                &pick.variation,
                &pick.value,
            )
        {
            return pick.clone();
        }
        debug!(
            variation = %pick.variation,
            value = %pick.value,
            "Impossible first value resets the selection"
        );
        pick.clone().clearing_others()
    }

    fn initial(&self, sku_pinned: bool) -> Selection {
        let active = self
            .active_item
            .as_ref()
            .and_then(|id| self.catalog.item(id));
        initial_selection(
            self.catalog.variations(),
            active,
            self.config.initial_selection,
            sku_pinned,
        )
    }

    fn known_item(&self, id: Option<ItemId>) -> Option<ItemId> {
        let id = id?;
        if self.catalog.item(&id).is_some() {
            Some(id)
        } else {
            warn!(item = %id, "Active item is not in the catalog");
            None
        }
    }

    fn report_all_selected(&self, host: &mut impl SelectorHost) {
        host.dispatch(ProductEvent::VariationsSelected {
            all_selected: self.selection.is_complete(),
        });
    }

    /// Send the collected labels to the host if the set changed since the
    /// last time they were sent.
    fn publish_labels(&mut self, host: &mut impl SelectorHost) {
        let labels = self.image_map.collected_labels();
        if labels.is_empty() {
            return;
        }
        let key = self.image_map.labels_key();
        if key == self.published_labels {
            return;
        }
        debug!(count = labels.len(), ?labels, "Publishing image labels");
        host.dispatch(ProductEvent::HideImageLabels(labels.to_vec()));
        self.published_labels = key;
    }
}

fn report_issues(catalog: &Catalog) {
    for issue in catalog.issues() {
        warn!(%issue, "Inconsistent catalog");
    }
}
