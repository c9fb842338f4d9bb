//! The narrow interface between the coordinator and the surrounding page.

use crate::types::ItemId;

/// A notification for the shared product state of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductEvent {
    /// Show or hide the loading indicator for the product's active item.
    SetLoadingItem(bool),
    /// Whether every variation currently holds a value.
    VariationsSelected { all_selected: bool },
    /// The item representing the chosen color, or `None` when the color was
    /// removed.
    SelectImageVariation(Option<ItemId>),
    /// Image labels already shown by the selector, to be hidden elsewhere.
    HideImageLabels(Vec<String>),
}

/// A request to reflect the selection in the page location or the
/// integrator's callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Replace the SKU named by the shareable location. `None` clears it.
    SetQuerySku(Option<ItemId>),
    /// Report the selected SKU to the integrator's callback instead.
    SkuSelected(Option<ItemId>),
}

/// Receiver of the coordinator's outputs.
///
/// Passed explicitly to every coordinator operation that produces output, so
/// a coordinator cannot run without somewhere to report to.
pub trait SelectorHost {
    /// Deliver a product event.
    fn dispatch(&mut self, event: ProductEvent);

    /// Deliver a navigation request.
    fn navigate(&mut self, navigation: Navigation);
}

/// A host that records every output in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingHost {
    /// Product events in dispatch order.
    pub events: Vec<ProductEvent>,
    /// Navigation requests in order.
    pub navigations: Vec<Navigation>,
}

impl RecordingHost {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain and return everything recorded so far.
    pub fn take(&mut self) -> (Vec<ProductEvent>, Vec<Navigation>) {
        (
            std::mem::take(&mut self.events),
            std::mem::take(&mut self.navigations),
        )
    }
}

impl SelectorHost for RecordingHost {
    fn dispatch(&mut self, event: ProductEvent) {
        self.events.push(event);
    }

    fn navigate(&mut self, navigation: Navigation) {
        self.navigations.push(navigation);
    }
}
