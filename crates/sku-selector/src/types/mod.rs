mod item;
mod item_id;
mod selection;
mod variation;

pub use item::{Image, SkuItem};
pub use item_id::ItemId;
pub use selection::Selection;
pub use variation::{Variation, VariationValue, Variations};
