use crate::text::normalize_label;
use crate::types::{Image, SkuItem};

/// Find the image of `item` that illustrates one variation value.
///
/// When `thumbnail_mode` is set the first image is returned unconditionally.
/// Otherwise labels are compared after [`normalize_label`]; an image matches
/// when its label equals the value alone, equals `"<variation> <value>"`, or
/// starts with `"<variation> <value> "`. The exact value match is checked
/// first for each image, and images are scanned in order.
///
/// Returns `None` when nothing matches. Callers render the value as text in
/// that case.
///
/// # Example
///
/// ```
/// use sku_selector::{Image, SkuItem, find_image};
///
/// let item = SkuItem::new("1", [("Cor", "Tampo")]).with_images(vec![
///     Image::labeled("base.jpg", "Cor Base Preto"),
///     Image::labeled("top.jpg", "Cor Tampo Branco"),
/// ]);
/// let image = find_image(Some(&item), "Cor", "Tampo", false);
/// assert_eq!(image.map(|i| i.url.as_str()), Some("top.jpg"));
/// ```
pub fn find_image<'a>(
    item: Option<&'a SkuItem>,
    variation_original_name: &str,
    value_original_name: &str,
    thumbnail_mode: bool,
) -> Option<&'a Image> {
    let images = &item?.images;
    if images.is_empty() {
        return None;
    }

    if thumbnail_mode {
        return images.first();
    }

    let variation = normalize_label(variation_original_name);
    let value = normalize_label(value_original_name);
    let combined = format!("{variation} {value}").trim().to_string();

    images
        .iter()
        .find(|image| label_matches(image, &value, &combined))
}

fn label_matches(image: &Image, value: &str, combined: &str) -> bool {
    let Some(label) = image.label() else {
        return false;
    };
    let label = normalize_label(label);
    if label.is_empty() {
        return false;
    }

    if !value.is_empty() && label == value {
        return true;
    }

    if combined.is_empty() {
        return false;
    }

    label == combined
        || label
            .strip_prefix(combined)
            .is_some_and(|rest| rest.starts_with(' '))
}
