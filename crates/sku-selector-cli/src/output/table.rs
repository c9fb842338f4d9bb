//! Table formatting utilities for CLI output.

use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use sku_selector::{resize_image_url, ImageMap, VariationOptions};

/// One classified variation name.
pub struct ClassifiedName {
    pub name: String,
    pub is_color: bool,
    pub language: Option<&'static str>,
    pub normalized: String,
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

/// Format classification results.
pub fn format_classify_table(names: &[ClassifiedName]) -> Table {
    let mut table = new_table(vec!["Name", "Color", "Language", "Normalized"]);
    for name in names {
        table.add_row(vec![
            Cell::new(&name.name),
            if name.is_color {
                Cell::new("yes").fg(Color::Green)
            } else {
                Cell::new("no")
            },
            Cell::new(name.language.unwrap_or("-")),
            Cell::new(&name.normalized),
        ]);
    }
    table
}

/// Format the image map, one row per variation value.
///
/// URLs are rewritten for the requested size when either dimension is given.
pub fn format_image_table(map: &ImageMap, width: Option<u32>, height: Option<u32>) -> Table {
    let mut table = new_table(vec!["Variation", "Value", "Image", "Label"]);
    for variation in map.iter() {
        for value in &variation.values {
            let (url, label) = match &value.image {
                Some(image) => {
                    let url = if width.is_some() || height.is_some() {
                        resize_image_url(&image.url, width, height)
                    } else {
                        image.url.clone()
                    };
                    (url, image.label().unwrap_or("-").to_string())
                }
                None => ("-".to_string(), "-".to_string()),
            };
            table.add_row(vec![
                variation.variation.clone(),
                value.value.clone(),
                url,
                label,
            ]);
        }
    }
    table
}

/// Format option states under a selection.
pub fn format_option_table(states: &[VariationOptions]) -> Table {
    let mut table = new_table(vec!["Variation", "Value", "State", "Item"]);
    for variation in states {
        for option in &variation.options {
            let state = if option.selected {
                Cell::new("selected").fg(Color::Green)
            } else if option.impossible {
                Cell::new("impossible").fg(Color::DarkGrey)
            } else {
                Cell::new("available")
            };
            table.add_row(vec![
                Cell::new(&variation.variation),
                Cell::new(&option.value),
                state,
                Cell::new(option.item.as_deref().unwrap_or("-")),
            ]);
        }
    }
    table
}

/// Format keyword tables, one row per language.
pub fn format_keyword_table(rows: &[(&str, &[&str])]) -> Table {
    let mut table = new_table(vec!["Language", "Keywords"]);
    for (lang, keywords) in rows {
        table.add_row(vec![lang.to_string(), keywords.join(", ")]);
    }
    table
}
