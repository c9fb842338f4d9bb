//! Tests for catalog snapshot loading and consistency reporting.

use std::io::Write;

use sku_selector::{Catalog, CatalogError, CatalogIssue, ItemId, SkuItem, Variation, Variations};
use tempfile::NamedTempFile;

const SNAPSHOT: &str = r#"{
    "items": [
        {
            "itemId": "10",
            "variations": [
                { "name": "Cor", "values": ["Branco"] },
                { "name": "Tamanho", "values": ["P"] }
            ],
            "images": [
                { "imageUrl": "10-a.jpg", "imageLabel": "Cor Branco" },
                { "imageUrl": "10-b.jpg" }
            ]
        },
        {
            "itemId": "11",
            "variations": [
                { "name": "Cor", "values": ["Preto"] },
                { "name": "Tamanho", "values": ["P", "G"] }
            ]
        },
        {
            "itemId": "12",
            "variations": [
                { "name": "Tamanho", "values": ["G"] },
                { "name": "Cor", "values": ["Branco"] }
            ]
        }
    ]
}"#;

// =========================================================================
// Parsing
// =========================================================================

#[test]
fn snapshot_converts_items() {
    let catalog = Catalog::from_json_str(SNAPSHOT).unwrap();

    assert_eq!(catalog.items().len(), 3);
    let first = catalog.item("10").unwrap();
    assert_eq!(first.value_of("Cor"), Some("Branco"));
    assert_eq!(first.images.len(), 2);
    assert_eq!(first.images[0].label(), Some("Cor Branco"));
    assert_eq!(first.images[1].label(), None);
}

#[test]
fn item_takes_first_value_of_each_variation() {
    let catalog = Catalog::from_json_str(SNAPSHOT).unwrap();
    assert_eq!(catalog.item("11").unwrap().value_of("Tamanho"), Some("P"));
}

#[test]
fn derived_variations_keep_first_seen_order() {
    let catalog = Catalog::from_json_str(SNAPSHOT).unwrap();

    let names: Vec<&str> = catalog.variations().names().collect();
    assert_eq!(names, ["Cor", "Tamanho"]);
    let colors: Vec<&str> = catalog.variations().get("Cor").unwrap().value_names().collect();
    assert_eq!(colors, ["Branco", "Preto"]);
    let sizes: Vec<&str> = catalog
        .variations()
        .get("Tamanho")
        .unwrap()
        .value_names()
        .collect();
    assert_eq!(sizes, ["P", "G"]);
}

#[test]
fn explicit_variations_are_used_as_given() {
    let catalog = Catalog::from_json_str(
        r#"{
            "items": [
                { "itemId": "1", "variations": [{ "name": "attr-1", "values": ["Azul"] }] }
            ],
            "variations": [
                {
                    "name": "attr-1",
                    "originalName": "Cor",
                    "values": [
                        { "name": "Verde" },
                        { "name": "Azul", "originalName": "Azul Céu" }
                    ]
                }
            ]
        }"#,
    )
    .unwrap();

    let variation = catalog.variations().get("attr-1").unwrap();
    assert_eq!(variation.original_name(), "Cor");
    assert!(variation.is_color());
    assert_eq!(variation.value("Azul").unwrap().original_name(), "Azul Céu");
    assert_eq!(variation.value("Verde").unwrap().original_name(), "Verde");
    assert_eq!(catalog.variations().color_variation(), Some(variation));
}

#[test]
fn unknown_item_lookup_returns_none() {
    let catalog = Catalog::from_json_str(SNAPSHOT).unwrap();
    assert!(catalog.item("99").is_none());
}

#[test]
fn malformed_snapshot_reports_position() {
    let err = Catalog::from_json_str("{\n  \"items\": [\n    { \"itemId\": }\n  ]\n}").unwrap_err();

    match err {
        CatalogError::Parse {
            origin,
            line,
            column,
            ..
        } => {
            assert_eq!(origin, "<string>");
            assert_eq!(line, 3);
            assert!(column > 0);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_items_key_is_a_parse_error() {
    let err = Catalog::from_json_str("{}").unwrap_err();
    assert!(matches!(err, CatalogError::Parse { .. }));
    assert!(err.to_string().starts_with("<string>:"));
}

// =========================================================================
// Files
// =========================================================================

#[test]
fn load_snapshot_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{SNAPSHOT}").unwrap();
    file.flush().unwrap();

    let catalog = Catalog::load(file.path()).unwrap();
    assert_eq!(catalog, Catalog::from_json_str(SNAPSHOT).unwrap());
}

#[test]
fn load_reports_file_as_origin() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();
    file.flush().unwrap();

    let err = Catalog::load(file.path()).unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with(&file.path().display().to_string()));
}

#[test]
fn load_missing_file_is_io_error() {
    let err = Catalog::load("/nonexistent/path/catalog.json").unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/path/catalog.json"));
}

// =========================================================================
// Consistency
// =========================================================================

#[test]
fn consistent_catalog_has_no_issues() {
    let catalog = Catalog::from_json_str(SNAPSHOT).unwrap();
    assert!(catalog.issues().is_empty());
}

#[test]
fn issues_report_duplicates_and_gaps() {
    let catalog = Catalog::new(
        vec![
            SkuItem::new("1", [("Color", "Red"), ("Size", "M")]),
            SkuItem::new("2", [("Color", "Red"), ("Size", "M")]),
            SkuItem::new("3", [("Color", "Teal"), ("Size", "M")]),
            SkuItem::new("4", [("Color", "Red")]),
        ],
        Variations::new(vec![
            Variation::new("Color", ["Red"]),
            Variation::new("Size", ["M", "L"]),
        ]),
    );

    let issues = catalog.issues();

    assert_eq!(
        issues,
        vec![
            CatalogIssue::DuplicateCombination {
                first: ItemId::new("1"),
                second: ItemId::new("2"),
            },
            CatalogIssue::UndefinedValue {
                item: ItemId::new("3"),
                variation: "Color".to_string(),
                value: "Teal".to_string(),
            },
            CatalogIssue::MissingVariation {
                item: ItemId::new("4"),
                variation: "Size".to_string(),
            },
        ]
    );
    assert_eq!(
        issues[0].to_string(),
        "items '1' and '2' share the same combination"
    );
}

#[test]
fn dash_value_is_not_confused_with_missing_value() {
    let catalog = Catalog::new(
        vec![
            SkuItem::new("1", [("Color", "-")]),
            SkuItem::new("2", Vec::<(String, String)>::new()),
        ],
        Variations::new(vec![Variation::new("Color", ["-"])]),
    );

    assert_eq!(
        catalog.issues(),
        vec![CatalogIssue::MissingVariation {
            item: ItemId::new("2"),
            variation: "Color".to_string(),
        }]
    );
}

#[test]
fn values_with_separators_do_not_collide() {
    let catalog = Catalog::new(
        vec![
            SkuItem::new("1", [("A", "x, B=y"), ("B", "z")]),
            SkuItem::new("2", [("A", "x"), ("B", "y, B=z")]),
        ],
        Variations::new(vec![
            Variation::new("A", ["x, B=y", "x"]),
            Variation::new("B", ["z", "y, B=z"]),
        ]),
    );
    assert!(catalog.issues().is_empty());
}
