//! Tests for image matching, label filtering and the image map.

use sku_selector::{
    Image, ImageMap, LabelFilter, SkuItem, Variation, VariationValue, Variations,
    filter_labeled_images, find_image, resize_image_url,
};

fn url_of(image: Option<&Image>) -> Option<&str> {
    image.map(|i| i.url.as_str())
}

// =========================================================================
// find_image
// =========================================================================

#[test]
fn missing_item_or_images_yield_nothing() {
    assert_eq!(find_image(None, "Cor", "Azul", false), None);

    let item = SkuItem::new("1", [("Cor", "Azul")]);
    assert_eq!(find_image(Some(&item), "Cor", "Azul", false), None);
    assert_eq!(find_image(Some(&item), "Cor", "Azul", true), None);
}

#[test]
fn thumbnail_mode_returns_first_image() {
    let item = SkuItem::new("1", [("Cor", "Azul")]).with_images(vec![
        Image::new("first.jpg"),
        Image::labeled("second.jpg", "Azul"),
    ]);
    assert_eq!(url_of(find_image(Some(&item), "Cor", "Azul", true)), Some("first.jpg"));
}

#[test]
fn prefix_rule_matches_label_with_trailing_qualifier() {
    let item = SkuItem::new("1", [("Cor", "Tampo")]).with_images(vec![
        Image::labeled("top.jpg", "Cor Tampo Branco"),
        Image::labeled("base.jpg", "Cor Base Preto"),
    ]);
    assert_eq!(url_of(find_image(Some(&item), "Cor", "Tampo", false)), Some("top.jpg"));
    assert_eq!(url_of(find_image(Some(&item), "Cor", "Base", false)), Some("base.jpg"));
}

#[test]
fn exact_value_label_matches() {
    let item = SkuItem::new("1", [("Cor", "Azul Marinho")]).with_images(vec![
        Image::new("unlabeled.jpg"),
        Image::labeled("navy.jpg", "azul-marinho"),
    ]);
    assert_eq!(
        url_of(find_image(Some(&item), "Cor", "Azul Marinho", false)),
        Some("navy.jpg")
    );
}

#[test]
fn combined_label_matches_with_accents_and_case() {
    let item = SkuItem::new("1", [("Cor", "Tampão")]).with_images(vec![
        Image::labeled("other.jpg", "Cor Base"),
        Image::labeled("match.jpg", "COR - TAMPAO"),
    ]);
    assert_eq!(
        url_of(find_image(Some(&item), "Cor", "Tampão", false)),
        Some("match.jpg")
    );
}

#[test]
fn prefix_without_word_boundary_does_not_match() {
    let item = SkuItem::new("1", [("Cor", "Azul")])
        .with_images(vec![Image::labeled("x.jpg", "Cor Azulado")]);
    assert_eq!(find_image(Some(&item), "Cor", "Azul", false), None);
}

#[test]
fn images_are_scanned_in_order() {
    let item = SkuItem::new("1", [("Cor", "Azul")]).with_images(vec![
        Image::labeled("combined.jpg", "Cor Azul"),
        Image::labeled("exact.jpg", "Azul"),
    ]);
    assert_eq!(
        url_of(find_image(Some(&item), "Cor", "Azul", false)),
        Some("combined.jpg")
    );
}

#[test]
fn unlabeled_and_blank_labels_never_match() {
    let item = SkuItem::new("1", [("Cor", "Azul")]).with_images(vec![
        Image::new("none.jpg"),
        Image::labeled("empty.jpg", ""),
        Image::labeled("punct.jpg", "!!"),
    ]);
    assert_eq!(find_image(Some(&item), "", "", false), None);
    assert_eq!(find_image(Some(&item), "Cor", "Azul", false), None);
}

#[test]
fn no_match_is_not_a_fallback_to_first_image() {
    let item = SkuItem::new("1", [("Cor", "Azul")])
        .with_images(vec![Image::labeled("front.jpg", "Frente")]);
    assert_eq!(find_image(Some(&item), "Cor", "Azul", false), None);
}

// =========================================================================
// Label filter
// =========================================================================

#[test]
fn label_filter_is_case_insensitive() {
    let filter = LabelFilter::new("^cor").unwrap();
    assert!(filter.matches(Some("COR Azul")));
    assert!(!filter.matches(Some("Frente")));
    assert!(!filter.matches(None));
    assert_eq!(filter.as_str(), "^cor");
}

#[test]
fn invalid_label_pattern_is_rejected() {
    let err = LabelFilter::new("cor(").unwrap_err();
    assert!(err.to_string().contains("cor("));
}

#[test]
fn filter_keeps_only_matching_images() {
    let filter = LabelFilter::new("thumb").unwrap();
    let items = vec![
        SkuItem::new("1", [("Cor", "Azul")]).with_images(vec![
            Image::labeled("front.jpg", "Frente"),
            Image::labeled("thumb.jpg", "Thumb Azul"),
            Image::new("nolabel.jpg"),
        ]),
        SkuItem::new("2", [("Cor", "Verde")]).with_images(vec![
            Image::labeled("front.jpg", "Frente"),
            Image::new("nolabel.jpg"),
        ]),
    ];

    let filtered = filter_labeled_images(&items, &filter);
    let urls: Vec<&str> = filtered[0].images.iter().map(|i| i.url.as_str()).collect();
    assert_eq!(urls, vec!["thumb.jpg"]);
    assert_eq!(filtered[1], items[1]);
}

// =========================================================================
// Image map
// =========================================================================

fn furniture_catalog() -> (Vec<SkuItem>, Variations) {
    let items = vec![
        SkuItem::new("1", [("Cor", "Branco"), ("Tamanho", "P")]).with_images(vec![
            Image::labeled("1-front.jpg", "Frente"),
            Image::labeled("1-white.jpg", "Cor Branco"),
        ]),
        SkuItem::new("2", [("Cor", "Preto"), ("Tamanho", "P")]).with_images(vec![
            Image::labeled("2-black.jpg", "Preto"),
            Image::labeled("2-front.jpg", "Frente"),
        ]),
        SkuItem::new("3", [("Cor", "Branco"), ("Tamanho", "G")]).with_images(vec![
            Image::labeled("3-white.jpg", "Cor Branco"),
        ]),
    ];
    let variations = Variations::new(vec![
        Variation::new("Cor", ["Branco", "Preto"]),
        Variation::new("Tamanho", ["P", "G"]),
    ]);
    (items, variations)
}

#[test]
fn image_map_matches_every_value() {
    let (items, variations) = furniture_catalog();
    let map = ImageMap::build(&items, &variations, None);

    assert_eq!(url_of(map.get("Cor", "Branco")), Some("1-white.jpg"));
    assert_eq!(url_of(map.get("Cor", "Preto")), Some("2-black.jpg"));
    assert_eq!(map.get("Tamanho", "P"), None);
    assert_eq!(map.get("Tamanho", "G"), None);
    assert!(map.variation("Cor").unwrap().has_images());
    assert!(!map.variation("Tamanho").unwrap().has_images());
}

#[test]
fn image_map_collects_deduplicated_labels() {
    let (items, variations) = furniture_catalog();
    let map = ImageMap::build(&items, &variations, None);
    assert_eq!(map.collected_labels(), ["Cor Branco", "Preto"]);
    assert_eq!(map.labels_key(), "Cor Branco|Preto");
}

#[test]
fn image_map_uses_value_original_name() {
    let items = vec![
        SkuItem::new("1", [("cor", "azul-1")])
            .with_images(vec![Image::labeled("blue.jpg", "Cor Azul Céu")]),
    ];
    let variations = Variations::new(vec![Variation {
        name: "cor".to_string(),
        original_name: "Cor".to_string(),
        values: vec![VariationValue::with_original_name("azul-1", "Azul Céu")],
    }]);
    let map = ImageMap::build(&items, &variations, None);
    assert_eq!(url_of(map.get("cor", "azul-1")), Some("blue.jpg"));
}

#[test]
fn image_map_in_thumbnail_mode_uses_filtered_first_image() {
    let (items, variations) = furniture_catalog();
    let filter = LabelFilter::new("^cor").unwrap();
    let map = ImageMap::build(&items, &variations, Some(&filter));

    assert_eq!(url_of(map.get("Cor", "Branco")), Some("1-white.jpg"));
    // Item 2 has no "cor" label, so it keeps all images and shows the first.
    assert_eq!(url_of(map.get("Cor", "Preto")), Some("2-black.jpg"));
    assert_eq!(url_of(map.get("Tamanho", "P")), Some("1-white.jpg"));
    assert_eq!(url_of(map.get("Tamanho", "G")), Some("3-white.jpg"));
    assert_eq!(map.collected_labels(), ["Cor Branco", "Preto"]);
}

#[test]
fn value_without_item_has_no_image() {
    let (items, _) = furniture_catalog();
    let variations = Variations::new(vec![Variation::new("Cor", ["Branco", "Verde"])]);
    let map = ImageMap::build(&items, &variations, None);
    assert_eq!(map.get("Cor", "Verde"), None);
    assert_eq!(map.variation("Cor").unwrap().values.len(), 2);
}

#[test]
fn rebuilding_the_map_is_deterministic() {
    let (items, variations) = furniture_catalog();
    let first = ImageMap::build(&items, &variations, None);
    let second = ImageMap::build(&items, &variations, None);
    assert_eq!(first, second);

    let filter = LabelFilter::new("branco").unwrap();
    assert_eq!(
        ImageMap::build(&items, &variations, Some(&filter)),
        ImageMap::build(&items, &variations, Some(&filter))
    );
}

// =========================================================================
// Image URL sizing
// =========================================================================

#[test]
fn resize_inserts_dimensions() {
    assert_eq!(
        resize_image_url("https://cdn.example.com/arquivos/ids/1234/a.jpg", Some(80), Some(120)),
        "//cdn.example.com/arquivos/ids/1234-80-120/a.jpg"
    );
}

#[test]
fn resize_replaces_existing_dimensions() {
    assert_eq!(
        resize_image_url("http://cdn.example.com/ids/1234-500-500/a.jpg", None, Some(40)),
        "//cdn.example.com/ids/1234-auto-40/a.jpg"
    );
}

#[test]
fn resize_clamps_dimensions() {
    assert_eq!(
        resize_image_url("//cdn.example.com/ids/9/a.jpg", Some(10_000), Some(5000)),
        "//cdn.example.com/ids/9-3000-3000/a.jpg"
    );
}

#[test]
fn resize_leaves_other_urls_alone() {
    assert_eq!(
        resize_image_url("https://example.com/images/a.jpg", Some(10), Some(10)),
        "//example.com/images/a.jpg"
    );
}
