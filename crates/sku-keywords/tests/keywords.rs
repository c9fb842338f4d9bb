use std::collections::HashSet;

use sku_keywords::{
    LANGUAGES, all_color_keywords, color_keyword_language, color_keywords, is_color_keyword,
};

#[test]
fn every_language_has_a_table() {
    for lang in LANGUAGES {
        let keywords = color_keywords(lang);
        assert!(keywords.is_some(), "missing table for {lang}");
        assert!(!keywords.unwrap_or_default().is_empty());
    }
}

#[test]
fn unknown_language_has_no_table() {
    assert_eq!(color_keywords("xx"), None);
    assert_eq!(color_keywords(""), None);
}

#[test]
fn language_codes_are_unique() {
    let unique: HashSet<_> = LANGUAGES.iter().collect();
    assert_eq!(unique.len(), LANGUAGES.len());
}

#[test]
fn keywords_are_stored_lowercase() {
    for keyword in all_color_keywords() {
        assert_eq!(keyword, keyword.to_lowercase(), "{keyword} is not lowercase");
    }
}

#[test]
fn keyword_resolution_matrix() {
    assert_eq!(color_keyword_language("color"), Some("en"));
    assert_eq!(color_keyword_language("colour"), Some("en"));
    assert_eq!(color_keyword_language("cor"), Some("pt"));
    assert_eq!(color_keyword_language("colores"), Some("es"));
    assert_eq!(color_keyword_language("couleur"), Some("fr"));
    assert_eq!(color_keyword_language("farbe"), Some("de"));
    assert_eq!(color_keyword_language("colore"), Some("it"));
    assert_eq!(color_keyword_language("kleuren"), Some("nl"));
    assert_eq!(color_keyword_language("culoare"), Some("ro"));
    assert_eq!(color_keyword_language("värit"), Some("fi"));
    assert_eq!(color_keyword_language("kolory"), Some("pl"));
    assert_eq!(color_keyword_language("farve"), Some("da"));
    assert_eq!(color_keyword_language("färger"), Some("sv"));
    assert_eq!(color_keyword_language("farby"), Some("sk"));
    assert_eq!(color_keyword_language("boje"), Some("hr"));
    assert_eq!(color_keyword_language("цвят"), Some("bg"));
    assert_eq!(color_keyword_language("tsvyat"), Some("bg"));
}

#[test]
fn membership_is_exact() {
    assert!(is_color_keyword("color"));
    assert!(!is_color_keyword("Color"));
    assert!(!is_color_keyword("colorado"));
    assert!(!is_color_keyword("size"));
    assert!(!is_color_keyword(""));
}

#[test]
fn all_keywords_are_deduplicated() {
    let keywords = all_color_keywords();
    let unique: HashSet<_> = keywords.iter().collect();
    assert_eq!(unique.len(), keywords.len());
    assert_eq!(keywords.iter().filter(|k| **k == "color").count(), 1);
}
