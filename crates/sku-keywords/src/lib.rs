//! Shared multilingual keyword tables used by the SKU selector.
//!
//! This crate centralizes the words that mark a variation name as a color
//! axis so that the runtime classifier and the command-line tools agree on
//! the same list.

/// Language codes with a color keyword table, in lookup order.
pub const LANGUAGES: &[&str] = &[
    "en", "pt", "es", "fr", "de", "it", "nl", "ro", "fi", "pl", "da", "sv", "sk", "hr", "bg",
];

/// Color keywords for the given language code.
///
/// Keywords are stored lowercase. Returns `None` for languages without a
/// table.
pub fn color_keywords(lang: &str) -> Option<&'static [&'static str]> {
    match lang {
        "en" => Some(EN_COLOR),
        "pt" => Some(PT_COLOR),
        "es" => Some(ES_COLOR),
        "fr" => Some(FR_COLOR),
        "de" => Some(DE_COLOR),
        "it" => Some(IT_COLOR),
        "nl" => Some(NL_COLOR),
        "ro" => Some(RO_COLOR),
        "fi" => Some(FI_COLOR),
        "pl" => Some(PL_COLOR),
        "da" => Some(DA_COLOR),
        "sv" => Some(SV_COLOR),
        "sk" => Some(SK_COLOR),
        "hr" => Some(HR_COLOR),
        "bg" => Some(BG_COLOR),
        _ => None,
    }
}

/// Resolve a lowercase token to the first language whose table contains it.
///
/// The token must already be lowercased and free of surrounding punctuation.
pub fn color_keyword_language(token: &str) -> Option<&'static str> {
    LANGUAGES.iter().copied().find(|lang| {
        color_keywords(lang).is_some_and(|keywords| keywords.contains(&token))
    })
}

/// Returns true if the lowercase token is a color keyword in any language.
pub fn is_color_keyword(token: &str) -> bool {
    color_keyword_language(token).is_some()
}

/// All color keywords across every language, deduplicated, in table order.
pub fn all_color_keywords() -> Vec<&'static str> {
    let mut result: Vec<&'static str> = Vec::new();
    for keyword in LANGUAGES
        .iter()
        .filter_map(|lang| color_keywords(lang))
        .flat_map(|keywords| keywords.iter().copied())
    {
        if !result.contains(&keyword) {
            result.push(keyword);
        }
    }
    result
}

const EN_COLOR: &[&str] = &["color", "colour", "colors", "colours"];
const PT_COLOR: &[&str] = &["cor", "cores"];
const ES_COLOR: &[&str] = &["color", "colores"];
const FR_COLOR: &[&str] = &["couleur", "couleurs"];
const DE_COLOR: &[&str] = &["farbe", "farben"];
const IT_COLOR: &[&str] = &["colore", "colori"];
const NL_COLOR: &[&str] = &["kleur", "kleuren"];
const RO_COLOR: &[&str] = &["culoare", "culori"];
const FI_COLOR: &[&str] = &["väri", "värit"];
const PL_COLOR: &[&str] = &["kolor", "kolory"];
const DA_COLOR: &[&str] = &["farve", "farver"];
const SV_COLOR: &[&str] = &["färg", "färger"];
const SK_COLOR: &[&str] = &["farba", "farby"];
const HR_COLOR: &[&str] = &["boja", "boje"];
const BG_COLOR: &[&str] = &["цвят", "цветове", "tsvyat", "tsviat"];
