use sku_keywords::color_keyword_language;
use unicode_segmentation::UnicodeSegmentation;

/// Returns true if `text` names a color axis.
///
/// Matching is case-insensitive and token based: a color keyword must appear
/// as a whole word, so "Cor do Tampo", "Cor-Tampo", "Cor_Base" and
/// "Color [Primary]" match while "Colorado" and "Discolor" do not.
///
/// # Example
///
/// ```
/// use sku_selector::is_color;
///
/// assert!(is_color("Primary Color Selection"));
/// assert!(is_color("Цвят"));
/// assert!(!is_color("Colorado"));
/// assert!(!is_color(""));
/// ```
pub fn is_color(text: &str) -> bool {
    color_language(text).is_some()
}

/// Like [`is_color`], treating a missing name as not a color.
pub fn is_color_opt(text: Option<&str>) -> bool {
    text.is_some_and(is_color)
}

/// The language of the first color keyword found in `text`, if any.
pub fn color_language(text: &str) -> Option<&'static str> {
    if text.trim().is_empty() {
        return None;
    }
    tokens(&text.to_lowercase()).find_map(|token| color_keyword_language(&token))
}

/// Splits lowercase text into word tokens.
///
/// Underscores join words under Unicode segmentation rules and periods or
/// apostrophes may glue letters together, so every non-alphanumeric
/// character is treated as an additional separator.
fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.unicode_words()
        .flat_map(|word| word.split(|c: char| !c.is_alphanumeric()))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}
