use unicode_normalization::UnicodeNormalization;

/// Canonicalize a free-text label for comparison.
///
/// Applies, in order:
/// 1. Unicode NFD decomposition and removal of combining diacritical marks
///    (U+0300..U+036F)
/// 2. Lowercasing
/// 3. Removal of everything except ASCII letters, digits, whitespace and `-`
/// 4. Hyphens to spaces, whitespace runs collapsed, ends trimmed
///
/// The result only contains `[a-z0-9]` words separated by single spaces, so
/// the function is idempotent. Underscores are removed in step 3 rather than
/// treated as separators. Used for comparison only, never for display.
///
/// # Example
///
/// ```
/// use sku_selector::normalize_label;
///
/// assert_eq!(normalize_label("Cor - Tampão (Branco)"), "cor tampao branco");
/// assert_eq!(normalize_label(""), "");
/// ```
pub fn normalize_label(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let stripped: String = text.nfd().filter(|c| !is_combining_diacritic(*c)).collect();
    let kept: String = stripped
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || *c == '-')
        .map(|c| if c == '-' { ' ' } else { c })
        .collect();

    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A CSS- and URL-safe modifier derived from a value name.
///
/// Punctuation and spaces become `-`, diacritics are removed and the result is
/// lowercased. Unlike [`normalize_label`] this keeps non-Latin letters.
///
/// # Example
///
/// ```
/// use sku_selector::slug;
///
/// assert_eq!(slug("Azul Céu"), "azul-ceu");
/// assert_eq!(slug("10/12 (P)"), "10-12--p-");
/// ```
pub fn slug(text: &str) -> String {
    let replaced: String = text
        .chars()
        .map(|c| if SLUG_SEPARATORS.contains(c) { '-' } else { c })
        .collect();
    replaced
        .nfd()
        .filter(|c| !is_combining_diacritic(*c))
        .collect::<String>()
        .to_lowercase()
}

const SLUG_SEPARATORS: &str = "*+~.()'\"!:@&[]`,/ %$#?{}|><=_^";

fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}
