use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Largest width or height requested from the image server.
pub const MAX_IMAGE_DIMENSION: u32 = 3000;

static SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?:").expect("scheme pattern is valid"));

static SIZED_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(ids/\d+)(?:-[0-9a-z]+-[0-9a-z]+)?/").expect("id pattern is valid"));

/// Rewrite a catalog image URL to request a specific size.
///
/// The scheme is dropped so the URL inherits the page's protocol, and the
/// `ids/<n>` path segment receives a `-<width>-<height>` suffix, replacing
/// any suffix already present. Missing dimensions are sent as `auto` and
/// dimensions are clamped to [`MAX_IMAGE_DIMENSION`]. URLs without an
/// `ids/<n>` segment are returned without their scheme and otherwise
/// unchanged.
///
/// # Example
///
/// ```
/// use sku_selector::resize_image_url;
///
/// let url = "https://store.example.com/arquivos/ids/155404-500-500/shirt.jpg";
/// assert_eq!(
///     resize_image_url(url, Some(96), None),
///     "//store.example.com/arquivos/ids/155404-96-auto/shirt.jpg"
/// );
/// ```
pub fn resize_image_url(url: &str, width: Option<u32>, height: Option<u32>) -> String {
    let width = dimension(width);
    let height = dimension(height);
    let without_scheme = SCHEME.replace(url, "");
    SIZED_ID
        .replace(&without_scheme, |caps: &Captures<'_>| {
            format!("{}-{width}-{height}/", &caps[1])
        })
        .into_owned()
}

fn dimension(value: Option<u32>) -> String {
    value.map_or_else(
        || "auto".to_string(),
        |v| v.min(MAX_IMAGE_DIMENSION).to_string(),
    )
}
