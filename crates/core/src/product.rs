//! Product records and handle extraction.

use percent_encoding::percent_decode_str;
use serde::Serialize;

/// Path segment that precedes the product handle in a storefront URL.
const HANDLE_MARKER: &str = "/products/";

/// Normalized data for one storefront product.
///
/// Built from the Admin API response by `kiji-shopify`. Every record
/// handed to the renderer has a non-empty `title` and `url`; missing
/// price data is defaulted upstream to `"0"` / `"JPY"` so partial data
/// degrades into a displayed price instead of blocking publication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRecord {
    /// Display title.
    pub title: String,
    /// Featured image URL, absent when the product has none.
    pub image: Option<String>,
    /// Raw product description HTML. Fetched and carried, but not
    /// rendered into the article body.
    pub description_html: String,
    /// Minimum variant price as a decimal string (never a float).
    pub price_amount: String,
    /// ISO 4217 currency code.
    pub currency_code: String,
    /// Canonical storefront URL.
    pub url: String,
}

/// Extract a product handle from a product page URL.
///
/// Takes the substring after the first `/products/` segment, up to but
/// not including the first `?`, then percent-decodes it. Returns `None`
/// when the marker is missing, the handle is empty, or the encoded bytes
/// are not valid UTF-8 -- a bad URL drops out of the batch instead of
/// failing it.
pub fn extract_handle(url: &str) -> Option<String> {
    let ix = url.find(HANDLE_MARKER)?;
    let raw = &url[ix + HANDLE_MARKER.len()..];
    let raw = raw.split('?').next().unwrap_or("");
    if raw.is_empty() {
        return None;
    }
    let decoded = percent_decode_str(raw).decode_utf8().ok()?;
    Some(decoded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_handle() {
        assert_eq!(
            extract_handle("https://shop.example.com/products/blue-denim-jacket"),
            Some("blue-denim-jacket".to_string())
        );
    }

    #[test]
    fn query_string_is_stripped() {
        assert_eq!(
            extract_handle("https://shop.example.com/products/blue-denim-jacket?variant=123&utm=x"),
            Some("blue-denim-jacket".to_string())
        );
    }

    #[test]
    fn percent_encoded_handle_is_decoded() {
        // Shopify handles for Japanese products arrive percent-encoded.
        assert_eq!(
            extract_handle("https://shop.example.com/products/%E3%83%87%E3%83%8B%E3%83%A0"),
            Some("デニム".to_string())
        );
    }

    #[test]
    fn no_products_segment() {
        assert_eq!(extract_handle("https://shop.example.com/collections/all"), None);
    }

    #[test]
    fn empty_handle_after_marker() {
        assert_eq!(extract_handle("https://shop.example.com/products/"), None);
    }

    #[test]
    fn query_immediately_after_marker() {
        assert_eq!(extract_handle("https://shop.example.com/products/?sort=price"), None);
    }

    #[test]
    fn undecodable_bytes_yield_none() {
        // %FF is not valid UTF-8 once decoded.
        assert_eq!(extract_handle("https://shop.example.com/products/%FF%FE"), None);
    }

    #[test]
    fn first_marker_wins() {
        assert_eq!(
            extract_handle("https://shop.example.com/products/outer/products/inner"),
            Some("outer/products/inner".to_string())
        );
    }

    #[test]
    fn relative_url() {
        assert_eq!(extract_handle("/products/leather-belt"), Some("leather-belt".to_string()));
    }
}
