//! Wire types for the Admin API calls.
//!
//! The GraphQL response is decoded into explicit structs rather than
//! traversed as loose JSON; absent optional fields normalize to the
//! documented defaults when converting into a [`ProductRecord`].

use kiji_core::product::ProductRecord;
use serde::{Deserialize, Serialize};

use crate::config::ShopifyConfig;

/// GraphQL query resolving a product by its URL handle.
pub const PRODUCT_BY_HANDLE_QUERY: &str = r#"
  query productByHandle($handle: String!) {
    productByHandle(handle: $handle) {
      title
      descriptionHtml
      featuredImage { url }
      priceRangeV2 {
        minVariantPrice { amount currencyCode }
      }
      onlineStoreUrl
      handle
    }
  }
"#;

/// Top-level GraphQL response envelope.
///
/// GraphQL errors arrive with `data` missing or null; both decode to
/// `None` and surface as "no product" rather than a hard failure.
#[derive(Debug, Deserialize)]
pub struct ProductByHandleResponse {
    #[serde(default)]
    pub data: Option<ProductByHandleData>,
}

#[derive(Debug, Deserialize)]
pub struct ProductByHandleData {
    #[serde(rename = "productByHandle")]
    pub product_by_handle: Option<ProductNode>,
}

/// The product fields requested by [`PRODUCT_BY_HANDLE_QUERY`].
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductNode {
    pub title: String,
    #[serde(default)]
    pub description_html: Option<String>,
    #[serde(default)]
    pub featured_image: Option<FeaturedImage>,
    #[serde(default)]
    pub price_range_v2: Option<PriceRangeV2>,
    #[serde(default)]
    pub online_store_url: Option<String>,
    pub handle: String,
}

#[derive(Debug, Deserialize)]
pub struct FeaturedImage {
    pub url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRangeV2 {
    #[serde(default)]
    pub min_variant_price: Option<MinVariantPrice>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinVariantPrice {
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub currency_code: Option<String>,
}

impl ProductNode {
    /// Normalize into a [`ProductRecord`].
    ///
    /// Missing price data becomes `"0"` / `"JPY"`, and a missing or
    /// empty `onlineStoreUrl` falls back to a URL constructed from the
    /// store domain and the product handle.
    pub fn into_record(self, config: &ShopifyConfig) -> ProductRecord {
        let price = self.price_range_v2.and_then(|r| r.min_variant_price);
        let (price_amount, currency_code) = match price {
            Some(p) => (
                p.amount.unwrap_or_else(|| "0".to_string()),
                p.currency_code.unwrap_or_else(|| "JPY".to_string()),
            ),
            None => ("0".to_string(), "JPY".to_string()),
        };

        let url = match self.online_store_url {
            Some(u) if !u.is_empty() => u,
            _ => config.storefront_product_url(&self.handle),
        };

        ProductRecord {
            title: self.title,
            image: self.featured_image.map(|i| i.url),
            description_html: self.description_html.unwrap_or_default(),
            price_amount,
            currency_code,
            url,
        }
    }
}

/// Article payload for the REST create call.
///
/// `published_at` is always serialized as JSON `null` so the article is
/// created as an unpublished draft, never auto-published.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewArticle {
    pub title: String,
    pub author: String,
    pub body_html: String,
    pub handle: String,
    pub published_at: Option<String>,
}

impl NewArticle {
    /// Build a draft article payload.
    pub fn draft(title: &str, author: &str, body_html: String, handle: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            body_html,
            handle: handle.to_string(),
            published_at: None,
        }
    }
}

/// A successfully created article.
#[derive(Debug, Clone)]
pub struct CreatedArticle {
    /// The platform's article object exactly as returned, handed back to
    /// the caller verbatim in the success response.
    pub article: serde_json::Value,
}

impl CreatedArticle {
    /// `blog_id` of the created article, when the platform included one.
    pub fn blog_id(&self) -> Option<i64> {
        self.article.get("blog_id").and_then(serde_json::Value::as_i64)
    }
}
