//! Shopify store configuration.

/// Connection settings for one Shopify store.
///
/// Loaded once at startup and passed by `Arc` into the client and the
/// handlers, so components stay testable with injected fake values
/// instead of ambient environment lookups.
#[derive(Debug, Clone)]
pub struct ShopifyConfig {
    /// Store domain, e.g. `example.myshopify.com`.
    pub domain: String,
    /// Static Admin API access token.
    pub admin_token: String,
    /// Admin API version path segment, e.g. `2024-10`.
    pub api_version: String,
    /// Identifier of the blog that receives generated articles.
    pub blog_id: String,
}

impl ShopifyConfig {
    /// Load configuration from environment variables.
    ///
    /// All four variables are required; startup panics with a clear
    /// message when one is missing (fail fast on misconfiguration).
    ///
    /// | Env Var               |                               |
    /// |-----------------------|-------------------------------|
    /// | `SHOPIFY_DOMAIN`      | store domain                  |
    /// | `SHOPIFY_ADMIN_TOKEN` | Admin API access token        |
    /// | `SHOPIFY_API_VERSION` | Admin API version, e.g. 2024-10 |
    /// | `BLOG_ID`             | target blog identifier        |
    pub fn from_env() -> Self {
        Self {
            domain: std::env::var("SHOPIFY_DOMAIN").expect("SHOPIFY_DOMAIN must be set"),
            admin_token: std::env::var("SHOPIFY_ADMIN_TOKEN")
                .expect("SHOPIFY_ADMIN_TOKEN must be set"),
            api_version: std::env::var("SHOPIFY_API_VERSION")
                .expect("SHOPIFY_API_VERSION must be set"),
            blog_id: std::env::var("BLOG_ID").expect("BLOG_ID must be set"),
        }
    }

    /// Admin GraphQL endpoint.
    pub fn graphql_url(&self) -> String {
        format!(
            "https://{}/admin/api/{}/graphql.json",
            self.domain, self.api_version
        )
    }

    /// Admin REST endpoint for creating articles in the configured blog.
    pub fn articles_url(&self) -> String {
        format!(
            "https://{}/admin/api/{}/blogs/{}/articles.json",
            self.domain, self.api_version, self.blog_id
        )
    }

    /// Public storefront URL for a product, used when the Admin API
    /// returns no `onlineStoreUrl`. Custom storefront domains drop the
    /// `.myshopify.com` suffix.
    pub fn storefront_product_url(&self, handle: &str) -> String {
        format!(
            "https://{}/products/{}",
            self.domain.replace(".myshopify.com", ""),
            handle
        )
    }

    /// Preview URL for a draft article in the given blog.
    pub fn preview_url(&self, blog_id: &str, slug: &str) -> String {
        format!("https://{}/blogs/{}/{}", self.domain, blog_id, slug)
    }
}
