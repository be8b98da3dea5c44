//! Seam between the HTTP layer and the commerce platform.

use async_trait::async_trait;
use kiji_core::product::ProductRecord;

use crate::client::{ShopifyClient, ShopifyError};
use crate::types::{CreatedArticle, NewArticle};

/// Operations the publish pipeline needs from the commerce platform.
///
/// [`ShopifyClient`] is the production implementation; integration tests
/// substitute doubles that resolve from memory and count calls instead
/// of touching the network.
#[async_trait]
pub trait ShopifyGateway: Send + Sync {
    /// Resolve one product by handle.
    ///
    /// `Ok(None)` means the platform has no matching product. Transport
    /// failures are `Err`; the caller decides whether to skip or abort.
    async fn product_by_handle(&self, handle: &str)
        -> Result<Option<ProductRecord>, ShopifyError>;

    /// Create a draft article in the configured blog.
    async fn create_article(&self, article: &NewArticle) -> Result<CreatedArticle, ShopifyError>;
}

#[async_trait]
impl ShopifyGateway for ShopifyClient {
    async fn product_by_handle(
        &self,
        handle: &str,
    ) -> Result<Option<ProductRecord>, ShopifyError> {
        self.lookup_product(handle).await
    }

    async fn create_article(&self, article: &NewArticle) -> Result<CreatedArticle, ShopifyError> {
        self.publish_article(article).await
    }
}
