use std::sync::Arc;

use kiji_shopify::config::ShopifyConfig;
use kiji_shopify::gateway::ShopifyGateway;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (all fields are behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Shopify store configuration (domain, API version, target blog).
    pub shopify: Arc<ShopifyConfig>,
    /// Admin API gateway. The live client in production; integration
    /// tests inject doubles here.
    pub gateway: Arc<dyn ShopifyGateway>,
}
