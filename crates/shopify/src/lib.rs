//! Shopify Admin API integration.
//!
//! Everything that talks to the commerce platform lives here: typed
//! configuration loaded from the environment, the wire types for the
//! GraphQL product lookup and the REST article creation, the
//! [`client::ShopifyClient`] that performs the calls, and the
//! [`gateway::ShopifyGateway`] trait the HTTP layer consumes so tests
//! can substitute doubles.

pub mod client;
pub mod config;
pub mod gateway;
pub mod types;
