//! Domain logic for the kiji blog builder.
//!
//! Pure building blocks shared by the Shopify integration and the API
//! server: product records and handle extraction, price display
//! formatting, JST date slugs, and the article body renderer. Nothing in
//! this crate touches the network or reads the clock.

pub mod article;
pub mod price;
pub mod product;
pub mod slug;
