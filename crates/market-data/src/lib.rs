//! Folio Market Data - price oracle contract and caching.
//!
//! Defines the provider trait the accounting engine consumes, the quote
//! model it returns, and a TTL-bounded caching decorator that keeps call
//! volume against a live provider bounded. Concrete providers live with
//! the application, not here.

pub mod cache;
pub mod errors;
pub mod models;
pub mod provider;

pub use cache::CachedPriceSource;
pub use errors::MarketDataError;
pub use models::ClosingPrices;
pub use provider::MarketDataProvider;
