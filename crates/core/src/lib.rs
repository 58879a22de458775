//! Folio Core - portfolio accounting engine.
//!
//! Turns a chronological trade ledger into current holdings, average cost,
//! realized/unrealized profit, and currency-adjusted aggregates across
//! accounts. The ledger store and the price oracle are external
//! collaborators behind traits; the engine itself is a deterministic batch
//! computation that recomputes every view fresh from the full ledger.

pub mod constants;
pub mod errors;
pub mod fx;
pub mod holdings;
pub mod ledger;
pub mod portfolio;
pub mod utils;

// Re-export common types from the holdings and portfolio modules
pub use holdings::*;
pub use portfolio::*;

// Re-export the price oracle contract
pub use folio_market_data as market_data;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
