use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::ClosingPrices;

/// Read-only price oracle.
///
/// Implementations resolve an instrument identifier to its latest and
/// previous closing prices. Lookups are idempotent, so callers may cache
/// results for a short interval.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    async fn latest_and_previous_close(
        &self,
        instrument_id: &str,
    ) -> Result<ClosingPrices, MarketDataError>;
}
