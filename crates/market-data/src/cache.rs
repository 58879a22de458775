use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;
use log::debug;

use crate::errors::MarketDataError;
use crate::models::ClosingPrices;
use crate::provider::MarketDataProvider;

/// Default staleness window for cached quotes.
pub const DEFAULT_QUOTE_TTL: Duration = Duration::from_secs(300);

struct CacheEntry {
    fetched_at: Instant,
    prices: ClosingPrices,
}

/// Caching decorator around a [`MarketDataProvider`].
///
/// Quotes are cached per instrument id for a bounded interval so repeated
/// valuations within one session do not hammer the upstream provider.
/// Failed lookups are not cached; a recovered provider is picked up on the
/// next call.
pub struct CachedPriceSource {
    inner: Arc<dyn MarketDataProvider>,
    ttl: Duration,
    entries: DashMap<String, CacheEntry>,
}

impl CachedPriceSource {
    pub fn new(inner: Arc<dyn MarketDataProvider>) -> Self {
        Self::with_ttl(inner, DEFAULT_QUOTE_TTL)
    }

    pub fn with_ttl(inner: Arc<dyn MarketDataProvider>, ttl: Duration) -> Self {
        CachedPriceSource {
            inner,
            ttl,
            entries: DashMap::new(),
        }
    }

    /// Drops every cached quote, forcing fresh lookups.
    pub fn invalidate_all(&self) {
        self.entries.clear();
    }
}

#[async_trait]
impl MarketDataProvider for CachedPriceSource {
    async fn latest_and_previous_close(
        &self,
        instrument_id: &str,
    ) -> Result<ClosingPrices, MarketDataError> {
        if let Some(entry) = self.entries.get(instrument_id) {
            if entry.fetched_at.elapsed() < self.ttl {
                return Ok(entry.prices);
            }
        }

        let prices = self.inner.latest_and_previous_close(instrument_id).await?;
        debug!("Caching quote for {}", instrument_id);
        self.entries.insert(
            instrument_id.to_string(),
            CacheEntry {
                fetched_at: Instant::now(),
                prices,
            },
        );
        Ok(prices)
    }
}
