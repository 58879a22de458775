use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A valued open position in one instrument within one account.
///
/// Monetary fields are rounded to the nearest whole currency unit and the
/// rate to two decimals, matching the reporting contract. Each field is
/// rounded independently of the others.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub account_id: String,
    pub instrument_id: String,
    pub instrument_name: String,
    pub asset_class: String,
    pub quantity: Decimal,
    pub average_cost: Decimal,
    /// Total acquisition cost of the held quantity.
    pub cost_basis: Decimal,
    pub market_price: Decimal,
    pub market_value: Decimal,
    pub unrealized_profit: Decimal,
    pub profit_rate: Decimal,
    /// Mark-to-market move since the previous close. Left unrounded; the
    /// account aggregator rounds the summed total.
    pub day_change: Decimal,
}

/// Engine output for one instrument: realized profit from the full replay,
/// plus the open position when any quantity is still held.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentSummary {
    pub instrument_id: String,
    pub realized_profit: Decimal,
    pub position: Option<Position>,
}

/// Behavior flags for the valuation pass.
#[derive(Debug, Clone, Default)]
pub struct ValuationConfig {
    /// Instruments priced off their own last recorded ledger price instead
    /// of the price oracle. Their day change is always zero.
    pub quoteless_instruments: HashSet<String>,
}

impl ValuationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quoteless<I, S>(mut self, instrument_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.quoteless_instruments
            .extend(instrument_ids.into_iter().map(Into::into));
        self
    }

    pub fn is_quoteless(&self, instrument_id: &str) -> bool {
        self.quoteless_instruments.contains(instrument_id)
    }
}
