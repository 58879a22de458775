use std::collections::BTreeMap;

use futures::future::join_all;
use log::{debug, warn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use folio_market_data::{ClosingPrices, MarketDataProvider};

use super::cost_basis::{CostBasisStrategy, LotAcquisition, LotDisposal, WeightedAverageCost};
use super::holdings_model::{InstrumentSummary, Position, ValuationConfig};
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::ledger::{TradeRecord, TradeSide};

/// Weighted-average lot accounting over one account's trade ledger.
///
/// Replays each instrument's trades in date order (stable for same-day
/// trades) through [`WeightedAverageCost`], then marks open positions to
/// market through the price oracle. Instruments are independent of each
/// other, so their price lookups run concurrently; within one instrument
/// the replay is strictly ordered.
#[derive(Debug, Clone, Default)]
pub struct HoldingsCalculator {
    config: ValuationConfig,
}

impl HoldingsCalculator {
    pub fn new(config: ValuationConfig) -> Self {
        HoldingsCalculator { config }
    }

    /// Computes per-instrument holdings and realized profit for the trades
    /// of one account.
    ///
    /// A failed price lookup degrades that instrument to zero value; it
    /// never fails the batch.
    pub async fn compute_lots(
        &self,
        trades: &[TradeRecord],
        prices: &dyn MarketDataProvider,
    ) -> Vec<InstrumentSummary> {
        debug!("Computing lots for {} trades", trades.len());

        let mut by_instrument: BTreeMap<&str, Vec<&TradeRecord>> = BTreeMap::new();
        for trade in trades {
            by_instrument
                .entry(trade.instrument_id.as_str())
                .or_default()
                .push(trade);
        }

        let passes = by_instrument.into_iter().map(|(_, mut group)| async move {
            // Stable sort: same-day trades keep ledger order.
            group.sort_by_key(|trade| trade.trade_date);
            self.replay_instrument(&group, prices).await
        });

        join_all(passes).await
    }

    async fn replay_instrument(
        &self,
        trades: &[&TradeRecord],
        prices: &dyn MarketDataProvider,
    ) -> InstrumentSummary {
        let Some(first) = trades.first() else {
            return InstrumentSummary {
                instrument_id: String::new(),
                realized_profit: Decimal::ZERO,
                position: None,
            };
        };

        let mut tracker = WeightedAverageCost::new();
        let mut realized_profit = Decimal::ZERO;

        for trade in trades {
            match trade.side {
                TradeSide::Buy => tracker.apply_buy(LotAcquisition::from_trade(trade)),
                TradeSide::Sell => {
                    realized_profit += tracker
                        .apply_sell(LotDisposal::from_trade(trade))
                        .realized_profit;
                }
            }
        }

        let quantity = tracker.held_quantity();
        let position = if quantity > Decimal::ZERO {
            let closes = self.resolve_prices(first.instrument_id.as_str(), trades, prices).await;
            Some(Self::value_position(first, &tracker, quantity, closes))
        } else {
            // Nothing held: the instrument contributes realized profit only.
            None
        };

        InstrumentSummary {
            instrument_id: first.instrument_id.clone(),
            realized_profit,
            position,
        }
    }

    /// Resolves latest and previous close for an instrument. Quote-less
    /// instruments are priced off their own last recorded ledger price,
    /// which makes their day change zero by construction.
    async fn resolve_prices(
        &self,
        instrument_id: &str,
        trades: &[&TradeRecord],
        prices: &dyn MarketDataProvider,
    ) -> ClosingPrices {
        if self.config.is_quoteless(instrument_id) {
            let marked = trades
                .iter()
                .rev()
                .find_map(|trade| trade.marked_price)
                .unwrap_or(Decimal::ZERO);
            return ClosingPrices::flat(marked);
        }

        match prices.latest_and_previous_close(instrument_id).await {
            Ok(closes) => closes,
            Err(err) => {
                warn!(
                    "Price lookup failed for {}: {}. Valuing at zero.",
                    instrument_id, err
                );
                ClosingPrices::zero()
            }
        }
    }

    fn value_position(
        first: &TradeRecord,
        tracker: &WeightedAverageCost,
        quantity: Decimal,
        closes: ClosingPrices,
    ) -> Position {
        let average_cost = tracker.average_cost();
        let cost_basis = average_cost * quantity;
        let market_value = closes.latest * quantity;
        let unrealized_profit = market_value - cost_basis;
        let profit_rate = if cost_basis.is_zero() {
            Decimal::ZERO
        } else {
            unrealized_profit / cost_basis * dec!(100)
        };
        let day_change = closes.day_change_per_unit() * quantity;

        Position {
            account_id: first.account_id.clone(),
            instrument_id: first.instrument_id.clone(),
            instrument_name: first.instrument_name.clone(),
            asset_class: first.asset_class.clone(),
            quantity,
            average_cost: average_cost.round_dp(0),
            cost_basis: cost_basis.round_dp(0),
            market_price: closes.latest.round_dp(0),
            market_value: market_value.round_dp(0),
            unrealized_profit: unrealized_profit.round_dp(0),
            profit_rate: profit_rate.round_dp(DISPLAY_DECIMAL_PRECISION),
            day_change,
        }
    }
}
