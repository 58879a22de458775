use std::collections::BTreeMap;

use chrono::NaiveDate;
use log::{debug, warn};
use rust_decimal::Decimal;

use super::performance_model::{RealizedPeriodReport, ReportingPeriod};
use crate::fx::CurrencyConverter;
use crate::holdings::{CostBasisStrategy, FifoLotMatching, LotAcquisition, LotDisposal};
use crate::ledger::{TradeRecord, TradeSide};
use crate::utils::time_utils::settlement_date;

/// FX pair used to restate settled trades into the reporting currency.
pub struct SettlementFx<'a> {
    pub converter: &'a CurrencyConverter,
    pub from_currency: &'a str,
    pub to_currency: &'a str,
}

impl SettlementFx<'_> {
    /// Rate effective for a trade settling on `date`: first rate on or
    /// after the settlement date, else the latest known rate.
    fn rate_for(&self, date: NaiveDate) -> Decimal {
        match self
            .converter
            .rate_on_or_after(self.from_currency, self.to_currency, date)
        {
            Ok(rate) => rate,
            Err(err) => {
                warn!(
                    "No settlement rate for {}/{} on {}: {}. Using 1.",
                    self.from_currency, self.to_currency, date, err
                );
                Decimal::ONE
            }
        }
    }
}

/// Realized profit from sells settling inside `period`, using strict FIFO
/// lot matching with settlement-date attribution.
///
/// Sells settling outside the period still drain the lot queue so later
/// sells match the correct lots. With an FX context, each buy lot is
/// restated at the rate of its own settlement date and each in-period sell
/// at the rate of its settlement date; without one, the computation runs
/// in native currency.
pub fn realized_profit_in_period(
    trades: &[TradeRecord],
    period: &ReportingPeriod,
    fx: Option<&SettlementFx<'_>>,
) -> RealizedPeriodReport {
    debug!(
        "Computing realized profit for {} trades settling {} through {}",
        trades.len(),
        period.start,
        period.end
    );

    let mut by_instrument: BTreeMap<&str, Vec<&TradeRecord>> = BTreeMap::new();
    for trade in trades {
        by_instrument
            .entry(trade.instrument_id.as_str())
            .or_default()
            .push(trade);
    }

    let mut realized_profit = Decimal::ZERO;

    for (_, mut group) in by_instrument {
        group.sort_by_key(|trade| trade.trade_date);
        let mut lots = FifoLotMatching::new();

        for trade in group {
            let settled_on = settlement_date(trade.trade_date);
            let fx_rate = match fx {
                Some(fx) => fx.rate_for(settled_on),
                None => Decimal::ONE,
            };

            match trade.side {
                TradeSide::Buy => {
                    lots.apply_buy(LotAcquisition::from_trade(trade).with_fx_rate(fx_rate));
                }
                TradeSide::Sell => {
                    let outcome =
                        lots.apply_sell(LotDisposal::from_trade(trade).with_fx_rate(fx_rate));
                    if period.contains(settled_on) {
                        realized_profit += outcome.realized_profit;
                    }
                }
            }
        }
    }

    RealizedPeriodReport {
        period: *period,
        realized_profit,
    }
}
