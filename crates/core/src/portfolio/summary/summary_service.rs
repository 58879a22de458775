use std::collections::HashSet;
use std::sync::Arc;

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use folio_market_data::MarketDataProvider;

use super::summary_model::AccountSummary;
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::holdings::{HoldingsCalculator, InstrumentSummary, Position};
use crate::ledger::{CashMovement, DividendRecord, TradeRecord};

/// Computes account summaries from in-memory ledger records.
pub struct SummaryService {
    calculator: HoldingsCalculator,
    prices: Arc<dyn MarketDataProvider>,
}

impl SummaryService {
    pub fn new(calculator: HoldingsCalculator, prices: Arc<dyn MarketDataProvider>) -> Self {
        SummaryService { calculator, prices }
    }

    /// Full account computation: open positions plus the financial summary.
    pub async fn summarize(
        &self,
        trades: &[TradeRecord],
        cash_movements: &[CashMovement],
        dividends: &[DividendRecord],
    ) -> (Vec<Position>, AccountSummary) {
        debug!(
            "Summarizing {} trades, {} cash movements, {} dividends",
            trades.len(),
            cash_movements.len(),
            dividends.len()
        );

        let instruments = self
            .calculator
            .compute_lots(trades, self.prices.as_ref())
            .await;
        let summary = aggregate_summary(trades, &instruments, cash_movements, dividends);
        let positions = instruments
            .into_iter()
            .filter_map(|instrument| instrument.position)
            .collect();

        (positions, summary)
    }
}

/// Net contributed capital for a set of cash movements.
pub fn net_contribution(cash_movements: &[CashMovement]) -> Decimal {
    cash_movements
        .iter()
        .map(CashMovement::signed_amount)
        .sum()
}

/// Rolls per-instrument outcomes, cash movements and dividends into an
/// [`AccountSummary`].
///
/// A dividend row counts only when its account name appears among the
/// distinct account names of the supplied trade set.
pub fn aggregate_summary(
    trades: &[TradeRecord],
    instruments: &[InstrumentSummary],
    cash_movements: &[CashMovement],
    dividends: &[DividendRecord],
) -> AccountSummary {
    let account_names: HashSet<&str> = trades.iter().map(|t| t.account_id.as_str()).collect();
    let dividend_total: Decimal = dividends
        .iter()
        .filter(|dividend| account_names.contains(dividend.account_id.as_str()))
        .map(|dividend| dividend.amount)
        .sum();

    let realized_total: Decimal = instruments
        .iter()
        .map(|instrument| instrument.realized_profit)
        .sum();

    let mut current_value = Decimal::ZERO;
    let mut current_profit = Decimal::ZERO;
    let mut today_profit = Decimal::ZERO;
    for position in instruments.iter().filter_map(|i| i.position.as_ref()) {
        current_value += position.market_value;
        current_profit += position.unrealized_profit;
        today_profit += position.day_change;
    }

    let capital = net_contribution(cash_movements);
    let actual_profit = realized_total + dividend_total;
    let total_balance = capital + current_profit + actual_profit;
    let cash = total_balance - current_value;
    let total_profit_rate = if capital.is_zero() {
        Decimal::ZERO
    } else {
        (total_balance - capital) / capital * dec!(100)
    };

    AccountSummary {
        capital: capital.round_dp(0),
        current_value: current_value.round_dp(0),
        current_profit: current_profit.round_dp(0),
        actual_profit: actual_profit.round_dp(0),
        total_balance: total_balance.round_dp(0),
        cash: cash.round_dp(0),
        total_profit: (current_profit + actual_profit).round_dp(0),
        total_profit_rate: total_profit_rate.round_dp(DISPLAY_DECIMAL_PRECISION),
        today_profit: today_profit.round_dp(0),
    }
}
