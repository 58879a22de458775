use std::collections::BTreeMap;

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::allocation_model::{AllocationEntry, GroupAllocation, RollupInput, RollupResult};
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::Result;
use crate::fx::CurrencyConverter;
use crate::portfolio::summary::AccountSummary;

/// Field-by-field accumulation of account summaries.
///
/// The blended profit rate is recomputed from summed capital and summed
/// balance; averaging per-account rates would weight small accounts as if
/// they were large ones.
pub fn combine_summaries(summaries: &[AccountSummary]) -> AccountSummary {
    let mut total = AccountSummary::default();
    for summary in summaries {
        total.capital += summary.capital;
        total.current_value += summary.current_value;
        total.current_profit += summary.current_profit;
        total.actual_profit += summary.actual_profit;
        total.total_balance += summary.total_balance;
        total.cash += summary.cash;
        total.today_profit += summary.today_profit;
    }

    total.total_profit = total.current_profit + total.actual_profit;
    total.total_profit_rate = if total.capital.is_zero() {
        Decimal::ZERO
    } else {
        ((total.total_balance - total.capital) / total.capital * dec!(100))
            .round_dp(DISPLAY_DECIMAL_PRECISION)
    };
    total
}

/// Restates a summary's monetary fields in another currency at a single
/// reporting-time rate. The profit rate is a ratio and does not scale.
pub fn convert_summary(summary: &AccountSummary, fx_rate: Decimal) -> AccountSummary {
    AccountSummary {
        capital: (summary.capital * fx_rate).round_dp(0),
        current_value: (summary.current_value * fx_rate).round_dp(0),
        current_profit: (summary.current_profit * fx_rate).round_dp(0),
        actual_profit: (summary.actual_profit * fx_rate).round_dp(0),
        total_balance: (summary.total_balance * fx_rate).round_dp(0),
        cash: (summary.cash * fx_rate).round_dp(0),
        total_profit: (summary.total_profit * fx_rate).round_dp(0),
        total_profit_rate: summary.total_profit_rate,
        today_profit: (summary.today_profit * fx_rate).round_dp(0),
    }
}

/// Converts a summary at the latest available rate from the converter.
pub fn convert_summary_with(
    summary: &AccountSummary,
    converter: &CurrencyConverter,
    from_currency: &str,
    to_currency: &str,
) -> Result<AccountSummary> {
    let fx_rate = converter.latest_rate(from_currency, to_currency)?;
    Ok(convert_summary(summary, fx_rate))
}

/// Groups allocation entries by tag.
///
/// Each entry's cost and value are restated through its own `fx_rate`
/// before summing. Weight is the group's share of total market value;
/// profit rate is group profit over group cost basis (0 when the basis is
/// not positive). Groups come back sorted by market value, largest first.
pub fn group_entries(entries: &[AllocationEntry]) -> Vec<GroupAllocation> {
    debug!("Grouping {} allocation entries", entries.len());

    let mut groups: BTreeMap<&str, (Decimal, Decimal)> = BTreeMap::new();
    for entry in entries {
        let slot = groups
            .entry(entry.group.as_str())
            .or_insert((Decimal::ZERO, Decimal::ZERO));
        slot.0 += entry.cost_basis * entry.fx_rate;
        slot.1 += entry.market_value * entry.fx_rate;
    }

    let total_value: Decimal = groups.values().map(|(_, value)| *value).sum();

    let mut allocations: Vec<GroupAllocation> = groups
        .into_iter()
        .map(|(group, (cost_basis, market_value))| {
            let profit = market_value - cost_basis;
            let weight_pct = if total_value.is_zero() {
                Decimal::ZERO
            } else {
                (market_value / total_value * dec!(100)).round_dp(DISPLAY_DECIMAL_PRECISION)
            };
            let profit_rate = if cost_basis <= Decimal::ZERO {
                Decimal::ZERO
            } else {
                (profit / cost_basis * dec!(100)).round_dp(DISPLAY_DECIMAL_PRECISION)
            };

            GroupAllocation {
                group: group.to_string(),
                cost_basis: cost_basis.round_dp(0),
                market_value: market_value.round_dp(0),
                weight_pct,
                profit: profit.round_dp(0),
                profit_rate,
            }
        })
        .collect();

    allocations.sort_by(|a, b| b.market_value.cmp(&a.market_value));
    allocations
}

/// Combines account summaries (FX-converted where a rate is given) and
/// groups the supplied entries into a portfolio-level view.
pub fn rollup(inputs: &[RollupInput], entries: &[AllocationEntry]) -> RollupResult {
    let converted: Vec<AccountSummary> = inputs
        .iter()
        .map(|input| match input.fx_rate {
            Some(fx_rate) => convert_summary(&input.summary, fx_rate),
            None => input.summary.clone(),
        })
        .collect();

    RollupResult {
        summary: combine_summaries(&converted),
        allocations: group_entries(entries),
    }
}
