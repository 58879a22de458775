use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Account-level financial summary derived from the full ledger.
///
/// Cash is never ledgered per instrument, so `cash` is always the
/// balancing residual `total_balance - current_value`. Monetary fields
/// are whole currency units; `total_profit_rate` carries two decimals.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    /// Net contributed capital: deposits minus withdrawals.
    pub capital: Decimal,
    /// Market value of open holdings.
    pub current_value: Decimal,
    /// Unrealized profit on open holdings.
    pub current_profit: Decimal,
    /// Realized profit plus dividends.
    pub actual_profit: Decimal,
    pub total_balance: Decimal,
    pub cash: Decimal,
    /// Unrealized plus realized-and-dividend profit.
    pub total_profit: Decimal,
    /// Percent return on contributed capital.
    pub total_profit_rate: Decimal,
    /// Mark-to-market move since the previous close across holdings.
    pub today_profit: Decimal,
}
