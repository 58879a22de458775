use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::holdings::Position;
use crate::portfolio::summary::AccountSummary;

/// One row feeding a grouped rollup.
///
/// `fx_rate` is the explicit conversion rate applied at aggregation time;
/// the underlying record is never mutated. Domestic rows carry a rate of
/// one. Rows usually come from positions, but callers can add manual rows
/// for blocks the ledger does not itemize (wrap accounts, savings).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AllocationEntry {
    /// Caller-supplied grouping tag (asset type, strategy name, country).
    pub group: String,
    pub cost_basis: Decimal,
    pub market_value: Decimal,
    pub fx_rate: Decimal,
}

impl AllocationEntry {
    pub fn new(group: &str, cost_basis: Decimal, market_value: Decimal) -> Self {
        AllocationEntry {
            group: group.to_string(),
            cost_basis,
            market_value,
            fx_rate: Decimal::ONE,
        }
    }

    pub fn with_fx_rate(mut self, fx_rate: Decimal) -> Self {
        self.fx_rate = fx_rate;
        self
    }

    /// Entry for a position, grouped by its asset class.
    pub fn from_position(position: &Position) -> Self {
        AllocationEntry::new(
            &position.asset_class,
            position.cost_basis,
            position.market_value,
        )
    }
}

/// Aggregate view of one group within a rollup.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GroupAllocation {
    pub group: String,
    pub cost_basis: Decimal,
    pub market_value: Decimal,
    /// Share of total market value, two decimals.
    pub weight_pct: Decimal,
    pub profit: Decimal,
    /// Group profit over group cost basis, two decimals.
    pub profit_rate: Decimal,
}

/// One account feeding a rollup, with the optional conversion rate into
/// the rollup's home currency.
#[derive(Debug, Clone, PartialEq)]
pub struct RollupInput {
    pub summary: AccountSummary,
    pub fx_rate: Option<Decimal>,
}

impl RollupInput {
    pub fn native(summary: AccountSummary) -> Self {
        RollupInput {
            summary,
            fx_rate: None,
        }
    }

    pub fn converted(summary: AccountSummary, fx_rate: Decimal) -> Self {
        RollupInput {
            summary,
            fx_rate: Some(fx_rate),
        }
    }
}

/// Combined multi-account view.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RollupResult {
    pub summary: AccountSummary,
    pub allocations: Vec<GroupAllocation>,
}
