use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Side of a trade.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeSide {
    Buy,
    Sell,
}

/// One executed trade from the ledger.
///
/// Records are immutable once ingested. Ordering by `trade_date` is
/// significant; same-day trades keep their original ledger order.
/// Numeric fields arrive pre-validated (malformed values coerced to zero
/// upstream).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TradeRecord {
    pub account_id: String,
    pub instrument_id: String,
    pub instrument_name: String,
    /// Caller-defined tag used for grouped rollups (theme, country, ...).
    pub asset_class: String,
    pub trade_date: NaiveDate,
    pub side: TradeSide,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    /// Gross trade amount.
    pub amount: Decimal,
    /// Fees and taxes charged on the trade.
    pub fee: Decimal,
    /// Latest recorded price, for instruments without a tradable quote.
    #[serde(default)]
    pub marked_price: Option<Decimal>,
}

/// Direction of a cash movement.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CashFlowDirection {
    Deposit,
    Withdrawal,
}

/// A deposit into or withdrawal out of an account.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CashMovement {
    pub account_id: String,
    pub date: NaiveDate,
    pub direction: CashFlowDirection,
    pub amount: Decimal,
}

impl CashMovement {
    /// The movement's contribution to net contributed capital.
    pub fn signed_amount(&self) -> Decimal {
        match self.direction {
            CashFlowDirection::Deposit => self.amount,
            CashFlowDirection::Withdrawal => -self.amount,
        }
    }
}

/// A dividend payout credited to an account.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DividendRecord {
    pub account_id: String,
    pub amount: Decimal,
}
