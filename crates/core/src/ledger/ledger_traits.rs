use async_trait::async_trait;

use super::{CashMovement, DividendRecord, LedgerError, TradeRecord};

/// Read-only access to the external ledger store.
///
/// A failure here aborts the whole computation; it is the one fatal error
/// in the engine's contract.
#[async_trait]
pub trait LedgerSource: Send + Sync {
    /// All trades booked to one account, in original ledger order.
    async fn trades(&self, account_id: &str) -> Result<Vec<TradeRecord>, LedgerError>;

    /// All cash movements booked to one account.
    async fn cash_movements(&self, account_id: &str) -> Result<Vec<CashMovement>, LedgerError>;

    /// Every dividend row in the ledger, across accounts.
    async fn dividends(&self) -> Result<Vec<DividendRecord>, LedgerError>;
}
