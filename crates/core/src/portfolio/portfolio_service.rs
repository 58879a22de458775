use std::sync::Arc;

use log::debug;

use super::summary::{AccountSummary, SummaryService};
use crate::errors::Result;
use crate::holdings::Position;
use crate::ledger::LedgerSource;

/// Ledger-backed façade over the summary computation.
///
/// The only failure it surfaces is a ledger read error; everything else
/// degrades inside the engine to zeros for the affected slice.
pub struct PortfolioService {
    ledger: Arc<dyn LedgerSource>,
    summary: SummaryService,
}

impl PortfolioService {
    pub fn new(ledger: Arc<dyn LedgerSource>, summary: SummaryService) -> Self {
        PortfolioService { ledger, summary }
    }

    /// Open positions for one account.
    pub async fn account_positions(&self, account_id: &str) -> Result<Vec<Position>> {
        let (positions, _) = self.summarize_account(account_id).await?;
        Ok(positions)
    }

    /// Positions plus financial summary for one account, recomputed fresh
    /// from the full ledger.
    pub async fn summarize_account(
        &self,
        account_id: &str,
    ) -> Result<(Vec<Position>, AccountSummary)> {
        debug!("Summarizing account {}", account_id);

        let trades = self.ledger.trades(account_id).await?;
        let cash_movements = self.ledger.cash_movements(account_id).await?;
        let dividends = self.ledger.dividends().await?;

        Ok(self
            .summary
            .summarize(&trades, &cash_movements, &dividends)
            .await)
    }
}
