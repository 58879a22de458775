//! Ledger module - typed records supplied by the transaction normalizer.

mod ledger_errors;
mod ledger_model;
mod ledger_traits;

pub use ledger_errors::LedgerError;
pub use ledger_model::{CashFlowDirection, CashMovement, DividendRecord, TradeRecord, TradeSide};
pub use ledger_traits::LedgerSource;

#[cfg(test)]
mod ledger_model_tests;
