use thiserror::Error;

/// Errors reading from the external ledger store.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Ledger store unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed ledger data: {0}")]
    Malformed(String),
}
