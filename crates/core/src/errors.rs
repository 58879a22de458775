//! Core error types for the portfolio engine.
//!
//! A ledger-read failure is the only condition fatal to a whole
//! computation. The other domains recover locally: a failed price lookup
//! or a missing FX rate degrades the affected slice to zeros instead of
//! surfacing here.

use thiserror::Error;

use crate::fx::FxError;
use crate::ledger::LedgerError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the portfolio engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Ledger read failed: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Fx error: {0}")]
    Fx(#[from] FxError),

    #[error("Input validation failed: {0}")]
    Validation(String),
}
