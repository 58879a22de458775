use thiserror::Error;

#[derive(Error, Debug)]
pub enum FxError {
    #[error("No exchange rate found for {0}")]
    RateNotFound(String),

    #[error("Invalid exchange rate: {0}")]
    InvalidRate(String),
}
