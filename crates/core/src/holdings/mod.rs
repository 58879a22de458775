//! Lot accounting engine - cost basis strategies and holdings valuation.

mod cost_basis;
mod holdings_calculator;
mod holdings_model;

pub use cost_basis::{
    CostBasisStrategy, FifoLotMatching, LotAcquisition, LotDisposal, SellOutcome,
    WeightedAverageCost,
};
pub use holdings_calculator::HoldingsCalculator;
pub use holdings_model::{InstrumentSummary, Position, ValuationConfig};
