//! Portfolio module - account summaries, rollups, and period reporting.

pub mod allocation;
pub mod performance;
pub mod summary;

mod portfolio_service;

pub use allocation::*;
pub use performance::*;
pub use portfolio_service::PortfolioService;
pub use summary::*;
