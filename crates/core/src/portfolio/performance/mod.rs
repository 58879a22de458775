mod performance_model;
mod performance_service;

pub use performance_model::{RealizedPeriodReport, ReportingPeriod};
pub use performance_service::{realized_profit_in_period, SettlementFx};
