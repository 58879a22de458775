mod summary_model;
mod summary_service;

pub use summary_model::AccountSummary;
pub use summary_service::{aggregate_summary, net_contribution, SummaryService};
