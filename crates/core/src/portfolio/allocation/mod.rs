mod allocation_model;
mod allocation_service;

pub use allocation_model::{AllocationEntry, GroupAllocation, RollupInput, RollupResult};
pub use allocation_service::{
    combine_summaries, convert_summary, convert_summary_with, group_entries, rollup,
};
