//! @ai:module:intent Sample aggregation and statistics
//! @ai:module:layer application
//! @ai:module:public_api Results, ResultsByGroupId, Row, RowByGroupId, ResultsAggregator, Statistics

pub mod aggregator;
pub mod stats;
pub mod types;

pub use aggregator::{
    combine_by_group, uniform_sample_count, ResultsAggregator, ResultsAggregatorTrait,
};
pub use stats::{calculate_by_group, calculate_rows, format_samples, mean, median, Statistics};
pub use types::{Results, ResultsByGroupId, Row, RowByGroupId};
