//! @ai:module:intent Descriptive statistics over task samples
//! @ai:module:layer domain
//! @ai:module:public_api median, mean, Statistics, calculate_rows, calculate_by_group, format_samples
//! @ai:module:stateless true

use crate::error::{Error, Result};
use crate::metrics::aggregator::uniform_sample_count;
use crate::metrics::types::{Results, ResultsByGroupId, Row, RowByGroupId};

/// @ai:intent Median of a sample list
/// @ai:post None for an empty list
/// @ai:effects pure
pub fn median(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let middle = sorted.len() / 2;

    if sorted.len() % 2 == 0 {
        Some((sorted[middle - 1] + sorted[middle]) / 2.0)
    } else {
        Some(sorted[middle])
    }
}

/// @ai:intent Arithmetic mean of a sample list
/// @ai:post None for an empty list
/// @ai:effects pure
pub fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        None
    } else {
        Some(samples.iter().sum::<f64>() / samples.len() as f64)
    }
}

/// @ai:intent Render samples as a comma-joined list
/// @ai:effects pure
pub fn format_samples(samples: &[f64]) -> String {
    samples
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// @ai:intent Min, max, mean and median of one task's samples
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
}

impl Statistics {
    /// @ai:intent Compute statistics for a task's samples
    /// @ai:pre samples is non-empty
    /// @ai:effects pure
    pub fn from_samples(task: &str, samples: &[f64]) -> Result<Self> {
        let empty = || Error::EmptySamples(task.to_string());

        let mean = mean(samples).ok_or_else(empty)?;
        let median = median(samples).ok_or_else(empty)?;
        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Ok(Self {
            min,
            max,
            mean,
            median,
        })
    }
}

/// @ai:intent One statistics row per task, in task order
/// @ai:pre every task in results has the same non-zero sample count
/// @ai:effects pure
pub fn calculate_rows(results: &Results) -> Result<Vec<Row>> {
    let num_results = uniform_sample_count(results)?;

    results
        .iter()
        .map(|(key, samples)| {
            Statistics::from_samples(key, samples).map(|stats| Row {
                key: key.clone(),
                num_results,
                samples: format_samples(samples),
                min_value: stats.min,
                max_value: stats.max,
                mean_value: stats.mean,
                median_value: stats.median,
            })
        })
        .collect()
}

/// @ai:intent Statistics rows for every group
/// @ai:effects pure
pub fn calculate_by_group(by_group: &ResultsByGroupId) -> Result<RowByGroupId> {
    by_group
        .iter()
        .map(|(group_id, results)| calculate_rows(results).map(|rows| (group_id.clone(), rows)))
        .collect()
}
