//! @ai:module:intent Fold raw records into per-task, per-group sample lists
//! @ai:module:layer application
//! @ai:module:public_api ResultsAggregator, ResultsAggregatorTrait, combine_by_group, uniform_sample_count
//! @ai:module:stateless true

use crate::config::{AggregationConfig, DuplicateTaskPolicy};
use crate::error::{Error, Result};
use crate::metrics::types::{Results, ResultsByGroupId};
use crate::results::extract::task_value;
use crate::results::record::{Record, ResultMap};

/// @ai:intent Trait for turning one run's records into task samples
pub trait ResultsAggregatorTrait {
    /// @ai:intent Map every record of a run to its task's samples
    fn to_task_value_map(&self, result_map: &ResultMap) -> Result<Results>;
}

/// @ai:intent Aggregates records according to the configured duplicate and malformed-record handling
pub struct ResultsAggregator {
    config: AggregationConfig,
}

impl ResultsAggregator {
    /// @ai:intent Create a new aggregator
    /// @ai:effects pure
    pub fn new(config: AggregationConfig) -> Self {
        Self { config }
    }

    /// @ai:intent Extract a record's sample, rejecting missing and non-finite measurements
    /// @ai:effects pure
    fn sample(record: &Record) -> Result<f64> {
        let malformed = |reason: &str| Error::MalformedRecord {
            task: record.task_name.clone(),
            reason: reason.to_string(),
        };

        if record.task_name.trim().is_empty() {
            return Err(malformed("taskName is empty"));
        }
        if record.average_ms.is_some_and(|ms| ms < 0.0) {
            return Err(malformed("averageMs is negative"));
        }

        match task_value(record) {
            Some(value) if value.is_finite() => Ok(value),
            Some(_) => Err(malformed("value is not a finite number")),
            None => Err(malformed("record has neither averageMs nor value")),
        }
    }
}

impl Default for ResultsAggregator {
    fn default() -> Self {
        Self::new(AggregationConfig::default())
    }
}

impl ResultsAggregatorTrait for ResultsAggregator {
    /// @ai:intent Build task -> samples for one run
    /// @ai:effects pure, log
    fn to_task_value_map(&self, result_map: &ResultMap) -> Result<Results> {
        let mut results = Results::new();

        for (key, record) in result_map {
            let value = match Self::sample(record) {
                Ok(value) => value,
                Err(e) if self.config.skip_malformed => {
                    tracing::warn!("Skipping record {}: {}", key, e);
                    continue;
                }
                Err(e) => return Err(e),
            };

            let samples = results.entry(record.task_name.clone()).or_default();

            match self.config.duplicate_tasks {
                DuplicateTaskPolicy::Concatenate => samples.push(value),
                DuplicateTaskPolicy::LastWriteWins => {
                    samples.clear();
                    samples.push(value);
                }
            }
        }

        Ok(results)
    }
}

/// @ai:intent Append one run's samples to the aggregate under its group
/// @ai:effects pure
pub fn combine_by_group(
    mut aggregate: ResultsByGroupId,
    (group_id, results): (String, Results),
) -> ResultsByGroupId {
    let group = aggregate.entry(group_id).or_default();

    for (task_name, samples) in results {
        group.entry(task_name).or_default().extend(samples);
    }

    aggregate
}

/// @ai:intent Return the sample count shared by every task
/// @ai:pre results is non-empty and every task has the same, non-zero, number of samples
/// @ai:effects pure
pub fn uniform_sample_count(results: &Results) -> Result<usize> {
    let (first_task, first_samples) = results.first().ok_or(Error::EmptyResults)?;
    let expected = first_samples.len();

    if expected == 0 {
        return Err(Error::EmptySamples(first_task.clone()));
    }

    for (task, samples) in results.iter().skip(1) {
        if samples.len() != expected {
            return Err(Error::UnevenSampleCounts {
                task: task.clone(),
                expected,
                actual: samples.len(),
            });
        }
    }

    Ok(expected)
}
