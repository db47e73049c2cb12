//! @ai:module:intent Aggregated sample and statistics types
//! @ai:module:layer domain
//! @ai:module:public_api Results, ResultsByGroupId, Row, RowByGroupId
//! @ai:module:stateless true

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Task name -> samples, both in encounter order.
pub type Results = IndexMap<String, Vec<f64>>;

/// Group identifier -> that group's samples.
pub type ResultsByGroupId = BTreeMap<String, Results>;

/// Group identifier -> statistics rows, one per task.
pub type RowByGroupId = BTreeMap<String, Vec<Row>>;

/// @ai:intent Computed statistics for one task within one group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub key: String,
    pub num_results: usize,
    /// Comma-joined samples in their original order
    pub samples: String,
    pub min_value: f64,
    pub max_value: f64,
    pub mean_value: f64,
    pub median_value: f64,
}
