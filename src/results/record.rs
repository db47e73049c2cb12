//! @ai:module:intent Raw benchmark records as written by performance test runs
//! @ai:module:layer domain
//! @ai:module:public_api Record, RawValue, ResultMap, ResultFile, RunEnvelope
//! @ai:module:stateless true

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// @ai:intent One measurement from one benchmark task run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub task_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_ms: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<RawValue>,
}

/// @ai:intent Unconverted measurement, either already numeric or a numeric string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

/// Record key -> record, in the order the records appear in the file.
pub type ResultMap = IndexMap<String, Record>;

/// @ai:intent Result file wrapping a result map with an explicit group identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunEnvelope {
    #[serde(default)]
    pub group_id: Option<String>,
    pub results: ResultMap,
}

/// @ai:intent Accepted on-disk shapes of a result file
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ResultFile {
    Envelope(RunEnvelope),
    Bare(ResultMap),
}

impl ResultFile {
    /// @ai:intent Split a parsed file into its explicit group id and records
    /// @ai:effects pure
    pub fn into_parts(self) -> (Option<String>, ResultMap) {
        match self {
            ResultFile::Envelope(envelope) => (envelope.group_id, envelope.results),
            ResultFile::Bare(results) => (None, results),
        }
    }
}

#[cfg(test)]
impl Record {
    /// @ai:intent Build a record carrying an average duration
    /// @ai:effects pure
    pub fn with_average(task_name: impl Into<String>, average_ms: f64) -> Self {
        Self {
            task_name: task_name.into(),
            average_ms: Some(average_ms),
            value: None,
        }
    }

    /// @ai:intent Build a record carrying a raw string value
    /// @ai:effects pure
    pub fn with_value(task_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            task_name: task_name.into(),
            average_ms: None,
            value: Some(RawValue::Text(value.into())),
        }
    }
}
