//! @ai:module:intent JSON report generation
//! @ai:module:layer infrastructure
//! @ai:module:public_api JsonReport, JsonReporter
//! @ai:module:stateless true

use crate::error::Result;
use crate::report::DirectoryReport;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// @ai:intent Serialized form of a complete sb-perf invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonReport {
    pub timestamp: String,
    pub directories: Vec<DirectoryReport>,
}

impl JsonReport {
    /// @ai:intent Wrap directory reports with the current time
    /// @ai:effects clock
    pub fn new(directories: Vec<DirectoryReport>) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            directories,
        }
    }
}

/// @ai:intent Trait for JSON report generation
pub trait JsonReporterTrait {
    /// @ai:intent Generate JSON report from results
    fn generate(&self, report: &JsonReport, output_path: &Path) -> Result<()>;
}

/// @ai:intent Generates JSON reports from aggregated statistics
pub struct JsonReporter;

impl JsonReporter {
    /// @ai:intent Create a new JSON reporter
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReporterTrait for JsonReporter {
    /// @ai:intent Generate JSON report to file
    /// @ai:effects fs:write
    fn generate(&self, report: &JsonReport, output_path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        std::fs::write(output_path, json)?;
        Ok(())
    }
}
