//! @ai:module:intent Report generation for aggregated benchmark statistics
//! @ai:module:layer infrastructure
//! @ai:module:public_api OutputSink, StdSink, BufferSink, DirectoryReport, ReportGenerator, CsvReporter, SummaryReporter, JsonReporter

pub mod csv_report;
pub mod json_report;
pub mod summary_report;

pub use csv_report::{CsvReporter, CsvReporterTrait};
pub use json_report::{JsonReport, JsonReporter, JsonReporterTrait};
pub use summary_report::{SummaryReporter, SummaryReporterTrait, KEY_WIDTH, VALUE_WIDTH};

use crate::error::Result;
use crate::metrics::RowByGroupId;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

pub const USAGE: &str = "Usage:
sb-perf <directory> [...<directory>]

Example
sb-perf results-directory > output-file.csv
# OR
sb-perf ABTestDirectory OtherDirectory > output-file.csv
";

/// @ai:intent Destination for report text, split into data and diagnostic channels
pub trait OutputSink {
    /// @ai:intent Write one line of report data (CSV)
    fn primary(&mut self, line: &str) -> Result<()>;

    /// @ai:intent Write one line of human-oriented output (summary, usage)
    fn diagnostic(&mut self, line: &str) -> Result<()>;
}

/// @ai:intent Sink writing data to stdout and diagnostics to stderr
#[derive(Debug, Default)]
pub struct StdSink;

impl OutputSink for StdSink {
    /// @ai:effects io
    fn primary(&mut self, line: &str) -> Result<()> {
        writeln!(std::io::stdout().lock(), "{}", line)?;
        Ok(())
    }

    /// @ai:effects io
    fn diagnostic(&mut self, line: &str) -> Result<()> {
        writeln!(std::io::stderr().lock(), "{}", line)?;
        Ok(())
    }
}

/// @ai:intent Sink capturing lines in memory
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BufferSink {
    pub primary: Vec<String>,
    pub diagnostic: Vec<String>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutputSink for BufferSink {
    fn primary(&mut self, line: &str) -> Result<()> {
        self.primary.push(line.to_string());
        Ok(())
    }

    fn diagnostic(&mut self, line: &str) -> Result<()> {
        self.diagnostic.push(line.to_string());
        Ok(())
    }
}

/// @ai:intent Print usage text on the diagnostic channel
/// @ai:effects io
pub fn print_usage(sink: &mut dyn OutputSink) -> Result<()> {
    sink.diagnostic(USAGE)
}

/// @ai:intent Statistics computed for one results directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryReport {
    /// Directory as given on the command line
    pub label: String,
    pub groups: RowByGroupId,
}

/// @ai:intent Combined report generator
pub struct ReportGenerator {
    csv: CsvReporter,
    summary: SummaryReporter,
    json: JsonReporter,
}

impl ReportGenerator {
    /// @ai:intent Create a new report generator
    /// @ai:effects pure
    pub fn new() -> Self {
        Self {
            csv: CsvReporter::new(),
            summary: SummaryReporter::new(),
            json: JsonReporter::new(),
        }
    }

    /// @ai:intent Print one CSV block per group of a directory
    /// @ai:effects io
    pub fn print_csv(&self, report: &DirectoryReport, sink: &mut dyn OutputSink) -> Result<()> {
        for rows in report.groups.values() {
            self.csv.print(rows, sink)?;
        }
        Ok(())
    }

    /// @ai:intent Print the median comparison across directories
    /// @ai:effects io
    pub fn print_summary(
        &self,
        reports: &[DirectoryReport],
        sink: &mut dyn OutputSink,
    ) -> Result<()> {
        let names: Vec<String> = reports.iter().map(|r| r.label.clone()).collect();
        let groups: Vec<RowByGroupId> = reports.iter().map(|r| r.groups.clone()).collect();
        self.summary.print(&names, &groups, sink)
    }

    /// @ai:intent Write the JSON report
    /// @ai:effects fs:write, log
    pub fn write_json(&self, reports: &[DirectoryReport], output_path: &Path) -> Result<()> {
        self.json
            .generate(&JsonReport::new(reports.to_vec()), output_path)?;

        tracing::info!("JSON report written to {}", output_path.display());
        Ok(())
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}
