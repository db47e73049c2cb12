//! @ai:module:intent CSV report generation
//! @ai:module:layer infrastructure
//! @ai:module:public_api CsvReporter
//! @ai:module:stateless true

use crate::error::Result;
use crate::metrics::Row;
use crate::report::OutputSink;

/// @ai:intent Trait for CSV report generation
pub trait CsvReporterTrait {
    /// @ai:intent Print rows as a CSV table on the primary channel
    fn print(&self, rows: &[Row], sink: &mut dyn OutputSink) -> Result<()>;
}

/// @ai:intent Prints statistics rows as CSV
pub struct CsvReporter;

impl CsvReporter {
    /// @ai:intent Create a new CSV reporter
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Header with one column per sample
    /// @ai:effects pure
    fn header(num_results: usize) -> String {
        let mut columns = vec!["type".to_string()];
        columns.extend((1..=num_results).map(|i| format!("#{}", i)));
        columns.extend(["min", "max", "mean", "median"].map(String::from));
        columns.join(",")
    }

    fn format_row(row: &Row) -> String {
        format!(
            "{},{},{},{},{},{}",
            row.key, row.samples, row.min_value, row.max_value, row.mean_value, row.median_value
        )
    }
}

impl Default for CsvReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvReporterTrait for CsvReporter {
    /// @ai:effects io
    fn print(&self, rows: &[Row], sink: &mut dyn OutputSink) -> Result<()> {
        let Some(first) = rows.first() else {
            return Ok(());
        };

        sink.primary(&Self::header(first.num_results))?;
        for row in rows {
            sink.primary(&Self::format_row(row))?;
        }

        Ok(())
    }
}
