//! @ai:module:intent Drive one sb-perf invocation from directories to reports
//! @ai:module:layer application
//! @ai:module:public_api RunOptions, run
//! @ai:module:depends_on results, metrics, report

use crate::config::PerfConfig;
use crate::error::Result;
use crate::metrics::calculate_by_group;
use crate::report::{print_usage, DirectoryReport, OutputSink, ReportGenerator};
use crate::results::{ResultLoader, ResultLoaderTrait};
use std::path::PathBuf;

/// @ai:intent Inputs of one invocation
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub directories: Vec<PathBuf>,
    pub json_output: Option<PathBuf>,
}

/// @ai:intent Aggregate every directory, print CSV blocks and the median summary
/// @ai:post returns one report per directory; empty when only usage was printed
/// @ai:effects fs:read, io, log
pub fn run(
    config: &PerfConfig,
    options: &RunOptions,
    sink: &mut dyn OutputSink,
) -> Result<Vec<DirectoryReport>> {
    if options.directories.is_empty() {
        print_usage(sink)?;
        return Ok(Vec::new());
    }

    let loader = ResultLoader::new(config)?;
    let reporter = ReportGenerator::new();
    let mut reports = Vec::with_capacity(options.directories.len());

    for dir in &options.directories {
        tracing::info!("Aggregating results in {}", dir.display());

        let by_group = loader.load_directory(dir)?;
        let report = DirectoryReport {
            label: dir.display().to_string(),
            groups: calculate_by_group(&by_group)?,
        };

        reporter.print_csv(&report, sink)?;
        reports.push(report);
    }

    reporter.print_summary(&reports, sink)?;

    if let Some(path) = &options.json_output {
        reporter.write_json(&reports, path)?;
    }

    Ok(reports)
}
