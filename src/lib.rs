//! @ai:module:intent sb-perf library: aggregate benchmark result files into statistics
//! @ai:module:layer application
//! @ai:module:public_api config, error, metrics, pipeline, report, results
//!
//! # sb-perf
//!
//! Post-processes benchmark result files: every result file under a directory is
//! one run, runs are grouped by group identifier, and each task's samples are
//! reduced to min, max, mean and median.
//!
//! ## Example
//!
//! ```rust,no_run
//! use sb_perf::{pipeline, PerfConfig, RunOptions, StdSink};
//!
//! let options = RunOptions {
//!     directories: vec!["results/before".into(), "results/after".into()],
//!     json_output: None,
//! };
//! pipeline::run(&PerfConfig::default(), &options, &mut StdSink).unwrap();
//! ```

pub mod config;
pub mod error;
pub mod metrics;
pub mod pipeline;
pub mod report;
pub mod results;

pub use config::{AggregationConfig, DiscoveryConfig, DuplicateTaskPolicy, PerfConfig};
pub use error::{Error, Result};
pub use metrics::{Results, ResultsAggregator, ResultsByGroupId, Row, RowByGroupId, Statistics};
pub use pipeline::{run, RunOptions};
pub use report::{BufferSink, DirectoryReport, OutputSink, ReportGenerator, StdSink};
pub use results::{Record, ResultLoader, ResultMap};
