//! @ai:module:intent Discover and load result files from a results directory
//! @ai:module:layer infrastructure
//! @ai:module:public_api ResultLoader, ResultLoaderTrait, ResultRun
//! @ai:module:depends_on config, metrics

use crate::config::{DiscoveryConfig, PerfConfig};
use crate::error::{Error, Result};
use crate::metrics::{combine_by_group, ResultsAggregator, ResultsAggregatorTrait, ResultsByGroupId};
use crate::results::record::{ResultFile, ResultMap};
use regex::Regex;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// @ai:intent Records of one result file together with the group it belongs to
#[derive(Debug, Clone)]
pub struct ResultRun {
    pub group_id: String,
    pub path: PathBuf,
    pub records: ResultMap,
}

/// @ai:intent Trait for loading result runs from disk
pub trait ResultLoaderTrait {
    /// @ai:intent Load every result file under a directory, in path order
    fn load_runs(&self, results_dir: &Path) -> Result<Vec<ResultRun>>;

    /// @ai:intent Load and fold a directory into per-group task samples
    fn load_directory(&self, results_dir: &Path) -> Result<ResultsByGroupId>;
}

/// @ai:intent Loads JSON result files selected by the discovery configuration
pub struct ResultLoader {
    discovery: DiscoveryConfig,
    file_pattern: Regex,
    aggregator: ResultsAggregator,
}

impl ResultLoader {
    /// @ai:intent Create a loader from configuration
    /// @ai:pre config.discovery.file_pattern is a valid regex
    /// @ai:effects pure
    pub fn new(config: &PerfConfig) -> Result<Self> {
        let file_pattern = Regex::new(&config.discovery.file_pattern).map_err(|e| {
            Error::Config(format!(
                "invalid file_pattern '{}': {}",
                config.discovery.file_pattern, e
            ))
        })?;

        Ok(Self {
            discovery: config.discovery.clone(),
            file_pattern,
            aggregator: ResultsAggregator::new(config.aggregation.clone()),
        })
    }

    /// @ai:intent Find all result files in directory
    /// @ai:effects fs:read
    fn find_result_files(&self, results_dir: &Path) -> Result<Vec<PathBuf>> {
        let mut walker = WalkDir::new(results_dir)
            .follow_links(self.discovery.follow_links)
            .sort_by_file_name();

        if let Some(depth) = self.discovery.max_depth {
            walker = walker.max_depth(depth);
        }

        let mut files = Vec::new();

        for entry in walker {
            let entry = entry?;

            if !entry.file_type().is_file() {
                continue;
            }

            let matches = entry
                .file_name()
                .to_str()
                .map(|name| self.file_pattern.is_match(name))
                .unwrap_or(false);

            if matches {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }

    /// @ai:intent Parse a single result file
    /// @ai:effects fs:read
    fn parse_result_file(path: &Path) -> Result<ResultFile> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| Error::ResultParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Group of result files stored directly in a results directory.
pub const DEFAULT_GROUP: &str = "default";

/// @ai:intent Derive the group a result file belongs to from its location
/// @ai:post parent directories relative to results_dir joined with '/', or DEFAULT_GROUP
/// @ai:effects pure
pub fn group_id_for(results_dir: &Path, file: &Path) -> String {
    let relative_parent = file
        .strip_prefix(results_dir)
        .ok()
        .and_then(Path::parent)
        .map(|parent| {
            parent
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/")
        })
        .unwrap_or_default();

    if relative_parent.is_empty() {
        DEFAULT_GROUP.to_string()
    } else {
        relative_parent
    }
}

impl ResultLoaderTrait for ResultLoader {
    fn load_runs(&self, results_dir: &Path) -> Result<Vec<ResultRun>> {
        if !results_dir.is_dir() {
            return Err(Error::DirectoryNotFound(results_dir.to_path_buf()));
        }

        let files = self.find_result_files(results_dir)?;
        let mut runs = Vec::with_capacity(files.len());

        for path in files {
            tracing::debug!("Reading result file {}", path.display());
            let (explicit_group, records) = Self::parse_result_file(&path)?.into_parts();
            let group_id = explicit_group.unwrap_or_else(|| group_id_for(results_dir, &path));

            runs.push(ResultRun {
                group_id,
                path,
                records,
            });
        }

        Ok(runs)
    }

    /// @ai:effects fs:read, log
    fn load_directory(&self, results_dir: &Path) -> Result<ResultsByGroupId> {
        let runs = self.load_runs(results_dir)?;

        if runs.is_empty() {
            tracing::warn!("No result files found in {}", results_dir.display());
        }

        let mut aggregate = ResultsByGroupId::new();
        for run in &runs {
            let results = self.aggregator.to_task_value_map(&run.records)?;
            aggregate = combine_by_group(aggregate, (run.group_id.clone(), results));
        }

        tracing::info!(
            "Loaded {} runs in {} groups from {}",
            runs.len(),
            aggregate.len(),
            results_dir.display()
        );

        Ok(aggregate)
    }
}
