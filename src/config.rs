//! @ai:module:intent Configuration structs for result aggregation
//! @ai:module:layer infrastructure
//! @ai:module:public_api PerfConfig, DiscoveryConfig, AggregationConfig, DuplicateTaskPolicy
//! @ai:module:stateless true

use serde::{Deserialize, Serialize};

/// @ai:intent Main configuration for sb-perf
/// @ai:effects pure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerfConfig {
    #[serde(default)]
    pub discovery: DiscoveryConfig,
    #[serde(default)]
    pub aggregation: AggregationConfig,
}

/// @ai:intent Controls which files under a results directory are read
/// @ai:effects pure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Regex matched against the file name (not the full path)
    #[serde(default = "default_file_pattern")]
    pub file_pattern: String,
    #[serde(default)]
    pub max_depth: Option<usize>,
    #[serde(default)]
    pub follow_links: bool,
}

/// @ai:intent Controls how records are folded into per-task samples
/// @ai:effects pure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregationConfig {
    #[serde(default)]
    pub duplicate_tasks: DuplicateTaskPolicy,
    #[serde(default)]
    pub skip_malformed: bool,
}

/// @ai:intent What to do when one result file holds several records for the same task
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicateTaskPolicy {
    /// Keep every sample, in record order
    #[default]
    Concatenate,
    /// Keep only the sample of the last record
    LastWriteWins,
}

impl DuplicateTaskPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DuplicateTaskPolicy::Concatenate => "concatenate",
            DuplicateTaskPolicy::LastWriteWins => "last-write-wins",
        }
    }
}

impl std::fmt::Display for DuplicateTaskPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            file_pattern: default_file_pattern(),
            max_depth: None,
            follow_links: false,
        }
    }
}

fn default_file_pattern() -> String {
    r"\.json$".to_string()
}

impl PerfConfig {
    /// @ai:intent Load configuration from a TOML file
    /// @ai:pre path exists and is readable
    /// @ai:effects fs:read
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// @ai:intent Save configuration to a TOML file
    /// @ai:effects fs:write
    pub fn save(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
