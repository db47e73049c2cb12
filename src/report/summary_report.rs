//! @ai:module:intent Console summary comparing task medians across results directories
//! @ai:module:layer infrastructure
//! @ai:module:public_api SummaryReporter, KEY_WIDTH, VALUE_WIDTH
//! @ai:module:stateless true

use crate::error::Result;
use crate::metrics::RowByGroupId;
use crate::report::OutputSink;
use indexmap::IndexMap;
use std::fmt::Display;

/// Width of the task/group label column.
pub const KEY_WIDTH: usize = 50;
/// Width of each compared value column.
pub const VALUE_WIDTH: usize = 20;

/// @ai:intent Trait for summary generation
pub trait SummaryReporterTrait {
    /// @ai:intent Print medians of every task, one column per named result set
    fn print(
        &self,
        result_names: &[String],
        results: &[RowByGroupId],
        sink: &mut dyn OutputSink,
    ) -> Result<()>;
}

/// @ai:intent Prints a padded median table on the diagnostic channel
pub struct SummaryReporter;

/// group -> task -> one median per result set, in first-seen order
type MedianTable = IndexMap<String, IndexMap<String, Vec<Option<f64>>>>;

impl SummaryReporter {
    /// @ai:intent Create a new summary reporter
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    fn padded(value: impl Display, width: usize) -> String {
        format!("{:<width$}", value.to_string(), width = width)
    }

    fn value_columns(values: impl IntoIterator<Item = String>) -> String {
        values
            .into_iter()
            .map(|v| Self::padded(v, VALUE_WIDTH))
            .collect::<Vec<_>>()
            .join("| ")
    }

    /// @ai:intent Collect each task's median from every result set
    /// @ai:effects pure
    fn collect_medians(results: &[RowByGroupId]) -> MedianTable {
        let mut table = MedianTable::new();

        for (index, by_group) in results.iter().enumerate() {
            for (group_id, rows) in by_group {
                let group = table.entry(group_id.clone()).or_default();
                for row in rows {
                    group
                        .entry(row.key.clone())
                        .or_insert_with(|| vec![None; results.len()])[index] = Some(row.median_value);
                }
            }
        }

        table
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryReporterTrait for SummaryReporter {
    /// @ai:effects io
    fn print(
        &self,
        result_names: &[String],
        results: &[RowByGroupId],
        sink: &mut dyn OutputSink,
    ) -> Result<()> {
        sink.diagnostic(&format!(
            "{} | {}",
            Self::padded("Type", KEY_WIDTH),
            Self::value_columns(result_names.iter().cloned())
        ))?;

        let divider = "-".repeat(KEY_WIDTH + VALUE_WIDTH * result_names.len());

        for (group_id, tasks) in Self::collect_medians(results) {
            sink.diagnostic(&divider)?;
            sink.diagnostic(&Self::padded(&group_id, KEY_WIDTH))?;
            sink.diagnostic(&divider)?;

            for (task, medians) in tasks {
                sink.diagnostic(&format!(
                    "{} | {}",
                    Self::padded(&task, KEY_WIDTH),
                    Self::value_columns(
                        medians
                            .iter()
                            .map(|m| m.map(|m| m.to_string()).unwrap_or_default())
                    )
                ))?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::Row;
    use crate::report::BufferSink;
    use pretty_assertions::assert_eq;

    fn row(key: &str, median: f64) -> Row {
        Row {
            key: key.to_string(),
            num_results: 1,
            samples: median.to_string(),
            min_value: median,
            max_value: median,
            mean_value: median,
            median_value: median,
        }
    }

    fn by_group(entries: &[(&str, Vec<Row>)]) -> RowByGroupId {
        entries
            .iter()
            .map(|(group, rows)| (group.to_string(), rows.clone()))
            .collect()
    }

    #[test]
    fn test_padded() {
        assert_eq!(SummaryReporter::padded("ab", 5), "ab   ");
        assert_eq!(SummaryReporter::padded(2.5, 4), "2.5 ");
        assert_eq!(SummaryReporter::padded("longer", 3), "longer");
    }

    #[test]
    fn test_summary_layout() {
        let names = vec!["before".to_string(), "after".to_string()];
        let results = vec![
            by_group(&[("button", vec![row("render", 10.0), row("mount", 2.0)])]),
            by_group(&[("button", vec![row("render", 8.0), row("mount", 2.5)])]),
        ];

        let mut sink = BufferSink::new();
        SummaryReporter::new().print(&names, &results, &mut sink).unwrap();

        let divider = "-".repeat(90);
        let expected = vec![
            format!("{:<50} | {:<20}| {:<20}", "Type", "before", "after"),
            divider.clone(),
            format!("{:<50}", "button"),
            divider,
            format!("{:<50} | {:<20}| {:<20}", "render", "10", "8"),
            format!("{:<50} | {:<20}| {:<20}", "mount", "2", "2.5"),
        ];

        assert_eq!(sink.diagnostic, expected);
        assert!(sink.primary.is_empty());
    }

    #[test]
    fn test_summary_groups_in_first_seen_order() {
        let names = vec!["a".to_string(), "b".to_string()];
        let results = vec![
            by_group(&[("modal", vec![row("render", 1.0)])]),
            by_group(&[("button", vec![row("render", 2.0)]), ("modal", vec![row("render", 3.0)])]),
        ];

        let table = SummaryReporter::collect_medians(&results);
        let groups: Vec<_> = table.keys().cloned().collect();

        assert_eq!(groups, vec!["modal", "button"]);
        assert_eq!(table["modal"]["render"], vec![Some(1.0), Some(3.0)]);
        assert_eq!(table["button"]["render"], vec![None, Some(2.0)]);

        let mut sink = BufferSink::new();
        SummaryReporter::new().print(&names, &results, &mut sink).unwrap();
        assert_eq!(sink.diagnostic.len(), 1 + 2 * 4);
        assert_eq!(
            sink.diagnostic.last().unwrap(),
            &format!("{:<50} | {:<20}| {:<20}", "render", "", "2")
        );
    }
}
