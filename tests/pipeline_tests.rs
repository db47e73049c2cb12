//! End-to-end tests driving the library pipeline over result directories on disk.

use pretty_assertions::assert_eq;
use sb_perf::report::{JsonReport, USAGE};
use sb_perf::results::DEFAULT_GROUP;
use sb_perf::{pipeline, BufferSink, Error, PerfConfig, RunOptions};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_run(dir: &Path, name: &str, task: &str, value: f64) {
    let path = dir.join(name);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(
        path,
        format!(r#"{{ "0": {{ "taskName": "{}", "averageMs": {} }} }}"#, task, value),
    )
    .unwrap();
}

fn options(directories: Vec<PathBuf>) -> RunOptions {
    RunOptions {
        directories,
        json_output: None,
    }
}

#[test]
fn usage_when_no_directories() {
    let mut sink = BufferSink::new();
    let reports = pipeline::run(&PerfConfig::default(), &options(vec![]), &mut sink).unwrap();

    assert!(reports.is_empty());
    assert!(sink.primary.is_empty());
    assert_eq!(sink.diagnostic, vec![USAGE.to_string()]);
}

#[test]
fn compares_two_directories() {
    let temp = TempDir::new().unwrap();
    let before = temp.path().join("before");
    let after = temp.path().join("after");

    for (i, value) in [5.0, 10.0, 15.0].iter().enumerate() {
        write_run(&before, &format!("button/run-{}.json", i), "render", *value);
    }
    for (i, value) in [7.0, 9.0].iter().enumerate() {
        write_run(&after, &format!("button/run-{}.json", i), "render", *value);
    }

    let mut sink = BufferSink::new();
    let reports = pipeline::run(
        &PerfConfig::default(),
        &options(vec![before.clone(), after.clone()]),
        &mut sink,
    )
    .unwrap();

    assert_eq!(reports.len(), 2);

    let first = &reports[0].groups["button"][0];
    assert_eq!(first.key, "render");
    assert_eq!(first.num_results, 3);
    assert_eq!(
        (first.min_value, first.max_value, first.mean_value, first.median_value),
        (5.0, 15.0, 10.0, 10.0)
    );

    let second = &reports[1].groups["button"][0];
    assert_eq!(second.num_results, 2);
    assert_eq!(
        (second.min_value, second.max_value, second.mean_value, second.median_value),
        (7.0, 9.0, 8.0, 8.0)
    );

    assert_eq!(
        sink.primary,
        vec![
            "type,#1,#2,#3,min,max,mean,median",
            "render,5,10,15,5,15,10,10",
            "type,#1,#2,min,max,mean,median",
            "render,7,9,7,9,8,8",
        ]
    );

    let header = format!(
        "{:<50} | {:<20}| {:<20}",
        "Type",
        before.display().to_string(),
        after.display().to_string()
    );
    assert_eq!(sink.diagnostic[0], header);
    assert_eq!(sink.diagnostic[2], format!("{:<50}", "button"));
    assert_eq!(
        sink.diagnostic.last().unwrap(),
        &format!("{:<50} | {:<20}| {:<20}", "render", "10", "8")
    );
}

#[test]
fn top_level_files_use_default_group() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("baseline");
    write_run(&dir, "run-1.json", "mount", 2.0);
    write_run(&dir, "run-2.json", "mount", 4.0);

    let mut sink = BufferSink::new();
    let reports = pipeline::run(&PerfConfig::default(), &options(vec![dir]), &mut sink).unwrap();

    let rows = &reports[0].groups[DEFAULT_GROUP];
    assert_eq!(rows[0].samples, "2,4");
    assert_eq!(rows[0].median_value, 3.0);
}

#[test]
fn compares_top_level_files_across_directories() {
    let temp = TempDir::new().unwrap();
    let before = temp.path().join("before");
    let after = temp.path().join("after");
    write_run(&before, "r1.json", "render", 10.0);
    write_run(&after, "r1.json", "render", 8.0);

    let mut sink = BufferSink::new();
    pipeline::run(
        &PerfConfig::default(),
        &options(vec![before.clone(), after.clone()]),
        &mut sink,
    )
    .unwrap();

    let divider = "-".repeat(50 + 20 * 2);
    assert_eq!(
        sink.diagnostic,
        vec![
            format!(
                "{:<50} | {:<20}| {:<20}",
                "Type",
                before.display().to_string(),
                after.display().to_string()
            ),
            divider.clone(),
            format!("{:<50}", DEFAULT_GROUP),
            divider,
            format!("{:<50} | {:<20}| {:<20}", "render", "10", "8"),
        ]
    );
}

#[test]
fn csv_rows_follow_record_order_in_file() {
    let temp = TempDir::new().unwrap();
    let records: Vec<String> = (0..11)
        .map(|i| format!(r#""{}": {{ "taskName": "task{}", "averageMs": {} }}"#, i, i, i))
        .collect();
    std::fs::write(
        temp.path().join("run.json"),
        format!("{{ {} }}", records.join(", ")),
    )
    .unwrap();

    let mut sink = BufferSink::new();
    pipeline::run(
        &PerfConfig::default(),
        &options(vec![temp.path().to_path_buf()]),
        &mut sink,
    )
    .unwrap();

    let keys: Vec<_> = sink.primary[1..]
        .iter()
        .map(|line| line.split(',').next().unwrap().to_string())
        .collect();
    let expected: Vec<_> = (0..11).map(|i| format!("task{}", i)).collect();
    assert_eq!(keys, expected);
}

#[test]
fn uneven_sample_counts_are_fatal() {
    let temp = TempDir::new().unwrap();
    write_run(temp.path(), "g/run-1.json", "render", 1.0);
    write_run(temp.path(), "g/run-2.json", "render", 2.0);
    write_run(temp.path(), "g/run-3.json", "mount", 3.0);

    let mut sink = BufferSink::new();
    let err = pipeline::run(
        &PerfConfig::default(),
        &options(vec![temp.path().to_path_buf()]),
        &mut sink,
    )
    .unwrap_err();

    assert!(matches!(err, Error::UnevenSampleCounts { .. }));
    assert!(sink.primary.is_empty());
}

#[test]
fn malformed_records_surface_as_errors() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("run.json"),
        r#"{ "0": { "taskName": "render", "value": "fast" } }"#,
    )
    .unwrap();

    let mut sink = BufferSink::new();
    let err = pipeline::run(
        &PerfConfig::default(),
        &options(vec![temp.path().to_path_buf()]),
        &mut sink,
    )
    .unwrap_err();

    assert!(matches!(err, Error::MalformedRecord { .. }));
}

#[test]
fn missing_directory_is_fatal() {
    let temp = TempDir::new().unwrap();

    let mut sink = BufferSink::new();
    let err = pipeline::run(
        &PerfConfig::default(),
        &options(vec![temp.path().join("nope")]),
        &mut sink,
    )
    .unwrap_err();

    assert!(matches!(err, Error::DirectoryNotFound(_)));
}

#[test]
fn writes_json_report() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("results");
    write_run(&dir, "button/run-1.json", "render", 5.0);
    let json_path = temp.path().join("report.json");

    let mut sink = BufferSink::new();
    let run_options = RunOptions {
        directories: vec![dir],
        json_output: Some(json_path.clone()),
    };
    pipeline::run(&PerfConfig::default(), &run_options, &mut sink).unwrap();

    let report: JsonReport =
        serde_json::from_str(&std::fs::read_to_string(json_path).unwrap()).unwrap();
    assert_eq!(report.directories.len(), 1);
    assert_eq!(report.directories[0].groups["button"][0].median_value, 5.0);
}
