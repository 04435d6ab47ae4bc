use std::fs;
use std::path::Path;
use txn_latency::commands::{
    execute_bounds, execute_spans, validate_args, validate_report_file, BoundsArgs, SpansArgs,
};
use txn_latency::aggregator::TimeBounds;
use txn_latency::output::read_report;

fn write_cluster_logs(dir: &Path) {
    fs::write(
        dir.join("node1_transactions_log.csv"),
        "transaction_id,time\nnode1_0_T,1000000\nnode2_0_T,1500000\n",
    )
    .unwrap();
    fs::write(
        dir.join("node2_transactions_log.csv"),
        "transaction_id,time\nnode1_0_T,3000000\nnode2_0_T,1500000\n",
    )
    .unwrap();
    fs::write(
        dir.join("node3_transactions_log.csv"),
        "transaction_id,time\nnode1_0_T,6000000\nnode3_0_T,2000000\n",
    )
    .unwrap();
}

#[test]
fn test_validate_args_default() {
    assert!(validate_args(&SpansArgs::default()).is_ok());
}

#[test]
fn test_validate_args_zero_nodes() {
    let args = SpansArgs {
        node_count: 0,
        ..Default::default()
    };
    assert!(validate_args(&args).is_err());
}

#[test]
fn test_execute_bounds() {
    let dir = tempfile::tempdir().unwrap();
    write_cluster_logs(dir.path());

    let args = BoundsArgs {
        log_dir: dir.path().to_path_buf(),
        print_times: false,
        ..Default::default()
    };
    let bounds = execute_bounds(&args).unwrap();

    assert_eq!(bounds.len(), 3);
    assert_eq!(
        bounds["node1_0_T"],
        TimeBounds {
            min: 1_000_000,
            max: 6_000_000
        }
    );
    assert_eq!(
        bounds["node2_0_T"],
        TimeBounds {
            min: 1_500_000,
            max: 1_500_000
        }
    );
}

#[test]
fn test_execute_spans_writes_outputs() {
    let dir = tempfile::tempdir().unwrap();
    write_cluster_logs(dir.path());
    let json_path = dir.path().join("out/report.json");
    let svg_path = dir.path().join("out/percentiles.svg");

    let args = SpansArgs {
        log_dir: dir.path().to_path_buf(),
        top_n: 2,
        output_json: Some(json_path.clone()),
        output_svg: Some(svg_path.clone()),
        print_tables: false,
        ..Default::default()
    };
    let report = execute_spans(&args).unwrap();

    assert_eq!(report.record_count, 6);
    assert_eq!(report.transaction_count, 3);
    assert_eq!(report.slowest[0].transaction_id, "node1_0_T");
    assert_eq!(report.slowest[0].span, 5.0);
    assert_eq!(report.fastest.len(), 2);
    assert_eq!(report.summary.max, 5.0);
    assert_eq!(report.summary.min, 0.0);

    assert!(svg_path.exists());
    let loaded = read_report(&json_path).unwrap();
    assert_eq!(loaded.slowest, report.slowest);
    assert_eq!(loaded.fastest, report.fastest);
    assert_eq!(loaded.source_files.len(), 3);
    assert!(validate_report_file(&json_path).is_ok());
}

#[test]
fn test_execute_spans_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    write_cluster_logs(dir.path());

    let run = |name: &str| {
        let svg_path = dir.path().join(name);
        let args = SpansArgs {
            log_dir: dir.path().to_path_buf(),
            output_svg: Some(svg_path.clone()),
            print_tables: false,
            ..Default::default()
        };
        let report = execute_spans(&args).unwrap();
        (report, fs::read_to_string(svg_path).unwrap())
    };

    let (first, first_svg) = run("a.svg");
    let (second, second_svg) = run("b.svg");

    assert_eq!(first.slowest, second.slowest);
    assert_eq!(first.fastest, second.fastest);
    assert_eq!(first.summary, second.summary);
    assert_eq!(first_svg, second_svg);
}

#[test]
fn test_execute_spans_missing_logs_fails() {
    let dir = tempfile::tempdir().unwrap();

    let args = SpansArgs {
        log_dir: dir.path().to_path_buf(),
        output_svg: None,
        print_tables: false,
        ..Default::default()
    };
    assert!(execute_spans(&args).is_err());
}

#[test]
fn test_execute_spans_empty_logs_skip_plot() {
    let dir = tempfile::tempdir().unwrap();
    for node in 1..=3 {
        fs::write(
            dir.path().join(format!("node{}_transactions_log.csv", node)),
            "transaction_id,time\n",
        )
        .unwrap();
    }
    let svg_path = dir.path().join("empty.svg");

    let args = SpansArgs {
        log_dir: dir.path().to_path_buf(),
        output_svg: Some(svg_path.clone()),
        print_tables: false,
        ..Default::default()
    };
    let report = execute_spans(&args).unwrap();

    assert_eq!(report.transaction_count, 0);
    assert!(!svg_path.exists());
}
