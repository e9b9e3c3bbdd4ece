//! Timing report behavior over a full script run.

use std::time::Duration;

use drover::reporter::MemoryReporter;
use drover::stage::DriverScript;

use crate::helpers::{registered_names, ReleaseScript};

#[test]
fn test_report_rows_follow_execution_order() {
    let mut script = ReleaseScript::new(MemoryReporter::new());
    script.driver_mut().set_stages_to_run(registered_names());
    script.run().expect("Run should succeed");

    let report = script.driver().timing_report();
    let names: Vec<&str> = report.rows().iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, ["setup", "build", "test"]);
}

#[test]
fn test_report_total_is_at_least_the_sum_of_rows() {
    let mut script = ReleaseScript::new(MemoryReporter::new());
    script.driver_mut().set_stages_to_run(registered_names());
    script.run().expect("Run should succeed");

    let report = script.driver().timing_report();
    let sum: Duration = report.rows().iter().map(|(_, duration)| *duration).sum();
    assert!(
        report.total() >= sum,
        "Total wall clock ({:?}) should cover the per-stage sum ({sum:?})",
        report.total()
    );
}

#[test]
fn test_report_includes_skipped_stages() {
    let mut script = ReleaseScript::new(MemoryReporter::new());
    script.driver_mut().set_stages_to_run(["test"]);
    script.run().expect("Run should succeed");

    let report = script.driver().timing_report();
    assert_eq!(report.rows().len(), 3, "Skipped stages still get rows");
}

#[test]
fn test_rendered_report_is_a_two_column_table_with_total_footer() {
    let mut script = ReleaseScript::new(MemoryReporter::new());
    script.driver_mut().set_stages_to_run(registered_names());
    script.run().expect("Run should succeed");

    let rendered = script.driver().timing_report().render();
    let lines: Vec<&str> = rendered.lines().collect();

    assert!(lines[0].contains("Stage") && lines[0].contains("Duration"));
    assert!(lines.iter().any(|line| line.starts_with("setup")));
    assert!(lines.iter().any(|line| line.starts_with("build")));
    assert!(lines.iter().any(|line| line.starts_with("test")));
    let footer = lines.last().expect("report should not be empty");
    assert!(footer.starts_with("Total"), "Footer should be the total row");
}
