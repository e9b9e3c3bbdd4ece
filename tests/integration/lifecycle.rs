//! End-to-end lifecycle behavior: selection, skipping, dry-run, failure.

use drover::cli::DriverCli;
use drover::ledger::StageOutcome;
use drover::registry::StageRegistry;
use drover::reporter::{MemoryReporter, ReporterEvent};
use drover::stage::DriverScript;

use crate::helpers::{registered_names, ReleaseScript};

#[test]
fn test_all_selected_stages_run_in_invocation_order() {
    let reporter = MemoryReporter::new();
    let mut script = ReleaseScript::new(reporter.clone());
    script.driver_mut().set_stages_to_run(registered_names());

    script.run().expect("Full run should succeed");

    assert_eq!(
        script.commands_run,
        [
            "mkdir -p target",
            "cargo build --release --target-dir target",
            "cargo test --release",
        ]
    );
    let order: Vec<&str> = script
        .driver()
        .ledger()
        .iter()
        .map(|entry| entry.name.as_str())
        .collect();
    assert_eq!(order, ["setup", "build", "test"]);
    assert!(script
        .driver()
        .ledger()
        .iter()
        .all(|entry| entry.outcome == StageOutcome::Completed));
}

#[test]
fn test_unselected_stages_are_skipped_but_still_timed() {
    let reporter = MemoryReporter::new();
    let mut script = ReleaseScript::new(reporter.clone());
    script.driver_mut().set_stages_to_run(["build"]);

    script.run().expect("Run with skips should succeed");

    // Only the selected stage actually did work
    assert_eq!(
        script.commands_run,
        ["cargo build --release --target-dir target"]
    );

    // Every invoked stage has a ledger entry regardless
    assert_eq!(script.driver().ledger().len(), 3);
    let setup = script.driver().ledger().get("setup").expect("entry");
    assert_eq!(setup.outcome, StageOutcome::Skipped);
    let build = script.driver().ledger().get("build").expect("entry");
    assert_eq!(build.outcome, StageOutcome::Completed);

    // Headings are printed even for skipped stages, and each skip is noticed
    let headings: Vec<String> = reporter
        .events()
        .into_iter()
        .filter_map(|event| match event {
            ReporterEvent::Heading { message, .. } => Some(message),
            _ => None,
        })
        .collect();
    assert_eq!(
        headings,
        [
            "Setting up the workspace",
            "Building the project",
            "Running the test suite",
        ]
    );
    let skip_count = reporter
        .lines()
        .iter()
        .filter(|line| *line == "Skipping this stage.")
        .count();
    assert_eq!(skip_count, 2);
}

#[test]
fn test_failing_stage_aborts_the_sequence_and_propagates() {
    let reporter = MemoryReporter::new();
    let mut script = ReleaseScript::new(reporter.clone());
    script.driver_mut().set_stages_to_run(registered_names());
    script.fail_tests = true;

    let err = script.run().expect_err("Failing tests should abort the run");
    assert_eq!(err.to_string(), "3 tests failed");

    // The failure was still timed, and nothing after it ran
    let test_entry = script.driver().ledger().get("test").expect("entry");
    assert_eq!(test_entry.outcome, StageOutcome::Failed);
    assert!(reporter
        .lines()
        .iter()
        .any(|line| line.starts_with("`test` stage duration:")));
}

#[test]
fn test_dry_run_announces_formatted_commands() {
    let reporter = MemoryReporter::new();
    let mut script = ReleaseScript::new(reporter.clone());
    script.driver_mut().set_stages_to_run(registered_names());
    script.driver_mut().set_dry_run(true);

    script.run().expect("Dry run should succeed");

    assert!(
        script.commands_run.is_empty(),
        "Dry-run mode must not execute commands"
    );
    let announcements: Vec<String> = reporter
        .events()
        .into_iter()
        .filter_map(|event| match event {
            ReporterEvent::DryRun { message, .. } => Some(message),
            _ => None,
        })
        .collect();
    assert_eq!(announcements.len(), 3);
    assert_eq!(
        announcements[1],
        "cargo \\\n    build \\\n    --release \\\n    --target-dir target"
    );
}

#[test]
fn test_registry_is_shared_across_instances_of_the_script_type() {
    let first = ReleaseScript::new(MemoryReporter::new());
    let second = ReleaseScript::new(MemoryReporter::new());
    drop((first, second));

    // Declarations are deduped: constructing more instances never grows the
    // stage list
    assert_eq!(registered_names(), ["setup", "build", "test"]);
}

#[test]
fn test_options_surface_drives_stage_selection() {
    let mut registry = StageRegistry::new();
    for name in registered_names() {
        registry.register(&name).expect("valid name");
    }
    let cli = DriverCli::new("release", &registry);
    let args = cli
        .parse_from(["release", "--stage", "setup", "test", "--dry-run"])
        .expect("Should parse");

    let reporter = MemoryReporter::new();
    let mut script = ReleaseScript::new(reporter);
    script.driver_mut().apply_args(&args, &registry);

    assert!(script.driver().is_dry_run());
    assert!(script.driver().should_run("setup"));
    assert!(script.driver().should_run("test"));
    assert!(!script.driver().should_run("build"));
}
