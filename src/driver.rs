//! Driver base state.
//!
//! A [`Driver`] holds everything one run of a script needs: the reporter, the
//! set of stages selected to run, the dry-run flag, the timing ledger, and
//! the run's start time. Scripts embed one and expose it through
//! [`crate::stage::DriverScript`]; the stage lifecycle does its bookkeeping
//! through the crate-internal begin/skip/end methods here.

use std::collections::HashSet;
use std::time::Instant;

use colored::Color;

use crate::cli::DriverArgs;
use crate::ledger::{format_duration, StageOutcome, TimingLedger, TimingReport};
use crate::registry::StageRegistry;
use crate::reporter::{ConsoleReporter, Reporter};

pub struct Driver {
    reporter: Box<dyn Reporter>,
    current_stage: Option<String>,
    stage_start: Instant,
    ledger: TimingLedger,
    stages_to_run: HashSet<String>,
    dry_run: bool,
    start_time: Instant,
}

impl Driver {
    /// Create a driver that reports to the console.
    pub fn new() -> Self {
        Self::with_reporter(Box::new(ConsoleReporter::new()))
    }

    /// Create a driver with a custom reporter sink.
    pub fn with_reporter(reporter: Box<dyn Reporter>) -> Self {
        let now = Instant::now();
        Self {
            reporter,
            current_stage: None,
            stage_start: now,
            ledger: TimingLedger::new(),
            stages_to_run: HashSet::new(),
            dry_run: false,
            start_time: now,
        }
    }

    /// Print a heading to indicate at a high level what the script is doing.
    pub fn print_heading(&mut self, message: &str) {
        self.print_heading_colored(message, Color::Cyan);
    }

    /// Print a heading in a specific color.
    pub fn print_heading_colored(&mut self, message: &str, color: Color) {
        self.reporter.heading(message, color);
    }

    /// Print a notice that something was *not* executed because the script is
    /// running in dry-run mode.
    pub fn print_dry_run(&mut self, message: &str, indent: usize) {
        self.reporter.dry_run(message, indent);
    }

    /// Select which stages should run.
    ///
    /// Names are not validated against any registry; a stage absent from this
    /// set is simply skipped when invoked.
    pub fn set_stages_to_run<I, S>(&mut self, stages: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stages_to_run = stages.into_iter().map(Into::into).collect();
    }

    pub fn stages_to_run(&self) -> &HashSet<String> {
        &self.stages_to_run
    }

    /// Whether the named stage is selected to run.
    pub fn should_run(&self, name: &str) -> bool {
        self.stages_to_run.contains(name)
    }

    pub fn set_dry_run(&mut self, dry_run: bool) {
        self.dry_run = dry_run;
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Apply parsed options: the stage selection (defaulting to every
    /// registered stage when `--stage` was not given) and the dry-run flag.
    pub fn apply_args(&mut self, args: &DriverArgs, registry: &StageRegistry) {
        self.set_stages_to_run(args.stages_or_all(registry));
        self.set_dry_run(args.dry_run);
    }

    /// The stage presently executing, if any.
    pub fn current_stage(&self) -> Option<&str> {
        self.current_stage.as_deref()
    }

    /// Durations recorded so far, in execution order.
    pub fn ledger(&self) -> &TimingLedger {
        &self.ledger
    }

    /// Build the summary report: one row per invoked stage plus a `Total`
    /// footer covering the wall clock since this driver was constructed.
    pub fn timing_report(&self) -> TimingReport {
        TimingReport::new(&self.ledger, self.start_time.elapsed())
    }

    pub(crate) fn begin_stage(&mut self, name: &str, heading: &str) {
        self.stage_start = Instant::now();
        self.current_stage = Some(name.to_string());
        tracing::debug!(stage = name, "stage started");
        self.print_heading(heading);
    }

    pub(crate) fn skip_stage(&mut self) {
        tracing::debug!(stage = self.current_stage.as_deref(), "stage skipped");
        self.reporter.log("Skipping this stage.");
    }

    pub(crate) fn end_stage(&mut self, outcome: StageOutcome) {
        let Some(name) = self.current_stage.clone() else {
            return;
        };
        let duration = self.stage_start.elapsed();
        self.ledger.record(&name, duration, outcome);
        tracing::debug!(stage = %name, %outcome, "stage finished");
        self.reporter.log(&format!(
            "`{name}` stage duration:  {}",
            format_duration(duration)
        ));
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self::new()
    }
}
