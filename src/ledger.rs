//! Per-run timing ledger and summary report.
//!
//! The ledger is an insertion-ordered mapping from stage name to how long the
//! stage took, filled in by the driver as stages finish. Skipped stages get
//! an entry too (recording the near-zero wall time of the skip itself), so
//! the report always shows one row per stage the script reached.

use std::fmt;
use std::time::Duration;

/// How a stage invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageOutcome {
    /// The stage body ran to completion.
    Completed,
    /// The stage was not selected to run.
    Skipped,
    /// The stage body returned an error.
    Failed,
}

impl fmt::Display for StageOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageOutcome::Completed => write!(f, "Completed"),
            StageOutcome::Skipped => write!(f, "Skipped"),
            StageOutcome::Failed => write!(f, "Failed"),
        }
    }
}

/// One ledger entry: a stage that was invoked during this run.
#[derive(Debug, Clone)]
pub struct StageTiming {
    pub name: String,
    pub duration: Duration,
    pub outcome: StageOutcome,
}

/// Insertion-ordered mapping from stage name to recorded duration.
#[derive(Debug, Clone, Default)]
pub struct TimingLedger {
    entries: Vec<StageTiming>,
}

impl TimingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a stage's duration and outcome.
    ///
    /// Recording a name that is already present overwrites that entry in
    /// place; the entry keeps the position of its first recording. Reusing a
    /// stage name across two wrapped functions in one run therefore loses the
    /// earlier timing, which is a documented sharp edge rather than an error.
    pub fn record(&mut self, name: &str, duration: Duration, outcome: StageOutcome) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.name == name) {
            entry.duration = duration;
            entry.outcome = outcome;
        } else {
            self.entries.push(StageTiming {
                name: name.to_string(),
                duration,
                outcome,
            });
        }
    }

    /// Look up the entry for a stage.
    pub fn get(&self, name: &str) -> Option<&StageTiming> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Entries in execution order.
    pub fn iter(&self) -> std::slice::Iter<'_, StageTiming> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Format an elapsed duration as `H:MM:SS.ffffff`.
///
/// Hours are unpadded and the microsecond fraction is always present, so the
/// text is deterministic for a given duration.
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    let micros = duration.subsec_micros();
    format!("{hours}:{minutes:02}:{seconds:02}.{micros:06}")
}

/// Summary of one script run: a `Stage`/`Duration` table with a `Total`
/// footer.
///
/// The total is the wall-clock time since the driver was constructed, not the
/// sum of the rows; inter-stage overhead is intentionally included.
#[derive(Debug, Clone)]
pub struct TimingReport {
    rows: Vec<(String, Duration)>,
    total: Duration,
}

impl TimingReport {
    pub fn new(ledger: &TimingLedger, total: Duration) -> Self {
        let rows = ledger
            .iter()
            .map(|entry| (entry.name.clone(), entry.duration))
            .collect();
        Self { rows, total }
    }

    /// Rows in execution order.
    pub fn rows(&self) -> &[(String, Duration)] {
        &self.rows
    }

    /// Wall-clock time covered by the whole run.
    pub fn total(&self) -> Duration {
        self.total
    }

    /// Render the report as a two-column text table.
    pub fn render(&self) -> String {
        let name_width = self
            .rows
            .iter()
            .map(|(name, _)| name.chars().count())
            .chain(["Stage".len(), "Total".len()])
            .max()
            .unwrap_or(0);
        let duration_width = self
            .rows
            .iter()
            .map(|(_, duration)| format_duration(*duration).len())
            .chain(["Duration".len(), format_duration(self.total).len()])
            .max()
            .unwrap_or(0);

        let rule = "─".repeat(name_width + duration_width + 3);
        let mut out = format!("{:<name_width$}   {:<duration_width$}\n{rule}\n", "Stage", "Duration");
        for (name, duration) in &self.rows {
            out.push_str(&format!(
                "{name:<name_width$}   {}\n",
                format_duration(*duration)
            ));
        }
        out.push_str(&format!(
            "{rule}\n{:<name_width$}   {}",
            "Total",
            format_duration(self.total)
        ));
        out
    }
}
