//! Console reporting seam.
//!
//! The driver never prints directly; it talks to a [`Reporter`], which keeps
//! the console library an external collaborator. [`ConsoleReporter`] renders
//! styled panels and timestamped log lines on stdout; [`MemoryReporter`]
//! records events for inspection in tests.

use std::sync::{Arc, Mutex};

use chrono::Local;
use colored::{Color, Colorize};

/// Sink for the human-readable output a driver script emits.
pub trait Reporter {
    /// Print a styled heading panel.
    fn heading(&mut self, message: &str, color: Color);

    /// Print a dry-run notice panel, indented by `indent` spaces.
    fn dry_run(&mut self, message: &str, indent: usize);

    /// Print a plain log line (skip notices, stage durations).
    fn log(&mut self, line: &str);
}

/// Reporter that writes styled output to stdout.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for ConsoleReporter {
    fn heading(&mut self, message: &str, color: Color) {
        for line in panel(message).lines() {
            println!("{}", line.bold().color(color));
        }
    }

    fn dry_run(&mut self, message: &str, indent: usize) {
        let pad = " ".repeat(indent);
        for line in panel(&format!("DRY-RUN MODE:  {message}")).lines() {
            println!("{pad}{}", line.color(Color::Yellow));
        }
    }

    fn log(&mut self, line: &str) {
        println!("[{}] {line}", Local::now().format("%H:%M:%S"));
    }
}

/// Draw a rounded box around a message.
fn panel(message: &str) -> String {
    let width = message
        .lines()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    let mut out = format!("╭{}╮\n", "─".repeat(width + 2));
    for line in message.lines() {
        let pad = " ".repeat(width - line.chars().count());
        out.push_str(&format!("│ {line}{pad} │\n"));
    }
    out.push_str(&format!("╰{}╯", "─".repeat(width + 2)));
    out
}

/// One recorded reporter call.
#[derive(Debug, Clone, PartialEq)]
pub enum ReporterEvent {
    Heading { message: String, color: Color },
    DryRun { message: String, indent: usize },
    Line(String),
}

/// Reporter that records events in memory.
///
/// Cloning yields a handle onto the same event buffer, so a test can keep a
/// clone while the driver owns the reporter.
#[derive(Debug, Clone, Default)]
pub struct MemoryReporter {
    events: Arc<Mutex<Vec<ReporterEvent>>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events recorded so far.
    pub fn events(&self) -> Vec<ReporterEvent> {
        self.events
            .lock()
            .expect("reporter event buffer lock poisoned")
            .clone()
    }

    /// All plain log lines recorded so far.
    pub fn lines(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ReporterEvent::Line(line) => Some(line),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: ReporterEvent) {
        self.events
            .lock()
            .expect("reporter event buffer lock poisoned")
            .push(event);
    }
}

impl Reporter for MemoryReporter {
    fn heading(&mut self, message: &str, color: Color) {
        self.push(ReporterEvent::Heading {
            message: message.to_string(),
            color,
        });
    }

    fn dry_run(&mut self, message: &str, indent: usize) {
        self.push(ReporterEvent::DryRun {
            message: message.to_string(),
            indent,
        });
    }

    fn log(&mut self, line: &str) {
        self.push(ReporterEvent::Line(line.to_string()));
    }
}
