//! Base command-line options for driver scripts.
//!
//! The framework assumes an external parser defines exactly two options: a
//! multi-valued `--stage` selection whose allowed values are the contents of
//! the stage registry at help-generation time, and a boolean `--dry-run`
//! flag. [`DriverCli`] builds that clap surface from a registry snapshot;
//! scripts extend the returned `Command` with their own arguments.

use std::cell::OnceCell;

use clap::{Arg, ArgAction, ArgMatches, Command};

use crate::registry::StageRegistry;

/// The base clap surface for one script, built from a registry snapshot.
///
/// The `Command` is constructed on first access and cached, so help text
/// reflects the stages registered at the time the cli was created.
pub struct DriverCli {
    name: String,
    stage_names: Vec<String>,
    command: OnceCell<Command>,
}

impl DriverCli {
    /// Snapshot the registry for a script named `name`.
    pub fn new(name: &str, registry: &StageRegistry) -> Self {
        Self {
            name: name.to_string(),
            stage_names: registry.names().to_vec(),
            command: OnceCell::new(),
        }
    }

    /// The base `Command`, built lazily on first access.
    ///
    /// Scripts add their own arguments with `cli.command().clone().arg(...)`.
    pub fn command(&self) -> &Command {
        self.command
            .get_or_init(|| base_command(&self.name, &self.stage_names))
    }

    /// Parse the base options from an argument iterator.
    ///
    /// # Errors
    /// Returns the clap error for unknown arguments or a `--stage` value
    /// outside the registered stage names.
    pub fn parse_from<I, T>(&self, args: I) -> Result<DriverArgs, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = self.command().clone().try_get_matches_from(args)?;
        Ok(DriverArgs::from_matches(&matches))
    }
}

fn base_command(name: &str, stage_names: &[String]) -> Command {
    Command::new(name.to_string())
        .arg(
            Arg::new("stage")
                .long("stage")
                .num_args(1..)
                .value_name("STAGE")
                .value_parser(clap::builder::PossibleValuesParser::new(
                    stage_names.to_vec(),
                ))
                .help("Which stages to run"),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .action(ArgAction::SetTrue)
                .help(
                    "If specified, don't actually run the commands in the shell; \
                     instead print the commands that would have been executed",
                ),
        )
}

/// The two base options, extracted from parsed matches.
#[derive(Debug, Clone, Default)]
pub struct DriverArgs {
    /// Stages selected with `--stage`, or `None` if the option was absent.
    pub stages: Option<Vec<String>>,
    pub dry_run: bool,
}

impl DriverArgs {
    /// Extract the base options from matches produced by a command that
    /// includes the [`DriverCli`] arguments.
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let stages = matches
            .get_many::<String>("stage")
            .map(|values| values.cloned().collect());
        Self {
            stages,
            dry_run: matches.get_flag("dry-run"),
        }
    }

    /// The selected stages, defaulting to every registered stage when
    /// `--stage` was not given.
    pub fn stages_or_all(&self, registry: &StageRegistry) -> Vec<String> {
        match &self.stages {
            Some(stages) => stages.clone(),
            None => registry.names().to_vec(),
        }
    }
}
