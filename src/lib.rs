//! drover: a base framework for scripts that drive a series of shell commands.
//!
//! Scripts built on drover are broken down into named "stages", each wrapping
//! a handful of commands. Stages can be selectively run or skipped, every
//! stage is timed, and a summary report shows exactly what was done, for the
//! sake of replicability and easing debugging.
//!
//! A script embeds a [`driver::Driver`], declares its stages against a
//! [`registry::StageRegistry`], and implements [`stage::DriverScript`] to get
//! the begin/run-or-skip/end lifecycle:
//!
//! ```no_run
//! use drover::driver::Driver;
//! use drover::registry::StageRegistry;
//! use drover::stage::{DriverScript, StageSpec};
//!
//! struct Build {
//!     driver: Driver,
//! }
//!
//! impl DriverScript for Build {
//!     fn driver(&self) -> &Driver {
//!         &self.driver
//!     }
//!     fn driver_mut(&mut self) -> &mut Driver {
//!         &mut self.driver
//!     }
//! }
//!
//! let mut registry = StageRegistry::new();
//! let compile = StageSpec::new(&mut registry, "compile", "Compiling the project")?;
//!
//! let mut script = Build { driver: Driver::new() };
//! script.driver_mut().set_stages_to_run(registry.names().to_vec());
//! script.run_stage(&compile, |_script| {
//!     // run the actual shell commands here
//!     Ok(true)
//! })?;
//! println!("{}", script.driver().timing_report().render());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod driver;
pub mod error;
pub mod format;
pub mod ledger;
pub mod registry;
pub mod reporter;
pub mod stage;
