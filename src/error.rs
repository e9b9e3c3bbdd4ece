//! Error types for the drover framework.

use thiserror::Error;

/// Errors produced by the framework itself.
///
/// Errors raised by stage bodies are not part of this taxonomy; the lifecycle
/// propagates them unchanged after its bookkeeping runs.
#[derive(Debug, Error)]
pub enum DriverError {
    /// A stage was declared under a name that is not a valid identifier.
    ///
    /// Valid names are non-empty, start with an ASCII letter or underscore,
    /// and contain only ASCII letters, digits, and underscores.
    #[error("stage name '{name}' is not a valid identifier")]
    InvalidStageName { name: String },

    /// A command handed to the pretty-printer could not be tokenized.
    #[error("cannot format command '{command}': {reason}")]
    MalformedCommand { command: String, reason: String },
}
