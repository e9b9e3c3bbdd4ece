//! Shell command pretty-printing.
//!
//! Turns a single-line shell invocation into a multi-line,
//! continuation-backslash form for readable logging:
//!
//! * a long-style flag followed by its value goes on one line, e.g.
//!   `--foo bar`;
//! * a long-style flag without a value goes on its own line;
//! * everything else (short flags, positional arguments) goes on its own
//!   line.

use crate::error::DriverError;

/// Indent applied to continuation lines by [`pretty_command`].
pub const DEFAULT_INDENT: usize = 4;

/// Pretty-print a shell command with the default continuation indent.
///
/// # Errors
/// Returns [`DriverError::MalformedCommand`] if the command cannot be
/// tokenized (e.g. an unterminated quote) or is empty.
pub fn pretty_command(command: &str) -> Result<String, DriverError> {
    pretty_command_indented(command, DEFAULT_INDENT)
}

/// Pretty-print a shell command, indenting continuation lines by `indent`
/// spaces.
///
/// Tokenization follows POSIX shell word-splitting rules. A long flag is
/// merged with the token after it only when that token is not itself
/// flag-like and is not the lone final token; a merged value is wrapped in
/// single quotes iff it contains whitespace, with no escaping of embedded
/// quotes (a documented limitation of the format, not something to fix
/// silently).
///
/// # Errors
/// Returns [`DriverError::MalformedCommand`] if the command cannot be
/// tokenized or is empty.
pub fn pretty_command_indented(command: &str, indent: usize) -> Result<String, DriverError> {
    let tokens = shell_words::split(command).map_err(|err| DriverError::MalformedCommand {
        command: command.to_string(),
        reason: err.to_string(),
    })?;
    let Some((program, args)) = tokens.split_first() else {
        return Err(DriverError::MalformedCommand {
            command: command.to_string(),
            reason: "empty command".to_string(),
        });
    };

    let mut lines = vec![program.clone()];
    let mut i = 0;
    while i < args.len() {
        let remaining = args.len() - i;
        let current_is_long_flag = args[i].starts_with("--");
        let next_is_flag = remaining > 1 && args[i + 1].starts_with('-');
        if !current_is_long_flag || next_is_flag || remaining == 1 {
            lines.push(args[i].clone());
            i += 1;
        } else {
            lines.push(format!("{} {}", args[i], quote_arg(&args[i + 1])));
            i += 2;
        }
    }

    let separator = format!(" \\\n{}", " ".repeat(indent));
    Ok(lines.join(&separator))
}

/// Single-quote an argument iff it contains whitespace.
fn quote_arg(arg: &str) -> String {
    if arg.chars().any(char::is_whitespace) {
        format!("'{arg}'")
    } else {
        arg.to_string()
    }
}
