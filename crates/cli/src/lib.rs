//! KDE1D CLI Library
//!
//! This crate provides the command-line shell around [`kde1d_core`]. It hands
//! the raw argument vector to the parameter interpreter, resolves the run
//! settings and reports them, and turns interpretation failures into messages
//! for the user.
//!
//! # Examples
//!
//! The CLI binary (`kde1d`) can be used in several ways:
//!
//! ```bash
//! # Read samples, echo the result to standard output only
//! kde1d -f samples.txt
//!
//! # Write a comma separated result to a new file, without echo
//! kde1d --input-file samples.txt -sep , -out result.csv --echo-off
//!
//! # Overwrite an existing result file, with a header line
//! kde1d -f samples.txt --label-header "x\tdensity" -out-f result.tsv
//! ```

use std::io::Write;

use itertools::Itertools;
use log::debug;

use kde1d_core::command::{CommandKind, CommandRegistry, OptionCommand};
use kde1d_core::error::{Error, Result};
use kde1d_core::interpreter::ParsedOptions;
use kde1d_core::settings::{EchoMode, RunSettings};

/// First line printed on every run
pub const BANNER: &str = "kde1d...";
/// Last line printed on a successful run
pub const FAREWELL: &str = "Bye.";

/// Interprets `args`, resolves the run settings and reports them to `out`.
///
/// # Errors
///
/// Returns an error if:
/// - The arguments cannot be interpreted or break an assignment rule
/// - Writing to `out` fails
pub fn run<S: AsRef<str>, W: Write>(args: &[S], out: &mut W) -> Result<RunSettings> {
    writeln!(out, "{BANNER}")?;

    let options = ParsedOptions::from_args(args)?;
    let settings = RunSettings::from_options(&options)?;
    debug!("Resolved settings: {settings:?}");

    write_settings(out, &settings)?;
    writeln!(out, "{FAREWELL}")?;
    out.flush()?;

    Ok(settings)
}

/// Writes one line per resolved setting.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_settings<W: Write>(out: &mut W, settings: &RunSettings) -> Result<()> {
    writeln!(
        out,
        "Input: `{}` (comment lines start with `{}`)",
        settings.source.input_path, settings.source.comment_prefix
    )?;
    writeln!(out, "Format: {}", settings.format)?;
    writeln!(out, "Output file: {}", settings.output)?;

    let echo = match settings.echo {
        EchoMode::Stdout => "on",
        EchoMode::Silent => "off",
    };
    writeln!(out, "Echo: {echo}")?;

    Ok(())
}

/// One usage line per command, e.g. `--input-file, -f <value>`.
#[must_use]
pub fn accepted_forms(registry: &CommandRegistry) -> Vec<String> {
    registry
        .all_commands()
        .into_iter()
        .map(|command| usage_line(&command))
        .collect()
}

fn usage_line(command: &OptionCommand) -> String {
    let forms = command.forms().join(", ");
    match command.kind() {
        CommandKind::ValueBearing => format!("{forms} <value>"),
        CommandKind::FlagOnly => forms,
    }
}

/// The message shown to the user for `error`.
///
/// An unrecognized token is followed by the list of accepted options.
#[must_use]
pub fn describe_error(error: &Error) -> String {
    match error {
        Error::UnrecognizedToken(_) => {
            let usage = accepted_forms(CommandRegistry::standard())
                .iter()
                .map(|line| format!("  {line}"))
                .join("\n");
            format!("{error}\nAccepted options:\n{usage}")
        }
        _ => error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_lines() {
        let lines = accepted_forms(CommandRegistry::standard());

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "--input-file, -f <value>");
        assert!(lines.contains(&"--separator, -sep <value>".to_string()));
        assert!(lines.contains(&"--comment-char <value>".to_string()));
        assert_eq!(lines[6], "--echo-off");
    }

    #[test]
    fn test_describe_unrecognized_token_lists_options() {
        let message = describe_error(&Error::UnrecognizedToken("--unknown".to_string()));

        assert!(message.starts_with("unknown command: <--unknown>\nAccepted options:\n"));
        assert!(message.contains("  --output-force, -out-f <value>"));
        assert!(message.ends_with("  --echo-off"));
    }

    #[test]
    fn test_describe_other_errors_verbatim() {
        let message = describe_error(&Error::DuplicateCommand("--input-file"));
        assert_eq!(message, "duplicate: <--input-file>");
    }
}
