//! The built-in command table.

use crate::command::{separator, FlagCommand, ValueCommand, ValueConversion};

/// Path of the file holding the samples.
pub static INPUT_FILE_PATH: ValueCommand<String> =
    ValueCommand::identity("INPUT_FILE_PATH", "--input-file", &["-f"]);

/// Path of a result file that must not exist yet.
pub static OUTPUT_FILE_PATH: ValueCommand<String> =
    ValueCommand::identity("OUTPUT_FILE_PATH", "--output", &["-out"]);

/// Path of a result file that is overwritten if it exists.
pub static OUTPUT_FORCE_FILE_PATH: ValueCommand<String> =
    ValueCommand::identity("OUTPUT_FORCE_FILE_PATH", "--output-force", &["-out-f"]);

/// Prefix marking comment lines in the input.
pub static COMMENT_CHAR: ValueCommand<String> =
    ValueCommand::identity("COMMENT_CHAR", "--comment-char", &[]);

/// Field separator of the written result, see [`separator::interpret`].
pub static SEPARATOR: ValueCommand<char> =
    ValueCommand::new("SEPARATOR", "--separator", &["-sep"], separator::interpret);

/// Header line written above the result columns.
pub static LABEL_HEADER: ValueCommand<String> =
    ValueCommand::identity("LABEL_HEADER", "--label-header", &[]);

/// Suppresses echoing the result to standard output.
pub static ECHO_OFF: FlagCommand = FlagCommand::new("ECHO_OFF", "--echo-off", &[]);

pub static VALUE_COMMANDS: [&dyn ValueConversion; 6] = [
    &INPUT_FILE_PATH,
    &OUTPUT_FILE_PATH,
    &OUTPUT_FORCE_FILE_PATH,
    &COMMENT_CHAR,
    &SEPARATOR,
    &LABEL_HEADER,
];

pub static FLAG_COMMANDS: [&FlagCommand; 1] = [&ECHO_OFF];
