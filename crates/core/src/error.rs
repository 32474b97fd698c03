use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown command: <{}>", .0)]
    UnrecognizedToken(String),

    #[error("missing value for <{}>", .0)]
    MissingTrailingValue(&'static str),

    #[error("invalid value for <{}>: \"{}\"", .command, .value)]
    InvalidValueFormat {
        command: &'static str,
        value: String,
    },

    #[error("duplicate: <{}>", .0)]
    DuplicateCommand(&'static str),

    #[error(transparent)]
    AssignmentRule(#[from] RuleViolation),

    #[error("lack parameter: <{}>", .0)]
    MissingOption(&'static str),

    #[error("Output error: {}", .0)]
    Output(#[from] std::io::Error),
}

impl Error {
    pub fn invalid_value_format(command: &'static str, value: &str) -> Self {
        Self::InvalidValueFormat {
            command,
            value: value.to_string(),
        }
    }

    /// True when the error was caused by the user's input rather than by the
    /// surrounding shell.
    #[must_use]
    pub fn is_usage_error(&self) -> bool {
        !matches!(self, Self::Output(_))
    }
}

/// A failed assignment rule, naming the commands it governs by canonical form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleViolation {
    #[error("required and exclusive commands: {}", join_forms(.commands))]
    RequiredGroup { commands: Vec<&'static str> },

    #[error("exclusive commands: {}", join_forms(.commands))]
    ExclusiveGroup { commands: Vec<&'static str> },

    #[error("prohibited command: <{}>", .command)]
    Prohibited { command: &'static str },
}

fn join_forms(commands: &[&'static str]) -> String {
    commands
        .iter()
        .map(|form| format!("<{form}>"))
        .collect::<Vec<_>>()
        .join(", ")
}
