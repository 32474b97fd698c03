//! Run settings resolved from the interpreted options.
//!
//! This module turns a [`ParsedOptions`] into the immutable settings the rest
//! of the tool is driven by, filling in defaults for anything not supplied.

use std::fmt::{Display, Formatter};

use crate::command::separator::EscapeSequence;
use crate::command::{
    COMMENT_CHAR, ECHO_OFF, INPUT_FILE_PATH, LABEL_HEADER, OUTPUT_FILE_PATH,
    OUTPUT_FORCE_FILE_PATH, SEPARATOR,
};
use crate::error::{Error, Result};
use crate::interpreter::ParsedOptions;

/// Default prefix of comment lines in the input
pub const DEFAULT_COMMENT_PREFIX: &str = "#";
/// Default field separator of the written result
pub const DEFAULT_SEPARATOR: char = '\t';

/// Where the samples are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSettings {
    pub input_path: String,
    pub comment_prefix: String,
}

/// How the result is laid out when written.
///
/// Values are immutable; each `with_*` call returns an updated copy.
///
/// # Examples
///
/// ```
/// use kde1d_core::settings::WritingFormat;
///
/// let format = WritingFormat::default()
///     .with_separator(',')
///     .with_label_header("x,density");
/// assert_eq!(format.separator(), ',');
/// assert_eq!(format.label_header(), Some("x,density"));
///
/// let plain = format.without_label_header();
/// assert!(plain.label_header().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WritingFormat {
    separator: char,
    label_header: Option<String>,
}

impl Default for WritingFormat {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            label_header: None,
        }
    }
}

impl WritingFormat {
    #[must_use]
    pub fn with_separator(self, separator: char) -> Self {
        Self { separator, ..self }
    }

    #[must_use]
    pub fn with_label_header(self, label_header: impl Into<String>) -> Self {
        Self {
            label_header: Some(label_header.into()),
            ..self
        }
    }

    #[must_use]
    pub fn without_label_header(self) -> Self {
        Self {
            label_header: None,
            ..self
        }
    }

    #[must_use]
    pub fn separator(&self) -> char {
        self.separator
    }

    #[must_use]
    pub fn label_header(&self) -> Option<&str> {
        self.label_header.as_deref()
    }
}

impl Display for WritingFormat {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match EscapeSequence::from_character(self.separator) {
            Some(escape) => write!(formatter, "separator \"{escape}\"")?,
            None => write!(formatter, "separator \"{}\"", self.separator)?,
        }

        if let Some(label_header) = &self.label_header {
            write!(formatter, ", label header \"{label_header}\"")?;
        }

        Ok(())
    }
}

/// Where the result is written, besides the echo to standard output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// No result file.
    Discard,
    /// A new file; writing fails if it already exists.
    CreateNew(String),
    /// A file that is replaced if it already exists.
    Overwrite(String),
}

impl OutputTarget {
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            OutputTarget::Discard => None,
            OutputTarget::CreateNew(path) | OutputTarget::Overwrite(path) => Some(path),
        }
    }
}

impl Display for OutputTarget {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputTarget::Discard => formatter.write_str("none"),
            OutputTarget::CreateNew(path) => write!(formatter, "`{path}` (new file)"),
            OutputTarget::Overwrite(path) => write!(formatter, "`{path}` (overwrite)"),
        }
    }
}

/// Whether the result is echoed to standard output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EchoMode {
    Stdout,
    Silent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub source: SourceSettings,
    pub format: WritingFormat,
    pub output: OutputTarget,
    pub echo: EchoMode,
}

impl RunSettings {
    /// Resolves every setting from `options`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingOption`] if no input file was supplied.
    pub fn from_options(options: &ParsedOptions) -> Result<Self> {
        Ok(Self {
            source: source_settings(options)?,
            format: writing_format(options),
            output: output_target(options),
            echo: echo_mode(options),
        })
    }
}

/// # Errors
///
/// Returns [`Error::MissingOption`] if no input file was supplied.
pub fn source_settings(options: &ParsedOptions) -> Result<SourceSettings> {
    let input_path = options
        .value_of(&INPUT_FILE_PATH)
        .ok_or(Error::MissingOption(INPUT_FILE_PATH.command().canonical_form()))?;

    let comment_prefix = options
        .value_of(&COMMENT_CHAR)
        .map_or(DEFAULT_COMMENT_PREFIX, String::as_str);

    Ok(SourceSettings {
        input_path: input_path.clone(),
        comment_prefix: comment_prefix.to_string(),
    })
}

#[must_use]
pub fn writing_format(options: &ParsedOptions) -> WritingFormat {
    let format = WritingFormat::default();

    let format = match options.value_of(&SEPARATOR) {
        Some(separator) => format.with_separator(*separator),
        None => format,
    };

    match options.value_of(&LABEL_HEADER) {
        Some(label_header) => format.with_label_header(label_header.as_str()),
        None => format,
    }
}

/// The forced output wins over the regular one; the assignment rule keeps
/// them from being supplied together.
#[must_use]
pub fn output_target(options: &ParsedOptions) -> OutputTarget {
    if let Some(path) = options.value_of(&OUTPUT_FORCE_FILE_PATH) {
        return OutputTarget::Overwrite(path.clone());
    }

    options
        .value_of(&OUTPUT_FILE_PATH)
        .map_or(OutputTarget::Discard, |path| {
            OutputTarget::CreateNew(path.clone())
        })
}

#[must_use]
pub fn echo_mode(options: &ParsedOptions) -> EchoMode {
    if options.is_present(&ECHO_OFF) {
        EchoMode::Silent
    } else {
        EchoMode::Stdout
    }
}
