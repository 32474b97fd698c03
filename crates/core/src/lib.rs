//! KDE1D Core Library
//!
//! This crate provides the command-line parameter interpreter for `kde1d`, a
//! one-dimensional kernel density estimation tool. It turns the raw argument
//! vector into a validated, typed set of options and resolves the settings
//! the tool runs with.
//!
//! # Key Features
//!
//! - **Command Registry**: Every flag and its aliases, with collisions caught at startup
//! - **Typed Values**: Value-bearing flags convert their argument to a typed value
//! - **Single-Pass Interpretation**: One forward scan, no partial results on failure
//! - **Assignment Rules**: Required, exclusive and prohibited combinations of flags
//! - **Run Settings**: Immutable settings with defaults for anything not supplied
//!
//! # Examples
//!
//! ```
//! use kde1d_core::command::{INPUT_FILE_PATH, SEPARATOR};
//! use kde1d_core::interpreter::ParsedOptions;
//!
//! let options = ParsedOptions::from_args(&["-f", "samples.txt", "-sep", "\\t"])?;
//! assert_eq!(options.value_of(&INPUT_FILE_PATH).map(String::as_str), Some("samples.txt"));
//! assert_eq!(options.value_of(&SEPARATOR), Some(&'\t'));
//! # Ok::<(), kde1d_core::error::Error>(())
//! ```

pub mod command;
pub mod error;
pub mod interpreter;
pub mod rule;
pub mod settings;
