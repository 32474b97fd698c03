//! Single-pass interpretation of the argument vector.
//!
//! The token vector is walked once, front to back, with no backtracking:
//!
//! ```text
//! args := (flagToken | (valueFlagToken valueToken))*
//! ```
//!
//! Every command may appear at most once. After the pass the set of
//! recognized commands is checked against an [`AssignmentRule`]. Any failure
//! aborts the whole interpretation; no partial result is returned.

use indexmap::{IndexMap, IndexSet};
use log::{debug, warn};

use crate::command::{
    CommandRegistry, FlagCommand, OptionCommand, OptionValue, OptionValueType, ValueCommand,
    ValueConversion, INPUT_FILE_PATH, OUTPUT_FILE_PATH, OUTPUT_FORCE_FILE_PATH,
};
use crate::error::{Error, Result};
use crate::rule::AssignmentRule;

/// The outcome of one successful interpretation.
///
/// Equality compares the recorded commands and values, regardless of the
/// order in which they were supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedOptions {
    values: IndexMap<OptionCommand, OptionValue>,
    flags: IndexSet<OptionCommand>,
}

impl ParsedOptions {
    /// Interprets `args` against the built-in command table and rule.
    ///
    /// # Errors
    ///
    /// See [`ParameterInterpreter::interpret`].
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        ParameterInterpreter::standard().interpret(args)
    }

    /// The converted value of `command`, or `None` if it was not supplied.
    #[must_use]
    pub fn value_of<T: OptionValueType>(&self, command: &ValueCommand<T>) -> Option<&T> {
        self.values
            .get(&command.command())
            .and_then(T::from_value)
    }

    #[must_use]
    pub fn is_present(&self, command: &FlagCommand) -> bool {
        self.flags.contains(&command.command())
    }

    /// Every recognized command: flag-only ones, then value-bearing ones.
    #[must_use]
    pub fn commands(&self) -> IndexSet<OptionCommand> {
        self.flags
            .iter()
            .chain(self.values.keys())
            .copied()
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.flags.is_empty()
    }
}

/// The rule applied by [`ParameterInterpreter::standard`]: exactly one input
/// file, and at most one of the two output modes.
#[must_use]
pub fn standard_rule() -> AssignmentRule {
    AssignmentRule::composite([
        AssignmentRule::single_required([INPUT_FILE_PATH.command()]),
        AssignmentRule::single_optional([
            OUTPUT_FILE_PATH.command(),
            OUTPUT_FORCE_FILE_PATH.command(),
        ]),
    ])
}

#[derive(Debug, Clone)]
pub struct ParameterInterpreter<'a> {
    registry: &'a CommandRegistry,
    rule: AssignmentRule,
}

impl<'a> ParameterInterpreter<'a> {
    #[must_use]
    pub fn new(registry: &'a CommandRegistry, rule: AssignmentRule) -> Self {
        Self { registry, rule }
    }

    #[must_use]
    pub fn registry(&self) -> &'a CommandRegistry {
        self.registry
    }

    #[must_use]
    pub fn rule(&self) -> &AssignmentRule {
        &self.rule
    }

    /// Interprets a token vector into a [`ParsedOptions`].
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A token matches no registered form ([`Error::UnrecognizedToken`])
    /// - A value-bearing flag is the last token ([`Error::MissingTrailingValue`])
    /// - A value fails its command's converter ([`Error::InvalidValueFormat`])
    /// - A command is supplied more than once ([`Error::DuplicateCommand`])
    /// - The recognized commands break the rule ([`Error::AssignmentRule`])
    pub fn interpret<S: AsRef<str>>(&self, tokens: &[S]) -> Result<ParsedOptions> {
        self.scan(tokens)
            .and_then(|parsed| {
                self.rule.validate(&parsed.commands())?;
                Ok(parsed)
            })
            .inspect_err(|e| warn!("Rejecting arguments: {e}"))
    }

    fn scan<S: AsRef<str>>(&self, tokens: &[S]) -> Result<ParsedOptions> {
        let mut values = IndexMap::new();
        let mut flags = IndexSet::new();
        let mut cursor = 0;

        while cursor < tokens.len() {
            let token = tokens[cursor].as_ref();

            if let Some(flag) = self.registry.lookup_flag(token) {
                let command = flag.command();
                if !flags.insert(command) {
                    return Err(Error::DuplicateCommand(command.canonical_form()));
                }
                debug!("Recognized {command} from `{token}`");
                cursor += 1;
                continue;
            }

            if let Some(value_command) = self.registry.lookup_value(token) {
                let command = value_command.command();
                cursor += 1;

                let Some(raw) = tokens.get(cursor) else {
                    return Err(Error::MissingTrailingValue(command.canonical_form()));
                };
                let raw: &str = raw.as_ref();

                let value = value_command
                    .convert_value(raw)
                    .ok_or_else(|| Error::invalid_value_format(command.canonical_form(), raw))?;

                if values.insert(command, value).is_some() {
                    return Err(Error::DuplicateCommand(command.canonical_form()));
                }
                debug!("Recognized {command} from `{token}` with value `{raw}`");
                cursor += 1;
                continue;
            }

            return Err(Error::UnrecognizedToken(token.to_string()));
        }

        Ok(ParsedOptions { values, flags })
    }
}

impl ParameterInterpreter<'static> {
    /// The built-in command table with [`standard_rule`].
    #[must_use]
    pub fn standard() -> Self {
        Self::new(CommandRegistry::standard(), standard_rule())
    }
}
