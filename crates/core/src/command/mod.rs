//! Option commands recognized on the command line.
//!
//! Every flag the tool understands is a `'static` singleton of one of two
//! shapes:
//!
//! - [`ValueCommand<T>`]: a flag that must be followed by exactly one value
//!   token, converted to a `T` by the command's converter.
//! - [`FlagCommand`]: a flag whose mere presence is the signal.
//!
//! Both shapes share an [`OptionCommand`] identity, which is what the
//! [`registry`](crate::command::registry) and the
//! [`assignment rules`](crate::rule) operate on.

use std::cmp::Ordering;
use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

pub mod definitions;
pub mod registry;
pub mod separator;

pub use definitions::{
    COMMENT_CHAR, ECHO_OFF, INPUT_FILE_PATH, LABEL_HEADER, OUTPUT_FILE_PATH,
    OUTPUT_FORCE_FILE_PATH, SEPARATOR,
};
pub use registry::CommandRegistry;

/// Which of the two command shapes an [`OptionCommand`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CommandKind {
    /// Followed by exactly one value token.
    ValueBearing,
    /// Takes no value.
    FlagOnly,
}

/// Identity of a recognized command-line flag.
///
/// Equality, hashing and ordering use only the symbolic `name`; the textual
/// forms are what the registry resolves tokens against.
#[derive(Debug, Clone, Copy)]
pub struct OptionCommand {
    name: &'static str,
    canonical_form: &'static str,
    aliases: &'static [&'static str],
    kind: CommandKind,
}

impl OptionCommand {
    const fn new(
        name: &'static str,
        canonical_form: &'static str,
        aliases: &'static [&'static str],
        kind: CommandKind,
    ) -> Self {
        Self {
            name,
            canonical_form,
            aliases,
            kind,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The primary spelling, used in every diagnostic.
    #[must_use]
    pub const fn canonical_form(&self) -> &'static str {
        self.canonical_form
    }

    #[must_use]
    pub const fn aliases(&self) -> &'static [&'static str] {
        self.aliases
    }

    #[must_use]
    pub const fn kind(&self) -> CommandKind {
        self.kind
    }

    /// The canonical form followed by every alias, in declaration order.
    pub fn forms(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.canonical_form).chain(self.aliases.iter().copied())
    }
}

impl PartialEq for OptionCommand {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for OptionCommand {}

impl Hash for OptionCommand {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialOrd for OptionCommand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OptionCommand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(other.name)
    }
}

impl Display for OptionCommand {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.name)
    }
}

/// A command that takes no value.
#[derive(Debug)]
pub struct FlagCommand {
    command: OptionCommand,
}

impl FlagCommand {
    #[must_use]
    pub const fn new(
        name: &'static str,
        canonical_form: &'static str,
        aliases: &'static [&'static str],
    ) -> Self {
        Self {
            command: OptionCommand::new(name, canonical_form, aliases, CommandKind::FlagOnly),
        }
    }

    #[must_use]
    pub const fn command(&self) -> OptionCommand {
        self.command
    }
}

/// A converted value, as stored by the interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Text(String),
    Char(char),
}

/// Payload types a [`ValueCommand`] may convert to.
pub trait OptionValueType: Sized {
    fn into_value(self) -> OptionValue;

    /// Borrows the payload back out, or `None` if `value` holds another type.
    fn from_value(value: &OptionValue) -> Option<&Self>;
}

impl OptionValueType for String {
    fn into_value(self) -> OptionValue {
        OptionValue::Text(self)
    }

    fn from_value(value: &OptionValue) -> Option<&Self> {
        match value {
            OptionValue::Text(text) => Some(text),
            OptionValue::Char(_) => None,
        }
    }
}

impl OptionValueType for char {
    fn into_value(self) -> OptionValue {
        OptionValue::Char(self)
    }

    fn from_value(value: &OptionValue) -> Option<&Self> {
        match value {
            OptionValue::Char(c) => Some(c),
            OptionValue::Text(_) => None,
        }
    }
}

/// Converts the raw trailing token of a value-bearing command.
///
/// `None` means the text is not acceptable for the command.
pub type Converter<T> = fn(&str) -> Option<T>;

/// A command that must be followed by exactly one value token.
pub struct ValueCommand<T> {
    command: OptionCommand,
    convert: Converter<T>,
}

impl<T> ValueCommand<T> {
    #[must_use]
    pub const fn new(
        name: &'static str,
        canonical_form: &'static str,
        aliases: &'static [&'static str],
        convert: Converter<T>,
    ) -> Self {
        Self {
            command: OptionCommand::new(name, canonical_form, aliases, CommandKind::ValueBearing),
            convert,
        }
    }

    #[must_use]
    pub const fn command(&self) -> OptionCommand {
        self.command
    }

    pub fn convert(&self, raw: &str) -> Option<T> {
        (self.convert)(raw)
    }
}

impl ValueCommand<String> {
    /// A command whose value is accepted as-is.
    #[must_use]
    pub const fn identity(
        name: &'static str,
        canonical_form: &'static str,
        aliases: &'static [&'static str],
    ) -> Self {
        Self::new(name, canonical_form, aliases, identity)
    }
}

#[allow(clippy::unnecessary_wraps)]
fn identity(raw: &str) -> Option<String> {
    Some(raw.to_string())
}

impl<T> Debug for ValueCommand<T> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ValueCommand")
            .field("command", &self.command)
            .finish_non_exhaustive()
    }
}

/// Type-erased view of a [`ValueCommand`], so commands with different payload
/// types can share one registry.
pub trait ValueConversion: Debug + Sync {
    fn command(&self) -> OptionCommand;

    fn convert_value(&self, raw: &str) -> Option<OptionValue>;
}

impl<T: OptionValueType> ValueConversion for ValueCommand<T> {
    fn command(&self) -> OptionCommand {
        self.command
    }

    fn convert_value(&self, raw: &str) -> Option<OptionValue> {
        self.convert(raw).map(OptionValueType::into_value)
    }
}
