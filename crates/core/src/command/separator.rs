//! Interpretation of the field separator value.
//!
//! A separator is either exactly one ASCII character, or one of the
//! two-character escape sequences in [`EscapeSequence::ALL`].

use std::fmt::{Display, Formatter};

/// The escape sequences accepted in place of a literal separator character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeSequence {
    Tab,
    CarriageReturn,
    LineFeed,
    Backslash,
}

impl EscapeSequence {
    pub const ALL: [EscapeSequence; 4] = [
        EscapeSequence::Tab,
        EscapeSequence::CarriageReturn,
        EscapeSequence::LineFeed,
        EscapeSequence::Backslash,
    ];

    /// The textual spelling, as typed on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            EscapeSequence::Tab => "\\t",
            EscapeSequence::CarriageReturn => "\\r",
            EscapeSequence::LineFeed => "\\n",
            EscapeSequence::Backslash => "\\\\",
        }
    }

    /// The character the sequence stands for.
    #[must_use]
    pub const fn character(self) -> char {
        match self {
            EscapeSequence::Tab => '\t',
            EscapeSequence::CarriageReturn => '\r',
            EscapeSequence::LineFeed => '\n',
            EscapeSequence::Backslash => '\\',
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|escape| escape.as_str() == raw)
    }

    /// The sequence standing for `c`, if any.
    #[must_use]
    pub fn from_character(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|escape| escape.character() == c)
    }
}

impl Display for EscapeSequence {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Converts the raw separator token to the character it denotes.
///
/// Returns `None` for the empty string, for any non-ASCII character, and for
/// any multi-character string that is not an [`EscapeSequence`].
#[must_use]
pub fn interpret(raw: &str) -> Option<char> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Some(c),
        (Some(_), Some(_)) => EscapeSequence::parse(raw).map(EscapeSequence::character),
        _ => None,
    }
}
