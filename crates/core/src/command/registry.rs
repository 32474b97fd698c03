//! Resolution of textual tokens back to command identities.
//!
//! A [`CommandRegistry`] is assembled once, before any parsing happens, and is
//! read-only afterwards. Every textual form (canonical form or alias) must be
//! unique across both command shapes; a blank or colliding form is a defect in
//! the command table and panics at construction.

use std::sync::LazyLock;

use indexmap::{IndexMap, IndexSet};
use log::trace;

use crate::command::definitions::{FLAG_COMMANDS, VALUE_COMMANDS};
use crate::command::{FlagCommand, OptionCommand, ValueConversion};

static STANDARD: LazyLock<CommandRegistry> = LazyLock::new(|| {
    let registry = FLAG_COMMANDS
        .iter()
        .fold(CommandRegistry::new(), |registry, command| registry.with_flag(*command));

    VALUE_COMMANDS
        .iter()
        .fold(registry, |registry, command| registry.with_value(*command))
});

#[derive(Debug, Clone, Copy)]
enum Slot {
    Value(usize),
    Flag(usize),
}

/// Per-shape collections of commands plus a lookup from every textual form.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    value_commands: Vec<&'static dyn ValueConversion>,
    flag_commands: Vec<&'static FlagCommand>,
    forms: IndexMap<&'static str, Slot>,
    names: IndexSet<&'static str>,
}

impl CommandRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry holding the built-in command table, built on first use.
    pub fn standard() -> &'static CommandRegistry {
        &STANDARD
    }

    /// Registers a flag-only command.
    ///
    /// # Panics
    ///
    /// Panics if the command has a blank form, or if its name or any of its
    /// forms is already registered.
    #[must_use]
    pub fn with_flag(mut self, command: &'static FlagCommand) -> Self {
        let slot = Slot::Flag(self.flag_commands.len());
        self.register_forms(command.command(), slot);
        self.flag_commands.push(command);
        self
    }

    /// Registers a value-bearing command.
    ///
    /// # Panics
    ///
    /// Panics if the command has a blank form, or if its name or any of its
    /// forms is already registered.
    #[must_use]
    pub fn with_value(mut self, command: &'static dyn ValueConversion) -> Self {
        let slot = Slot::Value(self.value_commands.len());
        self.register_forms(command.command(), slot);
        self.value_commands.push(command);
        self
    }

    fn register_forms(&mut self, command: OptionCommand, slot: Slot) {
        assert!(
            self.names.insert(command.name()),
            "duplicate command name: {command}"
        );

        for form in command.forms() {
            assert!(!form.trim().is_empty(), "{command}: blank string expression");
            if self.forms.insert(form, slot).is_some() {
                panic!("duplicate: {form}");
            }
            trace!("Registered `{form}` for {command}");
        }
    }

    /// Resolves a token to a command of either shape.
    #[must_use]
    pub fn lookup(&self, token: &str) -> Option<OptionCommand> {
        match self.forms.get(token)? {
            Slot::Value(index) => Some(self.value_commands[*index].command()),
            Slot::Flag(index) => Some(self.flag_commands[*index].command()),
        }
    }

    #[must_use]
    pub fn lookup_flag(&self, token: &str) -> Option<&'static FlagCommand> {
        match self.forms.get(token)? {
            Slot::Flag(index) => Some(self.flag_commands[*index]),
            Slot::Value(_) => None,
        }
    }

    #[must_use]
    pub fn lookup_value(&self, token: &str) -> Option<&'static dyn ValueConversion> {
        match self.forms.get(token)? {
            Slot::Value(index) => Some(self.value_commands[*index]),
            Slot::Flag(_) => None,
        }
    }

    /// Value-bearing commands, in registration order.
    pub fn value_commands(&self) -> impl Iterator<Item = &'static dyn ValueConversion> + '_ {
        self.value_commands.iter().copied()
    }

    /// Flag-only commands, in registration order.
    pub fn flag_commands(&self) -> impl Iterator<Item = &'static FlagCommand> + '_ {
        self.flag_commands.iter().copied()
    }

    /// Every registered command: value-bearing first, then flag-only.
    #[must_use]
    pub fn all_commands(&self) -> IndexSet<OptionCommand> {
        self.value_commands()
            .map(|command| command.command())
            .chain(self.flag_commands().map(FlagCommand::command))
            .collect()
    }

    /// Every accepted textual form, in registration order.
    pub fn all_forms(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.forms.keys().copied()
    }
}
