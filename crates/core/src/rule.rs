//! Combination rules over the set of commands supplied on one invocation.
//!
//! Rules look only at *which* commands were recognized, never at their
//! values. They are plain values: composing them with
//! [`AssignmentRule::composite`] flattens nested composites into one set, so
//! equivalent rule trees normalize to the same representation.

use std::collections::BTreeSet;

use indexmap::IndexSet;

use crate::command::OptionCommand;
use crate::error::RuleViolation;

/// A non-empty group of commands governed together.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommandGroup(BTreeSet<OptionCommand>);

impl CommandGroup {
    /// # Panics
    ///
    /// Panics if `commands` is empty.
    pub fn new(commands: impl IntoIterator<Item = OptionCommand>) -> Self {
        let commands: BTreeSet<_> = commands.into_iter().collect();
        assert!(!commands.is_empty(), "command group may not be empty");
        Self(commands)
    }

    pub fn iter(&self) -> impl Iterator<Item = OptionCommand> + '_ {
        self.0.iter().copied()
    }

    /// How many of the group's commands are in `supplied`.
    #[must_use]
    pub fn supplied_count(&self, supplied: &IndexSet<OptionCommand>) -> usize {
        self.0.iter().filter(|command| supplied.contains(*command)).count()
    }

    fn canonical_forms(&self) -> Vec<&'static str> {
        self.0.iter().map(OptionCommand::canonical_form).collect()
    }
}

/// The members of a composite rule, already flattened.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CompositeRule(BTreeSet<AssignmentRule>);

impl CompositeRule {
    pub fn rules(&self) -> impl Iterator<Item = &AssignmentRule> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AssignmentRule {
    /// Always valid.
    #[default]
    Null,
    /// Exactly one command of the group must be supplied.
    SingleRequired(CommandGroup),
    /// At most one command of the group may be supplied.
    SingleOptional(CommandGroup),
    /// The command must not be supplied.
    Prohibited(OptionCommand),
    /// Every member rule must hold.
    Composite(CompositeRule),
}

impl AssignmentRule {
    /// # Panics
    ///
    /// Panics if `commands` is empty.
    pub fn single_required(commands: impl IntoIterator<Item = OptionCommand>) -> Self {
        Self::SingleRequired(CommandGroup::new(commands))
    }

    /// # Panics
    ///
    /// Panics if `commands` is empty.
    pub fn single_optional(commands: impl IntoIterator<Item = OptionCommand>) -> Self {
        Self::SingleOptional(CommandGroup::new(commands))
    }

    #[must_use]
    pub fn prohibited(command: OptionCommand) -> Self {
        Self::Prohibited(command)
    }

    /// AND-combines `rules`, merging the members of any composite among them.
    pub fn composite(rules: impl IntoIterator<Item = AssignmentRule>) -> Self {
        let flattened = rules
            .into_iter()
            .flat_map(|rule| match rule {
                Self::Composite(CompositeRule(members)) => members.into_iter().collect::<Vec<_>>(),
                other => vec![other],
            })
            .collect();

        Self::Composite(CompositeRule(flattened))
    }

    #[must_use]
    pub fn and(self, other: AssignmentRule) -> Self {
        Self::composite([self, other])
    }

    /// Checks the rule against the commands recognized on one invocation.
    ///
    /// A composite reports the first failing member, in the rule set's order.
    ///
    /// # Errors
    ///
    /// Returns the [`RuleViolation`] naming the group or command concerned.
    pub fn validate(&self, supplied: &IndexSet<OptionCommand>) -> Result<(), RuleViolation> {
        match self {
            Self::Null => Ok(()),
            Self::SingleRequired(group) => {
                if group.supplied_count(supplied) == 1 {
                    Ok(())
                } else {
                    Err(RuleViolation::RequiredGroup {
                        commands: group.canonical_forms(),
                    })
                }
            }
            Self::SingleOptional(group) => {
                if group.supplied_count(supplied) <= 1 {
                    Ok(())
                } else {
                    Err(RuleViolation::ExclusiveGroup {
                        commands: group.canonical_forms(),
                    })
                }
            }
            Self::Prohibited(command) => {
                if supplied.contains(command) {
                    Err(RuleViolation::Prohibited {
                        command: command.canonical_form(),
                    })
                } else {
                    Ok(())
                }
            }
            Self::Composite(composite) => composite
                .rules()
                .try_for_each(|rule| rule.validate(supplied)),
        }
    }
}
