//! Builder for constructing validated transition tables.

use crate::builder::error::BuildError;
use crate::builder::state::StateBuilder;
use crate::core::{State, Symbol};
use crate::table::{TableError, TransitionMap, TransitionTable};
use std::collections::{HashMap, HashSet};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::{debug, warn};

/// Builder for transition tables with a fluent API.
///
/// By default the table is *open*: transitions may target states that are
/// never defined, and reaching such a state fails at runtime with
/// `MissingStateDefinition`. Call [`closed`](Self::closed) to reject those
/// tables up front instead.
///
/// # Example
///
/// ```rust
/// use table_fsm::builder::TransitionTableBuilder;
/// use table_fsm::state_enum;
/// use table_fsm::table::action;
///
/// state_enum! {
///     enum Parity {
///         Even,
///         Odd,
///     }
/// }
///
/// let table = TransitionTableBuilder::<Parity, u8, usize>::new()
///     .state(Parity::Even, |s| {
///         s.on(1, Parity::Odd, action(|ones: &mut usize, _: &u8| *ones += 1))
///             .otherwise_ignore(Parity::Even)
///     })
///     .state(Parity::Odd, |s| {
///         s.on(1, Parity::Even, action(|ones: &mut usize, _: &u8| *ones += 1))
///             .otherwise_ignore(Parity::Odd)
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(table.len(), 2);
/// ```
pub struct TransitionTableBuilder<S: State, Sym, Ctx> {
    states: Vec<StateBuilder<S, Sym, Ctx>>,
    closed: bool,
}

impl<S: State, Sym: Symbol + 'static, Ctx: 'static> TransitionTableBuilder<S, Sym, Ctx> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            closed: false,
        }
    }

    /// Describe the transitions of `state`.
    pub fn state<F>(mut self, state: S, describe: F) -> Self
    where
        F: FnOnce(StateBuilder<S, Sym, Ctx>) -> StateBuilder<S, Sym, Ctx>,
    {
        self.states.push(describe(StateBuilder::new(state)));
        self
    }

    /// Add a pre-built state description.
    pub fn add_state(mut self, state: StateBuilder<S, Sym, Ctx>) -> Self {
        self.states.push(state);
        self
    }

    /// Require every transition target to be a defined state.
    pub fn closed(mut self) -> Self {
        self.closed = true;
        self
    }

    /// Check the definition, accumulating every problem found.
    ///
    /// Pure: the same builder always yields the same result.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<TableError>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<TableError>>> = Vec::new();

        if self.states.is_empty() {
            checks.push(Validation::fail(TableError::NoStates));
        }

        let defined: HashSet<&S> = self.states.iter().map(|s| &s.state).collect();
        let mut seen: HashSet<&S> = HashSet::new();

        for def in &self.states {
            let name = def.state.name();

            if !seen.insert(&def.state) {
                checks.push(Validation::fail(TableError::DuplicateStateDefinition {
                    state: name.to_string(),
                }));
            }

            match def.defaults.len() {
                0 => checks.push(Validation::fail(TableError::MissingDefaultTransition {
                    state: name.to_string(),
                })),
                1 => checks.push(Validation::success(())),
                _ => checks.push(Validation::fail(TableError::DuplicateDefaultTransition {
                    state: name.to_string(),
                })),
            }

            let mut symbols: HashSet<&Sym> = HashSet::new();
            for (symbol, _) in &def.entries {
                if !symbols.insert(symbol) {
                    checks.push(Validation::fail(TableError::DuplicateSymbolTransition {
                        state: name.to_string(),
                        symbol: format!("{:?}", symbol),
                    }));
                }
            }

            if self.closed {
                let targets = def
                    .defaults
                    .iter()
                    .chain(def.entries.iter().map(|(_, t)| t))
                    .map(|t| &t.target);
                let mut reported: HashSet<&S> = HashSet::new();
                for target in targets {
                    if !defined.contains(target) && reported.insert(target) {
                        checks.push(Validation::fail(TableError::UndefinedTargetState {
                            from: name.to_string(),
                            to: target.name().to_string(),
                        }));
                    }
                }
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Validate and build the table.
    pub fn build(self) -> Result<TransitionTable<S, Sym, Ctx>, BuildError> {
        if let Validation::Failure(errors) = self.validate() {
            return Err(BuildError::InvalidTable {
                errors: errors.iter().cloned().collect(),
            });
        }

        let mut maps = HashMap::with_capacity(self.states.len());
        for def in self.states {
            let mut defaults = def.defaults.into_iter();
            let Some(fallback) = defaults.next() else {
                return Err(BuildError::InvalidTable {
                    errors: vec![TableError::MissingDefaultTransition {
                        state: def.state.name().to_string(),
                    }],
                });
            };

            let mut map = TransitionMap::new(fallback);
            for (symbol, transition) in def.entries {
                map.insert(symbol, transition);
            }
            maps.insert(def.state, map);
        }

        let table = TransitionTable::from_maps(maps);
        for (from, to) in table.undefined_targets() {
            warn!(
                from = from.name(),
                to = to.name(),
                "Transition targets a state the table does not define"
            );
        }
        debug!(states = table.len(), "Built transition table");

        Ok(table)
    }
}

impl<S: State, Sym: Symbol + 'static, Ctx: 'static> Default for TransitionTableBuilder<S, Sym, Ctx> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, Sym: Clone, Ctx> Clone for TransitionTableBuilder<S, Sym, Ctx> {
    fn clone(&self) -> Self {
        Self {
            states: self.states.clone(),
            closed: self.closed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::action;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Outside,
        Inside,
        Escape,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Outside => "Outside",
                Self::Inside => "Inside",
                Self::Escape => "Escape",
            }
        }
    }

    type Builder = TransitionTableBuilder<TestState, char, String>;

    fn failures(builder: &Builder) -> Vec<TableError> {
        match builder.validate() {
            Validation::Failure(errors) => errors.iter().cloned().collect(),
            Validation::Success(_) => Vec::new(),
        }
    }

    #[test]
    fn empty_builder_has_no_states() {
        let result = Builder::new().build();

        assert_eq!(
            result.unwrap_err(),
            BuildError::InvalidTable {
                errors: vec![TableError::NoStates]
            }
        );
    }

    #[test]
    fn missing_default_is_rejected() {
        let builder = Builder::new()
            .state(TestState::Outside, |s| s.on_ignore('"', TestState::Inside))
            .state(TestState::Inside, |s| s.otherwise_ignore(TestState::Inside));

        assert_eq!(
            failures(&builder),
            vec![TableError::MissingDefaultTransition {
                state: "Outside".to_string()
            }]
        );
        assert!(builder.build().is_err());
    }

    #[test]
    fn validation_accumulates_all_errors() {
        let builder = Builder::new()
            .state(TestState::Outside, |s| {
                s.on_ignore('"', TestState::Inside)
                    .on_ignore('"', TestState::Outside)
            })
            .state(TestState::Inside, |s| {
                s.otherwise_ignore(TestState::Inside)
                    .otherwise_ignore(TestState::Outside)
            })
            .state(TestState::Inside, |s| s.otherwise_ignore(TestState::Inside));

        let errors = failures(&builder);

        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&TableError::MissingDefaultTransition {
            state: "Outside".to_string()
        }));
        assert!(errors.contains(&TableError::DuplicateSymbolTransition {
            state: "Outside".to_string(),
            symbol: "'\"'".to_string()
        }));
        assert!(errors.contains(&TableError::DuplicateDefaultTransition {
            state: "Inside".to_string()
        }));
        assert!(errors.contains(&TableError::DuplicateStateDefinition {
            state: "Inside".to_string()
        }));
    }

    #[test]
    fn open_table_allows_undefined_targets() {
        let table = Builder::new()
            .state(TestState::Outside, |s| {
                s.on_ignore('\\', TestState::Escape)
                    .otherwise_ignore(TestState::Outside)
            })
            .build()
            .unwrap();

        assert!(!table.contains(&TestState::Escape));
        assert_eq!(
            table.undefined_targets(),
            vec![(TestState::Outside, TestState::Escape)]
        );
    }

    #[test]
    fn closed_table_rejects_undefined_targets() {
        let builder = Builder::new()
            .closed()
            .state(TestState::Outside, |s| {
                s.on_ignore('\\', TestState::Escape)
                    .on_ignore('/', TestState::Escape)
                    .otherwise_ignore(TestState::Outside)
            });

        assert_eq!(
            failures(&builder),
            vec![TableError::UndefinedTargetState {
                from: "Outside".to_string(),
                to: "Escape".to_string()
            }]
        );
    }

    #[test]
    fn validation_is_idempotent() {
        let valid = Builder::new().state(TestState::Outside, |s| s.otherwise_ignore(TestState::Outside));
        let invalid = Builder::new().state(TestState::Outside, |s| s.on_ignore('x', TestState::Outside));

        assert!(valid.validate().is_success());
        assert!(valid.validate().is_success());
        assert_eq!(failures(&invalid), failures(&invalid));
    }

    #[test]
    fn build_keeps_specific_entries() {
        let table = Builder::new()
            .state(TestState::Outside, |s| {
                s.on('"', TestState::Inside, action(|buf: &mut String, _: &char| buf.clear()))
                    .otherwise_ignore(TestState::Outside)
            })
            .state(TestState::Inside, |s| {
                s.on_ignore('"', TestState::Outside).otherwise(
                    TestState::Inside,
                    action(|buf: &mut String, c: &char| buf.push(*c)),
                )
            })
            .build()
            .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(
            table.lookup(&TestState::Outside, &'"').unwrap().target,
            TestState::Inside
        );
        assert_eq!(
            table.lookup(&TestState::Inside, &'q').unwrap().target,
            TestState::Inside
        );
    }

    #[test]
    fn prebuilt_state_descriptions_are_added() {
        let outside: StateBuilder<TestState, char, String> =
            StateBuilder::new(TestState::Outside)
                .on_ignore('"', TestState::Inside)
                .otherwise_ignore(TestState::Outside);
        let inside = StateBuilder::new(TestState::Inside).otherwise_ignore(TestState::Inside);
        assert_eq!(outside.state(), &TestState::Outside);

        let table = Builder::new()
            .closed()
            .add_state(outside.clone())
            .add_state(inside)
            .build()
            .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(
            table.lookup(&TestState::Outside, &'"').unwrap().target,
            TestState::Inside
        );

        let doubled = Builder::new().add_state(outside.clone()).add_state(outside);
        assert_eq!(
            failures(&doubled),
            vec![TableError::DuplicateStateDefinition {
                state: "Outside".to_string()
            }]
        );
    }

    #[test]
    fn cloned_builder_builds_same_shape() {
        let builder = Builder::new().state(TestState::Outside, |s| s.otherwise_ignore(TestState::Outside));
        let first = builder.clone().build().unwrap();
        let second = builder.build().unwrap();

        assert_eq!(first.len(), second.len());
    }
}
