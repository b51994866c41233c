//! Per-state transition maps and the table that holds them.

use crate::core::{State, Symbol};
use crate::engine::EngineError;
use crate::table::transition::Transition;
use std::collections::HashMap;
use std::fmt;

/// Transition rules for a single state.
///
/// The default transition lives in its own slot rather than under a
/// reserved key, so it can never collide with a real symbol. Every map has
/// exactly one default; symbol-specific entries override it.
pub struct TransitionMap<S: State, Sym, Ctx> {
    fallback: Transition<S, Sym, Ctx>,
    specific: HashMap<Sym, Transition<S, Sym, Ctx>>,
}

impl<S: State, Sym: Symbol, Ctx> TransitionMap<S, Sym, Ctx> {
    /// Create a map with only a default transition.
    pub(crate) fn new(fallback: Transition<S, Sym, Ctx>) -> Self {
        Self {
            fallback,
            specific: HashMap::new(),
        }
    }

    /// Add a symbol-specific entry, returning any entry it replaced.
    pub(crate) fn insert(
        &mut self,
        symbol: Sym,
        transition: Transition<S, Sym, Ctx>,
    ) -> Option<Transition<S, Sym, Ctx>> {
        self.specific.insert(symbol, transition)
    }

    /// Select the transition for `symbol`.
    ///
    /// An exact symbol match always wins over the default. Every symbol
    /// selects exactly one transition.
    pub fn select(&self, symbol: &Sym) -> &Transition<S, Sym, Ctx> {
        self.specific.get(symbol).unwrap_or(&self.fallback)
    }

    /// The default transition.
    pub fn fallback(&self) -> &Transition<S, Sym, Ctx> {
        &self.fallback
    }

    /// The symbol-specific entry for `symbol`, if one exists.
    pub fn specific(&self, symbol: &Sym) -> Option<&Transition<S, Sym, Ctx>> {
        self.specific.get(symbol)
    }

    /// Symbols with an explicit entry.
    pub fn symbols(&self) -> impl Iterator<Item = &Sym> {
        self.specific.keys()
    }

    /// Every state this map can move to, default first.
    pub fn targets(&self) -> impl Iterator<Item = &S> {
        std::iter::once(&self.fallback.target).chain(self.specific.values().map(|t| &t.target))
    }
}

impl<S: State, Sym: Clone, Ctx> Clone for TransitionMap<S, Sym, Ctx> {
    fn clone(&self) -> Self {
        Self {
            fallback: self.fallback.clone(),
            specific: self.specific.clone(),
        }
    }
}

impl<S: State, Sym: fmt::Debug, Ctx> fmt::Debug for TransitionMap<S, Sym, Ctx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionMap")
            .field("fallback", &self.fallback)
            .field("specific", &self.specific)
            .finish()
    }
}

/// Immutable mapping from state to its [`TransitionMap`].
///
/// Tables are obtained from [`TransitionTableBuilder`](crate::builder::TransitionTableBuilder),
/// which validates them, and expose no mutation afterwards. A table is
/// `Send + Sync` whenever its states and symbols are, so one table can back
/// any number of engines.
pub struct TransitionTable<S: State, Sym, Ctx> {
    states: HashMap<S, TransitionMap<S, Sym, Ctx>>,
}

impl<S: State, Sym: Symbol, Ctx> TransitionTable<S, Sym, Ctx> {
    pub(crate) fn from_maps(states: HashMap<S, TransitionMap<S, Sym, Ctx>>) -> Self {
        Self { states }
    }

    /// Get the transition rules for `state`.
    ///
    /// Fails with `MissingStateDefinition` when the table has no entry for
    /// the state, which means the table is incomplete for a state that was
    /// nonetheless reached.
    pub fn transitions_for(&self, state: &S) -> Result<&TransitionMap<S, Sym, Ctx>, EngineError> {
        self.states
            .get(state)
            .ok_or_else(|| EngineError::MissingStateDefinition {
                state: state.name().to_string(),
            })
    }

    /// Select the transition for `(state, symbol)`.
    pub fn lookup(&self, state: &S, symbol: &Sym) -> Result<&Transition<S, Sym, Ctx>, EngineError> {
        Ok(self.transitions_for(state)?.select(symbol))
    }

    pub fn contains(&self, state: &S) -> bool {
        self.states.contains_key(state)
    }

    /// States defined by this table, in no particular order.
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.states.keys()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// `(from, to)` pairs where a transition targets a state the table does
    /// not define. Each pair appears once.
    pub fn undefined_targets(&self) -> Vec<(S, S)> {
        let mut dangling: Vec<(S, S)> = Vec::new();
        for (from, map) in &self.states {
            for to in map.targets() {
                let pair = (from.clone(), to.clone());
                if !self.states.contains_key(to) && !dangling.contains(&pair) {
                    dangling.push(pair);
                }
            }
        }
        dangling
    }
}

impl<S: State, Sym: fmt::Debug, Ctx> fmt::Debug for TransitionTable<S, Sym, Ctx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionTable")
            .field("states", &self.states)
            .finish()
    }
}
