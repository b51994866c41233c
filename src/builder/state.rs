//! Builder for the transition rules of a single state.

use crate::core::{State, Symbol};
use crate::table::{noop, Action, Transition};

/// Collects the transitions of one state.
///
/// Nothing is checked here; duplicates and a missing default are reported
/// by [`TransitionTableBuilder::validate`](crate::builder::TransitionTableBuilder::validate).
pub struct StateBuilder<S: State, Sym, Ctx> {
    pub(crate) state: S,
    pub(crate) defaults: Vec<Transition<S, Sym, Ctx>>,
    pub(crate) entries: Vec<(Sym, Transition<S, Sym, Ctx>)>,
}

impl<S: State, Sym: Symbol + 'static, Ctx: 'static> StateBuilder<S, Sym, Ctx> {
    /// Start describing `state`.
    pub fn new(state: S) -> Self {
        Self {
            state,
            defaults: Vec::new(),
            entries: Vec::new(),
        }
    }

    /// On `symbol`, move to `target` and fire `action`.
    pub fn on(mut self, symbol: Sym, target: S, action: Action<Sym, Ctx>) -> Self {
        self.entries.push((symbol, Transition::new(target, action)));
        self
    }

    /// On `symbol`, move to `target` without a side effect.
    pub fn on_ignore(self, symbol: Sym, target: S) -> Self {
        self.on(symbol, target, noop())
    }

    /// For any symbol without its own entry, move to `target` and fire
    /// `action` (required, exactly once).
    pub fn otherwise(mut self, target: S, action: Action<Sym, Ctx>) -> Self {
        self.defaults.push(Transition::new(target, action));
        self
    }

    /// Default transition to `target` without a side effect.
    pub fn otherwise_ignore(self, target: S) -> Self {
        self.otherwise(target, noop())
    }

    pub fn state(&self) -> &S {
        &self.state
    }
}

impl<S: State, Sym: Clone, Ctx> Clone for StateBuilder<S, Sym, Ctx> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            defaults: self.defaults.clone(),
            entries: self.entries.clone(),
        }
    }
}
