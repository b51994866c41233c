//! Transitions and the actions they fire.

use crate::core::State;
use std::fmt;
use std::sync::Arc;

/// Side-effecting behavior invoked when a transition fires.
///
/// Every action receives the consumer-owned context and the triggering
/// symbol; actions that do not need the symbol simply ignore it. Actions
/// return nothing and have no access to the engine.
pub type Action<Sym, Ctx> = Arc<dyn Fn(&mut Ctx, &Sym) + Send + Sync>;

/// Wrap a closure as an [`Action`].
///
/// # Example
///
/// ```rust
/// use table_fsm::table::action;
///
/// let append = action(|buf: &mut String, c: &char| buf.push(*c));
/// let mut buf = String::new();
/// append(&mut buf, &'a');
/// assert_eq!(buf, "a");
/// ```
pub fn action<Sym, Ctx, F>(f: F) -> Action<Sym, Ctx>
where
    F: Fn(&mut Ctx, &Sym) + Send + Sync + 'static,
{
    Arc::new(f)
}

/// An action that does nothing.
pub fn noop<Sym: 'static, Ctx: 'static>() -> Action<Sym, Ctx> {
    Arc::new(|_: &mut Ctx, _: &Sym| {})
}

/// The `(next state, action)` pair selected for a `(state, symbol)`.
pub struct Transition<S: State, Sym, Ctx> {
    pub target: S,
    pub action: Action<Sym, Ctx>,
}

impl<S: State, Sym, Ctx> Transition<S, Sym, Ctx> {
    pub fn new(target: S, action: Action<Sym, Ctx>) -> Self {
        Self { target, action }
    }

    /// Transition to `target` without any side effect.
    pub fn silent(target: S) -> Self
    where
        Sym: 'static,
        Ctx: 'static,
    {
        Self::new(target, noop())
    }

    /// Invoke the action with the triggering symbol.
    pub fn fire(&self, ctx: &mut Ctx, symbol: &Sym) {
        (self.action)(ctx, symbol)
    }
}

impl<S: State, Sym, Ctx> Clone for Transition<S, Sym, Ctx> {
    fn clone(&self) -> Self {
        Self {
            target: self.target.clone(),
            action: Arc::clone(&self.action),
        }
    }
}

impl<S: State, Sym, Ctx> fmt::Debug for Transition<S, Sym, Ctx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Start,
        End,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Start => "Start",
                Self::End => "End",
            }
        }
    }

    #[test]
    fn fire_passes_symbol_to_action() {
        let transition: Transition<TestState, char, Vec<char>> =
            Transition::new(TestState::End, action(|seen: &mut Vec<char>, c: &char| seen.push(*c)));

        let mut seen = Vec::new();
        transition.fire(&mut seen, &'q');
        transition.fire(&mut seen, &'r');

        assert_eq!(seen, vec!['q', 'r']);
    }

    #[test]
    fn silent_transition_leaves_context_untouched() {
        let transition: Transition<TestState, char, String> = Transition::silent(TestState::Start);

        let mut ctx = String::from("keep");
        transition.fire(&mut ctx, &'x');

        assert_eq!(ctx, "keep");
        assert_eq!(transition.target, TestState::Start);
    }

    #[test]
    fn clone_shares_action() {
        let transition: Transition<TestState, char, usize> =
            Transition::new(TestState::End, action(|count: &mut usize, _: &char| *count += 1));
        let cloned = transition.clone();

        assert!(Arc::ptr_eq(&transition.action, &cloned.action));
        assert_eq!(cloned.target, TestState::End);
    }
}
