//! Transition tables: the pure data half of the engine.
//!
//! A table maps each state to a [`TransitionMap`] holding one mandatory
//! default transition plus any number of symbol-specific overrides. Tables
//! are built and validated once, then shared read-only.

mod error;
mod map;
mod transition;

pub use error::TableError;
pub use map::{TransitionMap, TransitionTable};
pub use transition::{action, noop, Action, Transition};
