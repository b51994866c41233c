//! Configuration errors detected while validating a transition table.

use thiserror::Error;

/// Problems with a table definition.
///
/// Validation accumulates every one of these rather than stopping at the
/// first, so a caller sees the complete list in a single pass.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("State '{state}' has no default transition")]
    MissingDefaultTransition { state: String },

    #[error("State '{state}' has more than one default transition")]
    DuplicateDefaultTransition { state: String },

    #[error("State '{state}' is defined more than once")]
    DuplicateStateDefinition { state: String },

    #[error("State '{state}' defines more than one transition for symbol {symbol}")]
    DuplicateSymbolTransition { state: String, symbol: String },

    #[error("Transition from '{from}' targets undefined state '{to}'")]
    UndefinedTargetState { from: String, to: String },

    #[error("Transition table defines no states")]
    NoStates,
}
