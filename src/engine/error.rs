//! Runtime errors raised while driving an engine.

use thiserror::Error;

/// Errors that can occur while handling symbols.
///
/// There are no transient failures: every error is fatal for the symbol
/// stream and is never retried.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The current state has no entry in the transition table.
    #[error("Transitions not defined for state '{state}'")]
    MissingStateDefinition { state: String },
}
