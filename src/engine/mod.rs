//! The engine half: drives a transition table over a symbol stream.
//!
//! # Dispatch order
//!
//! For every symbol the engine selects exactly one transition (specific
//! entry first, then the state's default), moves to the target state, and
//! only then fires the transition's action. Errors are fatal for the
//! stream; nothing is retried.

mod config;
mod error;
mod machine;

pub use config::EngineConfig;
pub use error::EngineError;
pub use machine::Engine;
