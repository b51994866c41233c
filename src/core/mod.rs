//! Core types shared by tables and engines.
//!
//! - States via the `State` trait
//! - Input symbols via the `Symbol` trait
//! - Immutable step history

mod history;
mod state;

pub use history::{StateHistory, StepRecord};
pub use state::{State, Symbol};
