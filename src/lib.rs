//! table-fsm: a table-driven finite-state machine engine
//!
//! A machine is described as a transition table: for every state, one
//! mandatory default transition plus optional symbol-specific overrides.
//! The engine feeds input symbols through the table one at a time, moving
//! to the selected target state and then firing the transition's action.
//!
//! # Core Concepts
//!
//! - **State**: finite, hashable identifiers via the `State` trait
//! - **Transition Table**: immutable, validated `(state, symbol) -> (next, action)` rules
//! - **Engine**: current state plus a borrowed table; `handle` one symbol at a time
//! - **Context**: consumer-owned data that actions mutate, passed by `&mut`
//!
//! # Example
//!
//! ```rust
//! use table_fsm::builder::TransitionTableBuilder;
//! use table_fsm::engine::Engine;
//! use table_fsm::state_enum;
//! use table_fsm::table::action;
//!
//! state_enum! {
//!     enum Comment {
//!         Code,
//!         InComment,
//!     }
//! }
//!
//! let table = TransitionTableBuilder::new()
//!     .state(Comment::Code, |s| s.on_ignore('#', Comment::InComment).otherwise_ignore(Comment::Code))
//!     .state(Comment::InComment, |s| {
//!         s.on_ignore('\n', Comment::Code)
//!             .otherwise(Comment::InComment, action(|text: &mut String, c: &char| text.push(*c)))
//!     })
//!     .build()
//!     .unwrap();
//!
//! let mut engine = Engine::new(Comment::Code, &table);
//! let mut comment = String::new();
//! engine.run(&mut comment, "x = 1 # one\n".chars()).unwrap();
//!
//! assert_eq!(comment, " one");
//! assert_eq!(engine.current_state(), &Comment::Code);
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod engine;
pub mod extract;
pub mod table;

// Re-export commonly used types
pub use crate::builder::{BuildError, TransitionTableBuilder};
pub use crate::core::{State, StateHistory, StepRecord, Symbol};
pub use crate::engine::{Engine, EngineConfig, EngineError};
pub use crate::table::{Action, TableError, Transition, TransitionMap, TransitionTable};
