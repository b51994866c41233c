//! State and symbol traits for table-driven machines.
//!
//! States identify the rows of a transition table; symbols are the input
//! units fed to the engine one at a time.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// States are finite, comparable identifiers (typically fieldless enums).
/// They key the transition table, so they must be hashable, and they are
/// serializable so engine positions can be checkpointed.
///
/// # Required Traits
///
/// - `Clone`: the engine hands out and records copies of states
/// - `Eq` + `Hash`: states key the transition table
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states must be serializable for checkpoints
///
/// # Example
///
/// ```rust
/// use table_fsm::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum LexState {
///     Start,
///     InWord,
/// }
///
/// impl State for LexState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Start => "Start",
///             Self::InWord => "InWord",
///         }
///     }
/// }
///
/// assert_eq!(LexState::InWord.name(), "InWord");
/// ```
pub trait State: Clone + Eq + Hash + Debug + Serialize + DeserializeOwned + Send + Sync {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

/// One unit of input driving a transition.
///
/// Blanket-implemented for every hashable, comparable, debuggable type, so
/// `char`, `u8`, `&'static str` and user enums all work as symbols.
pub trait Symbol: Eq + Hash + Debug {}

impl<T: Eq + Hash + Debug> Symbol for T {}
