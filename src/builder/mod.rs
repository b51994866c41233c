//! Builder API for ergonomic table construction.
//!
//! Tables are described state by state, then validated as a whole. Every
//! problem is reported at once, before any symbol is processed.

pub mod error;
pub mod macros;
pub mod state;
pub mod table;

pub use error::BuildError;
pub use state::StateBuilder;
pub use table::TransitionTableBuilder;
