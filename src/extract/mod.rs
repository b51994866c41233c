//! Double-quoted string extraction built on the engine.
//!
//! Scans text for `"`-delimited strings, honoring backslash escapes, and
//! collects each completed string. A string still open at end of input is
//! dropped, not emitted.
//!
//! | State            | Symbol  | Next state       | Action                  |
//! |------------------|---------|------------------|-------------------------|
//! | LookingForString | `"`     | InString         | reset accumulator       |
//! | LookingForString | default | LookingForString | none                    |
//! | InString         | `"`     | LookingForString | emit, then clear        |
//! | InString         | `\`     | CopyNextChar     | none                    |
//! | InString         | default | InString         | append symbol           |
//! | CopyNextChar     | default | InString         | append symbol (escaped) |
//!
//! # Example
//!
//! ```rust
//! use table_fsm::extract::extract_strings;
//!
//! let found = extract_strings(r#"say "hi" and "a \"quoted\" word""#).unwrap();
//! assert_eq!(found, vec!["hi".to_string(), r#"a "quoted" word"#.to_string()]);
//! ```

use crate::builder::{BuildError, TransitionTableBuilder};
use crate::engine::{Engine, EngineError};
use crate::state_enum;
use crate::table::{action, TransitionTable};
use thiserror::Error;
use tracing::debug;

state_enum! {
    /// Position of the scanner relative to a quoted string.
    pub enum StringState {
        LookingForString,
        InString,
        CopyNextChar,
    }
}

/// Consumer-owned context the extraction actions write into.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Accumulator {
    buffer: String,
    emitted: Vec<String>,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    fn reset(&mut self) {
        self.buffer.clear();
    }

    fn append(&mut self, c: char) {
        self.buffer.push(c);
    }

    /// Move the completed string out, leaving the buffer empty.
    fn emit(&mut self) {
        let completed = std::mem::take(&mut self.buffer);
        debug!(value = %completed, "Emitting string");
        self.emitted.push(completed);
    }

    /// Strings completed so far, in input order.
    pub fn emitted(&self) -> &[String] {
        &self.emitted
    }

    /// Text of a string that has been opened but not yet closed.
    pub fn pending(&self) -> &str {
        &self.buffer
    }

    pub fn into_emitted(self) -> Vec<String> {
        self.emitted
    }
}

pub type StringTable = TransitionTable<StringState, char, Accumulator>;

/// Build the extraction table.
pub fn string_table() -> Result<StringTable, BuildError> {
    let reset = action(|acc: &mut Accumulator, _: &char| acc.reset());
    let append = action(|acc: &mut Accumulator, c: &char| acc.append(*c));
    let emit = action(|acc: &mut Accumulator, _: &char| acc.emit());

    TransitionTableBuilder::new()
        .closed()
        .state(StringState::LookingForString, |s| {
            s.on('"', StringState::InString, reset)
                .otherwise_ignore(StringState::LookingForString)
        })
        .state(StringState::InString, |s| {
            s.on('"', StringState::LookingForString, emit)
                .on_ignore('\\', StringState::CopyNextChar)
                .otherwise(StringState::InString, append.clone())
        })
        .state(StringState::CopyNextChar, |s| {
            s.otherwise(StringState::InString, append)
        })
        .build()
}

/// Errors from the one-shot [`extract_strings`] helper.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Extracts quoted strings using one shared table.
pub struct StringExtractor {
    table: StringTable,
}

impl StringExtractor {
    pub fn new() -> Result<Self, BuildError> {
        Ok(Self {
            table: string_table()?,
        })
    }

    pub fn table(&self) -> &StringTable {
        &self.table
    }

    /// Feed `text` into `acc`, returning the state the scan ended in.
    pub fn extract_into(&self, text: &str, acc: &mut Accumulator) -> Result<StringState, EngineError> {
        let mut engine = Engine::new(StringState::LookingForString, &self.table);
        engine.run(acc, text.chars())?;
        Ok(*engine.current_state())
    }

    /// Every completed string in `text`, in order.
    pub fn extract(&self, text: &str) -> Result<Vec<String>, EngineError> {
        let mut acc = Accumulator::new();
        self.extract_into(text, &mut acc)?;
        Ok(acc.into_emitted())
    }
}

/// Build a table and extract every completed string in `text`.
pub fn extract_strings(text: &str) -> Result<Vec<String>, ExtractError> {
    Ok(StringExtractor::new()?.extract(text)?)
}
