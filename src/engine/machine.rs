//! Engine that drives a transition table one symbol at a time.

use crate::checkpoint::{Checkpoint, CheckpointError, CHECKPOINT_VERSION};
use crate::core::{State, StateHistory, StepRecord, Symbol};
use crate::engine::config::EngineConfig;
use crate::engine::error::EngineError;
use crate::table::TransitionTable;
use chrono::Utc;
use tracing::{debug, error, trace};
use uuid::Uuid;

/// Table-driven state machine.
///
/// Holds the current state and borrows a [`TransitionTable`], which may be
/// shared with other engines. `handle` takes `&mut self`, so one engine is
/// driven from one place at a time.
///
/// # Example
///
/// ```rust
/// use table_fsm::builder::TransitionTableBuilder;
/// use table_fsm::engine::Engine;
/// use table_fsm::state_enum;
/// use table_fsm::table::action;
///
/// state_enum! {
///     enum Word {
///         Between,
///         Inside,
///     }
/// }
///
/// let count_word = action(|words: &mut usize, _: &char| *words += 1);
/// let table = TransitionTableBuilder::new()
///     .state(Word::Between, |s| {
///         s.on_ignore(' ', Word::Between).otherwise(Word::Inside, count_word)
///     })
///     .state(Word::Inside, |s| {
///         s.on_ignore(' ', Word::Between).otherwise_ignore(Word::Inside)
///     })
///     .build()
///     .unwrap();
///
/// let mut engine = Engine::new(Word::Between, &table);
/// let mut words = 0;
/// engine.run(&mut words, "two words".chars()).unwrap();
///
/// assert_eq!(words, 2);
/// assert_eq!(engine.current_state(), &Word::Inside);
/// ```
pub struct Engine<'t, S: State, Sym, Ctx> {
    table: &'t TransitionTable<S, Sym, Ctx>,
    initial: S,
    current: S,
    steps: usize,
    history: StateHistory<S>,
    config: EngineConfig,
}

impl<'t, S: State, Sym: Symbol, Ctx> Engine<'t, S, Sym, Ctx> {
    /// Create an engine in `initial` with the default configuration.
    ///
    /// The initial state is not checked against the table; if it is
    /// missing, the first `handle` fails with `MissingStateDefinition`.
    pub fn new(initial: S, table: &'t TransitionTable<S, Sym, Ctx>) -> Self {
        Self::with_config(initial, table, EngineConfig::default())
    }

    pub fn with_config(initial: S, table: &'t TransitionTable<S, Sym, Ctx>, config: EngineConfig) -> Self {
        Self {
            table,
            current: initial.clone(),
            initial,
            steps: 0,
            history: StateHistory::new(),
            config,
        }
    }

    /// Handle one input symbol.
    ///
    /// Looks up the transition for `(current state, symbol)`, preferring a
    /// symbol-specific entry over the state's default. The current state is
    /// updated to the transition's target *before* its action runs.
    ///
    /// Fails with `MissingStateDefinition` if the current state has no
    /// entry in the table; the engine is left unchanged and no action runs.
    pub fn handle(&mut self, ctx: &mut Ctx, symbol: Sym) -> Result<(), EngineError> {
        let table = self.table;
        let transition = match table.lookup(&self.current, &symbol) {
            Ok(transition) => transition,
            Err(err) => {
                error!(state = self.current.name(), symbol = ?symbol, "No transitions for state");
                return Err(err);
            }
        };

        let from = std::mem::replace(&mut self.current, transition.target.clone());
        self.steps += 1;
        trace!(
            step = self.steps,
            from = from.name(),
            to = self.current.name(),
            symbol = ?symbol,
            "Handled symbol"
        );

        if self.config.record_history {
            self.record(from, &symbol);
        }

        transition.fire(ctx, &symbol);
        Ok(())
    }

    /// Feed `symbols` in order, stopping at the first error.
    ///
    /// Returns the number of symbols handled.
    pub fn run<I>(&mut self, ctx: &mut Ctx, symbols: I) -> Result<usize, EngineError>
    where
        I: IntoIterator<Item = Sym>,
    {
        let mut handled = 0;
        for symbol in symbols {
            self.handle(ctx, symbol)?;
            handled += 1;
        }
        Ok(handled)
    }

    fn record(&mut self, from: S, symbol: &Sym) {
        let step = StepRecord {
            from,
            to: self.current.clone(),
            symbol: format!("{:?}", symbol),
            step: self.steps,
            timestamp: Utc::now(),
        };
        self.history.push(step, self.config.history_limit);
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.current
    }

    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    /// Number of symbols handled since creation or the last reset.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Get step history (pure)
    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    pub fn table(&self) -> &'t TransitionTable<S, Sym, Ctx> {
        self.table
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Return to the initial state, clearing the step count and history.
    pub fn reset(&mut self) {
        debug!(from = self.current.name(), to = self.initial.name(), "Resetting engine");
        self.current = self.initial.clone();
        self.steps = 0;
        self.history = StateHistory::new();
    }

    /// Snapshot the engine's position.
    pub fn checkpoint(&self) -> Checkpoint<S> {
        Checkpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            initial_state: self.initial.clone(),
            current_state: self.current.clone(),
            steps: self.steps,
            history: self.history.clone(),
        }
    }

    /// Rebuild an engine from a checkpoint.
    ///
    /// Fails if the checkpoint format is unsupported or its initial or
    /// current state is not defined by `table`. The restored history is
    /// trimmed to `config.history_limit`.
    pub fn resume(
        checkpoint: &Checkpoint<S>,
        table: &'t TransitionTable<S, Sym, Ctx>,
        config: EngineConfig,
    ) -> Result<Self, CheckpointError> {
        if checkpoint.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: checkpoint.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        for state in [&checkpoint.initial_state, &checkpoint.current_state] {
            if !table.contains(state) {
                return Err(CheckpointError::UnknownState {
                    state: state.name().to_string(),
                });
            }
        }

        let mut history = checkpoint.history.clone();
        if let Some(limit) = config.history_limit {
            history.truncate(limit);
        }

        debug!(
            id = %checkpoint.id,
            state = checkpoint.current_state.name(),
            steps = checkpoint.steps,
            "Resuming engine from checkpoint"
        );

        Ok(Self {
            table,
            initial: checkpoint.initial_state.clone(),
            current: checkpoint.current_state.clone(),
            steps: checkpoint.steps,
            history,
            config,
        })
    }
}
