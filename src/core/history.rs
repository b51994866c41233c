//! Step history tracking.
//!
//! Provides immutable tracking of the steps an engine has taken. Recording
//! is opt-in (see `EngineConfig::record_history`).

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single handled symbol.
///
/// The symbol is kept as its `Debug` rendering so that histories stay
/// serializable whatever the symbol type is.
///
/// # Example
///
/// ```rust
/// use table_fsm::core::{State, StepRecord};
/// use serde::{Deserialize, Serialize};
/// use chrono::Utc;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Mode { Outside, Inside }
///
/// impl State for Mode {
///     fn name(&self) -> &str {
///         match self {
///             Self::Outside => "Outside",
///             Self::Inside => "Inside",
///         }
///     }
/// }
///
/// let record = StepRecord {
///     from: Mode::Outside,
///     to: Mode::Inside,
///     symbol: format!("{:?}", '"'),
///     step: 1,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.step, 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StepRecord<S: State> {
    /// State the engine was in when the symbol arrived
    pub from: S,
    /// State the engine moved to
    pub to: S,
    /// Debug rendering of the triggering symbol
    pub symbol: String,
    /// One-based index of the symbol in the stream
    pub step: usize,
    /// When the step was handled
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of handled steps.
///
/// History is immutable - `record` returns a new history with the step
/// added. `record_bounded` additionally drops the oldest entries once a
/// limit is reached.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    steps: Vec<StepRecord<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Record a step, returning a new history.
    ///
    /// # Example
    ///
    /// ```rust
    /// use table_fsm::core::{State, StateHistory, StepRecord};
    /// use serde::{Deserialize, Serialize};
    /// use chrono::Utc;
    ///
    /// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    /// enum Step { A, B }
    ///
    /// impl State for Step {
    ///     fn name(&self) -> &str {
    ///         match self {
    ///             Self::A => "A",
    ///             Self::B => "B",
    ///         }
    ///     }
    /// }
    ///
    /// let history = StateHistory::new();
    /// let new_history = history.record(StepRecord {
    ///     from: Step::A,
    ///     to: Step::B,
    ///     symbol: "'x'".to_string(),
    ///     step: 1,
    ///     timestamp: Utc::now(),
    /// });
    /// assert_eq!(new_history.steps().len(), 1);
    /// assert_eq!(history.steps().len(), 0); // Original unchanged
    /// ```
    pub fn record(&self, step: StepRecord<S>) -> Self {
        let mut steps = self.steps.clone();
        steps.push(step);
        Self { steps }
    }

    /// Record a step, keeping at most `limit` of the most recent entries.
    pub fn record_bounded(&self, step: StepRecord<S>, limit: usize) -> Self {
        let mut history = self.clone();
        history.push(step, Some(limit));
        history
    }

    /// In-place append used by the engine on its hot path.
    pub(crate) fn push(&mut self, step: StepRecord<S>, limit: Option<usize>) {
        self.steps.push(step);
        if let Some(limit) = limit {
            self.truncate(limit);
        }
    }

    /// Drop the oldest steps until at most `limit` remain.
    pub(crate) fn truncate(&mut self, limit: usize) {
        if self.steps.len() > limit {
            let excess = self.steps.len() - limit;
            self.steps.drain(..excess);
        }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the first retained step, then the `to`
    /// state of every step.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.steps.first() {
            path.push(&first.from);
        }
        for step in &self.steps {
            path.push(&step.to);
        }
        path
    }

    /// Calculate total duration from first to last step.
    ///
    /// Returns `None` if there are no steps.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.steps.first(), self.steps.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all recorded steps in order.
    pub fn steps(&self) -> &[StepRecord<S>] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Outside,
        Inside,
        Escaped,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Outside => "Outside",
                Self::Inside => "Inside",
                Self::Escaped => "Escaped",
            }
        }
    }

    fn step(from: TestState, to: TestState, index: usize) -> StepRecord<TestState> {
        StepRecord {
            from,
            to,
            symbol: format!("{:?}", 'x'),
            step: index,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<TestState> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = StateHistory::new();
        let new_history = history.record(step(TestState::Outside, TestState::Inside, 1));

        assert_eq!(history.steps().len(), 0);
        assert_eq!(new_history.steps().len(), 1);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let history = StateHistory::new()
            .record(step(TestState::Outside, TestState::Inside, 1))
            .record(step(TestState::Inside, TestState::Escaped, 2));

        let path = history.get_path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], &TestState::Outside);
        assert_eq!(path[1], &TestState::Inside);
        assert_eq!(path[2], &TestState::Escaped);
    }

    #[test]
    fn record_bounded_drops_oldest_steps() {
        let mut history = StateHistory::new();
        for index in 1..=5 {
            history = history.record_bounded(step(TestState::Inside, TestState::Inside, index), 3);
        }

        let retained: Vec<usize> = history.steps().iter().map(|s| s.step).collect();
        assert_eq!(retained, vec![3, 4, 5]);
    }

    #[test]
    fn truncate_keeps_most_recent_steps() {
        let mut history = StateHistory::new();
        for index in 1..=4 {
            history = history.record(step(TestState::Inside, TestState::Inside, index));
        }

        history.truncate(2);
        let retained: Vec<usize> = history.steps().iter().map(|s| s.step).collect();
        assert_eq!(retained, vec![3, 4]);

        history.truncate(5);
        assert_eq!(history.steps().len(), 2);
    }

    #[test]
    fn single_step_has_duration_zero() {
        let history = StateHistory::new().record(step(TestState::Outside, TestState::Inside, 1));
        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StateHistory::new().record(step(TestState::Outside, TestState::Inside, 1));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<TestState> = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.steps().len(), 1);
        assert_eq!(deserialized.steps()[0].to, TestState::Inside);
        assert_eq!(deserialized.steps()[0].symbol, "'x'");
    }
}
