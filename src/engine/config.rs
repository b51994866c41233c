//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Options controlling optional engine bookkeeping.
///
/// Missing fields take their defaults when deserialized, so `{}` is a valid
/// configuration.
///
/// # Example
///
/// ```rust
/// use table_fsm::engine::EngineConfig;
///
/// let config = EngineConfig::from_json(r#"{ "record_history": true, "history_limit": 64 }"#)
///     .unwrap();
/// assert!(config.record_history);
/// assert_eq!(config.history_limit, Some(64));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Record every handled symbol in the engine's history
    pub record_history: bool,

    /// Keep only this many of the most recent steps
    pub history_limit: Option<usize>,
}

impl EngineConfig {
    /// Configuration that records every step without bound.
    pub fn with_history() -> Self {
        Self {
            record_history: true,
            history_limit: None,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_disables_history() {
        let config = EngineConfig::default();
        assert!(!config.record_history);
        assert_eq!(config.history_limit, None);
    }

    #[test]
    fn empty_json_uses_defaults() {
        let config = EngineConfig::from_json("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn mistyped_field_is_rejected() {
        assert!(EngineConfig::from_json(r#"{ "record_history": "yes" }"#).is_err());
    }
}
