//! Build errors for transition tables.

use crate::table::TableError;
use thiserror::Error;

/// Errors that can occur when building a transition table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    /// Validation found one or more problems; all of them are listed.
    #[error("Invalid transition table ({} error(s)): {}", .errors.len(), join(.errors))]
    InvalidTable { errors: Vec<TableError> },
}

impl BuildError {
    /// Every configuration error found.
    pub fn errors(&self) -> &[TableError] {
        match self {
            Self::InvalidTable { errors } => errors,
        }
    }
}

fn join(errors: &[TableError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_every_error() {
        let error = BuildError::InvalidTable {
            errors: vec![
                TableError::MissingDefaultTransition {
                    state: "InString".to_string(),
                },
                TableError::NoStates,
            ],
        };

        assert_eq!(
            error.to_string(),
            "Invalid transition table (2 error(s)): State 'InString' has no default transition; \
             Transition table defines no states"
        );
        assert_eq!(error.errors().len(), 2);
    }
}
