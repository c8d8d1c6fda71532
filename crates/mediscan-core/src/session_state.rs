//! Observable state of one interaction session.

use serde::{Deserialize, Serialize};

use crate::medication::MedicationRecord;

/// Result, loading flag and error message of the current lookup.
///
/// `result` and `error` are never both present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub result: Option<MedicationRecord>,
    pub loading: bool,
    pub error: Option<String>,
}

impl SessionState {
    /// True when no lookup is running and nothing is shown.
    pub fn is_clean(&self) -> bool {
        self.result.is_none() && !self.loading && self.error.is_none()
    }

    /// True when a lookup finished and exactly one outcome is shown.
    pub fn is_settled(&self) -> bool {
        !self.loading && (self.result.is_some() != self.error.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_clean() {
        let state = SessionState::default();
        assert!(state.is_clean());
        assert!(!state.is_settled());
    }

    #[test]
    fn test_error_only_is_settled() {
        let state = SessionState {
            result: None,
            loading: false,
            error: Some("Failed".to_string()),
        };
        assert!(state.is_settled());
        assert!(!state.is_clean());
    }
}
