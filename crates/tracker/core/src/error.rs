//! Error types surfaced by the turn engine.
//!
//! Mutations validate their input before touching state, so an
//! [`TrackerError::IndexOutOfRange`] leaves the session untouched. A
//! [`TrackerError::Notify`] is reported after the mutation has been applied:
//! the state is consistent, but one or more views failed to refresh.

use crate::engine::RefreshError;

/// Severity level of an error, used for logging and recovery decisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Invalid input from the caller. Do not retry without changes.
    Validation,

    /// A collaborator misbehaved. The engine state is still consistent.
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TrackerError {
    /// A view passed a roster index it never rendered.
    #[error("roster index {index} out of range for {len} characters")]
    IndexOutOfRange { index: usize, len: usize },

    /// One or more observers failed during notification.
    #[error("{} observer(s) failed to refresh; first: {}", .failures.len(), first_failure(.failures))]
    Notify { failures: Vec<RefreshError> },
}

impl TrackerError {
    pub const fn severity(&self) -> ErrorSeverity {
        match self {
            Self::IndexOutOfRange { .. } => ErrorSeverity::Validation,
            Self::Notify { .. } => ErrorSeverity::Internal,
        }
    }

    /// Static identifier for the variant, used as a structured log field.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::IndexOutOfRange { .. } => "index_out_of_range",
            Self::Notify { .. } => "notify",
        }
    }
}

fn first_failure(failures: &[RefreshError]) -> String {
    failures
        .first()
        .map_or_else(|| "none".to_string(), ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_error_is_validation() {
        let error = TrackerError::IndexOutOfRange { index: 9, len: 3 };
        assert_eq!(error.severity(), ErrorSeverity::Validation);
        assert_eq!(
            error.to_string(),
            "roster index 9 out of range for 3 characters"
        );
    }

    #[test]
    fn notify_error_reports_first_failure() {
        let error = TrackerError::Notify {
            failures: vec![
                RefreshError::new("left", "terminal gone"),
                RefreshError::new("right", "terminal gone"),
            ],
        };
        assert_eq!(error.severity(), ErrorSeverity::Internal);
        assert_eq!(error.error_code(), "notify");
        assert!(error.to_string().starts_with("2 observer(s) failed"));
        assert!(error.to_string().contains("left"));
    }
}
