use thiserror::Error;

/// Error type returned by repositories and hook predicates.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum ActivityError {
    #[error("No key provided for activity on '{0}'")]
    NoKeyProvided(String),

    #[error("Type '{0}' is already tracked")]
    AlreadyTracked(String),

    #[error("Type '{0}' cannot be both tracked and an activist")]
    ConflictingRoles(String),

    #[error("Type '{0}' is not tracked")]
    NotTracked(String),

    #[error("Type '{0}' is not registered as an activist")]
    NotActivist(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Hook for '{action}' failed: {source}")]
    HookFailed {
        action: String,
        #[source]
        source: BoxError,
    },

    #[error("Persistence error: {0}")]
    PersistenceError(#[source] BoxError),
}

impl ActivityError {
    /// Returns true for the missing key error raised at record time.
    pub fn is_no_key_provided(&self) -> bool {
        matches!(self, ActivityError::NoKeyProvided(_))
    }
}

pub type ActivityResult<T> = Result<T, ActivityError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_no_key_provided_message() {
        let err = ActivityError::NoKeyProvided("article".to_string());
        assert!(err.is_no_key_provided());
        assert_eq!(err.to_string(), "No key provided for activity on 'article'");
    }

    #[test]
    fn test_persistence_error_keeps_source() {
        let source: BoxError = "connection reset".into();
        let err = ActivityError::PersistenceError(source);
        assert!(!err.is_no_key_provided());
        assert_eq!(err.source().map(|s| s.to_string()), Some("connection reset".to_string()));
    }

    #[test]
    fn test_hook_failed_message() {
        let err = ActivityError::HookFailed {
            action: "create".to_string(),
            source: "not allowed".into(),
        };
        assert_eq!(err.to_string(), "Hook for 'create' failed: not allowed");
    }
}
