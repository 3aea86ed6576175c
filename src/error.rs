use thiserror::Error;
use tracing::{error, warn};

/// Crate-level error for operations that cross module boundaries.
///
/// Module-specific errors (`ShortcutParseError`, `CommandValidationError`,
/// `StoreError`) stay in their modules; this wrapper exists for callers that
/// want a single error type at the API edge.
#[derive(Error, Debug)]
pub enum OmnibarError {
    #[error(transparent)]
    Store(#[from] crate::commands::store::StoreError),

    #[error(transparent)]
    Validation(#[from] crate::commands::registry::CommandValidationError),

    #[error(transparent)]
    Shortcut(#[from] crate::commands::types::ShortcutParseError),
}

pub type Result<T> = std::result::Result<T, OmnibarError>;

/// Extension trait for silent error logging with caller location tracking.
/// Use when the operation is recoverable and the UI should keep working.
pub trait ResultExt<T> {
    /// Log error with caller location and return None. Use for recoverable failures.
    fn log_err(self) -> Option<T>;
    /// Log as warning with caller location and return None. Use for expected failures.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                let caller = std::panic::Location::caller();
                error!(
                    error = ?err,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation failed"
                );
                None
            }
        }
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = ?err,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation had warning"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_err_passes_through_ok() {
        let value: std::result::Result<u32, String> = Ok(7);
        assert_eq!(value.log_err(), Some(7));
    }

    #[test]
    fn log_err_swallows_failure() {
        let value: std::result::Result<u32, String> = Err("boom".into());
        assert_eq!(value.log_err(), None);
    }
}
