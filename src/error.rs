use thiserror::Error;
use tracing::{error, warn};

/// Errors raised by the shortcut registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShortcutError {
    /// A key was inserted into a unique map that already holds it.
    #[error("{message}")]
    DuplicateKey { key: String, message: String },
}

impl ShortcutError {
    /// The key that triggered the error.
    pub fn key(&self) -> &str {
        match self {
            Self::DuplicateKey { key, .. } => key,
        }
    }
}

pub type Result<T> = std::result::Result<T, ShortcutError>;

/// Turns a store `Result` into an `Option`, logging the error at the
/// caller's location. Used where a registry mutation must not fail the
/// public operation that triggered it.
pub trait ResultExt<T> {
    /// Log at `error` level and drop the error.
    fn log_err(self) -> Option<T>;
    /// Log at `warn` level and drop the error.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        let caller = std::panic::Location::caller();
        self.map_err(|err| {
            error!(
                error = ?err,
                file = caller.file(),
                line = caller.line(),
                "Shortcut registry update rejected"
            )
        })
        .ok()
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        let caller = std::panic::Location::caller();
        self.map_err(|err| {
            warn!(
                error = ?err,
                file = caller.file(),
                line = caller.line(),
                "Shortcut registry update skipped"
            )
        })
        .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_key_displays_formatted_message() {
        let err = ShortcutError::DuplicateKey {
            key: "ctrl+s".to_string(),
            message: "already registered".to_string(),
        };
        assert_eq!(err.to_string(), "already registered");
        assert_eq!(err.key(), "ctrl+s");
    }

    #[test]
    fn log_err_passes_through_ok() {
        let ok: std::result::Result<u8, ShortcutError> = Ok(3);
        assert_eq!(ok.log_err(), Some(3));
    }

    #[test]
    fn log_err_drops_duplicate_key_error() {
        let err: Result<()> = Err(ShortcutError::DuplicateKey {
            key: "ctrl+s".to_string(),
            message: "dup".to_string(),
        });
        assert_eq!(err.log_err(), None);
    }

    #[test]
    fn warn_on_err_swallows_error() {
        let err: Result<()> = Err(ShortcutError::DuplicateKey {
            key: "a".to_string(),
            message: "dup".to_string(),
        });
        assert_eq!(err.warn_on_err(), None);
    }
}
