//! Error types for wcdaq-core.

use thiserror::Error;

/// Result type alias for wcdaq operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for wcdaq operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The configured digitizer name did not resolve to a known algorithm.
    #[error("undefined digitizer: configured name {0:?} did not resolve")]
    UndefinedDigitizer(String),

    /// The configured trigger name did not resolve to a known algorithm.
    #[error("undefined trigger: configured name {0:?} did not resolve")]
    UndefinedTrigger(String),

    /// The configured trigger denotes an outcome, not a selectable algorithm.
    #[error("trigger {0:?} tags an outcome and cannot be selected")]
    UnselectableTrigger(&'static str),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}
