use thiserror::Error;

use crate::duration::DurationError;

/// Syntax problems in a raw record: the text is not shaped like a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("whitespace is not allowed in a record")]
    Whitespace,
    #[error("invalid record format: expected {expected} comma-separated fields, got {found}")]
    FieldCount { expected: usize, found: usize },
    #[error("negative step counts are not allowed")]
    NegativeSteps,
    #[error("invalid step count: {0:?}")]
    InvalidSteps(String),
    #[error("step count {0:?} does not fit an integer")]
    StepsOverflow(String),
    #[error("negative durations are not allowed")]
    NegativeDuration,
    #[error("invalid duration: {0}")]
    Duration(#[from] DurationError),
}

/// Values that parse fine but are outside the accepted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("steps must be positive")]
    Steps,
    #[error("duration must be positive")]
    Duration,
    #[error("height/weight must be positive")]
    Profile,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackerError {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Range(#[from] RangeError),
    #[error("unknown activity type: {0:?}")]
    UnknownActivity(String),
    #[error("invalid tracker config: {0}")]
    Config(String),
}

impl TrackerError {
    /// Stable label used for the rejection counter and log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            TrackerError::Format(_) => "format",
            TrackerError::Range(_) => "range",
            TrackerError::UnknownActivity(_) => "unknown_activity",
            TrackerError::Config(_) => "config",
        }
    }
}

impl From<DurationError> for TrackerError {
    fn from(e: DurationError) -> Self {
        TrackerError::Format(FormatError::Duration(e))
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
