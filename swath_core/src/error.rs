use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SwathError {
    /// Rejected at the boundary: pan count < 3, bad spacing, bad amount.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("pan position {position} out of range for table of {len} pans")]
    PositionOutOfRange { position: usize, len: usize },
    /// Label for "no distribution"; the pipeline itself never fails with it.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),
}

pub type Result<T> = eyre::Result<T>;
pub use eyre::Report;

/// Wrap a configuration problem as a typed report.
pub(crate) fn invalid(msg: impl Into<String>) -> Report {
    Report::new(SwathError::InvalidConfiguration(msg.into()))
}
