use thiserror::Error;

/// Errors that can occur while producing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("table stride must be at least 1")]
    InvalidStride,

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
