use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid device ID: {0}")]
    InvalidDeviceId(String),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Invalid device kind: {0}")]
    InvalidDeviceKind(String),

    #[error("Invalid report type: {0}")]
    InvalidReportKind(String),

    #[error("Observer failed: {0}")]
    ObserverFailed(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;

/// Failures of the durable collaborators (device file, report export)
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed data: {0}")]
    Serialization(#[from] serde_json::Error),
}
