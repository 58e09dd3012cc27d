use crate::StorageError;
use std::path::Path;

/// Destination for exported report text.
pub trait ReportWriter: Send + Sync {
    /// Write `content` to `path`, replacing anything already there.
    fn write_report(&self, path: &Path, content: &str) -> Result<(), StorageError>;
}
