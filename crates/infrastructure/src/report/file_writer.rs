use domain::{ReportWriter, StorageError};
use std::fs;
use std::path::Path;

/// Writes exported reports as plain UTF-8 files.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileReportWriter;

impl FileReportWriter {
    pub fn new() -> Self {
        Self
    }
}

impl ReportWriter for FileReportWriter {
    fn write_report(&self, path: &Path, content: &str) -> Result<(), StorageError> {
        fs::write(path, content)?;
        Ok(())
    }
}
