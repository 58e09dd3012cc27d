use chrono::Local;
use domain::ActivityLog;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use tracing::{error, info};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Appends `"<timestamp>: <message>"` lines to a text file.
pub struct FileActivityLog {
    path: PathBuf,
}

impl FileActivityLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn append(&self, line: &str) -> std::io::Result<()> {
        // Open, write, close per line so the file is never held open
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)?;
        file.flush()
    }
}

impl ActivityLog for FileActivityLog {
    fn log(&self, message: &str) {
        let line = format!("{}: {}", Local::now().format(TIMESTAMP_FORMAT), message);
        info!(target: "activity", "{}", message);

        if let Err(e) = self.append(&line) {
            error!("Error logging to {:?}: {}", self.path, e);
        }
    }
}
