use domain::ActivityLog;
use std::sync::{Arc, Mutex};

/// Keeps activity messages in memory, without timestamps.
#[derive(Clone, Default)]
pub struct MemoryActivityLog {
    pub lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    pub fn contains(&self, message: &str) -> bool {
        self.messages().iter().any(|m| m == message)
    }
}

impl ActivityLog for MemoryActivityLog {
    fn log(&self, message: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(message.to_string());
        }
    }
}
