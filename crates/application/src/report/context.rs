use std::path::Path;
use std::sync::Arc;

use tracing::{error, info};

use domain::{ActivityLog, Device, ReportKind, ReportWriter};

pub const NO_STRATEGY_MESSAGE: &str = "No report strategy set.";

/// Holds the selected report strategy and exports its output.
pub struct ReportContext {
    strategy: Option<ReportKind>,
    writer: Arc<dyn ReportWriter>,
    log: Arc<dyn ActivityLog>,
}

impl ReportContext {
    pub fn new(writer: Arc<dyn ReportWriter>, log: Arc<dyn ActivityLog>) -> Self {
        Self {
            strategy: None,
            writer,
            log,
        }
    }

    pub fn set_strategy(&mut self, strategy: ReportKind) {
        self.strategy = Some(strategy);
    }

    pub fn strategy(&self) -> Option<ReportKind> {
        self.strategy
    }

    pub fn generate(&self, devices: &[Device]) -> String {
        match self.strategy {
            Some(strategy) => strategy.generate(devices),
            None => NO_STRATEGY_MESSAGE.to_string(),
        }
    }

    /// Returns whether the report reached `path`. Failures are logged, never raised.
    pub fn export(&self, devices: &[Device], path: &Path) -> bool {
        let report = self.generate(devices);
        match self.writer.write_report(path, &report) {
            Ok(()) => {
                info!(path = %path.display(), "Report exported");
                self.log
                    .log(&format!("Report exported to {}", path.display()));
                true
            }
            Err(e) => {
                error!(path = %path.display(), "Failed to export report: {}", e);
                self.log.log(&format!("Error exporting report: {}", e));
                false
            }
        }
    }
}
