use std::sync::Arc;

use application::{DeviceRegistry, ReportContext};
use domain::ActivityLog;
use infrastructure::{AppConfig, FileActivityLog, FileReportWriter, JsonDeviceStore};
use tracing::info;

/// The wired object graph. One activity log instance is shared by
/// the registry, the report context and the driver.
pub struct Services {
    pub registry: DeviceRegistry,
    pub reports: ReportContext,
    pub log: Arc<dyn ActivityLog>,
}

impl Services {
    pub fn from_config(config: &AppConfig) -> Self {
        info!(
            devices_file = %config.storage.devices_file,
            log_file = %config.storage.log_file,
            "Wiring services"
        );

        let log: Arc<dyn ActivityLog> =
            Arc::new(FileActivityLog::new(&config.storage.log_file));
        let store = Arc::new(JsonDeviceStore::new(&config.storage.devices_file));

        Self {
            registry: DeviceRegistry::new(store, log.clone()),
            reports: ReportContext::new(Arc::new(FileReportWriter::new()), log.clone()),
            log,
        }
    }
}
