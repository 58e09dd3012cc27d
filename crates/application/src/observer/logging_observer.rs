use std::sync::Arc;

use domain::{ActivityLog, Device, DeviceStatus, DomainError, StatusObserver};

/// Writes every status transition to the activity log
pub struct LoggingObserver {
    log: Arc<dyn ActivityLog>,
}

impl LoggingObserver {
    pub fn new(log: Arc<dyn ActivityLog>) -> Self {
        Self { log }
    }
}

impl StatusObserver for LoggingObserver {
    fn on_status_changed(
        &self,
        device: &Device,
        old: DeviceStatus,
        new: DeviceStatus,
    ) -> Result<(), DomainError> {
        self.log.log(&format!(
            "Device {} status changed from {} to {}",
            device.id(),
            old,
            new
        ));
        Ok(())
    }
}
