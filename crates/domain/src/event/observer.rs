use crate::{Device, DeviceStatus, DomainError};

/// Subscriber notified synchronously on every status transition,
/// including transitions where `old == new`.
pub trait StatusObserver: Send + Sync {
    fn on_status_changed(
        &self,
        device: &Device,
        old: DeviceStatus,
        new: DeviceStatus,
    ) -> Result<(), DomainError>;
}
