use super::Device;
use crate::StorageError;

/// Durable storage for the whole device collection.
///
/// The collection is always read and written as a unit, in sequence order.
pub trait DeviceStore: Send + Sync {
    /// Load the persisted devices, or `None` if nothing has ever been persisted.
    fn load(&self) -> Result<Option<Vec<Device>>, StorageError>;

    /// Overwrite the persisted collection with `devices`.
    fn save(&self, devices: &[Device]) -> Result<(), StorageError>;
}
