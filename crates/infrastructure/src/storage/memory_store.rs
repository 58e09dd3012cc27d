use domain::{Device, DeviceStore, StorageError};
use std::io;
use std::sync::{Arc, Mutex};

/// In-memory store for tests and dry runs. `devices` is `None` until first written.
#[derive(Clone, Default)]
pub struct MemoryDeviceStore {
    pub devices: Arc<Mutex<Option<Vec<Device>>>>,
    pub save_count: Arc<Mutex<usize>>,
    pub fail_saves: bool,
}

impl MemoryDeviceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_devices(devices: Vec<Device>) -> Self {
        Self {
            devices: Arc::new(Mutex::new(Some(devices))),
            ..Self::default()
        }
    }

    /// A store whose every save fails with an I/O error
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    pub fn saved(&self) -> Vec<Device> {
        self.persisted().unwrap_or_default()
    }

    fn persisted(&self) -> Option<Vec<Device>> {
        self.devices.lock().ok().and_then(|d| d.clone())
    }

    pub fn saves(&self) -> usize {
        self.save_count.lock().map(|c| *c).unwrap_or_default()
    }
}

impl DeviceStore for MemoryDeviceStore {
    fn load(&self) -> Result<Option<Vec<Device>>, StorageError> {
        Ok(self.persisted())
    }

    fn save(&self, devices: &[Device]) -> Result<(), StorageError> {
        if let Ok(mut count) = self.save_count.lock() {
            *count += 1;
        }
        if self.fail_saves {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "store is read-only").into());
        }
        if let Ok(mut stored) = self.devices.lock() {
            *stored = Some(devices.to_vec());
        }
        Ok(())
    }
}
