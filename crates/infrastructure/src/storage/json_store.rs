use domain::{Device, DeviceStore, StorageError};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, info};

/// Persists the device collection as a pretty-printed JSON array.
///
/// Every save rewrites the whole file.
pub struct JsonDeviceStore {
    path: PathBuf,
}

impl JsonDeviceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DeviceStore for JsonDeviceStore {
    fn load(&self) -> Result<Option<Vec<Device>>, StorageError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No device file at {:?}, starting empty", self.path);
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let devices: Vec<Device> = serde_json::from_str(&json)?;
        debug!(count = devices.len(), "Read devices from {:?}", self.path);
        Ok(Some(devices))
    }

    fn save(&self, devices: &[Device]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(devices)?;
        fs::write(&self.path, json)?;
        debug!(count = devices.len(), "Wrote devices to {:?}", self.path);
        Ok(())
    }
}
