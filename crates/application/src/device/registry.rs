use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info, warn};

use domain::{ActivityLog, Device, DeviceId, DeviceStatus, DeviceStore, StatusObserver};

use crate::observer::LoggingObserver;

/// Owns the device collection.
///
/// Devices live in `index` (id -> device); `order` holds the ids in listing
/// order. Every id in `order` is a key of `index` and vice versa.
pub struct DeviceRegistry {
    order: Vec<DeviceId>,
    index: HashMap<DeviceId, Device>,
    observers: Vec<Arc<dyn StatusObserver>>,
    store: Arc<dyn DeviceStore>,
    log: Arc<dyn ActivityLog>,
}

impl DeviceRegistry {
    /// Subscribes a `LoggingObserver` first, then loads whatever the store holds.
    pub fn new(store: Arc<dyn DeviceStore>, log: Arc<dyn ActivityLog>) -> Self {
        let mut registry = Self {
            order: Vec::new(),
            index: HashMap::new(),
            observers: Vec::new(),
            store,
            log: log.clone(),
        };
        registry.subscribe(Arc::new(LoggingObserver::new(log)));
        registry.load();
        registry
    }

    pub fn subscribe(&mut self, observer: Arc<dyn StatusObserver>) {
        self.observers.push(observer);
    }

    /// Removes the first subscription of this exact observer instance.
    pub fn unsubscribe(&mut self, observer: &Arc<dyn StatusObserver>) -> bool {
        let target = Arc::as_ptr(observer) as *const ();
        match self
            .observers
            .iter()
            .position(|o| Arc::as_ptr(o) as *const () == target)
        {
            Some(pos) => {
                self.observers.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn add(&mut self, device: Device) -> bool {
        let id = device.id().clone();
        if self.index.contains_key(&id) {
            self.log.log(&format!(
                "Failed to add device: DeviceID {} already exists.",
                id
            ));
            return false;
        }

        self.order.push(id.clone());
        self.index.insert(id.clone(), device);
        info!(device_id = %id, "Device added");
        self.log.log(&format!("Device added: {}", id));
        self.persist();
        true
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let Some((id, _)) = self.index.remove_entry(id) else {
            self.log.log(&format!(
                "Failed to remove device: DeviceID {} not found.",
                id
            ));
            return false;
        };

        self.order.retain(|existing| *existing != id);
        info!(device_id = %id, "Device removed");
        self.log.log(&format!("Device removed: {}", id));
        self.persist();
        true
    }

    /// Sets the status and notifies every observer, even when the status is unchanged.
    pub fn update_status(&mut self, id: &str, new_status: DeviceStatus) -> bool {
        let Some(device) = self.index.get_mut(id) else {
            self.log.log(&format!(
                "Failed to update device status: DeviceID {} not found.",
                id
            ));
            return false;
        };

        let old_status = device.set_status(new_status);
        let device = device.clone();
        self.notify(&device, old_status, new_status);

        info!(device_id = %device.id(), from = %old_status, to = %new_status, "Device status updated");
        self.log.log(&format!(
            "Device status updated: {} to {}",
            device.id(),
            new_status
        ));
        self.persist();
        true
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Device> {
        self.index.get(id)
    }

    /// Case-insensitive substring match on the name, in listing order.
    pub fn find_by_name(&self, needle: &str) -> Vec<Device> {
        let needle = needle.to_lowercase();
        self.devices()
            .filter(|d| d.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Stable sort by name, ordinal comparison.
    pub fn sort_by_name(&mut self) {
        let index = &self.index;
        self.order.sort_by(|a, b| index[a].name.cmp(&index[b].name));
        self.log.log("Devices sorted by name.");
    }

    /// Stable sort by status rank (Online < Offline < Maintenance).
    pub fn sort_by_status(&mut self) {
        let index = &self.index;
        self.order.sort_by_key(|id| index[id].status());
        self.log.log("Devices sorted by status.");
    }

    /// Snapshot of the collection in listing order.
    pub fn list_all(&self) -> Vec<Device> {
        self.devices().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn devices(&self) -> impl Iterator<Item = &Device> {
        self.order.iter().filter_map(|id| self.index.get(id))
    }

    /// Observer failures are logged and do not stop the fan-out.
    fn notify(&self, device: &Device, old: DeviceStatus, new: DeviceStatus) {
        for observer in &self.observers {
            if let Err(e) = observer.on_status_changed(device, old, new) {
                warn!(device_id = %device.id(), "Status observer failed: {}", e);
                self.log.log(&format!(
                    "Error notifying observer for device {}: {}",
                    device.id(),
                    e
                ));
            }
        }
    }

    fn load(&mut self) {
        let devices = match self.store.load() {
            Ok(Some(devices)) => devices,
            Ok(None) => {
                debug!("No persisted devices, starting empty");
                return;
            }
            Err(e) => {
                warn!("Failed to load devices, starting empty: {}", e);
                self.log.log(&format!("Error loading devices: {}", e));
                return;
            }
        };

        self.order.clear();
        self.index.clear();
        for device in devices {
            let id = device.id().clone();
            if self.index.contains_key(&id) {
                warn!(device_id = %id, "Duplicate device in store, keeping the first");
                continue;
            }
            self.order.push(id.clone());
            self.index.insert(id, device);
        }

        debug!(count = self.order.len(), "Devices loaded");
        self.log.log("Devices loaded from file.");
    }

    /// Single attempt; on failure the in-memory state stays authoritative.
    fn persist(&self) {
        match self.store.save(&self.list_all()) {
            Ok(()) => self.log.log("Devices saved to file."),
            Err(e) => {
                warn!("Failed to save devices: {}", e);
                self.log.log(&format!("Error saving devices: {}", e));
            }
        }
    }
}
