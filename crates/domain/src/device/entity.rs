use super::{DeviceId, DeviceKind, DeviceStatus};
use serde::{Deserialize, Serialize};

/// A tracked network endpoint.
///
/// The `ip_address` is plain data; nothing ever connects to it.
/// The id is fixed at creation, status changes go through the registry
/// so that observers see every transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    id: DeviceId,
    pub name: String,
    pub ip_address: String,
    #[serde(default)]
    status: DeviceStatus,
    #[serde(default)]
    pub kind: DeviceKind,
}

impl Device {
    /// Create a generic device in the `Offline` state
    pub fn new(id: DeviceId, name: impl Into<String>, ip_address: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ip_address: ip_address.into(),
            status: DeviceStatus::default(),
            kind: DeviceKind::default(),
        }
    }

    pub fn with_kind(mut self, kind: DeviceKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_status(mut self, status: DeviceStatus) -> Self {
        self.status = status;
        self
    }

    pub fn id(&self) -> &DeviceId {
        &self.id
    }

    pub fn status(&self) -> DeviceStatus {
        self.status
    }

    /// Replace the status, returning the previous one
    pub fn set_status(&mut self, status: DeviceStatus) -> DeviceStatus {
        std::mem::replace(&mut self.status, status)
    }
}

impl std::fmt::Display for Device {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, IP: {}, Status: {}",
            self.id, self.name, self.ip_address, self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn device() -> Device {
        Device::new(DeviceId::new("D001").unwrap(), "Boiler", "192.168.1.10")
    }

    #[test]
    fn test_device_creation() {
        let device = device();

        assert_eq!(device.id().as_str(), "D001");
        assert_eq!(device.name, "Boiler");
        assert_eq!(device.ip_address, "192.168.1.10");
        assert_eq!(device.status(), DeviceStatus::Offline);
        assert_eq!(device.kind, DeviceKind::Generic);
    }

    #[test]
    fn test_set_status_returns_previous() {
        let mut device = device();
        assert_eq!(device.set_status(DeviceStatus::Online), DeviceStatus::Offline);
        assert_eq!(device.status(), DeviceStatus::Online);
    }

    #[test]
    fn test_display() {
        let device = device().with_status(DeviceStatus::Maintenance);
        assert_eq!(
            device.to_string(),
            "ID: D001, Name: Boiler, IP: 192.168.1.10, Status: Maintenance"
        );
    }

    #[test]
    fn test_serialized_fields() {
        let device = device().with_kind(DeviceKind::TemperatureSensor);
        let value = serde_json::to_value(&device).unwrap();

        assert_eq!(
            value,
            json!({
                "id": "D001",
                "name": "Boiler",
                "ip_address": "192.168.1.10",
                "status": "Offline",
                "kind": "TemperatureSensor"
            })
        );
    }

    #[test]
    fn test_missing_kind_defaults_to_generic() {
        let device: Device = serde_json::from_value(json!({
            "id": "D009",
            "name": "Gate",
            "ip_address": "10.0.0.9",
            "status": "Online"
        }))
        .unwrap();

        assert_eq!(device.kind, DeviceKind::Generic);
        assert_eq!(device.status(), DeviceStatus::Online);
    }
}
