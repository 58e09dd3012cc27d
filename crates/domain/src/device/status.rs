use crate::error::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Operational status of a device.
///
/// Declaration order is the sort order: Online < Offline < Maintenance.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum DeviceStatus {
    /// Device is reachable and working
    Online,
    /// Device is not reachable (initial state of a new device)
    #[default]
    Offline,
    /// Device is deliberately taken out of service
    Maintenance,
}

impl DeviceStatus {
    pub const ALL: [DeviceStatus; 3] = [Self::Online, Self::Offline, Self::Maintenance];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "Online",
            Self::Offline => "Offline",
            Self::Maintenance => "Maintenance",
        }
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Online)
    }
}

impl std::fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts the menu codes (`0`, `1`, `2`) or the symbolic name in any case.
impl FromStr for DeviceStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "0" | "online" => Ok(Self::Online),
            "1" | "offline" => Ok(Self::Offline),
            "2" | "maintenance" => Ok(Self::Maintenance),
            other => Err(DomainError::InvalidStatus(other.to_string())),
        }
    }
}
