use crate::error::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Kind of hardware behind a device. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DeviceKind {
    #[default]
    Generic,
    TemperatureSensor,
    MotionSensor,
}

impl DeviceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Generic => "Generic",
            Self::TemperatureSensor => "TemperatureSensor",
            Self::MotionSensor => "MotionSensor",
        }
    }
}

impl std::fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts the menu codes (`1`, `2`, `3`) or the name in any case.
impl FromStr for DeviceKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "generic" => Ok(Self::Generic),
            "2" | "temperaturesensor" => Ok(Self::TemperatureSensor),
            "3" | "motionsensor" => Ok(Self::MotionSensor),
            other => Err(DomainError::InvalidDeviceKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_menu_codes() {
        assert_eq!("1".parse::<DeviceKind>(), Ok(DeviceKind::Generic));
        assert_eq!("2".parse::<DeviceKind>(), Ok(DeviceKind::TemperatureSensor));
        assert_eq!("3".parse::<DeviceKind>(), Ok(DeviceKind::MotionSensor));
        assert!("4".parse::<DeviceKind>().is_err());
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(
            "motionSensor".parse::<DeviceKind>(),
            Ok(DeviceKind::MotionSensor)
        );
    }
}
