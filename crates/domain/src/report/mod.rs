//! Report strategies: pure functions from a device snapshot to text.

mod health;
mod status;
mod writer;

use crate::{Device, DomainError};
use std::str::FromStr;

pub use health::health_report;
pub use status::status_report;
pub use writer::ReportWriter;

/// Closed set of report strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    Status,
    Health,
}

impl ReportKind {
    pub fn generate(&self, devices: &[Device]) -> String {
        match self {
            Self::Status => status_report(devices),
            Self::Health => health_report(devices),
        }
    }
}

/// Accepts the menu codes (`1`, `2`) or `status` / `health`.
impl FromStr for ReportKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "status" => Ok(Self::Status),
            "2" | "health" => Ok(Self::Health),
            other => Err(DomainError::InvalidReportKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DeviceId, DeviceStatus};

    #[test]
    fn test_parse_report_kind() {
        assert_eq!("1".parse::<ReportKind>(), Ok(ReportKind::Status));
        assert_eq!("Health".parse::<ReportKind>(), Ok(ReportKind::Health));
        assert!("3".parse::<ReportKind>().is_err());
    }

    #[test]
    fn test_generate_dispatches_to_strategy() {
        let devices = vec![
            Device::new(DeviceId::new("D1").unwrap(), "Pump", "10.0.0.1")
                .with_status(DeviceStatus::Online),
        ];

        assert_eq!(ReportKind::Status.generate(&devices), status_report(&devices));
        assert_eq!(ReportKind::Health.generate(&devices), health_report(&devices));
    }
}
