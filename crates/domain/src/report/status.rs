use crate::{Device, DeviceStatus};
use std::fmt::Write;

/// Count devices per status.
pub fn status_report(devices: &[Device]) -> String {
    let count = |status: DeviceStatus| devices.iter().filter(|d| d.status() == status).count();

    let mut report = String::new();
    report.push_str("Device Status Report\n");
    report.push_str("====================\n");
    for status in DeviceStatus::ALL {
        let _ = writeln!(report, "{}: {}", status, count(status));
    }
    let _ = writeln!(report, "Total Devices: {}", devices.len());

    report
}
