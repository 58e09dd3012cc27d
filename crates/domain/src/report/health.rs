use crate::Device;
use std::fmt::Write;

/// Per-device health listing followed by the online ratio.
///
/// The percentage is floored and is 0 for an empty collection.
pub fn health_report(devices: &[Device]) -> String {
    let total = devices.len();
    let mut healthy = 0usize;

    let mut report = String::new();
    report.push_str("Device Health Report\n");
    report.push_str("====================\n");
    let _ = writeln!(report, "Total Devices: {}", total);
    report.push('\n');

    for device in devices {
        if device.status().is_healthy() {
            healthy += 1;
            let _ = writeln!(
                report,
                "✓ {} ({}): Healthy - {}",
                device.name,
                device.id(),
                device.status()
            );
        } else {
            let _ = writeln!(
                report,
                "✗ {} ({}): Issue - {}",
                device.name,
                device.id(),
                device.status()
            );
        }
    }

    let percent = if total > 0 { healthy * 100 / total } else { 0 };
    report.push('\n');
    let _ = writeln!(
        report,
        "Health Status: {}/{} devices online ({}%)",
        healthy, total, percent
    );

    report
}
