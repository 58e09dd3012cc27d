//! File system tests for JsonDeviceStore, FileActivityLog and FileReportWriter.
//! Each test works in its own directory under the system temp dir.

use domain::{
    ActivityLog, Device, DeviceId, DeviceKind, DeviceStatus, DeviceStore, ReportWriter,
    StorageError,
};
use infrastructure::{FileActivityLog, FileReportWriter, JsonDeviceStore};
use std::fs;
use std::path::PathBuf;

fn temp_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("monitor_test_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn device(id: &str, name: &str, status: DeviceStatus) -> Device {
    Device::new(DeviceId::new(id).unwrap(), name, "192.168.0.10").with_status(status)
}

#[test]
fn test_missing_file_loads_nothing() {
    let dir = temp_dir();
    let store = JsonDeviceStore::new(dir.join("devices.json"));

    assert!(store.load().unwrap().is_none());

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_save_then_load_round_trip() {
    let dir = temp_dir();
    let store = JsonDeviceStore::new(dir.join("devices.json"));
    let devices = vec![
        device("D2", "Thermostat", DeviceStatus::Online).with_kind(DeviceKind::TemperatureSensor),
        device("D1", "Doorbell", DeviceStatus::Maintenance).with_kind(DeviceKind::MotionSensor),
        device("D3", "Router", DeviceStatus::Offline),
    ];

    store.save(&devices).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded, Some(devices));

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_save_overwrites_previous_content() {
    let dir = temp_dir();
    let store = JsonDeviceStore::new(dir.join("devices.json"));

    store
        .save(&[
            device("D1", "A", DeviceStatus::Online),
            device("D2", "B", DeviceStatus::Online),
        ])
        .unwrap();
    store.save(&[device("D3", "C", DeviceStatus::Offline)]).unwrap();

    let loaded = store.load().unwrap().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id().as_str(), "D3");

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_save_creates_parent_directory() {
    let dir = temp_dir();
    let path = dir.join("nested").join("devices.json");
    let store = JsonDeviceStore::new(&path);

    store.save(&[device("D1", "A", DeviceStatus::Online)]).unwrap();

    assert!(path.exists());

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_file_uses_symbolic_status_names() {
    let dir = temp_dir();
    let path = dir.join("devices.json");
    let store = JsonDeviceStore::new(&path);

    store.save(&[device("D1", "A", DeviceStatus::Maintenance)]).unwrap();
    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

    assert_eq!(raw[0]["id"], "D1");
    assert_eq!(raw[0]["ip_address"], "192.168.0.10");
    assert_eq!(raw[0]["status"], "Maintenance");

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = temp_dir();
    let path = dir.join("devices.json");
    fs::write(&path, "{ not json").unwrap();

    let result = JsonDeviceStore::new(&path).load();

    assert!(matches!(result, Err(StorageError::Serialization(_))));

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_empty_id_in_file_is_an_error() {
    let dir = temp_dir();
    let path = dir.join("devices.json");
    fs::write(
        &path,
        r#"[{"id": "", "name": "Ghost", "ip_address": "0.0.0.0", "status": "Online"}]"#,
    )
    .unwrap();

    assert!(JsonDeviceStore::new(&path).load().is_err());

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_long_and_padded_ids_load_verbatim() {
    let dir = temp_dir();
    let path = dir.join("devices.json");
    let long_id = "X".repeat(101);
    let raw = serde_json::json!([
        {"id": "D1", "name": "Router", "ip_address": "10.0.0.1", "status": "Online"},
        {"id": long_id, "name": "Tagged", "ip_address": "10.0.0.2", "status": "Offline"},
        {"id": " D1", "name": "Padded", "ip_address": "10.0.0.3", "status": "Offline"}
    ]);
    fs::write(&path, raw.to_string()).unwrap();

    let loaded = JsonDeviceStore::new(&path).load().unwrap().unwrap();

    let ids: Vec<&str> = loaded.iter().map(|d| d.id().as_str()).collect();
    assert_eq!(ids, vec!["D1", long_id.as_str(), " D1"]);

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_activity_log_appends_timestamped_lines() {
    let dir = temp_dir();
    let path = dir.join("logs.txt");
    let log = FileActivityLog::new(&path);

    log.log("Application started.");
    log.log("Device added: D1");

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with(": Application started."));
    assert!(lines[1].ends_with(": Device added: D1"));
    // "YYYY-MM-DD HH:MM:SS: "
    assert_eq!(lines[1].find(": Device"), Some(19));

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_activity_log_write_failure_does_not_panic() {
    let dir = temp_dir();
    // A directory cannot be opened for appending
    let log = FileActivityLog::new(&dir);

    log.log("this line goes nowhere");

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_report_writer_overwrites_file() {
    let dir = temp_dir();
    let path = dir.join("report.txt");
    fs::write(&path, "old report that is longer than the new one").unwrap();

    FileReportWriter::new().write_report(&path, "new report\n").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "new report\n");

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_report_writer_missing_directory_fails() {
    let dir = temp_dir();
    let path = dir.join("missing").join("report.txt");

    let result = FileReportWriter::new().write_report(&path, "text");

    assert!(matches!(result, Err(StorageError::Io(_))));

    fs::remove_dir_all(dir).ok();
}
