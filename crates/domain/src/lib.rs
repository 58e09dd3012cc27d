//! Domain layer - Pure model of the device monitor with no I/O
//!
//! This crate contains:
//! - Entities (Device)
//! - Value Objects (DeviceId, DeviceStatus, DeviceKind)
//! - Report strategies (ReportKind)
//! - Collaborator interfaces (traits): persistence, activity log, observers
//!
//! Principles:
//! - No dependencies on infrastructure
//! - Expected outcomes (duplicate id, unknown id) are not errors
//! - Testable in isolation

pub mod device;
pub mod error;
pub mod event;
pub mod report;

// Re-export commonly used types
pub use device::{Device, DeviceId, DeviceKind, DeviceStatus, DeviceStore};
pub use error::{DomainError, StorageError};
pub use event::{ActivityLog, StatusObserver};
pub use report::{ReportKind, ReportWriter};
