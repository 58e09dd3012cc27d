//! Application layer - Use cases over the device model

pub mod device;
pub mod observer;
pub mod report;

pub use device::DeviceRegistry;
pub use observer::LoggingObserver;
pub use report::ReportContext;
