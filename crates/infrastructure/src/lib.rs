//! Infrastructure layer - File system and configuration adapters

pub mod config;
pub mod logging;
pub mod report;
pub mod storage;

pub use config::AppConfig;
pub use logging::{FileActivityLog, MemoryActivityLog};
pub use report::FileReportWriter;
pub use storage::{JsonDeviceStore, MemoryDeviceStore};
