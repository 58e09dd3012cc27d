pub mod file_log;
pub mod memory_log;

pub use file_log::FileActivityLog;
pub use memory_log::MemoryActivityLog;
