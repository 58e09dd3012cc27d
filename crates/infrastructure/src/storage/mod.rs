pub mod json_store;
pub mod memory_store;

pub use json_store::JsonDeviceStore;
pub use memory_store::MemoryDeviceStore;
