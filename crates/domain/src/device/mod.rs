mod device_id;
mod entity;
mod kind;
mod repository;
mod status;

pub use device_id::DeviceId;
pub use entity::Device;
pub use kind::DeviceKind;
pub use repository::DeviceStore;
pub use status::DeviceStatus;
