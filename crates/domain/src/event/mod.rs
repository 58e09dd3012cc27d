mod activity_log;
mod observer;

pub use activity_log::ActivityLog;
pub use observer::StatusObserver;
