//! Composition root and interactive driver for the device monitor

pub mod services;
pub mod shell;

pub use services::Services;
pub use shell::{MenuCommand, Shell};
