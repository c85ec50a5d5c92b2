// devinfo Library - Public API

// Re-export error types
pub mod error;
pub use error::{DeviceInfoError, Result};

// Module declarations
pub mod commands;
pub mod core;
pub mod platform;
pub mod ui;

// Re-export commonly used types
pub use core::config::Config;
pub use core::document::{DeviceInfoDocument, EMPTY_DOCUMENT};
pub use core::module::DeviceInfoModule;
pub use core::monitor::{channel_sink, BatteryMonitor, BatterySink, BatteryUpdate};
pub use core::readers::DocumentKind;
pub use core::services::PlatformServices;

// Initialize logging
pub fn init_logging() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
