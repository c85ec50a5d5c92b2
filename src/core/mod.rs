// Core collection logic

pub mod classify;
pub mod config;
pub mod document;
pub mod module;
pub mod monitor;
pub mod readers;
pub mod services;
pub mod types;

// Re-export commonly used items
pub use config::Config;
pub use document::{assemble, DeviceInfoDocument, FieldValue, EMPTY_DOCUMENT};
pub use module::DeviceInfoModule;
pub use monitor::{channel_sink, BatteryMonitor, BatterySink, BatteryUpdate, MonitorHandle};
pub use readers::DocumentKind;
pub use services::{EventReceiver, PlatformServices, ReceiverId};
pub use types::*;
