// Command handlers module
pub mod config;
pub mod constants;
pub mod info;
pub mod version;
pub mod watch;

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::core::Config;
use crate::platform::HostPlatform;

// Re-exports for cleaner imports
pub use info::execute as info;
pub use version::execute as version;

/// Build the host platform from the saved configuration
pub(crate) fn host_platform() -> Result<Arc<HostPlatform>> {
    let config = Config::load()?;
    let platform = HostPlatform::new(config).context("Failed to initialize host platform")?;
    Ok(Arc::new(platform))
}
