use std::sync::Arc;

use super::types::*;
use crate::error::Result;

/// Callback invoked by the platform's event dispatcher for each matching event
pub type EventReceiver = Arc<dyn Fn(PowerEvent) + Send + Sync>;

/// Identifies one receiver registration on a platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReceiverId(pub u64);

/// Capability interface over the host's service registry.
///
/// Readers and the battery monitor depend only on this trait. Implementations
/// live in the platform layer (`platform::host`, `platform::fake`).
///
/// `Ok(None)` is a valid absence state (no battery intent, no active network,
/// external storage not mounted) and is distinct from an error.
pub trait PlatformServices: Send + Sync {
    /// Metrics of the default display
    fn display_metrics(&self) -> Result<DisplayMetrics>;

    /// Current battery-changed extras
    fn battery_status(&self) -> Result<Option<BatteryStatus>>;

    /// The active network
    fn active_network(&self) -> Result<Option<ActiveNetwork>>;

    /// Radio details, queried only for mobile transports
    fn telephony(&self) -> Result<TelephonyStatus>;

    fn memory(&self) -> Result<MemoryStatus>;

    /// Statistics of the data partition
    fn internal_storage(&self) -> Result<StorageStats>;

    /// Statistics of external storage, `None` when not mounted
    fn external_storage(&self) -> Result<Option<StorageStats>>;

    fn build_info(&self) -> Result<BuildInfo>;

    /// Stable per-device identifier
    fn device_id(&self) -> Result<String>;

    /// Register a receiver for the given events.
    ///
    /// The platform owns scheduling: it invokes `receiver` from its own
    /// dispatch context whenever one of `events` occurs.
    fn register_receiver(&self, events: &[PowerEvent], receiver: EventReceiver)
        -> Result<ReceiverId>;

    fn unregister_receiver(&self, id: ReceiverId) -> Result<()>;
}
