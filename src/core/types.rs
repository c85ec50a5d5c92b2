use serde::{Deserialize, Serialize};

/// Display metrics of the default display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayMetrics {
    pub width_pixels: u32,
    pub height_pixels: u32,
    pub density: f32,
    pub density_dpi: u32,
    pub scaled_density: f32,
    pub xdpi: f32,
    pub ydpi: f32,
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self {
            width_pixels: 0,
            height_pixels: 0,
            density: 1.0,
            density_dpi: 160,
            scaled_density: 1.0,
            xdpi: 160.0,
            ydpi: 160.0,
        }
    }
}

/// Raw battery extras as delivered by the battery-changed broadcast.
///
/// Every field keeps the platform's encoding: `-1` marks an absent extra.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BatteryStatus {
    pub level: i32,
    pub scale: i32,
    pub status: i32,
    pub plugged: i32,
    pub health: i32,
    /// Tenths of a degree Celsius
    pub temperature: i32,
    /// Millivolts
    pub voltage: i32,
}

impl Default for BatteryStatus {
    fn default() -> Self {
        Self {
            level: -1,
            scale: -1,
            status: -1,
            plugged: -1,
            health: -1,
            temperature: -1,
            voltage: -1,
        }
    }
}

/// The currently active network, if any
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveNetwork {
    pub is_connected: bool,
    /// Connectivity type code (MOBILE = 0, WIFI = 1, ...)
    pub network_type: i32,
    pub type_name: String,
    pub subtype_name: String,
}

/// Radio state reported by the telephony service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TelephonyStatus {
    /// Radio technology code (GPRS = 1, ..., LTE = 13)
    pub network_type: i32,
    pub operator_name: String,
    pub country_iso: String,
}

/// Memory pressure snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryStatus {
    pub total_bytes: u64,
    pub available_bytes: u64,
    pub low_memory: bool,
    pub threshold_bytes: u64,
}

/// Filesystem statistics for one volume
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageStats {
    pub total_bytes: u64,
    pub free_bytes: u64,
}

/// Build and OS version properties
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildInfo {
    pub sdk_int: i32,
    pub release: String,
    pub codename: String,
    pub incremental: String,
    pub cpu_abi: String,
    pub supported_abis: Vec<String>,
    pub board: String,
    pub bootloader: String,
    pub brand: String,
    pub device: String,
    pub display: String,
    pub fingerprint: String,
    pub hardware: String,
    pub host: String,
    pub id: String,
    pub manufacturer: String,
    pub model: String,
    pub product: String,
    pub serial: String,
    pub tags: String,
    pub build_type: String,
    pub user: String,
}

/// Power and battery events a change listener can subscribe to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerEvent {
    BatteryChanged,
    BatteryLow,
    BatteryOkay,
    PowerConnected,
    PowerDisconnected,
}

impl PowerEvent {
    /// The five events the battery monitor registers for
    pub const MONITORED: [PowerEvent; 5] = [
        PowerEvent::BatteryChanged,
        PowerEvent::BatteryLow,
        PowerEvent::BatteryOkay,
        PowerEvent::PowerConnected,
        PowerEvent::PowerDisconnected,
    ];

    /// Broadcast action name
    pub fn action(&self) -> &'static str {
        match self {
            PowerEvent::BatteryChanged => "android.intent.action.BATTERY_CHANGED",
            PowerEvent::BatteryLow => "android.intent.action.BATTERY_LOW",
            PowerEvent::BatteryOkay => "android.intent.action.BATTERY_OKAY",
            PowerEvent::PowerConnected => "android.intent.action.ACTION_POWER_CONNECTED",
            PowerEvent::PowerDisconnected => "android.intent.action.ACTION_POWER_DISCONNECTED",
        }
    }
}

impl std::fmt::Display for PowerEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PowerEvent::BatteryChanged => write!(f, "battery changed"),
            PowerEvent::BatteryLow => write!(f, "battery low"),
            PowerEvent::BatteryOkay => write!(f, "battery okay"),
            PowerEvent::PowerConnected => write!(f, "power connected"),
            PowerEvent::PowerDisconnected => write!(f, "power disconnected"),
        }
    }
}
