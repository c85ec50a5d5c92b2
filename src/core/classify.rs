//! Static lookup tables from raw platform codes to readable categories.
//!
//! Every function here is total: unknown inputs fall through to a default.

use serde::{Deserialize, Serialize};

// Connectivity types
pub const TYPE_MOBILE: i32 = 0;
pub const TYPE_WIFI: i32 = 1;
pub const TYPE_BLUETOOTH: i32 = 7;
pub const TYPE_ETHERNET: i32 = 9;

// Radio technologies
pub const NETWORK_TYPE_UNKNOWN: i32 = 0;
pub const NETWORK_TYPE_GPRS: i32 = 1;
pub const NETWORK_TYPE_EDGE: i32 = 2;
pub const NETWORK_TYPE_UMTS: i32 = 3;
pub const NETWORK_TYPE_CDMA: i32 = 4;
pub const NETWORK_TYPE_EVDO_0: i32 = 5;
pub const NETWORK_TYPE_EVDO_A: i32 = 6;
pub const NETWORK_TYPE_1XRTT: i32 = 7;
pub const NETWORK_TYPE_HSDPA: i32 = 8;
pub const NETWORK_TYPE_HSUPA: i32 = 9;
pub const NETWORK_TYPE_HSPA: i32 = 10;
pub const NETWORK_TYPE_IDEN: i32 = 11;
pub const NETWORK_TYPE_EVDO_B: i32 = 12;
pub const NETWORK_TYPE_LTE: i32 = 13;
pub const NETWORK_TYPE_EHRPD: i32 = 14;
pub const NETWORK_TYPE_HSPAP: i32 = 15;

/// SDK level from which wireless charging is reported
pub const WIRELESS_CHARGING_MIN_SDK: i32 = 17;

/// SDK level from which the supported ABI list is reported
pub const SUPPORTED_ABIS_MIN_SDK: i32 = 21;

/// Connectivity type code to a coarse transport name
pub fn connectivity_type_name(network_type: i32) -> &'static str {
    match network_type {
        TYPE_WIFI => "wifi",
        TYPE_MOBILE => "mobile",
        TYPE_ETHERNET => "ethernet",
        TYPE_BLUETOOTH => "bluetooth",
        _ => "unknown",
    }
}

/// Radio technology code to network class: 1 = 2G, 2 = 3G, 3 = 4G, 0 = unknown
pub fn network_class(radio_type: i32) -> u8 {
    match radio_type {
        NETWORK_TYPE_GPRS | NETWORK_TYPE_EDGE | NETWORK_TYPE_CDMA | NETWORK_TYPE_1XRTT
        | NETWORK_TYPE_IDEN => 1,

        NETWORK_TYPE_UMTS
        | NETWORK_TYPE_EVDO_0
        | NETWORK_TYPE_EVDO_A
        | NETWORK_TYPE_HSDPA
        | NETWORK_TYPE_HSUPA
        | NETWORK_TYPE_HSPA
        | NETWORK_TYPE_EVDO_B
        | NETWORK_TYPE_EHRPD
        | NETWORK_TYPE_HSPAP => 2,

        NETWORK_TYPE_LTE => 3,

        _ => 0,
    }
}

/// Network class to generation label
pub fn generation_name(class: u8) -> &'static str {
    match class {
        1 => "2G",
        2 => "3G",
        3 => "4G",
        _ => "Unknown",
    }
}

/// Radio technology code straight to generation label
pub fn network_generation(radio_type: i32) -> &'static str {
    generation_name(network_class(radio_type))
}

/// Battery charging status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChargeStatus {
    Unknown,
    Charging,
    Discharging,
    NotCharging,
    Full,
}

impl ChargeStatus {
    pub const fn code(&self) -> i32 {
        match self {
            ChargeStatus::Unknown => 1,
            ChargeStatus::Charging => 2,
            ChargeStatus::Discharging => 3,
            ChargeStatus::NotCharging => 4,
            ChargeStatus::Full => 5,
        }
    }

    pub fn from_code(code: i32) -> Self {
        match code {
            2 => ChargeStatus::Charging,
            3 => ChargeStatus::Discharging,
            4 => ChargeStatus::NotCharging,
            5 => ChargeStatus::Full,
            _ => ChargeStatus::Unknown,
        }
    }

    /// Charging or full counts as charging
    pub fn is_charging(&self) -> bool {
        matches!(self, ChargeStatus::Charging | ChargeStatus::Full)
    }
}

impl std::fmt::Display for ChargeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChargeStatus::Unknown => write!(f, "Unknown"),
            ChargeStatus::Charging => write!(f, "Charging"),
            ChargeStatus::Discharging => write!(f, "Discharging"),
            ChargeStatus::NotCharging => write!(f, "Not charging"),
            ChargeStatus::Full => write!(f, "Full"),
        }
    }
}

/// Battery health
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BatteryHealth {
    Unknown,
    Good,
    Overheat,
    Dead,
    OverVoltage,
    UnspecifiedFailure,
    Cold,
}

impl BatteryHealth {
    pub const fn code(&self) -> i32 {
        match self {
            BatteryHealth::Unknown => 1,
            BatteryHealth::Good => 2,
            BatteryHealth::Overheat => 3,
            BatteryHealth::Dead => 4,
            BatteryHealth::OverVoltage => 5,
            BatteryHealth::UnspecifiedFailure => 6,
            BatteryHealth::Cold => 7,
        }
    }

    pub fn from_code(code: i32) -> Self {
        match code {
            2 => BatteryHealth::Good,
            3 => BatteryHealth::Overheat,
            4 => BatteryHealth::Dead,
            5 => BatteryHealth::OverVoltage,
            6 => BatteryHealth::UnspecifiedFailure,
            7 => BatteryHealth::Cold,
            _ => BatteryHealth::Unknown,
        }
    }
}

impl std::fmt::Display for BatteryHealth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatteryHealth::Unknown => write!(f, "Unknown"),
            BatteryHealth::Good => write!(f, "Good"),
            BatteryHealth::Overheat => write!(f, "Overheat"),
            BatteryHealth::Dead => write!(f, "Dead"),
            BatteryHealth::OverVoltage => write!(f, "Over voltage"),
            BatteryHealth::UnspecifiedFailure => write!(f, "Failure"),
            BatteryHealth::Cold => write!(f, "Cold"),
        }
    }
}

/// Charger the battery is plugged into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlugSource {
    Unplugged,
    Ac,
    Usb,
    Wireless,
    Other,
}

impl PlugSource {
    pub const fn code(&self) -> i32 {
        match self {
            PlugSource::Unplugged => 0,
            PlugSource::Ac => 1,
            PlugSource::Usb => 2,
            PlugSource::Wireless => 4,
            PlugSource::Other => -1,
        }
    }

    pub fn from_code(code: i32) -> Self {
        match code {
            0 => PlugSource::Unplugged,
            1 => PlugSource::Ac,
            2 => PlugSource::Usb,
            4 => PlugSource::Wireless,
            _ => PlugSource::Other,
        }
    }
}
