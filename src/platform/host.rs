//! Platform services for the machine devinfo runs on.
//!
//! Memory, storage, network and OS data come from `sysinfo`, the battery from
//! the `battery` crate. Values are mapped onto the same raw codes a phone
//! would report so the readers treat both alike.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use sysinfo::{Disks, Networks, System};

use super::events::{BatterySampler, PowerEventDispatcher};
use crate::core::classify::{
    BatteryHealth, ChargeStatus, PlugSource, NETWORK_TYPE_UNKNOWN, TYPE_BLUETOOTH,
    TYPE_ETHERNET, TYPE_MOBILE, TYPE_WIFI,
};
use crate::core::config::Config;
use crate::core::services::{EventReceiver, PlatformServices, ReceiverId};
use crate::core::types::*;
use crate::error::{DeviceInfoError, Result};

/// Battery temperature treated as overheating, in Celsius
const OVERHEAT_CELSIUS: f32 = 60.0;

/// Remaining capacity below which a battery is reported dead
const DEAD_HEALTH_PERCENT: f32 = 40.0;

pub struct HostPlatform {
    config: Config,
    dispatcher: PowerEventDispatcher,
}

impl HostPlatform {
    pub fn new(config: Config) -> Result<Self> {
        let dispatcher =
            PowerEventDispatcher::new(Duration::from_millis(config.poll_interval_ms.max(1)))?;
        Ok(Self { config, dispatcher })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Read the first battery and encode it as battery-changed extras
pub fn read_host_battery() -> Result<Option<BatteryStatus>> {
    use battery::units::electric_potential::volt;
    use battery::units::ratio::percent;
    use battery::units::thermodynamic_temperature::degree_celsius;

    let manager = battery::Manager::new()?;
    let Some(first) = manager.batteries()?.next() else {
        return Ok(None);
    };
    let battery = first?;

    let status = match battery.state() {
        battery::State::Charging => ChargeStatus::Charging,
        battery::State::Full => ChargeStatus::Full,
        battery::State::Discharging | battery::State::Empty => ChargeStatus::Discharging,
        _ => ChargeStatus::Unknown,
    };

    // The host cannot tell the charger type apart
    let plugged = if status.is_charging() {
        PlugSource::Ac
    } else {
        PlugSource::Unplugged
    };

    let celsius = battery.temperature().map(|t| t.get::<degree_celsius>());
    let health_percent = battery.state_of_health().get::<percent>();
    let health = match celsius {
        Some(c) if c >= OVERHEAT_CELSIUS => BatteryHealth::Overheat,
        _ if health_percent < DEAD_HEALTH_PERCENT => BatteryHealth::Dead,
        _ => BatteryHealth::Good,
    };

    Ok(Some(BatteryStatus {
        level: battery.state_of_charge().get::<percent>().round() as i32,
        scale: 100,
        status: status.code(),
        plugged: plugged.code(),
        health: health.code(),
        temperature: celsius.map(|c| (c * 10.0).round() as i32).unwrap_or(-1),
        voltage: (battery.voltage().get::<volt>() * 1000.0).round() as i32,
    }))
}

/// Connectivity code for an interface name, `None` for loopback and virtual links
pub fn classify_interface(name: &str) -> Option<(i32, &'static str)> {
    const PREFIXES: [(&str, i32, &str); 9] = [
        ("wl", TYPE_WIFI, "WIFI"),
        ("wifi", TYPE_WIFI, "WIFI"),
        ("en", TYPE_ETHERNET, "ETHERNET"),
        ("eth", TYPE_ETHERNET, "ETHERNET"),
        ("ww", TYPE_MOBILE, "MOBILE"),
        ("rmnet", TYPE_MOBILE, "MOBILE"),
        ("ccmni", TYPE_MOBILE, "MOBILE"),
        ("bn", TYPE_BLUETOOTH, "BLUETOOTH"),
        ("bt", TYPE_BLUETOOTH, "BLUETOOTH"),
    ];

    if name == "lo" || name.starts_with("lo0") {
        return None;
    }

    let lower = name.to_lowercase();
    PREFIXES
        .iter()
        .find(|(prefix, _, _)| lower.starts_with(*prefix))
        .map(|(_, code, label)| (*code, *label))
}

/// ABI names for the running architecture, preferred first
pub fn host_abis() -> Vec<String> {
    let abis: &[&str] = match std::env::consts::ARCH {
        "aarch64" => &["arm64-v8a", "armeabi-v7a", "armeabi"],
        "arm" => &["armeabi-v7a", "armeabi"],
        "x86_64" => &["x86_64", "x86"],
        "x86" => &["x86"],
        other => return vec![other.to_string()],
    };
    abis.iter().map(|s| s.to_string()).collect()
}

fn storage_for(disks: &Disks, path: &Path) -> Option<StorageStats> {
    disks
        .iter()
        .filter(|disk| path.starts_with(disk.mount_point()))
        .max_by_key(|disk| disk.mount_point().as_os_str().len())
        .map(|disk| StorageStats {
            total_bytes: disk.total_space(),
            free_bytes: disk.available_space(),
        })
}

impl PlatformServices for HostPlatform {
    fn display_metrics(&self) -> Result<DisplayMetrics> {
        self.config
            .display
            .ok_or_else(|| DeviceInfoError::service_unavailable("display metrics not configured"))
    }

    fn battery_status(&self) -> Result<Option<BatteryStatus>> {
        read_host_battery()
    }

    fn active_network(&self) -> Result<Option<ActiveNetwork>> {
        let networks = Networks::new_with_refreshed_list();

        let mut candidates: Vec<_> = networks
            .iter()
            .filter(|(_, data)| data.total_received() > 0 || data.total_transmitted() > 0)
            .filter_map(|(name, _)| classify_interface(name).map(|c| (name.clone(), c)))
            .collect();
        candidates.sort_by(|a, b| a.0.cmp(&b.0));

        Ok(candidates
            .into_iter()
            .next()
            .map(|(name, (code, label))| ActiveNetwork {
                is_connected: true,
                network_type: code,
                type_name: label.to_string(),
                subtype_name: name,
            }))
    }

    fn telephony(&self) -> Result<TelephonyStatus> {
        Ok(TelephonyStatus {
            network_type: NETWORK_TYPE_UNKNOWN,
            operator_name: String::new(),
            country_iso: String::new(),
        })
    }

    fn memory(&self) -> Result<MemoryStatus> {
        let mut system = System::new();
        system.refresh_memory();

        let total = system.total_memory();
        if total == 0 {
            return Err(DeviceInfoError::service_unavailable("memory"));
        }

        let available = system.available_memory();
        let threshold = self.config.low_memory_threshold_bytes;

        Ok(MemoryStatus {
            total_bytes: total,
            available_bytes: available,
            low_memory: available < threshold,
            threshold_bytes: threshold,
        })
    }

    fn internal_storage(&self) -> Result<StorageStats> {
        let disks = Disks::new_with_refreshed_list();
        storage_for(&disks, Path::new(&self.config.data_path)).ok_or_else(|| {
            DeviceInfoError::service_unavailable(format!(
                "no disk mounted for {}",
                self.config.data_path
            ))
        })
    }

    fn external_storage(&self) -> Result<Option<StorageStats>> {
        let Some(path) = self.config.external_storage_path.as_deref() else {
            return Ok(None);
        };

        // Mounted means a disk is mounted exactly there
        let disks = Disks::new_with_refreshed_list();
        Ok(disks
            .iter()
            .find(|disk| disk.mount_point() == Path::new(path))
            .map(|disk| StorageStats {
                total_bytes: disk.total_space(),
                free_bytes: disk.available_space(),
            }))
    }

    fn build_info(&self) -> Result<BuildInfo> {
        let name = System::name().unwrap_or_else(|| "unknown".to_string());
        let release = System::os_version().unwrap_or_else(|| "unknown".to_string());
        let kernel = System::kernel_version().unwrap_or_else(|| "unknown".to_string());
        let long_name = System::long_os_version().unwrap_or_else(|| name.clone());
        let host = System::host_name().unwrap_or_else(|| "localhost".to_string());
        let product = System::distribution_id();
        let brand = name.to_lowercase();

        let abis = host_abis();
        let cpu_abi = abis.first().cloned().unwrap_or_default();

        Ok(BuildInfo {
            sdk_int: self.config.sdk_int,
            fingerprint: format!("{}/{}/{}:{}/{}", brand, product, host, release, kernel),
            release,
            codename: "REL".to_string(),
            incremental: kernel.clone(),
            cpu_abi,
            supported_abis: abis,
            board: std::env::consts::ARCH.to_string(),
            bootloader: "unknown".to_string(),
            brand,
            device: host.clone(),
            display: long_name.clone(),
            hardware: std::env::consts::ARCH.to_string(),
            host,
            id: kernel,
            manufacturer: name,
            model: long_name,
            product,
            serial: "unknown".to_string(),
            tags: "release-keys".to_string(),
            build_type: "user".to_string(),
            user: std::env::var("USER").unwrap_or_else(|_| "unknown".to_string()),
        })
    }

    fn device_id(&self) -> Result<String> {
        for path in ["/etc/machine-id", "/var/lib/dbus/machine-id"] {
            if let Ok(id) = std::fs::read_to_string(path) {
                let id = id.trim();
                if !id.is_empty() {
                    return Ok(id.to_string());
                }
            }
        }

        System::host_name().ok_or_else(|| DeviceInfoError::service_unavailable("device id"))
    }

    fn register_receiver(
        &self,
        events: &[PowerEvent],
        receiver: EventReceiver,
    ) -> Result<ReceiverId> {
        let sampler: BatterySampler = Arc::new(read_host_battery);
        self.dispatcher.register(events, receiver, sampler)
    }

    fn unregister_receiver(&self, id: ReceiverId) -> Result<()> {
        self.dispatcher.unregister(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_interface() {
        assert_eq!(classify_interface("wlan0"), Some((TYPE_WIFI, "WIFI")));
        assert_eq!(classify_interface("wlp3s0"), Some((TYPE_WIFI, "WIFI")));
        assert_eq!(classify_interface("eth0"), Some((TYPE_ETHERNET, "ETHERNET")));
        assert_eq!(classify_interface("enp0s31f6"), Some((TYPE_ETHERNET, "ETHERNET")));
        assert_eq!(classify_interface("rmnet_data0"), Some((TYPE_MOBILE, "MOBILE")));
        assert_eq!(classify_interface("bnep0"), Some((TYPE_BLUETOOTH, "BLUETOOTH")));
        assert_eq!(classify_interface("lo"), None);
        assert_eq!(classify_interface("docker0"), None);
    }

    #[test]
    fn test_host_abis_not_empty() {
        let abis = host_abis();
        assert!(!abis.is_empty());
        assert!(abis.iter().all(|a| !a.is_empty()));
    }

    #[test]
    fn test_display_requires_config() {
        let platform = HostPlatform::new(Config::default()).unwrap();
        assert!(platform.display_metrics().is_err());

        let config = Config {
            display: Some(DisplayMetrics::default()),
            ..Default::default()
        };
        let platform = HostPlatform::new(config).unwrap();
        assert_eq!(platform.display_metrics().unwrap(), DisplayMetrics::default());
    }

    #[test]
    fn test_external_storage_unconfigured_is_unmounted() {
        let platform = HostPlatform::new(Config::default()).unwrap();
        assert_eq!(platform.external_storage().unwrap(), None);
    }

    #[test]
    fn test_external_storage_missing_mount_is_unmounted() {
        let config = Config {
            external_storage_path: Some("/definitely/not/a/mount/point".to_string()),
            ..Default::default()
        };
        let platform = HostPlatform::new(config).unwrap();
        assert_eq!(platform.external_storage().unwrap(), None);
    }
}
