//! Scripted in-memory platform.
//!
//! Holds a mutable [`FakeState`] and a receiver table. Events are delivered
//! only when the owner calls [`FakePlatform::fire`], which makes it suitable
//! for tests and for embedders that forward host events by hand.

use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};

use parking_lot::Mutex;

use crate::core::classify::{TYPE_WIFI, NETWORK_TYPE_LTE};
use crate::core::services::{EventReceiver, PlatformServices, ReceiverId};
use crate::core::types::*;
use crate::error::{DeviceInfoError, Result};

/// Service values returned by a [`FakePlatform`].
///
/// For services without an absence state, `None` means the service lookup
/// fails. For `battery`, `network` and `external_storage`, `None` is the
/// platform's own absence state.
#[derive(Debug, Clone, Default)]
pub struct FakeState {
    pub display: Option<DisplayMetrics>,
    pub battery: Option<BatteryStatus>,
    pub network: Option<ActiveNetwork>,
    pub telephony: Option<TelephonyStatus>,
    pub memory: Option<MemoryStatus>,
    pub internal_storage: Option<StorageStats>,
    pub external_storage: Option<StorageStats>,
    pub build: Option<BuildInfo>,
    pub device_id: Option<String>,
}

impl FakeState {
    /// A plausible phone with every service present
    pub fn android() -> Self {
        Self {
            display: Some(DisplayMetrics {
                width_pixels: 1080,
                height_pixels: 2400,
                density: 2.625,
                density_dpi: 420,
                scaled_density: 2.625,
                xdpi: 409.5,
                ydpi: 411.0,
            }),
            battery: Some(BatteryStatus {
                level: 87,
                scale: 100,
                status: 3,
                plugged: 0,
                health: 2,
                temperature: 291,
                voltage: 4180,
            }),
            network: Some(ActiveNetwork {
                is_connected: true,
                network_type: TYPE_WIFI,
                type_name: "WIFI".to_string(),
                subtype_name: String::new(),
            }),
            telephony: Some(TelephonyStatus {
                network_type: NETWORK_TYPE_LTE,
                operator_name: "Example Mobile".to_string(),
                country_iso: "us".to_string(),
            }),
            memory: Some(MemoryStatus {
                total_bytes: 8 * 1024 * 1024 * 1024,
                available_bytes: 3 * 1024 * 1024 * 1024,
                low_memory: false,
                threshold_bytes: 216 * 1024 * 1024,
            }),
            internal_storage: Some(StorageStats {
                total_bytes: 128_000_000_000,
                free_bytes: 52_000_000_000,
            }),
            external_storage: None,
            build: Some(BuildInfo {
                sdk_int: 34,
                release: "14".to_string(),
                codename: "REL".to_string(),
                incremental: "11583682".to_string(),
                cpu_abi: "arm64-v8a".to_string(),
                supported_abis: vec![
                    "arm64-v8a".to_string(),
                    "armeabi-v7a".to_string(),
                    "armeabi".to_string(),
                ],
                board: "shiba".to_string(),
                bootloader: "ripcurrent-14.3".to_string(),
                brand: "google".to_string(),
                device: "shiba".to_string(),
                display: "UQ1A.240205.002".to_string(),
                fingerprint: "google/shiba/shiba:14/UQ1A.240205.002/11583682:user/release-keys"
                    .to_string(),
                hardware: "shiba".to_string(),
                host: "build-host".to_string(),
                id: "UQ1A.240205.002".to_string(),
                manufacturer: "Google".to_string(),
                model: "Pixel 8".to_string(),
                product: "shiba".to_string(),
                serial: "unknown".to_string(),
                tags: "release-keys".to_string(),
                build_type: "user".to_string(),
                user: "android-build".to_string(),
            }),
            device_id: Some("9774d56d682e549c".to_string()),
        }
    }
}

struct Registration {
    id: ReceiverId,
    events: Vec<PowerEvent>,
    receiver: EventReceiver,
}

/// In-memory [`PlatformServices`] implementation
pub struct FakePlatform {
    state: Mutex<FakeState>,
    receivers: Mutex<Vec<Registration>>,
    next_id: AtomicU64,
    registrations: AtomicUsize,
    fail_registration: AtomicBool,
}

impl FakePlatform {
    pub fn new(state: FakeState) -> Self {
        Self {
            state: Mutex::new(state),
            receivers: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
            registrations: AtomicUsize::new(0),
            fail_registration: AtomicBool::new(false),
        }
    }

    pub fn android() -> Self {
        Self::new(FakeState::android())
    }

    /// Mutate the service values
    pub fn update<F: FnOnce(&mut FakeState)>(&self, f: F) {
        f(&mut self.state.lock());
    }

    /// Deliver `event` to every receiver registered for it.
    ///
    /// Returns the number of receivers invoked.
    pub fn fire(&self, event: PowerEvent) -> usize {
        let targets: Vec<EventReceiver> = self
            .receivers
            .lock()
            .iter()
            .filter(|r| r.events.contains(&event))
            .map(|r| r.receiver.clone())
            .collect();

        for receiver in &targets {
            receiver(event);
        }
        targets.len()
    }

    /// Total successful registrations over the platform's lifetime
    pub fn registration_count(&self) -> usize {
        self.registrations.load(Ordering::SeqCst)
    }

    /// Receivers currently registered
    pub fn active_receivers(&self) -> usize {
        self.receivers.lock().len()
    }

    /// Make subsequent registrations fail
    pub fn set_fail_registration(&self, fail: bool) {
        self.fail_registration.store(fail, Ordering::SeqCst);
    }

    fn service<T: Clone>(&self, name: &str, pick: impl FnOnce(&FakeState) -> &Option<T>) -> Result<T> {
        let state = self.state.lock();
        pick(&state)
            .clone()
            .ok_or_else(|| DeviceInfoError::service_unavailable(name))
    }
}

impl Default for FakePlatform {
    fn default() -> Self {
        Self::android()
    }
}

impl PlatformServices for FakePlatform {
    fn display_metrics(&self) -> Result<DisplayMetrics> {
        self.service("window", |s| &s.display)
    }

    fn battery_status(&self) -> Result<Option<BatteryStatus>> {
        Ok(self.state.lock().battery)
    }

    fn active_network(&self) -> Result<Option<ActiveNetwork>> {
        Ok(self.state.lock().network.clone())
    }

    fn telephony(&self) -> Result<TelephonyStatus> {
        self.service("telephony", |s| &s.telephony)
    }

    fn memory(&self) -> Result<MemoryStatus> {
        self.service("activity", |s| &s.memory)
    }

    fn internal_storage(&self) -> Result<StorageStats> {
        self.service("storage", |s| &s.internal_storage)
    }

    fn external_storage(&self) -> Result<Option<StorageStats>> {
        Ok(self.state.lock().external_storage)
    }

    fn build_info(&self) -> Result<BuildInfo> {
        self.service("build", |s| &s.build)
    }

    fn device_id(&self) -> Result<String> {
        self.service("settings", |s| &s.device_id)
    }

    fn register_receiver(
        &self,
        events: &[PowerEvent],
        receiver: EventReceiver,
    ) -> Result<ReceiverId> {
        if self.fail_registration.load(Ordering::SeqCst) {
            return Err(DeviceInfoError::registration("receiver rejected"));
        }

        let id = ReceiverId(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.receivers.lock().push(Registration {
            id,
            events: events.to_vec(),
            receiver,
        });
        self.registrations.fetch_add(1, Ordering::SeqCst);
        Ok(id)
    }

    fn unregister_receiver(&self, id: ReceiverId) -> Result<()> {
        let mut receivers = self.receivers.lock();
        let before = receivers.len();
        receivers.retain(|r| r.id != id);

        if receivers.len() == before {
            return Err(DeviceInfoError::registration(format!(
                "receiver {} not registered",
                id.0
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_fire_only_matching_receivers() {
        let platform = FakePlatform::android();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();

        platform
            .register_receiver(
                &[PowerEvent::PowerConnected],
                Arc::new(move |_| {
                    counter.fetch_add(1, Ordering::SeqCst);
                }),
            )
            .unwrap();

        assert_eq!(platform.fire(PowerEvent::BatteryLow), 0);
        assert_eq!(platform.fire(PowerEvent::PowerConnected), 1);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unregister_unknown_id_fails() {
        let platform = FakePlatform::android();
        assert!(platform.unregister_receiver(ReceiverId(42)).is_err());
    }

    #[test]
    fn test_missing_service_is_error() {
        let platform = FakePlatform::new(FakeState::default());
        assert!(platform.display_metrics().is_err());
        assert!(platform.battery_status().unwrap().is_none());
        assert!(platform.active_network().unwrap().is_none());
    }
}
