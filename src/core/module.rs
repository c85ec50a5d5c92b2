//! "DeviceInfo" native module surface.
//!
//! Exposes a constants table, a method table and dispatch by method id. Every
//! call answers through an `(error, result)` callback; an empty error string
//! means success.

use std::sync::Arc;

use serde::Serialize;

use super::document::{assemble, DeviceInfoDocument};
use super::monitor::{BatteryMonitor, BatterySink};
use super::readers::{battery, network, screen, system};
use super::services::PlatformServices;
use super::types::{BuildInfo, PowerEvent};

pub const MODULE_NAME: &str = "DeviceInfo";

/// Describes one callable method
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodDescriptor {
    pub id: usize,
    pub name: &'static str,
    pub is_async: bool,
}

const METHOD_NAMES: [&str; 6] = [
    "getDeviceId",
    "getBatteryLevel",
    "getNetworkState",
    "getSystemInfo",
    "startBatteryMonitoring",
    "stopBatteryMonitoring",
];

/// Methods by id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    GetDeviceId,
    GetBatteryLevel,
    GetNetworkState,
    GetSystemInfo,
    StartBatteryMonitoring,
    StopBatteryMonitoring,
}

impl Method {
    pub fn from_id(id: usize) -> Option<Self> {
        match id {
            0 => Some(Method::GetDeviceId),
            1 => Some(Method::GetBatteryLevel),
            2 => Some(Method::GetNetworkState),
            3 => Some(Method::GetSystemInfo),
            4 => Some(Method::StartBatteryMonitoring),
            5 => Some(Method::StopBatteryMonitoring),
            _ => None,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        METHOD_NAMES
            .iter()
            .position(|n| *n == name)
            .and_then(Self::from_id)
    }
}

/// Forwards to whichever sink is attached when an event arrives
struct ModuleSink {
    target: parking_lot::RwLock<Option<Arc<dyn BatterySink>>>,
}

impl BatterySink for ModuleSink {
    fn deliver(&self, event: PowerEvent, document: &str) {
        // Release the slot before calling out so a sink may replace itself
        let target = self.target.read().clone();
        match target {
            Some(sink) => sink.deliver(event, document),
            None => log::debug!("No battery sink attached, dropping '{}' update", event),
        }
    }
}

pub struct DeviceInfoModule {
    platform: Arc<dyn PlatformServices>,
    monitor: BatteryMonitor,
    sink: Arc<ModuleSink>,
}

impl DeviceInfoModule {
    pub fn new(platform: Arc<dyn PlatformServices>) -> Self {
        Self {
            monitor: BatteryMonitor::new(platform.clone()),
            platform,
            sink: Arc::new(ModuleSink {
                target: parking_lot::RwLock::new(None),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        MODULE_NAME
    }

    /// Attach the consumer for battery updates
    pub fn set_battery_sink(&self, sink: Arc<dyn BatterySink>) {
        *self.sink.target.write() = Some(sink);
    }

    pub fn is_monitoring(&self) -> bool {
        self.monitor.is_active()
    }

    /// Device constants, in a fixed order
    pub fn constants(&self) -> Vec<(&'static str, String)> {
        let build = self.build_or_default();

        let mut constants = vec![
            ("DEVICE_TYPE", "android".to_string()),
            ("OS_VERSION", build.release),
            ("DEVICE_MODEL", build.model),
            ("DEVICE_MANUFACTURER", build.manufacturer),
            ("SDK_VERSION", build.sdk_int.to_string()),
            ("BUILD_ID", build.id),
            ("HARDWARE", build.hardware),
        ];

        let screen = screen::read(self.platform.as_ref());
        if !screen.is_empty() {
            constants.push(("SCREEN_INFO", screen.to_json_or_empty()));
        }

        log::info!("Returning {} device constants", constants.len());
        constants
    }

    pub fn methods(&self) -> Vec<MethodDescriptor> {
        METHOD_NAMES
            .iter()
            .enumerate()
            .map(|(id, name)| MethodDescriptor {
                id,
                name: *name,
                is_async: true,
            })
            .collect()
    }

    /// Invoke method `id` and answer through `callback(error, result)`
    pub fn call_method<F>(&mut self, id: usize, callback: F)
    where
        F: FnOnce(&str, &str),
    {
        let Some(method) = Method::from_id(id) else {
            log::error!("Unknown method id: {}", id);
            callback("method not found", "");
            return;
        };

        log::info!("Calling {}", METHOD_NAMES[id]);
        match self.invoke(method) {
            Ok(result) => callback("", &result),
            Err(message) => callback(&message, ""),
        }
    }

    /// Invoke by name, as the JavaScript side addresses methods
    pub fn call_method_by_name<F>(&mut self, name: &str, callback: F)
    where
        F: FnOnce(&str, &str),
    {
        match Method::from_name(name) {
            Some(method) => self.call_method(method as usize, callback),
            None => {
                log::error!("Unknown method: {}", name);
                callback("method not found", "");
            }
        }
    }

    fn invoke(&mut self, method: Method) -> std::result::Result<String, String> {
        match method {
            Method::GetDeviceId => {
                let id = self.platform.device_id().unwrap_or_else(|e| {
                    log::warn!("Failed to read device id: {}", e);
                    String::new()
                });
                serde_json::to_string(&id).map_err(|e| e.to_string())
            }
            Method::GetBatteryLevel => Ok(battery::read_json(self.platform.as_ref())),
            Method::GetNetworkState => Ok(network::read_json(self.platform.as_ref())),
            Method::GetSystemInfo => Ok(self.system_info().to_json_or_empty()),
            Method::StartBatteryMonitoring => {
                let started = self.monitor.start_monitoring(self.sink.clone());
                Ok(started.to_string())
            }
            Method::StopBatteryMonitoring => {
                self.monitor.stop_monitoring();
                Ok("true".to_string())
            }
        }
    }

    /// System reader output behind a short identification header
    pub fn system_info(&self) -> DeviceInfoDocument {
        let build = self.build_or_default();
        let header = DeviceInfoDocument::new()
            .with("systemName", "Android")
            .with("systemVersion", build.release)
            .with("model", build.model)
            .with("manufacturer", build.manufacturer)
            .with("hardware", build.hardware)
            .with("sdkVersion", build.sdk_int.to_string())
            .with("buildId", build.id);

        assemble([header, system::read(self.platform.as_ref())])
    }

    fn build_or_default(&self) -> BuildInfo {
        self.platform.build_info().unwrap_or_else(|e| {
            log::warn!("Build properties unavailable: {}", e);
            BuildInfo::default()
        })
    }
}

/// JSON for a constants table
pub fn constants_json(constants: &[(&'static str, String)]) -> String {
    let doc: DeviceInfoDocument = constants
        .iter()
        .map(|(k, v)| (*k, v.clone()))
        .collect();
    doc.to_json_or_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::fake::FakePlatform;

    fn call(module: &mut DeviceInfoModule, id: usize) -> (String, String) {
        let mut out = (String::new(), String::new());
        module.call_method(id, |err, res| out = (err.to_string(), res.to_string()));
        out
    }

    #[test]
    fn test_method_table_order() {
        let module = DeviceInfoModule::new(Arc::new(FakePlatform::android()));
        let names: Vec<_> = module.methods().iter().map(|m| m.name).collect();
        assert_eq!(names, METHOD_NAMES.to_vec());
        assert_eq!(module.name(), "DeviceInfo");
    }

    #[test]
    fn test_unknown_method() {
        let mut module = DeviceInfoModule::new(Arc::new(FakePlatform::android()));
        let (err, res) = call(&mut module, 17);
        assert_eq!(err, "method not found");
        assert!(res.is_empty());
    }

    #[test]
    fn test_device_id_is_json_string() {
        let mut module = DeviceInfoModule::new(Arc::new(FakePlatform::android()));
        let (err, res) = call(&mut module, 0);
        assert!(err.is_empty());
        assert_eq!(res, "\"9774d56d682e549c\"");
    }

    #[test]
    fn test_system_info_has_header_first() {
        let mut module = DeviceInfoModule::new(Arc::new(FakePlatform::android()));
        let (_, res) = call(&mut module, 3);
        assert!(res.starts_with(r#"{"systemName":"Android","systemVersion":"14","model":"Pixel 8""#));
        assert!(res.contains(r#""totalMemory":"#));
    }

    #[test]
    fn test_constants_include_screen() {
        let module = DeviceInfoModule::new(Arc::new(FakePlatform::android()));
        let constants = module.constants();
        assert_eq!(constants[0], ("DEVICE_TYPE", "android".to_string()));
        assert!(constants.iter().any(|(k, v)| *k == "SCREEN_INFO" && v.contains("\"width\":1080")));
    }

    #[test]
    fn test_constants_skip_missing_screen() {
        let platform = FakePlatform::android();
        platform.update(|s| s.display = None);
        let module = DeviceInfoModule::new(Arc::new(platform));
        assert!(!module.constants().iter().any(|(k, _)| *k == "SCREEN_INFO"));
    }

    #[test]
    fn test_monitoring_round_trip() {
        let platform = Arc::new(FakePlatform::android());
        let mut module = DeviceInfoModule::new(platform.clone());

        assert_eq!(call(&mut module, 4).1, "true");
        assert_eq!(call(&mut module, 4).1, "true");
        assert_eq!(platform.registration_count(), 1);
        assert!(module.is_monitoring());

        assert_eq!(call(&mut module, 5).1, "true");
        assert_eq!(call(&mut module, 5).1, "true");
        assert!(!module.is_monitoring());
    }

    #[test]
    fn test_call_by_name() {
        let mut module = DeviceInfoModule::new(Arc::new(FakePlatform::android()));
        let mut result = String::new();
        module.call_method_by_name("getNetworkState", |_, res| result = res.to_string());
        assert!(result.contains("\"type\":\"wifi\""));
    }

    #[test]
    fn test_sink_can_replace_itself_while_delivering() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let module = DeviceInfoModule::new(Arc::new(FakePlatform::android()));
        let slot = module.sink.clone();
        let replaced = Arc::new(AtomicUsize::new(0));

        let replacement: Arc<dyn BatterySink> = {
            let replaced = replaced.clone();
            Arc::new(move |_: PowerEvent, _: &str| {
                replaced.fetch_add(1, Ordering::SeqCst);
            })
        };
        let first: Arc<dyn BatterySink> = {
            let slot = slot.clone();
            Arc::new(move |_: PowerEvent, _: &str| {
                *slot.target.write() = Some(replacement.clone());
            })
        };
        module.set_battery_sink(first);

        slot.deliver(PowerEvent::BatteryChanged, "{}");
        slot.deliver(PowerEvent::BatteryChanged, "{}");
        assert_eq!(replaced.load(Ordering::SeqCst), 1);
    }
}
