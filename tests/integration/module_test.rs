use std::sync::Arc;

use devinfo::core::module::{constants_json, Method};
use devinfo::core::types::PowerEvent;
use devinfo::platform::FakePlatform;
use devinfo::{channel_sink, DeviceInfoModule};

fn call(module: &mut DeviceInfoModule, name: &str) -> (String, String) {
    let mut out = (String::new(), String::new());
    module.call_method_by_name(name, |err, res| out = (err.to_string(), res.to_string()));
    out
}

#[test]
fn test_battery_and_network_methods_return_documents() {
    let mut module = DeviceInfoModule::new(Arc::new(FakePlatform::android()));

    let (err, battery) = call(&mut module, "getBatteryLevel");
    assert!(err.is_empty());
    assert!(battery.starts_with(r#"{"level":87.0,"isCharging":false"#));

    let (err, network) = call(&mut module, "getNetworkState");
    assert!(err.is_empty());
    assert_eq!(
        network,
        r#"{"isConnected":true,"type":"wifi","typeName":"WIFI","subTypeName":""}"#
    );
}

#[test]
fn test_unknown_name_reports_error() {
    let mut module = DeviceInfoModule::new(Arc::new(FakePlatform::android()));
    let (err, res) = call(&mut module, "getIpAddress");
    assert_eq!(err, "method not found");
    assert!(res.is_empty());
}

#[test]
fn test_monitoring_forwards_to_attached_sink() {
    let platform = Arc::new(FakePlatform::android());
    let mut module = DeviceInfoModule::new(platform.clone());
    let (sink, mut rx) = channel_sink();
    module.set_battery_sink(sink);

    assert_eq!(call(&mut module, "startBatteryMonitoring").1, "true");
    platform.fire(PowerEvent::PowerDisconnected);

    let update = rx.try_recv().unwrap();
    assert_eq!(update.event, PowerEvent::PowerDisconnected);

    assert_eq!(call(&mut module, "stopBatteryMonitoring").1, "true");
    assert_eq!(platform.fire(PowerEvent::PowerDisconnected), 0);
}

#[test]
fn test_failed_start_reports_false() {
    let platform = Arc::new(FakePlatform::android());
    platform.set_fail_registration(true);
    let mut module = DeviceInfoModule::new(platform);

    assert_eq!(call(&mut module, "startBatteryMonitoring"), (String::new(), "false".to_string()));
    assert!(!module.is_monitoring());
}

#[test]
fn test_constants_json() {
    let module = DeviceInfoModule::new(Arc::new(FakePlatform::android()));
    let json = constants_json(&module.constants());
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["DEVICE_TYPE"], "android");
    assert_eq!(value["OS_VERSION"], "14");
    assert_eq!(value["DEVICE_MODEL"], "Pixel 8");
    assert_eq!(value["DEVICE_MANUFACTURER"], "Google");
    assert_eq!(value["SDK_VERSION"], "34");

    let screen: serde_json::Value =
        serde_json::from_str(value["SCREEN_INFO"].as_str().unwrap()).unwrap();
    assert_eq!(screen["densityDpi"], 420);
}

#[test]
fn test_method_lookup() {
    assert_eq!(Method::from_name("getSystemInfo"), Some(Method::GetSystemInfo));
    assert_eq!(Method::from_id(5), Some(Method::StopBatteryMonitoring));
    assert_eq!(Method::from_id(6), None);
}
