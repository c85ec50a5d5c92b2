use super::{or_empty, DocumentKind};
use crate::core::classify::{ChargeStatus, PlugSource, WIRELESS_CHARGING_MIN_SDK};
use crate::core::document::DeviceInfoDocument;
use crate::core::services::PlatformServices;
use crate::error::{DeviceInfoError, Result};

pub fn read(platform: &dyn PlatformServices) -> DeviceInfoDocument {
    or_empty(DocumentKind::Battery, collect(platform))
}

pub fn read_json(platform: &dyn PlatformServices) -> String {
    read(platform).to_json_or_empty()
}

/// Charge percentage from the raw level and scale extras
pub fn battery_percentage(level: i32, scale: i32) -> f32 {
    level as f32 * 100.0 / scale as f32
}

/// Raw tenths of a degree to degrees Celsius
pub fn temperature_celsius(raw: i32) -> f32 {
    raw as f32 / 10.0
}

fn collect(platform: &dyn PlatformServices) -> Result<DeviceInfoDocument> {
    let Some(battery) = platform.battery_status()? else {
        log::debug!("No battery status available");
        return Ok(DeviceInfoDocument::new());
    };

    let percentage = battery_percentage(battery.level, battery.scale);
    if !percentage.is_finite() {
        return Err(DeviceInfoError::NonFiniteValue("level".to_string()));
    }

    let status = ChargeStatus::from_code(battery.status);
    let plug = PlugSource::from_code(battery.plugged);

    // Wireless charging is only reported on newer platform versions
    let sdk_int = platform.build_info().map(|b| b.sdk_int).unwrap_or(0);
    let wireless = sdk_int >= WIRELESS_CHARGING_MIN_SDK && plug == PlugSource::Wireless;

    Ok(DeviceInfoDocument::new()
        .with("level", percentage)
        .with("isCharging", status.is_charging())
        .with("usbCharge", plug == PlugSource::Usb)
        .with("acCharge", plug == PlugSource::Ac)
        .with("wirelessCharge", wireless)
        .with("health", battery.health)
        .with("temperature", temperature_celsius(battery.temperature))
        .with("voltage", battery.voltage)
        .with("status", battery.status))
}
