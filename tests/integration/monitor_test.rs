use std::sync::Arc;

use devinfo::core::types::{BatteryStatus, PowerEvent};
use devinfo::platform::FakePlatform;
use devinfo::{channel_sink, BatteryMonitor};

#[test]
fn test_double_start_registers_once() {
    let platform = Arc::new(FakePlatform::android());
    let mut monitor = BatteryMonitor::new(platform.clone());
    let (sink, _rx) = channel_sink();

    assert!(monitor.start_monitoring(sink.clone()));
    assert!(monitor.start_monitoring(sink));
    assert_eq!(platform.registration_count(), 1);
}

#[test]
fn test_stop_without_start_does_not_panic() {
    let platform = Arc::new(FakePlatform::android());
    let mut monitor = BatteryMonitor::new(platform.clone());

    monitor.stop_monitoring();
    assert!(!monitor.is_active());
    assert_eq!(platform.active_receivers(), 0);
}

#[test]
fn test_every_monitored_event_delivers_fresh_document() {
    let platform = Arc::new(FakePlatform::android());
    let mut monitor = BatteryMonitor::new(platform.clone());
    let (sink, mut rx) = channel_sink();
    monitor.start_monitoring(sink);

    for (i, event) in PowerEvent::MONITORED.into_iter().enumerate() {
        let level = 10 * (i as i32 + 1);
        platform.update(|s| {
            s.battery = Some(BatteryStatus {
                level,
                scale: 100,
                ..Default::default()
            })
        });
        assert_eq!(platform.fire(event), 1);

        let update = rx.try_recv().unwrap();
        assert_eq!(update.event, event);
        assert!(update.payload.starts_with(&format!(r#"{{"level":{}.0"#, level)));
    }
}

#[test]
fn test_restart_after_stop_registers_again() {
    let platform = Arc::new(FakePlatform::android());
    let mut monitor = BatteryMonitor::new(platform.clone());
    let (sink, _rx) = channel_sink();

    monitor.start_monitoring(sink.clone());
    monitor.stop_monitoring();
    monitor.start_monitoring(sink);

    assert_eq!(platform.registration_count(), 2);
    assert_eq!(platform.active_receivers(), 1);
}

#[test]
fn test_missing_battery_forwards_empty_document() {
    let platform = Arc::new(FakePlatform::android());
    platform.update(|s| s.battery = None);
    let mut monitor = BatteryMonitor::new(platform.clone());
    let (sink, mut rx) = channel_sink();
    monitor.start_monitoring(sink);

    platform.fire(PowerEvent::BatteryChanged);
    assert_eq!(rx.try_recv().unwrap().payload, "{}");
}

#[test]
fn test_event_action_names() {
    assert_eq!(
        PowerEvent::BatteryChanged.action(),
        "android.intent.action.BATTERY_CHANGED"
    );
    assert_eq!(
        PowerEvent::PowerConnected.action(),
        "android.intent.action.ACTION_POWER_CONNECTED"
    );
}
