use devinfo::core::classify::{network_generation, TYPE_MOBILE};
use devinfo::core::readers::{self, battery, network, system, DocumentKind};
use devinfo::core::types::{ActiveNetwork, BatteryStatus, StorageStats, TelephonyStatus};
use devinfo::core::FieldValue;
use devinfo::platform::{FakePlatform, FakeState};
use devinfo::EMPTY_DOCUMENT;

fn battery_with(status: i32, level: i32, scale: i32, temperature: i32) -> FakePlatform {
    let platform = FakePlatform::android();
    platform.update(|s| {
        s.battery = Some(BatteryStatus {
            level,
            scale,
            status,
            plugged: 0,
            health: 2,
            temperature,
            voltage: 3900,
        })
    });
    platform
}

#[test]
fn test_charging_flag_follows_status() {
    for status in [1, 2, 3, 4, 5] {
        let doc = battery::read(&battery_with(status, 10, 100, 250));
        let expected = status == 2 || status == 5;
        assert_eq!(doc.get("isCharging"), Some(&FieldValue::Bool(expected)));
    }
}

#[test]
fn test_percentage_and_temperature() {
    let doc = battery::read(&battery_with(3, 50, 100, 235));
    assert_eq!(doc.get("level"), Some(&FieldValue::Float(50.0)));
    assert_eq!(doc.get("temperature"), Some(&FieldValue::Float(23.5)));

    let doc = battery::read(&battery_with(3, 150, 200, 300));
    assert_eq!(doc.get("level"), Some(&FieldValue::Float(75.0)));
}

#[test]
fn test_no_network_document_is_exact() {
    let platform = FakePlatform::android();
    platform.update(|s| s.network = None);

    assert_eq!(
        network::read_json(&platform),
        r#"{"type":"none","isConnected":false}"#
    );
}

#[test]
fn test_mobile_generation_for_every_code() {
    let platform = FakePlatform::android();

    for code in 0..=20 {
        platform.update(|s| {
            s.network = Some(ActiveNetwork {
                is_connected: true,
                network_type: TYPE_MOBILE,
                type_name: "MOBILE".to_string(),
                subtype_name: String::new(),
            });
            s.telephony = Some(TelephonyStatus {
                network_type: code,
                ..Default::default()
            });
        });

        let doc = network::read(&platform);
        let generation = match doc.get("networkGeneration") {
            Some(FieldValue::Text(g)) => g.clone(),
            other => panic!("unexpected generation {:?}", other),
        };
        assert!(["2G", "3G", "4G", "Unknown"].contains(&generation.as_str()));
        assert_eq!(generation, network_generation(code));
    }
}

#[test]
fn test_unmounted_external_storage_is_omitted() {
    let platform = FakePlatform::android();
    platform.update(|s| s.external_storage = None);
    let json = system::read_json(&platform);
    assert!(!json.contains("externalStorage"));

    platform.update(|s| {
        s.external_storage = Some(StorageStats {
            total_bytes: 0,
            free_bytes: 0,
        })
    });
    let json = system::read_json(&platform);
    assert!(json.contains(r#""externalStorageTotal":0"#));
}

#[test]
fn test_every_reader_degrades_to_empty() {
    let platform = FakePlatform::new(FakeState::default());

    assert_eq!(readers::read_json(DocumentKind::Screen, &platform), EMPTY_DOCUMENT);
    assert_eq!(readers::read_json(DocumentKind::Battery, &platform), EMPTY_DOCUMENT);
    assert_eq!(readers::read_json(DocumentKind::System, &platform), EMPTY_DOCUMENT);
    // No active network is a valid state, not a failure
    assert_eq!(
        readers::read_json(DocumentKind::Network, &platform),
        r#"{"type":"none","isConnected":false}"#
    );
}

#[test]
fn test_documents_parse_as_json_objects() {
    let platform = FakePlatform::android();

    for kind in DocumentKind::ALL {
        let json = readers::read_json(kind, &platform);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.is_object(), "{} is not an object", kind);
        assert!(!value.as_object().unwrap().is_empty(), "{} is empty", kind);
    }
}

#[test]
fn test_screen_document_keys() {
    let platform = FakePlatform::android();
    let doc = readers::read(DocumentKind::Screen, &platform);

    assert_eq!(
        doc.keys().collect::<Vec<_>>(),
        vec!["width", "height", "density", "densityDpi", "scaledDensity", "xdpi", "ydpi"]
    );
    assert_eq!(doc.get("width"), Some(&FieldValue::Int(1080)));
}
