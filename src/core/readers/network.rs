use super::{or_empty, DocumentKind};
use crate::core::classify::{connectivity_type_name, network_generation, TYPE_MOBILE};
use crate::core::document::DeviceInfoDocument;
use crate::core::services::PlatformServices;
use crate::error::Result;

pub fn read(platform: &dyn PlatformServices) -> DeviceInfoDocument {
    or_empty(DocumentKind::Network, collect(platform))
}

pub fn read_json(platform: &dyn PlatformServices) -> String {
    read(platform).to_json_or_empty()
}

fn collect(platform: &dyn PlatformServices) -> Result<DeviceInfoDocument> {
    let Some(network) = platform.active_network()? else {
        log::debug!("No active network");
        return Ok(DeviceInfoDocument::new()
            .with("type", "none")
            .with("isConnected", false));
    };

    log::debug!("Active network: {:?}", network);

    let mut doc = DeviceInfoDocument::new()
        .with("isConnected", network.is_connected)
        .with("type", connectivity_type_name(network.network_type))
        .with("typeName", network.type_name)
        .with("subTypeName", network.subtype_name);

    if network.network_type == TYPE_MOBILE {
        let radio = platform.telephony()?;
        doc.insert("networkGeneration", network_generation(radio.network_type));
        doc.insert("carrierName", radio.operator_name);
        doc.insert("countryCode", radio.country_iso);
    }

    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classify::{NETWORK_TYPE_HSPA, TYPE_WIFI};
    use crate::core::document::FieldValue;
    use crate::core::types::{ActiveNetwork, TelephonyStatus};
    use crate::platform::fake::FakePlatform;

    #[test]
    fn test_no_active_network() {
        let platform = FakePlatform::android();
        platform.update(|s| s.network = None);

        assert_eq!(read_json(&platform), r#"{"type":"none","isConnected":false}"#);
    }

    #[test]
    fn test_wifi_has_no_radio_fields() {
        let platform = FakePlatform::android();
        platform.update(|s| {
            s.network = Some(ActiveNetwork {
                is_connected: true,
                network_type: TYPE_WIFI,
                type_name: "WIFI".to_string(),
                subtype_name: String::new(),
            })
        });

        assert_eq!(
            read_json(&platform),
            r#"{"isConnected":true,"type":"wifi","typeName":"WIFI","subTypeName":""}"#
        );
    }

    #[test]
    fn test_mobile_adds_generation_and_carrier() {
        let platform = FakePlatform::android();
        platform.update(|s| {
            s.network = Some(ActiveNetwork {
                is_connected: true,
                network_type: TYPE_MOBILE,
                type_name: "MOBILE".to_string(),
                subtype_name: "HSPA".to_string(),
            });
            s.telephony = Some(TelephonyStatus {
                network_type: NETWORK_TYPE_HSPA,
                operator_name: "Carrier".to_string(),
                country_iso: "us".to_string(),
            });
        });

        let doc = read(&platform);
        assert_eq!(doc.get("type"), Some(&FieldValue::Text("mobile".to_string())));
        assert_eq!(doc.get("networkGeneration"), Some(&FieldValue::Text("3G".to_string())));
        assert_eq!(doc.get("carrierName"), Some(&FieldValue::Text("Carrier".to_string())));
        assert_eq!(doc.get("countryCode"), Some(&FieldValue::Text("us".to_string())));
    }

    #[test]
    fn test_mobile_without_telephony_is_empty() {
        let platform = FakePlatform::android();
        platform.update(|s| {
            s.network = Some(ActiveNetwork {
                is_connected: true,
                network_type: TYPE_MOBILE,
                type_name: "MOBILE".to_string(),
                subtype_name: "LTE".to_string(),
            });
            s.telephony = None;
        });

        assert!(read(&platform).is_empty());
    }
}
