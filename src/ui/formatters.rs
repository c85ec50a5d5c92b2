use colored::*;
use humansize::{format_size, BINARY};

use crate::core::classify::{BatteryHealth, ChargeStatus};
use crate::core::document::{DeviceInfoDocument, FieldValue};
use crate::core::monitor::BatteryUpdate;
use crate::core::readers::DocumentKind;

/// Keys whose integer values are byte counts
const BYTE_KEYS: [&str; 7] = [
    "totalMemory",
    "availableMemory",
    "memoryThreshold",
    "internalStorageTotal",
    "internalStorageFree",
    "externalStorageTotal",
    "externalStorageFree",
];

fn is_byte_key(key: &str) -> bool {
    BYTE_KEYS.contains(&key)
}

/// Render one field for humans
pub fn format_value(kind: DocumentKind, key: &str, value: &FieldValue) -> String {
    match (kind, key, value) {
        (_, k, FieldValue::Int(bytes)) if is_byte_key(k) && *bytes >= 0 => {
            format_size(*bytes as u64, BINARY)
        }
        (DocumentKind::Battery, "level", FieldValue::Float(pct)) => format!("{:.1}%", pct),
        (DocumentKind::Battery, "temperature", FieldValue::Float(c)) => format!("{:.1} °C", c),
        (DocumentKind::Battery, "voltage", FieldValue::Int(mv)) => format!("{} mV", mv),
        (DocumentKind::Battery, "status", FieldValue::Int(code)) => {
            format!("{} ({})", ChargeStatus::from_code(*code as i32), code)
        }
        (DocumentKind::Battery, "health", FieldValue::Int(code)) => {
            format!("{} ({})", BatteryHealth::from_code(*code as i32), code)
        }
        (_, _, FieldValue::Bool(b)) => {
            if *b {
                "yes".green().to_string()
            } else {
                "no".dimmed().to_string()
            }
        }
        (_, _, FieldValue::Int(i)) => i.to_string(),
        (_, _, FieldValue::Float(f)) => format!("{}", f),
        (_, _, FieldValue::Text(s)) if s.is_empty() => "-".dimmed().to_string(),
        (_, _, FieldValue::Text(s)) => s.clone(),
        (_, _, FieldValue::List(items)) => items.join(", "),
    }
}

fn print_section_header(title: &str) {
    println!("\n{}", title.bold().green());
    println!("{}", "-".repeat(title.len()));
}

pub fn format_document(kind: DocumentKind, doc: &DeviceInfoDocument) {
    print_section_header(&kind.name().to_uppercase());

    if doc.is_empty() {
        println!("  {}", "unavailable".yellow());
        return;
    }

    let width = doc.keys().map(str::len).max().unwrap_or(0);
    for (key, value) in doc.iter() {
        println!(
            "  {:<width$}  {}",
            key.cyan(),
            format_value(kind, key, value),
            width = width
        );
    }
}

pub fn format_constants(constants: &[(&'static str, String)]) {
    print_section_header("CONSTANTS");

    let width = constants.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    for (key, value) in constants {
        println!("  {:<width$}  {}", key.cyan(), value, width = width);
    }
}

pub fn format_battery_update(update: &BatteryUpdate) {
    println!(
        "{} {} {}",
        update
            .received_at
            .with_timezone(&chrono::Local)
            .format("%H:%M:%S")
            .to_string()
            .dimmed(),
        update.event.to_string().bold(),
        update.payload
    );
}
