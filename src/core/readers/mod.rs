//! Field readers: one flat document per platform subsystem.
//!
//! Readers never fail. Any platform error is logged and the reader returns an
//! empty document, which callers treat as "unavailable".

pub mod battery;
pub mod network;
pub mod screen;
pub mod system;

use serde::{Deserialize, Serialize};

use super::document::DeviceInfoDocument;
use super::services::PlatformServices;
use crate::error::Result;

/// The document kinds a caller can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentKind {
    Screen,
    Battery,
    Network,
    System,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 4] = [
        DocumentKind::Screen,
        DocumentKind::Battery,
        DocumentKind::Network,
        DocumentKind::System,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DocumentKind::Screen => "screen",
            DocumentKind::Battery => "battery",
            DocumentKind::Network => "network",
            DocumentKind::System => "system",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Run the reader for `kind`
pub fn read(kind: DocumentKind, platform: &dyn PlatformServices) -> DeviceInfoDocument {
    match kind {
        DocumentKind::Screen => screen::read(platform),
        DocumentKind::Battery => battery::read(platform),
        DocumentKind::Network => network::read(platform),
        DocumentKind::System => system::read(platform),
    }
}

/// Run the reader for `kind` and serialize, `"{}"` on any failure
pub fn read_json(kind: DocumentKind, platform: &dyn PlatformServices) -> String {
    read(kind, platform).to_json_or_empty()
}

/// Shared fallback: log the failure and hand back an empty document
fn or_empty(kind: DocumentKind, result: Result<DeviceInfoDocument>) -> DeviceInfoDocument {
    result.unwrap_or_else(|e| {
        log::warn!("Failed to collect {} info: {}", kind, e);
        DeviceInfoDocument::new()
    })
}
