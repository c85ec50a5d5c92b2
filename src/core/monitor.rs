//! Battery change listener.
//!
//! A [`BatteryMonitor`] is either inactive or holds a [`MonitorHandle`] for one
//! receiver registration covering the five power events. Every event received
//! while active re-runs the battery reader and forwards the JSON document to a
//! [`BatterySink`].

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::mpsc;

use super::readers::battery;
use super::services::{PlatformServices, ReceiverId};
use super::types::PowerEvent;

/// Destination for battery documents produced on power events
pub trait BatterySink: Send + Sync {
    fn deliver(&self, event: PowerEvent, document: &str);
}

impl<F> BatterySink for F
where
    F: Fn(PowerEvent, &str) + Send + Sync,
{
    fn deliver(&self, event: PowerEvent, document: &str) {
        self(event, document)
    }
}

/// One battery document delivered over a channel sink
#[derive(Debug, Clone, Serialize)]
pub struct BatteryUpdate {
    pub event: PowerEvent,
    pub payload: String,
    pub received_at: DateTime<Utc>,
}

impl BatterySink for mpsc::UnboundedSender<BatteryUpdate> {
    fn deliver(&self, event: PowerEvent, document: &str) {
        let update = BatteryUpdate {
            event,
            payload: document.to_string(),
            received_at: Utc::now(),
        };

        // Only fails once the receiver is gone
        if self.send(update).is_err() {
            log::debug!("Battery update dropped: receiver closed");
        }
    }
}

/// Create a sink backed by an unbounded channel
pub fn channel_sink() -> (
    Arc<dyn BatterySink>,
    mpsc::UnboundedReceiver<BatteryUpdate>,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Arc::new(tx), rx)
}

/// Proof of an active registration
#[derive(Debug, PartialEq, Eq)]
pub struct MonitorHandle {
    receiver: ReceiverId,
}

impl MonitorHandle {
    pub fn receiver_id(&self) -> ReceiverId {
        self.receiver
    }
}

#[derive(Debug, Default)]
enum MonitorState {
    #[default]
    Inactive,
    Active(MonitorHandle),
}

/// Caller-owned battery change listener
pub struct BatteryMonitor {
    platform: Arc<dyn PlatformServices>,
    state: MonitorState,
}

impl BatteryMonitor {
    pub fn new(platform: Arc<dyn PlatformServices>) -> Self {
        Self {
            platform,
            state: MonitorState::Inactive,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, MonitorState::Active(_))
    }

    /// The current registration, if active
    pub fn handle(&self) -> Option<&MonitorHandle> {
        match &self.state {
            MonitorState::Active(handle) => Some(handle),
            MonitorState::Inactive => None,
        }
    }

    /// Subscribe to power events.
    ///
    /// Idempotent: returns `true` without registering again when already
    /// active. Returns `false` if the platform rejects the registration.
    pub fn start_monitoring(&mut self, sink: Arc<dyn BatterySink>) -> bool {
        if self.is_active() {
            return true;
        }

        let platform = self.platform.clone();
        let receiver = Arc::new(move |event: PowerEvent| {
            let document = battery::read_json(platform.as_ref());
            log::debug!("Battery event '{}': {}", event, document);
            sink.deliver(event, &document);
        });

        match self
            .platform
            .register_receiver(&PowerEvent::MONITORED, receiver)
        {
            Ok(id) => {
                log::info!("Battery monitoring started");
                self.state = MonitorState::Active(MonitorHandle { receiver: id });
                true
            }
            Err(e) => {
                log::error!("Failed to start battery monitoring: {}", e);
                false
            }
        }
    }

    /// Unsubscribe. No-op when inactive.
    pub fn stop_monitoring(&mut self) {
        if let MonitorState::Active(handle) = std::mem::take(&mut self.state) {
            if let Err(e) = self.platform.unregister_receiver(handle.receiver) {
                log::error!("Failed to unregister battery receiver: {}", e);
            }
            log::info!("Battery monitoring stopped");
        }
    }
}

impl Drop for BatteryMonitor {
    fn drop(&mut self) {
        self.stop_monitoring();
    }
}
