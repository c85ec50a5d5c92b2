//! Power event dispatch for hosts without a broadcast system.
//!
//! Each registration runs one polling task on a small Tokio runtime. The task
//! samples the battery, derives power events from consecutive samples and
//! invokes the receiver for the events it registered for.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::broadcast;
use tokio::time::{interval, Duration};

use crate::core::readers::battery::battery_percentage;
use crate::core::services::{EventReceiver, ReceiverId};
use crate::core::types::{BatteryStatus, PowerEvent};
use crate::error::{DeviceInfoError, Result};

/// Level at or below which the battery is considered low
pub const LOW_BATTERY_PERCENT: f32 = 15.0;

/// Level at which a low battery is considered okay again
pub const OKAY_BATTERY_PERCENT: f32 = 20.0;

/// Source of battery samples for a polling task
pub type BatterySampler = Arc<dyn Fn() -> Result<Option<BatteryStatus>> + Send + Sync>;

/// Turns a stream of battery samples into power events
#[derive(Debug, Default)]
pub struct PowerTracker {
    last: Option<BatteryStatus>,
    low: bool,
}

impl PowerTracker {
    pub fn observe(&mut self, sample: BatteryStatus) -> Vec<PowerEvent> {
        let percent = if sample.scale > 0 {
            battery_percentage(sample.level, sample.scale)
        } else {
            100.0
        };

        let Some(prev) = self.last.replace(sample) else {
            // First sample behaves like a sticky broadcast
            self.low = percent <= LOW_BATTERY_PERCENT;
            return vec![PowerEvent::BatteryChanged];
        };

        let mut events = Vec::new();
        if prev != sample {
            events.push(PowerEvent::BatteryChanged);
        }

        match (prev.plugged > 0, sample.plugged > 0) {
            (false, true) => events.push(PowerEvent::PowerConnected),
            (true, false) => events.push(PowerEvent::PowerDisconnected),
            _ => {}
        }

        if !self.low && percent <= LOW_BATTERY_PERCENT {
            self.low = true;
            events.push(PowerEvent::BatteryLow);
        } else if self.low && percent >= OKAY_BATTERY_PERCENT {
            self.low = false;
            events.push(PowerEvent::BatteryOkay);
        }

        events
    }
}

/// Cleared on unregister; held while a receiver runs
type LiveFlag = Arc<Mutex<bool>>;

struct Registration {
    shutdown: broadcast::Sender<()>,
    live: LiveFlag,
}

impl Registration {
    /// Stop the task. Returns once no delivery is in flight.
    fn cancel(self) {
        *self.live.lock() = false;
        // Fails only if the task already exited
        let _ = self.shutdown.send(());
    }
}

/// Owns the polling runtime and the live registrations
pub struct PowerEventDispatcher {
    runtime: Option<tokio::runtime::Runtime>,
    period: Duration,
    registrations: Mutex<HashMap<ReceiverId, Registration>>,
    next_id: AtomicU64,
}

impl PowerEventDispatcher {
    pub fn new(period: Duration) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_time()
            .thread_name("power-events")
            .build()?;

        Ok(Self {
            runtime: Some(runtime),
            period,
            registrations: Mutex::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        })
    }

    pub fn register(
        &self,
        events: &[PowerEvent],
        receiver: EventReceiver,
        sampler: BatterySampler,
    ) -> Result<ReceiverId> {
        let runtime = self
            .runtime
            .as_ref()
            .ok_or_else(|| DeviceInfoError::registration("dispatcher is shut down"))?;

        let id = ReceiverId(self.next_id.fetch_add(1, Ordering::SeqCst));
        let (shutdown_tx, shutdown_rx) = broadcast::channel::<()>(1);
        let live: LiveFlag = Arc::new(Mutex::new(true));

        runtime.spawn(power_event_task(
            events.to_vec(),
            receiver,
            sampler,
            self.period,
            live.clone(),
            shutdown_rx,
        ));

        self.registrations.lock().insert(
            id,
            Registration {
                shutdown: shutdown_tx,
                live,
            },
        );
        log::debug!("Registered power receiver {}", id.0);
        Ok(id)
    }

    pub fn unregister(&self, id: ReceiverId) -> Result<()> {
        let registration = self.registrations.lock().remove(&id).ok_or_else(|| {
            DeviceInfoError::registration(format!("receiver {} not registered", id.0))
        })?;

        registration.cancel();
        log::debug!("Unregistered power receiver {}", id.0);
        Ok(())
    }

    pub fn active_registrations(&self) -> usize {
        self.registrations.lock().len()
    }
}

impl Drop for PowerEventDispatcher {
    fn drop(&mut self) {
        for (_, registration) in self.registrations.lock().drain() {
            registration.cancel();
        }
        // May run on one of the runtime's own threads when a task held the
        // last reference, so never block here
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}

/// Polling task behind one registration.
///
/// Mirrors a broadcast receiver: events not in `events` are never delivered,
/// and nothing is delivered once `live` is cleared.
async fn power_event_task(
    events: Vec<PowerEvent>,
    receiver: EventReceiver,
    sampler: BatterySampler,
    period: Duration,
    live: LiveFlag,
    mut shutdown: broadcast::Receiver<()>,
) {
    let mut ticker = interval(period);
    let mut tracker = PowerTracker::default();

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                match sampler() {
                    Ok(Some(sample)) => {
                        for event in tracker.observe(sample) {
                            if !events.contains(&event) {
                                continue;
                            }
                            let guard = live.lock();
                            if !*guard {
                                log::debug!("Dropping '{}' after unregister", event);
                                break;
                            }
                            receiver(event);
                        }
                    }
                    Ok(None) => log::debug!("No battery present, nothing to dispatch"),
                    Err(e) => log::warn!("Failed to sample battery: {}", e),
                }
            }
            _ = shutdown.recv() => {
                log::debug!("Power event task shutting down");
                break;
            }
        }
    }
}
