//! Battery watch command.
//!
//! Streams battery documents as power events arrive.

use anyhow::{bail, Result};
use clap::ArgMatches;
use colored::*;

use crate::core::monitor::{channel_sink, BatteryMonitor};
use crate::ui::format_battery_update;

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let count = matches.get_one::<usize>("count").copied();
    let json_output = matches.get_flag("json");

    let platform = super::host_platform()?;
    let interval = platform.config().poll_interval_ms;

    let (sink, mut updates) = channel_sink();
    let mut monitor = BatteryMonitor::new(platform);

    if !monitor.start_monitoring(sink) {
        bail!("Failed to start battery monitoring");
    }

    if !json_output {
        println!(
            "{}",
            format!("Watching power events (polling every {} ms)...", interval).dimmed()
        );
    }

    let mut received = 0usize;
    while let Some(update) = updates.blocking_recv() {
        if json_output {
            println!("{}", serde_json::to_string(&update)?);
        } else {
            format_battery_update(&update);
        }

        received += 1;
        if count.is_some_and(|limit| received >= limit) {
            break;
        }
    }

    monitor.stop_monitoring();
    Ok(())
}
