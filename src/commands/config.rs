use crate::core::Config;
use anyhow::{Context, Result};
use colored::Colorize;

pub fn execute(matches: &clap::ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("show", _)) => show(),
        Some(("set-interval", sub_matches)) => {
            let interval = *sub_matches
                .get_one::<u64>("ms")
                .context("Interval argument is required")?;

            let mut config = Config::load()?;
            config.set_poll_interval(interval)?;
            config.save()?;

            println!("{} {} ms", "Poll interval set to:".green(), interval);
            Ok(())
        }
        Some(("set-data-path", sub_matches)) => {
            let path = sub_matches
                .get_one::<String>("path")
                .context("Path argument is required")?;

            let mut config = Config::load()?;
            config.set_data_path(path.clone());
            config.save()?;

            println!("{} {}", "Data path set to:".green(), path.cyan());
            Ok(())
        }
        Some(("set-external-path", sub_matches)) => {
            let path = sub_matches.get_one::<String>("path").cloned();

            let mut config = Config::load()?;
            config.set_external_storage_path(path.clone());
            config.save()?;

            match path {
                Some(path) => println!("{} {}", "External storage path set to:".green(), path.cyan()),
                None => println!("{}", "External storage path cleared.".yellow()),
            }
            Ok(())
        }
        _ => {
            println!("Use 'devinfo config --help' for more information.");
            Ok(())
        }
    }
}

fn show() -> Result<()> {
    let config = Config::load()?;
    let path = Config::get_config_path()?;

    println!("{} {}", "Config file:".white(), path.display().to_string().dimmed());
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
