use anyhow::Result;
use clap::{Arg, ArgAction, Command};

use devinfo::commands;
use devinfo::core::readers::DocumentKind;

fn json_flag() -> Arg {
    Arg::new("json")
        .long("json")
        .help("Print the raw JSON document")
        .action(ArgAction::SetTrue)
}

fn document_command(kind: DocumentKind, about: &'static str) -> Command {
    Command::new(kind.name()).about(about).arg(json_flag())
}

fn main() -> Result<()> {
    devinfo::init_logging();

    let matches = Command::new("devinfo")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Collect device telemetry as JSON documents")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .short_alias('V')
                .long("version")
                .help("Print version information")
                .action(ArgAction::SetTrue),
        )
        .subcommand(Command::new("version").about("Shows version information"))
        .subcommand(document_command(
            DocumentKind::Screen,
            "Display size and density",
        ))
        .subcommand(document_command(
            DocumentKind::Battery,
            "Charge level, charger, health, temperature and voltage",
        ))
        .subcommand(document_command(
            DocumentKind::Network,
            "Active network transport and radio generation",
        ))
        .subcommand(document_command(
            DocumentKind::System,
            "Memory, storage, CPU ABIs and build properties",
        ))
        .subcommand(
            Command::new("all")
                .about("Every document")
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("constants")
                .about("DeviceInfo module constants")
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("watch")
                .about("Stream battery documents on power events")
                .arg(
                    Arg::new("count")
                        .short('n')
                        .long("count")
                        .value_name("N")
                        .help("Stop after N updates")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("config")
                .about("Manage devinfo configuration (use 'devinfo config --help' for subcommands)")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(Command::new("show").about("Show the current configuration"))
                .subcommand(
                    Command::new("set-interval")
                        .about("Set the battery polling interval")
                        .arg(
                            Arg::new("ms")
                                .help("Interval in milliseconds")
                                .required(true)
                                .index(1)
                                .value_parser(clap::value_parser!(u64)),
                        ),
                )
                .subcommand(
                    Command::new("set-data-path")
                        .about("Set the mount point reported as internal storage")
                        .arg(
                            Arg::new("path")
                                .help("Mount point")
                                .required(true)
                                .index(1),
                        ),
                )
                .subcommand(
                    Command::new("set-external-path")
                        .about("Set the mount point reported as external storage (omit to clear)")
                        .arg(Arg::new("path").help("Mount point").index(1)),
                ),
        )
        .get_matches();

    if matches.get_flag("version") {
        return commands::version();
    }

    match matches.subcommand() {
        Some(("version", _)) => commands::version()?,
        Some(("screen", sub_matches)) => commands::info(Some(DocumentKind::Screen), sub_matches)?,
        Some(("battery", sub_matches)) => commands::info(Some(DocumentKind::Battery), sub_matches)?,
        Some(("network", sub_matches)) => commands::info(Some(DocumentKind::Network), sub_matches)?,
        Some(("system", sub_matches)) => commands::info(Some(DocumentKind::System), sub_matches)?,
        Some(("all", sub_matches)) => commands::info(None, sub_matches)?,
        Some(("constants", sub_matches)) => commands::constants::execute(sub_matches)?,
        Some(("watch", sub_matches)) => commands::watch::execute(sub_matches)?,
        Some(("config", sub_matches)) => commands::config::execute(sub_matches)?,
        _ => {
            println!("Welcome to devinfo!");
            println!("Use 'devinfo --help' for more information.");
        }
    }

    Ok(())
}
