use anyhow::Result;
use clap::ArgMatches;

use crate::core::module::{constants_json, DeviceInfoModule};
use crate::ui::format_constants;

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let module = DeviceInfoModule::new(super::host_platform()?);
    let constants = module.constants();

    if matches.get_flag("json") {
        println!("{}", constants_json(&constants));
    } else {
        format_constants(&constants);
        println!();
    }
    Ok(())
}
