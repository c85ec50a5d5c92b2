use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("devinfo version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
