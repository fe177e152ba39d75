use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("dl version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
