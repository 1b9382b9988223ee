use crate::config::Config;
use anyhow::Result;

pub fn run(write: bool, config: &Config) -> Result<()> {
    if write {
        let path = config.save()?;
        println!("Configuration written to {}", path.display());
        return Ok(());
    }

    match Config::path() {
        Some(path) => println!("# {}", path.display()),
        None => println!("# no configuration directory on this platform"),
    }
    print!("{}", config.to_toml()?);
    Ok(())
}
