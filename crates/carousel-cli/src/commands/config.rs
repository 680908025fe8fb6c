use std::path::Path;

use anyhow::{bail, Result};
use tracing::info;

use carousel_core::AppConfig;

pub fn show(config: &AppConfig) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

pub fn path(config_path: &Path) -> Result<()> {
    let state = if config_path.exists() { "" } else { " (not created)" };
    println!("{}{}", config_path.display(), state);
    Ok(())
}

pub fn init(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "{} already exists, pass --force to overwrite it",
            config_path.display()
        );
    }

    AppConfig::default().save_to(config_path)?;
    info!("Wrote default configuration to {}", config_path.display());
    Ok(())
}
