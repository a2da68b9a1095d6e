use anyhow::{bail, Result};

use filmstrip_core::FilmstripConfig;

pub fn run(config: &FilmstripConfig, force: bool) -> Result<()> {
    let path = FilmstripConfig::config_path();
    if path.exists() && !force {
        bail!(
            "Config already exists at {}\nUse --force to overwrite it.",
            path.display()
        );
    }

    let written = config.save()?;
    println!("Wrote config to {}", written.display());
    Ok(())
}
