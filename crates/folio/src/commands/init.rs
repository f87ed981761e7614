//! Initialize a portfolio site in the current directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::{load_config, DEFAULT_CONFIG};

/// Run the init command.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing folio...");

    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());

    let config = load_config(config_path)?;
    let assets_dir = Path::new(&config.site.assets_dir);
    if !assets_dir.exists() {
        fs::create_dir_all(assets_dir).context("Failed to create assets directory")?;
        tracing::info!("Created {}/", assets_dir.display());
    }

    tracing::info!(
        "Put profile.jpg in {}/ and your resume at {}",
        assets_dir.display(),
        config.site.resume
    );
    tracing::info!("Run 'folio serve' to start the site.");

    Ok(())
}
