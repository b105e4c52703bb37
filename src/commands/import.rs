// src/commands/import.rs

//! Asset import commands
//!
//! Each command imports one configured asset group. A bundle that fails to
//! import is logged and skipped; re-running re-imports the whole group,
//! which is safe because unpack overwrites in place.

use anyhow::{Context, Result};
use stagehand::{assets, AssetEntry, SetupConfig};
use std::path::Path;

fn import_group(config_path: &Path, group: &str, pick: fn(&SetupConfig) -> &[AssetEntry]) -> Result<()> {
    let config = SetupConfig::load_or_default(config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    let entries = pick(&config);

    if entries.is_empty() {
        println!("No {} bundles configured.", group);
        return Ok(());
    }

    println!(
        "Importing {} {} bundle(s) from {}",
        entries.len(),
        group,
        config.content_dir.display()
    );
    let imported = assets::import_group(&config, entries);
    println!("Imported {} of {} bundle(s).", imported, entries.len());
    Ok(())
}

/// Import the essentials asset group
pub fn cmd_import_essentials(config_path: &Path) -> Result<()> {
    import_group(config_path, "essential", |c| &c.assets.essentials)
}

/// Import the UI asset group
pub fn cmd_import_ui(config_path: &Path) -> Result<()> {
    import_group(config_path, "UI", |c| &c.assets.ui)
}

/// Import the 3D asset group
pub fn cmd_import_3d(config_path: &Path) -> Result<()> {
    import_group(config_path, "3D", |c| &c.assets.three_d)
}
