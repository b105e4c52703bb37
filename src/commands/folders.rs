// src/commands/folders.rs

//! Folder scaffold command

use anyhow::{Context, Result};
use stagehand::{folders, SetupConfig};
use std::path::Path;
use tracing::warn;

/// Create the scaffold, then move and delete the configured entries
///
/// Move/delete failures are warnings; the rest of the batch continues.
pub fn cmd_create_folders(config_path: &Path) -> Result<()> {
    let config = SetupConfig::load_or_default(config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    let layout = &config.folders;

    let scaffold = folders::create_tree(&config.project_root, layout)
        .with_context(|| format!("creating scaffold under {}", config.project_root.display()))?;
    println!("Scaffold ready at {}", scaffold.display());

    for name in &layout.moves {
        match folders::move_into(&config.project_root, &layout.root, name) {
            Ok(true) => println!("  moved {} into {}", name, layout.root),
            Ok(false) => {}
            Err(e) => warn!("failed to move {}: {}", name, e),
        }
    }

    for name in &layout.deletes {
        match folders::delete(&config.project_root, name) {
            Ok(true) => println!("  deleted {}", name),
            Ok(false) => {}
            Err(e) => warn!("failed to delete {}: {}", name, e),
        }
    }

    Ok(())
}
