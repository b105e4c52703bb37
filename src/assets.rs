// src/assets.rs

//! Asset bundle import from the local content store
//!
//! Bundles are gzipped tar archives kept in a vendor-organized content
//! store (`<content_dir>/<vendor>/<bundle>`). Import is a single blocking
//! unpack into the project root; a missing or corrupt bundle is reported
//! and the rest of the batch continues.

use crate::config::{AssetEntry, SetupConfig};
use crate::error::{Error, Result};
use flate2::read::GzDecoder;
use std::fs::File;
use tracing::{info, warn};

/// Unpack one bundle from the content store into the project root
pub fn import_bundle(config: &SetupConfig, entry: &AssetEntry) -> Result<()> {
    let bundle_path = config
        .content_dir
        .join(&entry.vendor)
        .join(&entry.bundle);
    if !bundle_path.is_file() {
        return Err(Error::BundleNotFound(bundle_path));
    }

    let file = File::open(&bundle_path)?;
    let mut archive = tar::Archive::new(GzDecoder::new(file));
    // tar refuses entries that would escape the unpack root
    archive.unpack(&config.project_root)?;

    info!(
        bundle = %entry.bundle,
        vendor = %entry.vendor,
        "imported asset bundle"
    );
    Ok(())
}

/// Import every bundle in a group, continuing past failures
///
/// Returns the number of bundles imported successfully.
pub fn import_group(config: &SetupConfig, entries: &[AssetEntry]) -> usize {
    let mut imported = 0;
    for entry in entries {
        match import_bundle(config, entry) {
            Ok(()) => imported += 1,
            Err(e) => warn!(bundle = %entry.bundle, "skipping bundle: {}", e),
        }
    }
    imported
}
