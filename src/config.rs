// src/config.rs

//! Setup configuration types
//!
//! Everything stagehand does is driven by a single TOML file
//! (`stagehand.toml` by default): which asset bundles to import, which
//! dependencies to install and through which package manager, and what the
//! scaffold folder layout looks like. Every section has defaults so a bare
//! file (or no file at all) still produces a usable layout.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// One asset bundle in the content store, organized by vendor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetEntry {
    /// Bundle file name (a gzipped tar archive)
    pub bundle: String,
    /// Vendor directory the bundle lives under
    pub vendor: String,
}

/// Named asset groups, each importable as one command
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetGroups {
    /// General-purpose editor/tooling bundles
    pub essentials: Vec<AssetEntry>,
    /// UI toolkit bundles
    pub ui: Vec<AssetEntry>,
    /// 3D content bundles
    pub three_d: Vec<AssetEntry>,
}

/// Installation queue tuning and the external package-manager command
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallConfig {
    /// Package-manager argv prefix; the package identifier is appended
    pub command: Vec<String>,
    /// How often a dispatched request is polled for completion
    pub poll_interval_ms: u64,
    /// Settle time between consecutive installations
    pub pacing_delay_ms: u64,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            command: vec!["npm".to_string(), "install".to_string()],
            poll_interval_ms: 10,
            pacing_delay_ms: 1000,
        }
    }
}

impl InstallConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn pacing_delay(&self) -> Duration {
        Duration::from_millis(self.pacing_delay_ms)
    }
}

/// Scaffold folder layout and post-create rearrangement
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FolderLayout {
    /// Top-level scaffold directory created under the project root
    pub root: String,
    /// Subtrees to create under the scaffold root ("a/b" nests)
    pub create: Vec<String>,
    /// Existing project-root entries to move under the scaffold root
    pub moves: Vec<String>,
    /// Project-root entries to delete (starter clutter)
    pub deletes: Vec<String>,
}

impl Default for FolderLayout {
    fn default() -> Self {
        Self {
            root: "_project".to_string(),
            create: [
                "animation",
                "art",
                "art/materials",
                "audio",
                "audio/music",
                "audio/sfx",
                "data",
                "plugins",
                "prefabs",
                "scenes",
                "scripts",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            moves: vec!["scenes".to_string(), "settings".to_string()],
            deletes: vec!["tutorial".to_string()],
        }
    }
}

/// Top-level stagehand configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SetupConfig {
    /// Project directory all setup actions apply to
    pub project_root: PathBuf,
    /// Content-store root holding vendor-organized asset bundles
    pub content_dir: PathBuf,
    /// Dependency identifiers to install, in order
    pub packages: Vec<String>,
    /// Installation queue settings
    pub install: InstallConfig,
    /// Asset groups
    pub assets: AssetGroups,
    /// Folder scaffold
    pub folders: FolderLayout,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            content_dir: default_content_dir(),
            packages: Vec::new(),
            install: InstallConfig::default(),
            assets: AssetGroups::default(),
            folders: FolderLayout::default(),
        }
    }
}

impl SetupConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Load from `path` if it exists, defaults otherwise
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Override the project root
    pub fn with_project_root<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.project_root = root.into();
        self
    }

    /// Override the content-store directory
    pub fn with_content_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.content_dir = dir.into();
        self
    }
}

/// Platform content-store location: `<data dir>/stagehand/content`
fn default_content_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from(".stagehand"))
        .join("stagehand")
        .join("content")
}
