// src/error.rs

//! Crate-wide error type
//!
//! Installation outcomes (dispatch failures, failed installs) are deliberately
//! NOT errors: the queue reports them as per-request `InstallOutcome::Failure`
//! events and keeps going. This type covers the synchronous helpers (config
//! loading, folder operations, asset import) where a caller can sensibly
//! decide whether to warn-and-continue or abort.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// I/O failure during a folder or asset operation
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// A configured name attempted to escape its root directory
    #[error("path traversal attempt: {0}")]
    PathTraversal(String),

    /// A configured path was empty or otherwise unusable
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// Asset bundle not present in the content store
    #[error("asset bundle not found: {}", .0.display())]
    BundleNotFound(PathBuf),

    /// Moving a scaffold entry failed
    #[error("failed to move {name}: {reason}")]
    FolderMove { name: String, reason: String },
}
