// src/folders.rs

//! Folder scaffold creation and rearrangement
//!
//! All operations are rooted at the project directory and idempotent:
//! creating an existing tree is a no-op, moving or deleting an absent entry
//! is a no-op reported as `Ok(false)`. Configured names come from a user
//! TOML file, so every name is validated against path traversal before it
//! touches the filesystem.

use crate::config::FolderLayout;
use crate::error::{Error, Result};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

/// Validate a configured name as a safe relative path
///
/// Rejects empty names, absolute paths, and any `..` component; `.`
/// components are dropped.
///
/// ```
/// use stagehand::folders::validate_name;
/// use std::path::PathBuf;
///
/// assert_eq!(validate_name("audio/sfx").unwrap(), PathBuf::from("audio/sfx"));
/// assert!(validate_name("../escape").is_err());
/// assert!(validate_name("/etc/passwd").is_err());
/// ```
pub fn validate_name(name: &str) -> Result<PathBuf> {
    if name.is_empty() {
        return Err(Error::InvalidPath("empty folder name".to_string()));
    }
    if Path::new(name).is_absolute() {
        return Err(Error::InvalidPath(name.to_string()));
    }

    let mut normalized = PathBuf::new();
    for component in Path::new(name).components() {
        match component {
            Component::Normal(c) => normalized.push(c),
            Component::CurDir => {}
            Component::ParentDir => {
                return Err(Error::PathTraversal(name.to_string()));
            }
            Component::Prefix(_) | Component::RootDir => {
                return Err(Error::InvalidPath(name.to_string()));
            }
        }
    }
    if normalized.as_os_str().is_empty() {
        return Err(Error::InvalidPath(name.to_string()));
    }
    Ok(normalized)
}

/// Create the scaffold root and every configured subtree
///
/// `create_dir_all` throughout, so re-running against an existing scaffold
/// changes nothing.
pub fn create_tree(project_root: &Path, layout: &FolderLayout) -> Result<PathBuf> {
    let scaffold = project_root.join(validate_name(&layout.root)?);
    std::fs::create_dir_all(&scaffold)?;

    for name in &layout.create {
        let dir = scaffold.join(validate_name(name)?);
        std::fs::create_dir_all(&dir)?;
        debug!(dir = %dir.display(), "created scaffold directory");
    }

    info!(scaffold = %scaffold.display(), "folder scaffold created");
    Ok(scaffold)
}

/// Move a project-root entry (file or directory) under the scaffold root
///
/// Returns `Ok(false)` when the source does not exist.
pub fn move_into(project_root: &Path, scaffold_root: &str, name: &str) -> Result<bool> {
    let relative = validate_name(name)?;
    let source = project_root.join(&relative);
    if !source.exists() {
        return Ok(false);
    }

    let file_name = relative
        .file_name()
        .ok_or_else(|| Error::InvalidPath(name.to_string()))?;
    let dest_dir = project_root.join(validate_name(scaffold_root)?);
    std::fs::create_dir_all(&dest_dir)?;
    let dest = dest_dir.join(file_name);

    std::fs::rename(&source, &dest).map_err(|e| Error::FolderMove {
        name: name.to_string(),
        reason: e.to_string(),
    })?;
    info!(from = %source.display(), to = %dest.display(), "moved into scaffold");
    Ok(true)
}

/// Delete a project-root entry (file or directory)
///
/// Returns `Ok(false)` when it does not exist.
pub fn delete(project_root: &Path, name: &str) -> Result<bool> {
    let path = project_root.join(validate_name(name)?);
    if !path.exists() {
        return Ok(false);
    }

    if path.is_dir() {
        std::fs::remove_dir_all(&path)?;
    } else {
        std::fs::remove_file(&path)?;
    }
    info!(path = %path.display(), "deleted");
    Ok(true)
}
