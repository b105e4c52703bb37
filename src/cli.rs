// src/cli.rs
//! CLI definitions for stagehand
//!
//! This module contains the command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stagehand")]
#[command(author = "Stagehand Project")]
#[command(version)]
#[command(about = "One-time project setup: scaffold folders, import asset bundles, install dependencies", long_about = None)]
pub struct Cli {
    /// Path to the setup configuration file
    #[arg(short, long, global = true, default_value = "stagehand.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Import the essential asset bundles from the content store
    ImportEssentials,

    /// Import the UI asset bundles
    ImportUi,

    /// Import the 3D asset bundles
    Import3d,

    /// Install the configured dependencies, one at a time
    InstallPackages,

    /// Create the project folder scaffold and tidy starter clutter
    CreateFolders,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
