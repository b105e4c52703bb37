// src/commands/mod.rs
//! Command handlers for the stagehand CLI

mod folders;
mod import;
mod install;

pub use folders::cmd_create_folders;
pub use import::{cmd_import_3d, cmd_import_essentials, cmd_import_ui};
pub use install::cmd_install_packages;
