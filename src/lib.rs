// src/lib.rs

//! Stagehand project bootstrap
//!
//! One-time project setup: folder scaffolding, asset bundle import from a
//! local content store, and paced sequential installation of named
//! dependencies through an external package manager.
//!
//! # Architecture
//!
//! - The only stateful component is [`installer::InstallQueue`]: a strict
//!   FIFO drained by a single task, one request in flight at a time, with a
//!   settle delay between installations
//! - The package manager sits behind the [`installer::PackageService`]
//!   trait; the production impl shells out per request
//! - Asset import and folder operations are direct, synchronous, and
//!   per-item fallible without aborting their batch

pub mod assets;
pub mod config;
mod error;
pub mod folders;
pub mod installer;

pub use config::{AssetEntry, AssetGroups, FolderLayout, InstallConfig, SetupConfig};
pub use error::{Error, Result};
pub use installer::{
    CallbackSink, InstallHandle, InstallOutcome, InstallQueue, InstallStatus, LogSink,
    OutcomeSink, PackageService, ProcessPackageService, QueueConfig,
};
