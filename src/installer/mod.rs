// src/installer/mod.rs

//! Sequential dependency-installation queue
//!
//! The one stateful component in stagehand. Callers submit batches of
//! package identifiers; a single drain task executes them strictly one at a
//! time against an external [`PackageService`], polling each dispatched
//! request to completion and pacing consecutive installations so the
//! external manager can settle between them.
//!
//! # Architecture
//!
//! ```text
//! submit([a, b]) ──► pending queue (FIFO) ──► drain task
//!                                               │
//!                                               ├─ dispatch(a) ─► handle
//!                                               ├─ poll every 10ms
//!                                               ├─ report Success/Failure
//!                                               ├─ pace 1000ms
//!                                               └─ dispatch(b) ...
//! ```
//!
//! - `queue` - the [`InstallQueue`] and its drain loop
//! - `service` - the Package Service boundary and process-backed impl
//! - `report` - outcome types and reporting sinks

pub mod queue;
pub mod report;
pub mod service;

pub use queue::{InstallQueue, QueueConfig};
pub use report::{CallbackSink, InstallOutcome, LogSink, OutcomeSink};
pub use service::{InstallHandle, InstallStatus, PackageService, ProcessPackageService};
