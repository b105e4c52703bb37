// src/installer/report.rs

//! Outcome reporting for the installation queue
//!
//! The queue publishes exactly one [`InstallOutcome`] per submitted request
//! through an [`OutcomeSink`]. Implementations:
//! - [`LogSink`]: reports through tracing (the default for CLI use)
//! - [`CallbackSink`]: invokes a closure per outcome (spinners, tests)

use tracing::{error, info};

/// Terminal outcome of one installation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The Package Service completed the request successfully
    Success {
        /// Identifier as submitted
        package: String,
        /// Resulting identifier reported by the service
        installed: String,
    },
    /// The request failed at dispatch or during installation
    Failure {
        /// Identifier as submitted
        package: String,
        /// Error message carried by the service
        message: String,
    },
}

impl InstallOutcome {
    /// The submitted identifier this outcome belongs to
    pub fn package(&self) -> &str {
        match self {
            Self::Success { package, .. } | Self::Failure { package, .. } => package,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Sink for per-request outcomes
///
/// Implementations must be thread-safe; the drain task reports from a
/// spawned tokio task.
pub trait OutcomeSink: Send + Sync {
    fn report(&self, outcome: &InstallOutcome);
}

/// Reports outcomes through tracing
#[derive(Debug, Default)]
pub struct LogSink;

impl LogSink {
    pub fn new() -> Self {
        Self
    }
}

impl OutcomeSink for LogSink {
    fn report(&self, outcome: &InstallOutcome) {
        match outcome {
            InstallOutcome::Success { installed, .. } => {
                info!("Installed: {}", installed);
            }
            InstallOutcome::Failure { package, message } => {
                error!("Failed to install {}: {}", package, message);
            }
        }
    }
}

/// Invokes a closure for each outcome
pub struct CallbackSink {
    callback: Box<dyn Fn(&InstallOutcome) + Send + Sync>,
}

impl CallbackSink {
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&InstallOutcome) + Send + Sync + 'static,
    {
        Self {
            callback: Box::new(callback),
        }
    }
}

impl OutcomeSink for CallbackSink {
    fn report(&self, outcome: &InstallOutcome) {
        (self.callback)(outcome);
    }
}
