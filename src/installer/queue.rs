// src/installer/queue.rs

//! The installation queue and its drain task
//!
//! # Design
//!
//! All state lives behind one `Mutex`: the pending FIFO and a flag marking
//! whether a drain task is running. `submit` only ever appends; the drain
//! task is the only consumer and the only code that dispatches to the
//! Package Service. The drain is an explicit loop in a single spawned task,
//! so there is at most one request in flight at any time and the call stack
//! stays flat no matter how many requests are processed.
//!
//! Requests complete in exact global FIFO order across all `submit` calls.
//! A failed request is reported and skipped past; nothing halts the queue.
//! There is no per-request timeout: a handle that never completes is polled
//! indefinitely.

use crate::installer::report::{InstallOutcome, OutcomeSink};
use crate::installer::service::{InstallStatus, PackageService};
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, watch};
use tokio::time::sleep;
use tracing::debug;

/// Timing knobs for the drain loop
#[derive(Debug, Clone, Copy)]
pub struct QueueConfig {
    /// Interval between completion polls of the in-flight request
    pub poll_interval: Duration,
    /// Settle time between consecutive installations
    pub pacing_delay: Duration,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(10),
            pacing_delay: Duration::from_millis(1000),
        }
    }
}

impl From<&crate::config::InstallConfig> for QueueConfig {
    fn from(config: &crate::config::InstallConfig) -> Self {
        Self {
            poll_interval: config.poll_interval(),
            pacing_delay: config.pacing_delay(),
        }
    }
}

struct State {
    pending: VecDeque<String>,
    draining: bool,
}

struct Inner {
    service: Arc<dyn PackageService>,
    sink: Arc<dyn OutcomeSink>,
    config: QueueConfig,
    state: Mutex<State>,
    idle_tx: watch::Sender<bool>,
}

/// Sequential installation queue
///
/// Owns the pending FIFO exclusively. Cheap to clone; clones share the
/// same queue.
#[derive(Clone)]
pub struct InstallQueue {
    inner: Arc<Inner>,
    idle_rx: watch::Receiver<bool>,
}

impl InstallQueue {
    pub fn new(
        service: Arc<dyn PackageService>,
        sink: Arc<dyn OutcomeSink>,
        config: QueueConfig,
    ) -> Self {
        let (idle_tx, idle_rx) = watch::channel(true);
        Self {
            inner: Arc::new(Inner {
                service,
                sink,
                config,
                state: Mutex::new(State {
                    pending: VecDeque::new(),
                    draining: false,
                }),
                idle_tx,
            }),
            idle_rx,
        }
    }

    /// Append a batch of package identifiers, preserving order
    ///
    /// Starts the drain task if one is not already running. An empty batch
    /// is a no-op. May be called at any time, including mid-drain; later
    /// batches queue up behind everything already pending.
    pub async fn submit<I, S>(&self, batch: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut state = self.inner.state.lock().await;
        let before = state.pending.len();
        state.pending.extend(batch.into_iter().map(Into::into));
        if state.pending.len() == before {
            return;
        }
        debug!(
            queued = state.pending.len() - before,
            pending = state.pending.len(),
            "submitted installation batch"
        );
        if !state.draining {
            state.draining = true;
            let _ = self.inner.idle_tx.send(false);
            let inner = self.inner.clone();
            tokio::spawn(async move {
                inner.drain().await;
            });
        }
    }

    /// Wait until the queue is empty and no request is in flight
    pub async fn wait_idle(&self) {
        let mut rx = self.idle_rx.clone();
        // Closed sender is unreachable while `inner` is alive
        let _ = rx.wait_for(|idle| *idle).await;
    }

    /// Number of requests still pending (excludes the in-flight one)
    pub async fn pending(&self) -> usize {
        self.inner.state.lock().await.pending.len()
    }

    /// True when no drain is running and nothing is pending
    pub fn is_idle(&self) -> bool {
        *self.idle_rx.borrow()
    }
}

impl Inner {
    /// The drain task: one long-lived loop, one request in flight at a time
    async fn drain(self: Arc<Self>) {
        loop {
            let package = {
                let mut state = self.state.lock().await;
                match state.pending.pop_front() {
                    Some(package) => package,
                    None => {
                        state.draining = false;
                        let _ = self.idle_tx.send(true);
                        return;
                    }
                }
            };

            debug!(package, "dispatching installation request");
            let mut handle = self.service.dispatch(&package);
            while !handle.is_complete() {
                sleep(self.config.poll_interval).await;
            }

            let outcome = match handle.status() {
                InstallStatus::Success => InstallOutcome::Success {
                    installed: handle.result().unwrap_or(&package).to_string(),
                    package,
                },
                _ => InstallOutcome::Failure {
                    message: handle
                        .error()
                        .unwrap_or("installation failed")
                        .to_string(),
                    package,
                },
            };
            self.sink.report(&outcome);

            // Pace before the next dispatch; the external manager may need
            // to settle (manifest resolution) between installations.
            let more_pending = !self.state.lock().await.pending.is_empty();
            if more_pending {
                sleep(self.config.pacing_delay).await;
            }
        }
    }
}
