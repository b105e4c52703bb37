// src/commands/install.rs

//! Dependency installation command
//!
//! Drives the installation queue to completion on a current-thread runtime.
//! Individual failures are reported and do not stop the batch; the command
//! itself fails only when the backend binary is missing or the
//! configuration cannot be read.

use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use stagehand::{
    CallbackSink, InstallOutcome, InstallQueue, ProcessPackageService, QueueConfig, SetupConfig,
};
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Install every configured package, strictly one at a time
pub fn cmd_install_packages(config_path: &Path) -> Result<()> {
    let config = SetupConfig::load_or_default(config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    if config.packages.is_empty() {
        println!("No packages configured.");
        return Ok(());
    }
    let Some(program) = config.install.command.first() else {
        bail!("install.command is empty; configure your package manager");
    };
    which::which(program)
        .with_context(|| format!("package manager '{}' not found on PATH", program))?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(format!(
        "Installing {} package(s) via {}",
        config.packages.len(),
        program
    ));

    let succeeded = Arc::new(AtomicUsize::new(0));
    let failed = Arc::new(AtomicUsize::new(0));
    let sink = {
        let spinner = spinner.clone();
        let succeeded = succeeded.clone();
        let failed = failed.clone();
        Arc::new(CallbackSink::new(move |outcome: &InstallOutcome| {
            match outcome {
                InstallOutcome::Success { installed, .. } => {
                    succeeded.fetch_add(1, Ordering::Relaxed);
                    spinner.println(format!("  [OK] {}", installed));
                }
                InstallOutcome::Failure { package, message } => {
                    failed.fetch_add(1, Ordering::Relaxed);
                    spinner.println(format!("  [FAILED] {}: {}", package, message));
                }
            }
        }))
    };

    let service = Arc::new(ProcessPackageService::new(config.install.command.clone()));
    let queue = InstallQueue::new(service, sink, QueueConfig::from(&config.install));

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    rt.block_on(async {
        queue.submit(config.packages.clone()).await;
        queue.wait_idle().await;
    });

    spinner.finish_and_clear();
    println!(
        "Done: {} installed, {} failed.",
        succeeded.load(Ordering::Relaxed),
        failed.load(Ordering::Relaxed)
    );
    Ok(())
}
