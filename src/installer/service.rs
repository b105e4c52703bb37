// src/installer/service.rs

//! Package Service boundary
//!
//! The queue talks to the external dependency manager through the
//! [`PackageService`] trait. Dispatch never returns an error: a structurally
//! malformed identifier (or a spawn failure) yields a handle that is already
//! complete with a Failure status, so the queue classifies every request
//! through the same path.
//!
//! [`ProcessPackageService`] is the production implementation. It spawns the
//! configured package-manager command once per request and polls the child
//! with `try_wait`, so checking for completion never blocks.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::process::{Child, Command, Stdio};
use tracing::debug;

/// Completion state of a dispatched request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallStatus {
    /// Still running
    Pending,
    /// Completed successfully
    Success,
    /// Completed with an error
    Failure,
}

/// Handle to one in-flight installation request
///
/// `is_complete` is a non-blocking check and may advance internal state
/// (reaping the child process). `result` is Some only on Success, `error`
/// only on Failure.
pub trait InstallHandle: Send {
    fn is_complete(&mut self) -> bool;
    fn status(&self) -> InstallStatus;
    fn result(&self) -> Option<&str>;
    fn error(&self) -> Option<&str>;
}

/// External dependency-manager facility
pub trait PackageService: Send + Sync {
    /// Begin installing `package`, returning a pollable handle
    fn dispatch(&self, package: &str) -> Box<dyn InstallHandle>;
}

/// Handle that was born failed (malformed identifier, spawn error)
struct FailedHandle {
    message: String,
}

impl InstallHandle for FailedHandle {
    fn is_complete(&mut self) -> bool {
        true
    }

    fn status(&self) -> InstallStatus {
        InstallStatus::Failure
    }

    fn result(&self) -> Option<&str> {
        None
    }

    fn error(&self) -> Option<&str> {
        Some(&self.message)
    }
}

/// Package Service backed by an external package-manager command
///
/// The configured argv prefix (e.g. `["npm", "install"]`) is run with the
/// package identifier appended. Output is captured to temp files rather
/// than pipes so a chatty backend can never fill a pipe buffer and stall.
pub struct ProcessPackageService {
    command: Vec<String>,
}

impl ProcessPackageService {
    pub fn new(command: Vec<String>) -> Self {
        Self { command }
    }

    fn spawn(&self, package: &str) -> std::io::Result<ProcessHandle> {
        let stdout = tempfile::tempfile()?;
        let stderr = tempfile::tempfile()?;

        let child = Command::new(&self.command[0])
            .args(&self.command[1..])
            .arg(package)
            .stdin(Stdio::null())
            .stdout(Stdio::from(stdout.try_clone()?))
            .stderr(Stdio::from(stderr.try_clone()?))
            .spawn()?;

        debug!(package, pid = child.id(), "spawned package-manager process");

        Ok(ProcessHandle {
            package: package.to_string(),
            child: Some(child),
            stdout,
            stderr,
            status: InstallStatus::Pending,
            result: None,
            error: None,
        })
    }
}

impl PackageService for ProcessPackageService {
    fn dispatch(&self, package: &str) -> Box<dyn InstallHandle> {
        if !is_well_formed(package) {
            return Box::new(FailedHandle {
                message: format!("malformed package identifier: {:?}", package),
            });
        }
        if self.command.is_empty() {
            return Box::new(FailedHandle {
                message: "no package-manager command configured".to_string(),
            });
        }

        match self.spawn(package) {
            Ok(handle) => Box::new(handle),
            Err(e) => Box::new(FailedHandle {
                message: format!("failed to start {}: {}", self.command[0], e),
            }),
        }
    }
}

/// In-flight request backed by a child process
struct ProcessHandle {
    package: String,
    child: Option<Child>,
    stdout: File,
    stderr: File,
    status: InstallStatus,
    result: Option<String>,
    error: Option<String>,
}

impl ProcessHandle {
    fn finalize(&mut self, exit: std::process::ExitStatus) {
        if exit.success() {
            // The resulting identifier is the backend's last stdout line
            // when it prints one, the requested identifier otherwise.
            let installed = last_line(&mut self.stdout)
                .filter(|line| !line.is_empty())
                .unwrap_or_else(|| self.package.clone());
            self.status = InstallStatus::Success;
            self.result = Some(installed);
        } else {
            let message = last_line(&mut self.stderr)
                .filter(|line| !line.is_empty())
                .unwrap_or_else(|| format!("package manager exited with {}", exit));
            self.status = InstallStatus::Failure;
            self.error = Some(message);
        }
        self.child = None;
    }
}

impl InstallHandle for ProcessHandle {
    fn is_complete(&mut self) -> bool {
        if self.status != InstallStatus::Pending {
            return true;
        }
        let Some(child) = self.child.as_mut() else {
            return true;
        };
        match child.try_wait() {
            Ok(Some(exit)) => {
                self.finalize(exit);
                true
            }
            Ok(None) => false,
            Err(e) => {
                self.status = InstallStatus::Failure;
                self.error = Some(format!("failed to poll package manager: {}", e));
                self.child = None;
                true
            }
        }
    }

    fn status(&self) -> InstallStatus {
        self.status
    }

    fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Structural validity check for a package identifier
///
/// Identifiers are passed as a single argv element, so whitespace and shell
/// metacharacters are rejected outright. Registry names, scoped names, and
/// git URLs (`git+https://...`) all pass.
fn is_well_formed(package: &str) -> bool {
    !package.is_empty()
        && !package.chars().any(|c| {
            c.is_whitespace() || c.is_control() || matches!(c, ';' | '|' | '&' | '<' | '>' | '`' | '$' | '"' | '\'' | '\\')
        })
}

/// Rewind a capture file and return its last non-empty line, trimmed
fn last_line(file: &mut File) -> Option<String> {
    let mut text = String::new();
    file.seek(SeekFrom::Start(0)).ok()?;
    file.read_to_string(&mut text).ok()?;
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .last()
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn poll_to_completion(handle: &mut Box<dyn InstallHandle>) {
        while !handle.is_complete() {
            std::thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn test_well_formed_identifiers() {
        assert!(is_well_formed("com.example.animation"));
        assert!(is_well_formed("@scope/pkg"));
        assert!(is_well_formed("git+https://github.com/example/utils.git"));
        assert!(!is_well_formed(""));
        assert!(!is_well_formed("pkg a"));
        assert!(!is_well_formed("pkg;rm"));
        assert!(!is_well_formed("pkg$(x)"));
    }

    #[test]
    fn test_malformed_identifier_fails_immediately() {
        let service = ProcessPackageService::new(vec!["true".to_string()]);
        let mut handle = service.dispatch("not a package");
        assert!(handle.is_complete());
        assert_eq!(handle.status(), InstallStatus::Failure);
        assert!(handle.error().unwrap().contains("malformed"));
        assert!(handle.result().is_none());
    }

    #[test]
    fn test_missing_backend_fails_immediately() {
        let service =
            ProcessPackageService::new(vec!["stagehand-test-no-such-binary".to_string()]);
        let mut handle = service.dispatch("pkg.a");
        assert!(handle.is_complete());
        assert_eq!(handle.status(), InstallStatus::Failure);
        assert!(handle.error().unwrap().contains("failed to start"));
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_process_reports_result() {
        // `echo <pkg>` exits 0 and prints the identifier, which becomes
        // the reported result.
        let service = ProcessPackageService::new(vec!["echo".to_string()]);
        let mut handle = service.dispatch("pkg.a");
        poll_to_completion(&mut handle);
        assert_eq!(handle.status(), InstallStatus::Success);
        assert_eq!(handle.result(), Some("pkg.a"));
        assert!(handle.error().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_silent_success_falls_back_to_package_name() {
        let service = ProcessPackageService::new(vec!["true".to_string()]);
        let mut handle = service.dispatch("pkg.quiet");
        poll_to_completion(&mut handle);
        assert_eq!(handle.status(), InstallStatus::Success);
        assert_eq!(handle.result(), Some("pkg.quiet"));
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_process_reports_error() {
        let service = ProcessPackageService::new(vec!["false".to_string()]);
        let mut handle = service.dispatch("pkg.bad");
        poll_to_completion(&mut handle);
        assert_eq!(handle.status(), InstallStatus::Failure);
        assert!(handle.error().is_some());
        assert!(handle.result().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_stderr_message_is_captured() {
        let service = ProcessPackageService::new(vec![
            "sh".to_string(),
            "-c".to_string(),
            "echo 'resolution conflict' >&2; exit 1".to_string(),
        ]);
        // sh -c '<script>' <pkg> passes the identifier as $0
        let mut handle = service.dispatch("pkg.conflict");
        poll_to_completion(&mut handle);
        assert_eq!(handle.status(), InstallStatus::Failure);
        assert_eq!(handle.error(), Some("resolution conflict"));
    }
}
