// tests/setup_flow.rs

//! Integration tests for the full setup flow:
//! 1. Scaffold creation plus the configured moves and deletes
//! 2. Asset bundle import from a vendor-organized content store
//! 3. Installation queue drained against a real process-backed service

use flate2::Compression;
use flate2::write::GzEncoder;
use stagehand::{
    AssetEntry, CallbackSink, FolderLayout, InstallOutcome, InstallQueue, ProcessPackageService,
    QueueConfig, SetupConfig, assets, folders,
};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;

/// Fresh project directory with starter clutter the scaffold should tidy
fn setup_project() -> TempDir {
    let project = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(project.path().join("scenes")).unwrap();
    std::fs::write(project.path().join("scenes/main.scene"), b"{}").unwrap();
    std::fs::create_dir_all(project.path().join("tutorial")).unwrap();
    std::fs::write(project.path().join("tutorial/readme.txt"), b"hello").unwrap();
    project
}

fn write_bundle(store: &Path, vendor: &str, bundle: &str, inner: &str, content: &[u8]) {
    let vendor_dir = store.join(vendor);
    std::fs::create_dir_all(&vendor_dir).unwrap();

    let file = File::create(vendor_dir.join(bundle)).unwrap();
    let enc = GzEncoder::new(file, Compression::default());
    let mut builder = tar::Builder::new(enc);

    let mut header = tar::Header::new_gnu();
    header.set_size(content.len() as u64);
    header.set_mode(0o644);
    header.set_cksum();
    builder.append_data(&mut header, inner, content).unwrap();
    builder
        .into_inner()
        .unwrap()
        .finish()
        .unwrap()
        .flush()
        .unwrap();
}

#[test]
fn test_scaffold_then_tidy() {
    let project = setup_project();
    let layout = FolderLayout::default();

    let scaffold = folders::create_tree(project.path(), &layout).unwrap();
    assert!(scaffold.join("audio/music").is_dir());
    assert!(scaffold.join("scripts").is_dir());

    // configured moves: "scenes" exists, "settings" does not
    assert!(folders::move_into(project.path(), &layout.root, "scenes").unwrap());
    assert!(!folders::move_into(project.path(), &layout.root, "settings").unwrap());
    assert!(scaffold.join("scenes/main.scene").is_file());

    // configured delete
    assert!(folders::delete(project.path(), "tutorial").unwrap());
    assert!(!project.path().join("tutorial").exists());

    // re-running the whole sequence is harmless
    folders::create_tree(project.path(), &layout).unwrap();
    assert!(!folders::move_into(project.path(), &layout.root, "scenes").unwrap());
    assert!(!folders::delete(project.path(), "tutorial").unwrap());
}

#[test]
fn test_content_store_import() {
    let project = setup_project();
    let store = tempfile::tempdir().unwrap();
    write_bundle(
        store.path(),
        "febucci",
        "text-animator.tar.gz",
        "plugins/text-animator/animator.cfg",
        b"speed=2",
    );

    let config = SetupConfig::default()
        .with_project_root(project.path())
        .with_content_dir(store.path());
    let entries = vec![
        AssetEntry {
            bundle: "text-animator.tar.gz".to_string(),
            vendor: "febucci".to_string(),
        },
        AssetEntry {
            bundle: "absent.tar.gz".to_string(),
            vendor: "febucci".to_string(),
        },
    ];

    // the absent bundle is skipped, not fatal
    assert_eq!(assets::import_group(&config, &entries), 1);
    assert_eq!(
        std::fs::read(project.path().join("plugins/text-animator/animator.cfg")).unwrap(),
        b"speed=2"
    );
}

#[cfg(unix)]
#[tokio::test]
async fn test_queue_drains_process_backed_installs() {
    // `echo` stands in for the package manager: exits 0, prints the
    // identifier it was asked to install.
    let service = Arc::new(ProcessPackageService::new(vec!["echo".to_string()]));
    let outcomes = Arc::new(Mutex::new(Vec::new()));
    let sink = {
        let outcomes = outcomes.clone();
        Arc::new(CallbackSink::new(move |outcome: &InstallOutcome| {
            outcomes.lock().unwrap().push(outcome.clone());
        }))
    };
    let config = QueueConfig {
        poll_interval: Duration::from_millis(5),
        pacing_delay: Duration::from_millis(10),
    };

    let queue = InstallQueue::new(service, sink, config);
    queue
        .submit(["com.example.animation", "com.example.sprite"])
        .await;
    queue.wait_idle().await;

    let outcomes = outcomes.lock().unwrap();
    assert_eq!(outcomes.len(), 2);
    assert_eq!(
        outcomes[0],
        InstallOutcome::Success {
            package: "com.example.animation".to_string(),
            installed: "com.example.animation".to_string(),
        }
    );
    assert!(outcomes[1].is_success());
}

#[cfg(unix)]
#[tokio::test]
async fn test_queue_survives_failing_backend() {
    // First identifier is malformed (rejected at dispatch), second runs
    // `false` and fails, neither stops the drain.
    let service = Arc::new(ProcessPackageService::new(vec!["false".to_string()]));
    let outcomes = Arc::new(Mutex::new(Vec::new()));
    let sink = {
        let outcomes = outcomes.clone();
        Arc::new(CallbackSink::new(move |outcome: &InstallOutcome| {
            outcomes.lock().unwrap().push(outcome.clone());
        }))
    };
    let config = QueueConfig {
        poll_interval: Duration::from_millis(5),
        pacing_delay: Duration::from_millis(10),
    };

    let queue = InstallQueue::new(service, sink, config);
    queue.submit(["bad name", "com.example.sprite"]).await;
    queue.wait_idle().await;

    let outcomes = outcomes.lock().unwrap();
    assert_eq!(outcomes.len(), 2);
    assert!(!outcomes[0].is_success());
    assert!(!outcomes[1].is_success());
    assert_eq!(outcomes[0].package(), "bad name");
    assert_eq!(outcomes[1].package(), "com.example.sprite");
}
