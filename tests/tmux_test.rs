//! Tests against a live tmux server
//!
//! These tests require tmux to be installed and available; they skip
//! themselves otherwise. Each test uses its own session name and kills it
//! when done.

use std::path::Path;
use std::time::Duration;

use tempfile::TempDir;

use aspnet_scaffolder::dispatch::{CommandDispatcher, SessionRegistry};
use aspnet_scaffolder::tmux::{SessionBackend, TmuxExecutor};

/// Helper to check if tmux is available
async fn tmux_available() -> bool {
    tokio::process::Command::new("tmux")
        .arg("-V")
        .output()
        .await
        .map(|o| o.status.success())
        .unwrap_or(false)
}

fn unique_name(test: &str) -> String {
    format!("aspnet-scaffolder-test-{}-{}", test, std::process::id())
}

/// Wait for a file the session is expected to write
async fn wait_for_file(path: &Path) -> Option<String> {
    for _ in 0..50 {
        if let Ok(content) = tokio::fs::read_to_string(path).await {
            if !content.trim().is_empty() {
                return Some(content);
            }
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    None
}

#[tokio::test]
async fn test_session_created_once_and_reused() {
    if !tmux_available().await {
        eprintln!("Skipping test: tmux not available");
        return;
    }

    let name = unique_name("reuse");
    let tmux = TmuxExecutor::new();
    let registry = SessionRegistry::new(tmux.clone(), &name);

    let first = registry.find_or_create(None).await.unwrap();
    assert!(first.created);

    let second = registry.find_or_create(None).await.unwrap();
    assert!(!second.created);
    assert!(tmux.exists(&name).await.unwrap());

    // Closed by hand: next lookup creates it again
    tmux.kill_session(&name).await.unwrap();
    assert!(!tmux.exists(&name).await.unwrap());

    let third = registry.find_or_create(None).await.unwrap();
    assert!(third.created);

    tmux.kill_session(&name).await.unwrap();
}

#[tokio::test]
async fn test_dispatch_runs_in_working_dir() {
    if !tmux_available().await {
        eprintln!("Skipping test: tmux not available");
        return;
    }

    let name = unique_name("cwd");
    let work_dir = TempDir::new().unwrap();
    let work_path = work_dir.path().canonicalize().unwrap();

    let tmux = TmuxExecutor::new();
    let dispatcher = CommandDispatcher::new(SessionRegistry::new(tmux.clone(), &name));

    dispatcher
        .run("pwd > where.txt", Some(&work_path))
        .await
        .unwrap();

    let written = wait_for_file(&work_path.join("where.txt")).await;
    tmux.kill_session(&name).await.unwrap();

    let written = written.expect("session never wrote where.txt");
    assert_eq!(
        Path::new(written.trim()).canonicalize().unwrap(),
        work_path
    );
}

#[tokio::test]
async fn test_missing_session_does_not_exist() {
    if !tmux_available().await {
        eprintln!("Skipping test: tmux not available");
        return;
    }

    let tmux = TmuxExecutor::new();
    assert!(!tmux.exists(&unique_name("absent")).await.unwrap());
}

#[tokio::test]
async fn test_session_names_are_not_prefix_matched() {
    if !tmux_available().await {
        eprintln!("Skipping test: tmux not available");
        return;
    }

    let short = unique_name("prefix");
    let long = format!("{}-long", short);
    let tmux = TmuxExecutor::new();

    tmux.create(&long, None).await.unwrap();

    assert!(!tmux.exists(&short).await.unwrap());
    // Must not reach the longer session
    assert!(tmux.kill_session(&short).await.is_err());
    assert!(tmux.send_line(&short, "exit").await.is_err());
    assert!(tmux.exists(&long).await.unwrap());

    tmux.kill_session(&long).await.unwrap();
}
