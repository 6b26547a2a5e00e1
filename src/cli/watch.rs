//! `blogconf watch`: reload the config whenever its file changes.
//!
//! ```text
//! notify (event thread) → mpsc → debounce → ConfigHandle::reload → WatchStatus
//! ```

use crate::cli::expand;
use anyhow::{Context, Result};
use blogconf::config::{ConfigError, ConfigHandle, LoadOptions, Reload, init_config};
use blogconf::utils::plural_count;
use blogconf::{log, logger};
use notify::{Event, EventKind, RecursiveMode, Watcher, event::ModifyKind};
use std::ffi::OsStr;
use std::path::Path;
use std::sync::mpsc;
use std::time::{Duration, Instant};

/// Quiet period before a burst of events triggers one reload.
const DEBOUNCE: Duration = Duration::from_millis(300);

pub fn run(config: &Path, strict: bool) -> Result<()> {
    let options = LoadOptions::new(expand(config)).strict(strict);
    let (handle, diagnostics) = ConfigHandle::open(&options)?;
    let handle = init_config(handle);
    diagnostics.print_warnings();

    let path = handle.path().to_path_buf();
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path.file_name().context("config path has no file name")?;

    // Watch the directory: editors often replace the file instead of writing it
    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
        Ok(event) => {
            let _ = tx.send(event);
        }
        Err(e) => logger::status().failed("file watcher error", &e.to_string()),
    })?;
    watcher.watch(dir, RecursiveMode::NonRecursive)?;

    log!("watch"; "watching {}", path.display());

    while let Ok(event) = rx.recv() {
        if !touches(&event, file_name) {
            continue;
        }
        blogconf::debug!("watch"; "{:?} {:?}", event.kind, event.paths);

        settle(&rx, file_name, DEBOUNCE);
        report(handle, &file_name.to_string_lossy());
    }

    Ok(())
}

/// Wait until the watched file has been quiet for `quiet`.
///
/// Events for other files in the directory are consumed but do not extend
/// the wait.
fn settle(rx: &mpsc::Receiver<Event>, file_name: &OsStr, quiet: Duration) {
    let mut deadline = Instant::now() + quiet;
    while let Ok(event) = rx.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
        if touches(&event, file_name) {
            deadline = Instant::now() + quiet;
        }
    }
}

/// Whether `event` is a content change of the watched file.
fn touches(event: &Event, file_name: &OsStr) -> bool {
    let relevant = match event.kind {
        EventKind::Create(_) | EventKind::Remove(_) => true,
        EventKind::Modify(modify) => !matches!(modify, ModifyKind::Metadata(_)),
        _ => false,
    };
    relevant
        && event
            .paths
            .iter()
            .any(|p| p.file_name() == Some(file_name))
}

fn report(handle: &ConfigHandle, name: &str) {
    let result = handle.reload();
    let mut status = logger::status();

    match result {
        Ok(Reload::Unchanged) => status.unchanged(&format!("{name} unchanged")),
        Ok(Reload::Updated(diag)) if diag.warnings().is_empty() => {
            status.reloaded(&format!("reloaded {name}"));
        }
        Ok(Reload::Updated(diag)) => {
            let detail: Vec<String> = diag.warnings().iter().map(ToString::to_string).collect();
            status.warned(
                &format!(
                    "reloaded {name} with {}",
                    plural_count(diag.warnings().len(), "warning")
                ),
                &detail.join("\n"),
            );
        }
        Err(err) => status.failed(
            &format!("{name} rejected, keeping previous config"),
            &describe(err),
        ),
    }
}

/// Full error text, including the underlying parser message.
fn describe(err: ConfigError) -> String {
    match err {
        ConfigError::Schema(diag) => diag.to_string(),
        other => format!("{:#}", anyhow::Error::from(other)),
    }
}
