//! Terminal output with colored prefixes and a watch-mode status block.
//!
//! - `log!` prints one line with a colored `[module]` prefix
//! - `debug!` does the same, only with `--verbose`
//! - [`WatchStatus`] keeps a single status block that each update overwrites
//!
//! # Example
//!
//! ```ignore
//! log!("check"; "{} is valid", path.display());
//! debug!("config"; "searching upward for {}", name);
//! logger::status().reloaded("blog.toml");
//! ```

use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use owo_colors::OwoColorize;
use parking_lot::{Mutex, MutexGuard};
use std::{
    io::{Write, stdout},
    sync::LazyLock,
    sync::atomic::{AtomicBool, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::Relaxed);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

/// Log a message with a colored module prefix
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module);
    let mut stdout = stdout().lock();
    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Apply color to a module prefix based on module type
fn colorize_prefix(module: &str) -> String {
    let prefix = format!("[{module}]");
    match module.to_ascii_lowercase().as_str() {
        "error" => prefix.bright_red().bold().to_string(),
        "warning" => prefix.yellow().bold().to_string(),
        "watch" => prefix.bright_green().bold().to_string(),
        "config" => prefix.bright_blue().bold().to_string(),
        _ => prefix.bright_yellow().bold().to_string(),
    }
}

// ============================================================================
// Watch Status (single block with overwrite)
// ============================================================================

/// Wall clock as `HH:MM:SS` (UTC).
fn clock() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs());
    format!(
        "{:02}:{:02}:{:02}",
        (secs / 3600) % 24,
        (secs / 60) % 60,
        secs % 60
    )
}

/// Status block for `watch` mode.
///
/// Every update replaces the previous block, so a fixed config clears a
/// stale error listing.
///
/// # Example
///
/// ```ignore
/// let mut status = WatchStatus::new();
/// status.reloaded("blog.toml");
/// status.failed("reload failed, keeping previous config", &diag.to_string());
/// ```
pub struct WatchStatus {
    /// Lines printed by the previous update
    last_lines: usize,
}

/// Shared by the reload loop and the file watcher's event thread.
static WATCH_STATUS: LazyLock<Mutex<WatchStatus>> =
    LazyLock::new(|| Mutex::new(WatchStatus::new()));

/// Lock the global watch status block.
pub fn status() -> MutexGuard<'static, WatchStatus> {
    WATCH_STATUS.lock()
}

impl WatchStatus {
    pub const fn new() -> Self {
        Self { last_lines: 0 }
    }

    /// New config in place (✓, green).
    pub fn reloaded(&mut self, message: &str) {
        self.display(&"✓".green().to_string(), message);
    }

    /// Event seen but content identical (dimmed).
    pub fn unchanged(&mut self, message: &str) {
        self.display("", &message.dimmed().to_string());
    }

    /// Reload rejected (✗, red), `detail` on the following lines.
    pub fn failed(&mut self, summary: &str, detail: &str) {
        self.display(&"✗".red().to_string(), &compose(summary, detail));
    }

    /// Reload accepted with warnings (⚠, yellow).
    pub fn warned(&mut self, summary: &str, detail: &str) {
        self.display(&"⚠".yellow().to_string(), &compose(summary, detail));
    }

    fn display(&mut self, symbol: &str, message: &str) {
        let mut stdout = stdout().lock();

        if self.last_lines > 0 {
            let lines = u16::try_from(self.last_lines).unwrap_or(u16::MAX);
            execute!(stdout, cursor::MoveUp(lines), Clear(ClearType::FromCursorDown)).ok();
        }

        let timestamp = format!("[{}]", clock()).dimmed().to_string();
        if symbol.is_empty() {
            writeln!(stdout, "{timestamp} {message}").ok();
        } else {
            writeln!(stdout, "{timestamp} {symbol} {message}").ok();
        }
        stdout.flush().ok();

        self.last_lines = line_count(message);
    }
}

impl Default for WatchStatus {
    fn default() -> Self {
        Self::new()
    }
}

fn compose(summary: &str, detail: &str) -> String {
    let detail = detail.trim_end();
    if detail.is_empty() {
        summary.to_string()
    } else {
        format!("{summary}\n{detail}")
    }
}

/// Terminal lines taken by a message.
fn line_count(message: &str) -> usize {
    message.matches('\n').count() + 1
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_status_starts_empty() {
        assert_eq!(WatchStatus::new().last_lines, 0);
    }

    #[test]
    fn test_compose_detail() {
        assert_eq!(compose("reload failed", ""), "reload failed");
        assert_eq!(
            compose("reload failed", "error: `toc.depth` not in [1,3]\n"),
            "reload failed\nerror: `toc.depth` not in [1,3]"
        );
    }

    #[test]
    fn test_line_count() {
        assert_eq!(line_count("blog.toml"), 1);
        assert_eq!(line_count(&compose("reload failed", "a\nb")), 3);
    }

    #[test]
    fn test_clock_format() {
        let clock = clock();
        assert_eq!(clock.len(), 8);
        assert_eq!(clock.matches(':').count(), 2);
    }
}
