//! Process-wide config with atomic reload support.
//!
//! Uses `arc-swap` for lock-free reads and atomic config replacement.
//! Readers hold an `Arc<BlogConfig>` snapshot; a reload validates the new
//! record set first and then swaps the single reference, so nobody ever
//! observes a half-updated configuration.

use crate::config::{BlogConfig, ConfigDiagnostics, ConfigError, LoadOptions};
use crate::utils::hash;
use arc_swap::ArcSwap;
use parking_lot::Mutex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

/// Current validated config plus what is needed to reload it.
pub struct ConfigHandle {
    current: ArcSwap<BlogConfig>,
    path: PathBuf,
    strict: bool,
    /// Hash of the source text behind `current`.
    ///
    /// Held for the whole reload so the hash and the swap change together.
    hash: Mutex<u64>,
}

/// Result of [`ConfigHandle::reload`].
#[derive(Debug)]
pub enum Reload {
    /// Source text unchanged, nothing swapped.
    Unchanged,
    /// New record set stored, with its warnings.
    Updated(ConfigDiagnostics),
}

impl ConfigHandle {
    /// Load the config once and wrap it.
    pub fn open(options: &LoadOptions) -> Result<(Self, ConfigDiagnostics), ConfigError> {
        let loaded = BlogConfig::load(options)?;
        let handle = Self {
            current: ArcSwap::from_pointee(loaded.config),
            path: loaded.path,
            strict: options.strict,
            hash: Mutex::new(loaded.hash),
        };
        Ok((handle, loaded.diagnostics))
    }

    /// Wrap an already validated config read from `path`.
    pub fn new(config: BlogConfig, path: impl Into<PathBuf>, source_hash: u64) -> Self {
        Self {
            current: ArcSwap::from_pointee(config),
            path: path.into(),
            strict: false,
            hash: Mutex::new(source_hash),
        }
    }

    /// Snapshot of the current record set.
    #[inline]
    pub fn get(&self) -> Arc<BlogConfig> {
        self.current.load_full()
    }

    /// Config file this handle reloads from.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reload from disk if the content changed.
    ///
    /// On error the previous record set stays in place. Concurrent reloads
    /// run one at a time; readers are never blocked.
    pub fn reload(&self) -> Result<Reload, ConfigError> {
        let mut current_hash = self.hash.lock();

        let content = fs::read_to_string(&self.path)
            .map_err(|err| ConfigError::Io(self.path.clone(), err))?;
        let new_hash = hash::compute(content.as_bytes());

        if new_hash == *current_hash {
            return Ok(Reload::Unchanged);
        }

        let (config, diagnostics) = BlogConfig::check_source(&content, &self.path, self.strict)?;
        self.current.store(Arc::new(config));
        *current_hash = new_hash;

        Ok(Reload::Updated(diagnostics))
    }
}

/// Global handle storage.
static HANDLE: OnceLock<ConfigHandle> = OnceLock::new();

/// Install the process-wide handle. The first call wins.
pub fn init_config(handle: ConfigHandle) -> &'static ConfigHandle {
    HANDLE.get_or_init(|| handle)
}

/// Process-wide handle, if installed.
#[inline]
pub fn handle() -> Option<&'static ConfigHandle> {
    HANDLE.get()
}

/// Snapshot of the process-wide config, if installed.
#[inline]
pub fn cfg() -> Option<Arc<BlogConfig>> {
    HANDLE.get().map(ConfigHandle::get)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config_source;

    fn write(path: &Path, content: &str) {
        fs::write(path, content).unwrap();
    }

    fn open(path: &Path) -> ConfigHandle {
        let options = LoadOptions::new(path);
        ConfigHandle::open(&options).unwrap().0
    }

    #[test]
    fn test_reload_unchanged_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blog.toml");
        write(&path, &test_config_source(""));

        let handle = open(&path);
        let before = handle.get();
        assert!(matches!(handle.reload().unwrap(), Reload::Unchanged));
        assert!(Arc::ptr_eq(&before, &handle.get()));
    }

    #[test]
    fn test_reload_swaps_whole_record_set() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blog.toml");
        write(&path, &test_config_source(""));

        let handle = open(&path);
        let before = handle.get();

        write(&path, &test_config_source("").replace("hue = 250", "hue = 345"));
        assert!(matches!(handle.reload().unwrap(), Reload::Updated(_)));

        let after = handle.get();
        assert_eq!(after.site.theme_color.hue.get(), 345);
        // Old snapshot untouched
        assert_eq!(before.site.theme_color.hue.get(), 250);
    }

    #[test]
    fn test_failed_reload_keeps_previous() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blog.toml");
        write(&path, &test_config_source(""));

        let handle = open(&path);
        write(&path, &test_config_source("").replace("depth = 2", "depth = 9"));

        let err = handle.reload().unwrap_err();
        assert_eq!(err.schema_errors()[0].field, "toc.depth");
        assert_eq!(handle.get().site.toc.depth.get(), 2);

        // Fixing the file is picked up afterwards
        write(&path, &test_config_source("").replace("depth = 2", "depth = 3"));
        assert!(matches!(handle.reload().unwrap(), Reload::Updated(_)));
        assert_eq!(handle.get().site.toc.depth.get(), 3);
    }

    #[test]
    fn test_concurrent_reloads_swap_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blog.toml");
        write(&path, &test_config_source(""));

        let handle = open(&path);
        write(&path, &test_config_source("").replace("hue = 250", "hue = 120"));

        let results: Vec<_> = std::thread::scope(|s| {
            let workers: Vec<_> = (0..4).map(|_| s.spawn(|| handle.reload().unwrap())).collect();
            workers.into_iter().map(|w| w.join().unwrap()).collect()
        });

        let updated = results.iter().filter(|r| matches!(r, Reload::Updated(_))).count();
        assert_eq!(updated, 1);
        assert_eq!(handle.get().site.theme_color.hue.get(), 120);
        assert!(matches!(handle.reload().unwrap(), Reload::Unchanged));
    }

    #[test]
    fn test_global_handle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blog.toml");
        write(&path, &test_config_source(""));

        let installed = init_config(open(&path));
        assert!(std::ptr::eq(installed, handle().unwrap()));
        assert_eq!(cfg().unwrap().site.title, "Fuwari");
    }

    #[test]
    fn test_reload_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blog.toml");
        write(&path, &test_config_source(""));

        let handle = open(&path);
        fs::remove_file(&path).unwrap();
        assert!(matches!(handle.reload(), Err(ConfigError::Io(..))));
    }
}
