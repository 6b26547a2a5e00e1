//! `blogconf init`: write a starter config.

use crate::cli::expand;
use anyhow::{Context, Result, bail};
use blogconf::config::template;
use blogconf::log;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Write the template to `<dir>/<config>` (or print it with `dry`).
pub fn run(dir: Option<&Path>, config: &Path, dry: bool, force: bool) -> Result<()> {
    let content = template::generate();
    if dry {
        print!("{content}");
        return Ok(());
    }

    let path = target_path(dir, config);
    write_config(&path, &content, force)?;
    log!("init"; "wrote {}", path.display());
    Ok(())
}

/// Where the config goes: an absolute `-C` wins over `dir`.
fn target_path(dir: Option<&Path>, config: &Path) -> PathBuf {
    let config = expand(config);
    if config.is_absolute() {
        return config;
    }
    match dir {
        Some(dir) => expand(dir).join(config),
        None => config,
    }
}

fn write_config(path: &Path, content: &str, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "'{}' already exists.\n\
             Use `blogconf init --force` to overwrite it.",
            path.display()
        );
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write '{}'", path.display()))
}
