//! `blogconf check`: load, validate and optionally verify referenced files.

use crate::cli::{CheckArgs, expand};
use anyhow::Result;
use blogconf::config::{AssetRoots, BlogConfig, ConfigDiagnostics, ConfigError, LoadOptions};
use blogconf::log;
use std::path::Path;

pub fn run(config: &Path, args: &CheckArgs) -> Result<()> {
    let options = LoadOptions::new(expand(config)).strict(args.strict);
    let loaded = BlogConfig::load(&options)?;
    loaded.diagnostics.print_warnings();

    if args.assets {
        let roots = asset_roots(&loaded.path, args);
        blogconf::debug!(
            "check"; "public: {}, source: {}",
            roots.public.display(),
            roots.source.display()
        );

        let mut diag = ConfigDiagnostics::new();
        loaded.config.check_assets(&roots, &mut diag);
        if let Err(diag) = diag.into_result() {
            return Err(ConfigError::Schema(diag).into());
        }
    }

    log!("check"; "{} is valid", loaded.path.display());
    Ok(())
}

/// Directories next to the config, unless overridden on the command line.
fn asset_roots(config_path: &Path, args: &CheckArgs) -> AssetRoots {
    let mut roots = AssetRoots::beside(config_path);
    if let Some(public) = &args.public {
        roots.public = expand(public);
    }
    if let Some(source) = &args.source {
        roots.source = expand(source);
    }
    roots
}
