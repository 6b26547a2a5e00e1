//! Command-line interface module.

mod args;
pub mod check;
pub mod dump;
pub mod init;
pub mod watch;

pub use args::{CheckArgs, Cli, Commands, DumpFormat};

use std::path::{Path, PathBuf};

/// Expand a leading `~` in a user-supplied path.
pub fn expand(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(text) => PathBuf::from(shellexpand::tilde(text).into_owned()),
        None => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_plain_path_unchanged() {
        assert_eq!(expand(Path::new("site/blog.toml")), PathBuf::from("site/blog.toml"));
    }

    #[test]
    fn test_expand_tilde() {
        let expanded = expand(Path::new("~/blog.toml"));
        assert!(!expanded.starts_with("~") || std::env::var_os("HOME").is_none());
    }
}
