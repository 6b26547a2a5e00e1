//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Syntax of a config source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Toml,
    Json,
}

impl SourceFormat {
    /// Pick the format from the file extension, TOML unless it is `.json`.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the path to the config file if found
///
/// # Example
/// ```text
/// /home/user/blog/src/content/posts/  ← cwd
/// /home/user/blog/blog.toml           ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_from(&cwd, config_name)
}

/// Same as [`find_config_file`], starting from `start`.
pub fn find_config_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(SourceFormat::from_path(Path::new("blog.toml")), SourceFormat::Toml);
        assert_eq!(SourceFormat::from_path(Path::new("blog.JSON")), SourceFormat::Json);
        assert_eq!(SourceFormat::from_path(Path::new("blog")), SourceFormat::Toml);
    }

    #[test]
    fn test_find_config_walks_upward() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("src/content/posts");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("blog.toml"), "").unwrap();

        let found = find_config_from(&nested, Path::new("blog.toml")).unwrap();
        assert_eq!(found, dir.path().join("blog.toml"));
    }

    #[test]
    fn test_find_config_ignores_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a/blog.toml")).unwrap();
        fs::write(dir.path().join("blog.toml"), "").unwrap();

        let found = find_config_from(&dir.path().join("a"), Path::new("blog.toml")).unwrap();
        assert_eq!(found, dir.path().join("blog.toml"));
    }

    #[test]
    fn test_find_config_absolute() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.json");
        assert_eq!(find_config_from(Path::new("/"), &path), None);

        fs::write(&path, "{}").unwrap();
        assert_eq!(find_config_from(Path::new("/"), &path), Some(path));
    }
}
