//! URL-or-path values.
//!
//! Every `src`, `avatar` and `url` field accepts one of:
//!
//! | Form            | Example                           | Resolved against      |
//! |-----------------|-----------------------------------|-----------------------|
//! | absolute URL    | `https://github.com/x`, `mailto:` | -                     |
//! | root-relative   | `/favicon/icon-32.png`            | public assets root    |
//! | asset-relative  | `assets/images/avatar.png`        | source assets root    |
//! | fragment        | `#`, `#contact`                   | current page          |
//!
//! The author's text is kept verbatim; the classification is derived from it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use url::Url;

/// A validated URL-or-path value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Location {
    raw: String,
    kind: LocationKind,
}

/// Classification of a [`Location`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationKind {
    /// Has a scheme (`https:`, `mailto:` ...).
    Absolute(Url),
    /// Starts with `/`, served from the public assets root.
    Root,
    /// Relative path under the source assets root.
    Asset,
    /// In-page anchor, `#` alone is a placeholder link.
    Fragment,
}

impl Location {
    pub fn parse(raw: impl Into<String>) -> Result<Self, String> {
        let raw = raw.into();
        let kind = classify(&raw)?;
        Ok(Self { raw, kind })
    }

    /// The text exactly as written in the config.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    #[inline]
    pub fn kind(&self) -> &LocationKind {
        &self.kind
    }

    #[inline]
    pub fn is_absolute(&self) -> bool {
        matches!(self.kind, LocationKind::Absolute(_))
    }

    /// Whether this points at a file the site ships (root or asset relative).
    #[inline]
    pub fn is_local(&self) -> bool {
        matches!(self.kind, LocationKind::Root | LocationKind::Asset)
    }

    /// Resolve against the site's asset roots.
    pub fn resolve(&self, roots: &AssetRoots) -> Resolved<'_> {
        match &self.kind {
            LocationKind::Absolute(url) => Resolved::Url(url),
            LocationKind::Fragment => Resolved::Fragment(&self.raw),
            LocationKind::Root => {
                Resolved::File(roots.public.join(strip_suffixes(&self.raw).trim_start_matches('/')))
            }
            LocationKind::Asset => Resolved::File(roots.source.join(strip_suffixes(&self.raw))),
        }
    }
}

/// Drop `?query` and `#fragment` so the rest can be used as a file path.
fn strip_suffixes(raw: &str) -> &str {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    &raw[..end]
}

fn classify(raw: &str) -> Result<LocationKind, String> {
    if raw.is_empty() {
        return Err("must not be empty".into());
    }
    if raw.trim() != raw {
        return Err("has leading or trailing whitespace".into());
    }
    if raw.chars().any(char::is_control) {
        return Err("contains control characters".into());
    }
    if raw.starts_with("//") {
        return Err("protocol-relative URL is not supported, add a scheme such as `https:`".into());
    }
    if raw.starts_with('/') {
        return Ok(LocationKind::Root);
    }
    if raw.starts_with('#') {
        return Ok(LocationKind::Fragment);
    }

    match Url::parse(raw) {
        Ok(url) => {
            if matches!(url.scheme(), "http" | "https") && url.host_str().is_none_or(str::is_empty) {
                return Err("URL must have a valid host".into());
            }
            Ok(LocationKind::Absolute(url))
        }
        Err(url::ParseError::RelativeUrlWithoutBase) if !raw.contains("://") => {
            Ok(LocationKind::Asset)
        }
        Err(e) => Err(format!("not a well-formed URL: {e}")),
    }
}

impl TryFrom<String> for Location {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(raw)
    }
}

impl From<Location> for String {
    fn from(location: Location) -> Self {
        location.raw
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

// ============================================================================
// resolution
// ============================================================================

/// Directories local locations are resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRoots {
    /// Target of root-relative (`/...`) locations.
    pub public: PathBuf,
    /// Target of asset-relative locations.
    pub source: PathBuf,
}

impl AssetRoots {
    /// Conventional layout next to the config file: `public/` and `src/`.
    pub fn beside(config_path: &Path) -> Self {
        let root = config_path.parent().unwrap_or_else(|| Path::new(""));
        Self {
            public: root.join("public"),
            source: root.join("src"),
        }
    }
}

/// Outcome of [`Location::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved<'a> {
    Url(&'a Url),
    File(PathBuf),
    Fragment(&'a str),
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_forms() {
        let cases = [
            ("https://github.com/2064878930", "absolute"),
            ("mailto:someone@example.com", "absolute"),
            ("/favicon/favicon-light-32.png", "root"),
            ("assets/images/avatar.png", "asset"),
            ("#", "fragment"),
            ("#contact", "fragment"),
        ];
        for (raw, expected) in cases {
            let location = Location::parse(raw).unwrap();
            let kind = match location.kind() {
                LocationKind::Absolute(_) => "absolute",
                LocationKind::Root => "root",
                LocationKind::Asset => "asset",
                LocationKind::Fragment => "fragment",
            };
            assert_eq!(kind, expected, "{raw}");
        }
    }

    #[test]
    fn test_raw_text_is_kept_verbatim() {
        // url::Url would normalize this to "https://example.com/"
        let location = Location::parse("https://example.com").unwrap();
        assert_eq!(location.as_str(), "https://example.com");
        assert_eq!(String::from(location), "https://example.com");
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(Location::parse("").is_err());
        assert!(Location::parse(" https://example.com").is_err());
        assert!(Location::parse("//cdn.example.com/a.png").is_err());
        assert!(Location::parse("https://").is_err());
        assert!(Location::parse("http://exa mple.com").is_err());
        assert!(Location::parse("bad\u{7}path").is_err());
    }

    #[test]
    fn test_malformed_reason_mentions_url() {
        let reason = Location::parse("https://exa mple.com").unwrap_err();
        assert!(reason.contains("not a well-formed URL"), "{reason}");
    }

    #[test]
    fn test_resolve_against_roots() {
        let roots = AssetRoots {
            public: PathBuf::from("/site/public"),
            source: PathBuf::from("/site/src"),
        };

        let root = Location::parse("/favicon/icon.png?v=2").unwrap();
        assert_eq!(
            root.resolve(&roots),
            Resolved::File(PathBuf::from("/site/public/favicon/icon.png"))
        );

        let asset = Location::parse("assets/banner.png").unwrap();
        assert_eq!(
            asset.resolve(&roots),
            Resolved::File(PathBuf::from("/site/src/assets/banner.png"))
        );

        let fragment = Location::parse("#").unwrap();
        assert_eq!(fragment.resolve(&roots), Resolved::Fragment("#"));

        let url = Location::parse("https://example.com/a").unwrap();
        assert!(matches!(url.resolve(&roots), Resolved::Url(u) if u.host_str() == Some("example.com")));
    }

    #[test]
    fn test_asset_roots_beside_config() {
        let roots = AssetRoots::beside(Path::new("/home/me/blog/blog.toml"));
        assert_eq!(roots.public, PathBuf::from("/home/me/blog/public"));
        assert_eq!(roots.source, PathBuf::from("/home/me/blog/src"));
    }
}
