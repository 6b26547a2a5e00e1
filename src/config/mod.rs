//! Blog configuration loading for `blog.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Record definitions
//! │   ├── site/      # root keys, [themeColor], [banner], [toc], [[favicon]]
//! │   ├── nav        # [navBar]
//! │   ├── profile    # [profile]
//! │   ├── license    # [license]
//! │   └── code       # [expressiveCode]
//! ├── types/         # Utility types
//! │   ├── decode     # typed decoding with field paths
//! │   ├── error      # SchemaError, ConfigDiagnostics, ConfigError
//! │   ├── handle     # Global config handle
//! │   └── location   # URL-or-path values
//! ├── template       # Starter file
//! └── mod.rs         # BlogConfig (this file)
//! ```
//!
//! # Loading
//!
//! Loading runs in two stages and never returns a partial result:
//!
//! 1. Typed decoding checks shapes, enumerations, ranges and locations, and
//!    stops at the first violation with its full field path.
//! 2. Semantic validation collects every remaining error plus warnings
//!    (unknown keys, suspicious links).

pub mod section;
pub mod template;
pub mod types;
mod util;

pub use util::{SourceFormat, find_config_file};

pub use section::{
    BannerConfig, BannerPosition, CreditConfig, CustomLink, ExpressiveCodeConfig, Favicon,
    FaviconTheme, Hue, IconId, IconSizes, Lang, LicenseConfig, LinkPreset, NavBarConfig,
    NavBarLink, ProfileConfig, ProfileLink, SiteConfig, ThemeColorConfig, ThemeName, TocConfig,
    TocDepth,
};

pub use types::{
    AssetRoots, ConfigDiagnostics, ConfigError, ConfigHandle, FieldPath, Location, LocationKind,
    Reload, Resolved, SchemaError, cfg, init_config,
};

use crate::utils::hash;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use types::decode::decode;

/// Default config file name.
pub const CONFIG_FILE: &str = "blog.toml";

// ============================================================================
// root configuration
// ============================================================================

/// The five validated records of a blog configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Document", rename_all = "camelCase")]
pub struct BlogConfig {
    /// Root keys plus `[themeColor]`, `[banner]` and `[toc]`.
    #[serde(flatten)]
    pub site: SiteConfig,

    pub nav_bar: NavBarConfig,

    pub profile: ProfileConfig,

    pub license: LicenseConfig,

    pub expressive_code: ExpressiveCodeConfig,
}

/// On-disk layout of the config file.
///
/// Spelled out instead of flattening `SiteConfig`, since `#[serde(flatten)]`
/// buffers the input and loses both unknown-key tracking and error paths.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Document {
    title: String,
    subtitle: String,
    lang: Lang,
    #[serde(default)]
    favicon: Vec<Favicon>,
    theme_color: ThemeColorConfig,
    banner: BannerConfig,
    toc: TocConfig,
    nav_bar: NavBarConfig,
    profile: ProfileConfig,
    license: LicenseConfig,
    expressive_code: ExpressiveCodeConfig,
}

impl From<Document> for BlogConfig {
    fn from(doc: Document) -> Self {
        Self {
            site: SiteConfig {
                title: doc.title,
                subtitle: doc.subtitle,
                lang: doc.lang,
                favicon: doc.favicon,
                theme_color: doc.theme_color,
                banner: doc.banner,
                toc: doc.toc,
            },
            nav_bar: doc.nav_bar,
            profile: doc.profile,
            license: doc.license,
            expressive_code: doc.expressive_code,
        }
    }
}

/// How [`BlogConfig::load`] finds and judges the config file.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// File name searched upward from the working directory, or an absolute path.
    pub config: PathBuf,
    /// Treat unknown keys as errors.
    pub strict: bool,
}

impl LoadOptions {
    pub fn new(config: impl Into<PathBuf>) -> Self {
        Self {
            config: config.into(),
            strict: false,
        }
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self::new(CONFIG_FILE)
    }
}

/// Result of [`BlogConfig::load`].
#[derive(Debug)]
pub struct Loaded {
    pub config: BlogConfig,
    /// Absolute or search-resolved path of the file that was read.
    pub path: PathBuf,
    /// Warnings of a successful load.
    pub diagnostics: ConfigDiagnostics,
    /// Content hash of the source text.
    pub hash: u64,
}

impl BlogConfig {
    /// Locate, read and validate the config file.
    pub fn load(options: &LoadOptions) -> Result<Loaded, ConfigError> {
        let path = find_config_file(&options.config)
            .ok_or_else(|| ConfigError::NotFound(options.config.clone()))?;
        let content =
            fs::read_to_string(&path).map_err(|err| ConfigError::Io(path.clone(), err))?;

        let (config, diagnostics) = Self::check_source(&content, &path, options.strict)?;
        crate::debug!("config"; "loaded {}", path.display());

        Ok(Loaded {
            config,
            hash: hash::compute(content.as_bytes()),
            path,
            diagnostics,
        })
    }

    /// Parse and validate source text read from `path`.
    ///
    /// The format follows the file extension. Warnings are returned alongside
    /// the config; with `strict`, unknown keys are errors instead.
    pub fn check_source(
        content: &str,
        path: &Path,
        strict: bool,
    ) -> Result<(Self, ConfigDiagnostics), ConfigError> {
        let (config, ignored) = Self::parse_with_ignored(content, SourceFormat::from_path(path))?;
        config.finish(&ignored, strict)
    }

    /// Parse TOML source. Warnings are dropped, see [`BlogConfig::check_source`].
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let (config, ignored) = Self::parse_with_ignored(content, SourceFormat::Toml)?;
        Ok(config.finish(&ignored, false)?.0)
    }

    /// Parse JSON source. Warnings are dropped.
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let (config, ignored) = Self::parse_with_ignored(content, SourceFormat::Json)?;
        Ok(config.finish(&ignored, false)?.0)
    }

    /// Decode an already parsed document. Warnings are dropped.
    pub fn from_value(value: toml::Value) -> Result<Self, ConfigError> {
        let (config, ignored) = decode(value)?;
        Ok(Self::finish(config, &ignored, false)?.0)
    }

    /// Read a TOML or JSON file (by extension). Warnings are dropped.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Ok(Self::check_source(&content, path, false)?.0)
    }

    /// Parse source text, collecting any unknown fields.
    fn parse_with_ignored(
        content: &str,
        format: SourceFormat,
    ) -> Result<(Self, Vec<String>), ConfigError> {
        let decoded = match format {
            SourceFormat::Toml => decode(toml::Value::Table(toml::from_str(content)?)),
            SourceFormat::Json => decode(serde_json::from_str::<serde_json::Value>(content)?),
        };
        Ok(decoded?)
    }

    /// Second stage: unknown keys and semantic checks.
    fn finish(
        self,
        ignored: &[String],
        strict: bool,
    ) -> Result<(Self, ConfigDiagnostics), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        for field in ignored {
            if strict {
                diag.error(field.as_str(), "unknown field");
            } else {
                diag.warn_with_hint(field.as_str(), "unknown field, ignored", "check the spelling");
            }
        }
        self.validate(&mut diag);

        match diag.into_result() {
            Ok(warnings) => Ok((self, warnings)),
            Err(diag) => Err(ConfigError::Schema(diag)),
        }
    }

    /// Validate every record, collecting all errors and warnings.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        self.site.validate(diag);
        self.nav_bar.validate(diag);
        self.profile.validate(diag);
        self.license.validate(diag);
    }

    /// Every location field with its path, in file order.
    pub fn locations(&self) -> Vec<(String, &Location)> {
        let mut out = Vec::new();

        for (i, icon) in self.site.favicon.iter().enumerate() {
            out.push((Favicon::FIELDS.src.at(i), &icon.src));
        }
        out.push((BannerConfig::FIELDS.src.into(), &self.site.banner.src));
        if let Some(url) = &self.site.banner.credit.url {
            out.push((CreditConfig::FIELDS.url.into(), url));
        }
        for (i, link) in self.nav_bar.links.iter().enumerate() {
            if let NavBarLink::Custom(custom) = link {
                out.push((CustomLink::FIELDS.url.at(i), &custom.url));
            }
        }
        out.push((ProfileConfig::FIELDS.avatar.into(), &self.profile.avatar));
        for (i, link) in self.profile.links.iter().enumerate() {
            out.push((ProfileLink::FIELDS.url.at(i), &link.url));
        }
        out.push((LicenseConfig::FIELDS.url.into(), &self.license.url));

        out
    }

    /// Report local locations whose file does not exist under `roots`.
    pub fn check_assets(&self, roots: &AssetRoots, diag: &mut ConfigDiagnostics) {
        for (field, location) in self.locations() {
            if let Resolved::File(file) = location.resolve(roots)
                && !file.exists()
            {
                diag.error_with_hint(
                    field,
                    format!("file not found: {}", file.display()),
                    if location.kind() == &LocationKind::Root {
                        "paths starting with `/` are served from the public directory"
                    } else {
                        "relative paths are resolved against the source directory"
                    },
                );
            }
        }
    }

    /// Split into the five records.
    pub fn into_parts(
        self,
    ) -> (
        SiteConfig,
        NavBarConfig,
        ProfileConfig,
        LicenseConfig,
        ExpressiveCodeConfig,
    ) {
        (
            self.site,
            self.nav_bar,
            self.profile,
            self.license,
            self.expressive_code,
        )
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// A complete, valid config source with `extra` appended at the end.
///
/// `extra` lands after the last table, so start it with a table header.
#[cfg(test)]
pub fn test_config_source(extra: &str) -> String {
    format!(
        r#"title = "Fuwari"
subtitle = "Demo Site"
lang = "en"
favicon = []

[themeColor]
hue = 250
fixed = false

[banner]
enable = false
src = "assets/images/demo-banner.png"
position = "center"

[banner.credit]
enable = false
text = ""
url = ""

[toc]
enable = true
depth = 2

[navBar]
links = [
    "home",
    "archive",
    "about",
    {{ name = "GitHub", url = "https://github.com/saicaca/fuwari", external = true }},
]

[profile]
avatar = "assets/images/demo-avatar.png"
name = "Lorem Ipsum"
bio = "Lorem ipsum dolor sit amet, consectetur adipiscing elit."

[[profile.links]]
name = "Twitter"
icon = "fa6-brands:twitter"
url = "https://twitter.com"

[[profile.links]]
name = "GitHub"
icon = "fa6-brands:github"
url = "https://github.com/saicaca"

[license]
enable = true
name = "CC BY-NC-SA 4.0"
url = "https://creativecommons.org/licenses/by-nc-sa/4.0/"

[expressiveCode]
theme = "github-dark"
{extra}"#
    )
}

/// Parse [`test_config_source`], panicking on any error or unknown field.
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> BlogConfig {
    let (config, diag) =
        BlogConfig::check_source(&test_config_source(extra), Path::new(CONFIG_FILE), true)
            .unwrap();
    assert!(
        diag.warnings().is_empty(),
        "test config has warnings: {:?}",
        diag.warnings()
    );
    config
}

// ============================================================================
// tests
// ============================================================================
