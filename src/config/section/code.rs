//! `[expressiveCode]` configuration.

use macros::Config;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Code block rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[config(section = "expressiveCode")]
pub struct ExpressiveCodeConfig {
    /// Syntax highlighting theme. Pick a dark one, the site background does not follow it.
    #[config(default = "\"github-dark\"")]
    pub theme: ThemeName,
}

static THEME_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]*$").unwrap());

/// Identifier of a bundled highlighting theme (`github-dark`, `dracula` ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ThemeName(String);

impl ThemeName {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ThemeName {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if THEME_NAME.is_match(&value) {
            Ok(Self(value))
        } else {
            Err(format!("`{value}` is not a theme identifier"))
        }
    }
}

impl From<ThemeName> for String {
    fn from(name: ThemeName) -> Self {
        name.0
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_names() {
        for ok in ["github-dark", "dracula", "one_dark_pro", "Nord"] {
            assert!(ThemeName::try_from(ok.to_string()).is_ok(), "{ok}");
        }
        for bad in ["", "-dark", "github dark", "themes/github-dark"] {
            assert!(ThemeName::try_from(bad.to_string()).is_err(), "{bad}");
        }
    }
}
