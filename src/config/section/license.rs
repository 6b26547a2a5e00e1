//! `[license]` configuration.

use crate::config::{ConfigDiagnostics, Location};
use macros::Config;
use serde::{Deserialize, Serialize};

/// License notice shown at the end of every post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[config(section = "license")]
pub struct LicenseConfig {
    #[config(default = "true")]
    pub enable: bool,

    #[config(default = "\"CC BY-NC-SA 4.0\"")]
    pub name: String,

    #[config(default = "\"https://creativecommons.org/licenses/by-nc-sa/4.0/\"")]
    pub url: Location,
}

impl LicenseConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.enable && self.name.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.name,
                "must not be blank while the license notice is enabled",
                format!("set {} or disable {}", Self::FIELDS.name, Self::FIELDS.enable),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_only_matters_when_enabled() {
        let mut license: LicenseConfig = toml::from_str(
            r#"
            enable = false
            name = ""
            url = "https://creativecommons.org/licenses/by-nc-sa/4.0/"
            "#,
        )
        .unwrap();

        let mut diag = ConfigDiagnostics::new();
        license.validate(&mut diag);
        assert!(diag.is_empty());

        license.enable = true;
        license.validate(&mut diag);
        assert_eq!(diag.errors()[0].field, "license.name");
    }

    #[test]
    fn test_url_must_be_location() {
        let err = toml::from_str::<LicenseConfig>(
            "enable = true\nname = \"MIT\"\nurl = \"//opensource.org\"",
        )
        .unwrap_err();
        assert!(err.message().contains("protocol-relative"), "{}", err.message());
    }
}
