//! `[banner]` configuration.

use crate::config::types::choice::choice;
use crate::config::types::decode::empty_as_none;
use crate::config::{ConfigDiagnostics, Location};
use macros::Config;
use serde::{Deserialize, Serialize};

/// Banner image shown on top of the home page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[config(section = "banner")]
pub struct BannerConfig {
    #[config(default = "false")]
    pub enable: bool,

    /// Relative to `src/`, or to `public/` when starting with `/`.
    #[config(default = "\"assets/images/banner.png\"")]
    pub src: Location,

    /// Part of the image kept visible when cropped: top, center or bottom.
    #[serde(default)]
    #[config(default = "\"center\"")]
    pub position: BannerPosition,

    /// Attribution of the banner image.
    #[config(sub)]
    pub credit: CreditConfig,
}

choice! {
    /// Anchor of the banner image.
    pub enum BannerPosition {
        Top => "top",
        Center => "center",
        Bottom => "bottom",
    }
}

impl Default for BannerPosition {
    fn default() -> Self {
        Self::Center
    }
}

/// Credit line drawn in the corner of the banner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[config(section = "banner.credit")]
pub struct CreditConfig {
    #[config(default = "false")]
    pub enable: bool,

    /// Credit text, e.g. the artist's name.
    pub text: String,

    /// Optional link to the original artwork.
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub url: Option<Location>,
}

impl BannerConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        self.credit.validate(diag);
    }
}

impl CreditConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.enable && self.text.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.text,
                "must not be blank while the credit is enabled",
                format!("set {} or disable {}", Self::FIELDS.text, Self::FIELDS.enable),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> BannerConfig {
        toml::from_str(content).unwrap()
    }

    #[test]
    fn test_position_defaults_to_center() {
        let banner = parse(
            r#"
            enable = true
            src = "assets/images/banner.png"
            [credit]
            enable = false
            text = ""
            "#,
        );
        assert_eq!(banner.position, BannerPosition::Center);
        assert!(banner.credit.url.is_none());
    }

    #[test]
    fn test_unknown_position() {
        let err = toml::from_str::<BannerConfig>(
            r#"
            enable = true
            src = "/banner.png"
            position = "left"
            [credit]
            enable = false
            text = ""
            "#,
        )
        .unwrap_err();
        assert!(err.message().contains("not in {top,center,bottom}"));
    }

    #[test]
    fn test_enabled_credit_needs_text() {
        let banner = parse(
            r#"
            enable = true
            src = "/banner.png"
            [credit]
            enable = true
            text = "  "
            url = "https://www.pixiv.net/artworks/1"
            "#,
        );
        let mut diag = ConfigDiagnostics::new();
        banner.validate(&mut diag);
        assert_eq!(diag.errors()[0].field, "banner.credit.text");
    }
}
