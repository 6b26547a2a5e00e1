//! Top-level site settings.
//!
//! Plain keys live at the root of the config file, the nested records get
//! their own tables.
//!
//! # Example
//!
//! ```toml
//! title = "Fuwari"
//! subtitle = "Demo Site"
//! lang = "en"
//! favicon = []
//!
//! [themeColor]
//! hue = 250
//! fixed = false
//!
//! [banner]
//! enable = false
//! src = "assets/images/demo-banner.png"
//! position = "center"
//!
//! [banner.credit]
//! enable = false
//! text = ""
//! url = ""
//!
//! [toc]
//! enable = true
//! depth = 2
//! ```

mod banner;
mod favicon;
mod theme_color;
mod toc;

pub use banner::{BannerConfig, BannerPosition, CreditConfig};
pub use favicon::{Favicon, FaviconTheme, IconSizes};
pub use theme_color::{Hue, ThemeColorConfig};
pub use toc::{TocConfig, TocDepth};

use crate::config::types::choice::choice;
use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::Serialize;

/// Site identity and page furniture.
#[derive(Debug, Clone, PartialEq, Serialize, Config)]
#[serde(rename_all = "camelCase")]
#[config(section = "")]
pub struct SiteConfig {
    #[config(default = "\"My Blog\"")]
    pub title: String,

    #[config(default = "\"Notes and essays\"")]
    pub subtitle: String,

    /// Interface language: en, zh_CN, zh_TW, ja, ko, es, th, vi, tr, id.
    #[config(default = "\"en\"")]
    pub lang: Lang,

    /// Favicons, see the commented `[[favicon]]` example below.
    #[config(default = "[]")]
    pub favicon: Vec<Favicon>,

    #[config(sub)]
    pub theme_color: ThemeColorConfig,

    #[config(sub)]
    pub banner: BannerConfig,

    #[config(sub)]
    pub toc: TocConfig,
}

choice! {
    /// Interface language of the site.
    pub enum Lang {
        En => "en",
        ZhCn => "zh_CN",
        ZhTw => "zh_TW",
        Ja => "ja",
        Ko => "ko",
        Es => "es",
        Th => "th",
        Vi => "vi",
        Tr => "tr",
        Id => "id",
    }
}

impl Lang {
    /// BCP 47 tag for the `<html lang>` attribute.
    pub const fn html_tag(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::ZhCn => "zh-CN",
            Self::ZhTw => "zh-TW",
            Self::Ja => "ja",
            Self::Ko => "ko",
            Self::Es => "es",
            Self::Th => "th",
            Self::Vi => "vi",
            Self::Tr => "tr",
            Self::Id => "id",
        }
    }
}

impl SiteConfig {
    /// Validate site configuration.
    ///
    /// # Checks
    /// - `title` is not blank
    /// - enabled banner credit has text
    /// - no two favicons share theme and sizes
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error(Self::FIELDS.title, "must not be blank");
        }
        self.banner.validate(diag);
        favicon::validate(&self.favicon, Self::FIELDS.favicon, diag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lang_spellings() {
        assert_eq!("zh_CN".parse::<Lang>(), Ok(Lang::ZhCn));
        assert_eq!(Lang::ZhTw.html_tag(), "zh-TW");
        assert!("zh-CN".parse::<Lang>().is_err());
        assert_eq!(Lang::ALL.len(), 10);
    }

    #[test]
    fn test_field_paths() {
        assert_eq!(SiteConfig::FIELDS.title.as_str(), "title");
        assert_eq!(SiteConfig::FIELDS.theme_color.as_str(), "themeColor");
        assert_eq!(ThemeColorConfig::FIELDS.hue.as_str(), "themeColor.hue");
        assert_eq!(CreditConfig::FIELDS.url.as_str(), "banner.credit.url");
        assert_eq!(Favicon::FIELDS.sizes.at(1), "favicon[1].sizes");
    }

    #[test]
    fn test_template_puts_tables_last() {
        let template = SiteConfig::template();
        let title = template.find("title = ").unwrap();
        let theme = template.find("[themeColor]").unwrap();
        let credit = template.find("[banner.credit]").unwrap();
        let toc = template.find("[toc]").unwrap();
        assert!(title < theme && theme < credit && credit < toc);
    }
}
