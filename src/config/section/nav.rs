//! `[navBar]` configuration.
//!
//! Links are either a preset name or an inline table:
//!
//! ```toml
//! [navBar]
//! links = [
//!     "home",
//!     "archive",
//!     "about",
//!     { name = "GitHub", url = "https://github.com/saicaca/fuwari", external = true },
//! ]
//! ```

use crate::config::types::choice::choice;
use crate::config::{ConfigDiagnostics, Location};
use macros::Config;
use rustc_hash::FxHashSet;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Entries of the top navigation bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[config(section = "navBar")]
pub struct NavBarConfig {
    /// In display order: "home", "archive", "about", or { name, url, external }.
    #[serde(default)]
    #[config(default = "[\"home\", \"archive\", \"about\"]")]
    pub links: Vec<NavBarLink>,
}

/// A navigation bar entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NavBarLink {
    Preset(LinkPreset),
    Custom(CustomLink),
}

choice! {
    /// Built-in pages that can be linked by name.
    pub enum LinkPreset {
        Home => "home",
        Archive => "archive",
        About => "about",
    }
}

impl LinkPreset {
    /// Label shown in the bar (before translation).
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Archive => "Archive",
            Self::About => "About",
        }
    }

    pub const fn url(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Archive => "/archive/",
            Self::About => "/about/",
        }
    }
}

/// A link defined inline in the config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[config(section = "navBar.links[]")]
pub struct CustomLink {
    pub name: String,

    pub url: Location,

    /// Open in a new tab with an external-link icon.
    #[serde(default)]
    #[config(default = "false")]
    pub external: bool,

    /// Keep the entry in the file but hide it.
    #[serde(default = "default_true")]
    #[config(default = "true")]
    pub enable: bool,
}

fn default_true() -> bool {
    true
}

impl NavBarLink {
    /// Displayed label.
    pub fn name(&self) -> &str {
        match self {
            Self::Preset(preset) => preset.name(),
            Self::Custom(link) => &link.name,
        }
    }

    /// Link target as written (presets map to their fixed path).
    pub fn url(&self) -> &str {
        match self {
            Self::Preset(preset) => preset.url(),
            Self::Custom(link) => link.url.as_str(),
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, Self::Custom(link) if link.external)
    }

    pub fn is_enabled(&self) -> bool {
        match self {
            Self::Preset(_) => true,
            Self::Custom(link) => link.enable,
        }
    }
}

impl<'de> Deserialize<'de> for NavBarLink {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LinkVisitor;

        impl<'de> Visitor<'de> for LinkVisitor {
            type Value = NavBarLink;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a preset name or a { name, url } table")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                value.parse().map(NavBarLink::Preset).map_err(E::custom)
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
                CustomLink::deserialize(de::value::MapAccessDeserializer::new(map))
                    .map(NavBarLink::Custom)
            }
        }

        deserializer.deserialize_any(LinkVisitor)
    }
}

impl NavBarConfig {
    /// Enabled entries, in order.
    pub fn visible(&self) -> impl Iterator<Item = &NavBarLink> {
        self.links.iter().filter(|link| link.is_enabled())
    }

    /// Validate navigation links.
    ///
    /// # Checks
    /// - custom links have a name (error)
    /// - internal links do not point at another site (warning)
    /// - presets appear once (warning)
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let mut presets = FxHashSet::default();
        for (i, link) in self.links.iter().enumerate() {
            match link {
                NavBarLink::Custom(custom) => {
                    if custom.name.trim().is_empty() {
                        diag.error(CustomLink::FIELDS.name.at(i), "must not be blank");
                    }
                    if !custom.external && custom.url.is_absolute() {
                        diag.warn_with_hint(
                            CustomLink::FIELDS.url.at(i),
                            "absolute URL on an internal link",
                            format!("set {} = true", CustomLink::FIELDS.external.at(i)),
                        );
                    }
                }
                NavBarLink::Preset(preset) => {
                    if !presets.insert(*preset) {
                        diag.warn(
                            Self::FIELDS.links.index(i),
                            format!("preset `{preset}` is listed more than once"),
                        );
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> NavBarConfig {
        toml::from_str(content).unwrap()
    }

    #[test]
    fn test_mixed_links_keep_order() {
        let nav = parse(
            r#"links = ["home", { name = "GitHub", url = "https://github.com", external = true }, "about"]"#,
        );
        let names: Vec<_> = nav.links.iter().map(NavBarLink::name).collect();
        assert_eq!(names, ["Home", "GitHub", "About"]);
        assert_eq!(nav.links[2].url(), "/about/");
        assert!(nav.links[1].is_external());
    }

    #[test]
    fn test_unknown_preset() {
        let err = toml::from_str::<NavBarConfig>(r#"links = ["blog"]"#).unwrap_err();
        assert!(err.message().contains("not in {home,archive,about}"));
    }

    #[test]
    fn test_custom_link_defaults() {
        let nav = parse(r#"links = [{ name = "Docs", url = "/docs/" }]"#);
        let NavBarLink::Custom(link) = &nav.links[0] else {
            panic!("expected custom link");
        };
        assert!(!link.external);
        assert!(link.enable);
    }

    #[test]
    fn test_disabled_links_are_hidden_not_dropped() {
        let nav = parse(
            r#"links = ["home", { name = "Old", url = "/old/", enable = false }, "archive"]"#,
        );
        assert_eq!(nav.links.len(), 3);
        let visible: Vec<_> = nav.visible().map(NavBarLink::url).collect();
        assert_eq!(visible, ["/", "/archive/"]);
    }

    #[test]
    fn test_missing_links_is_empty() {
        assert!(parse("").links.is_empty());
    }

    #[test]
    fn test_validate_links() {
        let nav = parse(
            r#"links = ["home", { name = "", url = "https://example.com" }, "home"]"#,
        );
        let mut diag = ConfigDiagnostics::new();
        nav.validate(&mut diag);

        assert_eq!(diag.errors().len(), 1);
        assert_eq!(diag.errors()[0].field, "navBar.links[1].name");

        let warned: Vec<_> = diag.warnings().iter().map(|w| w.field.as_str()).collect();
        assert_eq!(warned, ["navBar.links[1].url", "navBar.links[2]"]);
    }

    #[test]
    fn test_serialize_untagged() {
        let nav = parse(r#"links = ["home", { name = "X", url = "/x/" }]"#);
        let json = serde_json::to_value(&nav).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "links": ["home", { "name": "X", "url": "/x/", "external": false, "enable": true }] })
        );
    }
}
