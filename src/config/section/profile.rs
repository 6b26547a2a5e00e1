//! `[profile]` configuration.

use crate::config::{ConfigDiagnostics, Location};
use macros::Config;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Author card in the sidebar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[config(section = "profile")]
pub struct ProfileConfig {
    /// Relative to `src/`, or to `public/` when starting with `/`.
    #[config(default = "\"assets/images/avatar.png\"")]
    pub avatar: Location,

    #[config(default = "\"Lorem Ipsum\"")]
    pub name: String,

    #[config(default = "\"Lorem ipsum dolor sit amet.\"")]
    pub bio: String,

    /// Social links, see the `[[profile.links]]` example below.
    #[serde(default)]
    #[config(skip)]
    pub links: Vec<ProfileLink>,
}

/// A social link under the profile card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[config(section = "profile.links[]")]
pub struct ProfileLink {
    #[config(default = "\"GitHub\"")]
    pub name: String,

    /// Iconify id, `<set>:<name>`. Browse https://icones.js.org/ for more.
    #[config(default = "\"fa6-brands:github\"")]
    pub icon: IconId,

    #[config(default = "\"https://github.com/saicaca/fuwari\"")]
    pub url: Location,

    /// Keep the entry in the file but hide it.
    #[serde(default = "default_true")]
    #[config(default = "true")]
    pub enable: bool,
}

fn default_true() -> bool {
    true
}

static ICON_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*:[a-z0-9]+(-[a-z0-9]+)*$").unwrap());

/// Icon identifier in `<set>:<name>` form, e.g. `fa6-brands:github`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IconId(String);

impl IconId {
    /// Icon set, `fa6-brands` in `fa6-brands:github`.
    pub fn set(&self) -> &str {
        self.0.split_once(':').map_or("", |(set, _)| set)
    }

    /// Icon name within the set.
    pub fn name(&self) -> &str {
        self.0.split_once(':').map_or("", |(_, name)| name)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for IconId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if ICON_ID.is_match(&value) {
            Ok(Self(value))
        } else {
            Err(format!("`{value}` is not an icon id of the form <set>:<name>"))
        }
    }
}

impl From<IconId> for String {
    fn from(id: IconId) -> Self {
        id.0
    }
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl ProfileConfig {
    /// Enabled links, in order.
    pub fn visible_links(&self) -> impl Iterator<Item = &ProfileLink> {
        self.links.iter().filter(|link| link.enable)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (i, link) in self.links.iter().enumerate() {
            if link.name.trim().is_empty() {
                diag.error_with_hint(
                    ProfileLink::FIELDS.name.at(i),
                    "must not be blank",
                    "the name is used as the link's accessible label",
                );
            }
        }
    }

    /// Template including one example link.
    pub fn template_with_links() -> String {
        let mut out = Self::template_with_header();
        out.push('\n');
        out.push_str(&ProfileLink::template_with_header());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_id() {
        let id = IconId::try_from("fa6-brands:github".to_string()).unwrap();
        assert_eq!((id.set(), id.name()), ("fa6-brands", "github"));

        for bad in ["github", "fa6-brands:", ":github", "Fa6:github", "fa6--brands:x", "a:b:c"] {
            assert!(IconId::try_from(bad.to_string()).is_err(), "{bad}");
        }
    }

    #[test]
    fn test_links_keep_order_and_hide_disabled() {
        let profile: ProfileConfig = toml::from_str(
            r#"
            avatar = "assets/images/avatar.png"
            name = "Lorem Ipsum"
            bio = ""

            [[links]]
            name = "Twitter"
            icon = "fa6-brands:twitter"
            url = "https://twitter.com"

            [[links]]
            name = "Steam"
            icon = "fa6-brands:steam"
            url = "https://store.steampowered.com"
            enable = false

            [[links]]
            name = "GitHub"
            icon = "fa6-brands:github"
            url = "https://github.com/saicaca/fuwari"
            "#,
        )
        .unwrap();

        assert_eq!(profile.links.len(), 3);
        let names: Vec<_> = profile.visible_links().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["Twitter", "GitHub"]);
    }

    #[test]
    fn test_blank_profile_name_is_allowed() {
        let profile: ProfileConfig = toml::from_str(
            r#"
            avatar = "assets/images/avatar.png"
            name = ""
            bio = ""

            [[links]]
            name = ""
            icon = "fa6-brands:github"
            url = "https://github.com/saicaca"
            "#,
        )
        .unwrap();

        let mut diag = ConfigDiagnostics::new();
        profile.validate(&mut diag);
        assert_eq!(diag.errors().len(), 1);
        assert_eq!(diag.errors()[0].field, "profile.links[0].name");
    }

    #[test]
    fn test_template_parses() {
        let template = ProfileConfig::template_with_links();
        assert!(template.contains("[[profile.links]]"));
        let doc: toml::Table = toml::from_str(&template).unwrap();
        let profile: ProfileConfig = doc["profile"].clone().try_into().unwrap();
        assert_eq!(profile.links[0].icon.as_str(), "fa6-brands:github");
    }
}
