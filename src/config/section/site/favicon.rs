//! `[[favicon]]` entries.

use crate::config::types::choice::choice;
use crate::config::{ConfigDiagnostics, FieldPath, Location};
use macros::Config;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::fmt;

/// One favicon variant. Leave the list empty to use the bundled icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[config(section = "favicon[]")]
pub struct Favicon {
    /// Relative to `public/` when starting with `/`.
    #[config(default = "\"/favicon/icon.png\"")]
    pub src: Location,

    /// Color scheme this icon is meant for: light or dark.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[config(default = "\"light\"")]
    pub theme: Option<FaviconTheme>,

    /// Icon dimensions, e.g. "32x32".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[config(default = "\"32x32\"")]
    pub sizes: Option<IconSizes>,
}

choice! {
    /// Color scheme a favicon targets.
    pub enum FaviconTheme {
        Light => "light",
        Dark => "dark",
    }
}

/// `<width>x<height>` in pixels, both non-zero.
///
/// The text is kept as written; dimensions are compared without leading zeros.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IconSizes {
    raw: String,
    /// Byte offset of the `x` separator.
    split: usize,
}

impl IconSizes {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Width and height digits with leading zeros stripped.
    pub fn dimensions(&self) -> (&str, &str) {
        fn strip(digits: &str) -> &str {
            digits.trim_start_matches('0')
        }
        (
            strip(&self.raw[..self.split]),
            strip(&self.raw[self.split + 1..]),
        )
    }
}

impl TryFrom<String> for IconSizes {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let Some(split) = value.find('x') else {
            return Err(format!("`{value}` is not <width>x<height>"));
        };
        // Digits only: no signs, blanks or a second separator
        let valid = |part: &str| {
            part.bytes().all(|b| b.is_ascii_digit()) && part.bytes().any(|b| b != b'0')
        };
        if valid(&value[..split]) && valid(&value[split + 1..]) {
            Ok(Self { raw: value, split })
        } else {
            Err(format!("`{value}` is not <width>x<height>"))
        }
    }
}

impl std::str::FromStr for IconSizes {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_string())
    }
}

impl From<IconSizes> for String {
    fn from(sizes: IconSizes) -> Self {
        sizes.raw
    }
}

impl fmt::Display for IconSizes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Report entries that repeat an earlier `(theme, sizes)` pair.
pub fn validate(favicons: &[Favicon], field: FieldPath, diag: &mut ConfigDiagnostics) {
    let mut seen = FxHashMap::default();
    for (i, icon) in favicons.iter().enumerate() {
        let sizes = icon.sizes.as_ref().map(IconSizes::dimensions);
        match seen.entry((icon.theme, sizes)) {
            Entry::Vacant(slot) => {
                slot.insert(i);
            }
            Entry::Occupied(slot) => {
                let first = *slot.get();
                diag.error_with_hint(
                    field.index(i),
                    format!("same theme and sizes as {}", field.index(first)),
                    format!("give {} a different theme or sizes", field.index(i)),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icon(src: &str, theme: Option<FaviconTheme>, sizes: Option<&str>) -> Favicon {
        Favicon {
            src: Location::parse(src).unwrap(),
            theme,
            sizes: sizes.map(|s| s.parse().unwrap()),
        }
    }

    #[test]
    fn test_sizes_parse() {
        let sizes: IconSizes = "32x32".parse().unwrap();
        assert_eq!(sizes.dimensions(), ("32", "32"));
        assert_eq!(sizes.to_string(), "32x32");

        let padded: IconSizes = "032x32".parse().unwrap();
        assert_eq!(padded.as_str(), "032x32");
        assert_eq!(padded.dimensions(), ("32", "32"));

        let large: IconSizes = "99999999999x1".parse().unwrap();
        assert_eq!(large.dimensions(), ("99999999999", "1"));

        for bad in ["", "32", "0x32", "00x1", "32x", "x32", "32X32", "+3x3", "3 x3", "1x2x3"] {
            assert!(bad.parse::<IconSizes>().is_err(), "{bad}");
        }
    }

    #[test]
    fn test_duplicate_variant_is_error() {
        let icons = vec![
            icon("/favicon/a.png", Some(FaviconTheme::Light), Some("32x32")),
            icon("/favicon/b.png", Some(FaviconTheme::Dark), Some("32x32")),
            icon("/favicon/c.png", Some(FaviconTheme::Light), Some("32x32")),
        ];
        let mut diag = ConfigDiagnostics::new();
        validate(&icons, FieldPath::new("favicon"), &mut diag);

        assert_eq!(diag.errors().len(), 1);
        assert_eq!(diag.errors()[0].field, "favicon[2]");
    }

    #[test]
    fn test_padded_sizes_count_as_duplicate() {
        let icons = vec![
            icon("/favicon/a.png", None, Some("32x32")),
            icon("/favicon/b.png", None, Some("032x032")),
        ];
        let mut diag = ConfigDiagnostics::new();
        validate(&icons, FieldPath::new("favicon"), &mut diag);

        assert_eq!(diag.errors().len(), 1);
        assert_eq!(diag.errors()[0].field, "favicon[1]");
    }

    #[test]
    fn test_empty_list_is_fine() {
        let mut diag = ConfigDiagnostics::new();
        validate(&[], FieldPath::new("favicon"), &mut diag);
        assert!(diag.is_empty());
    }
}
