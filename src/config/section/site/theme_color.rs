//! `[themeColor]` configuration.

use macros::Config;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Accent color of the site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(rename_all = "camelCase")]
#[config(section = "themeColor")]
pub struct ThemeColorConfig {
    /// Hue of the accent color, from 0 to 360 (red: 0, teal: 200, cyan: 250, pink: 345).
    #[config(default = "250")]
    pub hue: Hue,

    /// Hide the color picker for visitors.
    #[config(default = "false")]
    pub fixed: bool,
}

/// Hue angle on the color wheel, `0..=360`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Hue(u16);

impl Hue {
    pub const MAX: u16 = 360;

    pub fn new(degrees: u16) -> Result<Self, String> {
        Self::try_from(i64::from(degrees))
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0
    }
}

impl TryFrom<i64> for Hue {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u16::try_from(value)
            .ok()
            .filter(|degrees| *degrees <= Self::MAX)
            .map(Self)
            .ok_or_else(|| format!("not in [0,{}]", Self::MAX))
    }
}

impl From<Hue> for i64 {
    fn from(hue: Hue) -> Self {
        i64::from(hue.0)
    }
}

impl fmt::Display for Hue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hue_bounds() {
        assert_eq!(Hue::try_from(0).unwrap().get(), 0);
        assert_eq!(Hue::try_from(360).unwrap().get(), 360);
        assert_eq!(Hue::try_from(-1), Err("not in [0,360]".to_string()));
        assert_eq!(Hue::try_from(361), Err("not in [0,360]".to_string()));
        assert!(Hue::try_from(70_000_i64).is_err());
        assert_eq!(Hue::new(345).unwrap().get(), 345);
        assert!(Hue::new(361).is_err());
    }
}
