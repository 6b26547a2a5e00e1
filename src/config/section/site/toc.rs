//! `[toc]` configuration.

use macros::Config;
use serde::{Deserialize, Serialize};

/// Table of contents in the post sidebar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[config(section = "toc")]
pub struct TocConfig {
    /// Show the table of contents on the right of posts.
    #[config(default = "true")]
    pub enable: bool,

    /// Deepest heading level listed, from 1 to 3.
    #[config(default = "2")]
    pub depth: TocDepth,
}

/// Heading depth shown in the table of contents, `1..=3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct TocDepth(u8);

impl TocDepth {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 3;

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for TocDepth {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .filter(|depth| (Self::MIN..=Self::MAX).contains(depth))
            .map(Self)
            .ok_or_else(|| format!("not in [{},{}]", Self::MIN, Self::MAX))
    }
}

impl From<TocDepth> for i64 {
    fn from(depth: TocDepth) -> Self {
        i64::from(depth.0)
    }
}
