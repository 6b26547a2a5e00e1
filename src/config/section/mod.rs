//! Configuration record definitions.
//!
//! Each module corresponds to a part of `blog.toml`:
//!
//! | Module    | TOML location                                  | Record                 |
//! |-----------|------------------------------------------------|------------------------|
//! | `site`    | root keys, `[themeColor]`, `[banner]`, `[toc]` | `SiteConfig`           |
//! | `nav`     | `[navBar]`                                     | `NavBarConfig`         |
//! | `profile` | `[profile]`, `[[profile.links]]`               | `ProfileConfig`        |
//! | `license` | `[license]`                                    | `LicenseConfig`        |
//! | `code`    | `[expressiveCode]`                             | `ExpressiveCodeConfig` |

mod code;
mod license;
mod nav;
mod profile;
pub mod site;

pub use code::{ExpressiveCodeConfig, ThemeName};
pub use license::LicenseConfig;
pub use nav::{CustomLink, LinkPreset, NavBarConfig, NavBarLink};
pub use profile::{IconId, ProfileConfig, ProfileLink};
pub use site::{
    BannerConfig, BannerPosition, CreditConfig, Favicon, FaviconTheme, Hue, IconSizes, Lang,
    SiteConfig, ThemeColorConfig, TocConfig, TocDepth,
};
