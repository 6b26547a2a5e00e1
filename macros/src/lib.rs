//! Proc macros for blogconf.
//!
//! # Config derive macro
//!
//! Generates field path accessors and a commented TOML template.
//!
//! ```ignore
//! /// Theme color shown on every page.
//! #[derive(Config)]
//! #[config(section = "themeColor")]
//! pub struct ThemeColorConfig {
//!     /// Hue of the theme color, from 0 to 360.
//!     #[config(default = "250")]
//!     pub hue: Hue,
//!
//!     /// Hide the color picker from visitors.
//!     #[config(default = "false")]
//!     pub fixed: bool,
//! }
//!
//! // Generates:
//! // - ThemeColorConfig::FIELDS.hue -> FieldPath("themeColor.hue")
//! // - ThemeColorConfig::template() -> TOML body with comments
//! // - ThemeColorConfig::template_with_header() -> with [themeColor] header
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path, `[]` suffix for array items
//!
//! Field-level:
//! - `#[config(skip)]` - Skip from FIELDS and template
//! - `#[config(sub)]` - Nested section, rendered with its own header
//! - `#[config(name = "x")]` - Custom TOML key (default: camelCase of the field)
//! - `#[config(default = "x")]` - TOML literal used in the template
//!
//! # Section inference
//!
//! Without `section` attribute, inferred from struct name:
//! - `ThemeColorConfig` → `themeColor`
//! - `LicenseConfig` → `license`

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS and template().
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
