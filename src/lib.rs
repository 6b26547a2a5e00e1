//! Validated configuration for a static blog.
//!
//! Loads `blog.toml` (or JSON) into five typed records, rejecting malformed
//! input with the path of the offending field.
//!
//! ```ignore
//! use blogconf::{BlogConfig, LoadOptions};
//!
//! let loaded = BlogConfig::load(&LoadOptions::default())?;
//! loaded.diagnostics.print_warnings();
//! println!("{}", loaded.config.site.title);
//! ```

pub mod config;
pub mod logger;
pub mod utils;

pub use config::{BlogConfig, ConfigDiagnostics, ConfigError, LoadOptions, SchemaError};
