//! Configuration utility types.
//!
//! | Module     | Purpose                                          |
//! |------------|--------------------------------------------------|
//! | `choice`   | Closed string enumerations                       |
//! | `decode`   | Typed decoding with field paths                  |
//! | `error`    | `SchemaError`, `ConfigDiagnostics`, `ConfigError`|
//! | `field`    | `FieldPath` used by `#[derive(Config)]`          |
//! | `handle`   | Process-wide config handle (atomic reload)       |
//! | `location` | URL-or-path values and their resolution         |

pub(crate) mod choice;
pub(crate) mod decode;
mod error;
mod field;
pub mod handle;
mod location;

pub use error::{ConfigDiagnostics, ConfigError, SchemaError};
pub use field::FieldPath;
pub use handle::{ConfigHandle, Reload, cfg, init_config};
pub use location::{AssetRoots, Location, LocationKind, Resolved};
