//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Used with `#[derive(Config)]` to generate compile-time checked
/// field path accessors.
///
/// # Example
///
/// ```ignore
/// #[derive(Config)]
/// #[config(section = "license")]
/// pub struct LicenseConfig {
///     pub name: String,
/// }
///
/// // Generated:
/// impl LicenseConfig {
///     pub const FIELDS: LicenseConfigFields = ...;
/// }
///
/// // Usage:
/// diag.error(LicenseConfig::FIELDS.name, "must not be blank");
/// ```
///
/// Fields of array items live under a `[]` section (`favicon[].sizes`);
/// [`FieldPath::at`] fills in the item index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Concrete path of this field inside the array item at `index`.
    ///
    /// ```ignore
    /// Favicon::FIELDS.sizes.at(2) // "favicon[2].sizes"
    /// ```
    pub fn at(&self, index: usize) -> String {
        self.0.replacen("[]", &format!("[{index}]"), 1)
    }

    /// Path of the item at `index` of this array field (`favicon[1]`).
    pub fn index(&self, index: usize) -> String {
        format!("{}[{index}]", self.0)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl From<FieldPath> for String {
    fn from(path: FieldPath) -> Self {
        path.0.to_string()
    }
}
