//! Configuration error types.

use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("config file `{0}` not found")]
    NotFound(PathBuf),

    #[error("config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("config file parsing error")]
    Json(#[from] serde_json::Error),

    // NOTE: No #[from] here - we don't want source() which causes duplicate output
    #[error("{0}")]
    Schema(ConfigDiagnostics),
}

impl ConfigError {
    /// Schema violations carried by this error (empty for IO/syntax errors).
    pub fn schema_errors(&self) -> &[SchemaError] {
        match self {
            Self::Schema(diag) => diag.errors(),
            _ => &[],
        }
    }
}

impl From<SchemaError> for ConfigError {
    fn from(err: SchemaError) -> Self {
        let mut diag = ConfigDiagnostics::new();
        diag.push(err);
        Self::Schema(diag)
    }
}

// ============================================================================
// SchemaError
// ============================================================================

/// A single schema violation: the offending field path and the broken constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaError {
    /// Config field path (e.g., "themeColor.hue", "favicon[0].sizes")
    pub field: String,
    /// Violated constraint
    pub reason: String,
    /// Fix hint (optional)
    pub hint: Option<String>,
}

impl SchemaError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Field path in cyan brackets
        writeln!(
            f,
            "{}{}{}",
            "[".dimmed(),
            self.field.as_str().cyan(),
            "]".dimmed()
        )?;
        write!(f, "{} {}", "→".red(), self.reason)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaError {}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

/// Schema errors and warnings collected over a whole validation pass.
#[derive(Debug, Default, Clone)]
pub struct ConfigDiagnostics {
    errors: Vec<SchemaError>,
    /// Non-fatal findings (unknown fields, suspicious links).
    warnings: Vec<SchemaError>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, err: SchemaError) {
        self.errors.push(err);
    }

    pub fn error(&mut self, field: impl Into<String>, reason: impl Into<String>) {
        self.errors.push(SchemaError::new(field, reason));
    }

    /// Add an error with a hint.
    pub fn error_with_hint(
        &mut self,
        field: impl Into<String>,
        reason: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors
            .push(SchemaError::new(field, reason).with_hint(hint));
    }

    /// Add a warning (collected for batch display).
    pub fn warn(&mut self, field: impl Into<String>, reason: impl Into<String>) {
        self.warnings.push(SchemaError::new(field, reason));
    }

    /// Add a warning with a hint.
    pub fn warn_with_hint(
        &mut self,
        field: impl Into<String>,
        reason: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.warnings
            .push(SchemaError::new(field, reason).with_hint(hint));
    }

    /// Print collected warnings in a grouped format.
    pub fn print_warnings(&self) {
        if self.warnings.is_empty() {
            return;
        }

        crate::log!("warning"; "{} in config:", crate::utils::plural_count(self.warnings.len(), "issue"));
        for warning in &self.warnings {
            eprintln!("{warning}");
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[SchemaError] {
        &self.errors
    }

    pub fn warnings(&self) -> &[SchemaError] {
        &self.warnings
    }

    /// Convert to Result (returns Err if there are errors, keeps warnings on Ok).
    pub fn into_result(self) -> Result<Self, Self> {
        if self.errors.is_empty() {
            Ok(self)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", "config validation failed:".red().bold())?;
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                "found".dimmed(),
                self.errors.len().to_string().red().bold(),
                "errors".dimmed()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}
