//! Typed decoding of a parsed config document.
//!
//! Wraps the format deserializer twice:
//! - `serde_ignored` collects keys the schema does not know
//! - `serde_path_to_error` records where the first violation happened
//!
//! ```text
//! toml::Value / serde_json::Value → serde_ignored → serde_path_to_error → T
//! ```

use super::SchemaError;
use serde::{Deserialize, Deserializer};
use std::fmt::Display;

/// Bare message of a format error (no line/column decoration).
pub trait ErrorMessage {
    fn message(&self) -> String;
}

impl ErrorMessage for toml::de::Error {
    fn message(&self) -> String {
        toml::de::Error::message(self).to_string()
    }
}

impl ErrorMessage for serde_json::Error {
    fn message(&self) -> String {
        // Errors raised while walking a `serde_json::Value` carry no position
        self.to_string()
    }
}

/// Decode `T`, returning it with the paths of ignored (unknown) keys.
///
/// Stops at the first violation and reports it with its full field path.
pub fn decode<'de, D, T>(deserializer: D) -> Result<(T, Vec<String>), SchemaError>
where
    D: Deserializer<'de>,
    D::Error: ErrorMessage,
    T: Deserialize<'de>,
{
    let mut ignored = Vec::new();
    let mut track = |path: serde_ignored::Path<'_>| ignored.push(ignored_path(&path));

    let result =
        serde_path_to_error::deserialize(serde_ignored::Deserializer::new(deserializer, &mut track));

    match result {
        Ok(value) => Ok((value, ignored)),
        Err(err) => Err(schema_error(&err)),
    }
}

fn schema_error<E: ErrorMessage>(err: &serde_path_to_error::Error<E>) -> SchemaError {
    let path = err.path().to_string();
    let message = err.inner().message();

    // serde reports a missing key at its parent; point at the key itself
    if let Some(name) = message
        .strip_prefix("missing field `")
        .and_then(|rest| rest.strip_suffix('`'))
    {
        return SchemaError::new(join(&path, name), "required field is missing");
    }

    SchemaError::new(path, message)
}

/// Render an ignored key the way field paths are written (`profile.links[0].url`).
fn ignored_path(path: &serde_ignored::Path<'_>) -> String {
    use serde_ignored::Path;

    match path {
        Path::Root => String::new(),
        Path::Seq { parent, index } => format!("{}[{index}]", ignored_path(parent)),
        Path::Map { parent, key } => join(&ignored_path(parent), key),
        Path::Some { parent } | Path::NewtypeStruct { parent } | Path::NewtypeVariant { parent } => {
            ignored_path(parent)
        }
    }
}

/// Join a serde path (`.` for the root) with a child key.
fn join(parent: &str, key: &str) -> String {
    if parent.is_empty() || parent == "." {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

/// `deserialize_with` helper: an empty string means "not set".
///
/// Lets authors keep `url = ""` for optional locations.
pub fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<String>,
    T::Error: Display,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(text) if !text.is_empty() => T::try_from(text)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}
