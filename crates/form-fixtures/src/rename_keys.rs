//! One-shot key renaming for a single-object JSON file.
//!
//! This utility is independent of record generation. It loads one JSON
//! object, moves values from old keys to new keys, and rewrites the file in
//! place with the same four-space layout fixture files use.

use std::fmt;
use std::str::FromStr;

use camino::Utf8Path;
use cap_std::fs::Dir;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::atomic_io::write_atomic;
use crate::batch::render_json;
use crate::error::RenameError;

/// Key renames applied when none are supplied.
pub const DEFAULT_RENAMES: [(&str, &str); 2] = [
    ("School Name", "SchoolName"),
    ("Area of Study", "SchoolAreaOfStudy"),
];

/// Moves the value stored under `from` to `to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRename {
    /// Existing key.
    pub from: String,
    /// Replacement key.
    pub to: String,
}

impl KeyRename {
    /// Creates a rename from `from` to `to`.
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Returns [`DEFAULT_RENAMES`] as owned renames.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        DEFAULT_RENAMES
            .iter()
            .map(|(from, to)| Self::new(*from, *to))
            .collect()
    }
}

impl fmt::Display for KeyRename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.from, self.to)
    }
}

/// Error returned when a `FROM=TO` rename cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("rename must look like FROM=TO with non-empty keys, got '{value}'")]
pub struct InvalidKeyRename {
    /// The rejected text.
    pub value: String,
}

impl FromStr for KeyRename {
    type Err = InvalidKeyRename;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((from, to)) if !from.is_empty() && !to.is_empty() => Ok(Self::new(from, to)),
            _ => Err(InvalidKeyRename {
                value: s.to_owned(),
            }),
        }
    }
}

/// Result of renaming keys in one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameOutcome {
    /// Renames whose source key was present.
    pub applied: Vec<KeyRename>,
    /// Renames whose source key was absent.
    pub skipped: Vec<KeyRename>,
}

/// Applies `renames` in order to `object`.
///
/// An absent source key is skipped. A present target key is overwritten.
/// Renamed keys move to the end of the object; every other key keeps its
/// position.
///
/// # Example
///
/// ```
/// use form_fixtures::{KeyRename, rename_keys};
/// use serde_json::json;
///
/// let mut value = json!({"School Name": "Acme University", "startDate": "2012-09-01"});
/// let object = value.as_object_mut().expect("object");
/// let outcome = rename_keys(object, &KeyRename::defaults());
///
/// assert_eq!(object.get("SchoolName"), Some(&json!("Acme University")));
/// assert_eq!(outcome.applied.len(), 1);
/// assert_eq!(outcome.skipped.len(), 1);
/// ```
pub fn rename_keys(object: &mut Map<String, Value>, renames: &[KeyRename]) -> RenameOutcome {
    let mut outcome = RenameOutcome::default();
    for rename in renames {
        if let Some(value) = object.shift_remove(&rename.from) {
            object.insert(rename.to.clone(), value);
            outcome.applied.push(rename.clone());
        } else {
            outcome.skipped.push(rename.clone());
        }
    }
    outcome
}

/// Renames keys in the single JSON object stored at `path` inside `dir`.
///
/// # Errors
///
/// Returns [`RenameError`] if the file cannot be read, is not valid JSON,
/// does not hold an object, or cannot be rewritten.
pub fn rename_keys_in_file(
    dir: &Dir,
    path: &Utf8Path,
    renames: &[KeyRename],
) -> Result<RenameOutcome, RenameError> {
    let contents = dir.read_to_string(path).map_err(|err| RenameError::Read {
        path: path.as_std_path().to_path_buf(),
        message: err.to_string(),
    })?;
    let mut value: Value = serde_json::from_str(&contents).map_err(|err| RenameError::Parse {
        path: path.as_std_path().to_path_buf(),
        message: err.to_string(),
    })?;
    let Some(object) = value.as_object_mut() else {
        return Err(RenameError::NotAnObject {
            path: path.as_std_path().to_path_buf(),
        });
    };

    let outcome = rename_keys(object, renames);
    for rename in &outcome.skipped {
        debug!(from = %rename.from, "key not present; skipping rename");
    }

    write_atomic(dir, path, &render_json(&value)?)?;
    info!(
        path = %path,
        applied = outcome.applied.len(),
        skipped = outcome.skipped.len(),
        "rewrote JSON file"
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn renames_both_default_keys() {
        let mut map = object(json!({
            "School Name": "Acme University",
            "Area of Study": "Physics",
            "startDate": "2012-09-01"
        }));

        let outcome = rename_keys(&mut map, &KeyRename::defaults());

        assert_eq!(
            Value::Object(map),
            json!({
                "SchoolName": "Acme University",
                "SchoolAreaOfStudy": "Physics",
                "startDate": "2012-09-01"
            })
        );
        assert_eq!(outcome.applied, KeyRename::defaults());
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn leaves_objects_without_source_keys_untouched() {
        let original = json!({"SchoolName": "Acme University"});
        let mut map = object(original.clone());

        let outcome = rename_keys(&mut map, &KeyRename::defaults());

        assert_eq!(Value::Object(map), original);
        assert!(outcome.applied.is_empty());
        assert_eq!(outcome.skipped.len(), 2);
    }

    #[test]
    fn overwrites_existing_target_key() {
        let mut map = object(json!({"old": 1, "new": 2}));
        rename_keys(&mut map, &[KeyRename::new("old", "new")]);
        assert_eq!(Value::Object(map), json!({"new": 1}));
    }

    #[test]
    fn untouched_keys_keep_their_order() {
        let mut map = object(json!({"zeta": 1, "School Name": "Acme", "alpha": 2}));

        rename_keys(&mut map, &KeyRename::defaults());

        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha", "SchoolName"]);
    }

    #[rstest]
    #[case("School Name=SchoolName", KeyRename::new("School Name", "SchoolName"))]
    #[case("a=b=c", KeyRename::new("a", "b=c"))]
    fn parses_renames(#[case] raw: &str, #[case] expected: KeyRename) {
        assert_eq!(raw.parse::<KeyRename>(), Ok(expected));
    }

    #[rstest]
    #[case("no-separator")]
    #[case("=to")]
    #[case("from=")]
    fn rejects_malformed_renames(#[case] raw: &str) {
        assert!(raw.parse::<KeyRename>().is_err());
    }

    #[test]
    fn display_round_trips() {
        let rename = KeyRename::new("Area of Study", "SchoolAreaOfStudy");
        assert_eq!(rename.to_string().parse::<KeyRename>(), Ok(rename));
    }
}
