//! Fixture batches and their JSON files.
//!
//! A batch is the ordered sequence of records written to one file. Files are
//! pretty-printed JSON arrays with four-space indentation and replace any
//! existing file of the same name.

use std::fmt;
use std::str::FromStr;

use camino::Utf8Path;
use cap_std::fs::Dir;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::info;

use crate::atomic_io::write_atomic;
use crate::error::WriteError;
use crate::records::{InvalidEmailRecord, MismatchedPasswordRecord, ProfileRecord, UserRecord};

/// Indentation used for every fixture file.
const JSON_INDENT: &[u8] = b"    ";

/// The kinds of fixture file the generator produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixtureKind {
    /// Valid registration records.
    Registration,
    /// Registration credentials with malformed email addresses.
    InvalidEmail,
    /// Registration credentials with mismatched passwords.
    MismatchedPassword,
    /// Profile work experience and education records.
    Profile,
}

impl FixtureKind {
    /// Every fixture kind, in the order the `all` command writes them.
    pub const ALL: [Self; 4] = [
        Self::Registration,
        Self::InvalidEmail,
        Self::MismatchedPassword,
        Self::Profile,
    ];

    /// Returns the kebab-case name of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Registration => "registration",
            Self::InvalidEmail => "invalid-email",
            Self::MismatchedPassword => "mismatched-password",
            Self::Profile => "profile",
        }
    }

    /// Returns the file name the form tests load this kind from.
    #[must_use]
    pub const fn default_file_name(self) -> &'static str {
        match self {
            Self::Registration => "Registration_data.json",
            Self::InvalidEmail => "invalid_email_data.json",
            Self::MismatchedPassword => "unmatched_password_data.json",
            Self::Profile => "Profile.json",
        }
    }

    /// Returns the number of records written when no count is given.
    #[must_use]
    pub const fn default_count(self) -> usize {
        match self {
            Self::Registration => 25,
            Self::InvalidEmail | Self::MismatchedPassword => 20,
            Self::Profile => 10,
        }
    }
}

impl fmt::Display for FixtureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown fixture kind name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown fixture kind '{name}'")]
pub struct UnknownFixtureKind {
    /// The rejected name.
    pub name: String,
}

impl FromStr for FixtureKind {
    type Err = UnknownFixtureKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownFixtureKind { name: s.to_owned() })
    }
}

/// An ordered sequence of records of one kind.
///
/// Serialises as a bare JSON array of its records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FixtureBatch {
    /// Valid registration records.
    Registration(Vec<UserRecord>),
    /// Invalid-email records.
    InvalidEmail(Vec<InvalidEmailRecord>),
    /// Mismatched-password records.
    MismatchedPassword(Vec<MismatchedPasswordRecord>),
    /// Profile records.
    Profile(Vec<ProfileRecord>),
}

impl FixtureBatch {
    /// Returns the kind of record this batch holds.
    #[must_use]
    pub const fn kind(&self) -> FixtureKind {
        match self {
            Self::Registration(_) => FixtureKind::Registration,
            Self::InvalidEmail(_) => FixtureKind::InvalidEmail,
            Self::MismatchedPassword(_) => FixtureKind::MismatchedPassword,
            Self::Profile(_) => FixtureKind::Profile,
        }
    }

    /// Returns the number of records in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Registration(records) => records.len(),
            Self::InvalidEmail(records) => records.len(),
            Self::MismatchedPassword(records) => records.len(),
            Self::Profile(records) => records.len(),
        }
    }

    /// Returns `true` if the batch holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Renders `value` as four-space-indented JSON with a trailing newline.
///
/// # Errors
///
/// Returns [`WriteError::Serialize`] if the value cannot be serialised.
///
/// # Example
///
/// ```
/// use form_fixtures::{FixtureBatch, render_json};
///
/// let json = render_json(&FixtureBatch::Profile(Vec::new())).expect("render");
/// assert_eq!(json, "[]\n");
/// ```
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String, WriteError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|err| WriteError::Serialize {
            message: err.to_string(),
        })?;
    buffer.push(b'\n');
    String::from_utf8(buffer).map_err(|err| WriteError::Serialize {
        message: err.to_string(),
    })
}

/// Writes `batch` to `file_name` inside `dir`, replacing any existing file.
///
/// # Errors
///
/// Returns [`WriteError`] if the batch cannot be serialised, the name is not
/// a plain file name, or the file cannot be written.
pub fn write_batch(dir: &Dir, file_name: &Utf8Path, batch: &FixtureBatch) -> Result<(), WriteError> {
    let contents = render_json(batch)?;
    write_atomic(dir, file_name, &contents)?;
    info!(
        kind = batch.kind().name(),
        count = batch.len(),
        path = %file_name,
        "wrote fixture file"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::records::{Education, WorkExperience};

    #[rstest]
    #[case(FixtureKind::Registration, "Registration_data.json", 25)]
    #[case(FixtureKind::InvalidEmail, "invalid_email_data.json", 20)]
    #[case(FixtureKind::MismatchedPassword, "unmatched_password_data.json", 20)]
    #[case(FixtureKind::Profile, "Profile.json", 10)]
    fn kinds_have_form_defaults(
        #[case] kind: FixtureKind,
        #[case] file_name: &str,
        #[case] count: usize,
    ) {
        assert_eq!(kind.default_file_name(), file_name);
        assert_eq!(kind.default_count(), count);
    }

    #[test]
    fn kind_names_round_trip_through_from_str() {
        for kind in FixtureKind::ALL {
            assert_eq!(kind.name().parse::<FixtureKind>(), Ok(kind));
        }
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert_eq!(
            "resume".parse::<FixtureKind>(),
            Err(UnknownFixtureKind {
                name: "resume".to_owned()
            })
        );
    }

    #[test]
    fn renders_with_four_space_indent() {
        let rendered = render_json(&json!([{"a": 1}])).expect("render");
        assert_eq!(rendered, "[\n    {\n        \"a\": 1\n    }\n]\n");
    }

    #[test]
    fn batch_serialises_as_bare_array() {
        let date = NaiveDate::from_ymd_opt(2020, 1, 2).expect("valid date");
        let batch = FixtureBatch::Profile(vec![ProfileRecord {
            work_experience: vec![WorkExperience {
                job_title: "Clerk".to_owned(),
                organization_name: "Acme".to_owned(),
                start_date: date,
                end_date: date,
                description: "Worked as a Clerk".to_owned(),
            }],
            education: vec![Education {
                school_name: "Acme University".to_owned(),
                start_date: date,
                end_date: date,
                area_of_study: "Biology".to_owned(),
                description: "PhD in Biology".to_owned(),
            }],
        }]);

        let value = serde_json::to_value(&batch).expect("serialise");
        let records = value.as_array().expect("array");
        assert_eq!(records.len(), 1);
        assert_eq!(batch.len(), 1);
        assert!(!batch.is_empty());
        assert_eq!(batch.kind(), FixtureKind::Profile);
    }
}
