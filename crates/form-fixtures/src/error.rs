//! Error types for the form-fixtures crate.
//!
//! This module defines semantic error enums for record generation, fixture
//! file writes, and the key-rename utility, following the project's error
//! handling conventions with `thiserror`.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while generating fixture records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Failed to sample a usable username token after maximum retries.
    #[error("failed to generate valid username after {max_attempts} attempts")]
    UsernameGenerationFailed {
        /// Number of attempts made before giving up.
        max_attempts: usize,
    },

    /// A date window could not be placed relative to the reference date.
    #[error("date window {years_ago} years before the reference date is out of range")]
    DateOutOfRange {
        /// Offset in years that could not be represented.
        years_ago: u32,
    },
}

/// Errors that can occur when writing a fixture file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WriteError {
    /// The target path does not name a single file inside the directory.
    #[error("fixture path '{path}' must be a plain file name")]
    InvalidFileName {
        /// The rejected path.
        path: PathBuf,
    },

    /// The records could not be serialised to JSON.
    #[error("failed to serialise fixture JSON: {message}")]
    Serialize {
        /// Description of the serialisation error.
        message: String,
    },

    /// The file could not be written.
    #[error("failed to write fixture file at '{path}': {message}")]
    Io {
        /// Path of the file being written.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },
}

/// Errors surfaced by the key-rename utility.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenameError {
    /// The JSON file could not be read.
    #[error("failed to read JSON file at '{path}': {message}")]
    Read {
        /// Path to the JSON file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The file contents are not valid JSON.
    #[error("invalid JSON in '{path}': {message}")]
    Parse {
        /// Path to the JSON file.
        path: PathBuf,
        /// Description of the parse error.
        message: String,
    },

    /// The top-level JSON value is not an object.
    #[error("expected a JSON object at the top level of '{path}'")]
    NotAnObject {
        /// Path to the JSON file.
        path: PathBuf,
    },

    /// The rewritten object could not be saved.
    #[error(transparent)]
    Write(#[from] WriteError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_error_username_formats_correctly() {
        let err = GenerationError::UsernameGenerationFailed { max_attempts: 100 };
        assert_eq!(
            err.to_string(),
            "failed to generate valid username after 100 attempts"
        );
    }

    #[test]
    fn generation_error_date_formats_correctly() {
        let err = GenerationError::DateOutOfRange { years_ago: 15 };
        assert_eq!(
            err.to_string(),
            "date window 15 years before the reference date is out of range"
        );
    }

    #[test]
    fn write_error_invalid_file_name_formats_correctly() {
        let err = WriteError::InvalidFileName {
            path: PathBuf::from("nested/Profile.json"),
        };
        assert_eq!(
            err.to_string(),
            "fixture path 'nested/Profile.json' must be a plain file name"
        );
    }

    #[test]
    fn write_error_io_formats_correctly() {
        let err = WriteError::Io {
            path: PathBuf::from("Profile.json"),
            message: "permission denied".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "failed to write fixture file at 'Profile.json': permission denied"
        );
    }

    #[test]
    fn rename_error_not_an_object_formats_correctly() {
        let err = RenameError::NotAnObject {
            path: PathBuf::from("Experience_Data.json"),
        };
        assert_eq!(
            err.to_string(),
            "expected a JSON object at the top level of 'Experience_Data.json'"
        );
    }

    #[test]
    fn rename_error_write_is_transparent() {
        let err = RenameError::from(WriteError::Serialize {
            message: "boom".to_owned(),
        });
        assert_eq!(err.to_string(), "failed to serialise fixture JSON: boom");
    }
}
