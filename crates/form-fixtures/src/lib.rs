//! Seedable test fixtures for a registration and profile web form.
//!
//! This crate generates the JSON files a form test suite loads: valid
//! registrations, registrations with malformed email addresses, registrations
//! with mismatched passwords, and profile work and education histories.
//! Output is reproducible for a given seed and reference date.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Password generation with guaranteed letter, digit, and symbol coverage
//! - Valid email generation on a fixed set of domains
//! - Invalid email generation from a catalog of fault templates
//! - Structural email classification for verifying generated addresses
//! - Profile generation with ordered start and end dates
//! - Four-space-indented JSON output written atomically
//! - A separate key-rename utility for single-object JSON files
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use form_fixtures::{FixtureBatch, FixtureKind, GenerationSettings, generate_fixtures};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date");
//! let settings = GenerationSettings::new(42, today);
//! let batch = generate_fixtures(settings, FixtureKind::Registration, 3)
//!     .expect("generation succeeds");
//!
//! let FixtureBatch::Registration(records) = batch else {
//!     panic!("expected registration records");
//! };
//! assert!(records.iter().all(|r| r.password == r.confirm_password));
//! ```

mod atomic_io;
mod batch;
mod dates;
pub mod email;
mod error;
mod generator;
mod identity;
mod logging;
mod password;
mod records;
mod rename_keys;
mod settings;
mod validation;

pub use batch::{FixtureBatch, FixtureKind, UnknownFixtureKind, render_json, write_batch};
pub use dates::{WindowEnd, YearWindow, sample_date_between};
pub use email::{ALLOWED_DOMAINS, EmailMode, FaultTemplate, GeneratedEmail, generate_email};
pub use error::{GenerationError, RenameError, WriteError};
pub use generator::{
    AREAS_OF_STUDY, DEGREES, FixtureGenerator, MAX_WORK_EXPERIENCES, MIN_WORK_EXPERIENCES,
    generate_fixtures,
};
pub use identity::{FakeIdentity, IdentityProvider};
pub use logging::init_logging;
pub use password::{
    DEFAULT_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH, PASSWORD_SYMBOLS,
    PasswordComposition, generate_password, password_composition,
};
pub use records::{
    Education, InvalidEmailRecord, MismatchedPasswordRecord, ProfileRecord, UserRecord,
    WorkExperience,
};
pub use rename_keys::{
    DEFAULT_RENAMES, InvalidKeyRename, KeyRename, RenameOutcome, rename_keys, rename_keys_in_file,
};
pub use settings::GenerationSettings;
pub use validation::{
    DOMAIN_LABEL_MAX_LENGTH, EMAIL_MAX_LENGTH, EMAIL_MIN_LENGTH, EmailFault, email_fault,
    is_well_formed_email,
};
