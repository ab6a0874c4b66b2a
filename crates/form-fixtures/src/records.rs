//! Fixture record types.
//!
//! Field names serialise exactly as the form test suite reads them,
//! including the capitalised `JobTitle`, `SchoolName`, `AreaOfStudy`, and
//! `Education` keys. Dates serialise as `YYYY-MM-DD`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A complete registration form entry with matching passwords.
///
/// # Example
///
/// ```
/// use form_fixtures::UserRecord;
///
/// let record = UserRecord {
///     first_name: "Ada".to_owned(),
///     last_name: "Lovelace".to_owned(),
///     phone_number: "555-123-4567".to_owned(),
///     email_address: "ada@example.com".to_owned(),
///     password: "a1!bcd".to_owned(),
///     confirm_password: "a1!bcd".to_owned(),
/// };
///
/// let json = serde_json::to_string(&record).expect("serialise");
/// assert!(json.contains("\"confirmPassword\""));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Phone number in `XXX-XXX-XXXX` form.
    pub phone_number: String,
    /// Well-formed email address.
    pub email_address: String,
    /// Password.
    pub password: String,
    /// Password confirmation, equal to `password`.
    pub confirm_password: String,
}

/// Credentials whose email address carries one structural defect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidEmailRecord {
    /// Malformed email address.
    pub email_address: String,
    /// Password.
    pub password: String,
    /// Password confirmation, equal to `password`.
    pub confirm_password: String,
}

/// Credentials whose password confirmation was sampled independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MismatchedPasswordRecord {
    /// Well-formed email address.
    pub email_address: String,
    /// Password.
    pub password: String,
    /// Independently sampled confirmation.
    pub confirm_password: String,
}

/// One job held by a profile owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkExperience {
    /// Job title.
    #[serde(rename = "JobTitle")]
    pub job_title: String,
    /// Employer name.
    #[serde(rename = "organizationName")]
    pub organization_name: String,
    /// First day in the role.
    #[serde(rename = "startDate")]
    pub start_date: NaiveDate,
    /// Last day in the role; always after `start_date`.
    #[serde(rename = "endDate")]
    pub end_date: NaiveDate,
    /// Free-text summary.
    pub description: String,
}

/// One course of study.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    /// Institution name.
    #[serde(rename = "SchoolName")]
    pub school_name: String,
    /// First day of study.
    #[serde(rename = "startDate")]
    pub start_date: NaiveDate,
    /// Last day of study; always after `start_date`.
    #[serde(rename = "endDate")]
    pub end_date: NaiveDate,
    /// Field of study.
    #[serde(rename = "AreaOfStudy")]
    pub area_of_study: String,
    /// Degree and field, e.g. `Master of Science in Physics`.
    pub description: String,
}

/// A profile page entry with work history and education.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// One to three jobs.
    #[serde(rename = "workExperience")]
    pub work_experience: Vec<WorkExperience>,
    /// Exactly one course of study.
    #[serde(rename = "Education")]
    pub education: Vec<Education>,
}
