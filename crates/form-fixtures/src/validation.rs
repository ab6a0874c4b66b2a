//! Structural email validation used to classify generated addresses.
//!
//! The rules here are deliberately stricter than RFC 5322: they describe the
//! addresses a registration form is expected to accept. [`email_fault`]
//! reports the first rule an address breaks, which lets each fault template
//! be checked against the defect it is meant to inject.
//!
//! # Rules
//!
//! - No whitespace anywhere
//! - Length between [`EMAIL_MIN_LENGTH`] and [`EMAIL_MAX_LENGTH`] characters
//! - Exactly one `@`, with non-empty local and domain parts
//! - Local part: letters, digits, and `._%+-`, no leading, trailing, or
//!   doubled dot
//! - Domain: dot-separated labels of letters, digits, and hyphens, each at
//!   most [`DOMAIN_LABEL_MAX_LENGTH`] characters, ending in an alphabetic TLD
//!   of at least two characters

use std::fmt;

use serde::Serialize;

/// Shortest address considered well formed (`a@b.co`).
pub const EMAIL_MIN_LENGTH: usize = 6;

/// Longest address considered well formed.
pub const EMAIL_MAX_LENGTH: usize = 254;

/// Longest permitted domain label.
pub const DOMAIN_LABEL_MAX_LENGTH: usize = 63;

/// Structural defect detected in an email address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmailFault {
    /// The address starts with whitespace.
    LeadingWhitespace,
    /// The address contains whitespace after the first character.
    InternalWhitespace,
    /// The address or one of its domain labels is too long.
    TooLong,
    /// The address is shorter than [`EMAIL_MIN_LENGTH`].
    TooShort,
    /// The address has no `@`.
    MissingAt,
    /// The address has more than one `@`.
    MultipleAt,
    /// Nothing precedes the `@`.
    EmptyLocalPart,
    /// Nothing follows the `@`.
    MissingDomain,
    /// The local part holds a disallowed character or misplaced dot.
    InvalidLocalPart,
    /// The domain starts with a dot, leaving no name before the TLD.
    EmptyDomainName,
    /// The domain contains an empty label between two dots.
    ConsecutiveDots,
    /// The domain has no top-level label.
    MissingTld,
    /// The domain contains an underscore.
    UnderscoreInDomain,
    /// The domain holds a character other than letters, digits, dots, or
    /// hyphens, or a label starts or ends with a hyphen.
    InvalidDomainCharacter,
    /// The top-level label is a single character.
    SingleCharacterTld,
    /// The top-level label contains non-alphabetic characters.
    InvalidTld,
}

impl EmailFault {
    /// Returns the stable kebab-case name of this fault.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LeadingWhitespace => "leading-whitespace",
            Self::InternalWhitespace => "internal-whitespace",
            Self::TooLong => "too-long",
            Self::TooShort => "too-short",
            Self::MissingAt => "missing-at",
            Self::MultipleAt => "multiple-at",
            Self::EmptyLocalPart => "empty-local-part",
            Self::MissingDomain => "missing-domain",
            Self::InvalidLocalPart => "invalid-local-part",
            Self::EmptyDomainName => "empty-domain-name",
            Self::ConsecutiveDots => "consecutive-dots",
            Self::MissingTld => "missing-tld",
            Self::UnderscoreInDomain => "underscore-in-domain",
            Self::InvalidDomainCharacter => "invalid-domain-character",
            Self::SingleCharacterTld => "single-character-tld",
            Self::InvalidTld => "invalid-tld",
        }
    }
}

impl fmt::Display for EmailFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns `true` if the address satisfies every structural rule.
///
/// # Examples
///
/// ```
/// use form_fixtures::is_well_formed_email;
///
/// assert!(is_well_formed_email("ada.lovelace@example.com"));
/// assert!(!is_well_formed_email("ada.lovelaceexample.com"));
/// assert!(!is_well_formed_email("ada@domain.x"));
/// ```
#[must_use]
pub fn is_well_formed_email(address: &str) -> bool {
    email_fault(address).is_none()
}

/// Reports the first structural rule `address` breaks, if any.
///
/// # Examples
///
/// ```
/// use form_fixtures::{EmailFault, email_fault};
///
/// assert_eq!(email_fault("ada@example.com"), None);
/// assert_eq!(email_fault("ada@domain..com"), Some(EmailFault::ConsecutiveDots));
/// assert_eq!(email_fault(" ada@example.com"), Some(EmailFault::LeadingWhitespace));
/// ```
#[must_use]
pub fn email_fault(address: &str) -> Option<EmailFault> {
    if address.starts_with(char::is_whitespace) {
        return Some(EmailFault::LeadingWhitespace);
    }
    if address.contains(char::is_whitespace) {
        return Some(EmailFault::InternalWhitespace);
    }

    let length = address.chars().count();
    if length > EMAIL_MAX_LENGTH {
        return Some(EmailFault::TooLong);
    }

    let mut parts = address.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return Some(if address.contains('@') {
            EmailFault::MultipleAt
        } else {
            EmailFault::MissingAt
        });
    };

    if local.is_empty() {
        return Some(EmailFault::EmptyLocalPart);
    }
    if domain.is_empty() {
        return Some(EmailFault::MissingDomain);
    }
    if length < EMAIL_MIN_LENGTH {
        return Some(EmailFault::TooShort);
    }
    if !is_valid_local_part(local) {
        return Some(EmailFault::InvalidLocalPart);
    }

    domain_fault(domain)
}

/// Returns `true` if `local` may precede the `@` of a well-formed address.
#[must_use]
pub(crate) fn is_valid_local_part(local: &str) -> bool {
    !local.is_empty()
        && !local.starts_with('.')
        && !local.ends_with('.')
        && !local.contains("..")
        && local.chars().all(is_valid_local_char)
}

const fn is_valid_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-')
}

fn domain_fault(domain: &str) -> Option<EmailFault> {
    let labels: Vec<&str> = domain.split('.').collect();

    if labels.first().is_some_and(|label| label.is_empty()) {
        return Some(EmailFault::EmptyDomainName);
    }
    let Some((tld, names)) = labels.split_last() else {
        return Some(EmailFault::MissingTld);
    };
    if names.iter().any(|label| label.is_empty()) {
        return Some(EmailFault::ConsecutiveDots);
    }
    if names.is_empty() || tld.is_empty() {
        return Some(EmailFault::MissingTld);
    }
    if domain.contains('_') {
        return Some(EmailFault::UnderscoreInDomain);
    }
    if labels.iter().any(|label| !is_valid_domain_label(label)) {
        return Some(EmailFault::InvalidDomainCharacter);
    }
    if labels
        .iter()
        .any(|label| label.chars().count() > DOMAIN_LABEL_MAX_LENGTH)
    {
        return Some(EmailFault::TooLong);
    }
    if tld.chars().count() < 2 {
        return Some(EmailFault::SingleCharacterTld);
    }
    if !tld.chars().all(|c| c.is_ascii_alphabetic()) {
        return Some(EmailFault::InvalidTld);
    }
    None
}

fn is_valid_domain_label(label: &str) -> bool {
    !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}
