//! Email address generation in valid and fault-injected forms.
//!
//! Valid addresses join a sanitised username to one of [`ALLOWED_DOMAINS`].
//! Invalid addresses apply one template from the fault catalog in
//! [`faults`] to a freshly sampled username.

pub mod faults;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::GenerationError;
use crate::identity::IdentityProvider;
use crate::validation::is_valid_local_part;

pub use faults::FaultTemplate;

/// Maximum number of attempts to sample a usable username.
const MAX_USERNAME_ATTEMPTS: usize = 100;

/// Minimum length of a sanitised username token.
pub const USERNAME_MIN: usize = 3;

/// Maximum length of a sanitised username token.
pub const USERNAME_MAX: usize = 30;

/// Domains used for well-formed addresses.
pub const ALLOWED_DOMAINS: [&str; 5] = [
    "gmail.com",
    "example.com",
    "company.org",
    "business.net",
    "ucalgary.ca",
];

/// Whether a generated address should be well formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailMode {
    /// A syntactically well-formed address on an allowed domain.
    Valid,
    /// An address carrying exactly one structural defect.
    Invalid,
}

/// An email address together with the template that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedEmail {
    /// The address text.
    pub address: String,
    /// The fault template applied, or `None` for valid addresses.
    pub template: Option<FaultTemplate>,
}

/// Generates an email address in the requested mode.
///
/// # Errors
///
/// Returns [`GenerationError::UsernameGenerationFailed`] if the identity
/// provider never yields a usable username.
pub fn generate_email<P, R>(
    identity: &P,
    rng: &mut R,
    mode: EmailMode,
) -> Result<GeneratedEmail, GenerationError>
where
    P: IdentityProvider,
    R: Rng,
{
    let username = generate_username(identity, rng)?;
    match mode {
        EmailMode::Valid => {
            let domain = ALLOWED_DOMAINS.choose(rng).copied().unwrap_or("example.com");
            Ok(GeneratedEmail {
                address: format!("{username}@{domain}"),
                template: None,
            })
        }
        EmailMode::Invalid => {
            let template = FaultTemplate::choose(rng);
            Ok(GeneratedEmail {
                address: template.apply(&username),
                template: Some(template),
            })
        }
    }
}

/// Samples a username token that is safe to use as an email local part.
///
/// Retries up to `MAX_USERNAME_ATTEMPTS` times when sanitisation leaves a
/// token that is too short or otherwise unusable.
///
/// # Errors
///
/// Returns [`GenerationError::UsernameGenerationFailed`] when every attempt
/// is rejected.
pub fn generate_username<P, R>(identity: &P, rng: &mut R) -> Result<String, GenerationError>
where
    P: IdentityProvider,
    R: Rng,
{
    for _ in 0..MAX_USERNAME_ATTEMPTS {
        let candidate = sanitize_username(&identity.username(rng));
        if is_usable_username(&candidate) {
            return Ok(candidate);
        }
    }

    Err(GenerationError::UsernameGenerationFailed {
        max_attempts: MAX_USERNAME_ATTEMPTS,
    })
}

/// Lowercases a raw username and keeps only `[a-z0-9._]`.
///
/// Repeated dots collapse to one, dots at either end are dropped, and the
/// result is cut to [`USERNAME_MAX`] characters.
#[must_use]
pub(crate) fn sanitize_username(raw: &str) -> String {
    let mut token = String::with_capacity(raw.len());
    for c in raw.chars().flat_map(char::to_lowercase) {
        let keep = c.is_ascii_alphanumeric() || c == '_' || c == '.';
        if keep && !(c == '.' && (token.is_empty() || token.ends_with('.'))) {
            token.push(c);
        }
    }
    let bounded: String = token.chars().take(USERNAME_MAX).collect();
    bounded.trim_end_matches('.').to_owned()
}

fn is_usable_username(token: &str) -> bool {
    (USERNAME_MIN..=USERNAME_MAX).contains(&token.len()) && is_valid_local_part(token)
}
