//! Catalog of email fault templates.
//!
//! Each template is a deterministic transform that injects one structural
//! defect into an address built from a sampled username. The catalog is
//! fixed; invalid-email generation picks from it uniformly.

use rand::Rng;

use crate::validation::EmailFault;

/// Number of domain repetitions used by [`FaultTemplate::OverlongDomain`].
const OVERLONG_DOMAIN_REPEATS: usize = 50;

/// A single fault-injection template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultTemplate {
    /// `user` + `example.com` with no `@`.
    MissingAt,
    /// `user@` with nothing after the `@`.
    MissingDomain,
    /// `user@domain` with no top-level label.
    MissingTld,
    /// `user!@example.com`.
    InvalidLocalCharacter,
    /// `user@example#domain.com`.
    InvalidDomainCharacter,
    /// `user@example@example.com`.
    MultipleAt,
    /// ` user@example.com`.
    LeadingWhitespace,
    /// `user@example .com`.
    WhitespaceBeforeTld,
    /// `user@exa mple.com`.
    WhitespaceInDomain,
    /// The fixed address `u@d.c`.
    TooShort,
    /// `user@` followed by a repeated label far past the length limits.
    OverlongDomain,
    /// `user@domain..com`.
    ConsecutiveDots,
    /// `user@domain.x`.
    SingleCharacterTld,
    /// `user@ex_ample.com`.
    UnderscoreInDomain,
    /// The fixed address `@example.com`.
    EmptyLocalPart,
    /// `user@.com`.
    EmptyDomainName,
}

impl FaultTemplate {
    /// Every template in the catalog.
    pub const ALL: [Self; 16] = [
        Self::MissingAt,
        Self::MissingDomain,
        Self::MissingTld,
        Self::InvalidLocalCharacter,
        Self::InvalidDomainCharacter,
        Self::MultipleAt,
        Self::LeadingWhitespace,
        Self::WhitespaceBeforeTld,
        Self::WhitespaceInDomain,
        Self::TooShort,
        Self::OverlongDomain,
        Self::ConsecutiveDots,
        Self::SingleCharacterTld,
        Self::UnderscoreInDomain,
        Self::EmptyLocalPart,
        Self::EmptyDomainName,
    ];

    /// Picks a template uniformly at random.
    pub fn choose<R: Rng>(rng: &mut R) -> Self {
        let index = rng.random_range(0..Self::ALL.len());
        Self::ALL.get(index).copied().unwrap_or(Self::MissingAt)
    }

    /// Applies the template to `username`.
    ///
    /// # Examples
    ///
    /// ```
    /// use form_fixtures::FaultTemplate;
    ///
    /// assert_eq!(FaultTemplate::MissingAt.apply("ada"), "adaexample.com");
    /// assert_eq!(FaultTemplate::ConsecutiveDots.apply("ada"), "ada@domain..com");
    /// ```
    #[must_use]
    pub fn apply(self, username: &str) -> String {
        match self {
            Self::MissingAt => format!("{username}example.com"),
            Self::MissingDomain => format!("{username}@"),
            Self::MissingTld => format!("{username}@domain"),
            Self::InvalidLocalCharacter => format!("{username}!@example.com"),
            Self::InvalidDomainCharacter => format!("{username}@example#domain.com"),
            Self::MultipleAt => format!("{username}@example@example.com"),
            Self::LeadingWhitespace => format!(" {username}@example.com"),
            Self::WhitespaceBeforeTld => format!("{username}@example .com"),
            Self::WhitespaceInDomain => format!("{username}@exa mple.com"),
            Self::TooShort => "u@d.c".to_owned(),
            Self::OverlongDomain => format!(
                "{username}@{}.com",
                "domain".repeat(OVERLONG_DOMAIN_REPEATS)
            ),
            Self::ConsecutiveDots => format!("{username}@domain..com"),
            Self::SingleCharacterTld => format!("{username}@domain.x"),
            Self::UnderscoreInDomain => format!("{username}@ex_ample.com"),
            Self::EmptyLocalPart => "@example.com".to_owned(),
            Self::EmptyDomainName => format!("{username}@.com"),
        }
    }

    /// The fault an address produced by this template is classified as.
    #[must_use]
    pub const fn expected_fault(self) -> EmailFault {
        match self {
            Self::MissingAt => EmailFault::MissingAt,
            Self::MissingDomain => EmailFault::MissingDomain,
            Self::MissingTld => EmailFault::MissingTld,
            Self::InvalidLocalCharacter => EmailFault::InvalidLocalPart,
            Self::InvalidDomainCharacter => EmailFault::InvalidDomainCharacter,
            Self::MultipleAt => EmailFault::MultipleAt,
            Self::LeadingWhitespace => EmailFault::LeadingWhitespace,
            Self::WhitespaceBeforeTld | Self::WhitespaceInDomain => {
                EmailFault::InternalWhitespace
            }
            Self::TooShort => EmailFault::TooShort,
            Self::OverlongDomain => EmailFault::TooLong,
            Self::ConsecutiveDots => EmailFault::ConsecutiveDots,
            Self::SingleCharacterTld => EmailFault::SingleCharacterTld,
            Self::UnderscoreInDomain => EmailFault::UnderscoreInDomain,
            Self::EmptyLocalPart => EmailFault::EmptyLocalPart,
            Self::EmptyDomainName => EmailFault::EmptyDomainName,
        }
    }
}
