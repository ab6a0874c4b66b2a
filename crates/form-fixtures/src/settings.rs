//! Generation settings shared by every fixture kind.

use chrono::{Local, NaiveDate};

use crate::password::DEFAULT_PASSWORD_LENGTH;

/// Inputs that make a generation run reproducible.
///
/// The same settings always produce identical fixtures.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use form_fixtures::GenerationSettings;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date");
/// let settings = GenerationSettings::new(42, today).with_password_length(16);
///
/// assert_eq!(settings.seed(), 42);
/// assert_eq!(settings.password_length(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSettings {
    seed: u64,
    password_length: usize,
    reference_date: NaiveDate,
}

impl GenerationSettings {
    /// Creates settings with the default password length.
    #[must_use]
    pub const fn new(seed: u64, reference_date: NaiveDate) -> Self {
        Self {
            seed,
            password_length: DEFAULT_PASSWORD_LENGTH,
            reference_date,
        }
    }

    /// Creates settings whose date windows end at the local current date.
    #[must_use]
    pub fn for_today(seed: u64) -> Self {
        Self::new(seed, Local::now().date_naive())
    }

    /// Overrides the requested password length.
    #[must_use]
    pub const fn with_password_length(mut self, password_length: usize) -> Self {
        self.password_length = password_length;
        self
    }

    /// Returns the RNG seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the requested password length before clamping.
    #[must_use]
    pub const fn password_length(&self) -> usize {
        self.password_length
    }

    /// Returns the day date windows are measured back from.
    #[must_use]
    pub const fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }
}
