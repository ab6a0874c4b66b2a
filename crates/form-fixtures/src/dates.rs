//! Calendar windows relative to a reference date.
//!
//! Start and end dates for work and education entries come from disjoint,
//! ordered windows so that a start date always precedes its end date
//! without comparison or retry. The start windows are half-open at their
//! recent edge; the end windows are closed. Where a start window's recent
//! edge equals an end window's far edge, a start date therefore stays
//! strictly earlier.

use chrono::{Months, NaiveDate};
use rand::Rng;

use crate::error::GenerationError;

/// Whether a window includes its most recent day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEnd {
    /// The most recent day is excluded.
    Exclusive,
    /// The most recent day is included.
    Inclusive,
}

/// A span of days between two offsets, in whole years, before a reference
/// date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearWindow {
    /// Offset of the earliest day.
    pub earliest_years_ago: u32,
    /// Offset of the most recent day.
    pub latest_years_ago: u32,
    /// Whether the most recent day may be drawn.
    pub end: WindowEnd,
}

impl YearWindow {
    /// Window for work experience start dates: 10 to 2 years ago.
    pub const WORK_START: Self = Self::new(10, 2, WindowEnd::Exclusive);
    /// Window for work experience end dates: 2 years ago to today.
    pub const WORK_END: Self = Self::new(2, 0, WindowEnd::Inclusive);
    /// Window for education start dates: 15 to 10 years ago.
    pub const EDUCATION_START: Self = Self::new(15, 10, WindowEnd::Exclusive);
    /// Window for education end dates: 10 to 5 years ago.
    pub const EDUCATION_END: Self = Self::new(10, 5, WindowEnd::Inclusive);

    /// Creates a window spanning `earliest_years_ago` to `latest_years_ago`.
    #[must_use]
    pub const fn new(earliest_years_ago: u32, latest_years_ago: u32, end: WindowEnd) -> Self {
        Self {
            earliest_years_ago,
            latest_years_ago,
            end,
        }
    }

    /// Resolves the window to its first and last drawable days.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::DateOutOfRange`] when an edge falls outside
    /// the representable calendar.
    pub fn bounds(self, reference: NaiveDate) -> Result<(NaiveDate, NaiveDate), GenerationError> {
        let first = years_before(reference, self.earliest_years_ago)?;
        let recent = years_before(reference, self.latest_years_ago)?;
        let last = match self.end {
            WindowEnd::Inclusive => recent,
            WindowEnd::Exclusive => recent.pred_opt().ok_or(GenerationError::DateOutOfRange {
                years_ago: self.latest_years_ago,
            })?,
        };
        Ok((first, last.max(first)))
    }
}

/// Samples a day uniformly from `window` relative to `reference`.
///
/// # Errors
///
/// Returns [`GenerationError::DateOutOfRange`] when the window cannot be
/// placed before `reference`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use form_fixtures::{YearWindow, sample_date_between};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date");
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
/// let date = sample_date_between(&mut rng, today, YearWindow::WORK_END).expect("in range");
///
/// assert!(date <= today);
/// ```
pub fn sample_date_between<R: Rng>(
    rng: &mut R,
    reference: NaiveDate,
    window: YearWindow,
) -> Result<NaiveDate, GenerationError> {
    let (first, last) = window.bounds(reference)?;
    let span = last.signed_duration_since(first).num_days();
    let offset = rng.random_range(0..=span);
    first
        .checked_add_signed(chrono::Duration::days(offset))
        .ok_or(GenerationError::DateOutOfRange {
            years_ago: window.earliest_years_ago,
        })
}

fn years_before(reference: NaiveDate, years: u32) -> Result<NaiveDate, GenerationError> {
    years
        .checked_mul(12)
        .and_then(|months| reference.checked_sub_months(Months::new(months)))
        .ok_or(GenerationError::DateOutOfRange { years_ago: years })
}
