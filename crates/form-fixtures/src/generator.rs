//! Record assembly from seeded generators.
//!
//! [`FixtureGenerator`] owns a ChaCha RNG seeded from
//! [`GenerationSettings`] together with an [`IdentityProvider`], and composes
//! email, password, identity, and date samples into the record shapes the
//! form tests consume. Every record draws fresh values; nothing is shared
//! between records beyond the RNG stream.

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::batch::{FixtureBatch, FixtureKind};
use crate::dates::{YearWindow, sample_date_between};
use crate::email::{EmailMode, generate_email};
use crate::error::GenerationError;
use crate::identity::{FakeIdentity, IdentityProvider};
use crate::password::generate_password;
use crate::records::{
    Education, InvalidEmailRecord, MismatchedPasswordRecord, ProfileRecord, UserRecord,
    WorkExperience,
};
use crate::settings::GenerationSettings;

/// Minimum number of work experience entries per profile.
pub const MIN_WORK_EXPERIENCES: usize = 1;

/// Maximum number of work experience entries per profile.
pub const MAX_WORK_EXPERIENCES: usize = 3;

/// Fields of study offered on the education form.
pub const AREAS_OF_STUDY: [&str; 7] = [
    "Computer Science",
    "Engineering",
    "Business",
    "Mathematics",
    "Physics",
    "Biology",
    "Psychology",
];

/// Degree names used in education descriptions.
pub const DEGREES: [&str; 5] = [
    "Bachelor of Science",
    "Bachelor of Arts",
    "Master of Science",
    "Master of Arts",
    "PhD",
];

/// Seeded assembler for every fixture record shape.
#[derive(Debug, Clone)]
pub struct FixtureGenerator<P = FakeIdentity> {
    identity: P,
    rng: ChaCha8Rng,
    settings: GenerationSettings,
}

impl FixtureGenerator<FakeIdentity> {
    /// Creates a generator backed by [`FakeIdentity`].
    #[must_use]
    pub fn new(settings: GenerationSettings) -> Self {
        Self::with_identity(FakeIdentity, settings)
    }
}

impl<P: IdentityProvider> FixtureGenerator<P> {
    /// Creates a generator with a custom identity provider.
    #[must_use]
    pub fn with_identity(identity: P, settings: GenerationSettings) -> Self {
        Self {
            identity,
            rng: ChaCha8Rng::seed_from_u64(settings.seed()),
            settings,
        }
    }

    /// Returns the settings this generator was seeded from.
    #[must_use]
    pub const fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    /// Generates `count` records of `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if any record fails to generate.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use form_fixtures::{FixtureGenerator, FixtureKind, GenerationSettings};
    ///
    /// let today = NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date");
    /// let mut generator = FixtureGenerator::new(GenerationSettings::new(42, today));
    /// let batch = generator
    ///     .generate(FixtureKind::Registration, 5)
    ///     .expect("generation succeeds");
    ///
    /// assert_eq!(batch.len(), 5);
    /// ```
    pub fn generate(
        &mut self,
        kind: FixtureKind,
        count: usize,
    ) -> Result<FixtureBatch, GenerationError> {
        let batch = match kind {
            FixtureKind::Registration => {
                FixtureBatch::Registration(self.repeat(count, Self::user_record)?)
            }
            FixtureKind::InvalidEmail => {
                FixtureBatch::InvalidEmail(self.repeat(count, Self::invalid_email_record)?)
            }
            FixtureKind::MismatchedPassword => FixtureBatch::MismatchedPassword(
                self.repeat(count, Self::mismatched_password_record)?,
            ),
            FixtureKind::Profile => FixtureBatch::Profile(self.repeat(count, Self::profile_record)?),
        };
        debug!(
            kind = kind.name(),
            count,
            seed = self.settings.seed(),
            "generated fixture batch"
        );
        Ok(batch)
    }

    /// Generates a registration record whose passwords match.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if no usable username can be sampled.
    pub fn user_record(&mut self) -> Result<UserRecord, GenerationError> {
        let password = self.password();
        Ok(UserRecord {
            first_name: self.identity.first_name(&mut self.rng),
            last_name: self.identity.last_name(&mut self.rng),
            phone_number: generate_phone_number(&mut self.rng),
            email_address: generate_email(&self.identity, &mut self.rng, EmailMode::Valid)?
                .address,
            confirm_password: password.clone(),
            password,
        })
    }

    /// Generates credentials with a fault-injected email address.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if no usable username can be sampled.
    pub fn invalid_email_record(&mut self) -> Result<InvalidEmailRecord, GenerationError> {
        let password = self.password();
        Ok(InvalidEmailRecord {
            email_address: generate_email(&self.identity, &mut self.rng, EmailMode::Invalid)?
                .address,
            confirm_password: password.clone(),
            password,
        })
    }

    /// Generates credentials whose confirmation is sampled independently.
    ///
    /// A collision between the two passwords is astronomically unlikely and
    /// is not guarded against.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if no usable username can be sampled.
    pub fn mismatched_password_record(
        &mut self,
    ) -> Result<MismatchedPasswordRecord, GenerationError> {
        let password = self.password();
        let confirm_password = self.password();
        Ok(MismatchedPasswordRecord {
            email_address: generate_email(&self.identity, &mut self.rng, EmailMode::Valid)?
                .address,
            password,
            confirm_password,
        })
    }

    /// Generates a profile with one to three jobs and one education entry.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if a date window cannot be placed.
    pub fn profile_record(&mut self) -> Result<ProfileRecord, GenerationError> {
        let jobs = self
            .rng
            .random_range(MIN_WORK_EXPERIENCES..=MAX_WORK_EXPERIENCES);
        let work_experience = self.repeat(jobs, Self::work_experience)?;
        let education = vec![self.education()?];
        Ok(ProfileRecord {
            work_experience,
            education,
        })
    }

    /// Generates one work experience entry.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if a date window cannot be placed.
    pub fn work_experience(&mut self) -> Result<WorkExperience, GenerationError> {
        let job_title = self.identity.job_title(&mut self.rng);
        let organization_name = self.identity.company(&mut self.rng);
        let start_date = self.date_in(YearWindow::WORK_START)?;
        let end_date = self.date_in(YearWindow::WORK_END)?;
        let described_title = self.identity.job_title(&mut self.rng);
        Ok(WorkExperience {
            job_title,
            organization_name,
            start_date,
            end_date,
            description: format!("Worked as a {described_title}"),
        })
    }

    /// Generates one education entry.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if a date window cannot be placed.
    pub fn education(&mut self) -> Result<Education, GenerationError> {
        let area_of_study = pick(&mut self.rng, &AREAS_OF_STUDY);
        let degree = pick(&mut self.rng, &DEGREES);
        let company = self.identity.company(&mut self.rng);
        Ok(Education {
            school_name: format!("{company} University"),
            start_date: self.date_in(YearWindow::EDUCATION_START)?,
            end_date: self.date_in(YearWindow::EDUCATION_END)?,
            area_of_study: area_of_study.to_owned(),
            description: format!("{degree} in {area_of_study}"),
        })
    }

    fn password(&mut self) -> String {
        generate_password(&mut self.rng, self.settings.password_length())
    }

    fn date_in(&mut self, window: YearWindow) -> Result<chrono::NaiveDate, GenerationError> {
        sample_date_between(&mut self.rng, self.settings.reference_date(), window)
    }

    fn repeat<T>(
        &mut self,
        count: usize,
        mut make: impl FnMut(&mut Self) -> Result<T, GenerationError>,
    ) -> Result<Vec<T>, GenerationError> {
        (0..count).map(|_| make(self)).collect()
    }
}

/// Generates `count` records of `kind` from `settings` with [`FakeIdentity`].
///
/// # Errors
///
/// Returns [`GenerationError`] if any record fails to generate.
pub fn generate_fixtures(
    settings: GenerationSettings,
    kind: FixtureKind,
    count: usize,
) -> Result<FixtureBatch, GenerationError> {
    FixtureGenerator::new(settings).generate(kind, count)
}

/// Formats a phone number as `XXX-XXX-XXXX`.
fn generate_phone_number<R: Rng>(rng: &mut R) -> String {
    let area: u16 = rng.random_range(100..=999);
    let exchange: u16 = rng.random_range(100..=999);
    let line: u16 = rng.random_range(1000..=9999);
    format!("{area}-{exchange}-{line}")
}

fn pick<R: Rng>(rng: &mut R, options: &[&'static str]) -> &'static str {
    options.choose(rng).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    //! Covers record invariants with both the fake and a fixed identity.

    use chrono::NaiveDate;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::validation::{email_fault, is_well_formed_email};

    /// Identity double returning fixed values.
    #[derive(Debug, Clone, Copy)]
    struct StaticIdentity;

    impl IdentityProvider for StaticIdentity {
        fn first_name<R: Rng>(&self, _rng: &mut R) -> String {
            "Grace".to_owned()
        }

        fn last_name<R: Rng>(&self, _rng: &mut R) -> String {
            "Hopper".to_owned()
        }

        fn username<R: Rng>(&self, _rng: &mut R) -> String {
            "grace.hopper".to_owned()
        }

        fn job_title<R: Rng>(&self, _rng: &mut R) -> String {
            "Rear Admiral".to_owned()
        }

        fn company<R: Rng>(&self, _rng: &mut R) -> String {
            "Navy".to_owned()
        }
    }

    #[fixture]
    fn settings() -> GenerationSettings {
        let today = NaiveDate::from_ymd_opt(2024, 11, 20).expect("valid date");
        GenerationSettings::new(42, today)
    }

    #[rstest]
    fn user_records_have_matching_passwords(settings: GenerationSettings) {
        let mut generator = FixtureGenerator::new(settings);
        for _ in 0..50 {
            let record = generator.user_record().expect("generated");
            assert_eq!(record.password, record.confirm_password);
            assert!(is_well_formed_email(&record.email_address));
        }
    }

    #[rstest]
    fn user_records_use_the_identity_provider(settings: GenerationSettings) {
        let mut generator = FixtureGenerator::with_identity(StaticIdentity, settings);
        let record = generator.user_record().expect("generated");
        assert_eq!(record.first_name, "Grace");
        assert_eq!(record.last_name, "Hopper");
        assert!(record.email_address.starts_with("grace.hopper@"));
    }

    #[rstest]
    fn invalid_email_records_fail_classification(settings: GenerationSettings) {
        let mut generator = FixtureGenerator::new(settings);
        for _ in 0..100 {
            let record = generator.invalid_email_record().expect("generated");
            assert!(email_fault(&record.email_address).is_some());
            assert_eq!(record.password, record.confirm_password);
        }
    }

    #[rstest]
    fn mismatched_records_differ(settings: GenerationSettings) {
        let mut generator = FixtureGenerator::new(settings);
        for _ in 0..100 {
            let record = generator.mismatched_password_record().expect("generated");
            assert_ne!(record.password, record.confirm_password);
            assert!(is_well_formed_email(&record.email_address));
        }
    }

    #[rstest]
    fn profile_records_respect_entry_counts(settings: GenerationSettings) {
        let mut generator = FixtureGenerator::new(settings);
        for _ in 0..100 {
            let record = generator.profile_record().expect("generated");
            assert!(
                (MIN_WORK_EXPERIENCES..=MAX_WORK_EXPERIENCES)
                    .contains(&record.work_experience.len())
            );
            assert_eq!(record.education.len(), 1);
        }
    }

    #[rstest]
    fn dates_are_ordered(settings: GenerationSettings) {
        let mut generator = FixtureGenerator::new(settings);
        for _ in 0..200 {
            let job = generator.work_experience().expect("generated");
            assert!(job.start_date < job.end_date, "{job:?}");
            assert!(job.end_date <= settings.reference_date());

            let school = generator.education().expect("generated");
            assert!(school.start_date < school.end_date, "{school:?}");
        }
    }

    #[rstest]
    fn education_fields_come_from_catalogs(settings: GenerationSettings) {
        let mut generator = FixtureGenerator::with_identity(StaticIdentity, settings);
        let school = generator.education().expect("generated");
        assert_eq!(school.school_name, "Navy University");
        assert!(AREAS_OF_STUDY.contains(&school.area_of_study.as_str()));
        let (degree, area) = school
            .description
            .split_once(" in ")
            .expect("description has degree and area");
        assert!(DEGREES.contains(&degree));
        assert_eq!(area, school.area_of_study);
    }

    #[rstest]
    fn work_description_names_a_job(settings: GenerationSettings) {
        let mut generator = FixtureGenerator::with_identity(StaticIdentity, settings);
        let job = generator.work_experience().expect("generated");
        assert_eq!(job.description, "Worked as a Rear Admiral");
        assert_eq!(job.organization_name, "Navy");
    }

    #[rstest]
    #[case(FixtureKind::Registration, 25)]
    #[case(FixtureKind::InvalidEmail, 20)]
    #[case(FixtureKind::MismatchedPassword, 20)]
    #[case(FixtureKind::Profile, 10)]
    #[case(FixtureKind::Profile, 0)]
    fn generates_requested_counts(
        settings: GenerationSettings,
        #[case] kind: FixtureKind,
        #[case] count: usize,
    ) {
        let batch = generate_fixtures(settings, kind, count).expect("generated");
        assert_eq!(batch.len(), count);
        assert_eq!(batch.kind(), kind);
    }

    #[rstest]
    fn generation_is_deterministic(settings: GenerationSettings) {
        let first = generate_fixtures(settings, FixtureKind::Profile, 5).expect("generated");
        let second = generate_fixtures(settings, FixtureKind::Profile, 5).expect("generated");
        assert_eq!(first, second);
    }

    #[rstest]
    fn different_seeds_produce_different_records(settings: GenerationSettings) {
        let other = GenerationSettings::new(43, settings.reference_date());
        let first = generate_fixtures(settings, FixtureKind::Registration, 3).expect("generated");
        let second = generate_fixtures(other, FixtureKind::Registration, 3).expect("generated");
        assert_ne!(first, second);
    }

    #[rstest]
    fn password_length_setting_is_honoured(settings: GenerationSettings) {
        let mut generator = FixtureGenerator::new(settings.with_password_length(16));
        let record = generator.user_record().expect("generated");
        assert_eq!(record.password.len(), 16);
    }

    #[test]
    fn phone_numbers_have_form_shape() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        for _ in 0..100 {
            let phone = generate_phone_number(&mut rng);
            let groups: Vec<&str> = phone.split('-').collect();
            let lengths: Vec<usize> = groups.iter().map(|group| group.len()).collect();
            assert_eq!(lengths, [3, 3, 4], "{phone}");
            assert!(groups.iter().all(|g| g.chars().all(|c| c.is_ascii_digit())));
        }
    }
}
