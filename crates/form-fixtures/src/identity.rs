//! Human identity and employer fakery.
//!
//! Record assembly treats name, username, job, and company sampling as an
//! opaque capability so tests can substitute fixed values. [`FakeIdentity`]
//! is the production implementation backed by the `fake` crate's English
//! locale.

use fake::Fake;
use fake::faker::company::raw::CompanyName;
use fake::faker::internet::raw::Username;
use fake::faker::job::raw::Title;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::Rng;

/// Source of human-looking identity values.
///
/// Every method draws from the supplied RNG so that output is reproducible
/// for a fixed seed.
pub trait IdentityProvider {
    /// Samples a given name.
    fn first_name<R: Rng>(&self, rng: &mut R) -> String;

    /// Samples a family name.
    fn last_name<R: Rng>(&self, rng: &mut R) -> String;

    /// Samples a raw username. Callers sanitise the result before use.
    fn username<R: Rng>(&self, rng: &mut R) -> String;

    /// Samples a job title.
    fn job_title<R: Rng>(&self, rng: &mut R) -> String;

    /// Samples a company name.
    fn company<R: Rng>(&self, rng: &mut R) -> String;
}

/// [`IdentityProvider`] backed by `fake`'s English locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FakeIdentity;

impl IdentityProvider for FakeIdentity {
    fn first_name<R: Rng>(&self, rng: &mut R) -> String {
        FirstName(EN).fake_with_rng(rng)
    }

    fn last_name<R: Rng>(&self, rng: &mut R) -> String {
        LastName(EN).fake_with_rng(rng)
    }

    fn username<R: Rng>(&self, rng: &mut R) -> String {
        Username(EN).fake_with_rng(rng)
    }

    fn job_title<R: Rng>(&self, rng: &mut R) -> String {
        Title(EN).fake_with_rng(rng)
    }

    fn company<R: Rng>(&self, rng: &mut R) -> String {
        CompanyName(EN).fake_with_rng(rng)
    }
}
