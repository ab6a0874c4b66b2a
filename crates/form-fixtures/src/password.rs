//! Password generation with guaranteed character-class coverage.
//!
//! Every generated password contains at least one ASCII letter, one digit,
//! and one symbol from [`PASSWORD_SYMBOLS`], regardless of the requested
//! length. One character from each class seeds the output, the remaining
//! positions are drawn uniformly from the union of all classes, and the
//! whole sequence is shuffled so the seeded characters carry no positional
//! signal.

use rand::Rng;
use rand::seq::SliceRandom;

/// Shortest password the generator will produce.
pub const MIN_PASSWORD_LENGTH: usize = 4;

/// Longest password the generator will produce.
pub const MAX_PASSWORD_LENGTH: usize = 4096;

/// Password length used when none is configured.
pub const DEFAULT_PASSWORD_LENGTH: usize = 10;

/// Symbols accepted by the registration form.
pub const PASSWORD_SYMBOLS: &str = "!@#$&*";

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = PASSWORD_SYMBOLS.as_bytes();
const ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$&*";

/// Character classes present in a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordComposition {
    /// At least one ASCII letter.
    pub has_letter: bool,
    /// At least one ASCII digit.
    pub has_digit: bool,
    /// At least one symbol from [`PASSWORD_SYMBOLS`].
    pub has_symbol: bool,
}

impl PasswordComposition {
    /// Returns `true` when all three required classes are present.
    #[must_use]
    pub const fn is_complete(self) -> bool {
        self.has_letter && self.has_digit && self.has_symbol
    }
}

/// Generates a password of `length` characters, clamped to
/// [`MIN_PASSWORD_LENGTH`]..=[`MAX_PASSWORD_LENGTH`].
///
/// # Example
///
/// ```
/// use form_fixtures::{generate_password, password_composition};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let password = generate_password(&mut rng, 2);
///
/// assert_eq!(password.len(), 4);
/// assert!(password_composition(&password).is_complete());
/// ```
pub fn generate_password<R: Rng>(rng: &mut R, length: usize) -> String {
    let target = length.clamp(MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH);

    let mut chars = Vec::with_capacity(target);
    chars.push(sample_from(rng, LETTERS));
    chars.push(sample_from(rng, DIGITS));
    chars.push(sample_from(rng, SYMBOLS));
    for _ in 3..target {
        chars.push(sample_from(rng, ALPHABET));
    }

    chars.shuffle(rng);
    chars.into_iter().map(char::from).collect()
}

/// Reports which required character classes appear in `password`.
#[must_use]
pub fn password_composition(password: &str) -> PasswordComposition {
    password
        .chars()
        .fold(PasswordComposition::default(), |acc, c| PasswordComposition {
            has_letter: acc.has_letter || c.is_ascii_alphabetic(),
            has_digit: acc.has_digit || c.is_ascii_digit(),
            has_symbol: acc.has_symbol || PASSWORD_SYMBOLS.contains(c),
        })
}

#[expect(
    clippy::indexing_slicing,
    reason = "index is drawn from 0..len of the same non-empty class"
)]
fn sample_from<R: Rng>(rng: &mut R, class: &[u8]) -> u8 {
    class[rng.random_range(0..class.len())]
}
