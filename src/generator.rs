//! Constrained password generation from personal seed strings.
//!
//! Builds a base string from 2-character lowercase prefixes of four seed
//! strings plus a registration number used verbatim, shuffles it with an
//! unbiased permutation, then inserts one random uppercase letter and one
//! random special character before capping the length at 12.

use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

/// Maximum length of a generated password.
pub const MAX_LEN: usize = 12;

/// Uppercase letters eligible for the mandatory-uppercase insertion.
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Special characters eligible for the mandatory-special insertion.
/// Wider than the validation set in `validation.rs`; the two sets are
/// independent constants.
const SPECIAL: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_', '+', '-', '=', '[', ']', '{', '}', ';',
    '\'', ':', '"', ',', '.', '<', '>', '/', '?',
];

/// The five seed strings a password is derived from.
///
/// `first_name`, `last_name`, `movie` and `food` each contribute their
/// first two characters (lowercased); `reg_number` is used verbatim and
/// may be any length, including empty.
#[derive(Debug, Clone)]
pub struct SeedInputs {
    pub first_name: String,
    pub last_name: String,
    pub reg_number: String,
    pub movie: String,
    pub food: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeedError {
    #[error("seed string too short: {field} has {len} character(s), need at least 2")]
    TooShort { field: &'static str, len: usize },
}

/// First two characters of a seed string, lowercased.
fn prefix(field: &'static str, value: &str) -> Result<String, SeedError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(a), Some(b)) => {
            let mut out = String::new();
            out.extend(a.to_lowercase());
            out.extend(b.to_lowercase());
            Ok(out)
        }
        _ => Err(SeedError::TooShort {
            field,
            len: value.chars().count(),
        }),
    }
}

/// Concatenation of the four prefixes and the registration number,
/// in fixed order, before any randomization.
fn base_string(seeds: &SeedInputs) -> Result<String, SeedError> {
    let mut base = prefix("first name", &seeds.first_name)?;
    base.push_str(&prefix("last name", &seeds.last_name)?);
    base.push_str(&seeds.reg_number);
    base.push_str(&prefix("movie", &seeds.movie)?);
    base.push_str(&prefix("food", &seeds.food)?);
    Ok(base)
}

/// Generate a password from `seeds`, drawing randomness from `rng`.
///
/// The shuffled base is truncated to `MAX_LEN - 2` characters before the
/// two mandatory insertions, so the result always contains at least one
/// uppercase letter and one special character. When the base has 10 or
/// more characters the result is exactly `MAX_LEN` characters long.
pub fn generate_with<R: Rng + ?Sized>(seeds: &SeedInputs, rng: &mut R) -> Result<String, SeedError> {
    let base = base_string(seeds)?;
    trace!("base string is {} characters", base.chars().count());

    let mut chars: Vec<char> = base.chars().collect();
    chars.shuffle(rng);

    // Reserve room for the two mandatory insertions; truncating after
    // them could silently drop the very characters they guarantee.
    if chars.len() > MAX_LEN - 2 {
        trace!("truncating shuffled base from {} to {}", chars.len(), MAX_LEN - 2);
        chars.truncate(MAX_LEN - 2);
    }

    let upper = UPPERCASE[rng.gen_range(0..UPPERCASE.len())] as char;
    let special = SPECIAL[rng.gen_range(0..SPECIAL.len())];

    let at = rng.gen_range(0..=chars.len());
    chars.insert(at, upper);
    let at = rng.gen_range(0..=chars.len());
    chars.insert(at, special);

    debug!("generated {}-character password", chars.len());
    Ok(chars.into_iter().collect())
}

/// Generate a password using the thread-local RNG.
pub fn generate(seeds: &SeedInputs) -> Result<String, SeedError> {
    generate_with(seeds, &mut rand::thread_rng())
}
