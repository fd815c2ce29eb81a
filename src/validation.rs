//! Fixed-pattern candidate validation.
//!
//! A candidate is valid when it contains the literal substring "SP", at
//! least one uppercase letter, at least two contiguous characters from
//! the special set `!@#$%^&*()_+`, at least four characters (anywhere)
//! from the letter set `khuzafi`, and is 1 to 12 characters long.
//!
//! The checks are deliberately decomposed instead of expressed as one
//! lookahead-based expression, which the `regex` crate does not support.

use once_cell::sync::Lazy;
use regex::Regex;

static UPPER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").unwrap());
static SPECIAL_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[!@#$%^&*()_+]{2}").unwrap());

/// Letters counted toward the four-of-the-set requirement. Distinct from
/// the generator's special set in `generator.rs`.
const LETTER_SET: &str = "khuzafi";

/// Minimum count of `LETTER_SET` characters a valid candidate must hold.
const LETTER_MIN: usize = 4;

/// Maximum candidate length.
const MAX_LEN: usize = 12;

/// True if `candidate` satisfies the fixed validation pattern.
pub fn is_valid(candidate: &str) -> bool {
    let len = candidate.chars().count();
    if len == 0 || len > MAX_LEN {
        return false;
    }
    candidate.contains("SP")
        && UPPER_RE.is_match(candidate)
        && SPECIAL_RUN_RE.is_match(candidate)
        && candidate.chars().filter(|c| LETTER_SET.contains(*c)).count() >= LETTER_MIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_candidates_meeting_every_rule() {
        // "SP" doubles as the required uppercase letters.
        assert!(is_valid("SP!@khuz"));
        assert!(is_valid("SP!@khzafi"));
        // Set letters may appear anywhere, not only as a run.
        assert!(is_valid("kSP!@huz"));
    }

    #[test]
    fn rejects_missing_uppercase() {
        assert!(!is_valid("sp!@khuz"));
    }

    #[test]
    fn rejects_missing_sp_substring() {
        assert!(!is_valid("Sx!@khuz"));
        // Lowercase "sp" does not count as the literal substring.
        assert!(!is_valid("Asp!@khuz"));
    }

    #[test]
    fn rejects_too_few_special_characters() {
        assert!(!is_valid("SP!khuz"));
        assert!(!is_valid("SP#khuza"));
        // Two specials that are not adjacent do not form the run.
        assert!(!is_valid("SP!k@huz"));
    }

    #[test]
    fn rejects_too_few_set_letters() {
        assert!(!is_valid("SP!@khu"));
        assert!(!is_valid("SP!@xyz"));
        // Uppercase set letters do not count.
        assert!(!is_valid("SP@#Khuz"));
    }

    #[test]
    fn rejects_out_of_range_lengths() {
        assert!(!is_valid(""));
        assert!(!is_valid("SP!@khuzafiab")); // 13 characters
        assert!(is_valid("SP!@khuzafia")); // exactly 12
    }
}
