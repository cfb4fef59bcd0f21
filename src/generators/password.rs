// src/generators/password.rs
use serde::Serialize;
use sha2::{Digest, Sha512};
use thiserror::Error;

use crate::models::TargetProfile;

/// Hex length of a SHA-512 digest; the longest password a target can request.
pub const DIGEST_HEX_LEN: usize = 128;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeriveError {
    #[error("Requested length {requested} exceeds the {available} characters the digest provides")]
    LengthExceedsDigest { requested: usize, available: usize },

    #[error("Requirements ask for {requested} classed characters but the password is only {length} long")]
    UnderSpecified { requested: usize, length: usize },
}

pub type Result<T> = std::result::Result<T, DeriveError>;

/// What to do when the minimums add up to more than the password length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequirementPolicy {
    /// Derive anyway and report the shortfall in `Derivation::unmet`.
    #[default]
    Lenient,
    /// Refuse to derive.
    Strict,
}

/// Remaining per-class requirements, consumed left to right by the rewrite pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RequirementCounters {
    pub uppers: usize,
    pub lowers: usize,
    pub digits: usize,
}

impl RequirementCounters {
    pub fn from_profile(profile: &TargetProfile) -> Self {
        Self {
            uppers: profile.min_uppers,
            lowers: profile.min_lowers,
            digits: profile.min_digits,
        }
    }

    /// Sum of the three counters, saturating at `usize::MAX`.
    pub fn total(&self) -> usize {
        self.uppers.saturating_add(self.lowers).saturating_add(self.digits)
    }

    pub fn is_satisfied(&self) -> bool {
        self.uppers == 0 && self.lowers == 0 && self.digits == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Upper,
    Lower,
    Digit,
}

impl CharClass {
    pub fn of(c: char) -> Option<Self> {
        if c.is_ascii_uppercase() {
            Some(CharClass::Upper)
        } else if c.is_ascii_lowercase() {
            Some(CharClass::Lower)
        } else if c.is_ascii_digit() {
            Some(CharClass::Digit)
        } else {
            None
        }
    }

    /// Rewrite `c` (which must belong to this class) against the pool.
    ///
    /// The character's own class is preferred; otherwise the fallbacks are
    /// tried in upper, lower, digit order. At most one counter is consumed.
    pub fn rewrite(self, c: char, pool: &mut RequirementCounters) -> char {
        match self {
            CharClass::Upper => {
                if take(&mut pool.uppers) {
                    c
                } else if take(&mut pool.lowers) {
                    c.to_ascii_lowercase()
                } else if take(&mut pool.digits) {
                    digit_from_code_point(c)
                } else {
                    c
                }
            }
            CharClass::Lower => {
                if take(&mut pool.lowers) {
                    c
                } else if take(&mut pool.uppers) {
                    c.to_ascii_uppercase()
                } else if take(&mut pool.digits) {
                    digit_from_code_point(c)
                } else {
                    c
                }
            }
            CharClass::Digit => {
                // Only reached for ASCII digits
                let value = c.to_digit(10).unwrap_or(0) as u8;
                if take(&mut pool.digits) {
                    c
                } else if take(&mut pool.uppers) {
                    (b'A' + value % 26) as char
                } else if take(&mut pool.lowers) {
                    (b'a' + value % 26) as char
                } else {
                    c
                }
            }
        }
    }
}

fn take(counter: &mut usize) -> bool {
    if *counter > 0 {
        *counter -= 1;
        true
    } else {
        false
    }
}

fn digit_from_code_point(c: char) -> char {
    char::from_digit(c as u32 % 10, 10).unwrap_or('0')
}

/// Lowercase hex SHA-512 of `name` followed by `key`.
pub fn raw_digest(name: &str, key: &str) -> String {
    let mut hasher = Sha512::new();
    hasher.update(name.as_bytes());
    hasher.update(key.as_bytes());
    hex::encode(hasher.finalize())
}

/// Run the class-aware rewrite pass over `raw`, returning the rewritten
/// string and whatever the pool still holds afterwards.
pub fn rewrite_pass(raw: &str, mut pool: RequirementCounters) -> (String, RequirementCounters) {
    let password = raw
        .chars()
        .map(|c| match CharClass::of(c) {
            Some(class) => class.rewrite(c, &mut pool),
            None => c,
        })
        .collect();
    (password, pool)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Derivation {
    pub password: String,
    /// Requirements the rewrite pass ran out of positions for.
    pub unmet: RequirementCounters,
}

pub struct PasswordGenerator {
    policy: RequirementPolicy,
}

impl PasswordGenerator {
    pub fn new(policy: RequirementPolicy) -> Self {
        PasswordGenerator { policy }
    }

    /// Derive the password for `profile` under `key`.
    ///
    /// The profile is only read; the counters are copied into a private pool
    /// so repeated calls on the same profile give the same result.
    pub fn derive(&self, profile: &TargetProfile, key: &str) -> Result<Derivation> {
        if profile.length > DIGEST_HEX_LEN {
            return Err(DeriveError::LengthExceedsDigest {
                requested: profile.length,
                available: DIGEST_HEX_LEN,
            });
        }

        let pool = RequirementCounters::from_profile(profile);
        if self.policy == RequirementPolicy::Strict && pool.total() > profile.length {
            return Err(DeriveError::UnderSpecified {
                requested: pool.total(),
                length: profile.length,
            });
        }

        let digest = raw_digest(&profile.name, key);
        let (password, unmet) = rewrite_pass(&digest[..profile.length], pool);

        if !unmet.is_satisfied() {
            log::warn!(
                "Target '{}' is under-specified: {} uppers, {} lowers, {} digits could not be placed",
                profile.name, unmet.uppers, unmet.lowers, unmet.digits
            );
        }
        log::debug!("Derived {}-character password for '{}'", password.len(), profile.name);

        Ok(Derivation { password, unmet })
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new(RequirementPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(uppers: usize, lowers: usize, digits: usize, length: usize) -> TargetProfile {
        TargetProfile {
            name: "example.com".to_string(),
            min_uppers: uppers,
            min_lowers: lowers,
            min_digits: digits,
            length,
        }
    }

    fn pool(uppers: usize, lowers: usize, digits: usize) -> RequirementCounters {
        RequirementCounters { uppers, lowers, digits }
    }

    #[test]
    fn sha512_known_vectors() {
        assert_eq!(
            raw_digest("", ""),
            "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
             47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e"
        );
        assert_eq!(
            raw_digest("ab", "c"),
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
             2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        );
    }

    #[test]
    fn digest_is_lowercase_hex_of_full_length() {
        let digest = raw_digest("example.com", "secret");
        assert_eq!(digest.len(), DIGEST_HEX_LEN);
        assert!(digest.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
        assert!(digest.starts_with("4302e74ff020d0e7"));
    }

    #[test]
    fn classify() {
        assert_eq!(CharClass::of('Q'), Some(CharClass::Upper));
        assert_eq!(CharClass::of('q'), Some(CharClass::Lower));
        assert_eq!(CharClass::of('7'), Some(CharClass::Digit));
        assert_eq!(CharClass::of('#'), None);
    }

    #[test]
    fn upper_prefers_uppers_then_lowers_then_digits() {
        let mut p = pool(1, 1, 1);
        assert_eq!(CharClass::Upper.rewrite('E', &mut p), 'E');
        assert_eq!(p, pool(0, 1, 1));
        assert_eq!(CharClass::Upper.rewrite('E', &mut p), 'e');
        assert_eq!(p, pool(0, 0, 1));
        // 'E' is 69
        assert_eq!(CharClass::Upper.rewrite('E', &mut p), '9');
        assert_eq!(p, pool(0, 0, 0));
        assert_eq!(CharClass::Upper.rewrite('E', &mut p), 'E');
    }

    #[test]
    fn lower_prefers_lowers_then_uppers_then_digits() {
        let mut p = pool(1, 1, 1);
        assert_eq!(CharClass::Lower.rewrite('b', &mut p), 'b');
        assert_eq!(p, pool(1, 0, 1));
        assert_eq!(CharClass::Lower.rewrite('b', &mut p), 'B');
        assert_eq!(p, pool(0, 0, 1));
        // 'b' is 98
        assert_eq!(CharClass::Lower.rewrite('b', &mut p), '8');
        assert_eq!(CharClass::Lower.rewrite('b', &mut p), 'b');
        assert_eq!(p, pool(0, 0, 0));
    }

    #[test]
    fn digit_prefers_digits_then_uppers_then_lowers() {
        let mut p = pool(1, 1, 1);
        assert_eq!(CharClass::Digit.rewrite('7', &mut p), '7');
        assert_eq!(p, pool(1, 1, 0));
        assert_eq!(CharClass::Digit.rewrite('7', &mut p), 'H');
        assert_eq!(p, pool(0, 1, 0));
        assert_eq!(CharClass::Digit.rewrite('7', &mut p), 'h');
        assert_eq!(CharClass::Digit.rewrite('7', &mut p), '7');
        assert_eq!(p, pool(0, 0, 0));
    }

    #[test]
    fn rewrite_pass_leaves_unclassed_characters_alone() {
        let (out, left) = rewrite_pass("a-1", pool(2, 0, 0));
        assert_eq!(out, "A-B");
        assert!(left.is_satisfied());
    }

    #[test]
    fn golden_example_com() {
        let generator = PasswordGenerator::default();
        let derivation = generator.derive(&profile(1, 1, 1, 8), "secret").unwrap();
        assert_eq!(derivation.password, "4Da2e74f");
        assert!(derivation.unmet.is_satisfied());
    }

    #[test]
    fn uppers_are_consumed_first_come_first_served() {
        let generator = PasswordGenerator::default();
        let derivation = generator.derive(&profile(2, 0, 0, 5), "secret").unwrap();
        assert_eq!(derivation.password, "ED02e");
        assert_eq!(derivation.unmet, RequirementCounters::default());
    }

    #[test]
    fn mixed_requirements_golden() {
        let generator = PasswordGenerator::default();
        assert_eq!(
            generator.derive(&profile(3, 3, 3, 16), "secret").unwrap().password,
            "430CeHEff020d0e7"
        );
        assert_eq!(
            generator.derive(&profile(0, 0, 8, 8), "secret").unwrap().password,
            "43021742"
        );
        assert_eq!(
            generator.derive(&profile(0, 6, 0, 6), "secret").unwrap().password,
            "edaceh"
        );
    }

    #[test]
    fn zero_requirements_return_digest_prefix() {
        let generator = PasswordGenerator::default();
        let derivation = generator.derive(&profile(0, 0, 0, 12), "secret").unwrap();
        assert_eq!(derivation.password, "4302e74ff020");
    }

    #[test]
    fn lenient_policy_reports_shortfall() {
        let generator = PasswordGenerator::new(RequirementPolicy::Lenient);
        let derivation = generator.derive(&profile(5, 0, 0, 3), "secret").unwrap();
        assert_eq!(derivation.password, "EDA");
        assert_eq!(derivation.unmet, pool(2, 0, 0));
    }

    #[test]
    fn strict_policy_rejects_shortfall() {
        let generator = PasswordGenerator::new(RequirementPolicy::Strict);
        assert_eq!(
            generator.derive(&profile(5, 0, 0, 3), "secret"),
            Err(DeriveError::UnderSpecified { requested: 5, length: 3 })
        );
        assert!(generator.derive(&profile(1, 1, 1, 3), "secret").is_ok());
    }

    #[test]
    fn length_bounds() {
        let generator = PasswordGenerator::default();
        assert_eq!(
            generator.derive(&profile(0, 0, 0, 129), "secret"),
            Err(DeriveError::LengthExceedsDigest { requested: 129, available: 128 })
        );
        let full = generator.derive(&profile(0, 0, 0, 128), "secret").unwrap();
        assert_eq!(full.password, raw_digest("example.com", "secret"));
        let empty = generator.derive(&profile(0, 0, 0, 0), "secret").unwrap();
        assert_eq!(empty.password, "");
    }

    #[test]
    fn huge_counters_do_not_overflow() {
        let huge = profile(usize::MAX, 1, 0, 4);
        assert_eq!(RequirementCounters::from_profile(&huge).total(), usize::MAX);

        let strict = PasswordGenerator::new(RequirementPolicy::Strict);
        assert_eq!(
            strict.derive(&huge, "secret"),
            Err(DeriveError::UnderSpecified { requested: usize::MAX, length: 4 })
        );

        let lenient = PasswordGenerator::new(RequirementPolicy::Lenient);
        let derivation = lenient.derive(&huge, "secret").unwrap();
        assert_eq!(derivation.password, "EDAC");
        assert_eq!(derivation.unmet, pool(usize::MAX - 4, 1, 0));
        assert!(!derivation.unmet.is_satisfied());
    }

    #[test]
    fn derive_does_not_touch_the_profile() {
        let generator = PasswordGenerator::default();
        let target = profile(1, 1, 1, 8);
        let first = generator.derive(&target, "secret").unwrap();
        let second = generator.derive(&target, "secret").unwrap();
        assert_eq!(first, second);
        assert_eq!(target, profile(1, 1, 1, 8));
    }
}
