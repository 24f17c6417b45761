//! Random password generation.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};
use secrecy::SecretString;

use crate::charset::CharacterPool;
use crate::error::PasswordError;

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 128;

/// Generates a password using the operating system's CSPRNG.
///
/// The result holds at least one lowercase letter, one uppercase letter, one
/// digit and, when `include_symbols` is set, one symbol. Every other slot is an
/// independent uniform draw from the union of the enabled pools, and the final
/// sequence is shuffled so the guaranteed characters have no fixed position.
///
/// # Errors
/// Returns [`PasswordError::InvalidLength`] if `length` is outside `8..=128`.
pub fn generate(
    length: usize,
    include_symbols: bool,
    exclude_ambiguous: bool,
) -> Result<SecretString, PasswordError> {
    generate_with(&mut OsRng, length, include_symbols, exclude_ambiguous)
}

/// Same as [`generate`] with a caller-supplied cryptographic RNG.
pub fn generate_with<R>(
    rng: &mut R,
    length: usize,
    include_symbols: bool,
    exclude_ambiguous: bool,
) -> Result<SecretString, PasswordError>
where
    R: Rng + CryptoRng,
{
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        return Err(PasswordError::InvalidLength {
            length,
            min: MIN_LENGTH,
            max: MAX_LENGTH,
        });
    }

    let pool = CharacterPool::new(exclude_ambiguous);
    let mut required: Vec<&[char]> = vec![
        pool.lowercase.as_slice(),
        pool.uppercase.as_slice(),
        pool.digits.as_slice(),
    ];
    if include_symbols {
        required.push(pool.symbols.as_slice());
    }

    let mut chars: Vec<char> = Vec::with_capacity(length);
    chars.extend(required.iter().filter_map(|set| set.choose(rng).copied()));

    let all = pool.union(include_symbols);
    let fill = length.saturating_sub(chars.len());
    chars.extend((0..fill).filter_map(|_| all.choose(rng).copied()));

    chars.shuffle(rng);

    #[cfg(feature = "tracing")]
    tracing::debug!(length, include_symbols, exclude_ambiguous, "password generated");

    Ok(SecretString::new(chars.into_iter().collect::<String>().into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::{AMBIGUOUS, is_symbol};
    use secrecy::ExposeSecret;
    use std::collections::HashSet;

    fn gen_string(length: usize, symbols: bool, exclude: bool) -> String {
        generate(length, symbols, exclude)
            .expect("valid length")
            .expose_secret()
            .to_string()
    }

    #[test]
    fn test_generate_rejects_short_length() {
        let result = generate(7, true, true);
        assert_eq!(
            result.err(),
            Some(PasswordError::InvalidLength { length: 7, min: 8, max: 128 })
        );
    }

    #[test]
    fn test_generate_rejects_long_length() {
        assert!(matches!(
            generate(129, false, false),
            Err(PasswordError::InvalidLength { length: 129, .. })
        ));
    }

    #[test]
    fn test_generate_bounds_are_inclusive() {
        assert_eq!(gen_string(8, true, true).chars().count(), 8);
        assert_eq!(gen_string(128, true, true).chars().count(), 128);
    }

    #[test]
    fn test_generate_contains_every_required_class() {
        for length in [8, 9, 12, 16, 33, 64, 128] {
            for symbols in [true, false] {
                for exclude in [true, false] {
                    let pwd = gen_string(length, symbols, exclude);
                    assert_eq!(pwd.chars().count(), length);
                    assert!(pwd.chars().any(|c| c.is_ascii_lowercase()), "{pwd}");
                    assert!(pwd.chars().any(|c| c.is_ascii_uppercase()), "{pwd}");
                    assert!(pwd.chars().any(|c| c.is_ascii_digit()), "{pwd}");
                    assert_eq!(pwd.chars().any(is_symbol), symbols, "{pwd}");
                }
            }
        }
    }

    #[test]
    fn test_generate_excludes_ambiguous() {
        for _ in 0..200 {
            let pwd = gen_string(32, true, true);
            assert!(!pwd.chars().any(|c| AMBIGUOUS.contains(c)), "{pwd}");
        }
    }

    #[test]
    fn test_generate_outputs_differ() {
        let outputs: HashSet<String> = (0..50).map(|_| gen_string(16, true, true)).collect();
        assert!(outputs.len() > 45);
    }

    #[test]
    fn test_generate_guaranteed_chars_not_at_fixed_position() {
        // Unshuffled output would always start with the guaranteed lowercase letter.
        let first_is_lower = (0..200)
            .map(|_| gen_string(8, true, false))
            .filter(|p| p.chars().next().is_some_and(|c| c.is_ascii_lowercase()))
            .count();
        assert!(first_is_lower < 200);
    }

    #[test]
    fn test_generate_with_custom_rng() {
        use rand::SeedableRng;
        use rand::rngs::StdRng;

        let mut rng = StdRng::seed_from_u64(7);
        let pwd = generate_with(&mut rng, 20, true, false).unwrap();
        assert_eq!(pwd.expose_secret().chars().count(), 20);
    }

    #[test]
    fn test_generate_with_draws_only_from_pool() {
        use rand::SeedableRng;
        use rand::rngs::StdRng;

        let mut rng = StdRng::seed_from_u64(42);
        for (symbols, exclude) in [(true, true), (false, true), (true, false), (false, false)] {
            let allowed = CharacterPool::new(exclude).union(symbols);
            for length in [MIN_LENGTH, 13, MAX_LENGTH] {
                let pwd = generate_with(&mut rng, length, symbols, exclude).unwrap();
                let pwd = pwd.expose_secret();
                assert_eq!(pwd.chars().count(), length);
                assert!(pwd.chars().all(|c| allowed.contains(&c)), "{pwd}");
            }
        }
    }
}
