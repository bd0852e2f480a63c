//! Random key generation.
//!
//! Produces raw key values that [`Cipher::parse_key`] accepts.

use crate::alphabet::{self, LETTERS};
use crate::cipher::Cipher;
use rand::seq::SliceRandom;
use rand::Rng;

/// Default keyword / column-key length.
pub const DEFAULT_LENGTH: usize = 8;

/// Generate raw key values for `cipher`.
///
/// `length` sets the size of keyword and transposition keys. Transposition
/// keys use distinct letters, so their length is capped at 26.
pub fn generate<R: Rng + ?Sized>(cipher: Cipher, length: usize, rng: &mut R) -> Vec<String> {
    let length = length.max(1);
    match cipher {
        Cipher::Additive => vec![rng.gen_range(1..26).to_string()],
        Cipher::Multiplicative => vec![random_unit(rng).to_string()],
        Cipher::Affine => vec![
            random_unit(rng).to_string(),
            rng.gen_range(0..26).to_string(),
        ],
        Cipher::Monoalphabetic => vec![shuffled_letters(rng, 26)],
        Cipher::Autokey | Cipher::Vigenere | Cipher::Playfair => vec![random_word(rng, length)],
        Cipher::KeylessTransposition => Vec::new(),
        Cipher::KeyedTransposition | Cipher::CombinedTransposition => {
            vec![shuffled_letters(rng, length)]
        }
        Cipher::DoubleTransposition => vec![
            shuffled_letters(rng, length),
            shuffled_letters(rng, length),
        ],
    }
}

// A multiplier of 1 would leave the text unchanged.
fn random_unit<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    let units: Vec<u8> = alphabet::units().filter(|&u| u != 1).collect();
    *units.choose(rng).unwrap_or(&1)
}

fn random_word<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| LETTERS[rng.gen_range(0..LETTERS.len())])
        .collect()
}

fn shuffled_letters<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    let mut letters = LETTERS;
    letters.shuffle(rng);
    letters.iter().take(length.min(letters.len())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_keys_parse() {
        let mut rng = StdRng::seed_from_u64(7);
        for cipher in Cipher::ALL {
            for _ in 0..20 {
                let raw = generate(cipher, DEFAULT_LENGTH, &mut rng);
                assert_eq!(raw.len(), cipher.key_arity());
                assert!(
                    cipher.parse_key(&raw).is_ok(),
                    "{} rejected generated key {:?}",
                    cipher,
                    raw
                );
            }
        }
    }

    #[test]
    fn test_generation_is_deterministic_for_seed() {
        let a = generate(Cipher::Monoalphabetic, 0, &mut StdRng::seed_from_u64(42));
        let b = generate(Cipher::Monoalphabetic, 0, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_transposition_length_capped() {
        let mut rng = StdRng::seed_from_u64(1);
        let raw = generate(Cipher::KeyedTransposition, 40, &mut rng);
        assert_eq!(raw[0].len(), 26);
        let raw = generate(Cipher::Vigenere, 40, &mut rng);
        assert_eq!(raw[0].len(), 40);
    }
}
