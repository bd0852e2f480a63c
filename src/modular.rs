//! Additive, multiplicative and affine ciphers.
//!
//! All three map a letter at position `p` to `f(p) mod 26` and keep the
//! letter's case; everything else passes through untouched.

use crate::alphabet::{self, map_letters};
use crate::cipher::Direction;
use crate::error::{CipherError, Result};
use crate::key::AffineKey;

/// Shift every letter by `key` positions (negative and large keys wrap).
pub fn additive(text: &str, key: i64, direction: Direction) -> String {
    // Reduce first: `-i64::MIN` overflows.
    let k = alphabet::normalize(key);
    let shift = match direction {
        Direction::Encrypt => k,
        Direction::Decrypt => (alphabet::SIZE - k) % alphabet::SIZE,
    };
    map_letters(text, |p| (p + shift) % alphabet::SIZE)
}

/// Multiply every letter position by `key`; decryption multiplies by its inverse.
pub fn multiplicative(text: &str, key: i64, direction: Direction) -> Result<String> {
    let inverse = alphabet::mod_inverse(key).ok_or(CipherError::KeyNotCoprime(key))?;
    let factor = match direction {
        Direction::Encrypt => alphabet::normalize(key),
        Direction::Decrypt => inverse,
    };
    Ok(map_letters(text, |p| mul_mod(p, factor)))
}

/// `a·p + b` on encryption, `a⁻¹·(p − b)` on decryption.
pub fn affine(text: &str, key: &AffineKey, direction: Direction) -> String {
    match direction {
        Direction::Encrypt => map_letters(text, |p| {
            (mul_mod(p, key.a()) + key.b()) % alphabet::SIZE
        }),
        Direction::Decrypt => {
            let unshift = alphabet::SIZE - key.b();
            map_letters(text, |p| {
                mul_mod((p + unshift) % alphabet::SIZE, key.a_inverse())
            })
        }
    }
}

fn mul_mod(p: u8, factor: u8) -> u8 {
    ((p as u16 * factor as u16) % alphabet::SIZE as u16) as u8
}
