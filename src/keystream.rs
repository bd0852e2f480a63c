//! Monoalphabetic substitution, Vigenère and autokey ciphers.
//!
//! Each letter is combined with a per-position key letter taken from a
//! keystream: a fixed permutation, a repeating keyword, or a keyword
//! extended by the plaintext itself.

use crate::alphabet::{self, map_letters, SIZE};
use crate::cipher::Direction;
use crate::key::{SubstitutionKey, WordKey};

/// Replace each letter through the substitution table (or its inverse).
pub fn monoalphabetic(text: &str, key: &SubstitutionKey, direction: Direction) -> String {
    match direction {
        Direction::Encrypt => map_letters(text, |p| key.substitute(p)),
        Direction::Decrypt => map_letters(text, |p| key.invert(p)),
    }
}

/// Vigenère cipher with a repeating keyword.
///
/// The keyword is indexed by character position in the text, so
/// passthrough characters also consume a keyword letter.
pub fn vigenere(text: &str, key: &WordKey, direction: Direction) -> String {
    let keyword = key.positions();
    text.chars()
        .enumerate()
        .map(|(i, c)| match alphabet::position(c) {
            Some(p) => {
                let k = keyword[i % keyword.len()];
                alphabet::letter(combine(p, k, direction), c.is_ascii_uppercase())
            }
            None => c,
        })
        .collect()
}

/// Autokey cipher: the keystream is the keyword followed by the plaintext.
///
/// The keystream only advances on letters, and only plaintext letters
/// extend it.
pub fn autokey(text: &str, key: &WordKey, direction: Direction) -> String {
    match direction {
        Direction::Encrypt => autokey_encrypt(text, key),
        Direction::Decrypt => autokey_decrypt(text, key),
    }
}

fn autokey_encrypt(text: &str, key: &WordKey) -> String {
    let keyword = key.positions();
    let plain: Vec<u8> = text.chars().filter_map(alphabet::position).collect();
    let mut n = 0;
    text.chars()
        .map(|c| match alphabet::position(c) {
            Some(p) => {
                let k = if n < keyword.len() {
                    keyword[n]
                } else {
                    plain[n - keyword.len()]
                };
                n += 1;
                alphabet::letter(combine(p, k, Direction::Encrypt), c.is_ascii_uppercase())
            }
            None => c,
        })
        .collect()
}

// Each recovered letter is pushed onto the keystream before the next
// position needs it, so this has to run strictly left to right.
fn autokey_decrypt(text: &str, key: &WordKey) -> String {
    let mut keystream: Vec<u8> = key.positions().to_vec();
    let mut n = 0;
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match alphabet::position(c) {
            Some(p) => {
                let plain = combine(p, keystream[n], Direction::Decrypt);
                keystream.push(plain);
                n += 1;
                out.push(alphabet::letter(plain, c.is_ascii_uppercase()));
            }
            None => out.push(c),
        }
    }
    out
}

fn combine(p: u8, k: u8, direction: Direction) -> u8 {
    match direction {
        Direction::Encrypt => (p + k) % SIZE,
        Direction::Decrypt => (p + SIZE - k) % SIZE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

    #[test]
    fn test_monoalphabetic_full_alphabet() {
        let key = SubstitutionKey::parse("qwertyuiopasdfghjklzxcvbnm").unwrap();
        let cipher = monoalphabetic(ALPHABET, &key, Direction::Encrypt);
        assert_eq!(cipher, "qwertyuiopasdfghjklzxcvbnm");
        assert_eq!(monoalphabetic(&cipher, &key, Direction::Decrypt), ALPHABET);
    }

    #[test]
    fn test_monoalphabetic_keeps_case() {
        let key = SubstitutionKey::parse("QWERTYUIOPASDFGHJKLZXCVBNM").unwrap();
        assert_eq!(monoalphabetic("Hi there!", &key, Direction::Encrypt), "Io zitkt!");
    }

    #[test]
    fn test_vigenere_known_answer() {
        let key = WordKey::parse("key").unwrap();
        let cipher = vigenere("attackatdawn", &key, Direction::Encrypt);
        assert_eq!(cipher, "kxrkgikxbkal");
        assert_eq!(vigenere(&cipher, &key, Direction::Decrypt), "attackatdawn");
    }

    #[test]
    fn test_vigenere_classic_lemon() {
        let key = WordKey::parse("LEMON").unwrap();
        assert_eq!(
            vigenere("ATTACKATDAWN", &key, Direction::Encrypt),
            "LXFOPVEFRNHR"
        );
    }

    #[test]
    fn test_vigenere_passthrough_consumes_key_position() {
        let key = WordKey::parse("b").unwrap();
        assert_eq!(vigenere("a a", &key, Direction::Encrypt), "b b");
        let key = WordKey::parse("ab").unwrap();
        assert_eq!(vigenere("a a", &key, Direction::Encrypt), "a a");
    }

    #[test]
    fn test_autokey_known_answer() {
        let key = WordKey::parse("queenly").unwrap();
        let cipher = autokey("attackatdawn", &key, Direction::Encrypt);
        assert_eq!(cipher, "qnxepvytwtwp");
        assert_eq!(autokey(&cipher, &key, Direction::Decrypt), "attackatdawn");
    }

    #[test]
    fn test_autokey_differs_from_vigenere() {
        let key = WordKey::parse("key").unwrap();
        let auto = autokey("attackatdawn", &key, Direction::Encrypt);
        let vig = vigenere("attackatdawn", &key, Direction::Encrypt);
        assert_ne!(auto, vig);
        assert_eq!(&auto[..3], &vig[..3]);
        assert_eq!(autokey(&auto, &key, Direction::Decrypt), "attackatdawn");
    }

    #[test]
    fn test_autokey_with_passthrough() {
        let key = WordKey::parse("Key").unwrap();
        let plain = "Attack at dawn, 5am!";
        let cipher = autokey(plain, &key, Direction::Encrypt);
        assert!(cipher.contains(", 5"));
        assert_eq!(autokey(&cipher, &key, Direction::Decrypt), plain);
    }

    #[test]
    fn test_empty_text() {
        let key = WordKey::parse("key").unwrap();
        assert_eq!(vigenere("", &key, Direction::Encrypt), "");
        assert_eq!(autokey("", &key, Direction::Decrypt), "");
    }
}
