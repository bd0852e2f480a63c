use crate::error::{CipherError, Result};
use crate::key::{AffineKey, DualPermutationKey, Key, PermutationKey, SubstitutionKey, WordKey};
use crate::{alphabet, keystream, modular, playfair, transposition};
use serde::{Deserialize, Serialize};

/// Whether a transform encrypts or decrypts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Encrypt,
    Decrypt,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Encrypt => "encrypt",
            Self::Decrypt => "decrypt",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Direction {
    type Err = CipherError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "encrypt" | "e" | "enc" => Ok(Self::Encrypt),
            "decrypt" | "d" | "dec" => Ok(Self::Decrypt),
            _ => Err(CipherError::InvalidDirection(s.to_string())),
        }
    }
}

/// The eleven supported ciphers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cipher {
    Additive,
    Multiplicative,
    Affine,
    Monoalphabetic,
    Autokey,
    Playfair,
    Vigenere,
    KeylessTransposition,
    KeyedTransposition,
    CombinedTransposition,
    DoubleTransposition,
}

impl Cipher {
    /// All ciphers, in menu order.
    pub const ALL: [Cipher; 11] = [
        Cipher::Additive,
        Cipher::Multiplicative,
        Cipher::Affine,
        Cipher::Monoalphabetic,
        Cipher::Autokey,
        Cipher::Playfair,
        Cipher::Vigenere,
        Cipher::KeylessTransposition,
        Cipher::KeyedTransposition,
        Cipher::CombinedTransposition,
        Cipher::DoubleTransposition,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Additive => "additive",
            Self::Multiplicative => "multiplicative",
            Self::Affine => "affine",
            Self::Monoalphabetic => "monoalphabetic",
            Self::Autokey => "autokey",
            Self::Playfair => "playfair",
            Self::Vigenere => "vigenere",
            Self::KeylessTransposition => "keyless-transposition",
            Self::KeyedTransposition => "keyed-transposition",
            Self::CombinedTransposition => "combined-transposition",
            Self::DoubleTransposition => "double-transposition",
        }
    }

    /// One-line description of what the key must look like.
    pub fn key_help(&self) -> &'static str {
        match self {
            Self::Additive => "integer shift",
            Self::Multiplicative => "integer coprime with 26",
            Self::Affine => "two integers a b, a coprime with 26",
            Self::Monoalphabetic => "permutation of the 26 letters",
            Self::Autokey | Self::Vigenere | Self::Playfair => "alphabetic keyword",
            Self::KeylessTransposition => "none",
            Self::KeyedTransposition | Self::CombinedTransposition => {
                "string of distinct characters"
            }
            Self::DoubleTransposition => "two strings of distinct characters",
        }
    }

    /// Number of raw key values the cipher takes.
    pub fn key_arity(&self) -> usize {
        match self {
            Self::KeylessTransposition => 0,
            Self::Affine | Self::DoubleTransposition => 2,
            _ => 1,
        }
    }

    /// Whether the cipher moves characters rather than substituting them.
    pub fn is_transposition(&self) -> bool {
        matches!(
            self,
            Self::KeylessTransposition
                | Self::KeyedTransposition
                | Self::CombinedTransposition
                | Self::DoubleTransposition
        )
    }

    /// Parse raw key values into the validated key this cipher expects.
    pub fn parse_key<S: AsRef<str>>(&self, raw: &[S]) -> Result<Key> {
        if raw.len() != self.key_arity() {
            return Err(CipherError::InvalidKeyType(format!(
                "{} takes {} key value(s), got {}",
                self,
                self.key_arity(),
                raw.len()
            )));
        }
        let raw: Vec<&str> = raw.iter().map(|s| s.as_ref().trim()).collect();

        match self {
            Self::Additive => Ok(Key::Integer(parse_integer(raw[0])?)),
            Self::Multiplicative => {
                let k = parse_integer(raw[0])?;
                if alphabet::mod_inverse(k).is_none() {
                    return Err(CipherError::KeyNotCoprime(k));
                }
                Ok(Key::Integer(k))
            }
            Self::Affine => Ok(Key::Affine(AffineKey::new(
                parse_integer(raw[0])?,
                parse_integer(raw[1])?,
            )?)),
            Self::Monoalphabetic => Ok(Key::Substitution(SubstitutionKey::parse(raw[0])?)),
            Self::Autokey | Self::Vigenere | Self::Playfair => {
                Ok(Key::Word(WordKey::parse(raw[0])?))
            }
            Self::KeylessTransposition => Ok(Key::None),
            Self::KeyedTransposition | Self::CombinedTransposition => {
                Ok(Key::Permutation(PermutationKey::parse(raw[0])?))
            }
            Self::DoubleTransposition => Ok(Key::DualPermutation(DualPermutationKey::parse(
                raw[0], raw[1],
            )?)),
        }
    }

    /// Run the cipher over `text`.
    pub fn apply(&self, text: &str, key: &Key, direction: Direction) -> Result<String> {
        match (self, key) {
            (Self::Additive, Key::Integer(k)) => Ok(modular::additive(text, *k, direction)),
            (Self::Multiplicative, Key::Integer(k)) => {
                modular::multiplicative(text, *k, direction)
            }
            (Self::Affine, Key::Affine(k)) => Ok(modular::affine(text, k, direction)),
            (Self::Monoalphabetic, Key::Substitution(k)) => {
                Ok(keystream::monoalphabetic(text, k, direction))
            }
            (Self::Autokey, Key::Word(k)) => Ok(keystream::autokey(text, k, direction)),
            (Self::Vigenere, Key::Word(k)) => Ok(keystream::vigenere(text, k, direction)),
            (Self::Playfair, Key::Word(k)) => playfair::playfair(text, k, direction),
            (Self::KeylessTransposition, Key::None) => {
                Ok(transposition::keyless(text, direction))
            }
            (Self::KeyedTransposition, Key::Permutation(k)) => {
                Ok(transposition::keyed(text, k, direction))
            }
            (Self::CombinedTransposition, Key::Permutation(k)) => {
                Ok(transposition::combined(text, k, direction))
            }
            (Self::DoubleTransposition, Key::DualPermutation(k)) => {
                Ok(transposition::double(text, k, direction))
            }
            (cipher, key) => Err(CipherError::InvalidKeyType(format!(
                "{} expects {}, got {}",
                cipher,
                cipher.key_help(),
                key.summary()
            ))),
        }
    }

    pub fn encrypt(&self, text: &str, key: &Key) -> Result<String> {
        self.apply(text, key, Direction::Encrypt)
    }

    pub fn decrypt(&self, text: &str, key: &Key) -> Result<String> {
        self.apply(text, key, Direction::Decrypt)
    }
}

impl std::fmt::Display for Cipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Cipher {
    type Err = CipherError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "additive" | "caesar" | "shift" | "1" => Ok(Self::Additive),
            "multiplicative" | "2" => Ok(Self::Multiplicative),
            "affine" | "3" => Ok(Self::Affine),
            "monoalphabetic" | "substitution" | "4" => Ok(Self::Monoalphabetic),
            "autokey" | "5" => Ok(Self::Autokey),
            "playfair" | "6" => Ok(Self::Playfair),
            "vigenere" | "vigenère" | "7" => Ok(Self::Vigenere),
            "keyless-transposition" | "keyless" | "8" => Ok(Self::KeylessTransposition),
            "keyed-transposition" | "keyed" | "columnar" | "9" => Ok(Self::KeyedTransposition),
            "combined-transposition" | "combined" | "10" => Ok(Self::CombinedTransposition),
            "double-transposition" | "double" | "11" => Ok(Self::DoubleTransposition),
            _ => Err(CipherError::UnsupportedCipher(s.to_string())),
        }
    }
}

fn parse_integer(raw: &str) -> Result<i64> {
    raw.parse::<i64>().map_err(|_| {
        CipherError::InvalidKeyType(format!("expected an integer key, got {:?}", raw))
    })
}
