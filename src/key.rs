//! Typed, pre-validated cipher keys.
//!
//! Raw key material arrives as strings or integers. Each key type here has a
//! parsing constructor that either yields a value the transforms can use
//! without further checks, or a [`CipherError`] describing why the key is
//! unusable. Transforms never see an invalid key.

use crate::alphabet::{self, SIZE};
use crate::error::{CipherError, Result};
use std::collections::HashSet;

/// A validated key, tagged by the shape each cipher family expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// No key (keyless transposition).
    None,
    /// Additive shift or multiplicative factor.
    Integer(i64),
    Affine(AffineKey),
    Substitution(SubstitutionKey),
    Word(WordKey),
    Permutation(PermutationKey),
    DualPermutation(DualPermutationKey),
}

impl Key {
    /// Short human-readable description, used in verbose output.
    pub fn summary(&self) -> String {
        match self {
            Key::None => "none".to_string(),
            Key::Integer(k) => format!("integer {}", k),
            Key::Affine(key) => format!("affine a={} b={}", key.a(), key.b()),
            Key::Substitution(key) => format!("substitution {}", key.as_string()),
            Key::Word(key) => format!("word {}", key.as_string()),
            Key::Permutation(key) => format!("permutation {}", key.as_string()),
            Key::DualPermutation(key) => format!(
                "permutations {} / {}",
                key.first().as_string(),
                key.second().as_string()
            ),
        }
    }
}

/// Affine key `(a, b)` with `a` a unit modulo 26.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AffineKey {
    a: u8,
    a_inv: u8,
    b: u8,
}

impl AffineKey {
    pub fn new(a: i64, b: i64) -> Result<Self> {
        let a_inv = alphabet::mod_inverse(a).ok_or(CipherError::KeyNotCoprime(a))?;
        Ok(Self {
            a: alphabet::normalize(a),
            a_inv,
            b: alphabet::normalize(b),
        })
    }

    pub fn a(&self) -> u8 {
        self.a
    }

    pub fn b(&self) -> u8 {
        self.b
    }

    /// Inverse of `a` modulo 26.
    pub fn a_inverse(&self) -> u8 {
        self.a_inv
    }
}

/// A permutation of the alphabet used by the monoalphabetic cipher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionKey {
    forward: [u8; 26],
    inverse: [u8; 26],
}

impl SubstitutionKey {
    /// Parse a 26-letter key. Letters are case-insensitive.
    pub fn parse(key: &str) -> Result<Self> {
        let count = key.chars().count();
        if count != SIZE as usize {
            return Err(CipherError::InvalidKeyLength(count));
        }

        let mut forward = [0u8; 26];
        let mut inverse = [0u8; 26];
        let mut seen = [false; 26];
        for (i, c) in key.chars().enumerate() {
            let p = alphabet::position(c).ok_or_else(|| {
                CipherError::InvalidKeyCharacters(format!(
                    "substitution key contains non-letter {:?}",
                    c
                ))
            })?;
            if seen[p as usize] {
                return Err(CipherError::InvalidKeyCharacters(format!(
                    "substitution key repeats letter {:?}",
                    c.to_ascii_lowercase()
                )));
            }
            seen[p as usize] = true;
            forward[i] = p;
            inverse[p as usize] = i as u8;
        }

        Ok(Self { forward, inverse })
    }

    /// Image of plaintext position `p`.
    pub fn substitute(&self, p: u8) -> u8 {
        self.forward[p as usize]
    }

    /// Plaintext position whose image is `p`.
    pub fn invert(&self, p: u8) -> u8 {
        self.inverse[p as usize]
    }

    pub fn as_string(&self) -> String {
        self.forward.iter().map(|&p| alphabet::letter(p, false)).collect()
    }
}

/// A non-empty, purely alphabetic keyword, stored as positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordKey {
    positions: Vec<u8>,
}

impl WordKey {
    pub fn parse(word: &str) -> Result<Self> {
        if word.is_empty() {
            return Err(CipherError::InvalidKeyCharacters(
                "keyword must not be empty".into(),
            ));
        }
        let positions = word
            .chars()
            .map(|c| {
                alphabet::position(c).ok_or_else(|| {
                    CipherError::InvalidKeyCharacters(format!(
                        "keyword must be alphabetic, found {:?}",
                        c
                    ))
                })
            })
            .collect::<Result<Vec<u8>>>()?;
        Ok(Self { positions })
    }

    pub fn positions(&self) -> &[u8] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn as_string(&self) -> String {
        self.positions
            .iter()
            .map(|&p| alphabet::letter(p, false))
            .collect()
    }
}

/// Key for columnar transposition: distinct symbols whose sort order
/// decides the order columns are read out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationKey {
    symbols: Vec<char>,
    order: Vec<usize>,
}

impl PermutationKey {
    pub fn parse(key: &str) -> Result<Self> {
        let symbols: Vec<char> = key.chars().collect();
        if symbols.is_empty() {
            return Err(CipherError::InvalidKeyUniqueness("empty key".into()));
        }
        let mut seen = HashSet::with_capacity(symbols.len());
        for &c in &symbols {
            if !seen.insert(c) {
                return Err(CipherError::InvalidKeyUniqueness(format!(
                    "{:?} repeats {:?}",
                    key, c
                )));
            }
        }
        let order = column_order(&symbols);
        Ok(Self { symbols, order })
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Column indices in the order their symbols sort ascending.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn as_string(&self) -> String {
        self.symbols.iter().collect()
    }
}

/// Two independent permutation keys for double transposition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DualPermutationKey {
    first: PermutationKey,
    second: PermutationKey,
}

impl DualPermutationKey {
    pub fn new(first: PermutationKey, second: PermutationKey) -> Self {
        Self { first, second }
    }

    pub fn parse(first: &str, second: &str) -> Result<Self> {
        Ok(Self::new(
            PermutationKey::parse(first)?,
            PermutationKey::parse(second)?,
        ))
    }

    pub fn first(&self) -> &PermutationKey {
        &self.first
    }

    pub fn second(&self) -> &PermutationKey {
        &self.second
    }
}

/// Stable sort of column indices by their key symbol.
///
/// Symbols compare by their raw character value, so case matters
/// (`'Z' < 'a'`). Equal symbols keep their original relative order.
pub fn column_order<T: Ord>(symbols: &[T]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..symbols.len()).collect();
    order.sort_by(|&x, &y| symbols[x].cmp(&symbols[y]));
    order
}
