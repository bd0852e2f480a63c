//! Playfair digraph cipher.
//!
//! A 5x5 matrix of 25 letters (`J` folded into `I`) is built from the key.
//! Plaintext is split into two-letter blocks, each substituted using the
//! row/column geometry of its letters in the matrix.

use crate::cipher::Direction;
use crate::error::{CipherError, Result};
use crate::key::WordKey;

const SIDE: usize = 5;
const FILLER: char = 'X';

/// The 5x5 key square. Build once per key and reuse across messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayfairMatrix {
    cells: [char; SIDE * SIDE],
    // Cell index of each letter `A..=Z`; `J` shares `I`'s slot.
    index: [usize; 26],
}

impl PlayfairMatrix {
    /// Key letters in first-occurrence order, then the rest of the
    /// alphabet without `J`.
    pub fn new(key: &WordKey) -> Self {
        let key_letters = key
            .positions()
            .iter()
            .map(|&p| fold((b'A' + p) as char));
        let fill = ('A'..='Z').filter(|&c| c != 'J');

        let mut cells = [' '; SIDE * SIDE];
        let mut index = [usize::MAX; 26];
        let mut n = 0;
        for c in key_letters.chain(fill) {
            let slot = (c as u8 - b'A') as usize;
            if index[slot] == usize::MAX {
                index[slot] = n;
                cells[n] = c;
                n += 1;
            }
        }
        index[(b'J' - b'A') as usize] = index[(b'I' - b'A') as usize];

        Self { cells, index }
    }

    /// Row and column of a letter, or `None` if `c` is not an ASCII letter.
    pub fn locate(&self, c: char) -> Option<(usize, usize)> {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let cell = self.index[(fold(c.to_ascii_uppercase()) as u8 - b'A') as usize];
        Some((cell / SIDE, cell % SIDE))
    }

    pub fn at(&self, row: usize, col: usize) -> char {
        self.cells[(row % SIDE) * SIDE + col % SIDE]
    }

    /// Matrix rows as strings, top to bottom.
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(SIDE)
            .map(|row| row.iter().collect())
            .collect()
    }

    /// Substitute one digraph. `None` unless both halves are letters.
    pub fn substitute(&self, pair: (char, char), direction: Direction) -> Option<(char, char)> {
        let (r1, c1) = self.locate(pair.0)?;
        let (r2, c2) = self.locate(pair.1)?;
        // Stepping back one is stepping forward four on a ring of five.
        let step = match direction {
            Direction::Encrypt => 1,
            Direction::Decrypt => SIDE - 1,
        };

        Some(if r1 == r2 {
            (self.at(r1, c1 + step), self.at(r2, c2 + step))
        } else if c1 == c2 {
            (self.at(r1 + step, c1), self.at(r2 + step, c2))
        } else {
            (self.at(r1, c2), self.at(r2, c1))
        })
    }

    /// Format the plaintext into digraphs and encrypt them.
    pub fn encrypt(&self, plaintext: &str) -> String {
        self.apply(&format_plaintext(plaintext), Direction::Encrypt)
    }

    /// Decrypt digraph-aligned ciphertext. The filler letters inserted on
    /// encryption are left in place.
    pub fn decrypt(&self, ciphertext: &str) -> Result<String> {
        let letters: Vec<char> = ciphertext
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| fold(c.to_ascii_uppercase()))
            .collect();
        if letters.len() % 2 != 0 {
            return Err(CipherError::OddCiphertextLength(letters.len()));
        }
        Ok(self.apply(&letters, Direction::Decrypt))
    }

    fn apply(&self, letters: &[char], direction: Direction) -> String {
        let mut out = String::with_capacity(letters.len());
        // Callers pass letters only, so every pair substitutes.
        for pair in letters.chunks_exact(2) {
            if let Some((a, b)) = self.substitute((pair[0], pair[1]), direction) {
                out.push(a);
                out.push(b);
            }
        }
        out
    }
}

/// Encrypt or decrypt with a freshly built matrix.
pub fn playfair(text: &str, key: &WordKey, direction: Direction) -> Result<String> {
    let matrix = PlayfairMatrix::new(key);
    match direction {
        Direction::Encrypt => Ok(matrix.encrypt(text)),
        Direction::Decrypt => matrix.decrypt(text),
    }
}

/// Uppercase, fold `J` into `I`, drop non-letters and split into digraphs.
///
/// A pair of identical letters gets an `X` after the first one and the
/// second letter starts the next digraph. A lone final letter is padded
/// with `X`. This is a single greedy pass: runs of three or more identical
/// letters are only split where a digraph is being built.
pub fn format_plaintext(plaintext: &str) -> Vec<char> {
    let letters: Vec<char> = plaintext
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| fold(c.to_ascii_uppercase()))
        .collect();

    let mut formatted = Vec::with_capacity(letters.len() + letters.len() / 2 + 1);
    let mut i = 0;
    while i < letters.len() {
        let first = letters[i];
        match letters.get(i + 1) {
            Some(&second) if second != first => {
                formatted.push(first);
                formatted.push(second);
                i += 2;
            }
            _ => {
                formatted.push(first);
                formatted.push(FILLER);
                i += 1;
            }
        }
    }
    formatted
}

fn fold(c: char) -> char {
    if c == 'J' {
        'I'
    } else {
        c
    }
}
