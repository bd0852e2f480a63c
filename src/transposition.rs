//! Transposition ciphers: keyless half-swap, keyed columnar, combined and
//! double transposition.
//!
//! These only move characters around; every character of the input,
//! letters or not, appears exactly once in the output.

use crate::cipher::Direction;
use crate::key::{DualPermutationKey, PermutationKey};

/// Swap the two halves of the text.
///
/// Encryption moves the last `ceil(len/2)` characters to the front.
/// Decryption moves the last `floor(len/2)` back, which is the exact
/// inverse for odd lengths too.
pub fn keyless(text: &str, direction: Direction) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return String::new();
    }
    let mid = chars.len() / 2;
    let split = match direction {
        Direction::Encrypt => mid,
        Direction::Decrypt => chars.len() - mid,
    };
    chars[split..].iter().chain(chars[..split].iter()).collect()
}

/// Columnar transposition driven by the sort order of the key symbols.
pub fn keyed(text: &str, key: &PermutationKey, direction: Direction) -> String {
    let chars: Vec<char> = text.chars().collect();
    match direction {
        Direction::Encrypt => ColumnGrid::fill(&chars, key.len()).read_columns(key.order()),
        Direction::Decrypt => ColumnGrid::rebuild(&chars, key.order()).read_rows(),
    }
}

/// Keyless half-swap followed by keyed transposition.
pub fn combined(text: &str, key: &PermutationKey, direction: Direction) -> String {
    match direction {
        Direction::Encrypt => keyed(&keyless(text, direction), key, direction),
        Direction::Decrypt => keyless(&keyed(text, key, direction), direction),
    }
}

/// Keyed transposition with the first key, then again with the second.
pub fn double(text: &str, key: &DualPermutationKey, direction: Direction) -> String {
    match direction {
        Direction::Encrypt => keyed(&keyed(text, key.first(), direction), key.second(), direction),
        Direction::Decrypt => keyed(&keyed(text, key.second(), direction), key.first(), direction),
    }
}

/// Lengths of the `columns` buckets after round-robin filling `len` items.
///
/// The first `len % columns` buckets (in fill order) hold one extra item.
pub fn column_lengths(len: usize, columns: usize) -> Vec<usize> {
    if columns == 0 {
        return Vec::new();
    }
    let full = len / columns;
    let short = len % columns;
    (0..columns)
        .map(|col| full + usize::from(col < short))
        .collect()
}

/// Ordered buckets of characters, one per key symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnGrid {
    columns: Vec<Vec<char>>,
}

impl ColumnGrid {
    /// Distribute characters round-robin: character `i` goes to bucket `i % columns`.
    pub fn fill(chars: &[char], columns: usize) -> Self {
        let mut grid = vec![Vec::with_capacity(chars.len() / columns.max(1) + 1); columns];
        for (i, &c) in chars.iter().enumerate() {
            grid[i % columns].push(c);
        }
        Self { columns: grid }
    }

    /// Rebuild the grid from ciphertext that was read out in `order`.
    ///
    /// Bucket lengths follow from the round-robin fill, so the ciphertext
    /// is cut into chunks of those lengths, assigned in key order.
    pub fn rebuild(chars: &[char], order: &[usize]) -> Self {
        let lengths = column_lengths(chars.len(), order.len());
        let mut columns = vec![Vec::new(); order.len()];
        let mut rest = chars;
        for &col in order {
            let (chunk, tail) = rest.split_at(lengths[col]);
            columns[col] = chunk.to_vec();
            rest = tail;
        }
        Self { columns }
    }

    /// Concatenate whole buckets in the given order.
    pub fn read_columns(&self, order: &[usize]) -> String {
        order
            .iter()
            .flat_map(|&col| self.columns[col].iter())
            .collect()
    }

    /// Read one character from each bucket in turn, undoing the round-robin fill.
    pub fn read_rows(&self) -> String {
        let rows = self.columns.iter().map(Vec::len).max().unwrap_or(0);
        let mut out = String::new();
        for row in 0..rows {
            for column in &self.columns {
                if let Some(&c) = column.get(row) {
                    out.push(c);
                }
            }
        }
        out
    }
}
