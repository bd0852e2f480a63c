//! The 26-letter alphabet shared by every cipher family.
//!
//! Letters map to positions `0..26` (`a` = 0). All position arithmetic is
//! done modulo 26 and normalized back into that range before a letter is
//! produced, so negative shifts and large keys behave the same way.

/// Number of letters in the alphabet.
pub const SIZE: u8 = 26;

/// Lowercase letters in position order.
pub const LETTERS: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Position of an ASCII letter, ignoring case. `None` for anything else.
pub fn position(c: char) -> Option<u8> {
    if c.is_ascii_alphabetic() {
        Some(c.to_ascii_lowercase() as u8 - b'a')
    } else {
        None
    }
}

/// Letter at `pos` (taken mod 26), uppercase when `upper` is set.
pub fn letter(pos: u8, upper: bool) -> char {
    let c = LETTERS[(pos % SIZE) as usize];
    if upper {
        c.to_ascii_uppercase()
    } else {
        c
    }
}

/// Reduce any integer into `0..26`.
pub fn normalize(value: i64) -> u8 {
    value.rem_euclid(SIZE as i64) as u8
}

/// Map every letter of `text` through `f`, keeping its case.
///
/// Non-letters are copied through unchanged at their original index.
pub fn map_letters<F>(text: &str, mut f: F) -> String
where
    F: FnMut(u8) -> u8,
{
    text.chars()
        .map(|c| match position(c) {
            Some(p) => letter(f(p), c.is_ascii_uppercase()),
            None => c,
        })
        .collect()
}

pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Multiplicative inverse of `a` modulo 26, if one exists.
pub fn mod_inverse(a: i64) -> Option<u8> {
    let a = normalize(a);
    if gcd(a as i64, SIZE as i64) != 1 {
        return None;
    }
    (1..SIZE).find(|&x| (a as u16 * x as u16) % SIZE as u16 == 1)
}

/// Units of the ring Z/26: the twelve values with an inverse.
pub fn units() -> impl Iterator<Item = u8> {
    (1..SIZE).filter(|&a| gcd(a as i64, SIZE as i64) == 1)
}
