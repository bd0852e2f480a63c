use std::collections::HashMap;

/// Relative letter frequencies of English text, `a..=z`.
pub const ENGLISH: [f64; 26] = [
    0.08167, 0.01492, 0.02782, 0.04253, 0.12702, 0.02228, 0.02015, 0.06094, 0.06966, 0.00153,
    0.00772, 0.04025, 0.02406, 0.06749, 0.07507, 0.01929, 0.00095, 0.05987, 0.06327, 0.09056,
    0.02758, 0.00978, 0.02360, 0.00150, 0.01974, 0.00074,
];

/// Index of coincidence of English text.
pub const ENGLISH_IC: f64 = 0.0667;

/// Index of coincidence of uniformly random letters (1/26).
pub const RANDOM_IC: f64 = 1.0 / 26.0;

/// Average column IC above which a period is taken as the key length.
const PERIOD_THRESHOLD: f64 = 0.055;

/// Letter counts `a..=z`, case-folded. Non-ASCII-letters are ignored.
pub fn letter_counts(text: &str) -> [u64; 26] {
    let mut counts = [0u64; 26];
    for c in text.chars().filter(char::is_ascii_alphabetic) {
        counts[(c.to_ascii_lowercase() as u8 - b'a') as usize] += 1;
    }
    counts
}

pub fn total(counts: &[u64; 26]) -> u64 {
    counts.iter().sum()
}

pub fn index_of_coincidence(counts: &[u64; 26]) -> f64 {
    let n = total(counts);
    if n < 2 {
        return 0.0;
    }
    let numerator: u64 = counts
        .iter()
        .map(|&c| if c > 1 { c * (c - 1) } else { 0 })
        .sum();
    numerator as f64 / (n * (n - 1)) as f64
}

/// Pearson chi-square of the counts against English frequencies.
///
/// Lower means more English-like. Text without letters scores infinity.
pub fn chi_square_english(counts: &[u64; 26]) -> f64 {
    chi_square_shifted(counts, 0)
}

/// Chi-square after shifting every letter back by `shift`.
fn chi_square_shifted(counts: &[u64; 26], shift: u8) -> f64 {
    let n = total(counts) as f64;
    if n == 0.0 {
        return f64::INFINITY;
    }
    (0..26)
        .map(|p| {
            let observed = counts[(p + shift as usize) % 26] as f64;
            let expected = n * ENGLISH[p];
            (observed - expected).powi(2) / expected
        })
        .sum()
}

/// The additive shift whose removal makes the counts most English-like.
pub fn best_shift(counts: &[u64; 26]) -> (u8, f64) {
    (0..26u8)
        .map(|shift| (shift, chi_square_shifted(counts, shift)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .unwrap_or((0, f64::INFINITY))
}

/// Most frequent letters, highest first, ties alphabetical.
pub fn top_letters(counts: &[u64; 26], limit: usize) -> Vec<(char, u64)> {
    let mut items: Vec<(char, u64)> = counts
        .iter()
        .enumerate()
        .filter(|&(_, &c)| c > 0)
        .map(|(p, &c)| ((b'a' + p as u8) as char, c))
        .collect();
    items.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    items.truncate(limit);
    items
}

pub struct KasiskiResult {
    /// Distinct trigrams seen more than once.
    pub repeats: usize,
    /// GCD of the distances between consecutive occurrences.
    pub gcd: usize,
}

/// Kasiski examination over repeated letter trigrams.
///
/// Distances are measured in character positions, which is how the
/// keyword advances in this crate's Vigenère.
pub fn kasiski(text: &str) -> KasiskiResult {
    let chars: Vec<char> = text.chars().map(|c| c.to_ascii_lowercase()).collect();
    let mut positions: HashMap<[char; 3], Vec<usize>> = HashMap::new();
    for (i, window) in chars.windows(3).enumerate() {
        if window.iter().all(char::is_ascii_alphabetic) {
            positions
                .entry([window[0], window[1], window[2]])
                .or_default()
                .push(i);
        }
    }

    let mut gcd = 0usize;
    let mut repeats = 0usize;
    for pos in positions.values().filter(|pos| pos.len() > 1) {
        repeats += 1;
        for pair in pos.windows(2) {
            gcd = gcd_usize(gcd, pair[1] - pair[0]);
        }
    }
    KasiskiResult { repeats, gcd }
}

fn gcd_usize(a: usize, b: usize) -> usize {
    if b == 0 {
        a
    } else {
        gcd_usize(b, a % b)
    }
}

/// Friedman's key length estimate from the IC of `letters` letters.
///
/// `None` when the text is too flat (or too short) for the formula.
pub fn friedman_estimate(ic: f64, letters: u64) -> Option<f64> {
    let n = letters as f64;
    let denominator = (n - 1.0) * ic - RANDOM_IC * n + ENGLISH_IC;
    if letters < 2 || denominator <= 0.0 {
        return None;
    }
    Some((ENGLISH_IC - RANDOM_IC) * n / denominator)
}

/// Split letters into `period` columns by character index.
pub fn columns(text: &str, period: usize) -> Vec<String> {
    let mut columns = vec![String::new(); period.max(1)];
    for (i, c) in text.chars().enumerate() {
        if c.is_ascii_alphabetic() {
            columns[i % period.max(1)].push(c);
        }
    }
    columns
}

/// Mean IC of the columns for a candidate period.
pub fn column_ic(text: &str, period: usize) -> f64 {
    let columns = columns(text, period);
    let sum: f64 = columns
        .iter()
        .map(|column| index_of_coincidence(&letter_counts(column)))
        .sum();
    sum / columns.len() as f64
}

/// Smallest period up to `max` whose columns look monoalphabetic,
/// falling back to the period with the highest column IC.
pub fn estimate_period(text: &str, max: usize) -> Option<usize> {
    let letters = total(&letter_counts(text)) as usize;
    // Each column needs a few letters for its IC to mean anything.
    let max = max.min(letters / 4);
    let scores: Vec<(usize, f64)> = (1..=max).map(|p| (p, column_ic(text, p))).collect();

    scores
        .iter()
        .find(|(_, ic)| *ic >= PERIOD_THRESHOLD)
        .or_else(|| scores.iter().max_by(|a, b| a.1.total_cmp(&b.1)))
        .map(|&(p, _)| p)
}
