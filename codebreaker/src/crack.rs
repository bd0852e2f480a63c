use crate::analyze::MAX_PERIOD;
use crate::stats::{best_shift, chi_square_english, columns, estimate_period, letter_counts};
use anyhow::{bail, Context, Result};
use classicrypt::alphabet;
use classicrypt::Cipher;

pub struct CrackOptions {
    pub cipher: Cipher,
    /// Vigenère key length; estimated from the ciphertext when absent.
    pub period: Option<usize>,
    /// How many ranked candidates to keep.
    pub top: usize,
}

impl Default for CrackOptions {
    fn default() -> Self {
        Self {
            cipher: Cipher::Additive,
            period: None,
            top: 3,
        }
    }
}

/// A key together with the text it decrypts to.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub keys: Vec<String>,
    pub plaintext: String,
    pub chi_square: f64,
}

impl Candidate {
    fn try_keys(cipher: Cipher, ciphertext: &str, keys: Vec<String>) -> Result<Self> {
        let key = cipher.parse_key(keys.as_slice())?;
        let plaintext = cipher.decrypt(ciphertext, &key)?;
        let chi_square = chi_square_english(&letter_counts(&plaintext));
        Ok(Self {
            keys,
            plaintext,
            chi_square,
        })
    }
}

/// Recover likely keys, best first.
pub fn crack(ciphertext: &str, options: &CrackOptions) -> Result<Vec<Candidate>> {
    if letter_counts(ciphertext).iter().all(|&c| c == 0) {
        bail!("No letters to crack");
    }

    let mut candidates = match options.cipher {
        Cipher::Additive => (0..26)
            .map(|shift| {
                Candidate::try_keys(Cipher::Additive, ciphertext, vec![shift.to_string()])
            })
            .collect::<Result<Vec<_>>>()?,
        Cipher::Affine => alphabet::units()
            .flat_map(|a| (0..26).map(move |b| vec![a.to_string(), b.to_string()]))
            .map(|keys| Candidate::try_keys(Cipher::Affine, ciphertext, keys))
            .collect::<Result<Vec<_>>>()?,
        Cipher::Vigenere => {
            let period = match options.period {
                Some(0) => bail!("Period must be at least 1"),
                // Key letters are indexed by character position.
                Some(p) if p > ciphertext.chars().count() => bail!(
                    "Period {} is longer than the {}-character ciphertext",
                    p,
                    ciphertext.chars().count()
                ),
                Some(p) => p,
                None => estimate_period(ciphertext, MAX_PERIOD)
                    .context("Ciphertext too short to estimate a key period")?,
            };
            vec![Candidate::try_keys(
                Cipher::Vigenere,
                ciphertext,
                vec![vigenere_key(ciphertext, period)],
            )?]
        }
        other => bail!(
            "No attack for {} (supported: additive, affine, vigenere)",
            other
        ),
    };

    candidates.sort_by(|a, b| a.chi_square.total_cmp(&b.chi_square));
    candidates.truncate(options.top.max(1));
    Ok(candidates)
}

/// Solve each column of a Vigenère ciphertext as a Caesar shift.
pub fn vigenere_key(ciphertext: &str, period: usize) -> String {
    columns(ciphertext, period)
        .iter()
        .map(|column| alphabet::letter(best_shift(&letter_counts(column)).0, false))
        .collect()
}

/// Ranked candidates as a plain table.
pub fn render_candidates(cipher: Cipher, candidates: &[Candidate]) -> String {
    let mut output = String::new();
    output.push_str(&format!("Cracking {}\n\n", cipher));
    output.push_str(&format!("{:<5} {:<12} {:>10}  Plaintext\n", "Rank", "Key", "Chi-square"));
    for (rank, candidate) in candidates.iter().enumerate() {
        output.push_str(&format!(
            "{:<5} {:<12} {:>10.1}  {}\n",
            rank + 1,
            candidate.keys.join(" "),
            candidate.chi_square,
            candidate.plaintext
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::tests::SAMPLE;

    fn seal(cipher: Cipher, keys: &[&str], text: &str) -> String {
        let key = cipher.parse_key(keys).unwrap();
        cipher.encrypt(text, &key).unwrap()
    }

    #[test]
    fn test_crack_additive() {
        let sealed = seal(Cipher::Additive, &["3"], SAMPLE);
        let found = crack(&sealed, &CrackOptions::default()).unwrap();
        assert_eq!(found.len(), 3);
        assert_eq!(found[0].keys, vec!["3"]);
        assert_eq!(found[0].plaintext, SAMPLE);
    }

    #[test]
    fn test_crack_affine() {
        let sealed = seal(Cipher::Affine, &["5", "8"], SAMPLE);
        let options = CrackOptions {
            cipher: Cipher::Affine,
            top: 1,
            ..Default::default()
        };
        let found = crack(&sealed, &options).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].keys, vec!["5", "8"]);
    }

    #[test]
    fn test_crack_vigenere_estimates_period() {
        let sealed = seal(Cipher::Vigenere, &["lemon"], SAMPLE);
        let options = CrackOptions {
            cipher: Cipher::Vigenere,
            ..Default::default()
        };
        let found = crack(&sealed, &options).unwrap();
        assert_eq!(found[0].keys, vec!["lemon"]);
        assert_eq!(found[0].plaintext, SAMPLE);
    }

    #[test]
    fn test_crack_rejects_other_ciphers() {
        let options = CrackOptions {
            cipher: Cipher::Playfair,
            ..Default::default()
        };
        assert!(crack("abc", &options).is_err());
        assert!(crack("1234", &CrackOptions::default()).is_err());
    }

    #[test]
    fn test_crack_rejects_oversized_period() {
        let options = |period| CrackOptions {
            cipher: Cipher::Vigenere,
            period: Some(period),
            ..Default::default()
        };
        let err = crack("abc de", &options(usize::MAX)).unwrap_err();
        assert!(err.to_string().contains("6-character ciphertext"));
        assert!(crack("abc de", &options(7)).is_err());
        assert!(crack("abc de", &options(0)).is_err());
        assert_eq!(crack("abc de", &options(6)).unwrap().len(), 1);
    }

    #[test]
    fn test_render_candidates() {
        let candidates = vec![Candidate {
            keys: vec!["5".into(), "8".into()],
            plaintext: "hello".into(),
            chi_square: 12.25,
        }];
        let table = render_candidates(Cipher::Affine, &candidates);
        assert!(table.starts_with("Cracking affine"));
        assert!(table.contains("5 8"));
        assert!(table.contains("hello"));
    }
}
