use crate::dashboard::{Dashboard, Section, Severity};
use crate::stats::{
    best_shift, chi_square_english, estimate_period, friedman_estimate, index_of_coincidence,
    kasiski, letter_counts, top_letters, total, ENGLISH_IC, RANDOM_IC,
};
use anyhow::{bail, Result};

/// Longest key period considered when estimating.
pub const MAX_PERIOD: usize = 20;

/// Chi-square below which text is read as English letter frequencies.
const ENGLISH_CHI: f64 = 100.0;

/// Frequency, English fit and key-period statistics of a ciphertext.
pub fn analyze_text(text: &str) -> Result<String> {
    let counts = letter_counts(text);
    let letters = total(&counts);
    if letters == 0 {
        bail!("No letters to analyze");
    }

    let mut output = String::new();
    output.push_str("Codebreaker Classical Cryptanalysis\n");
    output.push_str("===================================\n\n");
    output.push_str(&format!("Characters: {}\n", text.chars().count()));
    output.push_str(&format!("Letters analyzed: {}\n\n", letters));

    let mut dashboard = Dashboard::new("Cryptanalysis Results");

    let ic = index_of_coincidence(&counts);
    let top = top_letters(&counts, 5)
        .iter()
        .map(|(c, n)| format!("{} ({})", c, n))
        .collect::<Vec<_>>()
        .join(", ");
    let unique = counts.iter().filter(|&&c| c > 0).count();
    dashboard.add_section(
        Section::new("Frequency")
            .metric(
                "Unique Letters",
                format!("{}/26", unique),
                format!("Most common: {}", top),
                Severity::Pass,
            )
            .metric(
                "Index of Coincidence",
                format!("{:.4}", ic),
                interpret_ic(ic),
                severity_ic(ic),
            ),
    );

    let chi = chi_square_english(&counts);
    let (shift, shifted_chi) = best_shift(&counts);
    dashboard.add_section(
        Section::new("English Fit")
            .metric(
                "Chi-square",
                format!("{:.1}", chi),
                if chi < ENGLISH_CHI {
                    "Letters occur at English rates: plaintext or transposition"
                } else {
                    "Letter rates differ from English"
                },
                severity_chi(chi),
            )
            .metric(
                "Best Shift",
                shift.to_string(),
                format!("Chi-square {:.1} after undoing an additive shift", shifted_chi),
                if shift != 0 {
                    severity_chi(shifted_chi)
                } else {
                    Severity::Pass
                },
            ),
    );

    let kasiski = kasiski(text);
    let friedman = friedman_estimate(ic, letters);
    let period = estimate_period(text, MAX_PERIOD);
    dashboard.add_section(
        Section::new("Key Period")
            .metric(
                "Kasiski",
                if kasiski.repeats == 0 {
                    "n/a".to_string()
                } else {
                    format!("gcd {}", kasiski.gcd)
                },
                format!("{} repeated trigrams", kasiski.repeats),
                severity_kasiski(kasiski.repeats, kasiski.gcd),
            )
            .metric(
                "Friedman",
                friedman.map_or("n/a".to_string(), |k| format!("{:.1}", k)),
                "Key length estimated from the overall IC",
                Severity::Pass,
            )
            .metric(
                "Column IC",
                period.map_or("n/a".to_string(), |p| p.to_string()),
                format!("Smallest period up to {} with English-like columns", MAX_PERIOD),
                match period {
                    Some(p) if p > 1 => Severity::Warn,
                    _ => Severity::Pass,
                },
            ),
    );

    output.push_str(&dashboard.render());
    Ok(output)
}

fn interpret_ic(ic: f64) -> &'static str {
    if ic >= (ENGLISH_IC + RANDOM_IC) / 2.0 + 0.003 {
        "Close to English: monoalphabetic or transposition"
    } else if ic >= RANDOM_IC + 0.006 {
        "Between English and random: short polyalphabetic key"
    } else {
        "Close to random: long polyalphabetic key"
    }
}

fn severity_ic(ic: f64) -> Severity {
    if ic >= 0.055 {
        Severity::Fail
    } else if ic >= 0.045 {
        Severity::Warn
    } else {
        Severity::Pass
    }
}

fn severity_chi(chi: f64) -> Severity {
    if chi < ENGLISH_CHI {
        Severity::Fail
    } else {
        Severity::Pass
    }
}

fn severity_kasiski(repeats: usize, gcd: usize) -> Severity {
    if repeats == 0 || gcd <= 1 {
        Severity::Pass
    } else {
        Severity::Warn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::tests::SAMPLE;
    use classicrypt::Cipher;

    #[test]
    fn test_plaintext_reads_as_english() {
        let report = analyze_text(SAMPLE).unwrap();
        assert!(report.contains("Codebreaker Classical Cryptanalysis"));
        assert!(report.contains("Index of Coincidence"));
        assert!(report.contains("Letters occur at English rates"));
    }

    #[test]
    fn test_caesar_shift_is_reported() {
        let key = Cipher::Additive.parse_key(&["7"]).unwrap();
        let sealed = Cipher::Additive.encrypt(SAMPLE, &key).unwrap();
        let report = analyze_text(&sealed).unwrap();
        assert!(report.contains("| Best Shift "));
        assert!(report.contains("| 7 "));
    }

    #[test]
    fn test_no_letters() {
        assert!(analyze_text("1234 !?").is_err());
    }
}
