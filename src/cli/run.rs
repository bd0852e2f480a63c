use crate::cipher::{Cipher, Direction};
use crate::config::CipherConfig;
use crate::error::{CipherError, Result};
use serde::Serialize;
use std::path::PathBuf;

/// Options for the encrypt, decrypt and run commands
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub cipher: Option<Cipher>,
    pub keys: Vec<String>,
    /// Falls back to the job file's direction, then to encryption
    pub direction: Option<Direction>,
    pub config: Option<PathBuf>,
}

/// Result of running a cipher over one text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub cipher: Cipher,
    pub direction: Direction,
    #[serde(skip)]
    pub key_summary: String,
    pub input: String,
    pub output: String,
}

impl RunReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Resolve cipher, keys and direction from the options (and job file, if
/// any), validate the key, then transform the text.
///
/// Command-line values override the job file.
pub fn run_cipher(text: &str, options: &RunOptions) -> Result<RunReport> {
    let config = options
        .config
        .as_deref()
        .map(CipherConfig::load)
        .transpose()?;

    let cipher = options
        .cipher
        .or(config.as_ref().map(|c| c.cipher))
        .ok_or_else(|| CipherError::UnsupportedCipher("no cipher selected".into()))?;

    let keys = match &config {
        Some(config) if options.keys.is_empty() => config.raw_keys(),
        _ => options.keys.clone(),
    };

    let direction = options
        .direction
        .or(config.as_ref().and_then(|c| c.direction))
        .unwrap_or_default();

    let key = cipher.parse_key(&keys)?;
    let output = cipher.apply(text, &key, direction)?;

    Ok(RunReport {
        cipher,
        direction,
        key_summary: key.summary(),
        input: text.to_string(),
        output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KeyValue;
    use tempfile::tempdir;

    #[test]
    fn test_run_from_options() {
        let options = RunOptions {
            cipher: Some(Cipher::Vigenere),
            keys: vec!["key".into()],
            direction: Some(Direction::Encrypt),
            config: None,
        };
        let report = run_cipher("attackatdawn", &options).unwrap();
        assert_eq!(report.output, "kxrkgikxbkal");
        assert_eq!(report.key_summary, "word key");
    }

    #[test]
    fn test_run_requires_cipher() {
        let err = run_cipher("text", &RunOptions::default()).unwrap_err();
        assert!(matches!(err, CipherError::UnsupportedCipher(_)));
    }

    #[test]
    fn test_run_from_config_with_override() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("job.json");
        let mut config = CipherConfig::new(
            Cipher::Affine,
            vec![KeyValue::Integer(5), KeyValue::Integer(8)],
        );
        config.direction = Some(Direction::Decrypt);
        config.save(&path).unwrap();

        let options = RunOptions {
            config: Some(path.clone()),
            ..Default::default()
        };
        let report = run_cipher("IHHWVCSWFRCP", &options).unwrap();
        assert_eq!(report.direction, Direction::Decrypt);
        assert_eq!(report.output, "AFFINECIPHER");

        let options = RunOptions {
            cipher: Some(Cipher::Additive),
            keys: vec!["3".into()],
            direction: Some(Direction::Encrypt),
            config: Some(path),
        };
        let report = run_cipher("HELLO", &options).unwrap();
        assert_eq!(report.output, "KHOOR");
    }

    #[test]
    fn test_report_json() {
        let options = RunOptions {
            cipher: Some(Cipher::KeylessTransposition),
            ..Default::default()
        };
        let report = run_cipher("abcde", &options).unwrap();
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["cipher"], "keyless-transposition");
        assert_eq!(json["direction"], "encrypt");
        assert_eq!(json["output"], "cdeab");
        assert!(json.get("key_summary").is_none());
    }
}
