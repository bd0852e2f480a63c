//! JSON job files.
//!
//! ```json
//! { "cipher": "affine", "keys": [5, 8] }
//! ```

use crate::cipher::{Cipher, Direction};
use crate::error::Result;
use crate::key::Key;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A raw key value: JSON integers and strings are both accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyValue {
    Integer(i64),
    Text(String),
}

impl KeyValue {
    pub fn as_raw(&self) -> String {
        match self {
            Self::Integer(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

/// Cipher selection plus its raw keys, as stored in a job file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherConfig {
    pub cipher: Cipher,
    #[serde(default)]
    pub keys: Vec<KeyValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
}

impl CipherConfig {
    pub fn new(cipher: Cipher, keys: Vec<KeyValue>) -> Self {
        Self {
            cipher,
            keys,
            direction: None,
        }
    }

    pub fn from_json(data: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(data)?)
    }

    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_json(&data)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn raw_keys(&self) -> Vec<String> {
        self.keys.iter().map(KeyValue::as_raw).collect()
    }

    /// Validate the stored keys against the cipher.
    pub fn key(&self) -> Result<Key> {
        self.cipher.parse_key(&self.raw_keys())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CipherError;
    use tempfile::tempdir;

    #[test]
    fn test_parse_mixed_key_values() {
        let config =
            CipherConfig::from_json(br#"{ "cipher": "affine", "keys": [5, "8"] }"#).unwrap();
        assert_eq!(config.cipher, Cipher::Affine);
        assert_eq!(config.raw_keys(), vec!["5", "8"]);
        assert!(config.direction.is_none());
        assert!(config.key().is_ok());
    }

    #[test]
    fn test_keys_default_to_empty() {
        let config = CipherConfig::from_json(br#"{ "cipher": "keyless" }"#);
        // aliases are not serde names
        assert!(matches!(config, Err(CipherError::Json(_))));

        let config =
            CipherConfig::from_json(br#"{ "cipher": "keyless-transposition" }"#).unwrap();
        assert!(config.keys.is_empty());
        assert_eq!(config.key().unwrap(), Key::None);
    }

    #[test]
    fn test_invalid_key_reported() {
        let config =
            CipherConfig::from_json(br#"{ "cipher": "multiplicative", "keys": [2] }"#).unwrap();
        assert!(matches!(config.key(), Err(CipherError::KeyNotCoprime(2))));
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("job.json");
        let mut config = CipherConfig::new(
            Cipher::DoubleTransposition,
            vec![KeyValue::Text("key1".into()), KeyValue::Text("zebra".into())],
        );
        config.direction = Some(Direction::Decrypt);
        config.save(&path).unwrap();

        let loaded = CipherConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }
}
