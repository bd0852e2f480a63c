use crate::cipher::Cipher;
use crate::config::{CipherConfig, KeyValue};
use crate::error::Result;
use crate::keygen::{generate, DEFAULT_LENGTH};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Options for the keygen command
#[derive(Debug, Clone)]
pub struct KeygenOptions {
    pub cipher: Cipher,
    pub length: usize,
    /// Fixed seed for reproducible keys; system entropy otherwise
    pub seed: Option<u64>,
}

impl Default for KeygenOptions {
    fn default() -> Self {
        Self {
            cipher: Cipher::Vigenere,
            length: DEFAULT_LENGTH,
            seed: None,
        }
    }
}

/// Generate a key and wrap it in a job file description
pub fn generate_config(options: &KeygenOptions) -> CipherConfig {
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let keys = generate(options.cipher, options.length, &mut rng)
        .into_iter()
        .map(|raw| match raw.parse::<i64>() {
            Ok(n) => KeyValue::Integer(n),
            Err(_) => KeyValue::Text(raw),
        })
        .collect();
    CipherConfig::new(options.cipher, keys)
}

/// Render a generated key, either as `--key` arguments or as JSON
pub fn show_keys(config: &CipherConfig, json: bool) -> Result<String> {
    if json {
        let mut text = String::from_utf8_lossy(&config.to_json()?).into_owned();
        text.push('\n');
        return Ok(text);
    }

    let mut output = format!("--cipher {}", config.cipher);
    for key in config.raw_keys() {
        output.push_str(&format!(" --key {}", key));
    }
    output.push('\n');
    Ok(output)
}
