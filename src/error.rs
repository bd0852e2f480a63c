use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid key type: {0}")]
    InvalidKeyType(String),

    #[error("Key {0} is not coprime with 26")]
    KeyNotCoprime(i64),

    #[error("Invalid key length: {0}. Substitution key must be exactly 26 letters")]
    InvalidKeyLength(usize),

    #[error("Invalid key characters: {0}")]
    InvalidKeyCharacters(String),

    #[error("Invalid key: {0}. Key must be a non-empty string of unique characters")]
    InvalidKeyUniqueness(String),

    #[error("Ciphertext has {0} letters. Playfair ciphertext must have an even number of letters")]
    OddCiphertextLength(usize),

    #[error("Unsupported cipher: {0}")]
    UnsupportedCipher(String),

    #[error("Invalid direction: {0}. Use 'encrypt' or 'decrypt'")]
    InvalidDirection(String),
}

pub type Result<T> = std::result::Result<T, CipherError>;
