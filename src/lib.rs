//! Classicrypt - Classical Text Ciphers
//!
//! Pure, stateless implementations of pre-modern ciphers, each with a
//! matching encrypt/decrypt pair. None of them is secure; the goal is a
//! faithful transform and an exact inverse.
//!
//! ## Cipher Families
//!
//! ```text
//! Modular substitution   additive, multiplicative, affine
//! Keystream substitution monoalphabetic, vigenere, autokey
//! Digraph substitution   playfair
//! Transposition          keyless, keyed (columnar), combined, double
//! ```
//!
//! Substitution ciphers keep the case of every letter and pass any other
//! character through at its original index. Transposition ciphers move
//! every character, letters or not.
//!
//! Keys are parsed and validated once, before any text is processed, into
//! the typed values in [`key`]. An invalid key is reported as a
//! [`CipherError`] and no partial output is produced.
//!
//! ## Example
//!
//! ```
//! use classicrypt::{Cipher, Direction};
//!
//! let cipher: Cipher = "vigenere".parse().unwrap();
//! let key = cipher.parse_key(&["lemon"]).unwrap();
//!
//! let sealed = cipher.apply("Attack at dawn", &key, Direction::Encrypt).unwrap();
//! assert_eq!(sealed, "Lxfopv mh oeib");
//!
//! let opened = cipher.apply(&sealed, &key, Direction::Decrypt).unwrap();
//! assert_eq!(opened, "Attack at dawn");
//! ```

pub mod alphabet;
pub mod cipher;
pub mod cli;
pub mod config;
pub mod error;
pub mod key;
pub mod keygen;
pub mod keystream;
pub mod modular;
pub mod playfair;
pub mod transposition;

pub use cipher::{Cipher, Direction};
pub use config::{CipherConfig, KeyValue};
pub use error::{CipherError, Result};
pub use key::Key;
pub use playfair::PlayfairMatrix;
