use crate::cipher::Cipher;

/// Table of supported ciphers and the keys they take
pub fn show_ciphers() -> String {
    let width = Cipher::ALL
        .iter()
        .map(|c| c.name().len())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    output.push_str("Classical Ciphers\n");
    output.push_str("=================\n\n");

    for (i, cipher) in Cipher::ALL.iter().enumerate() {
        output.push_str(&format!(
            "{:>2}. {:<width$}  {:<13}  {} key(s): {}\n",
            i + 1,
            cipher.name(),
            if cipher.is_transposition() {
                "transposition"
            } else {
                "substitution"
            },
            cipher.key_arity(),
            cipher.key_help(),
            width = width
        ));
    }

    output.push_str("\nNone of these ciphers is secure; see `codebreaker`.\n");
    output
}
