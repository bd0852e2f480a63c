use std::error::Error;
use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::tempdir;

fn classicrypt_command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_classicrypt"))
}

fn run(args: &[&str]) -> Result<Output, Box<dyn Error>> {
    Ok(classicrypt_command().args(args).output()?)
}

fn stdout_line(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

#[test]
fn encrypt_then_decrypt_roundtrip() -> Result<(), Box<dyn Error>> {
    let encrypt = run(&["encrypt", "--cipher", "vigenere", "--key", "key", "attackatdawn"])?;
    assert!(
        encrypt.status.success(),
        "encrypt failed: {}",
        String::from_utf8_lossy(&encrypt.stderr)
    );
    let cipher = stdout_line(&encrypt);
    assert_eq!(cipher, "kxrkgikxbkal");

    let decrypt = run(&["d", "-c", "7", "-k", "key", &cipher])?;
    assert!(decrypt.status.success());
    assert_eq!(stdout_line(&decrypt), "attackatdawn");
    Ok(())
}

#[test]
fn affine_takes_two_keys() -> Result<(), Box<dyn Error>> {
    let output = run(&[
        "encrypt", "--cipher", "affine", "--key", "5", "--key", "8", "AFFINECIPHER",
    ])?;
    assert!(output.status.success());
    assert_eq!(stdout_line(&output), "IHHWVCSWFRCP");
    Ok(())
}

#[test]
fn negative_shift_is_accepted() -> Result<(), Box<dyn Error>> {
    let output = run(&["encrypt", "--cipher", "caesar", "--key", "-3", "KHOOR"])?;
    assert!(
        output.status.success(),
        "negative key rejected: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(stdout_line(&output), "HELLO");
    Ok(())
}

#[test]
fn invalid_key_reports_error() -> Result<(), Box<dyn Error>> {
    let output = run(&["encrypt", "--cipher", "multiplicative", "--key", "2", "hello"])?;
    assert!(!output.status.success(), "non-coprime key should fail");
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Error: Key 2 is not coprime with 26"));
    assert!(output.stdout.is_empty(), "no partial output on failure");
    Ok(())
}

#[test]
fn text_is_read_from_stdin() -> Result<(), Box<dyn Error>> {
    let mut child = classicrypt_command()
        .args(["encrypt", "--cipher", "keyless"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()?;
    child
        .stdin
        .take()
        .ok_or("stdin not captured")?
        .write_all(b"abcde\n")?;
    let output = child.wait_with_output()?;
    assert!(output.status.success());
    assert_eq!(stdout_line(&output), "cdeab");
    Ok(())
}

#[test]
fn json_output_and_config_file() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let job = dir.path().join("job.json");
    fs::write(
        &job,
        br#"{ "cipher": "playfair", "keys": ["monarchy"], "direction": "encrypt" }"#,
    )?;

    let output = run(&["run", "--config", job.to_str().unwrap(), "--json", "hello"])?;
    assert!(
        output.status.success(),
        "run failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["cipher"], "playfair");
    assert_eq!(json["output"], "CFSUPM");

    let output = run(&["decrypt", "--config", job.to_str().unwrap(), "CFSUPM"])?;
    assert!(output.status.success());
    assert_eq!(stdout_line(&output), "HELXLO");
    Ok(())
}

#[test]
fn keygen_output_feeds_back_in() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let job = dir.path().join("key.json");

    let keygen = run(&["keygen", "--cipher", "double", "--length", "6", "--seed", "11", "--json"])?;
    assert!(keygen.status.success());
    fs::write(&job, &keygen.stdout)?;

    let encrypt = run(&["encrypt", "--config", job.to_str().unwrap(), "meetmeatnoon"])?;
    assert!(encrypt.status.success());
    let cipher = stdout_line(&encrypt);
    assert_eq!(cipher.len(), "meetmeatnoon".len());

    let decrypt = run(&["decrypt", "--config", job.to_str().unwrap(), &cipher])?;
    assert_eq!(stdout_line(&decrypt), "meetmeatnoon");
    Ok(())
}

#[test]
fn list_shows_every_cipher() -> Result<(), Box<dyn Error>> {
    let output = run(&["list"])?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("monoalphabetic"));
    assert!(stdout.contains("combined-transposition"));
    Ok(())
}

#[test]
fn version_flag_prints_build_information() -> Result<(), Box<dyn Error>> {
    let output = run(&["--version"])?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(
        stdout.starts_with("classicrypt "),
        "unexpected version line: {}",
        stdout
    );
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn unknown_cipher_is_rejected() -> Result<(), Box<dyn Error>> {
    let output = run(&["encrypt", "--cipher", "enigma", "--key", "x", "text"])?;
    assert!(!output.status.success());
    Ok(())
}
