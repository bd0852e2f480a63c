mod analyze;
mod crack;
mod dashboard;
mod stats;

use analyze::analyze_text;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use classicrypt::Cipher;
use crack::{crack, render_candidates, CrackOptions};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "codebreaker")]
#[command(about = "Cryptanalysis toolkit for classical ciphertexts")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct Input {
    /// Read the ciphertext from a file
    #[arg(long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Ciphertext (read from stdin when neither this nor --file is given)
    text: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Letter statistics: frequency, IC, English fit and key period
    Analyze {
        #[command(flatten)]
        input: Input,
    },

    /// Recover the key of an additive, affine or Vigenère ciphertext
    Crack {
        /// Cipher the text was encrypted with
        #[arg(short, long, value_parser = parse_cipher)]
        cipher: Cipher,

        /// Vigenère key length (estimated when omitted)
        #[arg(long)]
        period: Option<usize>,

        /// Number of ranked candidates to show
        #[arg(long, default_value_t = 3)]
        top: usize,

        #[command(flatten)]
        input: Input,
    },
}

fn parse_cipher(s: &str) -> Result<Cipher, String> {
    s.parse().map_err(|e| format!("{}", e))
}

impl Input {
    fn read(self) -> Result<String> {
        if let Some(text) = self.text {
            return Ok(text);
        }
        if let Some(path) = self.file {
            return std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()));
        }
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze { input } => {
            let report = analyze_text(&input.read()?)?;
            print!("{}", report);
        }
        Commands::Crack {
            cipher,
            period,
            top,
            input,
        } => {
            let options = CrackOptions {
                cipher,
                period,
                top,
            };
            let text = input.read()?;
            let candidates = crack(text.trim_end_matches(['\n', '\r']), &options)?;
            print!("{}", render_candidates(cipher, &candidates));
        }
    }

    Ok(())
}
