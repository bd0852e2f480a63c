use clap::{Parser, Subcommand};
use classicrypt::cli::{
    generate_config, run_cipher, show_ciphers, show_keys, KeygenOptions, RunOptions, RunReport,
};
use classicrypt::keygen::DEFAULT_LENGTH;
use classicrypt::{Cipher, CipherError, Direction};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("CLASSICRYPT_VERSION");
const PROFILE: &str = env!("CLASSICRYPT_PROFILE");
const GIT_HASH: &str = env!("CLASSICRYPT_GIT_HASH");

fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} ({})", PROFILE, VERSION, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "classicrypt")]
#[command(author, about = "Classical text ciphers: substitution, Playfair and transposition", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Args)]
struct CipherArgs {
    /// Cipher name or menu number (see `list`)
    #[arg(short, long, value_parser = parse_cipher)]
    cipher: Option<Cipher>,

    /// Key value; repeat for ciphers taking two keys
    #[arg(short, long = "key", allow_hyphen_values = true)]
    keys: Vec<String>,

    /// JSON job file with cipher and keys
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Report the resolved cipher and key on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Text to transform (read from stdin when omitted)
    text: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text
    #[command(alias = "e")]
    Encrypt(CipherArgs),

    /// Decrypt text
    #[command(alias = "d")]
    Decrypt(CipherArgs),

    /// Run a job file, using its direction (encrypt by default)
    #[command(alias = "r")]
    Run(CipherArgs),

    /// List supported ciphers
    #[command(alias = "l")]
    List,

    /// Generate a random key
    #[command(alias = "k")]
    Keygen {
        /// Cipher to generate a key for
        #[arg(short, long, value_parser = parse_cipher)]
        cipher: Cipher,

        /// Keyword / column key length
        #[arg(long, default_value_t = DEFAULT_LENGTH)]
        length: usize,

        /// Seed for reproducible keys
        #[arg(long)]
        seed: Option<u64>,

        /// Print a JSON job file instead of arguments
        #[arg(long)]
        json: bool,
    },
}

fn parse_cipher(s: &str) -> Result<Cipher, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn read_text(text: Option<String>) -> Result<String, CipherError> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf.trim_end_matches(['\n', '\r']).to_string())
        }
    }
}

fn run_command(args: CipherArgs, direction: Option<Direction>) -> Result<(), CipherError> {
    let text = read_text(args.text)?;
    let options = RunOptions {
        cipher: args.cipher,
        keys: args.keys,
        direction,
        config: args.config,
    };

    let report: RunReport = run_cipher(&text, &options)?;
    if args.verbose {
        eprintln!(
            "{} {} with key {}",
            report.direction, report.cipher, report.key_summary
        );
    }

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report.output);
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --version flag
    if cli.version {
        println!("classicrypt {}", get_version());
        return ExitCode::SUCCESS;
    }

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            use clap::CommandFactory;
            if Cli::command().print_help().is_err() {
                return ExitCode::FAILURE;
            }
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Encrypt(args) => run_command(args, Some(Direction::Encrypt)),
        Commands::Decrypt(args) => run_command(args, Some(Direction::Decrypt)),
        Commands::Run(args) => run_command(args, None),
        Commands::List => {
            print!("{}", show_ciphers());
            Ok(())
        }
        Commands::Keygen {
            cipher,
            length,
            seed,
            json,
        } => {
            let options = KeygenOptions {
                cipher,
                length,
                seed,
            };
            show_keys(&generate_config(&options), json).map(|keys| print!("{}", keys))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
