//! Command-line front-end for the textbook RSA codec.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use num_bigint::BigUint;
use tracing::info;

use textbook_rsa::rsa::bigint::prime_factorization;
use textbook_rsa::rsa::{decrypt, encrypt, RsaKeyPair};
use textbook_rsa::util::{setup_logging, AlphabetKind, CodecConfig, DEFAULT_BLOCK_LENGTH};

/// Textbook RSA over alphabet-coded text.
#[derive(Parser)]
#[command(name = "textbook-rsa", version, about = "Textbook RSA block codec")]
struct Cli {
    /// Log pipeline steps at debug level.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct CodecArgs {
    /// Alphabet: basic, extended or custom:<symbols>.
    #[arg(long, env = "RSA_ALPHABET", default_value = "basic")]
    alphabet: AlphabetKind,
    /// Digits per numeric block; must match between encryption and decryption.
    #[arg(long, env = "RSA_BLOCK_LENGTH", default_value_t = DEFAULT_BLOCK_LENGTH)]
    block_length: usize,
}

impl CodecArgs {
    fn config(&self) -> CodecConfig {
        CodecConfig::default()
            .with_alphabet(self.alphabet.clone())
            .with_block_length(self.block_length)
    }
}

#[derive(Args)]
struct TextInput {
    /// Text to process.
    #[arg(required_unless_present = "input", conflicts_with = "input")]
    text: Option<String>,
    /// Read the text from a file instead.
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,
}

impl TextInput {
    fn read(&self) -> Result<String> {
        match (&self.text, &self.input) {
            (Some(text), _) => Ok(text.clone()),
            (None, Some(path)) => {
                let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
                Ok(text.trim_end_matches(['\r', '\n']).to_string())
            }
            (None, None) => bail!("no input text given"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a message with the key derived from primes p, q and exponent e.
    Encrypt {
        #[arg(long)]
        p: BigUint,
        #[arg(long)]
        q: BigUint,
        #[arg(long)]
        e: BigUint,
        /// Encode the message as given instead of uppercasing it.
        #[arg(long, default_value_t = false)]
        keep_case: bool,
        #[command(flatten)]
        codec: CodecArgs,
        #[command(flatten)]
        message: TextInput,
    },
    /// Decrypt a ciphertext produced under the public key (e, n).
    Decrypt {
        #[arg(long)]
        e: BigUint,
        #[arg(long)]
        n: BigUint,
        #[command(flatten)]
        codec: CodecArgs,
        #[command(flatten)]
        ciphertext: TextInput,
    },
    /// Print the public and private exponents for primes p, q and exponent e.
    Keys {
        #[arg(long)]
        p: BigUint,
        #[arg(long)]
        q: BigUint,
        #[arg(long)]
        e: BigUint,
    },
    /// Print the prime factorization of an integer.
    Factor { n: BigUint },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Encrypt {
            p,
            q,
            e,
            keep_case,
            codec,
            message,
        } => cmd_encrypt(&p, &q, &e, keep_case, &codec.config(), &message),
        Commands::Decrypt {
            e,
            n,
            codec,
            ciphertext,
        } => cmd_decrypt(&e, &n, &codec.config(), &ciphertext),
        Commands::Keys { p, q, e } => cmd_keys(&p, &q, &e),
        Commands::Factor { n } => cmd_factor(&n),
    }
}

fn cmd_encrypt(
    p: &BigUint,
    q: &BigUint,
    e: &BigUint,
    keep_case: bool,
    config: &CodecConfig,
    message: &TextInput,
) -> Result<()> {
    let mut text = message.read()?;
    if !keep_case {
        text = text.to_uppercase();
    }

    info!(alphabet = %config.alphabet, block_length = config.block_length, "encrypting");
    let alphabet = config.alphabet.resolve().context("invalid alphabet")?;
    let ciphertext = encrypt(&text, p, q, e, &alphabet, config.block_length).context("encryption failed")?;
    println!("{}", ciphertext);
    Ok(())
}

fn cmd_decrypt(e: &BigUint, n: &BigUint, config: &CodecConfig, ciphertext: &TextInput) -> Result<()> {
    let text = ciphertext.read()?;

    info!(alphabet = %config.alphabet, block_length = config.block_length, "decrypting");
    let alphabet = config.alphabet.resolve().context("invalid alphabet")?;
    let message = decrypt(&text, e, n, &alphabet, config.block_length).context("decryption failed")?;
    println!("{}", message);
    Ok(())
}

fn cmd_keys(p: &BigUint, q: &BigUint, e: &BigUint) -> Result<()> {
    let keypair = RsaKeyPair::from_primes(p, q, e).context("key derivation failed")?;
    println!("e = {}", keypair.public_key.e);
    println!("n = {}", keypair.public_key.n);
    println!("d = {}", keypair.private_key.d);
    Ok(())
}

fn cmd_factor(n: &BigUint) -> Result<()> {
    let factors = prime_factorization(n);
    if factors.is_empty() {
        bail!("{} has no prime factors", n);
    }
    let rendered: Vec<String> = factors.iter().map(ToString::to_string).collect();
    println!("{} = {}", n, rendered.join(" * "));
    Ok(())
}
