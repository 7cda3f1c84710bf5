//! gcmbox CLI - Password-based file encryption
//!
//! Command-line interface for encrypting and decrypting files using
//! AES-256-GCM with PBKDF2-HMAC-SHA256 key derivation.

use clap::{Parser, ValueEnum};
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use gcmbox::config::{Action, JobConfig};
use gcmbox::file_ops;
use gcmbox::kdf::{DEFAULT_ITERATIONS, KdfParams};
use gcmbox::passphrase::{PassphraseReader, ReaderPassphraseReader, TerminalPassphraseReader};

#[derive(Parser)]
#[command(name = "gcmbox")]
#[command(version)]
#[command(about = "Encrypt / Decrypt files", long_about = None)]
#[command(after_help = "Example:\n  gcmbox -a encrypt -s sample.txt -d sample.enc")]
struct Cli {
    /// Action to perform
    #[arg(short, long, value_enum)]
    action: CliAction,

    /// Source file
    #[arg(short, long, value_name = "FILE")]
    src: PathBuf,

    /// Destination file
    #[arg(short, long, value_name = "FILE")]
    dest: PathBuf,

    /// PBKDF2 iteration count; decryption must use the value used to encrypt
    #[arg(long, value_name = "N", default_value_t = DEFAULT_ITERATIONS)]
    iterations: NonZeroU32,

    /// Read password from stdin instead of from terminal
    #[arg(long)]
    passphrase_stdin: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Clone, Copy, ValueEnum)]
enum CliAction {
    Encrypt,
    Decrypt,
}

impl From<CliAction> for Action {
    fn from(action: CliAction) -> Self {
        match action {
            CliAction::Encrypt => Action::Encrypt,
            CliAction::Decrypt => Action::Decrypt,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let job = JobConfig::new(cli.action.into(), cli.src, cli.dest)
        .with_kdf(KdfParams::new(cli.iterations));
    let mut reader = get_passphrase_reader(cli.passphrase_stdin, &job);

    if let Err(e) = file_ops::run(&job, &mut *reader) {
        tracing::debug!(category = ?e.category(), "operation failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    eprintln!(
        "{} successfully {} to {}",
        job.source.display(),
        job.action.past_tense(),
        job.destination.display()
    );
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn get_passphrase_reader(use_stdin: bool, job: &JobConfig) -> Box<dyn PassphraseReader> {
    if use_stdin {
        Box::new(ReaderPassphraseReader::new(Box::new(std::io::stdin())))
    } else {
        Box::new(TerminalPassphraseReader::new(format!(
            "Password to {} {}: ",
            job.action,
            job.source.display()
        )))
    }
}
