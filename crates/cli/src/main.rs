// vocab CLI - filter a vocabulary level list against lower levels

mod exit_codes;
mod filter;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use exit_codes::{recon_exit_code, EXIT_SUCCESS};
use vocab_recon::ReconError;

#[derive(Parser)]
#[command(name = "vocab")]
#[command(about = "Remove vocabulary already known at a lower level and write the rest in collation order")]
#[command(long_version = long_version())]
#[command(version)]
#[command(subcommand_required = false)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Filter options when no subcommand is given
    #[command(flatten)]
    filter: FilterArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter the candidate list against the known lists (default command)
    #[command(after_help = "\
Without --config, reads verbs_a1.txt, verbs_a2_only.txt and verbs_b1.txt
from --dir and writes verbs_b1_only.txt next to them.

Examples:
  vocab filter
  vocab filter --dir data/verbs
  vocab filter --config french.filter.toml
  vocab filter --json --dry-run
  RUST_LOG=debug vocab filter")]
    Filter(FilterArgs),

    /// Validate a filter config and its locale without reading any list
    #[command(after_help = "\
Examples:
  vocab validate --config levels.filter.toml")]
    Validate {
        /// Path to the .filter.toml config file
        #[arg(long, short = 'c')]
        config: PathBuf,
    },
}

#[derive(Args)]
pub struct FilterArgs {
    /// Path to a .filter.toml config file (default: built-in A1/A2/B1 verb lists)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Directory holding the built-in lists (ignored with --config)
    #[arg(long, short = 'd')]
    pub dir: Option<PathBuf>,

    /// Output file, overriding the config
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Print the full result as JSON instead of the text report
    #[arg(long)]
    pub json: bool,

    /// Compute and report, but do not write the output file
    #[arg(long)]
    pub dry_run: bool,
}

fn long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        " (", env!("VOCAB_COMMIT"), ")",
        "\nengine:  vocab-recon ", env!("CARGO_PKG_VERSION"),
        "\ntarget:  ", env!("VOCAB_TARGET"),
        "\nlocale:  ", "de_DE.UTF-8 (default)",
    )
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    let result = match cli.command {
        None => filter::cmd_filter(cli.filter),
        Some(Commands::Filter(args)) => filter::cmd_filter(args),
        Some(Commands::Validate { config }) => filter::cmd_validate(config),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl From<ReconError> for CliError {
    fn from(err: ReconError) -> Self {
        let hint = match &err {
            ReconError::Locale { .. } => {
                Some("use a locale id such as de-DE or de_DE.UTF-8".to_string())
            }
            _ => None,
        };
        Self { code: recon_exit_code(&err), message: err.to_string(), hint }
    }
}
