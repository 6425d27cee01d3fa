//! ABIKit CLI — parse Ethereum ABI type strings and contract ABI documents.
//!
//! # Commands
//! ```text
//! abikit parse-type <TYPE> [--json]
//! abikit parse-abi  --file <path.json> [--json]
//! abikit validate   --dir <dir>
//! abikit info
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cmd_parse;
mod cmd_validate;
mod config;

use config::CliConfig;

#[derive(Parser)]
#[command(
    name = "abikit",
    about = "Ethereum contract ABI parser — ABIKit CLI",
    long_about = "
ABIKit CLI: parse Solidity ABI type strings and contract ABI JSON into a
typed model, with canonical signatures, selectors and event topics.

ENVIRONMENT VARIABLES:
  ABIKIT_LOG    Log level or EnvFilter directives (overrides --config)
",
    version
)]
struct Cli {
    /// YAML config file (`log: { level, components, json }`)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level, overrides ABIKIT_LOG and the config file
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Emit JSON structured logs
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a single ABI type string, e.g. "uint256[2][]"
    #[command(name = "parse-type")]
    ParseType {
        /// The type string
        ty: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse a contract ABI JSON file
    #[command(name = "parse-abi")]
    ParseAbi {
        /// Path to the ABI JSON file
        #[arg(short, long)]
        file: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse every *.json ABI file under a directory
    Validate {
        #[arg(long, default_value = "./abis")]
        dir: PathBuf,
    },

    /// Show ABIKit build and capability info
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = CliConfig::load(cli.config.as_deref())?;
    config.apply_overrides(
        std::env::var("ABIKIT_LOG").ok(),
        cli.log_level.as_deref(),
        cli.log_json,
    );
    abikit_observability::init_tracing(&config.log);

    match cli.command {
        Commands::ParseType { ty, json } => cmd_parse::run_type(&ty, json),
        Commands::ParseAbi { file, json } => cmd_parse::run_abi(&file, json),
        Commands::Validate { dir } => cmd_validate::run(&dir),
        Commands::Info => cmd_info(),
    }
}

fn cmd_info() -> Result<()> {
    println!("ABIKit v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Capabilities:");
    println!("  ✓ Atomic types             address, bool, string, function, (u)int<N>, bytes<N>, bytes");
    println!("  ✓ Array types              T[N], T[], one unbounded dimension per type");
    println!("  ✓ Tuple types              tuple, tuple[N], tuple[] via components");
    println!("  ✓ ABI elements             function, constructor, fallback, event");
    println!("  ✓ Mutability              stateMutability + legacy payable/constant");
    println!("  ✓ Selectors & topics       keccak-256");
    println!("  ✓ Parallel validation      (Rayon)");
    Ok(())
}
