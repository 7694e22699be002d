//! # prodesc: A CLI for `prodesc`
//!
//! Generates product descriptions from the command line, either one at a
//! time or from a JSON batch file, and exposes the text-analysis utilities
//! that the generation pipeline does not use by default.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

// --- CLI Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a description for a single product
    Generate(GenerateArgs),
    /// Generate descriptions for every product in a JSON file
    Bulk(BulkArgs),
    /// Show the features, keywords and specifications found in some text
    Analyze(AnalyzeArgs),
    /// Check whether the generation backend is reachable
    Health(BackendArgs),
}

/// Where to reach the Ollama backend.
#[derive(Args, Debug, Clone)]
pub struct BackendArgs {
    /// Base URL of the Ollama service
    #[arg(long, env = "OLLAMA_API_URL", default_value = prodesc::providers::ai::ollama::DEFAULT_OLLAMA_URL)]
    pub api_url: String,
    /// The model to generate with
    #[arg(long, env = "OLLAMA_MODEL", default_value = prodesc::providers::ai::ollama::DEFAULT_OLLAMA_MODEL)]
    pub model: String,
    /// Request timeout in seconds
    #[arg(long, default_value_t = 60)]
    pub timeout_secs: u64,
}

/// Raw product text, given inline or read from a file.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct TextSource {
    /// The raw product text
    #[arg(long)]
    pub text: Option<String>,
    /// A file containing the raw product text
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// The product name
    #[arg(long)]
    pub name: String,
    #[command(flatten)]
    pub source: TextSource,
    /// The product category
    #[arg(long)]
    pub category: Option<String>,
    /// Target description length in words
    #[arg(long, default_value_t = prodesc::DEFAULT_TARGET_LENGTH)]
    pub target_length: u32,
    #[command(flatten)]
    pub backend: BackendArgs,
}

#[derive(Args, Debug)]
pub struct BulkArgs {
    /// A JSON file shaped like `{"products": [...]}`
    #[arg(long)]
    pub file: PathBuf,
    #[command(flatten)]
    pub backend: BackendArgs,
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub source: TextSource,
    /// Maximum number of features to list
    #[arg(long, default_value_t = prodesc::parsing::DEFAULT_MAX_FEATURES)]
    pub max_features: usize,
    /// Maximum number of keywords to list
    #[arg(long, default_value_t = prodesc::parsing::DEFAULT_MAX_KEYWORDS)]
    pub max_keywords: usize,
}

// --- Main Application Entry ---

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays machine-readable.
    let subscriber = fmt::Subscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Generate(args) => commands::handle_generate(args).await,
        Commands::Bulk(args) => commands::handle_bulk(args).await,
        Commands::Analyze(args) => commands::handle_analyze(args),
        Commands::Health(args) => commands::handle_health(args).await,
    };

    if let Err(e) = result {
        eprintln!("Command failed: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}
