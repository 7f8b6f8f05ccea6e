mod attachments;
mod catalog;
mod config;
mod error;
mod providers;
mod response;

use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "askai")]
#[command(version)]
#[command(about = "Ask a hosted LLM from the command line", long_about = None)]
struct Cli {
    /// JSON secret file holding the API key
    #[arg(long = "secret", default_value = ".env")]
    secret_filepath: PathBuf,

    /// Conversation context identifier (reserved for multi-turn support)
    #[arg(long)]
    context: Option<String>,

    /// Log file; logging is discarded when unset
    #[arg(long = "log")]
    log_filepath: Option<PathBuf>,

    /// Model to query
    #[arg(long, value_enum, default_value = "gpt-4.1")]
    model: catalog::ModelId,

    /// System instructions sent alongside the query
    #[arg(long, default_value = config::DEFAULT_INSTRUCTIONS)]
    instructions: String,

    /// File or directory to attach as context; may be repeated
    #[arg(long = "input")]
    input_paths: Vec<PathBuf>,

    /// Words forming the query
    #[arg(required = true, num_args = 1..)]
    query: Vec<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    init_logging(cli.log_filepath.as_deref())?;

    let secret = config::Secret::from_filepath(&cli.secret_filepath)?;
    let query = normalize_query(&cli.query);
    let info = cli.model.resolve();

    // The binding lives for this call only; it is dropped on every exit path.
    let llm = providers::create_llm(&secret, info);
    let response = llm
        .respond(
            cli.context.as_deref(),
            Some(&cli.instructions),
            &cli.input_paths,
            &query,
        )
        .await?;

    let mut stdout = io::stdout();
    response.write(&mut stdout).await?;

    Ok(())
}

/// Joins the CLI's word-list argument into one query string.
fn normalize_query(words: &[String]) -> String {
    words.join(" ")
}

fn init_logging(log_filepath: Option<&Path>) -> anyhow::Result<()> {
    let Some(path) = log_filepath else {
        // No subscriber installed; events are discarded.
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("could not open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
