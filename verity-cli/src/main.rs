//! Verity command-line interface.
//!
//! Thin transport over the engine: one-shot verification, an
//! interactive loop, and a database bootstrap command. Credentials come
//! from the environment (or a `.env` file), everything else from an
//! optional TOML config.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

use verity_cache::ClaimCache;
use verity_core::config::{defaults, VerityConfig};
use verity_core::models::VerificationResult;
use verity_engine::VerityEngine;

#[derive(Parser, Debug)]
#[command(name = "verity")]
#[command(about = "Fact-check claims against the web", version)]
struct Cli {
    /// Path to a TOML config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Verify a single claim and print the verdict.
    Verify {
        /// The claim to check.
        claim: String,
        /// Maximum search results to request.
        #[arg(long, default_value_t = defaults::DEFAULT_MAX_RESULTS)]
        max_results: usize,
        /// Print the full result as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Interactive loop: one claim per line, `exit` to quit.
    Repl,
    /// Create the verdict database and schema, then exit.
    InitDb,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("VERITY_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<VerityConfig> {
    let mut config = match path {
        Some(path) => VerityConfig::load(path)?,
        None => VerityConfig::default(),
    };
    config.apply_env();
    Ok(config)
}

fn print_result(result: &VerificationResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    println!("Verdict:     {}", result.verdict);
    println!("Confidence:  {}%", result.confidence);
    println!("Explanation: {}", result.explanation);
    println!("Time:        {:.3}s", result.processing_time);
    if !result.sources.is_empty() {
        println!("Sources:");
        for source in &result.sources {
            println!("  {}. {} ({})", source.id, source.title, source.organization);
            println!("     {}", source.url);
        }
    }
    Ok(())
}

async fn run_repl(engine: &VerityEngine) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    println!(
        "Verity {} interactive mode. Type a claim, or `exit` to quit.",
        verity_core::constants::VERSION
    );

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let claim = line.trim();
        if claim.is_empty() {
            continue;
        }
        if claim.eq_ignore_ascii_case("exit") {
            break;
        }

        match engine.verify(claim, defaults::DEFAULT_MAX_RESULTS).await {
            Ok(result) => print_result(&result, false)?,
            Err(e) => eprintln!("error: {e}"),
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Command::Verify {
            claim,
            max_results,
            json,
        } => {
            let engine = VerityEngine::from_config(config)?;
            let result = engine.verify(&claim, max_results).await?;
            print_result(&result, json)?;
        }
        Command::Repl => {
            let engine = VerityEngine::from_config(config)?;
            run_repl(&engine).await?;
        }
        Command::InitDb => {
            ClaimCache::open(&config.cache)?;
            println!("Verdict database ready at {}", config.cache.path);
        }
    }
    Ok(())
}
