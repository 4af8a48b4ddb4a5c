//! Fluxgen CLI - Prompt submission and generation history
//!
//! The client side of the Generation Gateway: submit a prompt, print
//! the resulting image URL, and keep a locally persisted bounded
//! history of past generations.

mod api;
mod config;
mod history;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::time::Instant;
use uuid::Uuid;

use fluxgen::HistoryStore;

use api::GatewayClient;
use config::Config;
use history::FileHistoryStorage;

/// Soft cap carried over from the original client; longer prompts are
/// allowed but warned about.
const PROMPT_SOFT_CAP: usize = 500;

#[derive(Parser)]
#[command(name = "fluxgen")]
#[command(about = "Fluxgen CLI - generate images and browse past generations", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an image from a text prompt
    Generate {
        /// The text prompt
        prompt: String,
        /// Override the default system prompt
        #[arg(short, long)]
        system_prompt: Option<String>,
        /// Do not record the result in local history
        #[arg(long)]
        no_save: bool,
    },

    /// Browse and manage the local generation history
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },

    /// Show or update configuration
    Config {
        /// Set the gateway base URL
        #[arg(long)]
        set_url: Option<String>,
    },

    /// Check gateway health
    Health,
}

#[derive(Subcommand)]
enum HistoryAction {
    /// List past generations, newest first
    List,
    /// Remove one entry by id
    Remove {
        /// Entry id (shown by `history list`)
        id: Uuid,
    },
    /// Remove all entries
    Clear,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Persistence warnings from the history store come out of tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .without_time()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            prompt,
            system_prompt,
            no_save,
        } => generate(&prompt, system_prompt.as_deref(), no_save).await,
        Commands::History { action } => run_history(action),
        Commands::Config { set_url } => run_config(set_url),
        Commands::Health => run_health().await,
    }
}

async fn generate(prompt: &str, system_prompt: Option<&str>, no_save: bool) -> Result<()> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        bail!("Please enter a prompt to generate an image");
    }
    if prompt.chars().count() > PROMPT_SOFT_CAP {
        println!(
            "{} prompt exceeds {PROMPT_SOFT_CAP} characters, sending anyway",
            "warning:".yellow().bold()
        );
    }

    let config = Config::load()?;
    let client = GatewayClient::new(&config.base_url);

    println!("{}", "Starting image generation...".cyan());
    let started = Instant::now();

    let result = client.generate(prompt, system_prompt).await?;
    let elapsed = started.elapsed().as_secs_f32();

    println!(
        "{} in {:.1}s",
        "Image generated successfully".green().bold(),
        elapsed
    );
    println!("{}", result.image_url);

    if !no_save {
        let mut store = HistoryStore::load(FileHistoryStorage::new()?);
        let entry = store.add(&result);
        println!("{} {}", "Saved to history:".dimmed(), entry.id);
    }

    Ok(())
}

fn run_history(action: HistoryAction) -> Result<()> {
    let mut store = HistoryStore::load(FileHistoryStorage::new()?);

    match action {
        HistoryAction::List => {
            if store.is_empty() {
                println!("No generations yet.");
                return Ok(());
            }

            for entry in store.entries() {
                println!(
                    "{}  {}  {}",
                    entry.id.to_string().dimmed(),
                    entry.timestamp.format("%Y-%m-%d %H:%M UTC"),
                    entry.prompt
                );
                println!("    {}", entry.image_url.blue());
            }
        }
        HistoryAction::Remove { id } => {
            if store.remove(id) {
                println!("{}", "Entry removed.".green());
            } else {
                println!("{} no entry with id {}", "warning:".yellow().bold(), id);
            }
        }
        HistoryAction::Clear => {
            store.clear();
            println!("{}", "History cleared.".green());
        }
    }

    Ok(())
}

fn run_config(set_url: Option<String>) -> Result<()> {
    let mut config = Config::load()?;

    if let Some(url) = set_url {
        config.set_base_url(&url);
        config.save()?;
        println!("{} {}", "Gateway URL set to".green(), config.base_url);
        return Ok(());
    }

    println!("config file: {:?}", Config::config_path()?);
    println!("base_url:    {}", config.base_url);

    Ok(())
}

async fn run_health() -> Result<()> {
    let config = Config::load()?;
    let client = GatewayClient::new(&config.base_url);

    if client.health().await.unwrap_or(false) {
        println!("{} {}", config.base_url, "ok".green().bold());
    } else {
        bail!("Gateway at {} is not responding", config.base_url);
    }

    Ok(())
}
