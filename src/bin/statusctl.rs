//! Command-line companion for status-board.
//!
//! Runs single polls without starting the HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # Render the board region once to stdout
//! cargo run --bin statusctl -- render
//!
//! # Render into a file
//! cargo run --bin statusctl -- render --output board.html
//!
//! # Print a colored summary of all sites
//! cargo run --bin statusctl -- check --url file:///var/lib/checker/status.json
//!
//! # Validate configuration
//! cargo run --bin statusctl -- config
//! ```
//!
//! # Environment Variables
//!
//! Same as the server (see `status_board::config`); `--url` overrides `STATUS_URL`.

use status_board::application::services::{CardView, StatusPoller};
use status_board::config::{self, Config, mask_url_credentials};
use status_board::domain::board::StatusBoard;
use status_board::infrastructure::source;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use std::sync::Arc;

/// CLI tool for status-board.
#[derive(Parser)]
#[command(name = "statusctl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Poll once and print the rendered board region
    Render {
        /// Status document URL (overrides STATUS_URL)
        #[arg(short, long)]
        url: Option<String>,

        /// Write the region to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Fetch once and print a summary table
    Check {
        /// Status document URL (overrides STATUS_URL)
        #[arg(short, long)]
        url: Option<String>,
    },

    /// Load and validate configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render { url, output } => render(load_config(url)?, output).await?,
        Commands::Check { url } => check(load_config(url)?).await?,
        Commands::Config => show_config()?,
    }

    Ok(())
}

fn load_config(url: Option<String>) -> Result<Config> {
    let mut config = Config::from_env()?;
    if let Some(url) = url {
        config.status_url = url;
    }
    config.validate()?;
    Ok(config)
}

/// Runs one poll and writes the region markup.
async fn render(config: Config, output: Option<PathBuf>) -> Result<()> {
    let source = source::from_url(&config.status_url, config.fetch_timeout())?;
    let board = Arc::new(StatusBoard::new());
    let poller = StatusPoller::new(source, board.clone());

    poller
        .poll()
        .await
        .with_context(|| format!("Poll of {} failed", mask_url_credentials(&config.status_url)))?;

    let html = board.html().await;
    match output {
        Some(path) => {
            tokio::fs::write(&path, &html)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            let snapshot = board.snapshot().await;
            eprintln!(
                "{} {} sites written to {}",
                "OK".green(),
                snapshot.rendered.sites.to_string().bright_white().bold(),
                path.display().to_string().cyan()
            );
        }
        None => println!("{}", html),
    }

    Ok(())
}

/// Prints a summary table of all sites.
///
/// # Output Format
///
/// ```text
/// Website Status
///
///   Site                      State    HTTP  Latency   Uptime   SSL Expiry   Last Checked
///   ───────────────────────────────────────────────────────────────────────────────────────────────
///   example.com               ONLINE   200   42ms      99.9%    30 days      2024-01-01T00:00:00Z
/// ```
async fn check(config: Config) -> Result<()> {
    let source = source::from_url(&config.status_url, config.fetch_timeout())?;
    let document = source
        .fetch()
        .await
        .with_context(|| format!("Fetch of {} failed", mask_url_credentials(&config.status_url)))?;

    println!("{}", "Website Status".bright_blue().bold());
    println!();

    if document.is_empty() {
        println!("{}", "  No sites in status document".yellow());
        return Ok(());
    }

    println!(
        "  {:<25} {:<8} {:<5} {:<9} {:<8} {:<12} {}",
        "Site".bright_white().bold(),
        "State".bright_white().bold(),
        "HTTP".bright_white().bold(),
        "Latency".bright_white().bold(),
        "Uptime".bright_white().bold(),
        "SSL Expiry".bright_white().bold(),
        "Last Checked".bright_white().bold()
    );
    println!("  {}", "─".repeat(95).bright_black());

    for entry in document.entries() {
        let card = CardView::from_entry(entry);
        let state = if entry.status.online {
            "ONLINE".green()
        } else {
            "OFFLINE".red()
        };

        println!(
            "  {:<25} {:<8} {:<5} {:<9} {:<8} {:<12} {}",
            card.name.cyan(),
            state,
            if card.status_code.is_empty() { "-" } else { card.status_code.as_str() },
            card.latency,
            card.uptime,
            card.ssl_expiry,
            card.last_check.bright_black()
        );
        if !card.error.is_empty() {
            println!("    {}", card.error.red());
        }
    }

    println!();
    println!(
        "  Online: {} / {}",
        document.online_count().to_string().bright_white().bold(),
        document.len()
    );
    println!();

    Ok(())
}

fn show_config() -> Result<()> {
    let config = config::load_from_env()?;

    println!("{}", "Configuration".bright_blue().bold());
    println!();
    println!("  Status URL:     {}", mask_url_credentials(&config.status_url).cyan());
    println!("  Poll interval:  {}s", config.poll_interval_secs);
    println!("  Fetch timeout:  {}s", config.fetch_timeout_secs);
    println!("  Fetch retries:  {}", config.fetch_retries);
    println!("  Listen:         {}", config.listen_addr);
    println!("  Log:            {} ({})", config.log_level, config.log_format);
    println!();
    println!("{}", "Configuration is valid".green().bold());

    Ok(())
}
