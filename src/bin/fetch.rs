//! Command-line front end for douyin-fetch.
//!
//! Runs the same resolution and download pipelines as the HTTP service,
//! without starting a server.
//!
//! # Usage
//!
//! ```bash
//! # Print the watermark-free download URL
//! cargo run --bin fetch -- link "https://v.douyin.com/abc123/"
//!
//! # Download into ./videos with a custom name
//! cargo run --bin fetch -- download "https://v.douyin.com/abc123/" --filename cat --dir videos
//!
//! # Machine-readable output
//! cargo run --bin fetch -- --json link "https://www.douyin.com/video/7123456789"
//! ```
//!
//! # Environment Variables
//!
//! Uses the same variables as the service (see `config`), e.g.
//! `METADATA_ENDPOINT`, `USER_AGENT`, and `DOWNLOAD_DIR`.
//!
//! Exits with status 1 when the pipeline reports a failure.

use douyin_fetch::config::{self, Config};
use douyin_fetch::domain::entities::{DownloadOutcome, ResolutionResult};
use douyin_fetch::domain::gateways::VideoGateway;
use douyin_fetch::infrastructure::http::DouyinGateway;
use douyin_fetch::state::AppState;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

/// Resolve and download Douyin videos from the terminal.
#[derive(Parser)]
#[command(name = "fetch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print raw JSON instead of formatted output
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a share link into a download URL
    Link {
        /// Share link or share text containing one
        share_link: String,
    },

    /// Resolve a share link and save the video
    Download {
        /// Share link or share text containing one
        share_link: String,

        /// Target filename (".mp4" is appended when missing)
        #[arg(short, long)]
        filename: Option<String>,

        /// Target directory (defaults to DOWNLOAD_DIR)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let success = match cli.command {
        Commands::Link { share_link } => {
            let state = build_state(&config, config.download_dir.clone())?;
            let result = state.resolve_service.get_download_link(&share_link).await;
            if cli.json {
                print_json(&result)?;
            } else {
                print_resolution(&result);
            }
            result.is_success()
        }
        Commands::Download {
            share_link,
            filename,
            dir,
        } => {
            let dir = dir.unwrap_or_else(|| config.download_dir.clone());
            let state = build_state(&config, dir)?;
            let outcome = state
                .download_service
                .download_video(&share_link, filename.as_deref())
                .await;
            if cli.json {
                print_json(&outcome)?;
            } else {
                print_download(&outcome);
            }
            outcome.is_success()
        }
    };

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn build_state(config: &Config, download_dir: PathBuf) -> Result<AppState> {
    let gateway: Arc<dyn VideoGateway> = Arc::new(
        DouyinGateway::new(&config.http_client_config())
            .context("Failed to build HTTP client")?,
    );

    Ok(AppState::new(
        gateway,
        config.short_link_hosts.clone(),
        download_dir,
    ))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_resolution(result: &ResolutionResult) {
    match result {
        ResolutionResult::Success(video) => {
            println!("{}", "✅ Download link resolved".green().bold());
            println!();
            println!("  Video ID: {}", video.video_id.cyan());
            println!("  Title:    {}", video.title.bright_white());
            println!("  URL:      {}", video.download_url.bright_yellow());
            println!();
            println!("{}", video.note.dimmed());
            println!("{}", video.usage_tip.dimmed());
        }
        ResolutionResult::Failure(failure) => {
            println!("{}", "❌ Resolution failed".red().bold());
            println!("  Kind:    {}", format!("{:?}", failure.kind).yellow());
            println!("  Message: {}", failure.message);
        }
    }
}

fn print_download(outcome: &DownloadOutcome) {
    match outcome {
        DownloadOutcome::Success(saved) => {
            println!("{}", "✅ Video downloaded".green().bold());
            println!();
            println!("  Title: {}", saved.title.bright_white());
            println!("  File:  {}", saved.file_path.cyan());
            println!("  Size:  {}", saved.file_size_display.bright_yellow());
        }
        DownloadOutcome::Failure(failure) => {
            println!("{}", "❌ Download failed".red().bold());
            println!("  Kind:    {}", format!("{:?}", failure.kind).yellow());
            println!("  Message: {}", failure.message);
            println!("{}", failure.details.dimmed());
        }
    }
}
