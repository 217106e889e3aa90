//! CLI administration tool for shrinkit.
//!
//! Provides database checks and redirection lookups without going through
//! the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Apply migrations
//! cargo run --bin admin -- db migrate
//!
//! # Count stored redirections
//! cargo run --bin admin -- stats
//!
//! # Show the record behind a short code
//! cargo run --bin admin -- lookup aBcDe
//! ```
//!
//! # Environment Variables
//!
//! Same database settings as the server (`DATABASE_URL` or `DB_*`), see
//! [`shrinkit::config`].

use shrinkit::AppError;
use shrinkit::config;
use shrinkit::domain::repositories::RedirectionRepository;
use shrinkit::infrastructure::persistence::PgRedirectionRepository;
use shrinkit::server::{self, MIGRATOR};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing shrinkit.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Show statistics
    Stats,

    /// Show the redirection stored for a short code
    Lookup {
        /// Short code, as it appears after the base URL
        code: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = server::connect(&config).await?;

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &pool).await?,
        Commands::Stats => handle_stats(repository(&pool)).await?,
        Commands::Lookup { code } => handle_lookup(repository(&pool), &code).await?,
    }

    Ok(())
}

fn repository(pool: &PgPool) -> Arc<PgRedirectionRepository> {
    Arc::new(PgRedirectionRepository::new(Arc::new(pool.clone())))
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").execute(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Migrate => {
            println!("{}", "Applying migrations...".bright_blue());

            MIGRATOR
                .run(pool)
                .await
                .context("Failed to apply migrations")?;

            println!("{}", "Migrations applied".green().bold());
        }
    }

    Ok(())
}

/// Displays the number of stored redirections.
async fn handle_stats(repo: Arc<PgRedirectionRepository>) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let count = repo.count().await.map_err(storage_error)?;

    println!(
        "  Redirections: {}",
        count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Prints the record stored for `code`.
///
/// # Output Format
///
/// ```text
///   Short code:  aBcDe
///   Short link:  http://localhost:8080/aBcDe
///   Original:    https://example.com
///   Created:     2025-01-15 10:30
///   ID:          42
/// ```
async fn handle_lookup(repo: Arc<PgRedirectionRepository>, code: &str) -> Result<()> {
    let Some(redirection) = repo.find_by_short_code(code).await.map_err(storage_error)? else {
        println!("{} {}", "No redirection for".yellow(), code.bright_white());
        return Ok(());
    };

    println!("  Short code:  {}", redirection.short_url.cyan());
    println!("  Short link:  {}", redirection.new_url.bright_white());
    println!("  Original:    {}", redirection.original_url.bright_white());
    println!(
        "  Created:     {}",
        redirection
            .created_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black()
    );
    println!(
        "  ID:          {}",
        redirection.id.to_string().bright_black()
    );

    Ok(())
}

fn storage_error(e: AppError) -> anyhow::Error {
    anyhow::anyhow!("Database error: {}", e)
}
