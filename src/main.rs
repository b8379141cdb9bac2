mod company;
mod roster;
mod url_norm;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::company::ClientRecord;
use crate::roster::Roster;

#[derive(Parser)]
#[command(name = "client_roster", about = "Derive company records from raw client data")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canonical form of a URL
    Normalize { url: String },
    /// Print the display name derived from a URL
    Name { url: String },
    /// Build a deduplicated company roster from a JSON array of client records
    Ingest {
        /// JSON file: [{"name": ..., "website_url": ...}, ...]
        file: PathBuf,
        /// URL to fall back on for records that carry none
        #[arg(short, long)]
        fallback_url: Option<String>,
        /// Emit the roster as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Normalize { url } => {
            println!("{}", url_norm::normalize(&url));
            Ok(())
        }
        Commands::Name { url } => {
            println!("{}", company::derive_name(&url));
            Ok(())
        }
        Commands::Ingest {
            file,
            fallback_url,
            json,
        } => {
            let raw = fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let records: Vec<ClientRecord> = serde_json::from_str(&raw).with_context(|| {
                format!("Failed to parse {} as a client record array", file.display())
            })?;

            let mut roster = Roster::new();
            let counts = roster.ingest(&records, fallback_url.as_deref());

            if json {
                println!("{}", serde_json::to_string_pretty(roster.companies())?);
            } else if roster.is_empty() {
                println!("No companies could be built from {} records.", records.len());
            } else {
                println!("{:>3} | {:<28} | {:<44}", "#", "Company", "Website");
                println!("{}", "-".repeat(81));
                for (i, c) in roster.companies().iter().enumerate() {
                    println!(
                        "{:>3} | {:<28} | {:<44}",
                        i + 1,
                        truncate(&c.name, 28),
                        truncate(&c.website_url, 44)
                    );
                }
            }

            println!(
                "\n{} companies | {} added, {} duplicates, {} without a URL.",
                roster.len(),
                counts.added,
                counts.duplicates,
                counts.no_url
            );
            Ok(())
        }
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}
