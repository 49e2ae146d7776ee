//! Club Manager CLI
//!
//! Operator tooling around the local club Document: roster import,
//! cloud sync, push, one-shot relational migration, and introspection.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use club_core::migrate::RestRelationalStore;
use club_core::{
    import_roster, migrate_document, CloudSync, ClubStore, FileStorage, HttpPlayerCloud,
    RawPlayerRow, SyncOutcome,
};

#[derive(Parser)]
#[command(name = "club_cli")]
#[command(about = "Manage the local club data store", long_about = None)]
struct Cli {
    /// Data directory holding the club Document
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import a roster file into the local store
    Import {
        /// Input JSON file: a list of {name, jersey} rows
        #[arg(long)]
        file: PathBuf,
    },

    /// Pull the remote player collection and upsert it locally
    Sync {
        /// Remote players endpoint
        #[arg(long)]
        url: String,
    },

    /// Push the full local player list to the remote collection
    Push {
        /// Remote players endpoint
        #[arg(long)]
        url: String,

        /// Write credential (bearer token)
        #[arg(long)]
        token: String,
    },

    /// One-shot migration of the whole Document to the relational remote
    Migrate {
        /// Relational remote base URL
        #[arg(long)]
        url: String,

        /// Service API key
        #[arg(long)]
        api_key: String,
    },

    /// Print a summary of the local Document
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let store = ClubStore::new(FileStorage::new(&cli.data_dir));

    match cli.command {
        Commands::Import { file } => run_import(&store, &file),
        Commands::Sync { url } => run_sync(&store, &url),
        Commands::Push { url, token } => run_push(&store, &url, &token),
        Commands::Migrate { url, api_key } => run_migrate(&store, &url, &api_key),
        Commands::Show => run_show(&store),
    }
}

fn run_import(store: &ClubStore<FileStorage>, file: &PathBuf) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read roster file: {}", file.display()))?;
    let rows: Vec<RawPlayerRow> =
        serde_json::from_str(&text).context("Roster file is not a JSON list of rows")?;

    println!("Importing {} rows...", rows.len());
    let report = import_roster(store, &rows)?;

    println!("Import complete: {} added, {} updated", report.added, report.updated);
    if !report.skipped.is_empty() {
        println!("Skipped {} rows:", report.skipped.len());
        for skipped in report.skipped.iter().take(3) {
            println!("   - {}", skipped.reason);
        }
        if report.skipped.len() > 3 {
            println!("   ... and {} more", report.skipped.len() - 3);
        }
    }
    Ok(())
}

fn run_sync(store: &ClubStore<FileStorage>, url: &str) -> Result<()> {
    let cloud = HttpPlayerCloud::new(url);
    let sync = CloudSync::new(store, &cloud);

    match sync.sync_from_cloud_upsert() {
        Ok(SyncOutcome::NoData) => println!("No player data on the remote yet"),
        Ok(SyncOutcome::Imported { added, updated }) => {
            println!("Sync complete: {} added, {} updated", added, updated)
        }
        Ok(SyncOutcome::NoChange) => println!("Already up to date"),
        Err(err) => println!("Sync failed: {}", err),
    }
    Ok(())
}

fn run_push(store: &ClubStore<FileStorage>, url: &str, token: &str) -> Result<()> {
    let cloud = HttpPlayerCloud::new(url);
    let sync = CloudSync::new(store, &cloud);

    match sync.save_players_to_cloud(token) {
        Ok(receipt) => {
            println!("Pushed players to cloud (version {})", receipt.version);
            if let Some(stamp) = receipt.last_updated {
                println!("   Last updated: {}", stamp);
            }
        }
        Err(err) => println!("Push failed: {}", err),
    }
    Ok(())
}

fn run_migrate(store: &ClubStore<FileStorage>, url: &str, api_key: &str) -> Result<()> {
    let doc = store.load();
    println!(
        "Migrating {} players and {} matches to {}...",
        doc.players.len(),
        doc.matches.len(),
        url
    );

    let mut remote = RestRelationalStore::new(url, api_key);
    let report = migrate_document(&doc, &mut remote);

    println!("{}", report.message);
    println!("   Players: {} ok, {} failed", report.players.success, report.players.failed);
    println!("   Matches: {} ok, {} failed", report.matches.success, report.matches.failed);
    for error in &report.errors {
        println!("   ! {}", error);
    }
    Ok(())
}

fn run_show(store: &ClubStore<FileStorage>) -> Result<()> {
    let doc = store.load();

    println!("Players:  {}", doc.players.len());
    println!("Matches:  {}", doc.matches.len());
    println!("Lineups:  {}", doc.lineups.len());
    println!("Subs:     {}", doc.subs.len());
    println!("Photos:   {}", doc.photos.len());
    println!("Comments: {}", doc.comments.len());

    if !doc.players.is_empty() {
        println!("\nRoster:");
        for player in &doc.players {
            let number = player
                .number
                .map(|n| n.to_string())
                .unwrap_or_else(|| "-".to_string());
            let position = player.position.as_deref().unwrap_or("-");
            let status = if player.is_active { "" } else { " (inactive)" };
            println!("   #{:<3} {:<20} {}{}", number, player.name, position, status);
        }
    }

    if let Some(settings) = &doc.uniform_settings {
        println!("\nTeam: {} ({})", settings.team_name, settings.primary_color);
    }
    Ok(())
}
