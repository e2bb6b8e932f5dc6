use clap::Parser;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use matchx_engine::{ItemRecord, MatchEngine, MatchRequest, MemoryStore};

/// Rank found items against a lost item report
#[derive(Parser, Debug)]
#[command(name = "matchx")]
#[command(about = "A lost & found matching engine", long_about = None)]
struct Args {
    /// Path to a JSON dataset with "lost" and "found" item arrays
    #[arg(short, long)]
    data: PathBuf,

    /// Identifier of the lost item to match against
    #[arg(short, long)]
    lost_item: i64,

    /// Case-insensitive substring filter on the found item location
    #[arg(long)]
    location: Option<String>,

    /// Days before the lost date to include in the candidate window
    #[arg(long)]
    days_before: Option<i64>,

    /// Days after the lost date to include in the candidate window
    #[arg(long)]
    days_after: Option<i64>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Debug, Deserialize)]
struct Dataset {
    #[serde(default)]
    lost: Vec<ItemRecord>,
    #[serde(default)]
    found: Vec<ItemRecord>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting matchx v{}", env!("CARGO_PKG_VERSION"));

    let file = File::open(&args.data)?;
    let dataset: Dataset = serde_json::from_reader(BufReader::new(file))?;
    info!(
        lost = dataset.lost.len(),
        found = dataset.found.len(),
        "Dataset loaded from {:?}",
        args.data
    );

    let store = MemoryStore::new();
    for item in dataset.lost {
        store.insert_lost(item);
    }
    for item in dataset.found {
        store.insert_found(item);
    }

    let engine = MatchEngine::new(store);
    let request = MatchRequest {
        lost_item_id: args.lost_item,
        location_filter: args.location,
        days_before: args.days_before,
        days_after: args.days_after,
    };

    let matches = engine.find_matches(&request)?;
    if matches.is_empty() {
        info!(lost_item_id = args.lost_item, "No matches found");
    } else {
        info!(
            lost_item_id = args.lost_item,
            matches = matches.len(),
            "Top match score {:.3}",
            matches[0].match_score
        );
    }

    println!("{}", serde_json::to_string_pretty(&matches)?);
    Ok(())
}
