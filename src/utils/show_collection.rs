use std::sync::Arc;

use clap::Parser;
use gamevault_backend::{
    library::{CollectionFilter, CollectionStore, JsonStorage},
    *,
};

/// Gamevault util for inspecting a persisted game collection.
#[derive(Parser)]
struct Opts {
    /// JSON document that holds the persisted collection.
    #[clap(long, default_value = "collection.json")]
    storage: String,

    /// Collection view to print: lastAdded, newest or oldest.
    #[clap(default_value = "lastAdded")]
    filter: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    Tracing::setup("utils/show_collection")?;

    let opts: Opts = Opts::parse();
    let filter = match opts.filter.as_str() {
        "lastAdded" => CollectionFilter::LastAdded,
        "newest" => CollectionFilter::Newest,
        "oldest" => CollectionFilter::Oldest,
        filter => {
            return Err(Status::invalid_argument(format!("Unknown filter '{filter}'")).into())
        }
    };

    let store = CollectionStore::load(Arc::new(JsonStorage::new(&opts.storage)));
    let games = store.games_by_filter(filter);
    for game in games {
        let release = match game.digest.known_release_date() {
            Some(date) => match chrono::DateTime::from_timestamp(date, 0) {
                Some(date) => date.format("%Y-%m-%d").to_string(),
                None => String::from("unknown"),
            },
            None => String::from("unknown"),
        };
        println!("{game} (released: {release})");
    }
    println!("Found {} games in '{}'", games.len(), opts.filter);

    Ok(())
}
