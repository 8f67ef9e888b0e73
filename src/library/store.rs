use std::{cmp::Ordering, sync::Arc};

use tracing::{error, instrument};

use super::JsonStorage;
use crate::documents::{CollectedGame, Collection, GameDigest};

/// The orderings a collection can be rendered in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollectionFilter {
    LastAdded,
    Newest,
    Oldest,
}

/// Owns the user's collection for the session and provides its sole
/// mutation/query surface. Every mutation updates all three views and
/// schedules a durable write; in-memory state stays authoritative even if
/// that write fails.
pub struct CollectionStore {
    collection: Collection,
    storage: Arc<JsonStorage>,
}

impl CollectionStore {
    /// Creates a store from the persisted collection, or empty if nothing
    /// usable was persisted.
    pub fn load(storage: Arc<JsonStorage>) -> Self {
        CollectionStore {
            collection: storage.load(),
            storage,
        }
    }

    #[instrument(
        level = "trace",
        skip(self, digest),
        fields(
            game = %digest.name,
        )
    )]
    pub fn add_game(&mut self, digest: GameDigest) {
        add(CollectedGame::new(digest), &mut self.collection);
        self.persist();
    }

    #[instrument(level = "trace", skip(self))]
    pub fn remove_game(&mut self, game_id: u64) {
        if remove(game_id, &mut self.collection) {
            self.persist();
        }
    }

    pub fn is_game_collected(&self, game_id: u64) -> bool {
        self.collection
            .last_added
            .iter()
            .any(|game| game.id == game_id)
    }

    pub fn games_by_filter(&self, filter: CollectionFilter) -> &[CollectedGame] {
        match filter {
            CollectionFilter::LastAdded => &self.collection.last_added,
            CollectionFilter::Newest => &self.collection.newest,
            CollectionFilter::Oldest => &self.collection.oldest,
        }
    }

    /// Writes the collection to storage without blocking the caller.
    fn persist(&self) {
        let storage = Arc::clone(&self.storage);
        let collection = self.collection.clone();
        tokio::spawn(async move {
            if let Err(status) = storage.write(&collection) {
                error!("Failed to persist collection: {status}");
            }
        });
    }
}

/// Adds a game to all three views of the collection.
///
/// If an entry with the same id is already collected it is replaced: the new
/// entry carries a fresh collected timestamp and moves to the head of the
/// last-added view.
fn add(game: CollectedGame, collection: &mut Collection) {
    remove(game.id, collection);

    collection.last_added.insert(0, game.clone());
    collection.newest.push(game.clone());
    collection.oldest.push(game);
    sort_release_views(collection);
}

/// Removes a game from all three views. Returns true if it was collected.
fn remove(game_id: u64, collection: &mut Collection) -> bool {
    let found = collection
        .last_added
        .iter()
        .any(|game| game.id == game_id);

    collection.last_added.retain(|game| game.id != game_id);
    collection.newest.retain(|game| game.id != game_id);
    collection.oldest.retain(|game| game.id != game_id);

    found
}

/// Sorts the release-date ordered views. Games with an unknown release date
/// go after all dated games in both directions, keeping their relative order
/// (both sorts are stable).
fn sort_release_views(collection: &mut Collection) {
    collection
        .newest
        .sort_by(|a, b| compare_dated(a, b, |left, right| right.cmp(&left)));
    collection
        .oldest
        .sort_by(|a, b| compare_dated(a, b, |left, right| left.cmp(&right)));
}

fn compare_dated(
    a: &CollectedGame,
    b: &CollectedGame,
    dated: impl Fn(i64, i64) -> Ordering,
) -> Ordering {
    match (
        a.digest.known_release_date(),
        b.digest.known_release_date(),
    ) {
        (Some(left), Some(right)) => dated(left, right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
