use serde::{Deserialize, Serialize};
use std::{
    fmt,
    time::{SystemTime, UNIX_EPOCH},
};

use super::GameDigest;

/// A game saved in the user's collection.
#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct CollectedGame {
    pub id: u64,
    pub digest: GameDigest,

    /// Unix millis of the moment the game was added to the collection. Set
    /// once at insertion and never mutated afterwards.
    #[serde(default)]
    pub collected_at: u64,
}

impl CollectedGame {
    pub fn new(digest: GameDigest) -> Self {
        CollectedGame {
            id: digest.id,
            digest,

            collected_at: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_millis() as u64,
        }
    }
}

impl fmt::Display for CollectedGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CollectedGame({}): '{}'", &self.id, &self.digest.name)
    }
}
