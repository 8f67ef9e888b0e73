use serde::{Deserialize, Serialize};

use super::CollectedGame;

/// Document type that holds a user's game collection as three ordered views.
/// All views contain the same set of games and differ only in ordering.
#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct Collection {
    #[serde(rename = "lastAdded")]
    #[serde(default)]
    pub last_added: Vec<CollectedGame>,

    #[serde(default)]
    pub newest: Vec<CollectedGame>,

    #[serde(default)]
    pub oldest: Vec<CollectedGame>,
}
