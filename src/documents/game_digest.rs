use serde::{Deserialize, Serialize};

/// Digest of a catalog game entry, as handed over by the frontend views. The
/// catalog resolves covers, companies and genres upstream; the digest only
/// carries the display-ready values.
#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct GameDigest {
    pub id: u64,
    pub name: String,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<Cover>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<i64>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub developers: Vec<String>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub genres: Vec<String>,
}

impl GameDigest {
    /// Release date usable for ordering. The catalog emits zero for unknown
    /// dates, which is treated the same as a missing one.
    pub fn known_release_date(&self) -> Option<i64> {
        match self.release_date {
            Some(date) if date != 0 => Some(date),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct Cover {
    pub url: String,
}
