use std::path::PathBuf;

use tracing::{instrument, warn};

use crate::{documents::Collection, Status};

/// Durable local storage for the user's collection, kept as a single JSON
/// document on disk.
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonStorage { path: path.into() }
    }

    /// Loads the persisted collection. Missing or corrupt state yields an
    /// empty collection, never a fatal error.
    #[instrument(name = "storage::load", level = "trace", skip(self))]
    pub fn load(&self) -> Collection {
        match self.read() {
            Ok(collection) => collection,
            Err(Status::NotFound(_)) => Collection::default(),
            Err(status) => {
                warn!("Failed to load collection, starting empty: {status}");
                Collection::default()
            }
        }
    }

    #[instrument(name = "storage::read", level = "trace", skip(self))]
    pub fn read(&self) -> Result<Collection, Status> {
        if !self.path.exists() {
            return Err(Status::not_found(format!(
                "Collection document '{}' was not found",
                self.path.display()
            )));
        }

        let doc = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&doc)?)
    }

    #[instrument(name = "storage::write", level = "trace", skip(self, collection))]
    pub fn write(&self, collection: &Collection) -> Result<(), Status> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string(collection)?)?;
        Ok(())
    }
}
