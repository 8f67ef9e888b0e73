mod storage;
mod store;

pub use storage::JsonStorage;
pub use store::{CollectionFilter, CollectionStore};
