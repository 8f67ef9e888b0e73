mod collected_game;
mod collection;
mod game_digest;

pub use collected_game::CollectedGame;
pub use collection::Collection;
pub use game_digest::{Cover, GameDigest};
