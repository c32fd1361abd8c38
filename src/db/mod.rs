pub mod memory_storage;
pub mod repository;
pub mod seed;

pub use memory_storage::MemoryStorage;
pub use repository::{MatchRepository, MatchUpdate, PlayerRepository, RepositoryError, VenueRepository};
