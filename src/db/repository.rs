use async_trait::async_trait;
use uuid::Uuid;

use crate::matches::roster::RosterError;
use crate::models::matches::Match;
use crate::models::player::Player;
use crate::models::venue::Venue;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RepositoryError {
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: Uuid },

    #[error("{kind} {id} already exists")]
    Conflict { kind: &'static str, id: Uuid },

    #[error("update rejected: {0}")]
    Rejected(#[from] RosterError),
}

/// Computes the next version of a match from the stored one.
///
/// The repository runs it while holding the match exclusively, so the check
/// and the write happen as one step.
pub type MatchUpdate = Box<dyn FnOnce(&Match) -> Result<Match, RosterError> + Send>;

#[async_trait]
pub trait MatchRepository: Send + Sync {
    async fn insert_match(&self, game: Match) -> Result<(), RepositoryError>;
    async fn get_match(&self, match_id: Uuid) -> Result<Option<Match>, RepositoryError>;
    async fn list_matches(&self) -> Result<Vec<Match>, RepositoryError>;
    async fn update_match(&self, match_id: Uuid, update: MatchUpdate) -> Result<Match, RepositoryError>;
}

#[async_trait]
pub trait VenueRepository: Send + Sync {
    async fn insert_venue(&self, venue: Venue) -> Result<(), RepositoryError>;
    async fn get_venue(&self, venue_id: Uuid) -> Result<Option<Venue>, RepositoryError>;
    async fn list_venues(&self) -> Result<Vec<Venue>, RepositoryError>;
    async fn replace_venue(&self, venue: Venue) -> Result<(), RepositoryError>;
    async fn remove_venue(&self, venue_id: Uuid) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait PlayerRepository: Send + Sync {
    async fn insert_player(&self, player: Player) -> Result<(), RepositoryError>;
    async fn get_player(&self, player_id: Uuid) -> Result<Option<Player>, RepositoryError>;
    /// Players for `ids`, in the same order. Unknown ids are skipped.
    async fn get_players(&self, ids: &[Uuid]) -> Result<Vec<Player>, RepositoryError>;
    async fn replace_player(&self, player: Player) -> Result<(), RepositoryError>;
}
