use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::repository::{MatchRepository, MatchUpdate, PlayerRepository, RepositoryError, VenueRepository};
use crate::models::matches::Match;
use crate::models::player::Player;
use crate::models::venue::Venue;

/// Process-local store backing every repository trait.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    matches: Arc<RwLock<HashMap<Uuid, Match>>>,
    venues: Arc<RwLock<HashMap<Uuid, Venue>>>,
    players: Arc<RwLock<HashMap<Uuid, Player>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MatchRepository for MemoryStorage {
    async fn insert_match(&self, game: Match) -> Result<(), RepositoryError> {
        let mut matches = self.matches.write().await;
        if matches.contains_key(&game.id) {
            return Err(RepositoryError::Conflict { kind: "Match", id: game.id });
        }
        matches.insert(game.id, game);
        Ok(())
    }

    async fn get_match(&self, match_id: Uuid) -> Result<Option<Match>, RepositoryError> {
        let matches = self.matches.read().await;
        Ok(matches.get(&match_id).cloned())
    }

    async fn list_matches(&self) -> Result<Vec<Match>, RepositoryError> {
        let matches = self.matches.read().await;
        Ok(matches.values().cloned().collect())
    }

    async fn update_match(&self, match_id: Uuid, update: MatchUpdate) -> Result<Match, RepositoryError> {
        // Held across check and write so concurrent joins cannot over-book.
        let mut matches = self.matches.write().await;
        let current = matches
            .get(&match_id)
            .ok_or(RepositoryError::NotFound { kind: "Match", id: match_id })?;

        let updated = update(current)?;
        matches.insert(match_id, updated.clone());
        Ok(updated)
    }
}

#[async_trait]
impl VenueRepository for MemoryStorage {
    async fn insert_venue(&self, venue: Venue) -> Result<(), RepositoryError> {
        let mut venues = self.venues.write().await;
        if venues.contains_key(&venue.id) {
            return Err(RepositoryError::Conflict { kind: "Venue", id: venue.id });
        }
        venues.insert(venue.id, venue);
        Ok(())
    }

    async fn get_venue(&self, venue_id: Uuid) -> Result<Option<Venue>, RepositoryError> {
        let venues = self.venues.read().await;
        Ok(venues.get(&venue_id).cloned())
    }

    async fn list_venues(&self) -> Result<Vec<Venue>, RepositoryError> {
        let venues = self.venues.read().await;
        Ok(venues.values().cloned().collect())
    }

    async fn replace_venue(&self, venue: Venue) -> Result<(), RepositoryError> {
        let mut venues = self.venues.write().await;
        match venues.get_mut(&venue.id) {
            Some(stored) => {
                *stored = venue;
                Ok(())
            }
            None => Err(RepositoryError::NotFound { kind: "Venue", id: venue.id }),
        }
    }

    async fn remove_venue(&self, venue_id: Uuid) -> Result<(), RepositoryError> {
        let mut venues = self.venues.write().await;
        if venues.remove(&venue_id).is_none() {
            return Err(RepositoryError::NotFound { kind: "Venue", id: venue_id });
        }
        Ok(())
    }
}

#[async_trait]
impl PlayerRepository for MemoryStorage {
    async fn insert_player(&self, player: Player) -> Result<(), RepositoryError> {
        let mut players = self.players.write().await;
        if players.contains_key(&player.id) {
            return Err(RepositoryError::Conflict { kind: "Player", id: player.id });
        }
        players.insert(player.id, player);
        Ok(())
    }

    async fn get_player(&self, player_id: Uuid) -> Result<Option<Player>, RepositoryError> {
        let players = self.players.read().await;
        Ok(players.get(&player_id).cloned())
    }

    async fn get_players(&self, ids: &[Uuid]) -> Result<Vec<Player>, RepositoryError> {
        let players = self.players.read().await;
        Ok(ids.iter().filter_map(|id| players.get(id).cloned()).collect())
    }

    async fn replace_player(&self, player: Player) -> Result<(), RepositoryError> {
        let mut players = self.players.write().await;
        match players.get_mut(&player.id) {
            Some(stored) => {
                *stored = player;
                Ok(())
            }
            None => Err(RepositoryError::NotFound { kind: "Player", id: player.id }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matches::roster::{self, RosterError};
    use crate::models::matches::NewMatch;
    use chrono::NaiveDate;

    fn new_match(capacity: u32) -> Match {
        Match::new(NewMatch {
            title: "Evening Match".into(),
            scheduled_at: NaiveDate::from_ymd_opt(2025, 11, 21)
                .unwrap()
                .and_hms_opt(18, 0, 0)
                .unwrap(),
            venue_id: Uuid::new_v4(),
            max_players: capacity,
            description: None,
            host_id: Uuid::new_v4(),
        })
    }

    #[tokio::test]
    async fn test_update_match_applies_roster_change() {
        let storage = MemoryStorage::new();
        let game = new_match(2);
        let match_id = game.id;
        storage.insert_match(game).await.unwrap();

        let player = Uuid::new_v4();
        let updated = storage
            .update_match(match_id, Box::new(move |m| roster::join(m, player)))
            .await
            .unwrap();
        assert_eq!(updated.roster(), &[player]);

        let stored = storage.get_match(match_id).await.unwrap().unwrap();
        assert_eq!(stored.roster(), &[player]);
    }

    #[tokio::test]
    async fn test_rejected_update_leaves_match_untouched() {
        let storage = MemoryStorage::new();
        let game = new_match(2);
        let match_id = game.id;
        storage.insert_match(game).await.unwrap();

        let result = storage
            .update_match(match_id, Box::new(|m| roster::leave(m, Uuid::new_v4())))
            .await;
        assert_eq!(result, Err(RepositoryError::Rejected(RosterError::NotAJoinedPlayer)));

        let stored = storage.get_match(match_id).await.unwrap().unwrap();
        assert!(stored.roster().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_joins_never_overbook() {
        let storage = MemoryStorage::new();
        let game = new_match(4);
        let match_id = game.id;
        storage.insert_match(game).await.unwrap();

        let mut handles = Vec::new();
        for _ in 0..16 {
            let storage = storage.clone();
            handles.push(tokio::spawn(async move {
                let player = Uuid::new_v4();
                storage
                    .update_match(match_id, Box::new(move |m| roster::join(m, player)))
                    .await
            }));
        }

        let mut joined = 0;
        let mut rejected = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => joined += 1,
                Err(RepositoryError::Rejected(RosterError::CapacityExceeded)) => rejected += 1,
                Err(other) => panic!("unexpected error: {}", other),
            }
        }
        assert_eq!(joined, 4);
        assert_eq!(rejected, 12);

        let stored = storage.get_match(match_id).await.unwrap().unwrap();
        assert_eq!(stored.roster().len(), 4);
    }

    #[tokio::test]
    async fn test_unknown_ids() {
        let storage = MemoryStorage::new();
        let id = Uuid::new_v4();

        assert_eq!(storage.get_venue(id).await, Ok(None));
        assert_eq!(
            storage.remove_venue(id).await,
            Err(RepositoryError::NotFound { kind: "Venue", id })
        );
        assert!(matches!(
            storage.update_match(id, Box::new(|m| Ok(m.clone()))).await,
            Err(RepositoryError::NotFound { kind: "Match", .. })
        ));
    }

    #[tokio::test]
    async fn test_get_players_keeps_order() {
        let storage = MemoryStorage::new();
        let first = Player::new("Jane Smith", None, 6);
        let second = Player::new("Mike Johnson", None, 8);
        storage.insert_player(first.clone()).await.unwrap();
        storage.insert_player(second.clone()).await.unwrap();

        let players = storage
            .get_players(&[second.id, Uuid::new_v4(), first.id])
            .await
            .unwrap();
        assert_eq!(players, vec![second, first]);
    }
}
