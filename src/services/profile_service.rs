use chrono::NaiveDate;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::{MatchRepository, PlayerRepository, VenueRepository};
use crate::errors::MatchUpError;
use crate::models::player::{
    CreatePlayerRequest, Player, ProfileResponse, UpcomingMatch, UpdateProfileRequest, MIN_SKILL_LEVEL,
};

pub struct ProfileService {
    players: Arc<dyn PlayerRepository>,
    matches: Arc<dyn MatchRepository>,
    venues: Arc<dyn VenueRepository>,
}

impl ProfileService {
    pub fn new(
        players: Arc<dyn PlayerRepository>,
        matches: Arc<dyn MatchRepository>,
        venues: Arc<dyn VenueRepository>,
    ) -> Self {
        Self { players, matches, venues }
    }

    #[tracing::instrument(name = "Create player", skip(self, request), fields(display_name = %request.display_name))]
    pub async fn create_player(&self, request: &CreatePlayerRequest) -> Result<Player, MatchUpError> {
        request.validate().map_err(MatchUpError::Validation)?;

        let player = Player::new(
            request.display_name.trim(),
            request.email.as_ref().map(|email| email.trim().to_string()),
            request.skill_level.unwrap_or(MIN_SKILL_LEVEL),
        );
        self.players.insert_player(player.clone()).await?;
        Ok(player)
    }

    /// Profile page data, with upcoming matches counted from `today`.
    pub async fn get_profile(&self, player_id: Uuid, today: NaiveDate) -> Result<ProfileResponse, MatchUpError> {
        let player = self
            .players
            .get_player(player_id)
            .await?
            .ok_or_else(|| MatchUpError::player_not_found(player_id))?;

        let matches = self.matches.list_matches().await?;
        let matches_joined = matches.iter().filter(|game| game.has_player(player_id)).count();
        let matches_hosted = matches.iter().filter(|game| game.host_id == player_id).count();

        let mut upcoming: Vec<_> = matches
            .iter()
            .filter(|game| game.has_player(player_id) && game.scheduled_at.date() >= today)
            .collect();
        upcoming.sort_by_key(|game| game.scheduled_at);

        let mut upcoming_matches = Vec::with_capacity(upcoming.len());
        for game in upcoming {
            let venue_name = self.venues.get_venue(game.venue_id).await?.map(|venue| venue.name);
            upcoming_matches.push(UpcomingMatch {
                id: game.id,
                title: game.title.clone(),
                date: game.scheduled_at.date(),
                venue_name,
            });
        }

        Ok(ProfileResponse {
            initials: player.initials(),
            player,
            matches_joined,
            matches_hosted,
            upcoming_matches,
        })
    }

    #[tracing::instrument(name = "Update profile", skip(self, request))]
    pub async fn update_profile(&self, player_id: Uuid, request: UpdateProfileRequest) -> Result<Player, MatchUpError> {
        request.validate().map_err(MatchUpError::Validation)?;

        let current = self
            .players
            .get_player(player_id)
            .await?
            .ok_or_else(|| MatchUpError::player_not_found(player_id))?;
        let updated = request.apply(&current);
        self.players.replace_player(updated.clone()).await?;
        Ok(updated)
    }
}
