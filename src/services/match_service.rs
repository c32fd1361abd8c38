use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::settings::MatchSettings;
use crate::db::{MatchRepository, PlayerRepository, VenueRepository};
use crate::errors::MatchUpError;
use crate::matches::roster;
use crate::matches::validation::MatchValidator;
use crate::models::matches::{CreateMatchRequest, Match, MatchCard, MatchDetail, MatchQuery};
use crate::models::player::PlayerSummary;

/// Home feed, match detail, creation and the join/leave flow.
pub struct MatchService {
    matches: Arc<dyn MatchRepository>,
    venues: Arc<dyn VenueRepository>,
    players: Arc<dyn PlayerRepository>,
    validator: MatchValidator,
}

impl MatchService {
    pub fn new(
        matches: Arc<dyn MatchRepository>,
        venues: Arc<dyn VenueRepository>,
        players: Arc<dyn PlayerRepository>,
        settings: &MatchSettings,
    ) -> Self {
        Self {
            matches,
            venues,
            players,
            validator: MatchValidator::new(settings),
        }
    }

    /// Cards for the home feed, soonest first.
    pub async fn list_matches(&self, query: &MatchQuery) -> Result<Vec<MatchCard>, MatchUpError> {
        let venue_names: HashMap<Uuid, String> = self
            .venues
            .list_venues()
            .await?
            .into_iter()
            .map(|venue| (venue.id, venue.name))
            .collect();

        let mut matches: Vec<Match> = self
            .matches
            .list_matches()
            .await?
            .into_iter()
            .filter(|game| query.venue_id.map_or(true, |venue_id| game.venue_id == venue_id))
            .filter(|game| query.from.map_or(true, |from| game.scheduled_at.date() >= from))
            .filter(|game| query.status.map_or(true, |status| roster::status(game) == status))
            .collect();
        matches.sort_by(|a, b| a.scheduled_at.cmp(&b.scheduled_at).then_with(|| a.title.cmp(&b.title)));

        matches
            .iter()
            .map(|game| build_card(game, venue_names.get(&game.venue_id).cloned()))
            .collect()
    }

    pub async fn get_match_detail(&self, match_id: Uuid) -> Result<MatchDetail, MatchUpError> {
        let game = self
            .matches
            .get_match(match_id)
            .await?
            .ok_or_else(|| MatchUpError::match_not_found(match_id))?;
        self.build_detail(&game).await
    }

    /// Validate the form, check the referenced venue and host exist, store the match.
    #[tracing::instrument(name = "Create match", skip(self, request), fields(title = %request.title))]
    pub async fn create_match(&self, request: &CreateMatchRequest) -> Result<MatchDetail, MatchUpError> {
        let new_match = self
            .validator
            .validate_create_match_request(request)
            .map_err(MatchUpError::Validation)?;

        if self.venues.get_venue(new_match.venue_id).await?.is_none() {
            return Err(MatchUpError::venue_not_found(new_match.venue_id));
        }
        if self.players.get_player(new_match.host_id).await?.is_none() {
            return Err(MatchUpError::player_not_found(new_match.host_id));
        }

        let game = Match::new(new_match);
        self.matches.insert_match(game.clone()).await?;
        tracing::info!("Created match {} ({} players max)", game.id, game.max_players());

        self.build_detail(&game).await
    }

    #[tracing::instrument(name = "Join match", skip(self))]
    pub async fn join_match(&self, match_id: Uuid, player_id: Uuid) -> Result<MatchDetail, MatchUpError> {
        self.ensure_player_exists(player_id).await?;
        let game = self
            .matches
            .update_match(match_id, Box::new(move |game| roster::join(game, player_id)))
            .await?;

        tracing::info!(
            "Player {} joined match {} ({}/{})",
            player_id,
            match_id,
            game.roster().len(),
            game.max_players()
        );
        self.build_detail(&game).await
    }

    #[tracing::instrument(name = "Leave match", skip(self))]
    pub async fn leave_match(&self, match_id: Uuid, player_id: Uuid) -> Result<MatchDetail, MatchUpError> {
        self.ensure_player_exists(player_id).await?;
        let game = self
            .matches
            .update_match(match_id, Box::new(move |game| roster::leave(game, player_id)))
            .await?;

        tracing::info!("Player {} left match {}", player_id, match_id);
        self.build_detail(&game).await
    }

    async fn ensure_player_exists(&self, player_id: Uuid) -> Result<(), MatchUpError> {
        match self.players.get_player(player_id).await? {
            Some(_) => Ok(()),
            None => Err(MatchUpError::player_not_found(player_id)),
        }
    }

    async fn build_detail(&self, game: &Match) -> Result<MatchDetail, MatchUpError> {
        // A removed venue leaves the reference dangling; the page renders without it.
        let venue = self.venues.get_venue(game.venue_id).await?;
        let players = self.players.get_players(game.roster()).await?;
        let host = self.players.get_player(game.host_id).await?;

        Ok(MatchDetail {
            card: build_card(game, venue.as_ref().map(|v| v.name.clone()))?,
            description: game.description.clone(),
            venue,
            host: host.as_ref().map(PlayerSummary::from),
            players: players.iter().map(PlayerSummary::from).collect(),
            spots_left: roster::spots_left(game),
        })
    }
}

fn build_card(game: &Match, venue_name: Option<String>) -> Result<MatchCard, MatchUpError> {
    Ok(MatchCard {
        id: game.id,
        title: game.title.clone(),
        date: game.scheduled_at.format("%Y-%m-%d").to_string(),
        time: game.scheduled_at.format("%H:%M").to_string(),
        venue_id: game.venue_id,
        venue_name,
        current_players: game.roster().len() as u32,
        max_players: game.max_players(),
        status: roster::status(game),
        occupancy_ratio: roster::occupancy_ratio(game)?,
    })
}
