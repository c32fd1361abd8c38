use chrono::{Duration, NaiveTime, Utc};

use super::memory_storage::MemoryStorage;
use super::repository::{MatchRepository, PlayerRepository, RepositoryError, VenueRepository};
use crate::matches::roster;
use crate::models::matches::{Match, NewMatch};
use crate::models::player::Player;
use crate::models::venue::{Coordinates, Venue};

const DEMO_PLAYERS: [(&str, u8); 10] = [
    ("John Doe", 7),
    ("Jane Smith", 6),
    ("Mike Johnson", 8),
    ("Sarah Wilson", 5),
    ("Tom Brown", 7),
    ("Lisa Garcia", 6),
    ("David Lee", 8),
    ("Emma Martinez", 7),
    ("Chris Taylor", 6),
    ("Anna White", 5),
];

/// Counts of what [`seed_demo_data`] inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub venues: usize,
    pub players: usize,
    pub matches: usize,
}

/// Populate `storage` with the demo places, players and matches.
///
/// Match dates are relative to today so the feed always has upcoming games.
#[tracing::instrument(name = "Seed demo data", skip(storage))]
pub async fn seed_demo_data(storage: &MemoryStorage) -> Result<SeedSummary, RepositoryError> {
    let venues = vec![
        Venue::new(
            "Central Park Field",
            "123 Park Avenue, Central District",
            Some(Coordinates::new(-0.1276, 51.5074)),
        ),
        Venue::new(
            "Riverside Sports Complex",
            "456 River Road, North Side",
            Some(Coordinates::new(-0.1195, 51.5235)),
        ),
        Venue::new(
            "City Stadium",
            "789 Stadium Drive, Downtown",
            Some(Coordinates::new(-0.0877, 51.5136)),
        ),
    ];
    for venue in &venues {
        storage.insert_venue(venue.clone()).await?;
    }

    let mut players = Vec::with_capacity(DEMO_PLAYERS.len());
    for (index, (name, level)) in DEMO_PLAYERS.iter().enumerate() {
        let email = (index == 0).then(|| "john@example.com".to_string());
        let player = Player::new(*name, email, *level);
        storage.insert_player(player.clone()).await?;
        players.push(player);
    }

    let host = players[0].id;
    let today = Utc::now().date_naive();
    let demo_matches = [
        ("Sunday Morning Kickoff", 3, (10, 0), 0, 10, 8,
            Some("Friendly match for all skill levels. Bring your own water and wear appropriate footwear.")),
        ("Evening Match", 4, (18, 0), 1, 10, 10, None),
        ("Weekend Tournament", 6, (14, 0), 2, 12, 5, None),
    ];

    for (title, days_ahead, (hour, minute), venue_index, capacity, joined, description) in demo_matches {
        let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN);
        let mut game = Match::new(NewMatch {
            title: title.to_string(),
            scheduled_at: (today + Duration::days(days_ahead)).and_time(time),
            venue_id: venues[venue_index].id,
            max_players: capacity,
            description: description.map(str::to_string),
            host_id: host,
        });
        for player in players.iter().take(joined) {
            game = roster::join(&game, player.id)?;
        }
        storage.insert_match(game).await?;
    }

    let summary = SeedSummary {
        venues: venues.len(),
        players: players.len(),
        matches: demo_matches.len(),
    };
    tracing::info!(?summary, "Demo data seeded");
    Ok(summary)
}
