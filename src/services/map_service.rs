use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::settings::MapSettings;
use crate::db::{MatchRepository, VenueRepository};
use crate::errors::MatchUpError;
use crate::models::map::{MapMarker, MapView, MarkerSelection};
use crate::models::venue::{Coordinates, Venue};

/// Used as the map center when there is nothing to show.
pub const DEFAULT_CENTER: Coordinates = Coordinates {
    longitude: -0.1276,
    latitude: 51.5074,
};
const BOUNDS_PADDING: u32 = 50;

/// Binding to the external mapping service.
///
/// The service draws; we only decide what goes on the map and what a click
/// on a marker refers to.
pub trait MapAdapter: Send + Sync {
    fn render_markers(&self, markers: Vec<MapMarker>) -> MapView;
    fn on_marker_selected(&self, markers: &[MapMarker], marker_id: Uuid) -> Option<MarkerSelection>;
}

/// Hands markers to a browser-side map, centered on the first marker.
pub struct BrowserMapAdapter {
    settings: MapSettings,
}

impl BrowserMapAdapter {
    pub fn new(settings: MapSettings) -> Self {
        Self { settings }
    }
}

impl MapAdapter for BrowserMapAdapter {
    fn render_markers(&self, markers: Vec<MapMarker>) -> MapView {
        let center = markers.first().map(|m| m.coordinates).unwrap_or(DEFAULT_CENTER);
        MapView {
            center,
            zoom: self.settings.default_zoom,
            fit_bounds: markers.len() > 1,
            bounds_padding: BOUNDS_PADDING,
            markers,
            access_token_configured: self.settings.has_access_token(),
        }
    }

    fn on_marker_selected(&self, markers: &[MapMarker], marker_id: Uuid) -> Option<MarkerSelection> {
        markers.iter().find(|m| m.id == marker_id).map(|m| MarkerSelection {
            match_id: m.id,
            detail_path: format!("/matches/{}", m.id),
        })
    }
}

pub struct MapService {
    matches: Arc<dyn MatchRepository>,
    venues: Arc<dyn VenueRepository>,
    adapter: Arc<dyn MapAdapter>,
}

impl MapService {
    pub fn new(
        matches: Arc<dyn MatchRepository>,
        venues: Arc<dyn VenueRepository>,
        adapter: Arc<dyn MapAdapter>,
    ) -> Self {
        Self { matches, venues, adapter }
    }

    pub async fn map_view(&self) -> Result<MapView, MatchUpError> {
        let markers = self.markers().await?;
        Ok(self.adapter.render_markers(markers))
    }

    pub async fn select_marker(&self, marker_id: Uuid) -> Result<MarkerSelection, MatchUpError> {
        let markers = self.markers().await?;
        self.adapter
            .on_marker_selected(&markers, marker_id)
            .ok_or_else(|| MatchUpError::marker_not_found(marker_id))
    }

    /// One marker per match whose venue has coordinates, soonest first.
    async fn markers(&self) -> Result<Vec<MapMarker>, MatchUpError> {
        let venues: HashMap<Uuid, Venue> = self
            .venues
            .list_venues()
            .await?
            .into_iter()
            .map(|venue| (venue.id, venue))
            .collect();

        let mut matches = self.matches.list_matches().await?;
        matches.sort_by_key(|game| game.scheduled_at);

        Ok(matches
            .iter()
            .filter_map(|game| {
                let venue = venues.get(&game.venue_id)?;
                let coordinates = venue.coordinates?;
                Some(MapMarker {
                    id: game.id,
                    coordinates,
                    label: game.title.clone(),
                    venue_name: venue.name.clone(),
                    current_players: game.roster().len() as u32,
                    max_players: game.max_players(),
                })
            })
            .collect())
    }
}
