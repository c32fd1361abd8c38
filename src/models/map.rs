use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::venue::Coordinates;

/// A single pin on the map, keyed by match id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapMarker {
    pub id: Uuid,
    pub coordinates: Coordinates,
    pub label: String,
    pub venue_name: String,
    pub current_players: u32,
    pub max_players: u32,
}

/// What the browser-side mapping library needs to draw the map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapView {
    pub center: Coordinates,
    pub zoom: f64,
    pub fit_bounds: bool,
    pub bounds_padding: u32,
    pub markers: Vec<MapMarker>,
    pub access_token_configured: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarkerSelection {
    pub match_id: Uuid,
    pub detail_path: String,
}
