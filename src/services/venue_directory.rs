use std::sync::Arc;
use uuid::Uuid;

use crate::db::VenueRepository;
use crate::errors::MatchUpError;
use crate::models::venue::{CreateVenueRequest, UpdateVenueRequest, Venue};

/// The admin panel's list of places.
pub struct VenueDirectory {
    venues: Arc<dyn VenueRepository>,
}

impl VenueDirectory {
    pub fn new(venues: Arc<dyn VenueRepository>) -> Self {
        Self { venues }
    }

    /// All venues, alphabetically.
    pub async fn list_venues(&self) -> Result<Vec<Venue>, MatchUpError> {
        let mut venues = self.venues.list_venues().await?;
        venues.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(venues)
    }

    pub async fn get_venue(&self, venue_id: Uuid) -> Result<Venue, MatchUpError> {
        self.venues
            .get_venue(venue_id)
            .await?
            .ok_or_else(|| MatchUpError::venue_not_found(venue_id))
    }

    #[tracing::instrument(name = "Add venue", skip(self, request), fields(name = %request.name))]
    pub async fn add_venue(&self, request: &CreateVenueRequest) -> Result<Venue, MatchUpError> {
        request.validate().map_err(MatchUpError::Validation)?;

        let venue = Venue::new(request.name.trim(), request.address.trim(), request.coordinates);
        self.venues.insert_venue(venue.clone()).await?;
        tracing::info!("Added venue {} ({})", venue.name, venue.id);
        Ok(venue)
    }

    #[tracing::instrument(name = "Update venue", skip(self, request))]
    pub async fn update_venue(&self, venue_id: Uuid, request: UpdateVenueRequest) -> Result<Venue, MatchUpError> {
        request.validate().map_err(MatchUpError::Validation)?;

        let current = self.get_venue(venue_id).await?;
        let updated = request.apply(&current);
        self.venues.replace_venue(updated.clone()).await?;
        Ok(updated)
    }

    /// Matches keep their reference to a removed venue.
    #[tracing::instrument(name = "Remove venue", skip(self))]
    pub async fn remove_venue(&self, venue_id: Uuid) -> Result<(), MatchUpError> {
        self.venues.remove_venue(venue_id).await?;
        tracing::info!("Removed venue {}", venue_id);
        Ok(())
    }
}
