// src/models/venue.rs
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const MAX_NAME_LEN: usize = 100;
const MAX_ADDRESS_LEN: usize = 200;

/// A place where matches are played.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Venue {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub coordinates: Option<Coordinates>,
}

impl Venue {
    pub fn new(name: impl Into<String>, address: impl Into<String>, coordinates: Option<Coordinates>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            address: address.into(),
            coordinates,
        }
    }
}

/// Longitude/latitude pair, in that order, as the mapping service expects.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinates {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self { longitude, latitude }
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(format!("Longitude {} is out of range", self.longitude));
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(format!("Latitude {} is out of range", self.latitude));
        }
        Ok(())
    }
}

/// Request to add a place from the admin panel
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateVenueRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub coordinates: Option<Coordinates>,
}

/// Request to edit a place
#[derive(Debug, Default, Serialize, Deserialize, Clone)]
pub struct UpdateVenueRequest {
    pub name: Option<String>,
    pub address: Option<String>,
    pub coordinates: Option<Coordinates>,
}

fn validate_name(name: &str) -> Result<(), String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Place name cannot be empty".to_string());
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(format!("Place name cannot exceed {} characters", MAX_NAME_LEN));
    }
    Ok(())
}

fn validate_address(address: &str) -> Result<(), String> {
    let address = address.trim();
    if address.is_empty() {
        return Err("Address cannot be empty".to_string());
    }
    if address.chars().count() > MAX_ADDRESS_LEN {
        return Err(format!("Address cannot exceed {} characters", MAX_ADDRESS_LEN));
    }
    Ok(())
}

impl CreateVenueRequest {
    pub fn validate(&self) -> Result<(), String> {
        validate_name(&self.name)?;
        validate_address(&self.address)?;
        if let Some(coordinates) = &self.coordinates {
            coordinates.validate()?;
        }
        Ok(())
    }
}

impl UpdateVenueRequest {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(address) = &self.address {
            validate_address(address)?;
        }
        if let Some(coordinates) = &self.coordinates {
            coordinates.validate()?;
        }
        Ok(())
    }

    pub fn apply(self, venue: &Venue) -> Venue {
        Venue {
            id: venue.id,
            name: self.name.map(|n| n.trim().to_string()).unwrap_or_else(|| venue.name.clone()),
            address: self
                .address
                .map(|a| a.trim().to_string())
                .unwrap_or_else(|| venue.address.clone()),
            coordinates: self.coordinates.or(venue.coordinates),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_requires_name_and_address() {
        let request = CreateVenueRequest {
            name: "City Stadium".into(),
            address: "".into(),
            coordinates: None,
        };
        assert_eq!(request.validate(), Err("Address cannot be empty".to_string()));

        let request = CreateVenueRequest {
            name: " ".into(),
            address: "789 Stadium Drive, Downtown".into(),
            coordinates: None,
        };
        assert_eq!(request.validate(), Err("Place name cannot be empty".to_string()));
    }

    #[test]
    fn test_coordinates_range() {
        assert!(Coordinates::new(-0.1276, 51.5074).validate().is_ok());
        assert!(Coordinates::new(181.0, 0.0).validate().is_err());
        assert!(Coordinates::new(0.0, -91.0).validate().is_err());
    }

    #[test]
    fn test_update_applies_only_given_fields() {
        let venue = Venue::new(
            "Central Park Field",
            "123 Park Avenue, Central District",
            Some(Coordinates::new(-0.1276, 51.5074)),
        );
        let update = UpdateVenueRequest {
            name: Some("  Central Park Pitch ".into()),
            ..Default::default()
        };
        let updated = update.apply(&venue);

        assert_eq!(updated.id, venue.id);
        assert_eq!(updated.name, "Central Park Pitch");
        assert_eq!(updated.address, venue.address);
        assert_eq!(updated.coordinates, venue.coordinates);
    }
}
