// src/models/player.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MIN_SKILL_LEVEL: u8 = 1;
pub const MAX_SKILL_LEVEL: u8 = 10;
const MAX_DISPLAY_NAME_LEN: usize = 50;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub id: Uuid,
    pub display_name: String,
    pub email: Option<String>,
    pub skill_level: u8,
}

impl Player {
    pub fn new(display_name: impl Into<String>, email: Option<String>, skill_level: u8) -> Self {
        Self {
            id: Uuid::new_v4(),
            display_name: display_name.into(),
            email,
            skill_level,
        }
    }

    /// "Emma Martinez" -> "EM", used for avatar fallbacks.
    pub fn initials(&self) -> String {
        self.display_name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// The slice of a player shown in rosters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerSummary {
    pub id: Uuid,
    pub display_name: String,
    pub initials: String,
    pub skill_level: u8,
}

impl From<&Player> for PlayerSummary {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id,
            display_name: player.display_name.clone(),
            initials: player.initials(),
            skill_level: player.skill_level,
        }
    }
}

/// Request to create a player profile
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreatePlayerRequest {
    #[serde(default)]
    pub display_name: String,
    pub email: Option<String>,
    pub skill_level: Option<u8>,
}

/// Request to update the profile page's editable fields
#[derive(Debug, Default, Serialize, Deserialize, Clone)]
pub struct UpdateProfileRequest {
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub skill_level: Option<u8>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UpcomingMatch {
    pub id: Uuid,
    pub title: String,
    pub date: NaiveDate,
    pub venue_name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProfileResponse {
    pub player: Player,
    pub initials: String,
    pub matches_joined: usize,
    pub matches_hosted: usize,
    pub upcoming_matches: Vec<UpcomingMatch>,
}

fn validate_display_name(name: &str) -> Result<(), String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Display name cannot be empty".to_string());
    }
    if name.chars().count() > MAX_DISPLAY_NAME_LEN {
        return Err(format!("Display name cannot exceed {} characters", MAX_DISPLAY_NAME_LEN));
    }
    Ok(())
}

fn validate_skill_level(level: u8) -> Result<(), String> {
    if !(MIN_SKILL_LEVEL..=MAX_SKILL_LEVEL).contains(&level) {
        return Err(format!(
            "Skill level must be between {} and {}",
            MIN_SKILL_LEVEL, MAX_SKILL_LEVEL
        ));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), String> {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(format!("'{}' is not a valid email address", email)),
    }
}

impl CreatePlayerRequest {
    pub fn validate(&self) -> Result<(), String> {
        validate_display_name(&self.display_name)?;
        if let Some(level) = self.skill_level {
            validate_skill_level(level)?;
        }
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        Ok(())
    }
}

impl UpdateProfileRequest {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(name) = &self.display_name {
            validate_display_name(name)?;
        }
        if let Some(level) = self.skill_level {
            validate_skill_level(level)?;
        }
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        Ok(())
    }

    pub fn apply(self, player: &Player) -> Player {
        Player {
            id: player.id,
            display_name: self
                .display_name
                .map(|name| name.trim().to_string())
                .unwrap_or_else(|| player.display_name.clone()),
            email: self.email.map(|email| email.trim().to_string()).or_else(|| player.email.clone()),
            skill_level: self.skill_level.unwrap_or(player.skill_level),
        }
    }
}
