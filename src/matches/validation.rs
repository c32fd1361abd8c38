use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use uuid::Uuid;

use crate::config::settings::MatchSettings;
use crate::models::matches::{CreateMatchRequest, NewMatch};

const MAX_TITLE_LEN: usize = 100;
const MAX_DESCRIPTION_LEN: usize = 1000;
const MAX_DAYS_AHEAD: i64 = 365;

/// Checks the create-match form before anything reaches the roster model.
pub struct MatchValidator {
    min_players: u32,
    max_players: u32,
    default_players: u32,
}

impl MatchValidator {
    pub fn new(settings: &MatchSettings) -> Self {
        // A match needs two sides, whatever the configuration says.
        let min_players = settings.min_players.max(2);
        let max_players = settings.max_players.max(min_players);
        Self {
            min_players,
            max_players,
            default_players: settings.default_players.clamp(min_players, max_players),
        }
    }

    /// Validate the request and turn it into a [`NewMatch`].
    pub fn validate_create_match_request(&self, request: &CreateMatchRequest) -> Result<NewMatch, String> {
        let title = self.validate_title(&request.title)?;
        let date = self.validate_date(&request.date, Utc::now().date_naive())?;
        let time = self.validate_time(&request.time)?;
        let venue_id = self.require_id(request.venue_id, "Venue")?;
        let host_id = self.require_id(request.host_id, "Host")?;
        let max_players = self.validate_capacity(request.max_players.unwrap_or(self.default_players))?;
        let description = self.validate_description(request.description.as_deref())?;

        Ok(NewMatch {
            title,
            scheduled_at: date.and_time(time),
            venue_id,
            max_players,
            description,
            host_id,
        })
    }

    pub fn validate_title(&self, title: &str) -> Result<String, String> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err("Match title is required".to_string());
        }
        if trimmed.chars().count() > MAX_TITLE_LEN {
            return Err(format!("Match title cannot exceed {} characters", MAX_TITLE_LEN));
        }
        if !trimmed.chars().any(|c| c.is_alphanumeric()) {
            return Err("Match title must contain at least one letter or number".to_string());
        }
        Ok(trimmed.to_string())
    }

    /// Dates are `YYYY-MM-DD`, not before `today` and at most a year ahead.
    pub fn validate_date(&self, date: &str, today: NaiveDate) -> Result<NaiveDate, String> {
        let date = date.trim();
        if date.is_empty() {
            return Err("Match date is required".to_string());
        }
        let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| format!("'{}' is not a valid date (expected YYYY-MM-DD)", date))?;

        if parsed < today {
            return Err(format!("Match date {} is in the past", parsed));
        }
        if parsed > today + Duration::days(MAX_DAYS_AHEAD) {
            return Err(format!("Match date {} is too far in the future (max 1 year)", parsed));
        }
        Ok(parsed)
    }

    /// Times are `HH:MM` as sent by the time picker; `HH:MM:SS` is accepted too.
    pub fn validate_time(&self, time: &str) -> Result<NaiveTime, String> {
        let time = time.trim();
        if time.is_empty() {
            return Err("Match time is required".to_string());
        }
        NaiveTime::parse_from_str(time, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M:%S"))
            .map_err(|_| format!("'{}' is not a valid time (expected HH:MM)", time))
    }

    pub fn validate_capacity(&self, max_players: u32) -> Result<u32, String> {
        if max_players < self.min_players || max_players > self.max_players {
            return Err(format!(
                "Max players must be between {} and {}, got {}",
                self.min_players, self.max_players, max_players
            ));
        }
        Ok(max_players)
    }

    pub fn validate_description(&self, description: Option<&str>) -> Result<Option<String>, String> {
        match description.map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) if text.chars().count() > MAX_DESCRIPTION_LEN => Err(format!(
                "Description cannot exceed {} characters",
                MAX_DESCRIPTION_LEN
            )),
            Some(text) => Ok(Some(text.to_string())),
        }
    }

    fn require_id(&self, id: Option<Uuid>, field: &str) -> Result<Uuid, String> {
        match id {
            Some(id) if !id.is_nil() => Ok(id),
            _ => Err(format!("{} is required", field)),
        }
    }
}
