use chrono::{Duration, Utc};
use reqwest::Client;
use serde_json::{json, Value};

/// `YYYY-MM-DD` for a day `days_ahead` from today.
pub fn date_in(days_ahead: i64) -> String {
    (Utc::now().date_naive() + Duration::days(days_ahead))
        .format("%Y-%m-%d")
        .to_string()
}

pub async fn create_player(client: &Client, address: &str, name: &str) -> String {
    let response = client
        .post(&format!("{}/players", address))
        .json(&json!({
            "display_name": name,
            "skill_level": 6
        }))
        .send()
        .await
        .expect("Failed to create player.");
    assert_eq!(201, response.status().as_u16());

    let body: Value = response.json().await.expect("Failed to parse player response");
    body["data"]["id"].as_str().expect("No player id").to_string()
}

pub async fn create_venue(client: &Client, address: &str, name: &str, coordinates: Option<(f64, f64)>) -> String {
    let mut request = json!({
        "name": name,
        "address": "123 Park Avenue, Central District"
    });
    if let Some((longitude, latitude)) = coordinates {
        request["coordinates"] = json!({ "longitude": longitude, "latitude": latitude });
    }

    let response = client
        .post(&format!("{}/admin/venues", address))
        .json(&request)
        .send()
        .await
        .expect("Failed to create venue.");
    assert_eq!(201, response.status().as_u16());

    let body: Value = response.json().await.expect("Failed to parse venue response");
    body["data"]["id"].as_str().expect("No venue id").to_string()
}

pub async fn create_match(
    client: &Client,
    address: &str,
    venue_id: &str,
    host_id: &str,
    title: &str,
    max_players: u32,
) -> String {
    let response = client
        .post(&format!("{}/matches", address))
        .json(&json!({
            "title": title,
            "date": date_in(2),
            "time": "18:00",
            "venue_id": venue_id,
            "max_players": max_players,
            "host_id": host_id
        }))
        .send()
        .await
        .expect("Failed to create match.");
    assert_eq!(201, response.status().as_u16());

    let body: Value = response.json().await.expect("Failed to parse match response");
    body["data"]["id"].as_str().expect("No match id").to_string()
}

/// POST a join or leave for `player_id` and return the raw response.
pub async fn roster_action(
    client: &Client,
    address: &str,
    match_id: &str,
    action: &str,
    player_id: &str,
) -> reqwest::Response {
    client
        .post(&format!("{}/matches/{}/{}", address, match_id, action))
        .json(&json!({ "player_id": player_id }))
        .send()
        .await
        .expect("Failed to execute roster request.")
}
