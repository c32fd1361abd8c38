use reqwest::Client;
use serde_json::{json, Value};
use uuid::Uuid;

mod common;
use common::helpers::{create_match, create_player, create_venue};
use common::utils::spawn_app;

#[tokio::test]
async fn admin_add_venue_succeeds_with_valid_data() {
    // Arrange
    let test_app = spawn_app().await;
    let client = Client::new();

    // Act
    let response = client
        .post(&format!("{}/admin/venues", test_app.address))
        .json(&json!({
            "name": "  City Stadium ",
            "address": "789 Stadium Drive, Downtown",
            "coordinates": { "longitude": -0.0877, "latitude": 51.5136 }
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    // Assert
    assert_eq!(201, response.status().as_u16());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!("Place added successfully!", body["message"]);
    assert_eq!("City Stadium", body["data"]["name"]);
    assert_eq!(51.5136, body["data"]["coordinates"]["latitude"].as_f64().unwrap());
}

#[tokio::test]
async fn admin_add_venue_returns_400_for_missing_fields() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let test_cases = vec![
        (json!({ "address": "456 River Road, North Side" }), "missing name"),
        (json!({ "name": "Riverside Sports Complex" }), "missing address"),
        (json!({ "name": "Riverside", "address": "456 River Road", "coordinates": { "longitude": 200.0, "latitude": 0.0 } }), "longitude out of range"),
    ];

    for (body, description) in test_cases {
        let response = client
            .post(&format!("{}/admin/venues", test_app.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request.");

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was {}.",
            description
        );
    }
}

#[tokio::test]
async fn admin_venue_list_is_sorted_and_shared_with_picker() {
    let test_app = spawn_app().await;
    let client = Client::new();
    create_venue(&client, &test_app.address, "Riverside Sports Complex", None).await;
    create_venue(&client, &test_app.address, "Central Park Field", None).await;

    for path in ["/admin/venues", "/venues"] {
        let response = client
            .get(&format!("{}{}", test_app.address, path))
            .send()
            .await
            .expect("Failed to execute request.");
        assert_eq!(200, response.status().as_u16());

        let body: Value = response.json().await.expect("Failed to parse response");
        let names: Vec<&str> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Central Park Field", "Riverside Sports Complex"]);
    }
}

#[tokio::test]
async fn admin_update_venue_changes_only_given_fields() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let venue_id = create_venue(&client, &test_app.address, "Central Park Field", None).await;

    let response = client
        .put(&format!("{}/admin/venues/{}", test_app.address, venue_id))
        .json(&json!({ "name": "Central Park Pitch" }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(200, response.status().as_u16());

    let response = client
        .get(&format!("{}/admin/venues/{}", test_app.address, venue_id))
        .send()
        .await
        .expect("Failed to execute request.");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!("Central Park Pitch", body["data"]["name"]);
    assert_eq!("123 Park Avenue, Central District", body["data"]["address"]);
}

#[tokio::test]
async fn admin_remove_venue_then_404() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let venue_id = create_venue(&client, &test_app.address, "City Stadium", None).await;

    let response = client
        .delete(&format!("{}/admin/venues/{}", test_app.address, venue_id))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(200, response.status().as_u16());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!("Place deleted successfully!", body["message"]);

    let response = client
        .delete(&format!("{}/admin/venues/{}", test_app.address, venue_id))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(404, response.status().as_u16());

    let response = client
        .get(&format!("{}/admin/venues/{}", test_app.address, Uuid::new_v4()))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(404, response.status().as_u16());
}

#[tokio::test]
async fn match_survives_removal_of_its_venue() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let venue_id = create_venue(&client, &test_app.address, "City Stadium", None).await;
    let host_id = create_player(&client, &test_app.address, "John Doe").await;
    let match_id = create_match(&client, &test_app.address, &venue_id, &host_id, "Weekend Tournament", 12).await;

    client
        .delete(&format!("{}/admin/venues/{}", test_app.address, venue_id))
        .send()
        .await
        .expect("Failed to execute request.");

    let response = client
        .get(&format!("{}/matches/{}", test_app.address, match_id))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(200, response.status().as_u16());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["venue"].is_null());
    assert!(body["data"]["venue_name"].is_null());
    assert_eq!(venue_id, body["data"]["venue_id"]);
}

#[tokio::test]
async fn admin_add_venue_with_mistyped_coordinates_returns_validation_envelope() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let response = client
        .post(&format!("{}/admin/venues", test_app.address))
        .json(&json!({
            "name": "City Stadium",
            "address": "789 Stadium Drive, Downtown",
            "coordinates": { "longitude": "x", "latitude": 51.5136 }
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(400, response.status().as_u16());
    let body: Value = response.json().await.expect("Error reply was not JSON");
    assert_eq!(false, body["success"]);
    assert_eq!("validation_error", body["error"]);
}
