//! API integration tests

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:3010/api/v1";

/// Insert a rate entry and return its ID
async fn create_rate(client: &Client, age_min: i32, age_max: i32, high: &str, low: &str) -> i64 {
    let response = client
        .post(format!("{}/kurtaxe-config", BASE_URL))
        .json(&json!({
            "age_min": age_min,
            "age_max": age_max,
            "rate_high_season": high,
            "rate_low_season": low,
            "description": format!("test {}-{}", age_min, age_max),
            // Ahead of any existing rows so it wins the lookup
            "sort": -1000
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    body["id"].as_i64().expect("No rate ID")
}

async fn delete_rate(client: &Client, id: i64) {
    let _ = client
        .delete(format!("{}/kurtaxe-config/{}", BASE_URL, id))
        .send()
        .await;
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_readiness_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
#[ignore]
async fn test_list_kurtaxe_config() {
    let client = Client::new();

    let response = client
        .get(format!("{}/kurtaxe-config", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["config"].is_array());
    assert!(body["issues"].is_array());
}

#[tokio::test]
#[ignore]
async fn test_calculate_empty_roster() {
    let client = Client::new();

    let response = client
        .post(format!("{}/kurtaxe/calculate", BASE_URL))
        .json(&json!({
            "check_in": "2026-08-01",
            "check_out": "2026-08-04",
            "guests": []
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "NoGuests");
}

#[tokio::test]
#[ignore]
async fn test_calculate_invalid_range() {
    let client = Client::new();

    let response = client
        .post(format!("{}/kurtaxe/calculate", BASE_URL))
        .json(&json!({
            "check_in": "2026-08-04",
            "check_out": "2026-08-04",
            "guests": [{ "name": "Adult", "age": 30 }]
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "InvalidDateRange");
}

#[tokio::test]
#[ignore]
async fn test_calculate_with_rate_table() {
    let client = Client::new();
    let rate_id = create_rate(&client, 900, 905, "3.50", "2.00").await;

    let response = client
        .post(format!("{}/kurtaxe/calculate", BASE_URL))
        .json(&json!({
            "check_in": "2026-08-01",
            "check_out": "2026-08-04",
            "guests": [{ "name": "Test", "age": 901 }]
        }))
        .send()
        .await
        .expect("Failed to send request");

    delete_rate(&client, rate_id).await;

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["total"], "10.50");
    assert_eq!(body["high_season_nights"], 3);
    assert_eq!(body["low_season_nights"], 0);
}

#[tokio::test]
#[ignore]
async fn test_calculate_bounded() {
    let client = Client::new();
    let guest = json!({ "name": "G", "age": 30 });

    let response = client
        .post(format!("{}/kurtaxe/calculate", BASE_URL))
        .json(&json!({
            "check_in": "2026-08-01",
            "check_out": "2026-08-04",
            "guests": vec![guest.clone(); 200]
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "TooManyGuests");

    let response = client
        .post(format!("{}/kurtaxe/calculate", BASE_URL))
        .json(&json!({
            "check_in": "0001-01-01",
            "check_out": "9999-12-31",
            "guests": [guest]
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "BadValue");

    let response = client
        .post(format!("{}/kurtaxe/calculate", BASE_URL))
        .json(&json!({
            "check_in": "2026-08-01",
            "check_out": "2026-08-04",
            "guests": [{ "name": "Minus", "age": -3 }]
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_rate_entry_rejects_bad_bracket() {
    let client = Client::new();

    let response = client
        .post(format!("{}/kurtaxe-config", BASE_URL))
        .json(&json!({
            "age_min": 30,
            "age_max": 10,
            "rate_high_season": "-3.50",
            "rate_low_season": "2.00"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    let response = client
        .get(format!("{}/kurtaxe-config/{}", BASE_URL, i32::MAX))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "NoSuchData");
}

#[tokio::test]
#[ignore]
async fn test_booking_lifecycle() {
    let client = Client::new();

    // Create
    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .json(&json!({
            "check_in": "2026-08-01",
            "check_out": "2026-08-04",
            "guest_name": "Integration Test",
            "persons": 2,
            "guests": [{ "name": "A", "age": 30 }, { "name": "B", "age": 10 }],
            "price_total": "450.00",
            "laundry_booked": true
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    let booking_id = body["id"].as_i64().expect("No booking ID");
    assert_eq!(body["year"], 2026);
    assert_eq!(body["status"], "inquiry");
    assert_eq!(body["laundry_fee"], "30.00");
    assert_eq!(body["guests"].as_array().map(Vec::len), Some(2));

    // Calculating does not touch the stored total
    let response = client
        .post(format!("{}/bookings/{}/kurtaxe", BASE_URL, booking_id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let response = client
        .get(format!("{}/bookings/{}", BASE_URL, booking_id))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["kurtaxe_total"], "0.00");

    // Update
    let response = client
        .put(format!("{}/bookings/{}", BASE_URL, booking_id))
        .json(&json!({
            "check_in": "2026-08-01",
            "check_out": "2026-08-04",
            "status": "confirmed",
            "kurtaxe_total": "10.50"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "confirmed");
    assert_eq!(body["kurtaxe_total"], "10.50");

    // Delete
    let response = client
        .delete(format!("{}/bookings/{}", BASE_URL, booking_id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_booking_roster_cap() {
    let client = Client::new();
    let guest = json!({ "name": "G", "age": 30 });

    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .json(&json!({
            "check_in": "2026-08-01",
            "check_out": "2026-08-04",
            "guests": [guest, guest, guest, guest, guest]
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "TooManyGuests");
}

#[tokio::test]
#[ignore]
async fn test_list_bookings_requires_year() {
    let client = Client::new();

    let response = client
        .get(format!("{}/bookings", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_get_stats() {
    let client = Client::new();

    let response = client
        .get(format!("{}/stats?year=2026", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["year"], 2026);
    assert!(body["bookings"].is_number());
    assert!(body["net_revenue"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_missing_booking() {
    let client = Client::new();

    let response = client
        .get(format!("{}/bookings/{}", BASE_URL, i32::MAX))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}
