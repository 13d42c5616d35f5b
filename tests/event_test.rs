//! Integration tests for event creation, inventory generation, and deletion.

mod helpers;

use std::collections::HashSet;

use axum::http::StatusCode;
use uuid::Uuid;

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_create_event_generates_complete_inventory() {
    let app = helpers::TestApp::new().await;
    let owner = app.create_test_user("owner@test.com").await;

    let event = app.create_test_event(owner).await;
    let event_id: Uuid = event["event"]["id"].as_str().unwrap().parse().unwrap();

    // 2 zones (2 + 3 seats) x 2 dates = 10 tickets, all available
    let available = app.available_ticket_ids(event_id).await;
    assert_eq!(available.len(), 10);

    // Every (zone, date) pair carries seats 1..=seat_count exactly once
    let rows: Vec<(Uuid, Uuid, i32)> = sqlx::query_as(
        r#"SELECT t.event_zone_id, t.event_date_id, t.seat_number
           FROM tickets t
           JOIN event_zones z ON z.id = t.event_zone_id
           WHERE z.event_id = $1"#,
    )
    .bind(event_id)
    .fetch_all(&app.db_pool)
    .await
    .expect("Failed to query tickets");

    let distinct: HashSet<_> = rows.iter().collect();
    assert_eq!(distinct.len(), rows.len(), "duplicate seat generated");

    for (zone_id, seat_count) in sqlx::query_as::<_, (Uuid, i32)>(
        "SELECT id, seat_count FROM event_zones WHERE event_id = $1",
    )
    .bind(event_id)
    .fetch_all(&app.db_pool)
    .await
    .expect("Failed to query zones")
    {
        let seats: Vec<i32> = rows
            .iter()
            .filter(|(z, _, _)| *z == zone_id)
            .map(|(_, _, s)| *s)
            .collect();
        // Two dates, so each seat number appears twice per zone
        assert_eq!(seats.len(), (seat_count * 2) as usize);
        for seat in 1..=seat_count {
            assert_eq!(seats.iter().filter(|s| **s == seat).count(), 2);
        }
    }
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_create_event_requires_zone_and_date() {
    let app = helpers::TestApp::new().await;
    let owner = app.create_test_user("owner2@test.com").await;

    let body = serde_json::json!({
        "owner_id": owner,
        "title": "No Zones",
        "location": "Riga",
        "dates": [{ "date": "2026-07-01T19:00:00Z" }],
        "zones": [],
    });

    let response = app.request("POST", "/api/events", Some(body)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_get_event_returns_details() {
    let app = helpers::TestApp::new().await;
    let owner = app.create_test_user("owner3@test.com").await;
    let event = app.create_test_event(owner).await;
    let event_id = event["event"]["id"].as_str().unwrap();

    let response = app
        .request("GET", &format!("/api/events/{}", event_id), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["event"]["title"], "Summer Fest");
    assert_eq!(response.body["data"]["dates"].as_array().unwrap().len(), 2);
    assert_eq!(response.body["data"]["zones"].as_array().unwrap().len(), 2);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_delete_event_without_sales() {
    let app = helpers::TestApp::new().await;
    let owner = app.create_test_user("owner4@test.com").await;
    let event = app.create_test_event(owner).await;
    let event_id: Uuid = event["event"]["id"].as_str().unwrap().parse().unwrap();

    let check = app
        .request("GET", &format!("/api/events/{}/deletable", event_id), None)
        .await;
    assert_eq!(check.status, StatusCode::OK);
    assert_eq!(check.body["data"]["deletable"], true);

    let response = app
        .request("DELETE", &format!("/api/events/{}", event_id), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // Everything cascades: tickets, zones, dates, social media, the event row
    let (tickets,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM tickets t JOIN event_zones z ON z.id = t.event_zone_id WHERE z.event_id = $1",
    )
    .bind(event_id)
    .fetch_one(&app.db_pool)
    .await
    .unwrap();
    assert_eq!(tickets, 0);

    let lookup = app
        .request("GET", &format!("/api/events/{}", event_id), None)
        .await;
    assert_eq!(lookup.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_delete_event_with_sold_tickets_is_rejected() {
    let app = helpers::TestApp::new().await;
    let owner = app.create_test_user("owner5@test.com").await;
    let buyer = app.create_test_user("buyer5@test.com").await;
    let event = app.create_test_event(owner).await;
    let event_id: Uuid = event["event"]["id"].as_str().unwrap().parse().unwrap();

    let available = app.available_ticket_ids(event_id).await;
    let purchase = app.purchase(buyer, &available[..1]).await;
    assert_eq!(purchase.status, StatusCode::CREATED);

    let check = app
        .request("GET", &format!("/api/events/{}/deletable", event_id), None)
        .await;
    assert_eq!(check.body["data"]["deletable"], false);

    let response = app
        .request("DELETE", &format!("/api/events/{}", event_id), None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "INVALID_STATE");
    assert_eq!(
        response.body["message"],
        "Cannot delete event with sold tickets. Event has purchased tickets."
    );

    // Nothing was deleted
    let lookup = app
        .request("GET", &format!("/api/events/{}", event_id), None)
        .await;
    assert_eq!(lookup.status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_delete_after_stale_deletability_check_is_rejected() {
    let app = helpers::TestApp::new().await;
    let owner = app.create_test_user("owner9@test.com").await;
    let buyer = app.create_test_user("buyer9@test.com").await;
    let event = app.create_test_event(owner).await;
    let event_id: Uuid = event["event"]["id"].as_str().unwrap().parse().unwrap();

    // The deletability answer goes stale the moment a purchase commits.
    let check = app
        .request("GET", &format!("/api/events/{}/deletable", event_id), None)
        .await;
    assert_eq!(check.body["data"]["deletable"], true);

    let available = app.available_ticket_ids(event_id).await;
    let purchase = app.purchase(buyer, &available[..1]).await;
    assert_eq!(purchase.status, StatusCode::CREATED);

    // The delete re-checks inside its own transaction, so the sale is
    // seen and the request fails cleanly instead of tripping the
    // sold_tickets foreign key.
    let response = app
        .request("DELETE", &format!("/api/events/{}", event_id), None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "INVALID_STATE");

    let lookup = app
        .request("GET", &format!("/api/events/{}", event_id), None)
        .await;
    assert_eq!(lookup.status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_availability_excludes_sold_tickets() {
    let app = helpers::TestApp::new().await;
    let owner = app.create_test_user("owner6@test.com").await;
    let buyer = app.create_test_user("buyer6@test.com").await;
    let event = app.create_test_event(owner).await;
    let event_id: Uuid = event["event"]["id"].as_str().unwrap().parse().unwrap();

    let before = app.available_ticket_ids(event_id).await;
    let bought = &before[..2];
    let purchase = app.purchase(buyer, bought).await;
    assert_eq!(purchase.status, StatusCode::CREATED);

    let after = app.available_ticket_ids(event_id).await;
    assert_eq!(after.len(), before.len() - 2);
    for id in bought {
        assert!(!after.contains(id));
    }
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_availability_filters_by_zone() {
    let app = helpers::TestApp::new().await;
    let owner = app.create_test_user("owner7@test.com").await;
    let event = app.create_test_event(owner).await;
    let event_id = event["event"]["id"].as_str().unwrap();

    let vip_zone = event["zones"]
        .as_array()
        .unwrap()
        .iter()
        .find(|z| z["name"] == "VIP")
        .unwrap();
    let zone_id = vip_zone["id"].as_str().unwrap();

    let response = app
        .request(
            "GET",
            &format!(
                "/api/tickets/event/{}?zone_id={}",
                event_id, zone_id
            ),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    // VIP has 2 seats across 2 dates
    let tickets = response.body["data"].as_array().unwrap();
    assert_eq!(tickets.len(), 4);
    for t in tickets {
        assert_eq!(t["zone_name"], "VIP");
    }
}
