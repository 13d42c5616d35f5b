//! Integration tests for the batch purchase flow.

mod helpers;

use axum::http::StatusCode;
use uuid::Uuid;

use eventy_service::purchase::service::PurchaseOrder;

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_purchase_marks_tickets_sold() {
    let app = helpers::TestApp::new().await;
    let owner = app.create_test_user("owner@test.com").await;
    let buyer = app.create_test_user("buyer@test.com").await;
    let event = app.create_test_event(owner).await;
    let event_id: Uuid = event["event"]["id"].as_str().unwrap().parse().unwrap();

    let available = app.available_ticket_ids(event_id).await;
    let response = app.purchase(buyer, &available[..2]).await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["total_tickets"], 2);
    assert_eq!(response.body["data"]["payment_method"], "card");
    assert_eq!(
        response.body["data"]["purchased"].as_array().unwrap().len(),
        2
    );

    // The buyer's history shows both tickets
    let history = app
        .request("GET", &format!("/api/users/{}/tickets", buyer), None)
        .await;
    assert_eq!(history.status, StatusCode::OK);
    assert_eq!(history.body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_purchase_unknown_ticket_reports_unresolved_count() {
    let app = helpers::TestApp::new().await;
    let owner = app.create_test_user("owner2@test.com").await;
    let buyer = app.create_test_user("buyer2@test.com").await;
    let event = app.create_test_event(owner).await;
    let event_id: Uuid = event["event"]["id"].as_str().unwrap().parse().unwrap();

    let available = app.available_ticket_ids(event_id).await;
    let ids = vec![available[0], Uuid::new_v4(), Uuid::new_v4()];
    let response = app.purchase(buyer, &ids).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
    assert_eq!(response.body["details"]["missing"], 2);

    // The resolvable ticket was not sold
    let after = app.available_ticket_ids(event_id).await;
    assert!(after.contains(&available[0]));
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_purchase_sold_ticket_names_conflicting_ids() {
    let app = helpers::TestApp::new().await;
    let owner = app.create_test_user("owner3@test.com").await;
    let first = app.create_test_user("first@test.com").await;
    let second = app.create_test_user("second@test.com").await;
    let event = app.create_test_event(owner).await;
    let event_id: Uuid = event["event"]["id"].as_str().unwrap().parse().unwrap();

    let available = app.available_ticket_ids(event_id).await;
    let contested = available[0];

    let response = app.purchase(first, &[contested]).await;
    assert_eq!(response.status, StatusCode::CREATED);

    let response = app.purchase(second, &[contested]).await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "CONFLICT");
    assert_eq!(
        response.body["details"]["sold_ticket_ids"][0],
        contested.to_string()
    );
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_failed_batch_leaves_all_tickets_available() {
    let app = helpers::TestApp::new().await;
    let owner = app.create_test_user("owner4@test.com").await;
    let first = app.create_test_user("first4@test.com").await;
    let second = app.create_test_user("second4@test.com").await;
    let event = app.create_test_event(owner).await;
    let event_id: Uuid = event["event"]["id"].as_str().unwrap().parse().unwrap();

    let available = app.available_ticket_ids(event_id).await;
    let (a, b) = (available[0], available[1]);

    // B is sold to someone else first
    let response = app.purchase(first, &[b]).await;
    assert_eq!(response.status, StatusCode::CREATED);

    // The [A, B] batch fails as a whole; A must stay available
    let response = app.purchase(second, &[a, b]).await;
    assert_eq!(response.status, StatusCode::CONFLICT);

    let after = app.available_ticket_ids(event_id).await;
    assert!(after.contains(&a));

    let history = app
        .request("GET", &format!("/api/users/{}/tickets", second), None)
        .await;
    assert_eq!(history.body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_duplicate_ids_in_batch_collapse() {
    let app = helpers::TestApp::new().await;
    let owner = app.create_test_user("owner5@test.com").await;
    let buyer = app.create_test_user("buyer5@test.com").await;
    let event = app.create_test_event(owner).await;
    let event_id: Uuid = event["event"]["id"].as_str().unwrap().parse().unwrap();

    let available = app.available_ticket_ids(event_id).await;
    let response = app.purchase(buyer, &[available[0], available[0]]).await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["total_tickets"], 1);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_concurrent_purchases_never_oversell() {
    let app = helpers::TestApp::new().await;
    let owner = app.create_test_user("owner6@test.com").await;
    let event = app.create_test_event(owner).await;
    let event_id: Uuid = event["event"]["id"].as_str().unwrap().parse().unwrap();

    let available = app.available_ticket_ids(event_id).await;
    let contested = available[0];

    let mut handles = Vec::new();
    for i in 0..8 {
        let buyer = app
            .create_test_user(&format!("racer{}@test.com", i))
            .await;
        let service = app.state.purchase_service.clone();
        handles.push(tokio::spawn(async move {
            service
                .purchase(PurchaseOrder {
                    ticket_ids: vec![contested],
                    buyer_id: buyer,
                    payment_method: "card".to_string(),
                    contact_info: None,
                })
                .await
        }));
    }

    let mut successes = 0;
    for handle in handles {
        if handle.await.expect("task panicked").is_ok() {
            successes += 1;
        }
    }
    assert_eq!(successes, 1, "exactly one buyer must win the ticket");

    let (sold,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM sold_tickets WHERE ticket_id = $1")
        .bind(contested)
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(sold, 1);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_divergent_contact_info_is_snapshotted() {
    let app = helpers::TestApp::new().await;
    let owner = app.create_test_user("owner7@test.com").await;
    let buyer = app.create_test_user("buyer7@test.com").await;
    let event = app.create_test_event(owner).await;
    let event_id: Uuid = event["event"]["id"].as_str().unwrap().parse().unwrap();

    let available = app.available_ticket_ids(event_id).await;
    let body = serde_json::json!({
        "ticket_ids": [available[0]],
        "buyer_id": buyer,
        "payment_method": "card",
        "contact_info": {
            "name": "Someone Else",
            "email": "gift@test.com",
            "phone": "+37129999999",
            "agree_to_terms": true,
            "marketing_consent": true,
        },
    });

    let response = app.request("POST", "/api/tickets/purchase", Some(body)).await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.body["data"]["contact_info_id"].is_string());

    // Consent flag flipped on the profile as a side effect
    let (consent,): (bool,) = sqlx::query_as("SELECT marketing_consent FROM users WHERE id = $1")
        .bind(buyer)
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert!(consent);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_matching_contact_info_is_not_snapshotted() {
    let app = helpers::TestApp::new().await;
    let owner = app.create_test_user("owner8@test.com").await;
    let buyer = app.create_test_user("buyer8@test.com").await;
    let event = app.create_test_event(owner).await;
    let event_id: Uuid = event["event"]["id"].as_str().unwrap().parse().unwrap();

    let available = app.available_ticket_ids(event_id).await;
    let body = serde_json::json!({
        "ticket_ids": [available[0]],
        "buyer_id": buyer,
        "payment_method": "card",
        "contact_info": {
            // Matches the profile created by create_test_user
            "name": "Test Buyer",
            "email": "buyer8@test.com",
            "phone": "+37120000000",
            "agree_to_terms": true,
        },
    });

    let response = app.request("POST", "/api/tickets/purchase", Some(body)).await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.body["data"]["contact_info_id"].is_null());
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_purchase_unknown_buyer() {
    let app = helpers::TestApp::new().await;
    let owner = app.create_test_user("owner9@test.com").await;
    let event = app.create_test_event(owner).await;
    let event_id: Uuid = event["event"]["id"].as_str().unwrap().parse().unwrap();

    let available = app.available_ticket_ids(event_id).await;
    let response = app.purchase(Uuid::new_v4(), &available[..1]).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
