use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use stayhaven::client::{ApiClient, ClientError};
use stayhaven::config::Config;
use stayhaven::db::Store;
use stayhaven::mirror::Mirror;
use stayhaven::monitor::ConnectivityMonitor;

/// Store unreachable at startup: every call is served by the mirror.
fn fallback_app() -> Router {
    let state = stayhaven::api::create_app_state_with(
        Config::default(),
        None,
        Mirror::seeded(),
        ConnectivityMonitor::down(),
    );
    stayhaven::api::router(state)
}

/// Store reachable: SQLite in-memory, single connection so the whole test
/// sees one database.
async fn store_app() -> Router {
    let store = Store::with_pool_options("sqlite::memory:", 1, 1)
        .await
        .expect("Failed to connect test store");

    let state = stayhaven::api::create_app_state_with(
        Config::default(),
        Some(store),
        Mirror::seeded(),
        ConnectivityMonitor::up(),
    );
    stayhaven::api::router(state)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, value)
}

async fn send(app: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn health_reports_the_active_backend() {
    let (status, body) = get(&fallback_app(), "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
    assert_eq!(body["message"], "Server is running");
    assert_eq!(body["database"], "fallback");

    let (_, body) = get(&store_app().await, "/api/health").await;
    assert_eq!(body["database"], "connected");
}

#[tokio::test]
async fn fallback_serves_seeded_properties_and_appends() {
    let app = fallback_app();

    let (status, body) = get(&app, "/api/properties").await;
    assert_eq!(status, StatusCode::OK);
    let listed = body.as_array().unwrap();
    assert_eq!(listed.len(), 2);
    let mut ids: Vec<i64> = listed.iter().map(|p| p["id"].as_i64().unwrap()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2]);

    let (status, created) = send(
        &app,
        "POST",
        "/api/properties",
        json!({
            "title": "Hillside Cabin",
            "price": 95,
            "location": "Hill Road"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 3);
    assert_eq!(created["status"], "approved");
    assert_eq!(created["title"], "Hillside Cabin");

    let (_, body) = get(&app, "/api/properties").await;
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn create_property_echoes_submitted_fields() {
    let app = store_app().await;

    let (status, created) = send(
        &app,
        "POST",
        "/api/properties",
        json!({
            "title": "Dune House",
            "description": "Sea-facing townhouse",
            "price": 120,
            "location": "Cabo Negro",
            "city": "Tetouan",
            "bedrooms": 3,
            "bathrooms": 2,
            "amenities": ["WiFi", "Terrace"],
            "featured": true
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["title"], "Dune House");
    assert_eq!(created["description"], "Sea-facing townhouse");
    assert_eq!(created["price"], "120");
    assert_eq!(created["location"], "Cabo Negro");
    assert_eq!(created["city"], "Tetouan");
    assert_eq!(created["bedrooms"], 3);
    assert_eq!(created["bathrooms"], 2);
    assert_eq!(created["amenities"], json!(["WiFi", "Terrace"]));
    assert_eq!(created["featured"], true);
    assert_eq!(created["status"], "approved");
    let id = created["id"].as_i64().unwrap();
    assert!(id > 0);

    // Listed exactly once after creation.
    let (_, listed) = get(&app, "/api/properties").await;
    let occurrences = listed
        .as_array()
        .unwrap()
        .iter()
        .filter(|p| p["id"].as_i64() == Some(id))
        .count();
    assert_eq!(occurrences, 1);
}

#[tokio::test]
async fn get_property_returns_404_when_absent() {
    let (status, body) = get(&fallback_app(), "/api/properties/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Property not found");

    let (status, _) = get(&store_app().await, "/api/properties/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = get(&store_app().await, "/api/properties/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Villa Azure Vista");
}

#[tokio::test]
async fn create_property_requires_title_price_and_location() {
    let app = fallback_app();

    let (status, body) = send(&app, "POST", "/api/properties", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "title is required");

    let (status, body) = send(
        &app,
        "POST",
        "/api/properties",
        json!({ "title": "No price", "location": "Somewhere" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "price is required");
}

#[tokio::test]
async fn duplicate_email_is_rejected_on_second_create() {
    let app = store_app().await;

    let (status, created) = send(
        &app,
        "POST",
        "/api/users",
        json!({
            "username": "ana",
            "email": "ana@example.com",
            "password": "secret",
            "name": "Ana"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["username"], "ana");
    assert!(created.get("password").is_none());
    assert_eq!(created["lastLogin"], "-");

    // Different username, same email.
    let (status, body) = send(
        &app,
        "POST",
        "/api/users",
        json!({
            "username": "ana2",
            "email": "ana@example.com",
            "password": "secret",
            "name": "Ana Again"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Username or email already exists");
}

#[tokio::test]
async fn delete_user_lifecycle() {
    let app = store_app().await;

    let (status, body) = send(&app, "DELETE", "/api/users/999", json!({})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");

    let (_, created) = send(
        &app,
        "POST",
        "/api/users",
        json!({
            "username": "temp",
            "email": "temp@example.com",
            "password": "secret",
            "name": "Temp"
        }),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = send(&app, "DELETE", &format!("/api/users/{id}"), json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User deleted successfully");

    let (status, _) = send(&app, "DELETE", &format!("/api/users/{id}"), json!({})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, listed) = get(&app, "/api/users").await;
    assert!(
        listed
            .as_array()
            .unwrap()
            .iter()
            .all(|u| u["id"].as_i64() != Some(id))
    );
}

#[tokio::test]
async fn update_user_merges_fields() {
    let app = store_app().await;

    let (_, created) = send(
        &app,
        "POST",
        "/api/users",
        json!({
            "username": "karim",
            "email": "karim@example.com",
            "password": "secret",
            "name": "Karim",
            "role": "owner"
        }),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/api/users/{id}"),
        json!({ "name": "Karim B.", "status": "suspended" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Karim B.");
    assert_eq!(updated["status"], "suspended");
    assert_eq!(updated["username"], "karim");
    assert_eq!(updated["role"], "owner");

    let (status, _) = send(&app, "PUT", "/api/users/999", json!({ "name": "X" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn login_matches_username_or_email_with_exact_password() {
    for app in [fallback_app(), store_app().await] {
        // Correct username, wrong password.
        let (status, body) = send(
            &app,
            "POST",
            "/api/auth/login",
            json!({ "username": "admin", "password": "nope" }),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Invalid username or password");

        // Email as the identifier, correct password.
        let (status, body) = send(
            &app,
            "POST",
            "/api/auth/login",
            json!({ "username": "admin@stayhaven.dev", "password": "admin123" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["user"]["username"], "admin");
        assert_eq!(body["user"]["role"], "admin");
        assert!(body["user"].get("password").is_none());
    }
}

#[tokio::test]
async fn bookings_default_to_pending_and_join_the_property_title() {
    for app in [fallback_app(), store_app().await] {
        let (status, created) = send(
            &app,
            "POST",
            "/api/bookings",
            json!({
                "property_id": 1,
                "guest_name": "Lina",
                "guest_email": "lina@example.com",
                "check_in": "2026-09-01",
                "check_out": "2026-09-05"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["status"], "pending");
        assert_eq!(created["guests"], 1);

        let (_, listed) = get(&app, "/api/bookings").await;
        let bookings = listed.as_array().unwrap();
        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0]["property_title"], "Villa Azure Vista");
        assert_eq!(bookings[0]["guest_name"], "Lina");
    }
}

#[tokio::test]
async fn create_booking_requires_reference_and_guest_details() {
    let (status, body) = send(
        &fallback_app(),
        "POST",
        "/api/bookings",
        json!({ "guest_name": "Lina" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "property_id is required");
}

#[tokio::test]
async fn client_round_trips_and_surfaces_server_messages() {
    let app = fallback_app();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = ApiClient::new(format!("http://{addr}/api"));

    let health = client.health().await.unwrap();
    assert_eq!(health.database, "fallback");

    let properties = client.list_properties().await.unwrap();
    assert_eq!(properties.len(), 2);

    let login = client.login("admin", "admin123").await.unwrap();
    assert!(login.success);
    assert_eq!(login.user.email, "admin@stayhaven.dev");

    match client.login("admin", "nope").await.unwrap_err() {
        ClientError::Api { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Invalid username or password");
        }
        other => panic!("Expected an API error, got: {other}"),
    }

    match client.delete_user(999).await.unwrap_err() {
        ClientError::Api { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "User not found");
        }
        other => panic!("Expected an API error, got: {other}"),
    }
}
