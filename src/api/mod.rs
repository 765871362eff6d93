use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post, put},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Config;
use crate::db::Store;
use crate::mirror::Mirror;
use crate::monitor::ConnectivityMonitor;
use crate::services::{
    BookingService, FailoverBookingService, FailoverPropertyService, FailoverUserService,
    PropertyService, SeaOrmBookingService, SeaOrmPropertyService, SeaOrmUserService, UserService,
};

pub mod auth;
pub mod bookings;
mod error;
pub mod properties;
pub mod system;
pub mod types;
pub mod users;
pub mod validation;

pub use error::ApiError;

pub struct AppState {
    pub config: Config,

    pub properties: Arc<dyn PropertyService>,

    pub bookings: Arc<dyn BookingService>,

    pub users: Arc<dyn UserService>,

    pub monitor: ConnectivityMonitor,
}

/// Probes the relational store once and wires every operation through the
/// failover layer. A failed probe is not an error: the process starts in
/// fallback mode and stays there.
pub async fn create_app_state(config: Config) -> Arc<AppState> {
    let store = match Store::connect(&config).await {
        Ok(store) => {
            info!("Connected to database");
            Some(store)
        }
        Err(err) => {
            warn!("Error connecting to database: {err}");
            warn!("Running in fallback mode without database");
            None
        }
    };

    let monitor = ConnectivityMonitor::new(store.is_some());
    create_app_state_with(config, store, Mirror::seeded(), monitor)
}

/// Explicit wiring for tests and embedders: backends and connectivity are
/// injected instead of probed.
pub fn create_app_state_with(
    config: Config,
    store: Option<Store>,
    mirror: Mirror,
    monitor: ConnectivityMonitor,
) -> Arc<AppState> {
    let properties: Arc<dyn PropertyService> = Arc::new(FailoverPropertyService::new(
        store.clone().map(SeaOrmPropertyService::new),
        mirror.clone(),
        monitor.clone(),
    ));

    let bookings: Arc<dyn BookingService> = Arc::new(FailoverBookingService::new(
        store.clone().map(SeaOrmBookingService::new),
        mirror.clone(),
        monitor.clone(),
    ));

    let users: Arc<dyn UserService> = Arc::new(FailoverUserService::new(
        store.map(SeaOrmUserService::new),
        mirror,
        monitor.clone(),
    ));

    Arc::new(AppState {
        config,
        properties,
        bookings,
        users,
        monitor,
    })
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = state.config.server.cors_allowed_origins.clone();

    let api_router = Router::new()
        .route("/auth/login", post(auth::login))
        .route(
            "/properties",
            get(properties::list_properties).post(properties::create_property),
        )
        .route("/properties/{id}", get(properties::get_property))
        .route(
            "/bookings",
            get(bookings::list_bookings).post(bookings::create_booking),
        )
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/{id}",
            put(users::update_user).delete(users::delete_user),
        )
        .route("/health", get(system::health))
        .with_state(state);

    let cors_layer = if cors_origins.contains(&"*".to_string()) {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .nest("/api", api_router)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}
