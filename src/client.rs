//! Typed HTTP client for the service.
//!
//! One-shot calls: no retry, no caching, no timeout tuning. Non-success
//! responses are decoded into an error carrying the server-provided message
//! when one is present.

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::api::types::{DeleteConfirmation, HealthResponse, LoginResponse};
use crate::config::Config;
use crate::models::booking::{BookingRecord, NewBooking};
use crate::models::property::{NewProperty, PropertyRecord};
use crate::models::user::{NewUser, UserSummary, UserUpdate};

#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Derives the base URL from the environment flag: the configured public
    /// origin in production (same-origin `/api` when none is set), the local
    /// development address otherwise.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let base_url = if config.is_production() {
            let origin = config.server.public_url.trim_end_matches('/');
            format!("{origin}/api")
        } else {
            format!("http://localhost:{}/api", config.server.port)
        };

        Self::new(base_url)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
        if response.status().is_success() {
            return Ok(response.json().await?);
        }
        Err(Self::api_error(response).await)
    }

    async fn api_error(response: reqwest::Response) -> ClientError {
        let status = response.status().as_u16();
        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| {
                body.get("error")
                    .or_else(|| body.get("message"))
                    .and_then(|m| m.as_str())
                    .map(String::from)
            })
            .unwrap_or_else(|| format!("Request failed with status {status}"));

        ClientError::Api { status, message }
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ClientError> {
        let response = self
            .http
            .post(format!("{}/auth/login", self.base_url))
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await?;

        Self::decode(response).await
    }

    pub async fn list_properties(&self) -> Result<Vec<PropertyRecord>, ClientError> {
        let response = self
            .http
            .get(format!("{}/properties", self.base_url))
            .send()
            .await?;

        Self::decode(response).await
    }

    pub async fn get_property(&self, id: i32) -> Result<PropertyRecord, ClientError> {
        let response = self
            .http
            .get(format!("{}/properties/{id}", self.base_url))
            .send()
            .await?;

        Self::decode(response).await
    }

    pub async fn create_property(
        &self,
        property: &NewProperty,
    ) -> Result<PropertyRecord, ClientError> {
        let response = self
            .http
            .post(format!("{}/properties", self.base_url))
            .json(property)
            .send()
            .await?;

        Self::decode(response).await
    }

    pub async fn list_bookings(&self) -> Result<Vec<BookingRecord>, ClientError> {
        let response = self
            .http
            .get(format!("{}/bookings", self.base_url))
            .send()
            .await?;

        Self::decode(response).await
    }

    pub async fn create_booking(&self, booking: &NewBooking) -> Result<BookingRecord, ClientError> {
        let response = self
            .http
            .post(format!("{}/bookings", self.base_url))
            .json(booking)
            .send()
            .await?;

        Self::decode(response).await
    }

    pub async fn list_users(&self) -> Result<Vec<UserSummary>, ClientError> {
        let response = self
            .http
            .get(format!("{}/users", self.base_url))
            .send()
            .await?;

        Self::decode(response).await
    }

    pub async fn create_user(&self, user: &NewUser) -> Result<UserSummary, ClientError> {
        let response = self
            .http
            .post(format!("{}/users", self.base_url))
            .json(user)
            .send()
            .await?;

        Self::decode(response).await
    }

    pub async fn update_user(
        &self,
        id: i32,
        update: &UserUpdate,
    ) -> Result<UserSummary, ClientError> {
        let response = self
            .http
            .put(format!("{}/users/{id}", self.base_url))
            .json(update)
            .send()
            .await?;

        Self::decode(response).await
    }

    pub async fn delete_user(&self, id: i32) -> Result<DeleteConfirmation, ClientError> {
        let response = self
            .http
            .delete(format!("{}/users/{id}", self.base_url))
            .send()
            .await?;

        Self::decode(response).await
    }

    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        let response = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;

        Self::decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_follows_the_environment() {
        let mut config = Config::default();
        let client = ApiClient::from_config(&config);
        assert_eq!(client.base_url(), "http://localhost:5000/api");

        config.general.environment = "production".to_string();
        config.server.public_url = "https://stayhaven.example/".to_string();
        let client = ApiClient::from_config(&config);
        assert_eq!(client.base_url(), "https://stayhaven.example/api");
    }
}
