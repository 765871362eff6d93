use serde::{Deserialize, Serialize};

/// User shape for listing and management responses. Never carries the
/// password. Date fields are normalized to `YYYY-MM-DD` ("-" when absent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub name: String,
    pub phone: String,
    pub role: String,
    pub status: String,
    #[serde(rename = "registeredDate")]
    pub registered_date: String,
    #[serde(rename = "lastLogin")]
    pub last_login: String,
}

/// Slimmer shape returned by a successful login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub name: String,
    pub role: String,
    pub status: String,
}

/// Validated input for user creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Field-merge update for a user; absent fields stay unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

pub const DEFAULT_USER_ROLE: &str = "customer";
pub const DEFAULT_USER_STATUS: &str = "active";

/// Date part of an RFC 3339 timestamp.
#[must_use]
pub fn date_only(timestamp: &str) -> String {
    timestamp
        .split('T')
        .next()
        .unwrap_or(timestamp)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_only_strips_the_time_part() {
        assert_eq!(date_only("2026-08-07T12:34:56+00:00"), "2026-08-07");
        assert_eq!(date_only("2026-08-07"), "2026-08-07");
    }
}
