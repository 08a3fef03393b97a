//! Wire contract between the dashboard and the OctoFit tracker API.
//!
//! Everything that touches the shape of requests and responses lives here:
//! the base URL, the endpoint table, list-envelope decoding and the
//! partial user update body.

use core_types::{RecordId, User};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Base URL used when no host fragment is configured.
pub const LOCAL_API_BASE: &str = "http://localhost:8000/api";

/// Errors from talking to the tracker API.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("{0}")]
    Transport(String),

    #[error("HTTP error! status: {status}")]
    Status { status: u16 },

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Request aborted")]
    Aborted,
}

impl FetchError {
    /// Whether the request was cancelled by its owner rather than failing.
    pub fn is_aborted(&self) -> bool {
        matches!(self, FetchError::Aborted)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, FetchError>;

/// Map an HTTP status onto success or [`FetchError::Status`].
pub fn check_status(status: u16) -> Result<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(FetchError::Status { status })
    }
}

/// Where the tracker API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(LOCAL_API_BASE)
    }
}

impl ApiConfig {
    /// Use an explicit base URL such as `https://host/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build the Codespaces URL `https://{fragment}-8000.app.github.dev/api`.
    pub fn from_host_fragment(fragment: &str) -> Self {
        Self::new(format!("https://{}-8000.app.github.dev/api", fragment.trim()))
    }

    /// Resolve configuration from optional overrides.
    ///
    /// An explicit base URL wins over a host fragment; with neither the
    /// local development API is used. Blank values count as unset.
    pub fn resolve(base_url: Option<&str>, host_fragment: Option<&str>) -> Self {
        let base_url = base_url.filter(|s| !s.trim().is_empty());
        let host_fragment = host_fragment.filter(|s| !s.trim().is_empty());

        match (base_url, host_fragment) {
            (Some(url), _) => Self::new(url.trim()),
            (None, Some(fragment)) => Self::from_host_fragment(fragment),
            (None, None) => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint.
    pub fn url(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }
}

/// Tracker API endpoints used by the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Activities,
    Leaderboard,
    Teams,
    Users,
    Workouts,
    /// A single user, target of partial updates.
    User(RecordId),
}

impl Endpoint {
    /// Path relative to the API base, always with a trailing slash.
    pub fn path(&self) -> String {
        match self {
            Endpoint::Activities => "/activities/".to_string(),
            Endpoint::Leaderboard => "/leaderboard/".to_string(),
            Endpoint::Teams => "/teams/".to_string(),
            Endpoint::Users => "/users/".to_string(),
            Endpoint::Workouts => "/workouts/".to_string(),
            Endpoint::User(id) => format!("/users/{}/", id),
        }
    }

    /// Human label used in log lines.
    pub fn label(&self) -> &'static str {
        match self {
            Endpoint::Activities => "activities",
            Endpoint::Leaderboard => "leaderboard",
            Endpoint::Teams => "teams",
            Endpoint::Users => "users",
            Endpoint::Workouts => "workouts",
            Endpoint::User(_) => "user",
        }
    }
}

/// Body of `PATCH /users/{id}/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    pub name: String,
    pub email: String,
    pub team_id: String,
}

impl UserUpdate {
    /// Pre-fill from a user record; absent values become empty strings.
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            team_id: user.team_id.clone().unwrap_or_default(),
        }
    }
}

/// Decode a list response body.
///
/// Accepts a bare array or an envelope with a `results` array. Anything
/// else decodes as an empty list. Elements that are not objects are
/// skipped.
pub fn decode_list<T: DeserializeOwned>(body: &str) -> Result<Vec<T>> {
    let value: Value = serde_json::from_str(body)?;
    Ok(records_from_value(value))
}

/// Decode a single-record response body, normalizing its identifier.
pub fn decode_record<T: DeserializeOwned>(body: &str) -> Result<T> {
    let value: Value = serde_json::from_str(body)?;
    let record = normalize_record(value)
        .ok_or_else(|| FetchError::Decode("expected a JSON object".to_string()))?;
    Ok(serde_json::from_value(record)?)
}

/// Unwrap the list envelope and decode each record.
pub fn records_from_value<T: DeserializeOwned>(value: Value) -> Vec<T> {
    let items = match unwrap_envelope(value) {
        Some(items) => items,
        None => {
            tracing::warn!("list payload is neither an array nor a results envelope");
            return Vec::new();
        }
    };

    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let Some(record) = normalize_record(item) else {
                tracing::warn!(index, "skipping non-object list element");
                return None;
            };
            match serde_json::from_value(record) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(index, error = %e, "skipping undecodable record");
                    None
                }
            }
        })
        .collect()
}

/// Prefer `results` when present, otherwise the payload itself.
fn unwrap_envelope(value: Value) -> Option<Vec<Value>> {
    match value {
        Value::Array(items) => Some(items),
        Value::Object(mut map) => match map.remove("results") {
            Some(Value::Array(items)) => Some(items),
            _ => None,
        },
        _ => None,
    }
}

/// Move `_id` into the canonical `id` field.
///
/// When a record carries both, `_id` wins. Returns `None` for non-objects.
pub fn normalize_record(value: Value) -> Option<Value> {
    let Value::Object(mut map) = value else {
        return None;
    };
    canonicalize_id(&mut map);
    Some(Value::Object(map))
}

fn canonicalize_id(map: &mut Map<String, Value>) {
    match map.remove("_id") {
        Some(Value::Null) | None => {}
        Some(id) => {
            map.insert("id".to_string(), id);
        }
    }
    if matches!(map.get("id"), Some(Value::Null)) {
        map.remove("id");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{Activity, LeaderboardEntry, Team, Workout};
    use serde_json::json;

    #[test]
    fn test_config_from_host_fragment() {
        let config = ApiConfig::from_host_fragment("octo-space");
        assert_eq!(
            config.url(&Endpoint::Users),
            "https://octo-space-8000.app.github.dev/api/users/"
        );
    }

    #[test]
    fn test_user_update_target_url() {
        let config = ApiConfig::from_host_fragment("octo-space");
        let url = config.url(&Endpoint::User("u1".into()));

        assert_eq!(url, "https://octo-space-8000.app.github.dev/api/users/u1/");
        assert!(url.ends_with("/api/users/u1/"));
    }

    #[test]
    fn test_config_resolution_order() {
        assert_eq!(
            ApiConfig::resolve(Some("https://api.example.com/api/"), Some("ignored")).base_url(),
            "https://api.example.com/api"
        );
        assert_eq!(
            ApiConfig::resolve(Some("  "), Some("octo")).base_url(),
            "https://octo-8000.app.github.dev/api"
        );
        assert_eq!(ApiConfig::resolve(None, None).base_url(), LOCAL_API_BASE);
    }

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(Endpoint::Activities.path(), "/activities/");
        assert_eq!(Endpoint::Leaderboard.path(), "/leaderboard/");
        assert_eq!(Endpoint::Teams.path(), "/teams/");
        assert_eq!(Endpoint::Workouts.path(), "/workouts/");
        assert_eq!(Endpoint::User(RecordId::from("u1")).path(), "/users/u1/");
    }

    #[test]
    fn test_check_status() {
        assert!(check_status(200).is_ok());
        assert!(check_status(204).is_ok());
        assert_eq!(check_status(404), Err(FetchError::Status { status: 404 }));
        assert_eq!(
            FetchError::Status { status: 500 }.to_string(),
            "HTTP error! status: 500"
        );
    }

    #[test]
    fn test_decode_bare_array() {
        let users: Vec<User> =
            decode_list(r#"[{"_id":"u1","name":"A"},{"_id":"u2","name":"B"}]"#).unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id.as_str(), "u1");
        assert_eq!(users[1].name, "B");
    }

    #[test]
    fn test_decode_results_envelope() {
        let body = json!({
            "count": 2,
            "next": null,
            "results": [{"id": 1, "total_points": 50}, {"id": 2, "total_points": 80}]
        })
        .to_string();

        let entries: Vec<LeaderboardEntry> = decode_list(&body).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id.as_str(), "1");
        assert_eq!(entries[1].total_points.as_ref().unwrap().as_str(), "80");
    }

    #[test]
    fn test_decode_unexpected_shape_is_empty() {
        let teams: Vec<Team> = decode_list(r#"{"detail":"nothing here"}"#).unwrap();
        assert!(teams.is_empty());

        let teams: Vec<Team> = decode_list("42").unwrap();
        assert!(teams.is_empty());
    }

    #[test]
    fn test_decode_skips_non_objects() {
        let teams: Vec<Team> = decode_list(r#"[{"_id":"t1","name":"Alpha"}, 7, null]"#).unwrap();
        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].name, "Alpha");
    }

    #[test]
    fn test_decode_keeps_records_with_null_or_numeric_fields() {
        let users: Vec<User> = decode_list(
            &json!([
                {"_id": "u1", "name": "A", "email": "a@x.com", "team_id": 5},
                {"_id": "u2", "name": null, "email": null, "team_id": null}
            ])
            .to_string(),
        )
        .unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].team_ref(), Some("5"));
        assert!(users[1].name.is_empty());
        assert!(users[1].team_ref().is_none());

        let teams: Vec<Team> =
            decode_list(r#"[{"_id":"t1","name":"Alpha","description":null}]"#).unwrap();
        assert_eq!(teams.len(), 1);

        let activities: Vec<Activity> = decode_list(
            r#"{"results":[{"id":1,"user":7,"activity_type":null,"distance":"5.20"}]}"#,
        )
        .unwrap();
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].user_label(), "7");

        let entries: Vec<LeaderboardEntry> =
            decode_list(r#"[{"id":1,"team":3,"team_name":null,"total_points":40}]"#).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].team_label(), "3");

        let workouts: Vec<Workout> =
            decode_list(r#"[{"id":1,"name":"Run","difficulty":null,"duration":{}}]"#).unwrap();
        assert_eq!(workouts.len(), 1);
        assert_eq!(workouts[0].difficulty_badge(), "bg-secondary");
    }

    #[test]
    fn test_decode_invalid_json_is_error() {
        let result: Result<Vec<Team>> = decode_list("<html>");
        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[test]
    fn test_underscore_id_wins_over_id() {
        let teams: Vec<Team> = decode_list(r#"[{"_id":"t1","id":99,"name":"Alpha"}]"#).unwrap();
        assert_eq!(teams[0].id.as_str(), "t1");

        let teams: Vec<Team> = decode_list(r#"[{"_id":null,"id":99}]"#).unwrap();
        assert_eq!(teams[0].id.as_str(), "99");
    }

    #[test]
    fn test_decode_record() {
        let user: User =
            decode_record(r#"{"_id":"u1","name":"B","email":"a@x.com","team_id":"t1"}"#).unwrap();
        assert_eq!(user.id.as_str(), "u1");
        assert_eq!(user.name, "B");

        let result: Result<User> = decode_record("[]");
        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[test]
    fn test_user_update_from_user() {
        let user = User {
            id: RecordId::from("u1"),
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            ..Default::default()
        };

        let update = UserUpdate::from_user(&user);

        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"name": "A", "email": "a@x.com", "team_id": ""})
        );
    }
}
