//! Core types for the OctoFit dashboard.
//!
//! This crate defines the records the dashboard reads from the tracker API
//! (users, teams, activities, workouts and leaderboard entries) together with
//! the small display rules every screen shares.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Placeholder shown where a value is missing.
pub const MISSING: &str = "-";

/// Canonical record identifier.
///
/// The API sends identifiers either as strings (`"65a1..."`) or integers;
/// both are kept in their textual form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(String);

impl RecordId {
    /// Create an identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the textual form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier is empty (record arrived without one).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        wire::text(deserializer).map(Self)
    }
}

/// A numeric value displayed exactly as the API sent it.
///
/// Django serializes decimals as strings and integers as numbers, so both
/// are accepted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Quantity(String);

impl Quantity {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value, if the text parses as one.
    pub fn as_f64(&self) -> Option<f64> {
        self.0.trim().parse().ok()
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0.parse::<serde_json::Number>() {
            Ok(n) => n.serialize(serializer),
            Err(_) => serializer.serialize_str(&self.0),
        }
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        wire::text(deserializer).map(Self)
    }
}

/// Loosely typed wire fields.
///
/// The API may send any text field as `null`, and foreign keys as integers.
/// Both read as text so one odd field never drops a whole record.
mod wire {
    use super::*;

    fn scalar_text(value: Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Text field; `null` and non-scalars read as empty.
    pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Value::deserialize(deserializer).map(|v| scalar_text(v).unwrap_or_default())
    }

    /// Optional text field; `null` and non-scalars read as absent.
    pub fn opt_text<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        Value::deserialize(deserializer).map(scalar_text)
    }
}

/// A registered user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default, deserialize_with = "wire::text")]
    pub name: String,
    #[serde(default, deserialize_with = "wire::text")]
    pub email: String,
    #[serde(default, deserialize_with = "wire::opt_text", skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    /// Team name inlined by the API, when it bothers to.
    #[serde(default, deserialize_with = "wire::opt_text", skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl User {
    /// Inlined team name, ignoring empty strings.
    pub fn inline_team_name(&self) -> Option<&str> {
        non_empty(self.team_name.as_deref())
    }

    /// Assigned team id, ignoring empty strings.
    pub fn team_ref(&self) -> Option<&str> {
        non_empty(self.team_id.as_deref())
    }
}

/// A team users can join.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Team {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default, deserialize_with = "wire::text")]
    pub name: String,
    #[serde(default, deserialize_with = "wire::text")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_count: Option<Quantity>,
    #[serde(default, deserialize_with = "wire::opt_text", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Team {
    /// Member count, `0` when the API omits it.
    pub fn members_label(&self) -> String {
        self.member_count
            .as_ref()
            .map(|q| q.to_string())
            .unwrap_or_else(|| "0".to_string())
    }
}

/// A logged fitness activity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default, deserialize_with = "wire::opt_text", skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text", skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "wire::text")]
    pub activity_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Quantity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<Quantity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories_burned: Option<Quantity>,
    #[serde(default, deserialize_with = "wire::opt_text", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Activity {
    /// Who performed the activity: `user_name`, then `user`, then `user_id`.
    pub fn user_label(&self) -> &str {
        non_empty(self.user_name.as_deref())
            .or_else(|| non_empty(self.user.as_deref()))
            .or_else(|| non_empty(self.user_id.as_deref()))
            .unwrap_or(MISSING)
    }
}

/// A suggested workout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default, deserialize_with = "wire::text")]
    pub name: String,
    #[serde(default, deserialize_with = "wire::text")]
    pub description: String,
    #[serde(default, deserialize_with = "wire::text")]
    pub activity_type: String,
    #[serde(default, deserialize_with = "wire::text")]
    pub difficulty: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Quantity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories_estimate: Option<Quantity>,
}

impl Workout {
    /// Bootstrap badge classes for the workout difficulty.
    pub fn difficulty_badge(&self) -> &'static str {
        difficulty_badge(&self.difficulty)
    }
}

/// One row of the team leaderboard.
///
/// There is no rank field: rank is the entry's position in the list as the
/// server returned it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default, deserialize_with = "wire::opt_text", skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text", skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text", skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_points: Option<Quantity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_activities: Option<Quantity>,
}

impl LeaderboardEntry {
    /// Team shown on the row: `team_name`, then `team`, then `team_id`.
    pub fn team_label(&self) -> &str {
        non_empty(self.team_name.as_deref())
            .or_else(|| non_empty(self.team.as_deref()))
            .or_else(|| non_empty(self.team_id.as_deref()))
            .unwrap_or(MISSING)
    }
}

/// 1-based rank for a list position.
pub fn rank(index: usize) -> usize {
    index + 1
}

/// Badge class for a leaderboard position (0-based).
pub fn rank_badge(index: usize) -> &'static str {
    match index {
        0 => "rank-badge rank-1",
        1 => "rank-badge rank-2",
        2 => "rank-badge rank-3",
        _ => "rank-badge rank-other",
    }
}

/// Badge classes for a difficulty label.
pub fn difficulty_badge(difficulty: &str) -> &'static str {
    match difficulty {
        "Easy" | "Beginner" => "bg-success",
        "Medium" | "Intermediate" => "bg-warning text-dark",
        "Hard" | "Advanced" => "bg-danger",
        _ => "bg-secondary",
    }
}

/// Format an API timestamp or date as `M/D/YYYY`.
///
/// Missing values render as [`MISSING`]; values that do not parse are shown
/// verbatim.
pub fn display_date(value: Option<&str>) -> String {
    let Some(raw) = non_empty(value) else {
        return MISSING.to_string();
    };
    let raw = raw.trim();

    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

    match date {
        Ok(d) => d.format("%-m/%-d/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Display an optional quantity, falling back to [`MISSING`].
pub fn display_quantity(value: Option<&Quantity>) -> String {
    value
        .map(|q| q.to_string())
        .unwrap_or_else(|| MISSING.to_string())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}
