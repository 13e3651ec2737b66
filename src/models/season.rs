use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Registration window as reported by `GET /seasons/current`. Fetched once at
/// startup and never mutated locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub next_open: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub enum SeasonStatus {
    Open(Season),
    Closed { next_open: Option<DateTime<Utc>> },
}
