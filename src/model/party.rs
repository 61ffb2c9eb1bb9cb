use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A party record as served by the events API. Server-assigned id;
/// the client never edits these in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Party {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(with = "crate::model::datetime::rfc3339_millis")]
    pub date: DateTime<Utc>,
    pub location: String,
}

/// Body of `POST /events`. The created party in the response is not consumed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartyDraft {
    pub name: String,
    pub description: String,
    #[serde(with = "crate::model::datetime::rfc3339_millis")]
    pub date: DateTime<Utc>,
    pub location: String,
}
