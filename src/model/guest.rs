use serde::{Deserialize, Serialize};

/// A person record. Guests are linked to parties only via RSVPs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    pub id: i64,
    pub name: String,
}

/// Link record associating one guest with one party. Read-only on the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rsvp {
    pub guest_id: i64,
    pub event_id: i64,
}
