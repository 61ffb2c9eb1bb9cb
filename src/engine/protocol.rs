use thiserror::Error;

use crate::model::datetime::compose_event_date;
use crate::model::party::PartyDraft;
use crate::view::Page;

/// User gestures, sent from the UI thread to the engine.
pub enum EngineCommand {
    SelectParty(i64),
    RemoveParty(i64),
    SubmitNewParty(NewPartyInput),
}

/// Engine output: a freshly rendered page after each handled command.
pub enum EngineResponse {
    Page(Page),
}

/// Raw new-party form input, exactly as typed. Validated and composed into
/// a `PartyDraft` on the engine side.
#[derive(Debug, Clone, Default)]
pub struct NewPartyInput {
    pub name: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
}

#[derive(Debug, Error)]
pub enum FormError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("invalid date or time: {0}")]
    BadTimestamp(#[from] chrono::ParseError),
}

impl NewPartyInput {
    /// Checks that every field is present and combines the separate date and
    /// time inputs into the single timestamp the API expects.
    pub fn into_draft(self) -> Result<PartyDraft, FormError> {
        let required = [
            ("name", &self.name),
            ("description", &self.description),
            ("date", &self.date),
            ("time", &self.time),
            ("location", &self.location),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(FormError::MissingField(field));
            }
        }

        Ok(PartyDraft {
            date: compose_event_date(&self.date, &self.time)?,
            name: self.name,
            description: self.description,
            location: self.location,
        })
    }
}
