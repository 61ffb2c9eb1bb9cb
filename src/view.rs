use crate::model::state::{guests_for_party, AppState};

pub const PAGE_TITLE: &str = "Party Planner";
pub const PARTY_LIST_HEADING: &str = "Upcoming Parties";
pub const DETAIL_HEADING: &str = "Party Details";
pub const SELECT_PROMPT: &str = "Please select a party to learn more.";
pub const FORM_HEADING: &str = "Plan a Party";
pub const REMOVE_PARTY_LABEL: &str = "Remove Party";
pub const ADD_PARTY_LABEL: &str = "Add Party";

/// The full UI tree for one render. Plain data, rebuilt from scratch on
/// every call; the previous tree is discarded, never patched.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub title: String,
    pub parties: PartyListView,
    pub detail: DetailView,
    pub form: NewPartyForm,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PartyListView {
    pub heading: String,
    pub entries: Vec<PartyEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PartyEntry {
    pub party_id: i64,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub heading: String,
    pub body: DetailBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailBody {
    /// Shown while no party is selected.
    Prompt(String),
    Party(PartyCard),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PartyCard {
    pub party_id: i64,
    pub title: String,
    /// Event date truncated to `YYYY-MM-DD`.
    pub date: String,
    pub location: String,
    pub description: String,
    pub remove_label: String,
    pub guests: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPartyForm {
    pub heading: String,
    pub fields: Vec<FormField>,
    pub submit_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub key: String,
    pub label: String,
    pub kind: FieldKind,
    pub initial: String,
    pub required: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Date,
    Time,
}

impl FormField {
    fn new(key: &str, label: &str, kind: FieldKind, initial: &str) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind,
            initial: initial.into(),
            required: true,
        }
    }
}

/// Projects the state snapshot into a full page. Pure and idempotent:
/// the same state always yields an equal tree.
pub fn render(state: &AppState) -> Page {
    Page {
        title: PAGE_TITLE.into(),
        parties: party_list(state),
        detail: party_detail(state),
        form: new_party_form(),
    }
}

fn party_list(state: &AppState) -> PartyListView {
    let selected_id = state.selected_party().map(|p| p.id);

    PartyListView {
        heading: PARTY_LIST_HEADING.into(),
        entries: state
            .parties()
            .iter()
            .map(|party| PartyEntry {
                party_id: party.id,
                label: party.name.clone(),
                selected: selected_id == Some(party.id),
            })
            .collect(),
    }
}

fn party_detail(state: &AppState) -> DetailView {
    let body = match state.selected_party() {
        None => DetailBody::Prompt(SELECT_PROMPT.into()),
        Some(party) => DetailBody::Party(PartyCard {
            party_id: party.id,
            title: format!("{} #{}", party.name, party.id),
            date: party.date.format("%Y-%m-%d").to_string(),
            location: party.location.clone(),
            description: party.description.clone(),
            remove_label: REMOVE_PARTY_LABEL.into(),
            guests: guests_for_party(party.id, state.guests(), state.rsvps())
                .into_iter()
                .map(|guest| guest.name.clone())
                .collect(),
        }),
    };

    DetailView {
        heading: DETAIL_HEADING.into(),
        body,
    }
}

fn new_party_form() -> NewPartyForm {
    NewPartyForm {
        heading: FORM_HEADING.into(),
        fields: vec![
            FormField::new("name", "Name", FieldKind::Text, ""),
            FormField::new(
                "description",
                "Description",
                FieldKind::Text,
                "Testing in progress",
            ),
            FormField::new("date", "Date of the Event", FieldKind::Date, ""),
            FormField::new("time", "Time of the Event", FieldKind::Time, ""),
            FormField::new(
                "location",
                "Location",
                FieldKind::Text,
                "Between here and there",
            ),
        ],
        submit_label: ADD_PARTY_LABEL.into(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use crate::model::guest::{Guest, Rsvp};
    use crate::model::party::Party;

    use super::*;

    fn party(id: i64, name: &str) -> Party {
        Party {
            id,
            name: name.into(),
            description: "A fine evening".into(),
            date: Utc.with_ymd_and_hms(2025, 6, 1, 18, 30, 0).unwrap(),
            location: "Rooftop".into(),
        }
    }

    #[test]
    fn one_list_entry_per_party_carrying_its_id() {
        let mut state = AppState::default();
        state.replace_parties(vec![party(1, "Gala"), party(2, "Picnic"), party(3, "Mixer")]);

        let page = render(&state);

        assert_eq!(page.parties.heading, "Upcoming Parties");
        assert_eq!(page.parties.entries.len(), 3);
        let ids: Vec<i64> = page.parties.entries.iter().map(|e| e.party_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn only_the_selected_party_entry_is_marked_selected() {
        let mut state = AppState::default();
        state.replace_parties(vec![party(1, "Gala"), party(2, "Picnic")]);
        state.select_party(party(2, "Picnic"));

        let page = render(&state);

        let flags: Vec<bool> = page.parties.entries.iter().map(|e| e.selected).collect();
        assert_eq!(flags, vec![false, true]);
    }

    #[test]
    fn no_selection_renders_the_prompt() {
        let page = render(&AppState::default());

        assert_eq!(page.title, "Party Planner");
        assert_eq!(page.detail.heading, "Party Details");
        assert_eq!(
            page.detail.body,
            DetailBody::Prompt("Please select a party to learn more.".into())
        );
    }

    #[test]
    fn selected_party_renders_a_card_with_truncated_date_and_guests() {
        let mut state = AppState::default();
        state.replace_guests(vec![
            Guest { id: 1, name: "Ada".into() },
            Guest { id: 2, name: "Grace".into() },
        ]);
        state.replace_rsvps(vec![Rsvp { guest_id: 2, event_id: 5 }]);
        state.select_party(party(5, "Gala"));

        let page = render(&state);

        let DetailBody::Party(card) = &page.detail.body else {
            panic!("expected a party card");
        };
        assert_eq!(card.party_id, 5);
        assert_eq!(card.title, "Gala #5");
        assert_eq!(card.date, "2025-06-01");
        assert_eq!(card.location, "Rooftop");
        assert_eq!(card.remove_label, "Remove Party");
        assert_eq!(card.guests, vec!["Grace".to_string()]);
    }

    #[test]
    fn a_party_with_no_rsvps_renders_an_empty_guest_list() {
        let mut state = AppState::default();
        state.replace_guests(vec![Guest { id: 1, name: "Ada".into() }]);
        state.select_party(party(5, "Gala"));

        let page = render(&state);

        let DetailBody::Party(card) = &page.detail.body else {
            panic!("expected a party card");
        };
        assert!(card.guests.is_empty());
    }

    #[test]
    fn form_has_the_five_required_fields_with_initial_values() {
        let page = render(&AppState::default());

        assert_eq!(page.form.heading, "Plan a Party");
        let keys: Vec<&str> = page.form.fields.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, vec!["name", "description", "date", "time", "location"]);
        assert!(page.form.fields.iter().all(|f| f.required));
        assert_eq!(page.form.fields[1].initial, "Testing in progress");
        assert_eq!(page.form.fields[2].kind, FieldKind::Date);
        assert_eq!(page.form.fields[3].kind, FieldKind::Time);
        assert_eq!(page.form.fields[4].initial, "Between here and there");
        assert_eq!(page.form.submit_label, "Add Party");
    }

    #[test]
    fn render_is_idempotent_for_an_unchanged_state() {
        let mut state = AppState::default();
        state.replace_parties(vec![party(1, "Gala"), party(2, "Picnic")]);
        state.replace_guests(vec![Guest { id: 1, name: "Ada".into() }]);
        state.replace_rsvps(vec![Rsvp { guest_id: 1, event_id: 1 }]);
        state.select_party(party(1, "Gala"));

        assert_eq!(render(&state), render(&state));
    }
}
