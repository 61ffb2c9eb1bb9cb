use crate::model::guest::{Guest, Rsvp};
use crate::model::party::Party;

/// The in-memory snapshot the renderer reads: all parties, the selected
/// party, all RSVPs, all guests. Fields are private so mutation only goes
/// through the designated update functions below; only the engine thread
/// holds a `&mut AppState`.
#[derive(Debug, Default)]
pub struct AppState {
    parties: Vec<Party>,
    selected: Option<Party>,
    rsvps: Vec<Rsvp>,
    guests: Vec<Guest>,
}

impl AppState {
    pub fn parties(&self) -> &[Party] {
        &self.parties
    }

    pub fn selected_party(&self) -> Option<&Party> {
        self.selected.as_ref()
    }

    pub fn rsvps(&self) -> &[Rsvp] {
        &self.rsvps
    }

    pub fn guests(&self) -> &[Guest] {
        &self.guests
    }

    /// Replaces the party collection wholesale. A stale selection is left
    /// untouched; only `select_party`/`clear_selection` change it.
    pub fn replace_parties(&mut self, parties: Vec<Party>) {
        self.parties = parties;
    }

    pub fn replace_rsvps(&mut self, rsvps: Vec<Rsvp>) {
        self.rsvps = rsvps;
    }

    pub fn replace_guests(&mut self, guests: Vec<Guest>) {
        self.guests = guests;
    }

    pub fn select_party(&mut self, party: Party) {
        self.selected = Some(party);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}

/// A guest attends a party iff an RSVP links the two. Input order is
/// preserved and each guest appears at most once, even with duplicate RSVPs.
pub fn guests_for_party<'a>(party_id: i64, guests: &'a [Guest], rsvps: &[Rsvp]) -> Vec<&'a Guest> {
    guests
        .iter()
        .filter(|guest| {
            rsvps
                .iter()
                .any(|rsvp| rsvp.guest_id == guest.id && rsvp.event_id == party_id)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn guest(id: i64, name: &str) -> Guest {
        Guest { id, name: name.into() }
    }

    fn rsvp(guest_id: i64, event_id: i64) -> Rsvp {
        Rsvp { guest_id, event_id }
    }

    fn party(id: i64, name: &str) -> Party {
        Party {
            id,
            name: name.into(),
            description: "desc".into(),
            date: Utc.with_ymd_and_hms(2025, 6, 1, 18, 30, 0).unwrap(),
            location: "here".into(),
        }
    }

    #[test]
    fn includes_a_guest_iff_an_rsvp_links_them_to_the_party() {
        let guests = vec![guest(1, "A"), guest(2, "B")];
        let rsvps = vec![rsvp(1, 5)];

        let attending = guests_for_party(5, &guests, &rsvps);

        assert_eq!(attending, vec![&guests[0]]);
    }

    #[test]
    fn rsvps_for_other_parties_do_not_count() {
        let guests = vec![guest(1, "A"), guest(2, "B")];
        let rsvps = vec![rsvp(1, 5), rsvp(2, 6)];

        let attending = guests_for_party(6, &guests, &rsvps);

        assert_eq!(attending, vec![&guests[1]]);
    }

    #[test]
    fn preserves_guest_order_and_deduplicates_repeat_rsvps() {
        let guests = vec![guest(3, "C"), guest(1, "A"), guest(2, "B")];
        let rsvps = vec![rsvp(1, 5), rsvp(3, 5), rsvp(3, 5)];

        let attending = guests_for_party(5, &guests, &rsvps);

        assert_eq!(attending, vec![&guests[0], &guests[1]]);
    }

    #[test]
    fn no_rsvps_means_an_empty_guest_list() {
        let guests = vec![guest(1, "A")];
        assert!(guests_for_party(5, &guests, &[]).is_empty());
    }

    #[test]
    fn collections_are_replaced_wholesale() {
        let mut state = AppState::default();
        state.replace_parties(vec![party(1, "Old"), party(2, "Older")]);

        state.replace_parties(vec![party(3, "New")]);

        assert_eq!(state.parties().len(), 1);
        assert_eq!(state.parties()[0].id, 3);
    }

    #[test]
    fn replacing_parties_leaves_a_stale_selection_in_place() {
        let mut state = AppState::default();
        state.select_party(party(1, "Gone"));

        state.replace_parties(vec![party(2, "Other")]);

        assert_eq!(state.selected_party().map(|p| p.id), Some(1));
    }

    #[test]
    fn selection_is_set_and_cleared_explicitly() {
        let mut state = AppState::default();
        assert!(state.selected_party().is_none());

        state.select_party(party(4, "Picked"));
        assert_eq!(state.selected_party().map(|p| p.id), Some(4));

        state.clear_selection();
        assert!(state.selected_party().is_none());
    }
}
