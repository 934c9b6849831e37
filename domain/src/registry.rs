use tracing::debug;

use crate::lookup::{find_by_name, find_by_name_mut};
use crate::{Client, CoreError, Event};

/// In-memory registry owning every client and event.
///
/// Records are kept in insertion order and looked up by a linear scan on
/// their name. Duplicate names are accepted on create; lookups return the
/// record inserted first. Nothing is ever updated or removed through the
/// registry, and nothing outlives the instance.
///
/// There is no shared default instance: construct one per caller (or test).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Registry {
    clients: Vec<Client>,
    events: Vec<Event>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a client. Always succeeds.
    pub fn create_client(&mut self, client: Client) {
        debug!(client = %client.name, "client created");
        self.clients.push(client);
    }

    /// Copy of the first client whose name matches exactly.
    pub fn get_client(&self, name: &str) -> Result<Client, CoreError> {
        find_by_name(&self.clients, name).cloned()
    }

    /// Append an event, including whatever guests and vendors it already
    /// carries. Always succeeds.
    pub fn create_event(&mut self, event: Event) {
        debug!(
            event = %event.name,
            client = %event.client.name,
            guests = event.guests.len(),
            vendors = event.vendors.len(),
            "event created"
        );
        self.events.push(event);
    }

    /// Copy of the first event whose name matches exactly.
    ///
    /// The copy is detached: guests or vendors added to it do not reach the
    /// registry. Use [`Registry::event_mut`] for that.
    pub fn get_event(&self, name: &str) -> Result<Event, CoreError> {
        find_by_name(&self.events, name).cloned()
    }

    /// The stored event itself, for attaching guests and vendors.
    pub fn event_mut(&mut self, name: &str) -> Result<&mut Event, CoreError> {
        find_by_name_mut(&mut self.events, name)
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Guest, RecordKind, Vendor};

    fn john() -> Client {
        Client::new("John Doe", "jdoe@example.com", "1234567890")
    }

    fn party(client: Client) -> Event {
        Event::new(client, "Company Holiday Party", "Corporate")
            .with_description("Annual holiday party for the employees of Acme Inc.")
            .with_times("December 24th, 2019 8pm", "December 25th, 2019 12am")
            .with_location("Acme Inc. HQ")
    }

    #[test]
    fn create_then_get_client() {
        let mut reg = Registry::new();
        reg.create_client(john());
        assert_eq!(reg.get_client("John Doe").unwrap(), john());
    }

    #[test]
    fn get_client_not_found_carries_name() {
        let mut reg = Registry::new();
        reg.create_client(john());
        let err = reg.get_client("Jane Doe").unwrap_err();
        assert_eq!(
            err,
            CoreError::NotFound {
                kind: RecordKind::Client,
                name: "Jane Doe".into()
            }
        );
    }

    #[test]
    fn duplicate_client_names_return_first() {
        let mut reg = Registry::new();
        reg.create_client(Client::new("John Doe", "first@example.com", "1"));
        reg.create_client(Client::new("John Doe", "second@example.com", "2"));
        assert_eq!(reg.clients().len(), 2);
        assert_eq!(reg.get_client("John Doe").unwrap().email, "first@example.com");
    }

    #[test]
    fn event_round_trips_with_prepopulated_children() {
        let mut reg = Registry::new();
        let mut event = party(john());
        event.create_guest(Guest::new("Ann", "ann@example.com", "555"));
        event.create_vendor(Vendor::new("Catering Co", "Food", 800.0, "7pm", "11pm"));
        reg.create_event(event.clone());

        let got = reg.get_event("Company Holiday Party").unwrap();
        assert_eq!(got, event);
        assert_eq!(got.client, john());
        assert_eq!(got.guests().len(), 1);
        assert_eq!(got.vendors().len(), 1);
    }

    #[test]
    fn get_event_not_found() {
        let reg = Registry::new();
        let err = reg.get_event("Gala").unwrap_err();
        assert!(matches!(
            err,
            CoreError::NotFound { kind: RecordKind::Event, ref name } if name == "Gala"
        ));
    }

    #[test]
    fn guests_added_to_a_copy_do_not_reach_the_registry() {
        let mut reg = Registry::new();
        reg.create_event(party(john()));

        let mut copy = reg.get_event("Company Holiday Party").unwrap();
        copy.create_guest(Guest::new("Ann", "ann@example.com", "555"));

        let stored = reg.get_event("Company Holiday Party").unwrap();
        assert!(stored.get_guest("Ann").is_err());
    }

    #[test]
    fn event_mut_attaches_to_stored_event() {
        let mut reg = Registry::new();
        reg.create_event(party(john()));

        let event = reg.event_mut("Company Holiday Party").unwrap();
        event.create_guest(Guest::new("Ann", "ann@example.com", "555"));
        event.create_vendor(Vendor::new("DJ Max", "Music", 300.0, "8pm", "12am"));

        let stored = reg.get_event("Company Holiday Party").unwrap();
        assert_eq!(stored.get_guest("Ann").unwrap().phone, "555");
        assert_eq!(stored.get_vendor("DJ Max").unwrap().cost, 300.0);
    }

    #[test]
    fn event_mut_not_found() {
        let mut reg = Registry::new();
        assert!(reg.event_mut("Gala").is_err());
    }

    #[test]
    fn children_are_scoped_to_their_event() {
        let mut reg = Registry::new();
        reg.create_event(party(john()));
        reg.create_event(Event::new(john(), "Summer Picnic", "Corporate"));

        reg.event_mut("Company Holiday Party")
            .unwrap()
            .create_guest(Guest::new("Ann", "holiday@example.com", "1"));
        reg.event_mut("Summer Picnic")
            .unwrap()
            .create_guest(Guest::new("Ann", "picnic@example.com", "2"));
        reg.event_mut("Company Holiday Party")
            .unwrap()
            .create_vendor(Vendor::new("Catering Co", "Food", 800.0, "7pm", "11pm"));

        let picnic = reg.get_event("Summer Picnic").unwrap();
        assert_eq!(picnic.get_guest("Ann").unwrap().email, "picnic@example.com");
        assert!(picnic.get_vendor("Catering Co").is_err());
    }

    #[test]
    fn event_keeps_client_snapshot() {
        let mut reg = Registry::new();
        reg.create_client(john());
        reg.create_event(party(john()));
        reg.create_client(Client::new("Acme Inc.", "events@acme.example", "555"));

        let event = reg.get_event("Company Holiday Party").unwrap();
        assert_eq!(event.client, john());
    }

    #[test]
    fn registries_are_independent() {
        let mut a = Registry::new();
        let b = Registry::new();
        a.create_client(john());
        assert!(a.get_client("John Doe").is_ok());
        assert!(b.get_client("John Doe").is_err());
    }
}
