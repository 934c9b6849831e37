//! Domain library for the event planner.
//!
//! Holds the record types (clients, events, guests, vendors), the in-memory
//! [`Registry`](registry::Registry) that owns them, and the error type. Keep
//! IO and presentation concerns out of this crate.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::lookup::find_by_name;

/// The four kinds of record the planner keeps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Client,
    Event,
    Guest,
    Vendor,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Client => "client",
            RecordKind::Event => "event",
            RecordKind::Guest => "guest",
            RecordKind::Vendor => "vendor",
        }
    }
}

impl Display for RecordKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record that can be looked up by its name.
pub trait Named {
    const KIND: RecordKind;

    fn name(&self) -> &str;
}

/// A client we organize events for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Client {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}

impl Named for Client {
    const KIND: RecordKind = RecordKind::Client;

    fn name(&self) -> &str {
        &self.name
    }
}

/// A guest attending one event. Guests have no identity outside their event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Guest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}

impl Named for Guest {
    const KIND: RecordKind = RecordKind::Guest;

    fn name(&self) -> &str {
        &self.name
    }
}

/// A vendor providing a service to one event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub name: String,
    pub service: String,
    /// Currency amount charged for the service.
    pub cost: f64,
    /// Free text, never parsed.
    pub start_time: String,
    /// Free text, never parsed.
    pub end_time: String,
}

impl Vendor {
    pub fn new(
        name: impl Into<String>,
        service: impl Into<String>,
        cost: f64,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            service: service.into(),
            cost,
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }
}

impl Named for Vendor {
    const KIND: RecordKind = RecordKind::Vendor;

    fn name(&self) -> &str {
        &self.name
    }
}

/// An event organized for a client.
///
/// `client` is a copy taken when the event is built, not a live reference.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub client: Client,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub guests: Vec<Guest>,
    pub vendors: Vec<Vendor>,
}

impl Event {
    /// Create an event with empty description, times, location, guests and vendors.
    pub fn new(client: Client, name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            client,
            name: name.into(),
            kind: kind.into(),
            description: String::new(),
            start_time: String::new(),
            end_time: String::new(),
            location: String::new(),
            guests: Vec::new(),
            vendors: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_times(mut self, start_time: impl Into<String>, end_time: impl Into<String>) -> Self {
        self.start_time = start_time.into();
        self.end_time = end_time.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Append a guest. No duplicate check.
    pub fn create_guest(&mut self, guest: Guest) {
        debug!(event = %self.name, guest = %guest.name, "guest created");
        self.guests.push(guest);
    }

    /// First guest of this event whose name matches exactly.
    pub fn get_guest(&self, name: &str) -> Result<Guest, CoreError> {
        find_by_name(&self.guests, name).cloned()
    }

    /// Append a vendor. No duplicate check.
    pub fn create_vendor(&mut self, vendor: Vendor) {
        debug!(event = %self.name, vendor = %vendor.name, "vendor created");
        self.vendors.push(vendor);
    }

    /// First vendor of this event whose name matches exactly.
    pub fn get_vendor(&self, name: &str) -> Result<Vendor, CoreError> {
        find_by_name(&self.vendors, name).cloned()
    }

    pub fn guests(&self) -> &[Guest] {
        &self.guests
    }

    pub fn vendors(&self) -> &[Vendor] {
        &self.vendors
    }
}

impl Named for Event {
    const KIND: RecordKind = RecordKind::Event;

    fn name(&self) -> &str {
        &self.name
    }
}

/// Core domain errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("no such {kind}: {name}")]
    NotFound { kind: RecordKind, name: String },
}

/// Return a short about/version line for binaries to print.
pub fn about() -> String {
    let pkg = env!("CARGO_PKG_NAME");
    let ver = env!("CARGO_PKG_VERSION");
    format!("{} v{}", pkg, ver)
}

pub mod lookup;
pub mod registry;

pub use registry::Registry;
