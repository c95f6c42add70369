//! Derived membership set
//!
//! Recomputed deterministically from a member identifier on every login;
//! never persisted and never mutated in place, only replaced wholesale.

use serde::{Deserialize, Serialize};

/// Group memberships a member identifier implies.
///
/// Clubs and events behave as ordered sets: insertion order is preserved
/// (it becomes channel display order) and duplicates are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipSet {
    /// Batch (intake) year
    pub batch_year: String,

    clubs: Vec<String>,
    events: Vec<String>,

    /// Institution carried over from the member profile so the channel
    /// resolver consumes a single value. One institution per member.
    pub institution: Option<String>,
}

impl MembershipSet {
    /// Empty membership for the given batch year.
    pub fn new(batch_year: impl Into<String>) -> Self {
        MembershipSet {
            batch_year: batch_year.into(),
            clubs: Vec::new(),
            events: Vec::new(),
            institution: None,
        }
    }

    /// Carry the profile institution alongside the id-derived memberships.
    pub fn with_institution(mut self, institution: Option<String>) -> Self {
        self.institution = institution;
        self
    }

    /// Append a club membership unless already present.
    pub fn add_club(&mut self, club: &str) {
        if !self.clubs.iter().any(|c| c == club) {
            self.clubs.push(club.to_owned());
        }
    }

    /// Append an event registration unless already present.
    pub fn add_event(&mut self, event: &str) {
        if !self.events.iter().any(|e| e == event) {
            self.events.push(event.to_owned());
        }
    }

    /// Club memberships in insertion order.
    pub fn clubs(&self) -> &[String] {
        &self.clubs
    }

    /// Event registrations in insertion order.
    pub fn events(&self) -> &[String] {
        &self.events
    }

    pub fn has_club(&self, club: &str) -> bool {
        self.clubs.iter().any(|c| c == club)
    }

    pub fn has_event(&self, event: &str) -> bool {
        self.events.iter().any(|e| e == event)
    }
}
