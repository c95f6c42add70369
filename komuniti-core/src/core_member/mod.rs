//! Member identity and membership derivation
//!
//! A verified [`Member`] profile arrives from the external identity
//! collaborator; the resolver derives the [`MembershipSet`] that profile
//! implies from an ordered, inspectable rule table.

mod member;
mod membership;
mod resolver;

pub use member::Member;
pub use membership::MembershipSet;
pub use resolver::{MatchRule, MembershipRule, MembershipRules, BASELINE_BATCH};
