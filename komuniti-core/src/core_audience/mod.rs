//! Audience visibility and query filtering
//!
//! Visibility is decided per (member, item) pair by a pure predicate;
//! free-text and facet filters compose on top as a strict conjunction.

mod filter;
mod query;

pub use filter::is_visible;
pub use query::{apply_query, ContentQuery, FacetKind, REACTION_THRESHOLD};
