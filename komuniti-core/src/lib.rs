//! Komuniti core engine
//!
//! Audience-targeting and channel-resolution engine for a membership-based
//! community portal. Given a verified member profile, the engine derives
//! the group memberships the identity implies, decides which catalog items
//! the member may see, resolves the channels the member may join, and
//! applies free-text/facet filtering on top.
//!
//! Everything is synchronous and pure over immutable inputs: the rule
//! tables and catalog are read-only process-wide state, and every result
//! is recomputed on demand. Identity verification, transcript storage and
//! rendering live outside this crate.

pub mod config;
pub mod core_audience;
pub mod core_catalog;
pub mod core_channel;
pub mod core_member;
pub mod core_portal;
pub mod logging;

pub use config::{ConfigError, PortalConfig};
pub use core_audience::{apply_query, is_visible, ContentQuery, FacetKind};
pub use core_catalog::{
    AudienceRule, ChannelKind, ChannelTemplate, ContentCatalog, ContentItem, StaticCatalog,
};
pub use core_channel::DerivedChannel;
pub use core_member::{Member, MembershipRules, MembershipSet};
pub use core_portal::PortalEngine;
pub use logging::{init_logging, LogLevel};
