//! Channel resolution
//!
//! Builds the ordered channel list for a membership set: the community-wide
//! channel first, then one channel per membership element, then the fixed
//! interest templates. The order is stable and deterministic; it is the
//! display order.

use super::metadata::ChannelMetadata;
use super::slug::{club_slug, event_slug};
use crate::core_catalog::{ChannelKind, ChannelTemplate};
use crate::core_member::MembershipSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A channel the member may join, produced at resolution time and never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedChannel {
    pub id: String,
    pub display_name: String,
    pub kind: ChannelKind,
    pub description: String,
    pub member_count: u32,
    pub preview: String,
    pub preview_age: String,
    pub unread_count: u32,
}

/// Resolves membership sets into channel lists.
pub struct ChannelResolver {
    metadata: ChannelMetadata,
}

impl ChannelResolver {
    pub fn new(metadata: ChannelMetadata) -> Self {
        ChannelResolver { metadata }
    }

    /// Resolve the ordered channel list for a membership set.
    ///
    /// Construction order: official template, clubs in set order,
    /// institution (if present), batch, events in set order, interest
    /// templates. The list depends only on the membership set and the
    /// templates, never on who the member is.
    pub fn resolve(
        &self,
        membership: &MembershipSet,
        templates: &[ChannelTemplate],
    ) -> Vec<DerivedChannel> {
        let mut channels = Vec::new();

        for template in templates.iter().filter(|t| t.kind == ChannelKind::Official) {
            channels.push(self.from_template(template));
        }

        for club in membership.clubs() {
            channels.push(self.derived(
                format!("club-{}", club_slug(club)),
                club.clone(),
                ChannelKind::Club,
                format!("Connect with fellow {club} members"),
            ));
        }

        if let Some(institution) = membership.institution.as_deref() {
            channels.push(self.derived(
                format!("university-{}", institution.to_lowercase()),
                format!("{institution} Students"),
                ChannelKind::Institution,
                format!("Connect with fellow students at {institution}"),
            ));
        }

        let batch = &membership.batch_year;
        channels.push(self.derived(
            format!("batch-{batch}"),
            format!("Batch {batch}"),
            ChannelKind::Batch,
            format!("Connect with your batch mates from {batch}"),
        ));

        for event in membership.events() {
            channels.push(self.derived(
                format!("event-{}", event_slug(event)),
                event.clone(),
                ChannelKind::Event,
                format!("Coordinate and discuss {event}"),
            ));
        }

        for template in templates.iter().filter(|t| t.kind == ChannelKind::Interest) {
            channels.push(self.from_template(template));
        }

        debug!(count = channels.len(), "resolved channel list");
        channels
    }

    /// Metadata lookup keys off the display name; generated channels key
    /// off the membership element they came from.
    fn derived(
        &self,
        id: String,
        display_name: String,
        kind: ChannelKind,
        description: String,
    ) -> DerivedChannel {
        let name_key = match kind {
            // Institution channels are listed as "X Students" but the
            // table knows the institution itself.
            ChannelKind::Institution => display_name
                .strip_suffix(" Students")
                .unwrap_or(&display_name)
                .to_owned(),
            _ => display_name.clone(),
        };
        let meta = self.metadata.lookup(kind, &name_key);
        DerivedChannel {
            id,
            display_name,
            kind,
            description,
            member_count: meta.member_count,
            preview: meta.preview,
            preview_age: meta.preview_age,
            unread_count: meta.unread_count,
        }
    }

    fn from_template(&self, template: &ChannelTemplate) -> DerivedChannel {
        let meta = match self.metadata.find(template.kind, &template.display_name) {
            Some(meta) => meta.clone(),
            // Unknown template names keep their seeded preview line.
            None => {
                let mut meta = self.metadata.lookup(template.kind, &template.display_name);
                if !template.base_preview.is_empty() {
                    meta.preview = template.base_preview.clone();
                }
                meta
            }
        };
        DerivedChannel {
            id: template.id.clone(),
            display_name: template.display_name.clone(),
            kind: template.kind,
            description: template.description.clone(),
            member_count: meta.member_count,
            preview: meta.preview,
            preview_age: meta.preview_age,
            unread_count: meta.unread_count,
        }
    }
}

impl Default for ChannelResolver {
    fn default() -> Self {
        ChannelResolver::new(ChannelMetadata::default())
    }
}
