//! Engine facade composing the resolver, filters and channel resolution
//!
//! Data flow: identity attributes -> membership set -> {audience-filtered
//! feed, channel list} -> query filter. Every operation recomputes from
//! immutable inputs; the engine holds only read-only tables and is safe to
//! share across threads.

use crate::config::{ConfigError, PortalConfig};
use crate::core_audience::{apply_query, is_visible, ContentQuery};
use crate::core_catalog::{ContentCatalog, ContentItem, StaticCatalog};
use crate::core_channel::{ChannelMetadata, ChannelResolver, DerivedChannel};
use crate::core_member::{Member, MembershipRules, MembershipSet};
use tracing::debug;

/// The audience-targeting and channel-resolution engine.
///
/// Holds the process-wide read-only state: the membership rule table, the
/// content catalog and the channel metadata table. All evaluation methods
/// are pure over their inputs.
pub struct PortalEngine {
    rules: MembershipRules,
    catalog: Box<dyn ContentCatalog>,
    channel_resolver: ChannelResolver,
}

impl PortalEngine {
    /// Engine over the built-in rule table, catalog seed and metadata.
    pub fn new() -> Self {
        Self::with_parts(
            MembershipRules::default(),
            Box::new(StaticCatalog::seeded()),
            ChannelMetadata::default(),
        )
    }

    /// Engine over externally supplied tables.
    pub fn with_parts(
        rules: MembershipRules,
        catalog: Box<dyn ContentCatalog>,
        metadata: ChannelMetadata,
    ) -> Self {
        PortalEngine {
            rules,
            catalog,
            channel_resolver: ChannelResolver::new(metadata),
        }
    }

    /// Engine over validated configuration.
    pub fn from_config(config: &PortalConfig) -> Result<Self, ConfigError> {
        let rules = MembershipRules::new(
            config.membership.rules.clone(),
            config.membership.baseline_batch.clone(),
        );
        let catalog = StaticCatalog::new(
            config.catalog.items.clone(),
            config.catalog.templates.clone(),
        )?;
        let metadata = ChannelMetadata::with_overrides(config.channel_meta.clone());
        Ok(Self::with_parts(rules, Box::new(catalog), metadata))
    }

    /// The membership rule table in use.
    pub fn rules(&self) -> &MembershipRules {
        &self.rules
    }

    /// Derive the membership set for a member: the id-derived memberships
    /// plus the profile institution, carried so the channel resolver
    /// consumes a single value.
    pub fn membership(&self, member: &Member) -> MembershipSet {
        self.rules
            .resolve(&member.id)
            .with_institution(member.institution.clone())
    }

    /// The member's feed: audience-visible catalog items narrowed by the
    /// query, in catalog order.
    pub fn feed(&self, member: &Member, query: &ContentQuery) -> Vec<ContentItem> {
        let visible: Vec<&ContentItem> = self
            .catalog
            .items()
            .iter()
            .filter(|item| is_visible(member, item))
            .collect();
        let matched = apply_query(member, visible, query);
        debug!(
            member = %member.id,
            catalog = self.catalog.items().len(),
            matched = matched.len(),
            "assembled feed"
        );
        matched.into_iter().cloned().collect()
    }

    /// The ordered list of channels the member may join.
    pub fn channels(&self, member: &Member) -> Vec<DerivedChannel> {
        let membership = self.membership(member);
        self.channel_resolver
            .resolve(&membership, self.catalog.templates())
    }
}

impl Default for PortalEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_audience::FacetKind;
    use crate::core_catalog::AudienceRule;

    fn mara_snu_member() -> Member {
        Member::new("K001", "Ahmad Zaki")
            .with_scholarship("MARA")
            .with_institution("SNU")
    }

    #[test]
    fn test_membership_carries_profile_institution() {
        let engine = PortalEngine::new();
        let membership = engine.membership(&mara_snu_member());
        assert_eq!(membership.institution.as_deref(), Some("SNU"));
        assert_eq!(membership.batch_year, "2024");
        assert_eq!(membership.clubs().len(), 2);
    }

    #[test]
    fn test_feed_filters_by_audience() {
        let engine = PortalEngine::new();
        let feed = engine.feed(&mara_snu_member(), &ContentQuery::default());

        // General + both MARA items + the SNU item; Yonsei item hidden.
        let ids: Vec<&str> = feed.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "4", "5", "6"]);
    }

    #[test]
    fn test_feed_for_member_without_attributes() {
        let engine = PortalEngine::new();
        let feed = engine.feed(&Member::new("K900", "Plain Member"), &ContentQuery::default());
        let ids: Vec<&str> = feed.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["1", "4"]);
        assert!(feed
            .iter()
            .all(|item| item.audience == AudienceRule::General));
    }

    #[test]
    fn test_feed_composes_query_on_top_of_audience() {
        let engine = PortalEngine::new();
        let query = ContentQuery::default().with_facet(FacetKind::Unread);
        let feed = engine.feed(&mara_snu_member(), &query);
        let ids: Vec<&str> = feed.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "5"]);
    }

    #[test]
    fn test_channels_for_demo_member() {
        let engine = PortalEngine::new();
        let member = Member::new("demo", "Demo User")
            .with_scholarship("MARA")
            .with_institution("Yonsei");
        let channels = engine.channels(&member);

        let ids: Vec<&str> = channels.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "komuniti-official",
                "club-badminton-club",
                "club-recreational-club",
                "university-yonsei",
                "batch-2024",
                "event-hackathon-hacktopus",
                "event-cultural-night-2024",
                "korean-language",
                "casual-chat",
            ]
        );
    }

    #[test]
    fn test_channels_ignore_display_name() {
        let engine = PortalEngine::new();
        let a = Member::new("K001", "Ahmad Zaki");
        let b = Member::new("K001", "Someone Else Entirely");
        assert_eq!(engine.channels(&a), engine.channels(&b));
    }

    #[test]
    fn test_engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PortalEngine>();
    }
}
