//! Channel metadata lookup
//!
//! Member counts and preview lines shown in the channel list are display
//! estimates, not live state. They come from a finite rule table keyed by
//! normalized (lowercased) channel name; names the table does not know
//! fall back to per-kind defaults, so the lookup is total.

use crate::core_catalog::ChannelKind;
use crate::core_member::MatchRule;
use serde::{Deserialize, Serialize};

/// Display metadata attached to a resolved channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelMeta {
    pub member_count: u32,

    /// Most recent message line shown in the listing
    pub preview: String,

    /// Human-readable age of the preview line
    pub preview_age: String,

    pub unread_count: u32,
}

impl ChannelMeta {
    pub fn new(
        member_count: u32,
        preview: impl Into<String>,
        preview_age: impl Into<String>,
        unread_count: u32,
    ) -> Self {
        ChannelMeta {
            member_count,
            preview: preview.into(),
            preview_age: preview_age.into(),
            unread_count,
        }
    }
}

/// One row of the metadata table. The matcher runs against the lowercased
/// channel name; the first matching row of the right kind wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaRule {
    pub kind: ChannelKind,
    pub matcher: MatchRule,
    pub meta: ChannelMeta,
}

impl MetaRule {
    pub fn new(kind: ChannelKind, matcher: MatchRule, meta: ChannelMeta) -> Self {
        MetaRule {
            kind,
            matcher,
            meta,
        }
    }
}

/// The channel metadata table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelMetadata {
    rules: Vec<MetaRule>,
}

impl ChannelMetadata {
    /// Built-in table with deployment-specific rows prepended, so
    /// overrides win over the shipped defaults.
    pub fn with_overrides(overrides: Vec<MetaRule>) -> Self {
        let mut rules = overrides;
        rules.extend(Self::default().rules);
        ChannelMetadata { rules }
    }

    /// First matching row for this kind and name, if the table knows it.
    pub fn find(&self, kind: ChannelKind, name: &str) -> Option<&ChannelMeta> {
        let key = name.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.kind == kind && rule.matcher.matches(&key))
            .map(|rule| &rule.meta)
    }

    /// Metadata for a channel, falling back to the per-kind default for
    /// names the table does not know. Never fails.
    pub fn lookup(&self, kind: ChannelKind, name: &str) -> ChannelMeta {
        self.find(kind, name)
            .cloned()
            .unwrap_or_else(|| default_for(kind))
    }
}

impl Default for ChannelMetadata {
    fn default() -> Self {
        let contains = |pattern: &str| MatchRule::Contains(pattern.to_owned());
        let exact = |literal: &str| MatchRule::Exact(literal.to_owned());
        let rules = vec![
            MetaRule::new(
                ChannelKind::Official,
                contains(""),
                ChannelMeta::new(245, "Welcome to the official Komuniti community!", "2 hours ago", 3),
            ),
            MetaRule::new(
                ChannelKind::Club,
                exact("badminton club"),
                ChannelMeta::new(42, "Anyone up for a game this weekend?", "1 hour ago", 2),
            ),
            MetaRule::new(
                ChannelKind::Club,
                exact("recreational club"),
                ChannelMeta::new(38, "Movie night this Friday!", "3 hours ago", 0),
            ),
            MetaRule::new(
                ChannelKind::Institution,
                exact("yonsei"),
                ChannelMeta::new(67, "Library study group forming for finals", "4 hours ago", 1),
            ),
            MetaRule::new(
                ChannelKind::Institution,
                exact("snu"),
                ChannelMeta::new(89, "Anyone know about the scholarship deadline?", "4 hours ago", 1),
            ),
            MetaRule::new(
                ChannelKind::Event,
                contains("hackathon"),
                ChannelMeta::new(28, "Team formation starts tomorrow!", "30 minutes ago", 5),
            ),
            MetaRule::new(
                ChannelKind::Event,
                contains("cultural"),
                ChannelMeta::new(56, "Rehearsal schedule is out", "2 hours ago", 1),
            ),
            MetaRule::new(
                ChannelKind::Interest,
                exact("korean language exchange"),
                ChannelMeta::new(78, "오늘 스터디 어땠어요? How was today's study?", "1 day ago", 0),
            ),
            MetaRule::new(
                ChannelKind::Interest,
                exact("casual hangout"),
                ChannelMeta::new(156, "Anyone tried the new cafe near Hongdae?", "5 hours ago", 2),
            ),
        ];
        ChannelMetadata { rules }
    }
}

/// Generic defaults for names the table does not know.
fn default_for(kind: ChannelKind) -> ChannelMeta {
    match kind {
        ChannelKind::Official => {
            ChannelMeta::new(245, "Welcome to the community!", "2 hours ago", 0)
        }
        ChannelKind::Club => ChannelMeta::new(25, "Great session today everyone!", "3 hours ago", 0),
        ChannelKind::Institution => ChannelMeta::new(
            45,
            "Anyone know about the scholarship deadline?",
            "4 hours ago",
            1,
        ),
        ChannelKind::Batch => {
            ChannelMeta::new(34, "Reunion planning meeting next week!", "6 hours ago", 0)
        }
        ChannelKind::Event => ChannelMeta::new(
            23,
            "Looking forward to seeing everyone!",
            "2 hours ago",
            1,
        ),
        ChannelKind::Interest => ChannelMeta::new(40, "Say hello!", "1 day ago", 0),
    }
}
