//! Content item data structures

use serde::{Deserialize, Serialize};

/// Targeting condition attached to a content item.
///
/// The set of kinds is closed. Visibility is granted only by an explicit
/// match in the audience filter, so anything outside these variants cannot
/// exist and nothing leaks by default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudienceRule {
    /// Visible to every member
    General,
    /// Visible only to members holding a scholarship from this provider
    ScholarshipTargeted(String),
    /// Visible only to members enrolled at this institution
    InstitutionTargeted(String),
}

/// Engagement counters attached to a content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Engagement {
    #[serde(default)]
    pub reaction_count: u32,

    #[serde(default)]
    pub comment_count: u32,
}

impl Engagement {
    pub fn new(reaction_count: u32, comment_count: u32) -> Self {
        Engagement {
            reaction_count,
            comment_count,
        }
    }
}

/// Editorial priority, consumed by the presentation layer for emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

/// A single catalog entry.
///
/// Entries are immutable once seeded. Read state is a snapshot taken at
/// seeding time; marking an item read is an external concern applied to a
/// copy, never to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    pub body: String,
    pub audience: AudienceRule,

    /// Human-readable age ("2 hours ago")
    #[serde(default)]
    pub timestamp: String,

    #[serde(default)]
    pub author: String,

    #[serde(default)]
    pub engagement: Engagement,

    #[serde(default)]
    pub read: bool,

    #[serde(default)]
    pub priority: Priority,
}

impl ContentItem {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
        audience: AudienceRule,
    ) -> Self {
        ContentItem {
            id: id.into(),
            title: title.into(),
            body: body.into(),
            audience,
            timestamp: String::new(),
            author: String::new(),
            engagement: Engagement::default(),
            read: false,
            priority: Priority::default(),
        }
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_engagement(mut self, reaction_count: u32, comment_count: u32) -> Self {
        self.engagement = Engagement::new(reaction_count, comment_count);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Mark the seeded snapshot as already read.
    pub fn mark_read(mut self) -> Self {
        self.read = true;
        self
    }
}
