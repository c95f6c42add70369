//! Channel template and kind definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a communication channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    /// The community-wide official channel
    Official,
    /// Generated from a club membership
    Club,
    /// Generated from the member's institution
    Institution,
    /// Generated from the member's batch year
    Batch,
    /// Generated from an event registration
    Event,
    /// Fixed interest/hangout channels open to everyone
    Interest,
}

impl ChannelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelKind::Official => "official",
            ChannelKind::Club => "club",
            ChannelKind::Institution => "institution",
            ChannelKind::Batch => "batch",
            ChannelKind::Event => "event",
            ChannelKind::Interest => "interest",
        }
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fixed catalog-level channel entry.
///
/// Templates are identical for every member; the channel resolver places
/// the official channel first and appends the interest channels last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelTemplate {
    pub id: String,
    pub display_name: String,
    pub kind: ChannelKind,

    #[serde(default)]
    pub description: String,

    /// Preview line shown before any transcript is fetched
    #[serde(default)]
    pub base_preview: String,
}

impl ChannelTemplate {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        kind: ChannelKind,
    ) -> Self {
        ChannelTemplate {
            id: id.into(),
            display_name: display_name.into(),
            kind,
            description: String::new(),
            base_preview: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_preview(mut self, preview: impl Into<String>) -> Self {
        self.base_preview = preview.into();
        self
    }
}
