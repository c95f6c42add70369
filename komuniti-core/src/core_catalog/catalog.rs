//! Catalog repository
//!
//! The engine never owns mutable content. Implementations are seeded once
//! at startup and hand out the same ordered sequences on every call.

use super::channel::{ChannelKind, ChannelTemplate};
use super::content::{AudienceRule, ContentItem, Priority};
use thiserror::Error;

/// Read-only repository of content items and channel templates.
///
/// Both sequences are ordered and stable across calls. Mutation (e.g.
/// marking an item read) is an external concern applied to a copy.
pub trait ContentCatalog: Send + Sync {
    /// Every content item, in catalog order.
    fn items(&self) -> &[ContentItem];

    /// Every fixed channel template, in display order: the community-wide
    /// channel first, interest channels after.
    fn templates(&self) -> &[ChannelTemplate];
}

/// Catalog construction errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate content item id: {0}")]
    DuplicateItemId(String),

    #[error("duplicate channel template id: {0}")]
    DuplicateTemplateId(String),
}

/// In-memory catalog backed by fixed sequences.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    items: Vec<ContentItem>,
    templates: Vec<ChannelTemplate>,
}

impl StaticCatalog {
    /// Build a catalog from externally supplied data, rejecting duplicate
    /// ids in either table.
    pub fn new(
        items: Vec<ContentItem>,
        templates: Vec<ChannelTemplate>,
    ) -> Result<Self, CatalogError> {
        for (i, item) in items.iter().enumerate() {
            if items[i + 1..].iter().any(|other| other.id == item.id) {
                return Err(CatalogError::DuplicateItemId(item.id.clone()));
            }
        }
        for (i, template) in templates.iter().enumerate() {
            if templates[i + 1..].iter().any(|other| other.id == template.id) {
                return Err(CatalogError::DuplicateTemplateId(template.id.clone()));
            }
        }
        Ok(StaticCatalog { items, templates })
    }

    /// The built-in seed shipped with the portal.
    pub fn seeded() -> Self {
        StaticCatalog {
            items: seed_items(),
            templates: seed_templates(),
        }
    }
}

impl ContentCatalog for StaticCatalog {
    fn items(&self) -> &[ContentItem] {
        &self.items
    }

    fn templates(&self) -> &[ChannelTemplate] {
        &self.templates
    }
}

fn seed_items() -> Vec<ContentItem> {
    vec![
        ContentItem::new(
            "1",
            "General Announcement",
            "Dear Komuniti members, we are excited to announce that the theme for \
             Majlis Anugerah Dirhajayu 2025 is Forevermore: A Twilight Ball!",
            AudienceRule::General,
        )
        .with_timestamp("2 hours ago")
        .with_author("Komuniti Admin")
        .with_engagement(24, 8)
        .with_priority(Priority::High),
        ContentItem::new(
            "2",
            "MARA Scholars",
            "Greetings everyone! On August 26th, the Deputy Director General of MARA \
             wants to meet 40 MARA students.",
            AudienceRule::ScholarshipTargeted("MARA".to_owned()),
        )
        .with_timestamp("4 hours ago")
        .with_author("MARA Coordinator")
        .with_engagement(15, 12)
        .with_priority(Priority::High),
        ContentItem::new(
            "3",
            "Yonsei University - Academic Calendar Update",
            "Important update for Yonsei students: The final exam schedule has been \
             revised. Please check your student portal for updated dates.",
            AudienceRule::InstitutionTargeted("Yonsei".to_owned()),
        )
        .with_timestamp("6 hours ago")
        .with_author("Yonsei Student Rep")
        .with_engagement(8, 3)
        .mark_read(),
        ContentItem::new(
            "4",
            "Korean Language Exchange Program",
            "Join our weekly Korean-Malay language exchange sessions every Saturday \
             at 2 PM. Great opportunity to practice and make new friends!",
            AudienceRule::General,
        )
        .with_timestamp("1 day ago")
        .with_author("Language Committee")
        .with_engagement(32, 18)
        .mark_read(),
        ContentItem::new(
            "5",
            "MARA Scholarship Renewal Reminder",
            "MARA scholars, please submit your scholarship renewal documents by \
             September 15th. Late submissions will not be accepted.",
            AudienceRule::ScholarshipTargeted("MARA".to_owned()),
        )
        .with_timestamp("2 days ago")
        .with_author("MARA Admin")
        .with_engagement(19, 7)
        .with_priority(Priority::High),
        ContentItem::new(
            "6",
            "Seoul National University - Library Hours Extended",
            "SNU students: The central library will now be open 24/7 during exam \
             period (Nov 20 - Dec 15). Student ID required for after-hours access.",
            AudienceRule::InstitutionTargeted("SNU".to_owned()),
        )
        .with_timestamp("3 days ago")
        .with_author("SNU Student Council")
        .with_engagement(12, 4)
        .with_priority(Priority::Low)
        .mark_read(),
    ]
}

fn seed_templates() -> Vec<ChannelTemplate> {
    vec![
        ChannelTemplate::new("komuniti-official", "Komuniti Official Group", ChannelKind::Official)
            .with_description("Official announcements and community updates")
            .with_preview("Welcome to the official Komuniti community!"),
        ChannelTemplate::new("korean-language", "Korean Language Exchange", ChannelKind::Interest)
            .with_description("Practice Korean with fellow students")
            .with_preview("오늘 스터디 어땠어요? How was today's study?"),
        ChannelTemplate::new("casual-chat", "Casual Hangout", ChannelKind::Interest)
            .with_description("Casual conversations and daily life")
            .with_preview("Anyone tried the new cafe near Hongdae?"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_catalog_shape() {
        let catalog = StaticCatalog::seeded();
        assert_eq!(catalog.items().len(), 6);
        assert_eq!(catalog.templates().len(), 3);
    }

    #[test]
    fn test_seeded_official_channel_is_first_template() {
        let catalog = StaticCatalog::seeded();
        assert_eq!(catalog.templates()[0].kind, ChannelKind::Official);
        assert_eq!(catalog.templates()[0].id, "komuniti-official");
    }

    #[test]
    fn test_seeded_items_are_stable_across_calls() {
        let catalog = StaticCatalog::seeded();
        let first: Vec<&str> = catalog.items().iter().map(|i| i.id.as_str()).collect();
        let second: Vec<&str> = catalog.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_new_rejects_duplicate_item_ids() {
        let items = vec![
            ContentItem::new("1", "A", "a", AudienceRule::General),
            ContentItem::new("1", "B", "b", AudienceRule::General),
        ];
        let result = StaticCatalog::new(items, Vec::new());
        assert!(matches!(result, Err(CatalogError::DuplicateItemId(id)) if id == "1"));
    }

    #[test]
    fn test_new_rejects_duplicate_template_ids() {
        let templates = vec![
            ChannelTemplate::new("x", "X", ChannelKind::Interest),
            ChannelTemplate::new("x", "Y", ChannelKind::Interest),
        ];
        let result = StaticCatalog::new(Vec::new(), templates);
        assert!(matches!(result, Err(CatalogError::DuplicateTemplateId(id)) if id == "x"));
    }

    #[test]
    fn test_new_accepts_seed_data() {
        let catalog = StaticCatalog::seeded();
        let rebuilt = StaticCatalog::new(catalog.items().to_vec(), catalog.templates().to_vec());
        assert!(rebuilt.is_ok());
    }
}
