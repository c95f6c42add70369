//! Secondary query filtering over audience-visible content

use crate::core_catalog::ContentItem;
use crate::core_member::Member;
use serde::{Deserialize, Serialize};

/// Reaction count must strictly exceed this for the `Reaction` facet.
pub const REACTION_THRESHOLD: u32 = 10;

/// Mutually exclusive secondary filter applied after audience visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacetKind {
    /// No facet predicate
    #[default]
    None,
    /// Items not yet read
    Unread,
    /// Body contains the viewing member's display name
    Mentions,
    /// Items with at least one comment
    Replies,
    /// Items whose reaction count exceeds [`REACTION_THRESHOLD`]
    Reaction,
}

/// Free-text and facet selection for a feed request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentQuery {
    /// Case-insensitive substring matched against title or body.
    /// Absent (or empty) text always matches.
    #[serde(default)]
    pub text: Option<String>,

    #[serde(default)]
    pub facet: FacetKind,
}

impl ContentQuery {
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_facet(mut self, facet: FacetKind) -> Self {
        self.facet = facet;
        self
    }
}

fn matches_text(item: &ContentItem, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    item.title.to_lowercase().contains(&needle) || item.body.to_lowercase().contains(&needle)
}

fn matches_facet(member: &Member, item: &ContentItem, facet: FacetKind) -> bool {
    match facet {
        FacetKind::None => true,
        FacetKind::Unread => !item.read,
        FacetKind::Mentions => item
            .body
            .to_lowercase()
            .contains(&member.display_name.to_lowercase()),
        FacetKind::Replies => item.engagement.comment_count > 0,
        FacetKind::Reaction => item.engagement.reaction_count > REACTION_THRESHOLD,
    }
}

/// Apply text and facet filters, preserving the relative order of the
/// input. Text and facet compose as a conjunction; an absent text query is
/// always-match, never an empty-string mismatch.
pub fn apply_query<'a, I>(member: &Member, items: I, query: &ContentQuery) -> Vec<&'a ContentItem>
where
    I: IntoIterator<Item = &'a ContentItem>,
{
    let needle = query.text.as_deref().filter(|text| !text.is_empty());
    items
        .into_iter()
        .filter(|item| needle.map_or(true, |text| matches_text(item, text)))
        .filter(|item| matches_facet(member, item, query.facet))
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::core_catalog::AudienceRule;
    use proptest::prelude::*;

    fn arbitrary_items() -> impl Strategy<Value = Vec<ContentItem>> {
        proptest::collection::vec(
            (".{0,12}", ".{0,24}", any::<bool>(), 0u32..30, 0u32..5).prop_map(
                |(title, body, read, reactions, comments)| {
                    let mut item = ContentItem::new("x", title, body, AudienceRule::General)
                        .with_engagement(reactions, comments);
                    item.read = read;
                    item
                },
            ),
            0..12,
        )
    }

    proptest! {
        // Property: filtering preserves relative order: the output is a
        // subsequence of the input.
        #[test]
        fn prop_apply_query_yields_subsequence(
            items in arbitrary_items(),
            text in proptest::option::of(".{0,6}"),
            facet_index in 0usize..5,
        ) {
            let facet = [
                FacetKind::None,
                FacetKind::Unread,
                FacetKind::Mentions,
                FacetKind::Replies,
                FacetKind::Reaction,
            ][facet_index];
            let member = Member::new("K001", "Ahmad Zaki");
            let query = ContentQuery { text, facet };

            let result = apply_query(&member, &items, &query);

            let mut cursor = items.iter();
            for matched in result {
                prop_assert!(
                    cursor.any(|item| std::ptr::eq(item, matched)),
                    "output must be an in-order subsequence of the input"
                );
            }
        }

        // Property: the default query is the identity filter.
        #[test]
        fn prop_default_query_is_identity(items in arbitrary_items()) {
            let member = Member::new("K001", "Ahmad Zaki");
            let result = apply_query(&member, &items, &ContentQuery::default());
            prop_assert_eq!(result.len(), items.len());
        }
    }
}
