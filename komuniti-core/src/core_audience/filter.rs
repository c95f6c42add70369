//! Audience visibility predicate

use crate::core_catalog::{AudienceRule, ContentItem};
use crate::core_member::Member;

/// Decide whether a member may see a content item.
///
/// Pure and side-effect-free. Targeted rules require an exact,
/// case-sensitive attribute match; an absent attribute never matches.
/// Visibility is granted only by an explicit arm, so content stays hidden
/// unless a rule says otherwise.
pub fn is_visible(member: &Member, item: &ContentItem) -> bool {
    match &item.audience {
        AudienceRule::General => true,
        AudienceRule::ScholarshipTargeted(provider) => {
            member.scholarship_provider.as_deref() == Some(provider.as_str())
        }
        AudienceRule::InstitutionTargeted(institution) => {
            member.institution.as_deref() == Some(institution.as_str())
        }
    }
}
