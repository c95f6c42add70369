//! Membership resolution rules
//!
//! An ordered table of match rules maps a member identifier to the
//! memberships it implies. Rules are evaluated independently and their
//! results unioned; one identifier may satisfy several patterns. The
//! table is a plain value, so a deployment can swap it out (e.g. from
//! configuration) without touching resolution logic.

use super::membership::MembershipSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Batch year applied when no matching rule supplies one.
pub const BASELINE_BATCH: &str = "2024";

/// How a rule pattern is matched against a member identifier.
///
/// Matching is case-sensitive in both forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRule {
    /// Identifier contains the pattern as a substring
    Contains(String),
    /// Identifier equals the literal exactly
    Exact(String),
}

impl MatchRule {
    pub fn matches(&self, id: &str) -> bool {
        match self {
            MatchRule::Contains(pattern) => id.contains(pattern.as_str()),
            MatchRule::Exact(literal) => id == literal,
        }
    }

    /// The raw pattern text, independent of match form.
    pub fn pattern(&self) -> &str {
        match self {
            MatchRule::Contains(pattern) => pattern,
            MatchRule::Exact(literal) => literal,
        }
    }
}

/// One row of the resolution table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipRule {
    pub matcher: MatchRule,

    /// Batch year this row asserts. The batch is a scalar, so the first
    /// matching row that names one wins; club and event additions from
    /// every matching row are unioned regardless.
    #[serde(default)]
    pub batch_year: Option<String>,

    #[serde(default)]
    pub clubs: Vec<String>,

    #[serde(default)]
    pub events: Vec<String>,
}

impl MembershipRule {
    pub fn new(matcher: MatchRule) -> Self {
        MembershipRule {
            matcher,
            batch_year: None,
            clubs: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn with_batch(mut self, year: impl Into<String>) -> Self {
        self.batch_year = Some(year.into());
        self
    }

    pub fn with_clubs(mut self, clubs: &[&str]) -> Self {
        self.clubs = clubs.iter().map(|c| (*c).to_owned()).collect();
        self
    }

    pub fn with_events(mut self, events: &[&str]) -> Self {
        self.events = events.iter().map(|e| (*e).to_owned()).collect();
        self
    }
}

/// The ordered resolution table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipRules {
    rules: Vec<MembershipRule>,
    baseline_batch: String,
}

impl MembershipRules {
    pub fn new(rules: Vec<MembershipRule>, baseline_batch: impl Into<String>) -> Self {
        MembershipRules {
            rules,
            baseline_batch: baseline_batch.into(),
        }
    }

    /// The table rows, in evaluation order.
    pub fn rules(&self) -> &[MembershipRule] {
        &self.rules
    }

    pub fn baseline_batch(&self) -> &str {
        &self.baseline_batch
    }

    /// Derive the membership set a member identifier implies.
    ///
    /// Total: empty or unmatched identifiers resolve to the baseline batch
    /// with no club or event memberships. Matching rows union their club
    /// and event additions in table order, skipping duplicates; the first
    /// matching row that names a batch year supplies it.
    pub fn resolve(&self, id: &str) -> MembershipSet {
        let mut batch_year: Option<&str> = None;
        let mut set = MembershipSet::new(&self.baseline_batch);

        for rule in &self.rules {
            if !rule.matcher.matches(id) {
                continue;
            }
            if batch_year.is_none() {
                batch_year = rule.batch_year.as_deref();
            }
            for club in &rule.clubs {
                set.add_club(club);
            }
            for event in &rule.events {
                set.add_event(event);
            }
        }

        if let Some(year) = batch_year {
            set.batch_year = year.to_owned();
        }

        debug!(
            id = %id,
            batch = %set.batch_year,
            clubs = set.clubs().len(),
            events = set.events().len(),
            "resolved membership"
        );
        set
    }
}

impl Default for MembershipRules {
    /// The built-in table shipped with the portal.
    fn default() -> Self {
        let rules = vec![
            MembershipRule::new(MatchRule::Contains("001".to_owned()))
                .with_batch("2024")
                .with_clubs(&["Badminton Club", "Recreational Club"])
                .with_events(&["Hackathon: Hacktopus", "Cultural Night 2024"]),
            MembershipRule::new(MatchRule::Exact("demo".to_owned()))
                .with_batch("2024")
                .with_clubs(&["Badminton Club", "Recreational Club"])
                .with_events(&["Hackathon: Hacktopus", "Cultural Night 2024"]),
            MembershipRule::new(MatchRule::Contains("002".to_owned()))
                .with_batch("2023")
                .with_clubs(&["Badminton Club", "Photography Club"])
                .with_events(&["Sports Day 2024"]),
            MembershipRule::new(MatchRule::Contains("003".to_owned()))
                .with_batch("2025")
                .with_clubs(&["Recreational Club", "Study Group"])
                .with_events(&["Hackathon: Hacktopus", "Academic Conference"]),
        ];
        MembershipRules::new(rules, BASELINE_BATCH)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        // Property: resolution is deterministic for any identifier.
        #[test]
        fn prop_resolve_is_deterministic(id in ".*") {
            let rules = MembershipRules::default();
            prop_assert_eq!(rules.resolve(&id), rules.resolve(&id));
        }

        // Property: resolution is total and the batch year is never empty.
        #[test]
        fn prop_resolve_always_yields_batch(id in ".*") {
            let rules = MembershipRules::default();
            let set = rules.resolve(&id);
            prop_assert!(!set.batch_year.is_empty());
        }

        // Property: clubs and events contain no duplicates.
        #[test]
        fn prop_resolve_sets_have_no_duplicates(id in ".*") {
            let rules = MembershipRules::default();
            let set = rules.resolve(&id);
            for (i, club) in set.clubs().iter().enumerate() {
                prop_assert!(!set.clubs()[i + 1..].contains(club));
            }
            for (i, event) in set.events().iter().enumerate() {
                prop_assert!(!set.events()[i + 1..].contains(event));
            }
        }
    }
}
