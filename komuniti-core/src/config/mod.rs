//! Configuration for the portal engine
//!
//! The rule tables and the catalog are plain data, so a deployment can
//! replace them from a TOML file without touching resolver or filter
//! logic. A default-constructed config mirrors the built-in tables
//! exactly.

use crate::core_catalog::{ChannelTemplate, ContentCatalog, ContentItem, StaticCatalog};
use crate::core_channel::MetaRule;
use crate::core_member::{MembershipRule, MembershipRules};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

mod error;

pub use error::ConfigError;

/// Membership rule table configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MembershipConfig {
    /// Batch year applied when no rule supplies one
    pub baseline_batch: String,

    /// Resolution table rows, in evaluation order
    pub rules: Vec<MembershipRule>,
}

impl Default for MembershipConfig {
    fn default() -> Self {
        let builtin = MembershipRules::default();
        MembershipConfig {
            baseline_batch: builtin.baseline_batch().to_owned(),
            rules: builtin.rules().to_vec(),
        }
    }
}

/// Content catalog configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub items: Vec<ContentItem>,
    pub templates: Vec<ChannelTemplate>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        let seeded = StaticCatalog::seeded();
        CatalogConfig {
            items: seeded.items().to_vec(),
            templates: seeded.templates().to_vec(),
        }
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    pub membership: MembershipConfig,
    pub catalog: CatalogConfig,

    /// Channel metadata rows prepended to the built-in table, so they win
    /// over shipped defaults. Matchers run against lowercased names.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub channel_meta: Vec<MetaRule>,
}

impl PortalConfig {
    /// Read and validate a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Parse and validate TOML configuration text.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: PortalConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject tables a running engine could not evaluate sensibly:
    /// an empty `contains` pattern would match every identifier, and
    /// duplicate ids would make result lists ambiguous.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for rule in &self.membership.rules {
            if rule.matcher.pattern().is_empty() {
                return Err(ConfigError::Validation(
                    "membership rule with empty match pattern".to_owned(),
                ));
            }
        }
        // Duplicate detection is shared with catalog construction.
        StaticCatalog::new(self.catalog.items.clone(), self.catalog.templates.clone())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_member::{MatchRule, BASELINE_BATCH};
    use std::io::Write;

    #[test]
    fn test_default_config_mirrors_builtin_tables() {
        let config = PortalConfig::default();
        assert_eq!(config.membership.baseline_batch, BASELINE_BATCH);
        assert_eq!(config.membership.rules.len(), 4);
        assert_eq!(config.catalog.items.len(), 6);
        assert_eq!(config.catalog.templates.len(), 3);
        assert!(config.channel_meta.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config = PortalConfig::from_toml_str("").unwrap();
        assert_eq!(config, PortalConfig::default());
    }

    #[test]
    fn test_parse_membership_rules_from_toml() {
        let raw = r#"
            [membership]
            baseline_batch = "2026"

            [[membership.rules]]
            matcher = { contains = "777" }
            batch_year = "2027"
            clubs = ["Chess Club"]
            events = ["Winter Retreat"]
        "#;
        let config = PortalConfig::from_toml_str(raw).unwrap();
        assert_eq!(config.membership.baseline_batch, "2026");
        assert_eq!(config.membership.rules.len(), 1);
        assert_eq!(
            config.membership.rules[0].matcher,
            MatchRule::Contains("777".to_owned())
        );
        assert_eq!(config.membership.rules[0].clubs, ["Chess Club"]);
        // Unspecified sections keep the built-in tables.
        assert_eq!(config.catalog.items.len(), 6);
    }

    #[test]
    fn test_parse_catalog_items_from_toml() {
        let raw = r#"
            [[catalog.items]]
            id = "n1"
            title = "Welcome"
            body = "Hello new members"
            audience = "general"

            [[catalog.items]]
            id = "n2"
            title = "Scholars briefing"
            body = "Attendance required"
            audience = { scholarship_targeted = "MARA" }
            read = true

            [[catalog.templates]]
            id = "hall"
            display_name = "Town Hall"
            kind = "official"
        "#;
        let config = PortalConfig::from_toml_str(raw).unwrap();
        assert_eq!(config.catalog.items.len(), 2);
        assert!(config.catalog.items[1].read);
        assert_eq!(config.catalog.templates.len(), 1);
    }

    #[test]
    fn test_rejects_empty_match_pattern() {
        let raw = r#"
            [[membership.rules]]
            matcher = { contains = "" }
        "#;
        let result = PortalConfig::from_toml_str(raw);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_rejects_duplicate_item_ids() {
        let raw = r#"
            [[catalog.items]]
            id = "dup"
            title = "A"
            body = "a"
            audience = "general"

            [[catalog.items]]
            id = "dup"
            title = "B"
            body = "b"
            audience = "general"
        "#;
        let result = PortalConfig::from_toml_str(raw);
        assert!(matches!(result, Err(ConfigError::Catalog(_))));
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let result = PortalConfig::from_toml_str("[membership");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [membership]
            baseline_batch = "2030"
            rules = []
            "#
        )
        .unwrap();
        let config = PortalConfig::load(file.path()).unwrap();
        assert_eq!(config.membership.baseline_batch, "2030");
        assert!(config.membership.rules.is_empty());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = PortalConfig::load("/nonexistent/portal.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = PortalConfig::default();
        let raw = toml::to_string(&config).unwrap();
        let parsed = PortalConfig::from_toml_str(&raw).unwrap();
        assert_eq!(parsed, config);
    }
}
