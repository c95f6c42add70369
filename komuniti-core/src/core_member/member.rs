//! Member profile supplied by the identity collaborator

use serde::{Deserialize, Serialize};

/// A verified member profile.
///
/// Produced by the external identity collaborator after credential checks;
/// the engine only consumes this shape and treats it as immutable for the
/// duration of a session. Absent attributes never match a targeted
/// audience rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Stable member identifier (the login id)
    pub id: String,

    /// Name shown in the portal
    pub display_name: String,

    /// Scholarship provider, if the member holds one
    pub scholarship_provider: Option<String>,

    /// Institution the member is enrolled at
    pub institution: Option<String>,
}

impl Member {
    /// Create a profile with no scholarship or institution attributes.
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Member {
            id: id.into(),
            display_name: display_name.into(),
            scholarship_provider: None,
            institution: None,
        }
    }

    /// Set the scholarship provider
    pub fn with_scholarship(mut self, provider: impl Into<String>) -> Self {
        self.scholarship_provider = Some(provider.into());
        self
    }

    /// Set the institution
    pub fn with_institution(mut self, institution: impl Into<String>) -> Self {
        self.institution = Some(institution.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_member_has_no_attributes() {
        let member = Member::new("K0042", "Nor Azlina");
        assert_eq!(member.id, "K0042");
        assert_eq!(member.display_name, "Nor Azlina");
        assert_eq!(member.scholarship_provider, None);
        assert_eq!(member.institution, None);
    }

    #[test]
    fn test_builder_sets_attributes() {
        let member = Member::new("K0042", "Nor Azlina")
            .with_scholarship("MARA")
            .with_institution("SNU");
        assert_eq!(member.scholarship_provider.as_deref(), Some("MARA"));
        assert_eq!(member.institution.as_deref(), Some("SNU"));
    }
}
