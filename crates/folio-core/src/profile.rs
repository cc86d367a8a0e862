//! Profile aggregate and its embedded sub-entities.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A work-history entry embedded in a profile.
///
/// Entries have no lifecycle of their own; they exist only inside the
/// owning profile's `experience` list. Creation does not assign an
/// identifier — an `id` supplied by the caller is stored verbatim, and
/// only entries that carry one can later be removed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    /// Optional entry identifier.
    #[serde(default)]
    pub id: Option<Uuid>,
    /// Job title.
    #[serde(default)]
    pub title: Option<String>,
    /// Employer name.
    #[serde(default)]
    pub company: Option<String>,
    /// Free-form date range, e.g. "2019 - 2022".
    #[serde(default)]
    pub dates: Option<String>,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Optional biographical details embedded in a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Information {
    /// Short biography.
    #[serde(default)]
    pub bio: Option<String>,
    /// Location, free-form.
    #[serde(default)]
    pub location: Option<String>,
    /// Personal website URL.
    #[serde(default)]
    pub website: Option<String>,
}

/// The profile aggregate root.
///
/// `experience`, `skills`, and `information` are embedded and owned
/// exclusively by this profile. `friends` holds weak references to
/// other profiles by id: strictly one-directional, never cascaded on
/// delete, so a referenced profile may no longer exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Store-assigned unique identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address, unique across all profiles.
    pub email: String,
    /// Work-history entries, in insertion order.
    #[serde(default)]
    pub experience: Vec<Experience>,
    /// Skill labels, in insertion order. Duplicates are not prevented
    /// by the model.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Optional biographical details.
    #[serde(default)]
    pub information: Information,
    /// Ids of befriended profiles, in insertion order.
    #[serde(default)]
    pub friends: Vec<Uuid>,
}

impl Profile {
    /// Create a profile with only the contact fields set; every
    /// sub-collection starts empty.
    #[must_use]
    pub fn new(id: Uuid, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            experience: Vec::new(),
            skills: Vec::new(),
            information: Information::default(),
            friends: Vec::new(),
        }
    }
}

/// Projection of a referenced profile, produced when resolving the
/// `friends` id list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendSummary {
    /// Id of the referenced profile.
    pub id: Uuid,
    /// Display name of the referenced profile.
    pub name: String,
    /// Email of the referenced profile.
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_profile_has_empty_sub_collections() {
        let id = Uuid::new_v4();
        let profile = Profile::new(id, "Ada", "ada@x.io");

        assert_eq!(profile.id, id);
        assert_eq!(profile.name, "Ada");
        assert_eq!(profile.email, "ada@x.io");
        assert!(profile.experience.is_empty());
        assert!(profile.skills.is_empty());
        assert!(profile.friends.is_empty());
        assert_eq!(profile.information, Information::default());
    }

    #[test]
    fn test_experience_deserializes_with_missing_fields() {
        let entry: Experience = serde_json::from_str(r#"{"title": "Engineer"}"#).unwrap();

        assert_eq!(entry.title.as_deref(), Some("Engineer"));
        assert!(entry.id.is_none());
        assert!(entry.company.is_none());
        assert!(entry.dates.is_none());
        assert!(entry.description.is_none());
    }

    #[test]
    fn test_profile_json_round_trip() {
        let mut profile = Profile::new(Uuid::new_v4(), "Ada", "ada@x.io");
        profile.skills.push("rust".to_owned());
        profile.experience.push(Experience {
            id: Some(Uuid::new_v4()),
            title: Some("Engineer".to_owned()),
            ..Experience::default()
        });
        profile.friends.push(Uuid::new_v4());

        let json = serde_json::to_string(&profile).unwrap();
        let decoded: Profile = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, profile);
    }
}
