//! Profile repository abstraction.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::DomainError;
use crate::profile::{FriendSummary, Profile};

/// Repository trait over the profile collection.
///
/// Sub-resource mutation (experience, skills, friends) goes through
/// [`find_by_id`](Self::find_by_id) followed by [`save`](Self::save):
/// the handler mutates an in-memory copy and writes the whole document
/// back. Two concurrent mutations of the same profile can therefore
/// lose one update (last write wins at document granularity). That is
/// the intended semantics, not an oversight.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Insert a new profile with only the contact fields set.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateEmail` if another profile already
    /// holds `email`, or `DomainError::Store` on any other store failure.
    async fn insert(&self, name: &str, email: &str) -> Result<Profile, DomainError>;

    /// Load every profile.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Store` on store failure.
    async fn find_all(&self) -> Result<Vec<Profile>, DomainError>;

    /// Load one profile by id, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Store` on store failure.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, DomainError>;

    /// Replace only the contact fields of an existing profile and
    /// return the post-update document, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateEmail` if `email` is taken by
    /// another profile, or `DomainError::Store` on any other failure.
    async fn update_contact(
        &self,
        id: Uuid,
        name: &str,
        email: &str,
    ) -> Result<Option<Profile>, DomainError>;

    /// Remove a profile. Returns `false` if no such profile existed.
    /// Does not touch other profiles' `friends` lists.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Store` on store failure.
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Write every field of `profile` back to the store.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ProfileNotFound` if the document no longer
    /// exists, `DomainError::DuplicateEmail` on a unique-email
    /// violation, or `DomainError::Store` on any other failure.
    async fn save(&self, profile: &Profile) -> Result<(), DomainError>;

    /// Resolve profile ids to `{id, name, email}` summaries. Output
    /// order matches input order; an id with no matching profile yields
    /// `None` at its position.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Store` on store failure.
    async fn friend_summaries(
        &self,
        ids: &[Uuid],
    ) -> Result<Vec<Option<FriendSummary>>, DomainError>;
}
