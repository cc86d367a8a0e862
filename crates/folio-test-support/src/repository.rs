//! Test repositories — mock `ProfileRepository` implementations.

use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use folio_core::error::DomainError;
use folio_core::profile::{FriendSummary, Profile};
use folio_core::repository::ProfileRepository;

/// An in-memory profile repository backed by a `Vec` in insertion
/// order. Mirrors the store contract: email uniqueness is enforced on
/// insert, contact update, and save; `save` replaces the whole
/// document without any version check, so interleaved fetch/save pairs
/// exhibit the same lost-update behavior as the real store.
#[derive(Debug, Default)]
pub struct InMemoryProfileRepository {
    profiles: Mutex<Vec<Profile>>,
}

impl InMemoryProfileRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of a stored profile, bypassing the trait. Lets tests
    /// assert on raw stored state (e.g. dangling friend ids).
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn stored(&self, id: Uuid) -> Option<Profile> {
        self.profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    fn email_taken(profiles: &[Profile], email: &str, exclude: Option<Uuid>) -> bool {
        profiles
            .iter()
            .any(|p| p.email == email && Some(p.id) != exclude)
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn insert(&self, name: &str, email: &str) -> Result<Profile, DomainError> {
        let mut profiles = self.profiles.lock().unwrap();
        if Self::email_taken(&profiles, email, None) {
            return Err(DomainError::DuplicateEmail(email.to_owned()));
        }
        let profile = Profile::new(Uuid::new_v4(), name, email);
        profiles.push(profile.clone());
        Ok(profile)
    }

    async fn find_all(&self) -> Result<Vec<Profile>, DomainError> {
        Ok(self.profiles.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, DomainError> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn update_contact(
        &self,
        id: Uuid,
        name: &str,
        email: &str,
    ) -> Result<Option<Profile>, DomainError> {
        let mut profiles = self.profiles.lock().unwrap();
        if Self::email_taken(&profiles, email, Some(id)) {
            return Err(DomainError::DuplicateEmail(email.to_owned()));
        }
        let Some(profile) = profiles.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        profile.name = name.to_owned();
        profile.email = email.to_owned();
        Ok(Some(profile.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut profiles = self.profiles.lock().unwrap();
        let before = profiles.len();
        profiles.retain(|p| p.id != id);
        Ok(profiles.len() < before)
    }

    async fn save(&self, profile: &Profile) -> Result<(), DomainError> {
        let mut profiles = self.profiles.lock().unwrap();
        if Self::email_taken(&profiles, &profile.email, Some(profile.id)) {
            return Err(DomainError::DuplicateEmail(profile.email.clone()));
        }
        let Some(slot) = profiles.iter_mut().find(|p| p.id == profile.id) else {
            return Err(DomainError::ProfileNotFound(profile.id));
        };
        *slot = profile.clone();
        Ok(())
    }

    async fn friend_summaries(
        &self,
        ids: &[Uuid],
    ) -> Result<Vec<Option<FriendSummary>>, DomainError> {
        let profiles = self.profiles.lock().unwrap();
        Ok(ids
            .iter()
            .map(|id| {
                profiles.iter().find(|p| p.id == *id).map(|p| FriendSummary {
                    id: p.id,
                    name: p.name.clone(),
                    email: p.email.clone(),
                })
            })
            .collect())
    }
}

/// A profile repository that fails every call with a store error.
/// Useful for testing error-handling paths.
#[derive(Debug)]
pub struct FailingProfileRepository;

fn connection_refused() -> DomainError {
    DomainError::Store("connection refused".into())
}

#[async_trait]
impl ProfileRepository for FailingProfileRepository {
    async fn insert(&self, _name: &str, _email: &str) -> Result<Profile, DomainError> {
        Err(connection_refused())
    }

    async fn find_all(&self) -> Result<Vec<Profile>, DomainError> {
        Err(connection_refused())
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Profile>, DomainError> {
        Err(connection_refused())
    }

    async fn update_contact(
        &self,
        _id: Uuid,
        _name: &str,
        _email: &str,
    ) -> Result<Option<Profile>, DomainError> {
        Err(connection_refused())
    }

    async fn delete(&self, _id: Uuid) -> Result<bool, DomainError> {
        Err(connection_refused())
    }

    async fn save(&self, _profile: &Profile) -> Result<(), DomainError> {
        Err(connection_refused())
    }

    async fn friend_summaries(
        &self,
        _ids: &[Uuid],
    ) -> Result<Vec<Option<FriendSummary>>, DomainError> {
        Err(connection_refused())
    }
}
