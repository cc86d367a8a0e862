//! Routes for the profile resource.
//!
//! Every handler is a stateless fetch → mutate → persist sequence over
//! the repository; there is no intermediate state and no rollback. If
//! a save fails after a successful fetch, the in-memory mutation is
//! simply discarded.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use folio_core::error::DomainError;
use folio_core::profile::{Experience, FriendSummary, Information, Profile};
use folio_core::repository::ProfileRepository;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for profile creation and contact updates.
#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    /// Display name.
    pub name: String,
    /// Unique email address.
    pub email: String,
}

/// Request body for POST /{id}/skills.
#[derive(Debug, Deserialize)]
pub struct AddSkillRequest {
    /// Skill label to append.
    pub skill: String,
}

/// Request body for POST /{id}/friends.
#[derive(Debug, Deserialize)]
pub struct AddFriendRequest {
    /// Id of the profile to reference.
    pub friend_id: Uuid,
}

/// Response body for DELETE /{id}.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    /// Confirmation message.
    pub message: String,
}

/// A profile serialization with friend references resolved to
/// summaries. A dangling reference resolves to `null` at its position.
#[derive(Debug, Serialize)]
pub struct ProfileView {
    /// Profile id.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Work-history entries.
    pub experience: Vec<Experience>,
    /// Skill labels.
    pub skills: Vec<String>,
    /// Biographical details.
    pub information: Information,
    /// Resolved friend references.
    pub friends: Vec<Option<FriendSummary>>,
}

/// Resolve the `friends` id list of `profile` into summaries.
async fn resolve_friends(
    profile: Profile,
    repository: &dyn ProfileRepository,
) -> Result<ProfileView, DomainError> {
    let friends = repository.friend_summaries(&profile.friends).await?;
    Ok(ProfileView {
        id: profile.id,
        name: profile.name,
        email: profile.email,
        experience: profile.experience,
        skills: profile.skills,
        information: profile.information,
        friends,
    })
}

/// Load a profile or fail with `ProfileNotFound`.
async fn fetch_profile(
    repository: &dyn ProfileRepository,
    id: Uuid,
) -> Result<Profile, DomainError> {
    repository
        .find_by_id(id)
        .await?
        .ok_or(DomainError::ProfileNotFound(id))
}

/// GET /
#[instrument(skip(state))]
async fn list_profiles(State(state): State<AppState>) -> Result<Json<Vec<ProfileView>>, ApiError> {
    let profiles = state.repository.find_all().await?;
    let mut views = Vec::with_capacity(profiles.len());
    for profile in profiles {
        views.push(resolve_friends(profile, state.repository.as_ref()).await?);
    }
    Ok(Json(views))
}

/// GET /{id}
#[instrument(skip(state), fields(profile_id = %id))]
async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProfileView>, ApiError> {
    let profile = fetch_profile(state.repository.as_ref(), id).await?;
    let view = resolve_friends(profile, state.repository.as_ref()).await?;
    Ok(Json(view))
}

/// POST /
#[instrument(skip(state, request), fields(email = %request.email))]
async fn create_profile(
    State(state): State<AppState>,
    Json(request): Json<ContactRequest>,
) -> Result<(StatusCode, Json<Profile>), ApiError> {
    let profile = state
        .repository
        .insert(&request.name, &request.email)
        .await?;

    info!(profile_id = %profile.id, "profile created");

    Ok((StatusCode::CREATED, Json(profile)))
}

/// PUT /{id}
#[instrument(skip(state, request), fields(profile_id = %id))]
async fn update_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ContactRequest>,
) -> Result<Json<Profile>, ApiError> {
    let profile = state
        .repository
        .update_contact(id, &request.name, &request.email)
        .await?
        .ok_or(DomainError::ProfileNotFound(id))?;

    Ok(Json(profile))
}

/// DELETE /{id}
///
/// Does not cascade: the deleted id stays in other profiles' `friends`
/// lists and resolves to `null` from then on.
#[instrument(skip(state), fields(profile_id = %id))]
async fn delete_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, ApiError> {
    if !state.repository.delete(id).await? {
        return Err(DomainError::ProfileNotFound(id).into());
    }

    info!("profile deleted");

    Ok(Json(DeleteResponse {
        message: "Profile deleted".to_owned(),
    }))
}

/// POST /{id}/experience
#[instrument(skip(state, entry), fields(profile_id = %id))]
async fn add_experience(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(entry): Json<Experience>,
) -> Result<Json<Profile>, ApiError> {
    let mut profile = fetch_profile(state.repository.as_ref(), id).await?;
    // The entry is appended as given; no identifier is assigned.
    profile.experience.push(entry);
    state.repository.save(&profile).await?;
    Ok(Json(profile))
}

/// DELETE /{id}/experience/{exp_id}
///
/// Removing an id that matches nothing is not an error; the profile is
/// returned unchanged.
#[instrument(skip(state), fields(profile_id = %id, exp_id = %exp_id))]
async fn remove_experience(
    State(state): State<AppState>,
    Path((id, exp_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Profile>, ApiError> {
    let mut profile = fetch_profile(state.repository.as_ref(), id).await?;
    profile.experience.retain(|e| e.id != Some(exp_id));
    state.repository.save(&profile).await?;
    Ok(Json(profile))
}

/// POST /{id}/skills
#[instrument(skip(state, request), fields(profile_id = %id))]
async fn add_skill(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AddSkillRequest>,
) -> Result<Json<Profile>, ApiError> {
    let mut profile = fetch_profile(state.repository.as_ref(), id).await?;
    // No duplicate check: the same label may appear twice.
    profile.skills.push(request.skill);
    state.repository.save(&profile).await?;
    Ok(Json(profile))
}

/// DELETE /{id}/skills/{skill}
///
/// Removes every exact string match; no-ops silently otherwise.
#[instrument(skip(state), fields(profile_id = %id, skill = %skill))]
async fn remove_skill(
    State(state): State<AppState>,
    Path((id, skill)): Path<(Uuid, String)>,
) -> Result<Json<Profile>, ApiError> {
    let mut profile = fetch_profile(state.repository.as_ref(), id).await?;
    profile.skills.retain(|s| s != &skill);
    state.repository.save(&profile).await?;
    Ok(Json(profile))
}

/// POST /{id}/friends
///
/// Verifies both profiles exist, then appends the reference. The two
/// reads and the write are independent operations; nothing is
/// transactional between them. The reference is one-directional: the
/// befriended profile is not updated.
#[instrument(skip(state, request), fields(profile_id = %id, friend_id = %request.friend_id))]
async fn add_friend(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AddFriendRequest>,
) -> Result<Json<Profile>, ApiError> {
    let mut profile = fetch_profile(state.repository.as_ref(), id).await?;
    if state
        .repository
        .find_by_id(request.friend_id)
        .await?
        .is_none()
    {
        return Err(DomainError::ProfileNotFound(request.friend_id).into());
    }

    // No duplicate check and no symmetric add on the friend's side.
    profile.friends.push(request.friend_id);
    state.repository.save(&profile).await?;
    Ok(Json(profile))
}

/// DELETE /{id}/friends/{friend_id}
#[instrument(skip(state), fields(profile_id = %id, friend_id = %friend_id))]
async fn remove_friend(
    State(state): State<AppState>,
    Path((id, friend_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Profile>, ApiError> {
    let mut profile = fetch_profile(state.repository.as_ref(), id).await?;
    profile.friends.retain(|f| *f != friend_id);
    state.repository.save(&profile).await?;
    Ok(Json(profile))
}

/// Returns the router for the profile resource.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_profiles).post(create_profile))
        .route(
            "/{id}",
            get(get_profile).put(update_profile).delete(delete_profile),
        )
        .route("/{id}/experience", post(add_experience))
        .route("/{id}/experience/{exp_id}", delete(remove_experience))
        .route("/{id}/skills", post(add_skill))
        .route("/{id}/skills/{skill}", delete(remove_skill))
        .route("/{id}/friends", post(add_friend))
        .route("/{id}/friends/{friend_id}", delete(remove_friend))
}
