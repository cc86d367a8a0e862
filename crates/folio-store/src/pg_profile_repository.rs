//! `PostgreSQL` implementation of the `ProfileRepository` trait.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use folio_core::error::DomainError;
use folio_core::profile::{Experience, FriendSummary, Information, Profile};
use folio_core::repository::ProfileRepository;

const PROFILE_COLUMNS: &str = "id, name, email, experience, skills, information, friends";

/// PostgreSQL-backed profile repository.
#[derive(Debug, Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    /// Creates a new `PgProfileRepository`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Row shape of the profiles table.
#[derive(sqlx::FromRow)]
struct ProfileRow {
    id: Uuid,
    name: String,
    email: String,
    experience: Json<Vec<Experience>>,
    skills: Json<Vec<String>>,
    information: Json<Information>,
    friends: Vec<Uuid>,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            experience: row.experience.0,
            skills: row.skills.0,
            information: row.information.0,
            friends: row.friends,
        }
    }
}

#[derive(sqlx::FromRow)]
struct SummaryRow {
    id: Uuid,
    name: String,
    email: String,
}

fn store_error(err: sqlx::Error) -> DomainError {
    DomainError::Store(err.to_string())
}

/// Translate a unique-constraint violation into `DuplicateEmail`; the
/// only unique constraint on the table is the one on `email`.
fn unique_or_store(err: sqlx::Error, email: &str) -> DomainError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            DomainError::DuplicateEmail(email.to_owned())
        }
        _ => store_error(err),
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    async fn insert(&self, name: &str, email: &str) -> Result<Profile, DomainError> {
        let row = sqlx::query_as::<_, ProfileRow>(&format!(
            "INSERT INTO profiles (name, email) VALUES ($1, $2) RETURNING {PROFILE_COLUMNS}"
        ))
        .bind(name)
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| unique_or_store(e, email))?;

        Ok(row.into())
    }

    async fn find_all(&self) -> Result<Vec<Profile>, DomainError> {
        let rows =
            sqlx::query_as::<_, ProfileRow>(&format!("SELECT {PROFILE_COLUMNS} FROM profiles"))
                .fetch_all(&self.pool)
                .await
                .map_err(store_error)?;

        Ok(rows.into_iter().map(Profile::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, DomainError> {
        let row = sqlx::query_as::<_, ProfileRow>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(row.map(Profile::from))
    }

    async fn update_contact(
        &self,
        id: Uuid,
        name: &str,
        email: &str,
    ) -> Result<Option<Profile>, DomainError> {
        let row = sqlx::query_as::<_, ProfileRow>(&format!(
            "UPDATE profiles SET name = $2, email = $3 WHERE id = $1 RETURNING {PROFILE_COLUMNS}"
        ))
        .bind(id)
        .bind(name)
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| unique_or_store(e, email))?;

        Ok(row.map(Profile::from))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM profiles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(store_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn save(&self, profile: &Profile) -> Result<(), DomainError> {
        // Wholesale write-back: every field, no version check. Last
        // write wins at document granularity.
        let result = sqlx::query(
            "UPDATE profiles \
             SET name = $2, email = $3, experience = $4, skills = $5, \
                 information = $6, friends = $7 \
             WHERE id = $1",
        )
        .bind(profile.id)
        .bind(&profile.name)
        .bind(&profile.email)
        .bind(Json(&profile.experience))
        .bind(Json(&profile.skills))
        .bind(Json(&profile.information))
        .bind(&profile.friends)
        .execute(&self.pool)
        .await
        .map_err(|e| unique_or_store(e, &profile.email))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ProfileNotFound(profile.id));
        }
        Ok(())
    }

    async fn friend_summaries(
        &self,
        ids: &[Uuid],
    ) -> Result<Vec<Option<FriendSummary>>, DomainError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows =
            sqlx::query_as::<_, SummaryRow>("SELECT id, name, email FROM profiles WHERE id = ANY($1)")
                .bind(ids)
                .fetch_all(&self.pool)
                .await
                .map_err(store_error)?;

        let by_id: HashMap<Uuid, FriendSummary> = rows
            .into_iter()
            .map(|r| {
                (
                    r.id,
                    FriendSummary {
                        id: r.id,
                        name: r.name,
                        email: r.email,
                    },
                )
            })
            .collect();

        Ok(ids.iter().map(|id| by_id.get(id).cloned()).collect())
    }
}
