//! Profile store database schema.

/// SQL to create the profiles table.
///
/// One row per profile; the embedded sub-entities live in JSONB
/// columns, friend references in a UUID array. Email uniqueness is
/// enforced here, at the store.
pub const CREATE_PROFILES_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS profiles (
    id          UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name        TEXT NOT NULL,
    email       TEXT NOT NULL UNIQUE,
    experience  JSONB NOT NULL DEFAULT '[]'::jsonb,
    skills      JSONB NOT NULL DEFAULT '[]'::jsonb,
    information JSONB NOT NULL DEFAULT '{}'::jsonb,
    friends     UUID[] NOT NULL DEFAULT '{}'
);
";
