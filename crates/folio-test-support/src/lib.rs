//! Shared test mocks and utilities for the Folio profile directory.

mod repository;

pub use repository::{FailingProfileRepository, InMemoryProfileRepository};
