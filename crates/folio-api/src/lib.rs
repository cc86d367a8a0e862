//! Folio API — axum HTTP server for the profile directory.

pub mod error;
pub mod routes;
pub mod state;
