//! HTTP layer: wire DTOs and the `/ai/*` endpoint helpers.

pub mod api;
pub mod types;
