//! # Dashboard Settings Module
//!
//! The per-field visibility configuration: a single record, created lazily
//! with every flag on, controlling which profile fields dashboards and
//! generated cards display.
//!
//! Updates use checkbox semantics end to end: the submitted payload is the
//! complete new state, and any flag it omits is turned off. Consumers must
//! always send the full set of flags they want enabled.
//!
//! ## Registered Routes:
//!
//! *   **`GET /api/settings`**: fetch (creating on first access) the record.
//! *   **`POST /api/settings`**: replace all flags; admin-gated.

mod get;
mod update;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/settings";

/// Configures and returns the Actix `Scope` for settings routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(get::process))
        .route("", post().to(update::process))
}
