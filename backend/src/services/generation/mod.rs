//! # Card Generation Module
//!
//! Read-only projections feeding the card generation page. The actual
//! rendering happens client-side on a canvas; the server's job is to join
//! the registry templates with the identity projections so the page can
//! bind user fields into template placeholders.
//!
//! ## Registered Routes:
//!
//! *   **`GET /api/generation/context`**:
//!     - **Handler**: `context::process`
//!     - **Description**: Everything the generation page needs in one call:
//!       all registry templates plus all user projections.
//!
//! *   **`GET /api/generation/templates`**:
//!     - **Handler**: `templates::process`
//!     - **Description**: Registry templates with their parsed documents,
//!       wrapped in a `{templates, status, count}` envelope.
//!
//! *   **`GET /api/generation/templates/{template_id}`**:
//!     - **Handler**: `detail::process`
//!     - **Description**: One template, 404 when absent.
//!
//! *   **`POST /api/generation/templates/{template_id}/delete`**:
//!     - **Handler**: `delete::process`
//!     - **Description**: Admin-gated removal of a registry template.
//!       Deleting an id that does not exist reports 404 rather than
//!       succeeding silently.

mod context;
mod delete;
mod detail;
pub mod templates;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/generation";

/// Configures and returns the Actix `Scope` for generation routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/context", get().to(context::process))
        .route("/templates", get().to(templates::process))
        .route("/templates/{template_id}", get().to(detail::process))
        .route("/templates/{template_id}/delete", post().to(delete::process))
}
