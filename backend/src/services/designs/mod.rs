//! # Designer Service Module
//!
//! API endpoints backing the drag-and-drop card designer. Designs are named
//! documents of arbitrary JSON (front/back canvas layout) that this service
//! stores verbatim and hands back verbatim; the layout format belongs to the
//! designer front-end and is never validated here.
//!
//! All designer routes are admin-gated.
//!
//! ## Registered Routes:
//!
//! *   **`POST /api/designs/save`**:
//!     - **Handler**: `save::process`
//!     - **Description**: Creates a design, or updates name and document in
//!       place when the payload carries an `id`. Updating an unknown id is a
//!       404, never a silent create.
//!
//! *   **`GET /api/designs/list`**:
//!     - **Handler**: `list::process`
//!     - **Description**: The 50 most recently updated designs, newest
//!       first, as `{id, name, updated_at}` summaries.
//!
//! *   **`GET /api/designs/load/{design_id}`**:
//!     - **Handler**: `load::process`
//!     - **Description**: Full stored document for one design.
//!
//! *   **`POST /api/designs/batch-export`**:
//!     - **Handler**: `batch_export::process`
//!     - **Description**: Accepts a design id plus a list of users and
//!       acknowledges the request. Rendering is not implemented server-side;
//!       see the handler for the contract.

mod batch_export;
mod list;
mod load;
mod save;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/designs";

/// Configures and returns the Actix `Scope` for all designer routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/save", post().to(save::process))
        .route("/list", get().to(list::process))
        .route("/load/{design_id}", get().to(load::process))
        .route("/batch-export", post().to(batch_export::process))
}
