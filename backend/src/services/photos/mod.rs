//! # Photo Processing Module
//!
//! Card photos need their background stripped before they sit on a coloured
//! template. The segmentation itself is an external capability (see
//! `crate::background`); this module only wires it to the identity records
//! and the media store.
//!
//! ## Registered Routes:
//!
//! *   **`GET /api/photos/remove-bg/{user_id}`**: run the user's stored
//!     photo through the remover and respond with a transparent PNG.

mod remove_bg;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/photos";

/// Configures and returns the Actix `Scope` for photo routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/remove-bg/{user_id}", get().to(remove_bg::process))
}
