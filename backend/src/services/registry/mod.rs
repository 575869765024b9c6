//! # Template Registry Module
//!
//! A second, independent template collection alongside the designer's
//! design store. The two grew separately and have deliberately different
//! contracts: registry creation is insert-only (saving twice with the same
//! payload makes two rows, there is no update path here), and its listing
//! endpoint returns a bare array with its own historical field names.
//! They share no identifiers and are never synchronised.
//!
//! ## Registered Routes:
//!
//! *   **`POST /api/templates/save`**: insert a new registry template.
//! *   **`GET /api/templates/list`**: every registry template, newest first.

pub mod list;
pub mod save;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/templates";

/// Configures and returns the Actix `Scope` for registry routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/save", post().to(save::process))
        .route("/list", get().to(list::process))
}
