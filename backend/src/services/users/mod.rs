//! # User Projection Module
//!
//! Read-only view of the identity service's accounts. This backend never
//! writes to the `users` table; the projection exists so the generation and
//! admin pages can bind card fields without talking to the identity service
//! directly.

pub mod list;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/users";

/// Configures and returns the Actix `Scope` for user projection routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/list", get().to(list::process))
}
