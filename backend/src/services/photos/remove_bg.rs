use crate::background::{BackgroundRemover, RemovalError};
use crate::config::ServerConfig;
use crate::db::Db;
use crate::error::ApiError;
use actix_web::{web, HttpResponse};
use rusqlite::{params, Connection, OptionalExtension};
use std::fs;

pub(crate) async fn process(
    db: web::Data<Db>,
    config: web::Data<ServerConfig>,
    remover: web::Data<dyn BackgroundRemover>,
    user_id: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let conn = db.open()?;
    let photo = photo_path(&conn, user_id.into_inner())?;

    // Photo values are opaque paths owned by the blob layer; the media root
    // is the only interpretation applied here.
    let bytes = fs::read(config.media_root.join(&photo)).map_err(ApiError::internal)?;

    let png = remover.remove(&bytes).map_err(|err| match err {
        RemovalError::Unavailable => ApiError::Unavailable(err.to_string()),
        RemovalError::Failed(_) => ApiError::internal(err),
    })?;

    Ok(HttpResponse::Ok().content_type("image/png").body(png))
}

/// The user's stored photo path. Distinguishes "no such user" from "user
/// has no photo"; both are 404s with different messages.
fn photo_path(conn: &Connection, user_id: i64) -> Result<String, ApiError> {
    let row = conn
        .query_row(
            "SELECT photo FROM users WHERE id = ?1",
            params![user_id],
            |row| row.get::<_, Option<String>>(0),
        )
        .optional()?;

    match row {
        None => Err(ApiError::not_found("User not found")),
        Some(None) => Err(ApiError::not_found("No photo found")),
        Some(Some(photo)) if photo.is_empty() => Err(ApiError::not_found("No photo found")),
        Some(Some(photo)) => Ok(photo),
    }
}
