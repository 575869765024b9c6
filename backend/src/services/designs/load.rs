//! # Design Load Service
//!
//! Backend logic for `GET /api/designs/load/{design_id}`: fetch one stored
//! design and return its document to the designer canvas.
//!
//! The document is stored as serialized JSON text and parsed back on the way
//! out. A row whose text does not parse (hand-edited database, legacy data)
//! is still served, with the raw text wrapped in a JSON string rather than
//! failing the load.

use crate::auth::AdminActor;
use crate::db::Db;
use crate::error::ApiError;
use actix_web::{web, HttpResponse};
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::Value;

#[derive(Debug)]
pub struct LoadedDesign {
    pub id: i64,
    pub name: String,
    pub json: Value,
}

pub(crate) async fn process(
    db: web::Data<Db>,
    _actor: AdminActor,
    design_id: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let conn = db.open()?;
    let design = load_design(&conn, design_id.into_inner())?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "id": design.id,
        "name": design.name,
        "json": design.json,
    })))
}

pub fn load_design(conn: &Connection, design_id: i64) -> Result<LoadedDesign, ApiError> {
    let row = conn
        .query_row(
            "SELECT id, name, json_data FROM template_designs WHERE id = ?1",
            params![design_id],
            |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            },
        )
        .optional()?;

    let (id, name, json_data) = row.ok_or_else(|| ApiError::not_found("not found"))?;
    let json = serde_json::from_str(&json_data).unwrap_or(Value::String(json_data));

    Ok(LoadedDesign { id, name, json })
}
