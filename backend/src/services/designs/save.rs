use crate::auth::AdminActor;
use crate::db::{now_rfc3339, Db};
use crate::error::ApiError;
use actix_web::{web, HttpResponse};
use common::requests::SaveDesignRequest;
use rusqlite::{params, Connection};
use serde_json::Value;

pub(crate) async fn process(
    db: web::Data<Db>,
    actor: AdminActor,
    payload: web::Json<SaveDesignRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = payload.into_inner();
    let name = req.name.unwrap_or_else(|| "Untitled".to_string());
    // Older designer builds sent the document as `data` instead of `json`.
    let document = req
        .json
        .or(req.data)
        .unwrap_or_else(|| serde_json::json!({}));

    let conn = db.open()?;
    let id = save_design(&conn, req.id, &name, &document, Some(actor.id))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "ok": true, "id": id, "name": name })))
}

/// Insert a new design, or overwrite name/document of an existing one.
///
/// The document is serialized verbatim; whatever JSON the designer produced
/// is what a later load will return. Passing an `id` that matches no row is
/// an error — the caller asked to edit something that does not exist.
pub fn save_design(
    conn: &Connection,
    id: Option<i64>,
    name: &str,
    document: &Value,
    created_by: Option<i64>,
) -> Result<i64, ApiError> {
    let json_data = document.to_string();
    let now = now_rfc3339();

    match id {
        Some(design_id) => {
            let updated = conn.execute(
                "UPDATE template_designs SET name = ?1, json_data = ?2, updated_at = ?3 WHERE id = ?4",
                params![name, json_data, now, design_id],
            )?;
            if updated == 0 {
                return Err(ApiError::not_found("Design not found"));
            }
            Ok(design_id)
        }
        None => {
            conn.execute(
                "INSERT INTO template_designs (name, json_data, created_by, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![name, json_data, created_by, now, now],
            )?;
            Ok(conn.last_insert_rowid())
        }
    }
}
