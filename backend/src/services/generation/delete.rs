use crate::auth::AdminActor;
use crate::db::Db;
use crate::error::ApiError;
use actix_web::{web, HttpResponse};
use rusqlite::{params, Connection};

pub(crate) async fn process(
    db: web::Data<Db>,
    _actor: AdminActor,
    template_id: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = template_id.into_inner();
    let conn = db.open()?;
    delete_template(&conn, id)?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "status": "ok", "deleted_id": id })))
}

/// Not idempotent by contract: deleting a missing id is a 404.
pub fn delete_template(conn: &Connection, template_id: i64) -> Result<(), ApiError> {
    let deleted = conn.execute(
        "DELETE FROM id_templates WHERE id = ?1",
        params![template_id],
    )?;
    if deleted == 0 {
        return Err(ApiError::not_found("Template not found"));
    }
    Ok(())
}
