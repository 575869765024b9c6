use crate::db::Db;
use crate::error::ApiError;
use actix_web::{web, HttpResponse};
use common::model::template::TemplateDetail;
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::Value;

pub(crate) async fn process(db: web::Data<Db>) -> Result<HttpResponse, ApiError> {
    let conn = db.open()?;
    let templates = all_templates(&conn)?;
    let count = templates.len();
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "templates": templates,
        "status": "ok",
        "count": count,
    })))
}

/// All registry templates with parsed documents, newest first.
pub fn all_templates(conn: &Connection) -> Result<Vec<TemplateDetail>, ApiError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, template_json, created_at FROM id_templates ORDER BY id DESC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(TemplateDetail {
            id: row.get(0)?,
            name: row.get(1)?,
            json: parse_document(&row.get::<_, String>(2)?),
            created_at: row.get(3)?,
        })
    })?;
    let templates = rows.collect::<Result<Vec<_>, _>>()?;
    Ok(templates)
}

/// One registry template by id.
pub fn template_by_id(conn: &Connection, template_id: i64) -> Result<TemplateDetail, ApiError> {
    conn.query_row(
        "SELECT id, name, template_json, created_at FROM id_templates WHERE id = ?1",
        params![template_id],
        |row| {
            Ok(TemplateDetail {
                id: row.get(0)?,
                name: row.get(1)?,
                json: parse_document(&row.get::<_, String>(2)?),
                created_at: row.get(3)?,
            })
        },
    )
    .optional()?
    .ok_or_else(|| ApiError::not_found("Template not found"))
}

fn parse_document(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| serde_json::json!({}))
}
