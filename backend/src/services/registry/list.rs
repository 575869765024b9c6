use crate::db::Db;
use crate::error::ApiError;
use actix_web::{web, HttpResponse};
use common::model::template::TemplateListEntry;
use rusqlite::Connection;
use serde_json::Value;

pub(crate) async fn process(db: web::Data<Db>) -> Result<HttpResponse, ApiError> {
    let conn = db.open()?;
    let templates = list_templates(&conn)?;
    // Historical contract: a bare array, not an envelope.
    Ok(HttpResponse::Ok().json(templates))
}

/// Every registry template, newest first, in the flat listing shape.
pub fn list_templates(conn: &Connection) -> Result<Vec<TemplateListEntry>, ApiError> {
    let mut stmt = conn
        .prepare("SELECT id, name, side, template_json FROM id_templates ORDER BY id DESC")?;
    let rows = stmt.query_map([], |row| {
        Ok(TemplateListEntry {
            id: row.get(0)?,
            name: row.get(1)?,
            side: row.get(2)?,
            data: parse_document(&row.get::<_, String>(3)?),
        })
    })?;
    let templates = rows.collect::<Result<Vec<_>, _>>()?;
    Ok(templates)
}

/// Reads are lenient: a document that no longer parses is served as `{}`
/// instead of poisoning the whole listing.
fn parse_document(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| serde_json::json!({}))
}
