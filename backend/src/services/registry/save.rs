use crate::db::{now_rfc3339, Db};
use crate::error::ApiError;
use actix_web::{web, HttpResponse};
use common::requests::SaveTemplateRequest;
use rusqlite::{params, Connection};
use serde_json::Value;

pub(crate) async fn process(
    db: web::Data<Db>,
    payload: web::Json<SaveTemplateRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = payload.into_inner();
    let name = req
        .name
        .unwrap_or_else(|| "Untitled Template".to_string());

    let conn = db.open()?;
    let id = create_template(&conn, &name, &req.template, req.side.as_deref())?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "status": "ok", "id": id })))
}

/// Unconditional insert. The registry has no upsert: callers that want to
/// edit a template save a new row and delete the old one.
pub fn create_template(
    conn: &Connection,
    name: &str,
    document: &Value,
    side: Option<&str>,
) -> Result<i64, ApiError> {
    conn.execute(
        "INSERT INTO id_templates (name, template_json, side, created_at) VALUES (?1, ?2, ?3, ?4)",
        params![name, document.to_string(), side, now_rfc3339()],
    )?;
    Ok(conn.last_insert_rowid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_schema;

    #[test]
    fn identical_saves_make_distinct_rows() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();

        let document = serde_json::json!({"objects": [{"type": "rect"}]});
        let first = create_template(&conn, "student card", &document, None).unwrap();
        let second = create_template(&conn, "student card", &document, None).unwrap();

        assert_ne!(first, second);

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM id_templates", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 2);
    }
}
