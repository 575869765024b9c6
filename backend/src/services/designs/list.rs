use crate::auth::AdminActor;
use crate::db::Db;
use crate::error::ApiError;
use actix_web::{web, HttpResponse};
use common::model::design::DesignSummary;
use rusqlite::{params, Connection};

/// The designer's picker only ever shows the most recent designs.
const LIST_LIMIT: usize = 50;

pub(crate) async fn process(db: web::Data<Db>, _actor: AdminActor) -> Result<HttpResponse, ApiError> {
    let conn = db.open()?;
    let designs = list_designs(&conn, LIST_LIMIT)?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "designs": designs })))
}

/// Summaries of the `limit` most recently updated designs, newest first.
pub fn list_designs(conn: &Connection, limit: usize) -> Result<Vec<DesignSummary>, ApiError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, updated_at FROM template_designs ORDER BY updated_at DESC LIMIT ?1",
    )?;
    let rows = stmt.query_map(params![limit as i64], |row| {
        Ok(DesignSummary {
            id: row.get(0)?,
            name: row.get(1)?,
            updated_at: row.get(2)?,
        })
    })?;
    let designs = rows.collect::<Result<Vec<_>, _>>()?;
    Ok(designs)
}
