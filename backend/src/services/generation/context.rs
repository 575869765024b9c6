use crate::db::Db;
use crate::error::ApiError;
use crate::services::generation::templates::all_templates;
use crate::services::users::list::all_users;
use actix_web::{web, HttpResponse};

/// Assemble the full generation-page context: every template paired with
/// every user projection, so the client can drive template selection and
/// field binding without further round-trips.
pub(crate) async fn process(db: web::Data<Db>) -> Result<HttpResponse, ApiError> {
    let conn = db.open()?;
    let templates = all_templates(&conn)?;
    let users = all_users(&conn)?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "templates": templates,
        "users": users,
    })))
}
