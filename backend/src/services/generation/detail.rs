use crate::db::Db;
use crate::error::ApiError;
use crate::services::generation::templates::template_by_id;
use actix_web::{web, HttpResponse};

pub(crate) async fn process(
    db: web::Data<Db>,
    template_id: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let conn = db.open()?;
    let detail = template_by_id(&conn, template_id.into_inner())?;
    Ok(HttpResponse::Ok().json(detail))
}
