use crate::auth::AdminActor;
use crate::error::ApiError;
use actix_web::{web, HttpResponse};
use common::requests::BatchExportRequest;

/// Acknowledgement-only batch export.
///
/// Server-side rendering of cards is not implemented; this endpoint exists
/// so the front-end has a stable contract to target. It deliberately does
/// not check that the design or the users exist, queues nothing, and
/// persists nothing — it only echoes back how many users were submitted.
///
/// TODO: replace with a real render queue once the server-side renderer
/// lands; the response shape (`ok`/`queued`) is what the UI already expects.
pub(crate) async fn process(
    _actor: AdminActor,
    payload: web::Json<BatchExportRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = payload.into_inner();
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "ok": true,
        "queued": req.users.len(),
        "note": "Batch export queued (implement background renderer)",
    })))
}
