//! HTTP-level tests exercising the full Actix service tree against a
//! throwaway SQLite file, including the auth boundary and the wire shapes
//! the front-end depends on.

use crate::background::{BackgroundRemover, Disabled, RemovalError};
use crate::config::ServerConfig;
use crate::db::Db;
use crate::error::ApiError;
use crate::services;
use actix_web::http::StatusCode;
use actix_web::test::TestRequest;
use actix_web::{test, web, App};
use serde_json::{json, Value};
use std::sync::Arc;

/// Provider stand-in that "segments" by returning fixed bytes.
struct StubRemover;

impl BackgroundRemover for StubRemover {
    fn remove(&self, _image: &[u8]) -> Result<Vec<u8>, RemovalError> {
        Ok(b"png-bytes-from-provider".to_vec())
    }
}

struct TestEnv {
    db: Db,
    config: ServerConfig,
    // Keeps the directory alive for the duration of the test.
    _dir: tempfile::TempDir,
}

fn test_env() -> TestEnv {
    let dir = tempfile::tempdir().unwrap();
    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        db_path: dir.path().join("test.sqlite"),
        media_root: dir.path().join("media"),
    };
    let db = Db::new(&config.db_path);
    db.init().unwrap();
    std::fs::create_dir_all(&config.media_root).unwrap();
    TestEnv {
        db,
        config,
        _dir: dir,
    }
}

macro_rules! test_app {
    ($env:expr) => {
        test_app!($env, Arc::new(Disabled) as Arc<dyn BackgroundRemover>)
    };
    ($env:expr, $remover:expr) => {
        test::init_service(
            App::new()
                .app_data(
                    web::JsonConfig::default()
                        .error_handler(|_err, _req| ApiError::MalformedInput.into()),
                )
                .app_data(web::Data::new($env.db.clone()))
                .app_data(web::Data::new($env.config.clone()))
                .app_data(web::Data::from($remover))
                .service(services::designs::configure_routes())
                .service(services::registry::configure_routes())
                .service(services::generation::configure_routes())
                .service(services::users::configure_routes())
                .service(services::settings::configure_routes())
                .service(services::photos::configure_routes()),
        )
        .await
    };
}

fn as_admin(req: TestRequest) -> TestRequest {
    req.insert_header(("x-actor-id", "1"))
        .insert_header(("x-actor-role", "admin"))
}

#[actix_web::test]
async fn design_save_load_round_trip() {
    let env = test_env();
    let app = test_app!(env);

    let document = json!({
        "front": {"objects": [{"type": "text", "bind": "roll_no", "left": 18.25}]},
        "back": {"objects": [null, true, [1, 2, 3]]}
    });
    let req = as_admin(TestRequest::post().uri("/api/designs/save"))
        .set_json(json!({"name": "visitor pass", "json": document}))
        .to_request();
    let saved: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(saved["ok"], json!(true));
    assert_eq!(saved["name"], json!("visitor pass"));

    let id = saved["id"].as_i64().unwrap();
    let req = as_admin(TestRequest::get().uri(&format!("/api/designs/load/{id}"))).to_request();
    let loaded: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(loaded["json"], document);
    assert_eq!(loaded["name"], json!("visitor pass"));
}

#[actix_web::test]
async fn designs_are_admin_gated() {
    let env = test_env();
    let app = test_app!(env);

    let resp = test::call_service(
        &app,
        TestRequest::get().uri("/api/designs/list").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = test::call_service(
        &app,
        TestRequest::get()
            .uri("/api/designs/list")
            .insert_header(("x-actor-id", "5"))
            .insert_header(("x-actor-role", "student"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = test::call_service(
        &app,
        as_admin(TestRequest::get().uri("/api/designs/list")).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn unknown_design_load_is_404_with_error_body() {
    let env = test_env();
    let app = test_app!(env);

    let req = as_admin(TestRequest::get().uri("/api/designs/load/12345")).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "not found"}));
}

#[actix_web::test]
async fn malformed_body_is_rejected_before_storage() {
    let env = test_env();
    let app = test_app!(env);

    let req = as_admin(TestRequest::post().uri("/api/designs/save"))
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "invalid JSON"}));
}

#[actix_web::test]
async fn batch_export_acknowledges_without_checking_anything() {
    let env = test_env();
    let app = test_app!(env);

    // Neither the design id nor the users exist anywhere.
    let req = as_admin(TestRequest::post().uri("/api/designs/batch-export"))
        .set_json(json!({"design_id": "t1", "users": ["u1", "u2", "u3"]}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["ok"], json!(true));
    assert_eq!(body["queued"], json!(3));
    assert_eq!(
        body["note"],
        json!("Batch export queued (implement background renderer)")
    );
}

#[actix_web::test]
async fn registry_save_is_insert_only_and_lists_flat() {
    let env = test_env();
    let app = test_app!(env);

    let payload = json!({"name": "student front", "template": {"w": 640}, "side": "front"});
    let req = TestRequest::post()
        .uri("/api/templates/save")
        .set_json(&payload)
        .to_request();
    let first: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(first["status"], json!("ok"));

    let req = TestRequest::post()
        .uri("/api/templates/save")
        .set_json(&payload)
        .to_request();
    let second: Value = test::call_and_read_body_json(&app, req).await;
    assert_ne!(first["id"], second["id"]);

    let req = TestRequest::get().uri("/api/templates/list").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    let entries = listed.as_array().expect("bare array");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["side"], json!("front"));
    assert_eq!(entries[0]["data"], json!({"w": 640}));
}

#[actix_web::test]
async fn generation_templates_envelope_detail_and_delete() {
    let env = test_env();
    let app = test_app!(env);

    let req = TestRequest::post()
        .uri("/api/templates/save")
        .set_json(json!({"name": "staff", "template": {"objects": []}}))
        .to_request();
    let saved: Value = test::call_and_read_body_json(&app, req).await;
    let id = saved["id"].as_i64().unwrap();

    let req = TestRequest::get().uri("/api/generation/templates").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed["status"], json!("ok"));
    assert_eq!(listed["count"], json!(1));
    assert_eq!(listed["templates"][0]["json"], json!({"objects": []}));

    let req = TestRequest::get()
        .uri(&format!("/api/generation/templates/{id}"))
        .to_request();
    let detail: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(detail["name"], json!("staff"));
    assert!(detail["created_at"].is_string());

    // Delete is admin-gated and not idempotent.
    let resp = test::call_service(
        &app,
        TestRequest::post()
            .uri(&format!("/api/generation/templates/{id}/delete"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = as_admin(TestRequest::post().uri(&format!("/api/generation/templates/{id}/delete")))
        .to_request();
    let deleted: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(deleted, json!({"status": "ok", "deleted_id": id}));

    let resp = test::call_service(
        &app,
        as_admin(TestRequest::post().uri(&format!("/api/generation/templates/{id}/delete")))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "Template not found"}));
}

#[actix_web::test]
async fn settings_init_then_checkbox_update() {
    let env = test_env();
    let app = test_app!(env);

    let req = as_admin(TestRequest::get().uri("/api/settings")).to_request();
    let initial: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(initial["show_age"], json!(true));
    assert_eq!(initial["show_residence_status"], json!(true));

    // Submitting only one flag turns every other flag off.
    let req = as_admin(TestRequest::post().uri("/api/settings"))
        .set_json(json!({"show_age": true}))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["show_age"], json!(true));
    assert_eq!(updated["show_photo"], json!(false));
    assert_eq!(updated["show_role"], json!(false));

    let req = as_admin(TestRequest::get().uri("/api/settings")).to_request();
    let reread: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(reread, updated);
}

#[actix_web::test]
async fn users_list_projects_identity_rows() {
    let env = test_env();
    {
        let conn = env.db.open().unwrap();
        conn.execute(
            "INSERT INTO users (username, email, role, department)
             VALUES ('lena', 'lena@example.com', 'student', 'Chemistry')",
            [],
        )
        .unwrap();
    }
    let app = test_app!(env);

    let req = TestRequest::get().uri("/api/users/list").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], json!("ok"));
    assert_eq!(body["count"], json!(1));
    let user = &body["users"][0];
    assert_eq!(user["username"], json!("lena"));
    assert_eq!(user["department"], json!("Chemistry"));
    // Nothing credential-shaped leaves the server.
    assert!(user.get("password").is_none());
    assert!(user.get("is_superuser").is_none());
}

#[actix_web::test]
async fn remove_bg_without_provider_is_unavailable() {
    let env = test_env();
    std::fs::write(env.config.media_root.join("p.jpg"), b"jpeg").unwrap();
    {
        let conn = env.db.open().unwrap();
        conn.execute(
            "INSERT INTO users (username, email, photo) VALUES ('sam', 's@example.com', 'p.jpg')",
            [],
        )
        .unwrap();
    }
    let app = test_app!(env);

    let resp = test::call_service(
        &app,
        TestRequest::get().uri("/api/photos/remove-bg/1").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "background removal not available"}));
}

#[actix_web::test]
async fn remove_bg_with_provider_returns_png() {
    let env = test_env();
    std::fs::create_dir_all(env.config.media_root.join("photos")).unwrap();
    std::fs::write(env.config.media_root.join("photos/sam.jpg"), b"jpeg").unwrap();
    {
        let conn = env.db.open().unwrap();
        conn.execute(
            "INSERT INTO users (username, email, photo)
             VALUES ('sam', 's@example.com', 'photos/sam.jpg')",
            [],
        )
        .unwrap();
    }
    let app = test_app!(env, Arc::new(StubRemover) as Arc<dyn BackgroundRemover>);

    let resp = test::call_service(
        &app,
        TestRequest::get().uri("/api/photos/remove-bg/1").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "image/png"
    );
    let body = test::read_body(resp).await;
    assert_eq!(body.as_ref(), b"png-bytes-from-provider");
}

#[actix_web::test]
async fn remove_bg_distinguishes_missing_photo() {
    let env = test_env();
    {
        let conn = env.db.open().unwrap();
        conn.execute(
            "INSERT INTO users (username, email) VALUES ('nopic', 'n@example.com')",
            [],
        )
        .unwrap();
    }
    let app = test_app!(env, Arc::new(StubRemover) as Arc<dyn BackgroundRemover>);

    let resp = test::call_service(
        &app,
        TestRequest::get().uri("/api/photos/remove-bg/1").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "No photo found"}));

    let resp = test::call_service(
        &app,
        TestRequest::get().uri("/api/photos/remove-bg/99").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "User not found"}));
}
