mod auth;
mod background;
mod config;
mod db;
mod error;
#[cfg(test)]
mod http_tests;
mod services;

use crate::background::{BackgroundRemover, Disabled};
use crate::config::ServerConfig;
use crate::db::Db;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = ServerConfig::from_env();
    let db = Db::new(&config.db_path);
    db.init()
        .map_err(|err| std::io::Error::other(err.to_string()))?;

    // No segmentation provider ships with the backend; the photo endpoint
    // reports the capability as unavailable until one is wired in here.
    let remover: Arc<dyn BackgroundRemover> = Arc::new(Disabled);

    info!("Server running at http://{}:{}", config.host, config.port);

    let bind_addr = (config.host.clone(), config.port);
    HttpServer::new(move || {
        App::new()
            .app_data(
                web::JsonConfig::default()
                    .limit(10 * 1024 * 1024) // 10 MB
                    .error_handler(|_err, _req| error::ApiError::MalformedInput.into()),
            )
            .app_data(web::Data::new(db.clone()))
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::from(remover.clone()))
            .service(services::designs::configure_routes())
            .service(services::registry::configure_routes())
            .service(services::generation::configure_routes())
            .service(services::users::configure_routes())
            .service(services::settings::configure_routes())
            .service(services::photos::configure_routes())
    })
    .bind(bind_addr)?
    .run()
    .await
}
