//! Server configuration, read once at startup from the environment.

use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// SQLite database file.
    pub db_path: PathBuf,
    /// Directory that photo/signature paths are resolved against.
    pub media_root: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let host = env::var("IDCARD_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("IDCARD_PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(8080);
        let db_path = env::var("IDCARD_DB")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("idcard.sqlite"));
        let media_root = env::var("IDCARD_MEDIA_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("media"));

        Self {
            host,
            port,
            db_path,
            media_root,
        }
    }
}
