//! Shared application state injected into every handler as `web::Data<AppState>`.

use crate::config::Config;
use crate::db::Database;
use crate::storage::PictureStorage;

#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
    pub storage: PictureStorage,
    /// Largest accepted picture upload, in bytes.
    pub max_picture_bytes: usize,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            db: Database::new(&config.database_path),
            storage: PictureStorage::new(&config.storage_root, config.public_url.clone()),
            max_picture_bytes: config.max_picture_bytes,
        }
    }
}
