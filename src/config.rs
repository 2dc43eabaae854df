use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Location of the JSON profile store on native targets.
    pub store_path: PathBuf,
    /// Admin email written by the idempotent credential seed.
    pub admin_seed_email: String,
    /// Admin password hashed and written by the seed when no admin exists.
    pub admin_seed_password: String,
    /// Reviewer name stamped on approvals and rejections.
    pub admin_display_name: String,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let store_path = env::var("LEAVEKEEPER_STORE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| crate::storage::file::default_store_path());

        let admin_seed_email = env::var("LEAVEKEEPER_ADMIN_EMAIL")
            .unwrap_or_else(|_| "admin@example.com".to_string());

        let admin_seed_password = env::var("LEAVEKEEPER_ADMIN_PASSWORD")
            .unwrap_or_else(|_| "change-this-password".to_string());

        let admin_display_name =
            env::var("LEAVEKEEPER_ADMIN_NAME").unwrap_or_else(|_| "Admin".to_string());

        Ok(Config {
            store_path,
            admin_seed_email,
            admin_seed_password,
            admin_display_name,
        })
    }
}
