use crate::modules::book::repository::{BookStore, PgBookStore};
use crate::utils::database;
use crate::utils::storage::{CloudinaryUploader, MediaUploader};
use async_trait::async_trait;
use std::env;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub port: u32,
    pub url: String,
}

#[derive(Clone)]
pub struct AuthContext {
    pub token: String,
}

#[derive(Clone)]
pub struct StorageContext {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
}

/// Runtime context shared by every request. The store and uploader are kept
/// behind trait objects so route services can run against mocks in tests.
pub struct Context {
    pub app: AppContext,
    pub auth: AuthContext,
    pub store: Arc<dyn BookStore>,
    pub uploader: Arc<dyn MediaUploader>,
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u32,
    pub url: String,
}

#[derive(Clone)]
pub struct AuthConfig {
    pub token: String,
}

#[derive(Clone)]
pub struct StorageConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
}

#[derive(Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub app: AppConfig,
    pub auth: AuthConfig,
    pub storage: StorageConfig,
}

impl Default for Config {
    fn default() -> Self {
        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL not set");
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u32>()
            .expect("Invalid PORT number");
        let url = env::var("URL").unwrap_or_else(|_| format!("http://{}:{}", host, port));
        let auth_token = env::var("ADMIN_AUTH_TOKEN").expect("ADMIN_AUTH_TOKEN not set");
        let storage_cloud_name =
            env::var("CLOUDINARY_CLOUD_NAME").expect("CLOUDINARY_CLOUD_NAME not set");
        let storage_api_key = env::var("CLOUDINARY_API_KEY").expect("CLOUDINARY_API_KEY not set");
        let storage_api_secret =
            env::var("CLOUDINARY_API_SECRET").expect("CLOUDINARY_API_SECRET not set");

        Self {
            database: DatabaseConfig { url: database_url },
            app: AppConfig { host, port, url },
            auth: AuthConfig { token: auth_token },
            storage: StorageConfig {
                cloud_name: storage_cloud_name,
                api_key: storage_api_key,
                api_secret: storage_api_secret,
            },
        }
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Context;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Context {
        let db_conn = database::connect(self.database.url.as_str()).await;
        database::migrate(db_conn.clone()).await;

        Context {
            app: AppContext {
                host: self.app.host,
                port: self.app.port,
                url: self.app.url,
            },
            auth: AuthContext {
                token: self.auth.token,
            },
            store: Arc::new(PgBookStore::new(db_conn.pool)),
            uploader: Arc::new(CloudinaryUploader::new(StorageContext {
                cloud_name: self.storage.cloud_name,
                api_key: self.storage.api_key,
                api_secret: self.storage.api_secret,
            })),
        }
    }
}
