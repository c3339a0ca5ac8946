use crate::types::StorageContext;
use async_trait::async_trait;
use reqwest::{multipart::Form, Client, StatusCode};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

#[derive(Debug)]
pub enum Error {
    UploadFailed,
}

#[derive(Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UploadedMedia {
    pub public_id: String,
    pub url: String,
}

/// Capability consumed by the media-field interceptor. The production
/// implementation talks to Cloudinary; tests substitute their own.
#[async_trait]
pub trait MediaUploader: Send + Sync {
    async fn upload_image(&self, source: &str) -> Result<UploadedMedia, Error>;
    async fn upload_video(&self, source: &str) -> Result<UploadedMedia, Error>;
}

pub struct CloudinaryUploader {
    cfg: StorageContext,
    http: Client,
}

impl CloudinaryUploader {
    pub fn new(cfg: StorageContext) -> Self {
        Self {
            cfg,
            http: Client::new(),
        }
    }

    fn upload_endpoint(&self, resource_type: &str) -> String {
        format!(
            "https://api.cloudinary.com/v1_1/{}/{}/upload",
            self.cfg.cloud_name, resource_type
        )
    }

    // The `file` field carries the raw source value as-is: Cloudinary accepts
    // remote URLs, base64 data URIs and raw bytes through the same parameter.
    async fn upload(&self, resource_type: &str, source: &str) -> Result<UploadedMedia, Error> {
        let timestamp = chrono::Utc::now().timestamp();
        let signature = sign_upload(timestamp, &self.cfg.api_secret);

        let form = Form::new()
            .text("file", source.to_string())
            .text("api_key", self.cfg.api_key.clone())
            .text("timestamp", format!("{}", timestamp))
            .text("signature", signature)
            .text("signature_algorithm", "sha256");

        let res = self
            .http
            .post(self.upload_endpoint(resource_type))
            .multipart(form)
            .send()
            .await
            .map_err(|err| {
                tracing::error!("Error occurred while trying to upload media: {:?}", err);
                Error::UploadFailed
            })?;

        if res.status() != StatusCode::OK {
            let data = res.text().await.unwrap_or_default();
            tracing::error!("Failed to upload {} resource: {}", resource_type, data);
            return Err(Error::UploadFailed);
        }

        let data = res.text().await.map_err(|err| {
            tracing::error!("Error occurred while reading the upload response: {:?}", err);
            Error::UploadFailed
        })?;

        match serde_json::de::from_str::<UploadResponse>(data.as_ref()) {
            Ok(res) => Ok(UploadedMedia {
                url: res.secure_url,
                public_id: res.public_id,
            }),
            Err(err) => {
                tracing::error!("Failed to deserialize the upload response: {:?}", err);
                Err(Error::UploadFailed)
            }
        }
    }
}

#[async_trait]
impl MediaUploader for CloudinaryUploader {
    async fn upload_image(&self, source: &str) -> Result<UploadedMedia, Error> {
        self.upload("image", source).await
    }

    async fn upload_video(&self, source: &str) -> Result<UploadedMedia, Error> {
        self.upload("video", source).await
    }
}

fn sign_upload(timestamp: i64, api_secret: &str) -> String {
    let data_to_sign = format!("timestamp={}{}", timestamp, api_secret);

    let mut hasher = Sha256::new();
    hasher.update(data_to_sign);
    let hash = hasher.finalize();

    base16ct::lower::encode_string(&hash)
}
