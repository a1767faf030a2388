//! Signed REST client for the Cloudinary image host.
//!
//! Uploads go to `POST /v1_1/{cloud}/image/upload` as multipart form data;
//! deletions to `POST /v1_1/{cloud}/image/destroy`. Both carry an SHA-256
//! signature over the alphabetically ordered request params plus the API
//! secret, per the host's signing scheme.

use async_trait::async_trait;
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::{MediaError, MediaStore, StoredImage};

const API_BASE: &str = "https://api.cloudinary.com/v1_1";

/// Credentials for the image host, loaded from the environment.
#[derive(Debug, Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
}

impl CloudinaryConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `CLOUDINARY_CLOUD_NAME` is not set, signalling that
    /// image hosting is not configured and the mock store should be used.
    ///
    /// | Variable                | Required |
    /// |-------------------------|----------|
    /// | `CLOUDINARY_CLOUD_NAME` | yes      |
    /// | `CLOUDINARY_API_KEY`    | yes      |
    /// | `CLOUDINARY_API_SECRET` | yes      |
    pub fn from_env() -> Option<Self> {
        let cloud_name = std::env::var("CLOUDINARY_CLOUD_NAME").ok()?;
        let api_key = std::env::var("CLOUDINARY_API_KEY").ok()?;
        let api_secret = std::env::var("CLOUDINARY_API_SECRET").ok()?;
        Some(Self {
            cloud_name,
            api_key,
            api_secret,
        })
    }
}

/// HTTP client for the image host.
pub struct CloudinaryClient {
    client: reqwest::Client,
    config: CloudinaryConfig,
}

/// Response returned by the upload endpoint.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
}

/// Response returned by the destroy endpoint.
#[derive(Debug, Deserialize)]
struct DestroyResponse {
    result: String,
}

impl CloudinaryClient {
    pub fn new(config: CloudinaryConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Sign `key=value` pairs (already in alphabetical key order) by
    /// appending the API secret and hashing.
    fn sign(&self, params: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(params.as_bytes());
        hasher.update(self.config.api_secret.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    fn endpoint(&self, action: &str) -> String {
        format!("{API_BASE}/{}/image/{action}", self.config.cloud_name)
    }
}

#[async_trait]
impl MediaStore for CloudinaryClient {
    async fn upload(&self, bytes: Vec<u8>, folder: &str) -> Result<StoredImage, MediaError> {
        let timestamp = chrono::Utc::now().timestamp();
        let signature = self.sign(&format!("folder={folder}&timestamp={timestamp}"));

        let form = reqwest::multipart::Form::new()
            .part(
                "file",
                reqwest::multipart::Part::bytes(bytes).file_name("upload"),
            )
            .text("folder", folder.to_string())
            .text("timestamp", timestamp.to_string())
            .text("api_key", self.config.api_key.clone())
            .text("signature", signature)
            .text("signature_algorithm", "sha256");

        let response = self
            .client
            .post(self.endpoint("upload"))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MediaError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let uploaded: UploadResponse = response
            .json()
            .await
            .map_err(|e| MediaError::InvalidResponse(e.to_string()))?;

        tracing::info!(public_id = %uploaded.public_id, folder, "Image uploaded");

        Ok(StoredImage {
            url: uploaded.secure_url,
            public_id: uploaded.public_id,
        })
    }

    async fn destroy(&self, public_id: &str) -> Result<(), MediaError> {
        let timestamp = chrono::Utc::now().timestamp();
        let signature = self.sign(&format!("public_id={public_id}&timestamp={timestamp}"));

        let form = [
            ("public_id", public_id.to_string()),
            ("timestamp", timestamp.to_string()),
            ("api_key", self.config.api_key.clone()),
            ("signature", signature),
            ("signature_algorithm", "sha256".to_string()),
        ];

        let response = self
            .client
            .post(self.endpoint("destroy"))
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MediaError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let destroyed: DestroyResponse = response
            .json()
            .await
            .map_err(|e| MediaError::InvalidResponse(e.to_string()))?;

        // "not found" is acceptable: the image is gone either way.
        match destroyed.result.as_str() {
            "ok" | "not found" => {
                tracing::info!(public_id, result = %destroyed.result, "Image destroyed");
                Ok(())
            }
            other => Err(MediaError::InvalidResponse(format!(
                "destroy returned '{other}'"
            ))),
        }
    }
}
