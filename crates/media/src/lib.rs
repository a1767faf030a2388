//! Image hosting behind a [`MediaStore`] trait.
//!
//! The production implementation ([`cloudinary::CloudinaryClient`]) talks to
//! a signed REST API; [`mock::MockMediaStore`] keeps development working
//! with no provider configured. Handlers only ever see the trait object.

use async_trait::async_trait;

pub mod cloudinary;
pub mod mock;

pub use cloudinary::{CloudinaryClient, CloudinaryConfig};
pub use mock::MockMediaStore;

/// A stored image: the public URL plus the host's native deletion handle.
#[derive(Debug, Clone)]
pub struct StoredImage {
    pub url: String,
    pub public_id: String,
}

/// Errors from the media host layer.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("media host request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The media host returned a non-2xx status code.
    #[error("media host error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The response body did not have the expected shape.
    #[error("unexpected media host response: {0}")]
    InvalidResponse(String),
}

/// Uploads and deletes hosted images.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Store image bytes under a named folder, returning the public URL and
    /// the handle needed to delete it later.
    async fn upload(&self, bytes: Vec<u8>, folder: &str) -> Result<StoredImage, MediaError>;

    /// Remove a previously stored image.
    async fn destroy(&self, public_id: &str) -> Result<(), MediaError>;
}

/// Derive a deletion handle from a hosted image URL.
///
/// Fallback for rows that predate handle persistence: takes the URL's last
/// path segment, strips its extension, and prefixes the folder, matching how
/// the host lays out uploads (`<folder>/<stem>`).
pub fn derive_public_id(url: &str, folder: &str) -> String {
    let last_segment = url.rsplit('/').next().unwrap_or(url);
    let stem = last_segment.split('.').next().unwrap_or(last_segment);
    format!("{folder}/{stem}")
}
