//! Logging stand-in for the image host.
//!
//! Used when no `CLOUDINARY_*` credentials are configured so local
//! development and demos work provider-free. Uploads return a synthetic
//! URL on a reserved domain; deletions only log.

use async_trait::async_trait;
use uuid::Uuid;

use crate::{MediaError, MediaStore, StoredImage};

pub struct MockMediaStore;

#[async_trait]
impl MediaStore for MockMediaStore {
    async fn upload(&self, bytes: Vec<u8>, folder: &str) -> Result<StoredImage, MediaError> {
        let public_id = format!("{folder}/{}", Uuid::new_v4().simple());
        let url = format!("https://media.invalid/{public_id}.jpg");
        tracing::info!(
            size = bytes.len(),
            %url,
            "Image upload skipped (no media host configured)"
        );
        Ok(StoredImage { url, public_id })
    }

    async fn destroy(&self, public_id: &str) -> Result<(), MediaError> {
        tracing::info!(public_id, "Image destroy skipped (no media host configured)");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_upload_returns_folder_scoped_handle() {
        let stored = MockMediaStore
            .upload(vec![1, 2, 3], "tours")
            .await
            .expect("mock upload never fails");
        assert!(stored.public_id.starts_with("tours/"));
        assert!(stored.url.contains(&stored.public_id));
    }
}
