//! HTTP handlers, one module per resource.

pub mod auth;
pub mod bookings;
pub mod contacts;
pub mod gallery;
pub mod posts;
pub mod testimonials;
pub mod tours;

use wayfarer_media::{derive_public_id, StoredImage};

use crate::error::AppError;
use crate::extract::FormPayload;
use crate::state::AppState;

/// Upload the form's attached image, if any, into the given media folder.
///
/// Runs before any database write so an upload failure aborts the whole
/// operation.
pub(crate) async fn upload_form_image(
    state: &AppState,
    form: &mut FormPayload,
    folder: &str,
) -> Result<Option<StoredImage>, AppError> {
    match form.take_image() {
        Some(bytes) => Ok(Some(state.media.upload(bytes, folder).await?)),
        None => Ok(None),
    }
}

/// Ask the media host to delete an entity's stored image, if it has one.
///
/// Prefers the persisted deletion handle; rows imported without one fall
/// back to deriving it from the URL.
pub(crate) async fn destroy_stored_image(
    state: &AppState,
    image_url: Option<&str>,
    image_public_id: Option<&str>,
    folder: &str,
) -> Result<(), AppError> {
    let Some(url) = image_url.filter(|u| !u.is_empty()) else {
        return Ok(());
    };

    let handle = match image_public_id.filter(|p| !p.is_empty()) {
        Some(stored) => stored.to_string(),
        None => derive_public_id(url, folder),
    };

    state.media.destroy(&handle).await?;
    Ok(())
}

/// Trim an optional field and drop it entirely when blank.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
