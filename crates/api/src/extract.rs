//! Multipart form collection for the admin create/update endpoints.
//!
//! Admin mutations always arrive as multipart form data, even when no file
//! is attached, so every one of them can carry an optional `image` part.
//! [`FormPayload`] drains the stream once and exposes typed accessors.

use std::collections::HashMap;

use axum::extract::Multipart;

use crate::error::AppError;

/// Name of the file part on admin forms.
const IMAGE_FIELD: &str = "image";

/// All text fields of a multipart submission plus the optional image bytes.
#[derive(Debug, Default)]
pub struct FormPayload {
    fields: HashMap<String, String>,
    image: Option<Vec<u8>>,
}

impl FormPayload {
    /// Drain a multipart stream into memory.
    ///
    /// The `image` part is only captured when it is an actual file of
    /// nonzero size; an empty file input submits a zero-length part, which
    /// must not replace an existing image.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut payload = FormPayload::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?
        {
            let name = field.name().unwrap_or_default().to_string();

            if name == IMAGE_FIELD && field.file_name().is_some() {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                if !data.is_empty() {
                    payload.image = Some(data.to_vec());
                }
            } else {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                payload.fields.insert(name, value);
            }
        }

        Ok(payload)
    }

    /// A text field, with empty submissions read as absent.
    pub fn text(&self, key: &str) -> Option<String> {
        self.fields
            .get(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    /// A raw (untrimmed) text field, for free-form content bodies.
    pub fn raw_text(&self, key: &str) -> Option<String> {
        self.fields.get(key).cloned().filter(|v| !v.is_empty())
    }

    /// A checkbox-style flag: the literal string `"true"` is true,
    /// anything else present is false, absent is `None`.
    pub fn flag(&self, key: &str) -> Option<bool> {
        self.fields.get(key).map(|v| v == "true")
    }

    /// The uploaded image bytes, when a nonzero-size file was attached.
    pub fn take_image(&mut self) -> Option<Vec<u8>> {
        self.image.take()
    }

    #[cfg(test)]
    pub fn from_parts(fields: &[(&str, &str)], image: Option<Vec<u8>>) -> Self {
        Self {
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            image,
        }
    }
}
