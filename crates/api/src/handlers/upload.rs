//! Handler for base64 image upload.
//!
//! A stub by design: the payload is decoded, measured, and echoed back
//! as a data URI. Durable object storage is an external collaborator.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use zootaxi_core::error::CoreError;
use zootaxi_core::image;

use crate::error::{AppError, AppJson, AppResult};
use crate::state::AppState;

/// Filename assumed when the caller supplies none.
const DEFAULT_FILENAME: &str = "image.jpg";

/// Body of `POST /upload-image`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UploadImageBody {
    /// Base64 payload, bare or as a full data URI.
    pub image: Option<String>,
    /// Original filename, used only to derive the extension.
    pub filename: Option<String>,
}

// ---------------------------------------------------------------------------
// POST /upload-image
// ---------------------------------------------------------------------------

/// Decode a base64 image and echo it back as a data URI.
pub async fn upload_image(
    State(_state): State<AppState>,
    AppJson(input): AppJson<UploadImageBody>,
) -> AppResult<impl IntoResponse> {
    let payload = match input.image.as_deref().filter(|s| !s.is_empty()) {
        Some(payload) => payload,
        None => {
            return Err(AppError::Core(CoreError::Validation(
                "Field image is required (base64 encoded)".to_string(),
            )))
        }
    };

    let bytes = image::decode_base64_image(payload)?;

    let filename = input.filename.as_deref().unwrap_or(DEFAULT_FILENAME);
    let extension = image::file_extension(filename);
    let unique_filename = format!("{}.{extension}", Uuid::new_v4());

    tracing::info!(
        filename = %unique_filename,
        size = bytes.len(),
        "Image decoded"
    );

    Ok(Json(serde_json::json!({
        "url": image::data_uri(extension, &bytes),
        "filename": unique_filename,
        "size": bytes.len(),
    })))
}
