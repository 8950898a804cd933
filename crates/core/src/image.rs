//! Base64 image payload helpers for the upload endpoint.
//!
//! The upload handler accepts either a bare base64 string or a full
//! `data:image/...;base64,` URI and must report the decoded byte length.

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::CoreError;

/// Extension used when the filename carries none.
const DEFAULT_EXTENSION: &str = "jpg";

/// Strip a leading `data:...;base64,` prefix, if present.
///
/// Browsers submit canvas/file-reader output as a full data URI; everything
/// up to and including the first comma is transport framing, not payload.
pub fn strip_data_uri_prefix(payload: &str) -> &str {
    match payload.split_once(',') {
        Some((_, body)) => body,
        None => payload,
    }
}

/// Decode a base64 image payload (bare or data-URI framed).
pub fn decode_base64_image(payload: &str) -> Result<Vec<u8>, CoreError> {
    let body = strip_data_uri_prefix(payload);
    STANDARD
        .decode(body.trim())
        .map_err(|e| CoreError::Validation(format!("Invalid base64 image: {e}")))
}

/// Derive the file extension from a filename, defaulting to `jpg`.
pub fn file_extension(filename: &str) -> &str {
    match filename.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => ext,
        _ => DEFAULT_EXTENSION,
    }
}

/// Re-encode decoded bytes as an inline `data:` URI.
pub fn data_uri(extension: &str, bytes: &[u8]) -> String {
    format!("data:image/{extension};base64,{}", STANDARD.encode(bytes))
}
