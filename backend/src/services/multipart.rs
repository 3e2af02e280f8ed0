//! Helpers for reading `multipart/form-data` parts.

use crate::error::{ApiError, ApiResult};
use actix_multipart::Field;
use futures_util::StreamExt;

/// Upper bound for a text part such as `index` or the hotel JSON.
const TEXT_PART_LIMIT: usize = 64 * 1024;

/// A file part read under a size cap.
#[derive(Debug)]
pub enum Upload {
    Complete(Vec<u8>),
    /// The part was larger than the cap; its bytes were discarded.
    TooLarge,
}

/// The `name` of a part's `Content-Disposition`.
pub fn part_name(field: &Field) -> Option<String> {
    field
        .content_disposition()
        .and_then(|cd| cd.get_name().map(|n| n.to_string()))
}

pub async fn read_text(field: &mut Field) -> ApiResult<String> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field.next().await {
        let chunk = chunk?;
        if bytes.len() + chunk.len() > TEXT_PART_LIMIT {
            return Err(ApiError::BadRequest(format!(
                "Form field '{}' is too large",
                part_name(field).unwrap_or_default()
            )));
        }
        bytes.extend_from_slice(&chunk);
    }
    String::from_utf8(bytes).map_err(|_| ApiError::BadRequest("Form field is not valid UTF-8".to_string()))
}

/// Reads a file part, keeping at most `limit` bytes. The rest of an oversized
/// part is drained so the following parts can still be read.
pub async fn read_upload(field: &mut Field, limit: usize) -> ApiResult<Upload> {
    let mut bytes = Vec::new();
    let mut too_large = false;
    while let Some(chunk) = field.next().await {
        let chunk = chunk?;
        if too_large {
            continue;
        }
        if bytes.len() + chunk.len() > limit {
            too_large = true;
            bytes = Vec::new();
            continue;
        }
        bytes.extend_from_slice(&chunk);
    }
    Ok(if too_large { Upload::TooLarge } else { Upload::Complete(bytes) })
}
