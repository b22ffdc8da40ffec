//! Axum route handler for the resume intake endpoint.

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use tracing::warn;

use crate::errors::AppError;
use crate::intake::service::{process_upload, IntakeError, UploadResponse, UploadedDocument};
use crate::state::AppState;

const RESUME_FIELD: &str = "resume";

/// POST /api/upload-resume
///
/// Accepts a multipart form with a `resume` file field and returns a text
/// preview plus the initial interview questions.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, AppError> {
    let mut multipart = multipart.map_err(|rejection| {
        warn!("Rejected upload body: {rejection}");
        AppError::from(IntakeError::MissingFile)
    })?;

    let upload = read_resume_field(&mut multipart)
        .await?
        .ok_or(IntakeError::MissingFile)?;

    let response = process_upload(&state, upload).await?;
    Ok(Json(response))
}

/// Scans the form for the `resume` file field. Other fields are skipped.
/// A `resume` part without a `filename` parameter is a plain form value, not a file.
async fn read_resume_field(
    multipart: &mut Multipart,
) -> Result<Option<UploadedDocument>, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        let Some(filename) = field.file_name().map(str::to_string) else {
            warn!("Field '{RESUME_FIELD}' carries no filename");
            return Ok(None);
        };
        let bytes = field.bytes().await.map_err(multipart_error)?;
        return Ok(Some(UploadedDocument { filename, bytes }));
    }
    Ok(None)
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::Validation(format!("Malformed multipart body: {}", err.body_text()))
    }
}
