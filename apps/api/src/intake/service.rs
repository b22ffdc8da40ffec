use std::path::PathBuf;

use bytes::Bytes;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};

use crate::errors::AppError;
use crate::intake::document::DocumentKind;
use crate::intake::extractor::ExtractError;
use crate::intake::storage::StorageError;
use crate::state::AppState;

const PREVIEW_CHARS: usize = 200;
const PREVIEW_SUFFIX: &str = "...";
const UNPROCESSABLE_MESSAGE: &str = "Could not process resume file.";
const INTERNAL_MESSAGE: &str = "An internal error occurred during upload processing.";

/// A file as received from the client, before validation.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub filename: String,
    pub bytes: Bytes,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub extracted_text_preview: String,
    pub questions: Vec<String>,
}

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("No resume file part")]
    MissingFile,

    #[error("No selected file")]
    EmptyFilename,

    #[error("File type not allowed")]
    DisallowedType,

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("could not extract text from {}", .path.display())]
    Unprocessable {
        path: PathBuf,
        source: Option<ExtractError>,
    },

    #[error("question generation failed: {0:#}")]
    Generation(anyhow::Error),
}

impl From<IntakeError> for AppError {
    fn from(err: IntakeError) -> Self {
        match err {
            IntakeError::MissingFile | IntakeError::EmptyFilename | IntakeError::DisallowedType => {
                AppError::Validation(err.to_string())
            }
            IntakeError::Unprocessable { .. } => AppError::processing(UNPROCESSABLE_MESSAGE, err),
            IntakeError::Storage(_) | IntakeError::Generation(_) => {
                AppError::processing(INTERNAL_MESSAGE, err)
            }
        }
    }
}

pub fn validate(upload: &UploadedDocument) -> Result<DocumentKind, IntakeError> {
    if upload.filename.is_empty() {
        return Err(IntakeError::EmptyFilename);
    }
    DocumentKind::from_filename(&upload.filename).ok_or(IntakeError::DisallowedType)
}

/// Runs one upload through validate → persist → extract → generate.
///
/// Validation failures leave the filesystem untouched. An unprocessable document
/// stays on disk; a generation failure removes it.
pub async fn process_upload(
    state: &AppState,
    upload: UploadedDocument,
) -> Result<UploadResponse, IntakeError> {
    let kind = validate(&upload)?;

    let stored = state.uploads.save(kind, &upload.bytes).await?;

    let text = match state.extractor.extract(&stored).await {
        Ok(Some(text)) if !text.is_empty() => text,
        Ok(_) => {
            error!("Could not extract text from {}", stored.path.display());
            return Err(IntakeError::Unprocessable {
                path: stored.path,
                source: None,
            });
        }
        Err(e) => {
            return Err(IntakeError::Unprocessable {
                path: stored.path,
                source: Some(e),
            });
        }
    };

    let questions = match state.question_generator.generate(Some(&text)).await {
        Ok(questions) => questions,
        Err(e) => {
            state.uploads.discard(&stored).await;
            return Err(IntakeError::Generation(e));
        }
    };

    info!(
        "Processed {} resume with {} questions",
        stored.kind,
        questions.len()
    );

    Ok(UploadResponse {
        message: "Resume uploaded and processed.".to_string(),
        extracted_text_preview: preview(&text),
        questions,
    })
}

fn preview(text: &str) -> String {
    let mut out: String = text.chars().take(PREVIEW_CHARS).collect();
    out.push_str(PREVIEW_SUFFIX);
    out
}
