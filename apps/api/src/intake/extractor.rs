//! Text Extractor: turns a stored resume into plain text.
//!
//! `AppState` holds an `Arc<dyn TextExtractor>`. The default
//! `PlaceholderTextExtractor` reads `.txt` files and returns fixed strings for
//! PDF and DOCX until a real parser is plugged in.

use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use crate::intake::document::DocumentKind;
use crate::intake::storage::StoredDocument;

pub const PDF_PLACEHOLDER: &str = "PDF content extraction placeholder.";
pub const DOCX_PLACEHOLDER: &str = "DOCX content extraction placeholder.";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
}

#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Returns `Ok(None)` when the document type is not supported by this backend.
    async fn extract(&self, document: &StoredDocument) -> Result<Option<String>, ExtractError>;
}

pub struct PlaceholderTextExtractor;

#[async_trait]
impl TextExtractor for PlaceholderTextExtractor {
    async fn extract(&self, document: &StoredDocument) -> Result<Option<String>, ExtractError> {
        let path = &document.path;
        info!("Attempting to extract text from: {}", path.display());

        // Dispatch on what is actually on disk, not on what the caller claims.
        match DocumentKind::from_path(path) {
            Some(DocumentKind::Txt) => tokio::fs::read_to_string(path)
                .await
                .map(|text| Some(normalize_newlines(&text)))
                .map_err(|source| ExtractError::Read {
                    path: path.clone(),
                    source,
                }),
            Some(DocumentKind::Pdf) => {
                warn!("PDF parsing not implemented yet.");
                Ok(Some(PDF_PLACEHOLDER.to_string()))
            }
            Some(DocumentKind::Docx) => {
                warn!("DOCX parsing not implemented yet.");
                Ok(Some(DOCX_PLACEHOLDER.to_string()))
            }
            None => {
                warn!("Unsupported file type for extraction: {}", path.display());
                Ok(None)
            }
        }
    }
}

/// Folds `\r\n` and lone `\r` line endings into `\n`.
fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
