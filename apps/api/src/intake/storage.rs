//! Fixed-name resume storage.
//!
//! Every upload lands at `<dir>/uploaded_resume.<ext>` and replaces whatever was
//! stored before, so at most one resume exists on disk. Concurrent uploads race
//! on the same path; there is no per-request isolation.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{error, info};

use crate::intake::document::DocumentKind;

const STORED_STEM: &str = "uploaded_resume";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to create upload directory {}: {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// A resume that has been written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredDocument {
    pub path: PathBuf,
    pub kind: DocumentKind,
}

#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, kind: DocumentKind) -> PathBuf {
        self.dir.join(format!("{STORED_STEM}.{}", kind.extension()))
    }

    /// Writes `bytes` to the fixed path for `kind`, creating the directory on demand
    /// and overwriting any previous upload. Copies stored under another extension
    /// are removed afterwards.
    pub async fn save(
        &self,
        kind: DocumentKind,
        bytes: &[u8],
    ) -> Result<StoredDocument, StorageError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| StorageError::CreateDir {
                path: self.dir.clone(),
                source,
            })?;

        let path = self.path_for(kind);
        let stored = StoredDocument {
            path: path.clone(),
            kind,
        };

        if let Err(source) = tokio::fs::write(&path, bytes).await {
            self.discard(&stored).await;
            return Err(StorageError::Write { path, source });
        }
        info!("File saved successfully: {}", path.display());

        for other in DocumentKind::ALL.into_iter().filter(|k| *k != kind) {
            remove_quietly(&self.path_for(other)).await;
        }

        Ok(stored)
    }

    /// Best-effort removal of a stored document. Failures are logged, never returned.
    pub async fn discard(&self, document: &StoredDocument) {
        remove_quietly(&document.path).await;
    }
}

async fn remove_quietly(path: &Path) {
    match tokio::fs::remove_file(path).await {
        Ok(()) => info!("Removed stored file: {}", path.display()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => error!("Error removing file {}: {e}", path.display()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_save_creates_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let store = UploadStore::new(tmp.path().join("nested").join("uploads"));

        let stored = store.save(DocumentKind::Txt, b"hello").await.unwrap();

        assert_eq!(stored.path, store.dir().join("uploaded_resume.txt"));
        assert_eq!(tokio::fs::read(&stored.path).await.unwrap(), b"hello");
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_upload() {
        let tmp = TempDir::new().unwrap();
        let store = UploadStore::new(tmp.path());

        store.save(DocumentKind::Txt, b"first upload, rather long").await.unwrap();
        let stored = store.save(DocumentKind::Txt, b"second").await.unwrap();

        assert_eq!(tokio::fs::read(&stored.path).await.unwrap(), b"second");
    }

    #[tokio::test]
    async fn test_save_removes_copies_under_other_extensions() {
        let tmp = TempDir::new().unwrap();
        let store = UploadStore::new(tmp.path());

        store.save(DocumentKind::Txt, b"text resume").await.unwrap();
        store.save(DocumentKind::Pdf, b"%PDF-1.4").await.unwrap();

        assert!(!store.path_for(DocumentKind::Txt).exists());
        assert!(store.path_for(DocumentKind::Pdf).exists());
    }

    #[tokio::test]
    async fn test_discard_is_silent_when_file_is_missing() {
        let tmp = TempDir::new().unwrap();
        let store = UploadStore::new(tmp.path());
        let ghost = StoredDocument {
            path: store.path_for(DocumentKind::Docx),
            kind: DocumentKind::Docx,
        };

        store.discard(&ghost).await;
        assert!(!ghost.path.exists());
    }

    #[tokio::test]
    async fn test_save_fails_when_directory_is_a_file() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("uploads");
        std::fs::write(&blocker, b"not a dir").unwrap();
        let store = UploadStore::new(&blocker);

        let err = store.save(DocumentKind::Txt, b"hello").await.unwrap_err();
        assert!(matches!(err, StorageError::CreateDir { .. }));
    }
}
