use std::fmt;
use std::path::Path;

/// Resume formats accepted by the intake endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    Txt,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 3] = [DocumentKind::Pdf, DocumentKind::Docx, DocumentKind::Txt];

    /// Case-insensitive lookup of a bare extension (no leading dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::Docx),
            "txt" => Some(DocumentKind::Txt),
            _ => None,
        }
    }

    /// Classifies a client-supplied filename by the text after its last `.`.
    /// Names without a dot are never allowed.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, ext) = filename.rsplit_once('.')?;
        Self::from_extension(ext)
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    pub fn extension(self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::Docx => "docx",
            DocumentKind::Txt => "txt",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_allowed_extensions_case_insensitive() {
        assert_eq!(DocumentKind::from_filename("cv.PDF"), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_filename("cv.Docx"), Some(DocumentKind::Docx));
        assert_eq!(DocumentKind::from_filename("notes.txt"), Some(DocumentKind::Txt));
    }

    #[test]
    fn test_only_last_extension_counts() {
        assert_eq!(DocumentKind::from_filename("cv.pdf.exe"), None);
        assert_eq!(DocumentKind::from_filename("cv.exe.txt"), Some(DocumentKind::Txt));
    }

    #[test]
    fn test_rejects_missing_or_unknown_extension() {
        assert_eq!(DocumentKind::from_filename("resume"), None);
        assert_eq!(DocumentKind::from_filename("resume."), None);
        assert_eq!(DocumentKind::from_filename("resume.doc"), None);
        assert_eq!(DocumentKind::from_filename("resume.md"), None);
    }

    #[test]
    fn test_from_path_reads_extension() {
        let path = PathBuf::from("uploads/uploaded_resume.txt");
        assert_eq!(DocumentKind::from_path(&path), Some(DocumentKind::Txt));
        assert_eq!(DocumentKind::from_path(&PathBuf::from("uploads/readme")), None);
    }
}
