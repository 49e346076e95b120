//! Resume file handles.
//!
//! A `ResumeFile` is only a reference to a file the user picked. Its MIME type
//! is declared from the file name extension, the same way a browser file input
//! declares `File.type`; the file contents are never opened.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// MIME type a resume must declare to be accepted
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Fallback for extensions we do not recognise
const UNKNOWN_MIME_TYPE: &str = "application/octet-stream";

/// A reference to a user-selected resume file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeFile {
    path: PathBuf,
    file_name: String,
    mime_type: String,
}

impl ResumeFile {
    /// Create a handle whose MIME type is derived from the path's extension
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mime_type = mime_type_for(&path).to_string();
        Self::with_mime_type(path, mime_type)
    }

    /// Create a handle with an explicitly declared MIME type
    pub fn with_mime_type(path: impl Into<PathBuf>, mime_type: impl Into<String>) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Self {
            path,
            file_name,
            mime_type: mime_type.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Whether the declared type is exactly `application/pdf`
    pub fn is_pdf(&self) -> bool {
        self.mime_type == PDF_MIME_TYPE
    }
}

/// Map a file extension to the MIME type a file picker would declare
pub fn mime_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("pdf") => PDF_MIME_TYPE,
        Some("doc") => "application/msword",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        Some("odt") => "application/vnd.oasis.opendocument.text",
        Some("rtf") => "application/rtf",
        Some("txt") => "text/plain",
        Some("md") => "text/markdown",
        Some("html") | Some("htm") => "text/html",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => UNKNOWN_MIME_TYPE,
    }
}
