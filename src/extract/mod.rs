// src/extract/mod.rs
use std::path::Path;
use thiserror::Error;

pub mod docx;
pub mod pdf;

/// Failures while turning an uploaded document into plain text.
///
/// Both formats propagate errors the same way; a document that parses but
/// contains no text is an empty `Ok` string, not an error.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),
    #[error("error processing PDF: {0}")]
    Pdf(String),
    #[error("error processing DOCX: {0}")]
    Docx(String),
    #[error("unsupported document format: {0}")]
    Unsupported(String),
}

/// Extract plain text from document bytes, dispatching on the extension.
pub fn extract_text(data: &[u8], extension: &str) -> Result<String, ExtractionError> {
    match extension.to_lowercase().as_str() {
        "pdf" => pdf::extract_text(data),
        "docx" => docx::extract_text(data),
        other => Err(ExtractionError::Unsupported(other.to_string())),
    }
}

/// Read a document from disk and extract its text.
pub fn extract_file(path: &Path) -> Result<String, ExtractionError> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_string())
        .unwrap_or_default();
    let data = std::fs::read(path)?;
    extract_text(&data, &extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_extension_is_unsupported() {
        let result = extract_text(b"some data", "txt");
        assert!(matches!(result, Err(ExtractionError::Unsupported(ref ext)) if ext == "txt"));
    }

    #[test]
    fn extension_dispatch_is_case_insensitive() {
        // Garbage bytes, but the error proves the right extractor ran.
        assert!(matches!(extract_text(b"junk", "PDF"), Err(ExtractionError::Pdf(_))));
        assert!(matches!(extract_text(b"junk", "Docx"), Err(ExtractionError::Docx(_))));
    }

    #[test]
    fn missing_file_reports_io_error() {
        let result = extract_file(Path::new("/nonexistent/review.pdf"));
        assert!(matches!(result, Err(ExtractionError::Io(_))));
    }
}
