// src/extract/pdf.rs

use super::ExtractionError;

/// Extract the text of every page, joined by newlines and trimmed.
///
/// Malformed bytes always surface as [`ExtractionError::Pdf`]; extraction
/// never silently returns text for a document it could not parse.
pub fn extract_text(data: &[u8]) -> Result<String, ExtractionError> {
    let text = pdf_extract::extract_text_from_mem(data)
        .map_err(|e| ExtractionError::Pdf(e.to_string()))?;
    Ok(text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_bytes_fail_loudly() {
        let result = extract_text(b"Not a PDF");
        assert!(matches!(result, Err(ExtractionError::Pdf(_))));
    }

    #[test]
    fn empty_input_fails_loudly() {
        assert!(extract_text(b"").is_err());
    }
}
