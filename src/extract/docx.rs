// src/extract/docx.rs

use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};

use super::ExtractionError;

/// Extract per-paragraph text, joined by newlines and trimmed.
///
/// Malformed bytes surface as [`ExtractionError::Docx`], the same
/// propagation contract as the PDF extractor; callers decide how loudly to
/// report it.
pub fn extract_text(data: &[u8]) -> Result<String, ExtractionError> {
    let docx = read_docx(data).map_err(|e| ExtractionError::Docx(e.to_string()))?;

    let mut paragraphs: Vec<String> = Vec::new();
    for child in docx.document.children.iter() {
        if let DocumentChild::Paragraph(paragraph) = child {
            let text: String = paragraph
                .children
                .iter()
                .filter_map(|pc| match pc {
                    ParagraphChild::Run(run) => Some(
                        run.children
                            .iter()
                            .filter_map(|rc| match rc {
                                RunChild::Text(t) => Some(t.text.clone()),
                                _ => None,
                            })
                            .collect::<Vec<_>>()
                            .join(""),
                    ),
                    _ => None,
                })
                .collect::<Vec<_>>()
                .join("");

            if !text.is_empty() {
                paragraphs.push(text);
            }
        }
    }

    Ok(paragraphs.join("\n").trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_bytes_fail_loudly() {
        // DOCX files are ZIP archives; plain bytes cannot parse. The error
        // propagates instead of degrading to an empty result.
        let result = extract_text(b"Not a DOCX");
        assert!(matches!(result, Err(ExtractionError::Docx(_))));
    }

    #[test]
    fn empty_input_fails_loudly() {
        assert!(extract_text(b"").is_err());
    }
}
