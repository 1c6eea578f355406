// src/ui/mod.rs
use eframe::egui;
use rfd::FileDialog;

use crate::extract;
use crate::state::{AppState, Notice, NoticeKind};

pub mod analyze;
pub mod compare;
pub mod history;
pub mod theme;

/// Open a file dialog and extract text from the chosen document.
///
/// Extraction failures land in the error modal; a readable document with no
/// text is an inline notice. Returns the extracted text on success.
pub(crate) fn pick_and_extract(state: &mut AppState) -> Option<(String, Notice)> {
    let path = FileDialog::new()
        .add_filter("Documents", &["pdf", "docx"])
        .set_title("Choose a document")
        .pick_file()?;

    match extract::extract_file(&path) {
        Ok(text) if !text.trim().is_empty() => {
            Some((text, Notice::success("File processed successfully!")))
        }
        Ok(_) => Some((
            String::new(),
            Notice::warning("Failed to process the file. Please ensure it contains readable text."),
        )),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "document extraction failed");
            state.error_message = Some(e.to_string());
            None
        }
    }
}

/// Render an inline notice in its kind's color.
pub(crate) fn show_notice(ui: &mut egui::Ui, notice: &Notice) {
    let color = match notice.kind {
        NoticeKind::Info => theme::INFO,
        NoticeKind::Success => theme::POSITIVE,
        NoticeKind::Warning => theme::NEGATIVE,
    };
    ui.colored_label(color, &notice.text);
}
