use iced::widget::text_editor;
use std::path::PathBuf;

use strata_core::EditorMode;

#[derive(Debug, Clone)]
pub enum Message {
    // Editor
    EditorAction(text_editor::Action),
    SetMode(EditorMode),

    // File operations
    Save,

    // Async results
    FileOpened(Result<(PathBuf, String), String>),
    FileSaved(Result<PathBuf, String>),
}
