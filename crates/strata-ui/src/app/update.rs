use iced::Task;
use iced::widget::text_editor;

use strata_core::EditorEvent;

use super::{App, Message};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::EditorAction(action) => {
                // A read-only buffer still allows movement and selection.
                if self.read_only && action.is_edit() {
                    return Task::none();
                }

                let is_edit = action.is_edit();
                let lines_before = self.content.line_count();

                self.content.perform(action);

                if is_edit {
                    self.modified = true;
                }

                let lines_after = self.content.line_count();
                if lines_after != lines_before {
                    // The gutter re-derives its width from this.
                    self.editor.emit(EditorEvent::LineCountChanged(lines_after));
                }

                let (line, column) = self.content.cursor_position();
                if (line, column) != self.last_cursor {
                    self.last_cursor = (line, column);
                    self.editor.emit(EditorEvent::CursorMoved { line, column });
                }
            }

            Message::SetMode(mode) => {
                self.editor.set_mode(mode);
                self.status_message = format!("-- {} --", mode.label());
            }

            Message::Save => {
                if self.read_only {
                    self.status_message = "Buffer is read-only".to_string();
                    return Task::none();
                }
                if let Some(path) = &self.path {
                    let path = path.clone();
                    let content = self.content.text();
                    return Task::perform(
                        async move {
                            match std::fs::write(&path, content) {
                                Ok(_) => Ok(path),
                                Err(e) => Err(format!("Failed to save: {}", e)),
                            }
                        },
                        Message::FileSaved,
                    );
                }
                self.status_message = "No file to save to".to_string();
            }

            Message::FileOpened(Ok((path, text))) => {
                self.content = text_editor::Content::with_text(&text);
                self.name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "untitled".to_string());
                self.path = Some(path);
                self.modified = false;
                self.last_cursor = (0, 0);
                self.status_message = format!("Opened {}", self.name);
                self.editor
                    .emit(EditorEvent::LineCountChanged(self.content.line_count()));
            }

            Message::FileOpened(Err(e)) => {
                tracing::error!("Open failed: {}", e);
                self.status_message = e;
            }

            Message::FileSaved(Ok(path)) => {
                self.modified = false;
                self.status_message = format!("Saved {}", path.display());
            }

            Message::FileSaved(Err(e)) => {
                tracing::error!("Save failed: {}", e);
                self.status_message = e;
            }
        }

        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use iced::widget::text_editor::{Action, Edit, Motion};
    use strata_core::Editor;

    fn app(read_only: bool) -> App {
        App {
            editor: Editor::new(),
            content: text_editor::Content::with_text("hello\nworld"),
            path: None,
            name: "test".to_string(),
            modified: false,
            read_only,
            status_message: String::new(),
            last_cursor: (0, 0),
            theme: Theme::dark(),
        }
    }

    #[test]
    fn test_read_only_rejects_edits() {
        let mut app = app(true);
        let before = app.content.text();

        let _ = app.update(Message::EditorAction(Action::Edit(Edit::Insert('x'))));

        assert_eq!(app.content.text(), before);
        assert!(!app.modified);
    }

    #[test]
    fn test_read_only_still_allows_movement() {
        let mut app = app(true);

        let _ = app.update(Message::EditorAction(Action::Move(Motion::Right)));

        assert_eq!(app.content.cursor_position(), (0, 1));
        assert_eq!(app.last_cursor, (0, 1));
        assert!(!app.modified);
    }

    #[test]
    fn test_edit_marks_buffer_modified() {
        let mut app = app(false);
        let before = app.content.text();

        let _ = app.update(Message::EditorAction(Action::Edit(Edit::Insert('x'))));

        assert_ne!(app.content.text(), before);
        assert!(app.modified);
    }

    #[test]
    fn test_save_refused_when_read_only() {
        let mut app = app(true);
        app.path = Some(std::path::PathBuf::from("/nonexistent/strata-test.txt"));

        let _ = app.update(Message::Save);

        assert_eq!(app.status_message, "Buffer is read-only");
        assert!(!app.modified);
    }

    #[test]
    fn test_save_without_path_reports_status() {
        let mut app = app(false);

        let _ = app.update(Message::Save);

        assert_eq!(app.status_message, "No file to save to");
    }
}
