use iced::Task;
use iced::widget::text_editor;
use std::path::PathBuf;

use strata_core::{Config, Editor};

use crate::theme::Theme;

pub mod messages;
pub mod update;
pub mod view;

pub use messages::*;

/// Startup options, usually filled in from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// File to open at startup
    pub file: Option<PathBuf>,
    /// Open the buffer read-only
    pub read_only: bool,
}

pub struct App {
    pub editor: Editor,
    pub content: text_editor::Content,
    pub path: Option<PathBuf>,
    pub name: String,
    pub modified: bool,
    pub read_only: bool,
    pub status_message: String,
    pub last_cursor: (usize, usize),
    pub theme: Theme,
}

impl App {
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = Config::load();
        let read_only = flags.read_only || config.editor.read_only;
        let theme = Theme::resolve(&config.ui.theme);
        let editor = Editor::with_config(config);

        let app = Self {
            editor,
            content: text_editor::Content::new(),
            path: None,
            name: "untitled".to_string(),
            modified: false,
            read_only,
            status_message: "Ready | i: Insert | Esc: Normal | Ctrl+S: Save".to_string(),
            last_cursor: (0, 0),
            theme,
        };

        let task = match flags.file {
            Some(path) => Task::perform(
                async move {
                    match std::fs::read_to_string(&path) {
                        Ok(content) => Ok((path, content)),
                        Err(e) => Err(format!("Failed to read file: {}", e)),
                    }
                },
                Message::FileOpened,
            ),
            None => Task::none(),
        };

        (app, task)
    }

    pub fn title(&self) -> String {
        let modified = if self.modified { " *" } else { "" };
        format!("{}{} - Strata", self.name, modified)
    }
}

pub fn run(flags: Flags) -> iced::Result {
    iced::application(App::title, App::update, App::view)
        .window_size(iced::Size::new(1024.0, 720.0))
        .theme(|app: &App| {
            if app.theme.is_dark {
                iced::Theme::Dark
            } else {
                iced::Theme::Light
            }
        })
        .antialiasing(true)
        .run_with(move || App::new(flags))
}
