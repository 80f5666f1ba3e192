//! # Strata UI
//!
//! The iced layer: a code-editor view built on `iced::widget::text_editor`,
//! with a line-number gutter, current-line highlighting, and modal key
//! handling supplied by `strata-core`.
//!
//! The UI follows the Elm architecture (TEA):
//! - **Model**: `App` state
//! - **Message**: events that can occur
//! - **Update**: (state, message) -> new state
//! - **View**: state -> UI elements

pub mod app;
pub mod components;
pub mod keybinds;
pub mod style;
pub mod theme;

pub use app::{run, App, Flags};
pub use theme::Theme;
