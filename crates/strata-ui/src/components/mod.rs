//! Reusable view components.

pub mod editor_view;

pub use editor_view::{active_line, gutter, highlight_layer};
