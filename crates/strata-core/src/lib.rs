//! # Strata Core
//!
//! Toolkit-independent editor logic: the modal key-handling state machine,
//! gutter width computation, configuration, and the event bus.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌────────────────────────────────────────────────┐
//! │                    Editor                       │
//! │  ┌──────────┐ ┌─────────┐ ┌─────────────────┐  │
//! │  │   Mode   │ │ Keymap  │ │    Event Bus    │  │
//! │  └──────────┘ └─────────┘ └─────────────────┘  │
//! │        key press ──► KeyOutcome                 │
//! └────────────────────────────────────────────────┘
//! ```
//!
//! Text storage, undo, rendering, and cursor management all live in the host
//! toolkit's text widget; this crate only decides what a key press means.

pub mod command;
pub mod config;
pub mod editor;
pub mod event;
pub mod gutter;
pub mod keymap;

pub use command::Command;
pub use config::Config;
pub use editor::{Editor, EditorMode, KeyOutcome};
pub use event::{EditorEvent, EventBus};
pub use keymap::{Key, KeyBinding, KeyPress, Keymap, Modifiers};
