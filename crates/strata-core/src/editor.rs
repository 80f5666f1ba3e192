//! The modal editor state machine.
//!
//! `Editor` is a thin facade over the mode field, the keymap, and the event
//! bus. It decides what each key press means; carrying the decision out
//! (moving the cursor, inserting text) is the host widget's job.

use crate::command::Command;
use crate::config::Config;
use crate::event::{EditorEvent, EventBus};
use crate::keymap::{Key, KeyPress, Keymap, Modifiers};

/// Editor modes, in the manner of modal editors like Vim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// Normal mode - single keys navigate and switch modes
    #[default]
    Normal,
    /// Insert mode - keys pass through to the text widget
    Insert,
}

impl EditorMode {
    /// Returns the mode name as shown in the status bar.
    pub fn label(&self) -> &'static str {
        match self {
            EditorMode::Normal => "NORMAL",
            EditorMode::Insert => "INSERT",
        }
    }
}

/// What the host widget should do with a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Carry out an editor command.
    Command(Command),
    /// Hand the key to the underlying text-editing engine unmodified.
    Passthrough,
    /// Silently discard the key.
    Ignored,
}

/// The modal editor state.
///
/// Owned by the UI thread; all methods are synchronous. Mode changes are
/// broadcast on the event bus for any observers (status bar, logging).
pub struct Editor {
    /// Editor configuration
    config: Config,

    /// Key bindings
    keymap: Keymap,

    /// Event bus for notifications
    event_bus: EventBus,

    /// Current mode
    mode: EditorMode,
}

impl Editor {
    /// Creates a new editor in normal mode with default bindings.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an editor with custom configuration.
    pub fn with_config(config: Config) -> Self {
        let keymap = Keymap::from_config(&config);
        Self {
            config,
            keymap,
            event_bus: EventBus::new(),
            mode: EditorMode::default(),
        }
    }

    // ==================== Key handling ====================

    /// Translates a key press into an outcome for the host widget.
    ///
    /// The Ctrl+Shift+Left chord extends the selection a word to the left
    /// regardless of mode, so it is checked before mode dispatch. In normal
    /// mode, unbound keys are silently ignored; in insert mode they pass
    /// through to the text engine.
    pub fn translate_key(&self, key: &KeyPress) -> KeyOutcome {
        if key.modifiers == Modifiers::CTRL_SHIFT && key.key == Key::Left {
            return KeyOutcome::Command(Command::SelectWordLeft);
        }

        match self.mode {
            EditorMode::Normal => match self.keymap.lookup(key, EditorMode::Normal) {
                Some(cmd) => KeyOutcome::Command(cmd),
                None => KeyOutcome::Ignored,
            },
            EditorMode::Insert => match self.keymap.lookup(key, EditorMode::Insert) {
                Some(cmd) => KeyOutcome::Command(cmd),
                None => KeyOutcome::Passthrough,
            },
        }
    }

    /// Applies a mode-switch command. Movement and selection commands are
    /// carried out by the host widget and are no-ops here.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::EnterInsertMode => self.set_mode(EditorMode::Insert),
            Command::EnterNormalMode => self.set_mode(EditorMode::Normal),
            _ => {}
        }
    }

    // ==================== Mode ====================

    /// Returns the current editor mode.
    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Sets the editor mode, emitting `ModeChanged` when it actually changes.
    pub fn set_mode(&mut self, mode: EditorMode) {
        if self.mode != mode {
            self.mode = mode;
            tracing::debug!("Mode changed to {}", mode.label());
            self.emit(EditorEvent::ModeChanged(mode));
        }
    }

    // ==================== Configuration ====================

    /// Returns the editor configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Updates the configuration, rebuilding the keymap.
    pub fn set_config(&mut self, config: Config) {
        self.config = config;
        self.keymap = Keymap::from_config(&self.config);
        self.emit(EditorEvent::ConfigChanged);
    }

    /// Returns the keymap.
    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    // ==================== Events ====================

    /// Subscribes to editor events.
    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<EditorEvent> {
        self.event_bus.subscribe()
    }

    /// Emits an event to all subscribers.
    pub fn emit(&self, event: EditorEvent) {
        self.event_bus.emit(event);
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}
