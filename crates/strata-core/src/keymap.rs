//! Key model and keyboard mapping.
//!
//! Keys arrive from the host toolkit already validated; the keymap only
//! decides which command, if any, a key press maps to in the current mode.

use crate::command::Command;
use crate::config::Config;
use crate::editor::EditorMode;
use std::collections::HashMap;

/// Keyboard modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool, // Cmd on macOS, Win on Windows
}

impl Modifiers {
    /// No modifiers pressed.
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    /// Ctrl+Shift, the chord used for word-left selection extension.
    pub const CTRL_SHIFT: Modifiers = Modifiers {
        ctrl: true,
        alt: false,
        shift: true,
        meta: false,
    };

    /// Returns true if no modifiers are pressed.
    pub fn is_empty(&self) -> bool {
        !self.ctrl && !self.alt && !self.shift && !self.meta
    }

    /// Parses modifiers from a string like "ctrl+shift".
    pub fn parse(s: &str) -> Self {
        let mut mods = Modifiers::NONE;
        let lower = s.to_lowercase();
        if lower.contains("ctrl") || lower.contains("control") {
            mods.ctrl = true;
        }
        if lower.contains("alt") || lower.contains("option") {
            mods.alt = true;
        }
        if lower.contains("shift") {
            mods.shift = true;
        }
        if lower.contains("meta") || lower.contains("cmd") || lower.contains("win") {
            mods.meta = true;
        }
        mods
    }
}

impl std::fmt::Display for Modifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.alt {
            parts.push("Alt");
        }
        if self.shift {
            parts.push("Shift");
        }
        if self.meta {
            #[cfg(target_os = "macos")]
            parts.push("Cmd");
            #[cfg(not(target_os = "macos"))]
            parts.push("Win");
        }
        write!(f, "{}", parts.join("+"))
    }
}

/// A key code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Tab,
    Backspace,
    Delete,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Space,
}

impl Key {
    /// Parses a key from a string.
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        match lower.as_str() {
            "enter" | "return" => Some(Key::Enter),
            "tab" => Some(Key::Tab),
            "backspace" | "bs" => Some(Key::Backspace),
            "delete" | "del" => Some(Key::Delete),
            "escape" | "esc" => Some(Key::Escape),
            "up" => Some(Key::Up),
            "down" => Some(Key::Down),
            "left" => Some(Key::Left),
            "right" => Some(Key::Right),
            "home" => Some(Key::Home),
            "end" => Some(Key::End),
            "pageup" | "pgup" => Some(Key::PageUp),
            "pagedown" | "pgdn" => Some(Key::PageDown),
            "space" => Some(Key::Space),
            _ if s.chars().count() == 1 => s.chars().next().map(Key::Char),
            _ => None,
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{}", c.to_uppercase()),
            Key::Enter => write!(f, "Enter"),
            Key::Tab => write!(f, "Tab"),
            Key::Backspace => write!(f, "Backspace"),
            Key::Delete => write!(f, "Delete"),
            Key::Escape => write!(f, "Escape"),
            Key::Up => write!(f, "Up"),
            Key::Down => write!(f, "Down"),
            Key::Left => write!(f, "Left"),
            Key::Right => write!(f, "Right"),
            Key::Home => write!(f, "Home"),
            Key::End => write!(f, "End"),
            Key::PageUp => write!(f, "PageUp"),
            Key::PageDown => write!(f, "PageDown"),
            Key::Space => write!(f, "Space"),
        }
    }
}

/// A key press event.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPress {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyPress {
    /// Creates a new key press.
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Creates a key press with no modifiers.
    pub fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::NONE)
    }

    /// Parses a key binding string like "ctrl+shift+left" or "i".
    pub fn parse(s: &str) -> Option<Self> {
        let parts: Vec<&str> = s.split('+').collect();
        let key_str = parts.last()?;
        let key = Key::parse(key_str)?;

        let mod_str = parts[..parts.len() - 1].join("+");
        let modifiers = Modifiers::parse(&mod_str);

        Some(Self { key, modifiers })
    }
}

impl std::fmt::Display for KeyPress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.modifiers.is_empty() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}+{}", self.modifiers, self.key)
        }
    }
}

/// A key binding maps a key press to a command in one or more modes.
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub key: KeyPress,
    pub command: Command,
    /// Mode(s) in which this binding is active.
    pub modes: Vec<EditorMode>,
}

impl KeyBinding {
    /// Creates a binding active in every mode.
    pub fn global(key: KeyPress, command: Command) -> Self {
        Self {
            key,
            command,
            modes: vec![EditorMode::Normal, EditorMode::Insert],
        }
    }

    /// Creates a mode-specific binding.
    pub fn for_mode(key: KeyPress, command: Command, mode: EditorMode) -> Self {
        Self {
            key,
            command,
            modes: vec![mode],
        }
    }
}

/// Keyboard mapping configuration.
pub struct Keymap {
    /// All key bindings.
    bindings: Vec<KeyBinding>,
    /// Index by key for fast lookup.
    by_key: HashMap<KeyPress, Vec<usize>>,
}

impl Keymap {
    /// Creates a new keymap with default bindings.
    pub fn new() -> Self {
        let mut keymap = Self {
            bindings: Vec::new(),
            by_key: HashMap::new(),
        };
        keymap.add_default_bindings();
        keymap.rebuild_index();
        keymap
    }

    /// Creates a keymap from configuration.
    ///
    /// User bindings are added after the defaults; since later bindings win
    /// on lookup, they override defaults for the same key. They are scoped
    /// to normal mode: insert mode must keep passing unbound keys through to
    /// the text widget, so a rebound printable key would otherwise stop
    /// inserting text.
    pub fn from_config(config: &Config) -> Self {
        let mut keymap = Self::new();

        for (key_str, cmd_str) in &config.keyboard.bindings {
            match (KeyPress::parse(key_str), Command::parse(cmd_str)) {
                (Some(key), Some(cmd)) => {
                    keymap
                        .bindings
                        .push(KeyBinding::for_mode(key, cmd, EditorMode::Normal));
                }
                _ => {
                    tracing::warn!("Ignoring invalid binding: {} = {}", key_str, cmd_str);
                }
            }
        }

        keymap.rebuild_index();
        keymap
    }

    /// Adds the default vi-like bindings.
    fn add_default_bindings(&mut self) {
        use Command::*;
        use EditorMode::{Insert, Normal};

        let bindings = [
            // Normal-mode navigation
            (KeyPress::plain(Key::Char('h')), MoveLeft, vec![Normal]),
            (KeyPress::plain(Key::Char('j')), MoveDown, vec![Normal]),
            (KeyPress::plain(Key::Char('k')), MoveUp, vec![Normal]),
            (KeyPress::plain(Key::Char('l')), MoveRight, vec![Normal]),
            // Mode switches
            (KeyPress::plain(Key::Char('i')), EnterInsertMode, vec![Normal]),
            (
                KeyPress::plain(Key::Escape),
                EnterNormalMode,
                vec![Normal, Insert],
            ),
        ];

        for (key, cmd, modes) in bindings {
            self.bindings.push(KeyBinding {
                key,
                command: cmd,
                modes,
            });
        }
    }

    /// Rebuilds the key index.
    fn rebuild_index(&mut self) {
        self.by_key.clear();
        for (i, binding) in self.bindings.iter().enumerate() {
            self.by_key.entry(binding.key.clone()).or_default().push(i);
        }
    }

    /// Looks up the command bound to a key press in the given mode.
    ///
    /// The last matching binding wins, so user bindings override defaults.
    pub fn lookup(&self, key: &KeyPress, mode: EditorMode) -> Option<Command> {
        let indices = self.by_key.get(key)?;
        indices
            .iter()
            .rev()
            .map(|&i| &self.bindings[i])
            .find(|binding| binding.modes.contains(&mode))
            .map(|binding| binding.command)
    }

    /// Returns all bindings.
    pub fn bindings(&self) -> &[KeyBinding] {
        &self.bindings
    }

    /// Adds a binding.
    pub fn add_binding(&mut self, binding: KeyBinding) {
        self.bindings.push(binding);
        self.rebuild_index();
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keypress_parse() {
        let kp = KeyPress::parse("ctrl+shift+left").unwrap();
        assert_eq!(kp.key, Key::Left);
        assert!(kp.modifiers.ctrl);
        assert!(kp.modifiers.shift);
        assert!(!kp.modifiers.alt);
    }

    #[test]
    fn test_keypress_parse_single_char() {
        let kp = KeyPress::parse("i").unwrap();
        assert_eq!(kp.key, Key::Char('i'));
        assert!(kp.modifiers.is_empty());
    }

    #[test]
    fn test_default_normal_mode_bindings() {
        let keymap = Keymap::new();
        assert_eq!(
            keymap.lookup(&KeyPress::plain(Key::Char('h')), EditorMode::Normal),
            Some(Command::MoveLeft)
        );
        assert_eq!(
            keymap.lookup(&KeyPress::plain(Key::Char('j')), EditorMode::Normal),
            Some(Command::MoveDown)
        );
        assert_eq!(
            keymap.lookup(&KeyPress::plain(Key::Char('k')), EditorMode::Normal),
            Some(Command::MoveUp)
        );
        assert_eq!(
            keymap.lookup(&KeyPress::plain(Key::Char('l')), EditorMode::Normal),
            Some(Command::MoveRight)
        );
    }

    #[test]
    fn test_bindings_are_mode_scoped() {
        let keymap = Keymap::new();
        // hjkl are navigation only in normal mode
        assert_eq!(
            keymap.lookup(&KeyPress::plain(Key::Char('h')), EditorMode::Insert),
            None
        );
        // Escape is bound in both modes
        assert_eq!(
            keymap.lookup(&KeyPress::plain(Key::Escape), EditorMode::Insert),
            Some(Command::EnterNormalMode)
        );
        assert_eq!(
            keymap.lookup(&KeyPress::plain(Key::Escape), EditorMode::Normal),
            Some(Command::EnterNormalMode)
        );
    }

    #[test]
    fn test_user_binding_overrides_default() {
        let mut config = Config::default();
        config
            .keyboard
            .bindings
            .insert("h".to_string(), "cursor.up".to_string());

        let keymap = Keymap::from_config(&config);
        assert_eq!(
            keymap.lookup(&KeyPress::plain(Key::Char('h')), EditorMode::Normal),
            Some(Command::MoveUp)
        );
        // The override is normal-mode only; in insert mode the key stays
        // unbound so it keeps inserting text.
        assert_eq!(
            keymap.lookup(&KeyPress::plain(Key::Char('h')), EditorMode::Insert),
            None
        );
    }

    #[test]
    fn test_user_binding_is_normal_mode_only() {
        let mut config = Config::default();
        config
            .keyboard
            .bindings
            .insert("x".to_string(), "cursor.up".to_string());

        let keymap = Keymap::from_config(&config);
        assert_eq!(
            keymap.lookup(&KeyPress::plain(Key::Char('x')), EditorMode::Normal),
            Some(Command::MoveUp)
        );
        assert_eq!(
            keymap.lookup(&KeyPress::plain(Key::Char('x')), EditorMode::Insert),
            None
        );
    }

    #[test]
    fn test_add_binding_global_applies_in_all_modes() {
        let mut keymap = Keymap::new();
        let chord = KeyPress::new(Key::Left, Modifiers::CTRL_SHIFT);
        keymap.add_binding(KeyBinding::global(chord.clone(), Command::SelectWordLeft));

        assert_eq!(
            keymap.lookup(&chord, EditorMode::Normal),
            Some(Command::SelectWordLeft)
        );
        assert_eq!(
            keymap.lookup(&chord, EditorMode::Insert),
            Some(Command::SelectWordLeft)
        );
    }

    #[test]
    fn test_invalid_user_binding_is_skipped() {
        let mut config = Config::default();
        config
            .keyboard
            .bindings
            .insert("notakey+?!".to_string(), "cursor.up".to_string());
        config
            .keyboard
            .bindings
            .insert("x".to_string(), "no.such.command".to_string());

        let keymap = Keymap::from_config(&config);
        assert_eq!(
            keymap.lookup(&KeyPress::plain(Key::Char('x')), EditorMode::Normal),
            None
        );
    }
}
