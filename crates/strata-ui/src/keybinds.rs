//! Bridges iced key presses to the modal key handling in `strata-core`.
//!
//! Installed on the text editor via `.key_binding(..)`, which replaces the
//! widget's default key handling entirely. Returning `None` swallows the key;
//! `Binding::from_key_press` restores the stock behavior for that press.

use iced::keyboard;
use iced::widget::text_editor::{Binding, KeyPress, Motion, Status};

use strata_core::{Command, Editor, EditorMode, KeyOutcome};

use crate::app::Message;

/// Resolves a key press against the editor's current mode.
pub fn binding(editor: &Editor, key_press: KeyPress) -> Option<Binding<Message>> {
    if key_press.status != Status::Focused {
        return None;
    }

    // Application chords take priority over modal dispatch.
    if key_press.modifiers.command() && !key_press.modifiers.shift() {
        if let keyboard::Key::Character(c) = &key_press.key {
            if c.as_str() == "s" {
                return Some(Binding::Custom(Message::Save));
            }
        }
    }

    let modifiers = to_core_modifiers(key_press.modifiers);
    let Some(key) = to_core_key(&key_press.key) else {
        // Keys outside the core model (function keys, IME events) follow the
        // mode's fallback rule.
        return match editor.mode() {
            EditorMode::Normal => None,
            EditorMode::Insert => Binding::from_key_press(key_press),
        };
    };

    let press = strata_core::KeyPress::new(key, modifiers);
    match editor.translate_key(&press) {
        KeyOutcome::Command(cmd) => command_binding(cmd),
        KeyOutcome::Passthrough => Binding::from_key_press(key_press),
        KeyOutcome::Ignored => None,
    }
}

/// Maps an editor command to the widget binding that carries it out.
fn command_binding(command: Command) -> Option<Binding<Message>> {
    match command {
        Command::MoveUp => Some(Binding::Move(Motion::Up)),
        Command::MoveDown => Some(Binding::Move(Motion::Down)),
        Command::MoveLeft => Some(Binding::Move(Motion::Left)),
        Command::MoveRight => Some(Binding::Move(Motion::Right)),
        Command::SelectWordLeft => Some(Binding::Select(Motion::WordLeft)),
        Command::EnterInsertMode => Some(Binding::Custom(Message::SetMode(EditorMode::Insert))),
        Command::EnterNormalMode => Some(Binding::Custom(Message::SetMode(EditorMode::Normal))),
        _ => None,
    }
}

fn to_core_modifiers(modifiers: keyboard::Modifiers) -> strata_core::Modifiers {
    strata_core::Modifiers {
        ctrl: modifiers.control(),
        alt: modifiers.alt(),
        shift: modifiers.shift(),
        meta: modifiers.logo(),
    }
}

fn to_core_key(key: &keyboard::Key) -> Option<strata_core::Key> {
    use keyboard::key::Named;
    use strata_core::Key;

    match key {
        keyboard::Key::Character(c) => {
            let mut chars = c.chars();
            let first = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            Some(Key::Char(first))
        }
        keyboard::Key::Named(named) => match named {
            Named::Enter => Some(Key::Enter),
            Named::Tab => Some(Key::Tab),
            Named::Backspace => Some(Key::Backspace),
            Named::Delete => Some(Key::Delete),
            Named::Escape => Some(Key::Escape),
            Named::ArrowUp => Some(Key::Up),
            Named::ArrowDown => Some(Key::Down),
            Named::ArrowLeft => Some(Key::Left),
            Named::ArrowRight => Some(Key::Right),
            Named::Home => Some(Key::Home),
            Named::End => Some(Key::End),
            Named::PageUp => Some(Key::PageUp),
            Named::PageDown => Some(Key::PageDown),
            Named::Space => Some(Key::Space),
            _ => None,
        },
        keyboard::Key::Unidentified => None,
    }
}
