//! Commands produced by modal key handling.
//!
//! Commands encapsulate what a key press *means*, decoupled from how the
//! host widget carries it out. Movement commands are handed to the text
//! widget; mode commands mutate the editor itself.

/// Editor commands.
///
/// `#[non_exhaustive]` signals that new variants may be added; match arms
/// outside this crate should include a `_ =>` fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Command {
    // Cursor movement
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,

    // Selection
    /// Extend the selection one word to the left.
    SelectWordLeft,

    // Mode
    EnterInsertMode,
    EnterNormalMode,
}

impl Command {
    /// Parses a command name as used in config key bindings.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "cursor.up" => Some(Command::MoveUp),
            "cursor.down" => Some(Command::MoveDown),
            "cursor.left" => Some(Command::MoveLeft),
            "cursor.right" => Some(Command::MoveRight),
            "selection.wordLeft" => Some(Command::SelectWordLeft),
            "mode.insert" => Some(Command::EnterInsertMode),
            "mode.normal" => Some(Command::EnterNormalMode),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Command::parse("cursor.left"), Some(Command::MoveLeft));
        assert_eq!(
            Command::parse("selection.wordLeft"),
            Some(Command::SelectWordLeft)
        );
        assert_eq!(Command::parse("nope"), None);
    }
}
