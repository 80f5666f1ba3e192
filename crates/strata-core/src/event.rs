//! Event system for editor notifications.
//!
//! Uses `tokio::sync::broadcast` as a safe, async-friendly event bus:
//! events are values, subscribers receive clones, and lagged receivers
//! never block senders.

use crate::editor::EditorMode;
use tokio::sync::broadcast;

/// Events that can occur in the editor.
#[derive(Debug, Clone)]
pub enum EditorEvent {
    /// Editor mode changed
    ModeChanged(EditorMode),
    /// Cursor position changed (line, column)
    CursorMoved { line: usize, column: usize },
    /// Buffer line count changed; the gutter width derives from this
    LineCountChanged(usize),
    /// Configuration changed
    ConfigChanged,
}

/// Event bus for broadcasting editor events.
pub struct EventBus {
    sender: broadcast::Sender<EditorEvent>,
}

impl EventBus {
    /// Creates a new event bus.
    pub fn new() -> Self {
        // Capacity of 256 events in the buffer
        let (sender, _) = broadcast::channel(256);
        Self { sender }
    }

    /// Emits an event to all subscribers.
    pub fn emit(&self, event: EditorEvent) {
        // Ignore error if no receivers (not a problem)
        let _ = self.sender.send(event);
    }

    /// Subscribes to events.
    pub fn subscribe(&self) -> broadcast::Receiver<EditorEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_event_bus() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe();

        bus.emit(EditorEvent::ConfigChanged);

        let event = rx.recv().await.unwrap();
        assert!(matches!(event, EditorEvent::ConfigChanged));
    }

    #[tokio::test]
    async fn test_multiple_subscribers() {
        let bus = EventBus::new();
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.emit(EditorEvent::LineCountChanged(42));

        assert!(rx1.recv().await.is_ok());
        assert!(rx2.recv().await.is_ok());
    }

    #[tokio::test]
    async fn test_cursor_event_payload() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe();

        bus.emit(EditorEvent::CursorMoved { line: 3, column: 7 });

        match rx.recv().await.unwrap() {
            EditorEvent::CursorMoved { line, column } => {
                assert_eq!(line, 3);
                assert_eq!(column, 7);
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
