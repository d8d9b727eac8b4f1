// Event Handling
// Application event types and handler infrastructure

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Application events that can be handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Quit the application
    Quit,

    /// Switch to the next pane
    NextPane,

    /// Switch to the previous pane
    PreviousPane,

    /// Jump to the pane at a zero-based position
    SelectPane(usize),

    /// Left click at a screen coordinate (toolbar hit-testing)
    Click { column: u16, row: u16 },

    /// Toggle the cross-fade effect
    ToggleCrossFade,

    /// Close the preferences window
    CloseWindow,

    /// Open the preferences window again
    OpenWindow,

    /// Terminal was resized
    Resize { width: u16, height: u16 },

    /// No operation
    None,
}

/// Event handler that converts terminal events to application events
pub struct EventHandler;

impl EventHandler {
    /// Convert a crossterm event to an application event
    pub fn handle(event: Event) -> AppEvent {
        match event {
            Event::Key(key) => Self::handle_key(key),
            Event::Mouse(mouse) => Self::handle_mouse(mouse),
            Event::Resize(width, height) => AppEvent::Resize { width, height },
            _ => AppEvent::None,
        }
    }

    /// Handle keyboard events
    fn handle_key(key: KeyEvent) -> AppEvent {
        // Only handle key press events
        if key.kind != KeyEventKind::Press {
            return AppEvent::None;
        }

        match key.code {
            // Quit
            KeyCode::Char('q') => AppEvent::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AppEvent::Quit,

            // Pane navigation
            KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => AppEvent::NextPane,
            KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => AppEvent::PreviousPane,
            KeyCode::Char(c @ '1'..='9') => AppEvent::SelectPane(c as usize - '1' as usize),

            // Toggles
            KeyCode::Char('c') => AppEvent::ToggleCrossFade,

            // Window
            KeyCode::Esc => AppEvent::CloseWindow,
            KeyCode::Char('o') | KeyCode::Enter => AppEvent::OpenWindow,

            _ => AppEvent::None,
        }
    }

    /// Handle mouse events
    fn handle_mouse(mouse: MouseEvent) -> AppEvent {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => AppEvent::Click {
                column: mouse.column,
                row: mouse.row,
            },
            _ => AppEvent::None,
        }
    }
}
