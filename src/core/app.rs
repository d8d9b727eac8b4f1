// Application State
// Demo host state around the preferences window controller

use tracing::warn;

use super::controller::PrefsWindowController;
use super::errors::PrefsError;

/// A key and what it does, shown in the footer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    pub key: String,
    pub description: String,
}

/// Main application state
#[derive(Debug)]
pub struct App {
    /// The preferences window being demonstrated
    pub controller: PrefsWindowController,

    /// Footer key hints
    pub bindings: Vec<KeyHint>,

    /// Status line text shown when nothing else is reported
    pub default_status: String,

    /// Last message for the status line
    pub status: String,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl App {
    pub fn new(controller: PrefsWindowController, bindings: Vec<KeyHint>, default_status: String) -> Self {
        Self {
            controller,
            bindings,
            status: default_status.clone(),
            default_status,
            should_quit: false,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn next_pane(&mut self) {
        let result = self.controller.select_next(true);
        self.report(result);
    }

    pub fn previous_pane(&mut self) {
        let result = self.controller.select_previous(true);
        self.report(result);
    }

    pub fn select_pane(&mut self, position: usize) {
        let result = self.controller.select_position(position, true);
        self.report(result);
    }

    /// Switch to the toolbar item under a click, if any
    pub fn click(&mut self, column: u16, row: u16) {
        if let Some(identifier) = self.controller.toolbar_item_at(column, row) {
            let result = self.controller.display_view(&identifier, true);
            self.report(result);
        }
    }

    pub fn toggle_cross_fade(&mut self) {
        let enabled = !self.controller.cross_fade();
        self.controller.set_cross_fade(enabled);
        self.status = format!("Cross-fade {}", if enabled { "on" } else { "off" });
    }

    pub fn close_window(&mut self) {
        self.controller.close_window();
        self.status = "Window closed (o: reopen)".to_string();
    }

    pub fn open_window(&mut self) {
        if self.controller.is_visible() {
            return;
        }
        let result = self.controller.show_window();
        self.report(result);
    }

    /// Surface a failed controller call on the status line
    fn report<T>(&mut self, result: Result<T, PrefsError>) {
        match result {
            Ok(_) => self.status = self.default_status.clone(),
            Err(err) => {
                warn!(event = "prefs.app.request_failed", error = %err);
                self.status = err.to_string();
            }
        }
    }
}
