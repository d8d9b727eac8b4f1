// Prefs Window Library
// A preferences window with a toolbar of panes that cross-fade when switched

// Core infrastructure - registry, window model, transition controller
pub mod core;

// UI - ratatui rendering and the event loop
pub mod ui;

// Re-export commonly used items for convenience
pub use crate::core::{
    ControllerConfig, PaneView, PrefsError, PrefsWindowController, TransitionHandle,
    TransitionOutcome, ViewRef, ViewRegistry,
};
