// Render module - pane views shown by the demo application

pub mod panes;

pub use panes::TextPane;
