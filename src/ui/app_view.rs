// Application View
// Backdrop, floating preferences window and footer

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::core::App;
use super::{render_window, Styles};

/// Rows reserved below the screen area for the footer
pub const FOOTER_HEIGHT: u16 = 2;

/// Area the preferences window lives on, given the full terminal area
pub fn screen_area(area: Rect) -> Rect {
    Rect {
        height: area.height.saturating_sub(FOOTER_HEIGHT),
        ..area
    }
}

/// Render the entire application
pub fn render_app(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                // Screen
            Constraint::Length(FOOTER_HEIGHT), // Footer
        ])
        .split(f.area());

    f.render_widget(Block::default().style(Styles::backdrop()), chunks[0]);

    render_window(app.controller.window(), app.controller.toolbar(), f.buffer_mut());
    render_footer(f, app, chunks[1]);
}

/// Status line plus key hints
fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let fade = if app.controller.cross_fade() { "on" } else { "off" };
    let status = Line::from(vec![
        Span::styled(app.status.clone(), Styles::status_bar()),
        Span::styled(format!("  [cross-fade: {}]", fade), Styles::status_hint()),
    ]);

    let hints: Vec<String> = app
        .bindings
        .iter()
        .map(|b| format!("{}: {}", b.key, b.description))
        .collect();
    let hints = Line::from(Span::styled(hints.join(" | "), Styles::status_hint()));

    f.render_widget(Paragraph::new(vec![status, hints]), area);
}
