// UI module
// Rendering and the event loop for the preferences window demo

pub mod app_view;
pub mod styles;
pub mod toolbar_view;
pub mod window_view;

use anyhow::Result;
use crossterm::event;
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::Stdout;
use std::time::Duration;

use crate::core::{app_config, App, AppEvent, EventHandler};

pub use app_view::{render_app, screen_area};
pub use styles::Styles;
pub use toolbar_view::render_toolbar;
pub use window_view::render_window;

/// Poll interval while nothing is animating
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Run the main application event loop
pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Advance any running transition before drawing
        let animating = app.controller.tick();

        terminal.draw(|f| render_app(f, app))?;

        let timeout = if animating { app_config::frame_interval() } else { IDLE_POLL };

        // Handle events
        if event::poll(timeout)? {
            let event = event::read()?;
            let app_event = EventHandler::handle(event);

            handle_event(app, app_event);
        }

        // Check if we should quit
        if app.should_quit {
            return Ok(());
        }
    }
}

/// Handle an application event
pub fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Quit => app.quit(),
        AppEvent::NextPane => app.next_pane(),
        AppEvent::PreviousPane => app.previous_pane(),
        AppEvent::SelectPane(position) => app.select_pane(position),
        AppEvent::Click { column, row } => app.click(column, row),
        AppEvent::ToggleCrossFade => app.toggle_cross_fade(),
        AppEvent::CloseWindow => app.close_window(),
        AppEvent::OpenWindow => app.open_window(),
        AppEvent::Resize { width, height } => {
            app.controller
                .set_screen(screen_area(Rect { x: 0, y: 0, width, height }));
        }
        AppEvent::None => {}
    }
}
