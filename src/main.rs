// Prefs Window
// Terminal demo of the preferences window controller

// MODULES ------------------>>

mod config;
mod config_validation;
mod render;

//--------------------------------------------------------<<
// IMPORTS ------------------>>

use anyhow::{Context, Result};
use clap::Parser;
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

// Module imports
use config::{AppConfig, PaneEntryYaml};
use config_validation::load_and_validate_config;
use prefs_window::core::{App, IconSet, KeyHint};
use prefs_window::ui::{run_app, screen_area};
use prefs_window::{ControllerConfig, PrefsWindowController};
use render::TextPane;

//--------------------------------------------------------<<

#[derive(Parser)]
#[command(name = "prefs-window")]
#[command(about = "Preferences window with cross-fading toolbar panes")]
#[command(version)]
struct Cli {
    /// YAML file with the application settings and panes
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pane identifier to show first
    #[arg(long)]
    pane: Option<String>,

    /// Start with the cross-fade disabled
    #[arg(long)]
    no_cross_fade: bool,

    /// Write logs to this file (the terminal is owned by the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ┌──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                                 MAIN ENTRY POINT                                                 │
// └──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┘

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    // Load and validate configuration from YAML file
    let app_config = load_and_validate_config(cli.config.clone())?;
    let mut controller = build_controller(&app_config, &cli);

    // Deep link before the first show so the window opens on that pane
    if let Some(pane) = &cli.pane {
        controller
            .display_view(pane, false)
            .with_context(|| format!("Cannot open pane '{}'", pane))?;
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, controller, &app_config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut controller: PrefsWindowController,
    app_config: &AppConfig,
) -> Result<()> {
    let size = terminal.size()?;
    controller.set_screen(screen_area(Rect { x: 0, y: 0, width: size.width, height: size.height }));
    controller.show_window()?;

    // Convert YAML bindings > footer hints
    let bindings: Vec<KeyHint> = app_config
        .application
        .bindings
        .iter()
        .map(|b| KeyHint {
            key: b.key.clone(),
            description: b.description.clone(),
        })
        .collect();

    let mut app = App::new(
        controller,
        bindings,
        app_config.application.status_bar.default_text.clone(),
    );
    run_app(terminal, &mut app)
}

/// Controller configured from the YAML, with a setup callback that registers its panes
fn build_controller(app_config: &AppConfig, cli: &Cli) -> PrefsWindowController {
    let icons: IconSet = app_config.icons.clone().into_iter().collect();
    let mut config = ControllerConfig::default()
        .with_title(app_config.application.title.clone())
        .with_icons(icons);
    if cli.no_cross_fade {
        config = config.with_cross_fade(false);
    }

    let entries = app_config.panes.clone();
    let mut controller = PrefsWindowController::new(config);
    controller.set_setup(move |registry| {
        for entry in entries {
            match entry {
                PaneEntryYaml::Pane(pane) => {
                    let view = Rc::new(TextPane::new(pane.lines));
                    registry.register_with_identifier(&pane.id, view, &pane.label, pane.icon.as_deref())?;
                }
                PaneEntryYaml::Spacer { spacer: true } => registry.add_spacer(),
                PaneEntryYaml::Spacer { spacer: false } => {}
            }
        }
        Ok(())
    });
    controller
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file: {}", path.display()))?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,prefs_window=debug")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .init();

    info!(event = "prefs.app.started", log_file = %path.display());
    Ok(())
}
