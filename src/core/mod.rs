// Core infrastructure module
// Pane registry, window model and the transition controller

pub mod app;
pub mod app_config;
pub mod clock;
pub mod controller;
pub mod errors;
pub mod events;
pub mod geometry;
pub mod pane;
pub mod registry;
pub mod toolbar;
pub mod transition;
pub mod window;

pub use app::{App, KeyHint};
pub use app_config::ControllerConfig;
pub use clock::{Clock, ManualClock, SystemClock};
pub use controller::{ControllerBuilder, PrefsWindowController, SetupFn};
pub use errors::PrefsError;
pub use events::{AppEvent, EventHandler};
pub use pane::{IconSet, Pane, PaneView, ToolbarEntry, ViewRef};
pub use registry::ViewRegistry;
pub use toolbar::{ItemBounds, Toolbar, ToolbarItem};
pub use transition::{TransitionHandle, TransitionOutcome};
pub use window::{AttachedView, PrefsWindow};
