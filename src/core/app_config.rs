// Controller Configuration
// Defaults compiled from config.yaml at build time
// Modify config.yaml and rebuild to change these values

use std::time::Duration;

use super::pane::IconSet;

// Include the auto-generated config from build.rs
pub mod compiled {
    include!(concat!(env!("OUT_DIR"), "/compiled_config.rs"));
}

/// Settings the embedding application hands to the controller at construction
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Base window title, shown until the first pane is displayed
    pub title: String,

    /// Initial cross-fade toggle
    pub cross_fade: bool,

    /// Length of an animated transition
    pub transition_duration: Duration,

    /// Center the window on the screen the first time it is shown
    pub center_on_first_show: bool,

    /// Icons looked up by label for panes registered without one
    pub icons: IconSet,
}

impl ControllerConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_cross_fade(mut self, enabled: bool) -> Self {
        self.cross_fade = enabled;
        self
    }

    pub fn with_transition_duration(mut self, duration: Duration) -> Self {
        self.transition_duration = duration;
        self
    }

    pub fn with_icons(mut self, icons: IconSet) -> Self {
        self.icons = icons;
        self
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            title: "Preferences".to_string(),
            cross_fade: compiled::CROSS_FADE,
            transition_duration: Duration::from_millis(compiled::CROSS_FADE_DURATION_MS),
            center_on_first_show: compiled::CENTER_ON_FIRST_SHOW,
            icons: IconSet::default(),
        }
    }
}

/// Poll interval for the event loop while a transition is running
pub fn frame_interval() -> Duration {
    Duration::from_millis(compiled::FRAME_INTERVAL_MS.max(1))
}
