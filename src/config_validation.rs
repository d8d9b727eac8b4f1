// Configuration validation module

use anyhow::{bail, Result};
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::config::{load_config, AppConfig, PaneEntryYaml};

/// Load the YAML config and check the pane list is usable
pub fn load_and_validate_config(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let config = load_config(config_path)?;
    validate(&config)?;

    info!(
        event = "prefs.config.loaded",
        panes = config.panes.len(),
        icons = config.icons.len()
    );
    Ok(config)
}

/// Reject configs with no panes or repeated pane ids; warn about odd entries
pub fn validate(config: &AppConfig) -> Result<()> {
    let mut seen = HashSet::new();
    let mut panes = 0usize;

    for entry in &config.panes {
        match entry {
            PaneEntryYaml::Pane(pane) => {
                panes += 1;
                if !seen.insert(pane.id.as_str()) {
                    bail!("Duplicate pane id '{}' in config", pane.id);
                }
                if pane.lines.is_empty() {
                    warn!(event = "prefs.config.empty_pane", id = %pane.id);
                }
            }
            PaneEntryYaml::Spacer { spacer: false } => {
                warn!(event = "prefs.config.ignored_entry", reason = "spacer: false");
            }
            PaneEntryYaml::Spacer { .. } => {}
        }
    }

    if panes == 0 {
        bail!("Config defines no panes");
    }
    Ok(())
}
