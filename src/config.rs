// Configuration loading module

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub application: ApplicationConfig,
    #[serde(default)]
    pub icons: HashMap<String, String>,
    #[serde(default)]
    pub panes: Vec<PaneEntryYaml>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationConfig {
    pub title: String,
    pub bindings: Vec<BindingConfigYaml>,
    pub status_bar: StatusBarConfigYaml,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BindingConfigYaml {
    pub key: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusBarConfigYaml {
    pub default_text: String,
}

/// One `panes:` entry: a text pane, or `- spacer: true`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PaneEntryYaml {
    Spacer { spacer: bool },
    Pane(PaneConfigYaml),
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaneConfigYaml {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub lines: Vec<String>,
}

/// `src/config.yaml` next to the manifest
pub fn default_config_path() -> PathBuf {
    let mut default_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    default_path.push("src");
    default_path.push("config.yaml");
    default_path
}

pub fn load_config(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let path = config_path.unwrap_or_else(default_config_path);

    let contents = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: AppConfig = serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    Ok(config)
}
