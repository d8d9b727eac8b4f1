// Build script - reads the defaults section of config.yaml at compile time
// Changing transition defaults only needs an edit to config.yaml and a rebuild

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=src/config.yaml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("compiled_config.rs");

    let config = if Path::new("src/config.yaml").exists() {
        let content = fs::read_to_string("src/config.yaml")
            .expect("Failed to read src/config.yaml");
        parse_config(&content)
    } else {
        CompiledConfig::default()
    };

    let generated = format!(
        r#"// Auto-generated from config.yaml at compile time
// Do not edit - modify config.yaml and rebuild instead

pub const CROSS_FADE: bool = {cross_fade};
pub const CROSS_FADE_DURATION_MS: u64 = {cross_fade_duration_ms};
pub const FRAME_INTERVAL_MS: u64 = {frame_interval_ms};
pub const CENTER_ON_FIRST_SHOW: bool = {center_on_first_show};

// Toolbar selection and window chrome colors (RGB tuples)
pub const TOOLBAR_ACCENT: (u8, u8, u8) = {toolbar_accent};
pub const WINDOW_BACKGROUND: (u8, u8, u8) = {window_background};
"#,
        cross_fade = config.cross_fade,
        cross_fade_duration_ms = config.cross_fade_duration_ms,
        frame_interval_ms = config.frame_interval_ms,
        center_on_first_show = config.center_on_first_show,
        toolbar_accent = format!("({}, {}, {})", config.toolbar_accent.0, config.toolbar_accent.1, config.toolbar_accent.2),
        window_background = format!("({}, {}, {})", config.window_background.0, config.window_background.1, config.window_background.2),
    );

    fs::write(&dest_path, generated).expect("Failed to write compiled config");
}

struct CompiledConfig {
    cross_fade: bool,
    cross_fade_duration_ms: u64,
    frame_interval_ms: u64,
    center_on_first_show: bool,
    toolbar_accent: (u8, u8, u8),
    window_background: (u8, u8, u8),
}

impl Default for CompiledConfig {
    fn default() -> Self {
        Self {
            cross_fade: true,
            cross_fade_duration_ms: 200,
            frame_interval_ms: 16,
            center_on_first_show: true,
            toolbar_accent: (0, 175, 215),      // #00afd7
            window_background: (10, 10, 10),    // #0a0a0a
        }
    }
}

fn parse_config(content: &str) -> CompiledConfig {
    let mut config = CompiledConfig::default();

    // Simple YAML parsing (avoiding external dependencies in build script)
    let mut in_defaults = false;
    let mut in_colors = false;

    for line in content.lines() {
        let trimmed = line.trim();

        // Top-level keys start at column 0 and switch sections
        if !line.starts_with(' ') && !line.starts_with('\t') && !trimmed.is_empty() && !trimmed.starts_with('#') {
            in_defaults = trimmed.starts_with("defaults:");
            in_colors = false;
            continue;
        }

        if !in_defaults {
            continue;
        }

        if trimmed.starts_with("colors:") {
            in_colors = true;
            continue;
        }

        if let Some((key, value)) = parse_kv(trimmed) {
            if in_colors {
                match key {
                    "toolbar_accent" => config.toolbar_accent = parse_hex_color(value),
                    "window_background" => config.window_background = parse_hex_color(value),
                    _ => in_colors = false,
                }
                if in_colors {
                    continue;
                }
            }

            match key {
                "cross_fade" => config.cross_fade = parse_bool(value),
                "cross_fade_duration_ms" => config.cross_fade_duration_ms = value.parse().unwrap_or(200),
                "frame_interval_ms" => config.frame_interval_ms = value.parse().unwrap_or(16),
                "center_on_first_show" => config.center_on_first_show = parse_bool(value),
                _ => {}
            }
        }
    }

    config
}

fn parse_kv(line: &str) -> Option<(&str, &str)> {
    if line.starts_with('#') || line.is_empty() {
        return None;
    }

    let colon_pos = line.find(':')?;
    let key = line[..colon_pos].trim();
    let mut value = line[colon_pos + 1..].trim();

    // Strip inline comments but keep a leading # (hex colors)
    if let Some(comment_pos) = value.find(" #") {
        value = value[..comment_pos].trim();
    }

    if value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn parse_bool(s: &str) -> bool {
    matches!(s.to_lowercase().as_str(), "true" | "yes" | "1")
}

fn parse_hex_color(s: &str) -> (u8, u8, u8) {
    let s = s.trim().trim_matches('"').trim_matches('\'');
    let s = s.strip_prefix('#').unwrap_or(s);

    if s.len() == 6 {
        if let (Ok(r), Ok(g), Ok(b)) = (
            u8::from_str_radix(&s[0..2], 16),
            u8::from_str_radix(&s[2..4], 16),
            u8::from_str_radix(&s[4..6], 16),
        ) {
            return (r, g, b);
        }
    }

    (0, 0, 0)
}
