// UI Styles
// Color scheme for the preferences window and opacity blending helpers

use ratatui::style::{Color, Modifier, Style};

use crate::core::app_config::compiled;

/// Foreground assumed for cells that use the terminal default color
const DEFAULT_FG: (u8, u8, u8) = (229, 229, 229);

/// Convert hex color to ratatui Color
pub fn hex_color(hex: u32) -> Color {
    Color::Rgb(
        ((hex >> 16) & 0xFF) as u8,
        ((hex >> 8) & 0xFF) as u8,
        (hex & 0xFF) as u8,
    )
}

/// Application color scheme and styles
pub struct Styles;

impl Styles {
    // === Window ===

    pub fn window_background() -> Color {
        let (r, g, b) = compiled::WINDOW_BACKGROUND;
        Color::Rgb(r, g, b)
    }

    pub fn window_border() -> Style {
        Style::default().fg(Color::White).bg(Self::window_background())
    }

    pub fn window_title() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn separator() -> Style {
        Style::default().fg(hex_color(0x333333)).bg(Self::window_background())
    }

    // === Toolbar ===

    pub fn toolbar_accent() -> Color {
        let (r, g, b) = compiled::TOOLBAR_ACCENT;
        Color::Rgb(r, g, b)
    }

    pub fn toolbar_selected() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Self::toolbar_accent())
            .add_modifier(Modifier::BOLD)
    }

    pub fn toolbar_item() -> Style {
        Style::default().fg(hex_color(0x999999)).bg(Self::window_background())
    }

    // === Screen ===

    pub fn backdrop() -> Style {
        Style::default().bg(Color::Reset)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn status_hint() -> Style {
        Style::default().fg(hex_color(0x777777))
    }
}

/// RGB components of a color, approximating the named ANSI colors
pub fn to_rgb(color: Color) -> Option<(u8, u8, u8)> {
    let rgb = match color {
        Color::Rgb(r, g, b) => (r, g, b),
        Color::Reset => return None,
        Color::Black => (0, 0, 0),
        Color::Red => (205, 49, 49),
        Color::Green => (13, 188, 121),
        Color::Yellow => (229, 229, 16),
        Color::Blue => (36, 114, 200),
        Color::Magenta => (188, 63, 188),
        Color::Cyan => (17, 168, 205),
        Color::Gray => (204, 204, 204),
        Color::DarkGray => (118, 118, 118),
        Color::LightRed => (241, 76, 76),
        Color::LightGreen => (35, 209, 139),
        Color::LightYellow => (245, 245, 67),
        Color::LightBlue => (59, 142, 234),
        Color::LightMagenta => (214, 112, 214),
        Color::LightCyan => (41, 184, 219),
        Color::White => (255, 255, 255),
        Color::Indexed(_) => return None,
    };
    Some(rgb)
}

/// Blend a foreground color toward the background by `opacity` (1.0 = unchanged)
pub fn fade_color(color: Color, background: Color, opacity: f32) -> Color {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity >= 1.0 {
        return color;
    }

    let fg = to_rgb(color).unwrap_or(DEFAULT_FG);
    let bg = to_rgb(background).unwrap_or((0, 0, 0));
    let mix = |f: u8, b: u8| (f32::from(b) + (f32::from(f) - f32::from(b)) * opacity).round() as u8;

    Color::Rgb(mix(fg.0, bg.0), mix(fg.1, bg.1), mix(fg.2, bg.2))
}
