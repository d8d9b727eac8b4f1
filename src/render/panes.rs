// Text Panes
// Static preference screens built from lines of text in config.yaml

use ratatui::{
    buffer::Buffer,
    layout::{Rect, Size},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use prefs_window::PaneView;

/// Blank columns left and right of the text
const PADDING_X: u16 = 2;
/// Blank rows above and below the text
const PADDING_Y: u16 = 1;

/// A pane that shows fixed lines of text, sized to fit them
#[derive(Debug, Clone)]
pub struct TextPane {
    lines: Vec<String>,
}

impl TextPane {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

impl PaneView for TextPane {
    fn fitting_size(&self) -> Size {
        let widest = self
            .lines
            .iter()
            .map(|l| Span::raw(l.as_str()).width() as u16)
            .max()
            .unwrap_or(0);

        Size {
            width: widest.saturating_add(PADDING_X * 2),
            height: (self.lines.len() as u16).saturating_add(PADDING_Y * 2),
        }
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        let inner = Rect {
            x: area.x.saturating_add(PADDING_X),
            y: area.y.saturating_add(PADDING_Y),
            width: area.width.saturating_sub(PADDING_X * 2),
            height: area.height.saturating_sub(PADDING_Y * 2),
        };
        if inner.is_empty() {
            return;
        }

        let lines: Vec<Line> = self
            .lines
            .iter()
            .map(|l| Line::raw(l.as_str()))
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}
