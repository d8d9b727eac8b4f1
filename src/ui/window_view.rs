// Window View
// Draws the preferences window: chrome, toolbar and the blended pane views

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    symbols::line,
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use crate::core::{geometry, AttachedView, PrefsWindow, Toolbar};
use super::styles::{fade_color, Styles};
use super::toolbar_view::render_toolbar;

/// Render the window into `buf`, clipped to the buffer area
pub fn render_window(window: &PrefsWindow, toolbar: &Toolbar, buf: &mut Buffer) {
    if !window.is_visible() {
        return;
    }

    let frame = window.frame().intersection(buf.area);
    if frame.is_empty() {
        return;
    }

    Clear.render(frame, buf);
    buf.set_style(frame, Styles::window_border());

    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Styles::window_border())
        .title(format!(" {} ", window.title()))
        .title_style(Styles::window_title())
        .render(frame, buf);

    render_toolbar(toolbar, window.visible_toolbar_area(), buf);
    render_separator(window.frame(), buf);

    let content = window.content_area().intersection(buf.area);
    if !content.is_empty() {
        render_subviews(window.subviews(), content, buf);
    }
}

/// Horizontal rule between the toolbar and the content, joined to the border
fn render_separator(frame: Rect, buf: &mut Buffer) {
    if frame.height <= geometry::CONTENT_ROW || frame.width < 2 {
        return;
    }

    let y = frame.y + geometry::CONTENT_ROW - 1;
    let right = frame.x + frame.width - 1;
    let style = Styles::separator();

    for x in frame.x..=right {
        let symbol = if x == frame.x {
            line::VERTICAL_RIGHT
        } else if x == right {
            line::VERTICAL_LEFT
        } else {
            line::HORIZONTAL
        };
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_symbol(symbol).set_style(style);
        }
    }
}

/// Draw the attached views into `area`.
///
/// A single opaque view draws straight into the buffer. While two views are
/// attached each is drawn off-screen and the cells are blended by opacity.
fn render_subviews(subviews: &[AttachedView], area: Rect, buf: &mut Buffer) {
    match subviews {
        [] => {}
        [only] if only.opacity >= 1.0 => only.view.render(area, buf),
        _ => composite(subviews, area, buf),
    }
}

fn composite(subviews: &[AttachedView], area: Rect, buf: &mut Buffer) {
    let background = Styles::window_background();

    let layers: Vec<(Buffer, f32)> = subviews
        .iter()
        .map(|attached| {
            let mut layer = Buffer::empty(area);
            attached.view.render(area, &mut layer);
            (layer, attached.opacity)
        })
        .collect();

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            // Most opaque layer with something drawn in this cell wins the glyph
            let top = layers
                .iter()
                .filter(|(layer, opacity)| *opacity > 0.0 && !is_blank(layer, x, y))
                .max_by(|a, b| a.1.total_cmp(&b.1));

            let Some((layer, opacity)) = top else {
                continue;
            };
            let (Some(src), Some(dst)) = (layer.cell((x, y)), buf.cell_mut((x, y))) else {
                continue;
            };

            let fg = fade_color(src.fg, background, *opacity);
            dst.set_symbol(src.symbol()).set_fg(fg).set_bg(background);
        }
    }
}

fn is_blank(layer: &Buffer, x: u16, y: u16) -> bool {
    layer.cell((x, y)).map_or(true, |c| c.symbol().trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::ManualClock;
    use crate::core::{ControllerConfig, PaneView, PrefsWindowController, ViewRef};
    use ratatui::{backend::TestBackend, layout::Size, style::Color, Terminal};
    use std::rc::Rc;
    use std::time::Duration;

    /// Fills its area with one glyph
    struct Fill {
        glyph: &'static str,
        size: Size,
    }

    impl PaneView for Fill {
        fn fitting_size(&self) -> Size {
            self.size
        }

        fn render(&self, area: Rect, buf: &mut Buffer) {
            for y in area.top()..area.bottom() {
                for x in area.left()..area.right() {
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        cell.set_symbol(self.glyph).set_fg(Color::White);
                    }
                }
            }
        }
    }

    fn fill(glyph: &'static str, width: u16, height: u16) -> ViewRef {
        Rc::new(Fill { glyph, size: Size { width, height } })
    }

    fn controller(clock: &ManualClock) -> PrefsWindowController {
        let mut controller = PrefsWindowController::builder()
            .config(ControllerConfig::default().with_transition_duration(Duration::from_millis(100)))
            .clock(clock.clone())
            .screen(Rect { x: 0, y: 0, width: 40, height: 16 })
            .setup(|registry| {
                registry.register(fill("a", 20, 4), "Alpha", None)?;
                registry.register(fill("b", 20, 6), "Beta", None)?;
                Ok(())
            })
            .build();
        controller.set_cross_fade(true);
        controller.show_window().unwrap();
        controller
    }

    fn draw(controller: &PrefsWindowController) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(40, 16)).unwrap();
        terminal
            .draw(|f| render_window(controller.window(), controller.toolbar(), f.buffer_mut()))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn test_window_chrome_and_content() {
        let clock = ManualClock::new();
        let controller = controller(&clock);
        let frame = controller.window().frame();
        let buf = draw(&controller);

        assert_eq!(buf[(frame.x, frame.y)].symbol(), "╭");
        assert_eq!(buf[(frame.x, frame.y + 2)].symbol(), "├");

        let content = controller.window().content_area();
        assert_eq!(buf[(content.x, content.y)].symbol(), "a");

        let title: String = (frame.x + 1..frame.x + 9).map(|x| buf[(x, frame.y)].symbol().to_string()).collect();
        assert_eq!(title, " Alpha ─");
    }

    #[test]
    fn test_cross_fade_blends_both_views() {
        let clock = ManualClock::new();
        let mut controller = controller(&clock);
        controller.display_view("Beta", true).unwrap();

        // Start of the fade: the old view still owns the glyphs
        let buf = draw(&controller);
        let content = controller.window().content_area();
        assert_eq!(buf[(content.x, content.y)].symbol(), "a");

        clock.advance(Duration::from_millis(90));
        controller.tick();
        let buf = draw(&controller);
        let cell = &buf[(content.x, content.y)];
        assert_eq!(cell.symbol(), "b");
        assert_ne!(cell.fg, Color::White);

        clock.advance(Duration::from_millis(50));
        controller.tick();
        let buf = draw(&controller);
        assert_eq!(buf[(content.x, content.y)].symbol(), "b");
        assert_eq!(buf[(content.x, content.y)].fg, Color::White);
    }

    #[test]
    fn test_clicks_match_drawn_items_when_window_overflows_screen() {
        let clock = ManualClock::new();
        let mut controller = PrefsWindowController::builder()
            .clock(clock.clone())
            .screen(Rect { x: 0, y: 0, width: 40, height: 16 })
            .setup(|registry| {
                registry.register(fill("a", 60, 4), "Alpha", None)?;
                registry.add_spacer();
                registry.register(fill("b", 60, 4), "Beta", None)?;
                Ok(())
            })
            .build();
        controller.show_window().unwrap();
        assert!(controller.window().frame().width > 40);

        let buf = draw(&controller);
        let row = controller.window().toolbar_area().y;
        let beta = (0..40)
            .find(|&x| buf[(x, row)].symbol() == "B")
            .expect("Beta drawn on screen");

        assert_eq!(controller.toolbar_item_at(beta, row), Some("Beta".to_string()));
        assert_eq!(controller.toolbar_item_at(beta + 3, row), Some("Beta".to_string()));
    }

    #[test]
    fn test_hidden_window_draws_nothing() {
        let clock = ManualClock::new();
        let mut controller = controller(&clock);
        let frame = controller.window().frame();
        controller.close_window();

        let buf = draw(&controller);
        assert_eq!(buf[(frame.x, frame.y)].symbol(), " ");
    }
}
