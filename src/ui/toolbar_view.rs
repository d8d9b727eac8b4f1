// Toolbar View
// Draws the toolbar row with the selected item highlighted

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
};

use crate::core::Toolbar;
use super::Styles;

/// Render the toolbar items laid out in `area` (one row).
///
/// Items are laid out on `area` as given, the same way hit-testing does, and
/// only clipped to the buffer while drawing.
pub fn render_toolbar(toolbar: &Toolbar, area: Rect, buf: &mut Buffer) {
    let visible = area.intersection(buf.area);
    if visible.is_empty() {
        return;
    }

    buf.set_style(visible, Styles::toolbar_item());

    for bounds in toolbar.layout(area) {
        if !visible.contains(Position { x: bounds.x, y: bounds.y }) {
            continue;
        }
        let Some(item) = toolbar.items().get(bounds.index) else {
            continue;
        };
        let Some(caption) = item.caption() else {
            continue;
        };

        let style = if toolbar.is_selected(item) {
            Styles::toolbar_selected()
        } else {
            Styles::toolbar_item()
        };

        let width = bounds.width.min(visible.right() - bounds.x);
        buf.set_stringn(bounds.x, bounds.y, &caption, width as usize, style);
    }
}
