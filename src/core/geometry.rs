// Window Geometry
// Frame computation for the preferences window
//
// Layout of a window frame (rows, top to bottom):
//   ┌ title ──────┐   border with title
//   │ toolbar     │   toolbar items
//   ├─────────────┤   separator
//   │ content     │   active pane, `content.height` rows
//   └─────────────┘   border

use ratatui::layout::{Position, Rect, Size};

/// Columns taken by the left and right borders
pub const CHROME_WIDTH: u16 = 2;

/// Rows taken by borders, the toolbar and its separator
pub const CHROME_HEIGHT: u16 = 4;

/// Row offset of the toolbar inside the frame
pub const TOOLBAR_ROW: u16 = 1;

/// Row offset of the content area inside the frame
pub const CONTENT_ROW: u16 = 3;

/// Window frame holding `content` with its top-left corner at `anchor`
pub fn frame_for_content(anchor: Position, content: Size) -> Rect {
    Rect {
        x: anchor.x,
        y: anchor.y,
        width: content.width.saturating_add(CHROME_WIDTH),
        height: content.height.saturating_add(CHROME_HEIGHT),
    }
}

/// Content size carried by a window frame
pub fn content_size(frame: Rect) -> Size {
    Size {
        width: frame.width.saturating_sub(CHROME_WIDTH),
        height: frame.height.saturating_sub(CHROME_HEIGHT),
    }
}

/// Area the active view fills (flexible autosizing: always the full content region)
pub fn content_area(frame: Rect) -> Rect {
    let size = content_size(frame);
    Rect {
        x: frame.x.saturating_add(1),
        y: frame.y.saturating_add(CONTENT_ROW),
        width: size.width,
        height: size.height,
    }
}

/// Single row holding the toolbar items
pub fn toolbar_area(frame: Rect) -> Rect {
    Rect {
        x: frame.x.saturating_add(1),
        y: frame.y.saturating_add(TOOLBAR_ROW),
        width: frame.width.saturating_sub(CHROME_WIDTH),
        height: if frame.height > TOOLBAR_ROW { 1 } else { 0 },
    }
}

/// Top-left corner that centers a frame of `size` on `screen`
pub fn centered_anchor(screen: Rect, size: Size) -> Position {
    Position {
        x: screen.x + screen.width.saturating_sub(size.width) / 2,
        y: screen.y + screen.height.saturating_sub(size.height) / 2,
    }
}

/// Ease-in-out curve (smoothstep) over progress in [0, 1]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Interpolate between two sizes; `t` is clamped to [0, 1]
pub fn lerp_size(from: Size, to: Size, t: f32) -> Size {
    Size {
        width: lerp_u16(from.width, to.width, t),
        height: lerp_u16(from.height, to.height, t),
    }
}

fn lerp_u16(from: u16, to: u16, t: f32) -> u16 {
    let t = t.clamp(0.0, 1.0);
    let value = f32::from(from) + (f32::from(to) - f32::from(from)) * t;
    value.round().clamp(0.0, f32::from(u16::MAX)) as u16
}
