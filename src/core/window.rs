// Preferences Window
// Frame, title, visibility and the attached view hierarchy

use std::fmt;

use ratatui::layout::{Position, Rect, Size};

use super::geometry;
use super::pane::ViewRef;

/// A view attached to the window's content area
#[derive(Clone)]
pub struct AttachedView {
    /// Identifier of the pane the view belongs to
    pub identifier: String,
    pub view: ViewRef,
    /// 0.0 = invisible, 1.0 = fully opaque
    pub opacity: f32,
}

impl fmt::Debug for AttachedView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttachedView")
            .field("identifier", &self.identifier)
            .field("opacity", &self.opacity)
            .finish_non_exhaustive()
    }
}

/// The floating preferences window drawn on top of the terminal screen
#[derive(Debug, Clone)]
pub struct PrefsWindow {
    /// Area the window is placed on
    screen: Rect,
    /// Outer frame including chrome
    frame: Rect,
    title: String,
    visible: bool,
    /// Whether the window has been placed on the screen yet
    placed: bool,
    /// Attached views, back to front
    subviews: Vec<AttachedView>,
}

impl PrefsWindow {
    pub fn new(title: impl Into<String>, screen: Rect) -> Self {
        Self {
            screen,
            frame: geometry::frame_for_content(
                Position { x: screen.x, y: screen.y },
                Size { width: 0, height: 0 },
            ),
            title: title.into(),
            visible: false,
            placed: false,
            subviews: Vec::new(),
        }
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Top-left corner; resizes never move it
    pub fn anchor(&self) -> Position {
        Position { x: self.frame.x, y: self.frame.y }
    }

    pub fn content_size(&self) -> Size {
        geometry::content_size(self.frame)
    }

    pub fn content_area(&self) -> Rect {
        geometry::content_area(self.frame)
    }

    pub fn toolbar_area(&self) -> Rect {
        geometry::toolbar_area(self.frame)
    }

    /// Part of the toolbar row that lies on the screen.
    ///
    /// Toolbar items are laid out in this area both for drawing and for click
    /// hit-testing, so a window wider than the screen keeps them in sync.
    pub fn visible_toolbar_area(&self) -> Rect {
        self.toolbar_area().intersection(self.screen)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn screen(&self) -> Rect {
        self.screen
    }

    /// Update the screen area (terminal resize); the window keeps its anchor
    pub fn set_screen(&mut self, screen: Rect) {
        self.screen = screen;
    }

    pub fn is_placed(&self) -> bool {
        self.placed
    }

    /// Resize the content area, keeping the top-left corner fixed
    pub fn resize_content(&mut self, content: Size) {
        self.frame = geometry::frame_for_content(self.anchor(), content);
    }

    /// Center the window on its screen at the current size
    pub fn center(&mut self) {
        let size = Size { width: self.frame.width, height: self.frame.height };
        let anchor = geometry::centered_anchor(self.screen, size);
        self.frame.x = anchor.x;
        self.frame.y = anchor.y;
        self.placed = true;
    }

    /// Move the top-left corner
    pub fn place_at(&mut self, anchor: Position) {
        self.frame.x = anchor.x;
        self.frame.y = anchor.y;
        self.placed = true;
    }

    /// Attach a view on top of the existing ones
    pub fn attach(&mut self, identifier: &str, view: ViewRef, opacity: f32) {
        self.detach(identifier);
        self.subviews.push(AttachedView {
            identifier: identifier.to_string(),
            view,
            opacity: opacity.clamp(0.0, 1.0),
        });
    }

    /// Remove a view from the hierarchy; returns false if it was not attached
    pub fn detach(&mut self, identifier: &str) -> bool {
        let before = self.subviews.len();
        self.subviews.retain(|v| v.identifier != identifier);
        self.subviews.len() != before
    }

    /// Remove every view except `keep`
    pub fn detach_all_except(&mut self, keep: &str) {
        self.subviews.retain(|v| v.identifier == keep);
    }

    pub fn set_opacity(&mut self, identifier: &str, opacity: f32) {
        if let Some(attached) = self.subviews.iter_mut().find(|v| v.identifier == identifier) {
            attached.opacity = opacity.clamp(0.0, 1.0);
        }
    }

    pub fn opacity_of(&self, identifier: &str) -> Option<f32> {
        self.subviews
            .iter()
            .find(|v| v.identifier == identifier)
            .map(|v| v.opacity)
    }

    pub fn is_attached(&self, identifier: &str) -> bool {
        self.subviews.iter().any(|v| v.identifier == identifier)
    }

    pub fn subviews(&self) -> &[AttachedView] {
        &self.subviews
    }
}
