// Pane Types
// A registered preference screen and the view it displays

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use ratatui::{buffer::Buffer, layout::Rect, layout::Size};

/// A renderable surface owned by the embedding application.
///
/// The controller asks a view for its natural size when it becomes the
/// active pane. The window renders it into its content area every frame;
/// during a cross-fade the window blends the output of the old and new views,
/// so views always draw themselves fully opaque.
pub trait PaneView {
    /// Natural content size of the view, excluding window chrome
    fn fitting_size(&self) -> Size;

    /// Draw the view into `area` of `buf`
    fn render(&self, area: Rect, buf: &mut Buffer);
}

/// Shared handle to an application view
pub type ViewRef = Rc<dyn PaneView>;

/// One registered preference screen
#[derive(Clone)]
pub struct Pane {
    /// Toolbar key and transition correlation key
    pub identifier: String,
    /// Text shown in the toolbar item
    pub label: String,
    /// Glyph icon; resolved through [`IconSet`] when absent
    pub image: Option<String>,
    pub view: ViewRef,
}

impl fmt::Debug for Pane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pane")
            .field("identifier", &self.identifier)
            .field("label", &self.label)
            .field("image", &self.image)
            .finish_non_exhaustive()
    }
}

/// Registry entry: a pane, or a flexible spacer that only widens the toolbar
#[derive(Debug, Clone)]
pub enum ToolbarEntry {
    Pane(Pane),
    Spacer,
}

impl ToolbarEntry {
    pub fn as_pane(&self) -> Option<&Pane> {
        match self {
            ToolbarEntry::Pane(pane) => Some(pane),
            ToolbarEntry::Spacer => None,
        }
    }
}

/// Icon glyphs bundled with the application, keyed by pane label
#[derive(Debug, Clone, Default)]
pub struct IconSet {
    icons: HashMap<String, String>,
}

impl IconSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: impl Into<String>, glyph: impl Into<String>) {
        self.icons.insert(label.into(), glyph.into());
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.icons.get(label).map(String::as_str)
    }

    /// Pick the pane's own image, falling back to the icon named after its label
    pub fn resolve<'a>(&'a self, pane: &'a Pane) -> Option<&'a str> {
        pane.image.as_deref().or_else(|| self.get(&pane.label))
    }
}

impl<K, V> FromIterator<(K, V)> for IconSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            icons: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
