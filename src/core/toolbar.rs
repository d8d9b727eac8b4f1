// Toolbar Model
// Toolbar items built from the registry, selection state and item layout

use ratatui::{layout::Rect, text::Span};

use super::pane::{IconSet, ToolbarEntry};
use super::registry::ViewRegistry;

/// Columns between adjacent toolbar entries
const ITEM_GAP: u16 = 1;

/// One toolbar slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolbarItem {
    /// Selectable item bound to a pane
    Pane {
        identifier: String,
        label: String,
        icon: Option<String>,
    },
    /// Flexible space that absorbs spare width
    FlexibleSpace,
}

impl ToolbarItem {
    /// Text drawn for the item, including one column of padding on each side
    pub fn caption(&self) -> Option<String> {
        match self {
            ToolbarItem::Pane { label, icon: Some(icon), .. } => Some(format!(" {} {} ", icon, label)),
            ToolbarItem::Pane { label, icon: None, .. } => Some(format!(" {} ", label)),
            ToolbarItem::FlexibleSpace => None,
        }
    }

    pub fn identifier(&self) -> Option<&str> {
        match self {
            ToolbarItem::Pane { identifier, .. } => Some(identifier),
            ToolbarItem::FlexibleSpace => None,
        }
    }

    fn natural_width(&self) -> u16 {
        self.caption()
            .map(|c| Span::raw(c).width() as u16)
            .unwrap_or(0)
    }
}

/// Bounding box of a toolbar entry (for click detection and drawing)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemBounds {
    /// Index into [`Toolbar::items`]
    pub index: usize,
    pub x: u16,
    pub y: u16,
    pub width: u16,
}

impl ItemBounds {
    /// Check if a coordinate (x, y) is within this item's bounds
    pub fn contains(&self, x: u16, y: u16) -> bool {
        y == self.y && x >= self.x && x < self.x.saturating_add(self.width)
    }
}

/// Toolbar state: the item sequence and the highlighted item
#[derive(Debug, Clone, Default)]
pub struct Toolbar {
    items: Vec<ToolbarItem>,
    selected: Option<String>,
}

impl Toolbar {
    /// Build the item sequence once from the registered panes
    pub fn from_registry(registry: &ViewRegistry, icons: &IconSet) -> Self {
        let items = registry
            .entries()
            .iter()
            .map(|entry| match entry {
                ToolbarEntry::Pane(pane) => ToolbarItem::Pane {
                    identifier: pane.identifier.clone(),
                    label: pane.label.clone(),
                    icon: icons.resolve(pane).map(str::to_string),
                },
                ToolbarEntry::Spacer => ToolbarItem::FlexibleSpace,
            })
            .collect();

        Self { items, selected: None }
    }

    pub fn items(&self) -> &[ToolbarItem] {
        &self.items
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Highlight the item for `identifier`; spacers and unknown ids are rejected
    pub fn select(&mut self, identifier: &str) -> bool {
        if self.items.iter().any(|i| i.identifier() == Some(identifier)) {
            self.selected = Some(identifier.to_string());
            true
        } else {
            false
        }
    }

    pub fn is_selected(&self, item: &ToolbarItem) -> bool {
        item.identifier().is_some() && item.identifier() == self.selected()
    }

    /// Lay out the items left to right inside `area`.
    ///
    /// Flexible spaces share whatever width the items leave over; items that
    /// run past the right edge are clipped or dropped.
    pub fn layout(&self, area: Rect) -> Vec<ItemBounds> {
        if area.width == 0 || area.height == 0 || self.items.is_empty() {
            return Vec::new();
        }

        let gaps = ITEM_GAP.saturating_mul(self.items.len().saturating_sub(1) as u16);
        let fixed: u16 = self
            .items
            .iter()
            .fold(gaps, |acc, item| acc.saturating_add(item.natural_width()));
        let spacers = self
            .items
            .iter()
            .filter(|i| matches!(i, ToolbarItem::FlexibleSpace))
            .count() as u16;
        let spare = area.width.saturating_sub(fixed);

        let right = area.x.saturating_add(area.width);
        let mut bounds = Vec::with_capacity(self.items.len());
        let mut x = area.x;
        let mut spacer_idx = 0u16;

        for (index, item) in self.items.iter().enumerate() {
            let width = match item {
                ToolbarItem::FlexibleSpace => {
                    // First spacers absorb the remainder
                    let share = spare / spacers + u16::from(spacer_idx < spare % spacers);
                    spacer_idx += 1;
                    share
                }
                _ => item.natural_width(),
            };

            if x >= right {
                break;
            }

            bounds.push(ItemBounds {
                index,
                x,
                y: area.y,
                width: width.min(right - x),
            });

            x = x.saturating_add(width).saturating_add(ITEM_GAP);
        }

        bounds
    }

    /// Identifier of the selectable item at (x, y), if any
    pub fn item_at(&self, area: Rect, x: u16, y: u16) -> Option<&str> {
        self.layout(area)
            .into_iter()
            .find(|b| b.contains(x, y))
            .and_then(|b| self.items.get(b.index))
            .and_then(ToolbarItem::identifier)
    }
}
