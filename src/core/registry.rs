// View Registry
// Ordered, append-only collection of toolbar panes and spacers

use std::collections::HashMap;

use tracing::debug;

use super::errors::PrefsError;
use super::pane::{Pane, ToolbarEntry, ViewRef};

/// Registered panes in toolbar order.
///
/// Registration order is display order. Identifiers are unique; a failed
/// registration leaves the registry untouched.
#[derive(Debug, Clone, Default)]
pub struct ViewRegistry {
    /// Panes and spacers in registration order
    entries: Vec<ToolbarEntry>,
    /// Map of identifier -> index into `entries`
    index: HashMap<String, usize>,
}

impl ViewRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a view whose identifier is its label
    pub fn register(
        &mut self,
        view: ViewRef,
        label: &str,
        image: Option<&str>,
    ) -> Result<String, PrefsError> {
        self.register_with_identifier(label, view, label, image)
    }

    /// Register a view under an identifier distinct from its label
    pub fn register_with_identifier(
        &mut self,
        identifier: &str,
        view: ViewRef,
        label: &str,
        image: Option<&str>,
    ) -> Result<String, PrefsError> {
        if self.index.contains_key(identifier) {
            return Err(PrefsError::DuplicateIdentifier(identifier.to_string()));
        }

        let pane = Pane {
            identifier: identifier.to_string(),
            label: label.to_string(),
            image: image.map(str::to_string),
            view,
        };

        self.index.insert(pane.identifier.clone(), self.entries.len());
        self.entries.push(ToolbarEntry::Pane(pane));

        debug!(event = "prefs.registry.pane_registered", identifier, label);
        Ok(identifier.to_string())
    }

    /// Append a flexible spacer between toolbar items
    pub fn add_spacer(&mut self) {
        self.entries.push(ToolbarEntry::Spacer);
    }

    /// Find a pane by identifier
    pub fn lookup(&self, identifier: &str) -> Result<&Pane, PrefsError> {
        self.index
            .get(identifier)
            .and_then(|&idx| self.entries.get(idx))
            .and_then(ToolbarEntry::as_pane)
            .ok_or_else(|| PrefsError::UnknownIdentifier(identifier.to_string()))
    }

    /// Panes in registration order, spacers skipped
    pub fn ordered_panes(&self) -> impl Iterator<Item = &Pane> + Clone + '_ {
        self.entries.iter().filter_map(ToolbarEntry::as_pane)
    }

    /// Panes and spacers in registration order
    pub fn entries(&self) -> &[ToolbarEntry] {
        &self.entries
    }

    /// First registered pane, the one shown when the window first opens
    pub fn first_pane(&self) -> Option<&Pane> {
        self.ordered_panes().next()
    }

    /// Position of a pane among the selectable panes
    pub fn position(&self, identifier: &str) -> Option<usize> {
        self.ordered_panes().position(|p| p.identifier == identifier)
    }

    /// Pane at a position among the selectable panes
    pub fn pane_at(&self, position: usize) -> Option<&Pane> {
        self.ordered_panes().nth(position)
    }

    /// Number of selectable panes
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
