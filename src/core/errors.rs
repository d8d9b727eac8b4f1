// Error Types
// Failures surfaced by the registry and the transition controller

use thiserror::Error;

/// Errors returned by the preferences window controller.
///
/// All of these are programmer errors: they are reported to the caller
/// immediately and never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrefsError {
    #[error("a pane with identifier '{0}' is already registered")]
    DuplicateIdentifier(String),

    #[error("no pane registered with identifier '{0}'")]
    UnknownIdentifier(String),

    #[error("cannot register '{0}': the toolbar is fixed once the window has been shown")]
    RegistrySealed(String),

    #[error("no pane at position {position}; {count} panes are registered")]
    PositionOutOfRange { position: usize, count: usize },

    #[error("no panes registered; call register() from the setup callback")]
    NoPanes,
}
