//! Global application state.

use yewdux::Store;

use super::notice::Notice;
use crate::session::SessionStore;

/// The one store every component reads and dispatches to.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct AppState {
    /// Signed-in user and cart.
    pub session: SessionStore,
    /// Toast currently on screen.
    pub notice: Option<Notice>,
}
