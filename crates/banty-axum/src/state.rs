//! Shared application state type.

use crate::bootstrap::AppContext;
use std::sync::Arc;

/// Application state shared across all handlers: an Arc-wrapped
/// [`AppContext`] holding the catalog service, notifier and ports.
pub type AppState = Arc<AppContext>;
