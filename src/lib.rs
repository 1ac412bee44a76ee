//! Zava AR navigation shell
//!
//! Header, section navigation and mobile drawer of the Zava accounts
//! receivable web application, rendered on the server and kept interactive
//! through HTMX round trips.
//!
//! # Architecture
//!
//! - **Navigation**: Fixed section table and the pure active-entry predicate
//! - **Shell**: Mobile drawer state machine and the tab-change callback seam
//! - **UI**: Leptos SSR components
//! - **Server**: Axum host that plays the parent, owning the active tab
//!
//! # Modules
//!
//! - [`navigation`]: Navigation entries
//! - [`shell`]: Interaction model
//! - [`ui`]: Rendering
//! - [`server`]: HTTP routes

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::needless_pass_by_value)]

pub mod config;
pub mod error;
pub mod navigation;
pub mod server;
pub mod shell;
pub mod telemetry;
pub mod ui;

use crate::config::AppConfig;
use std::sync::Arc;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Global Configuration
    pub config: Arc<AppConfig>,
}
