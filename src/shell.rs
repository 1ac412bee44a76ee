//! Interaction model of the navigation shell.
//!
//! The shell owns exactly one piece of state, the mobile drawer flag
//! ([`MobileMenu`]). The active tab belongs to the caller: the shell only
//! reports selections through the `on_tab_change` callback and never rewrites
//! the tab it was given.
//!
//! # Example
//!
//! ```rust
//! use zava_ar::shell::{MobileMenu, NavigationShell, ShellEvent};
//!
//! let mut requested = Vec::new();
//! let mut shell = NavigationShell::new("payments", |tab: &str| requested.push(tab.to_owned()))
//!     .with_menu(MobileMenu::Open);
//!
//! shell.dispatch(&ShellEvent::MobileNav { tab: "analytics".into() });
//! assert_eq!(shell.menu(), MobileMenu::Closed);
//! drop(shell);
//! assert_eq!(requested, ["analytics"]);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ServerError;

/// Open/closed state of the mobile navigation drawer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MobileMenu {
    /// Drawer hidden (initial state).
    #[default]
    Closed,
    /// Drawer shown below the header.
    Open,
}

impl MobileMenu {
    /// Whether the drawer is shown.
    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// State after a click on the drawer toggle.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    /// Flip the drawer in place.
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    /// Force the drawer shut.
    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    /// Wire name, as used in query strings and form values.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Open => "open",
        }
    }
}

impl fmt::Display for MobileMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single user interaction with the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    /// Click on an entry of the desktop navigation bar.
    DesktopNav {
        /// Requested tab id.
        tab: String,
    },
    /// Click on the mobile drawer toggle.
    MobileToggle,
    /// Click on an entry inside the open mobile drawer.
    MobileNav {
        /// Requested tab id.
        tab: String,
    },
}

impl ShellEvent {
    /// The discriminant, without payload.
    #[must_use]
    pub fn kind(&self) -> ShellEventKind {
        match self {
            Self::DesktopNav { .. } => ShellEventKind::DesktopNav,
            Self::MobileToggle => ShellEventKind::MobileToggle,
            Self::MobileNav { .. } => ShellEventKind::MobileNav,
        }
    }

    /// Tab requested by this event, if it is a navigation event.
    #[must_use]
    pub fn tab(&self) -> Option<&str> {
        match self {
            Self::DesktopNav { tab } | Self::MobileNav { tab } => Some(tab),
            Self::MobileToggle => None,
        }
    }
}

/// Event discriminant as carried over the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShellEventKind {
    DesktopNav,
    MobileToggle,
    MobileNav,
}

/// Flat form of an interaction: the event plus the shell state it happened in.
///
/// Rendered into each control's `hx-vals` and posted back to the server, which
/// rebuilds the shell from `active_tab`/`menu` and replays the event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellEventForm {
    pub event: ShellEventKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab: Option<String>,
    pub active_tab: String,
    #[serde(default)]
    pub menu: MobileMenu,
}

impl ShellEventForm {
    /// Capture `event` as it happens in a shell showing `active_tab`/`menu`.
    #[must_use]
    pub fn new(event: &ShellEvent, active_tab: &str, menu: MobileMenu) -> Self {
        Self {
            event: event.kind(),
            tab: event.tab().map(str::to_owned),
            active_tab: active_tab.to_owned(),
            menu,
        }
    }

    /// JSON object for an `hx-vals` attribute.
    #[must_use]
    pub fn hx_vals(&self) -> String {
        // Strings and unit variants only; serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Recover the event. Navigation events must name a tab.
    pub fn event(&self) -> Result<ShellEvent, ServerError> {
        match (self.event, &self.tab) {
            (ShellEventKind::MobileToggle, _) => Ok(ShellEvent::MobileToggle),
            (ShellEventKind::DesktopNav, Some(tab)) => {
                Ok(ShellEvent::DesktopNav { tab: tab.clone() })
            }
            (ShellEventKind::MobileNav, Some(tab)) => {
                Ok(ShellEvent::MobileNav { tab: tab.clone() })
            }
            (kind, None) => Err(ServerError::MissingTab(kind)),
        }
    }
}

/// Interaction controller for one shell instance.
///
/// Holds the caller's active tab (read-only), the caller's tab-change callback,
/// and the drawer state. Knows nothing about which tab ids are valid.
pub struct NavigationShell<F> {
    active_tab: String,
    menu: MobileMenu,
    on_tab_change: F,
}

impl<F> NavigationShell<F>
where
    F: FnMut(&str),
{
    /// New shell with the drawer closed.
    pub fn new(active_tab: impl Into<String>, on_tab_change: F) -> Self {
        Self {
            active_tab: active_tab.into(),
            menu: MobileMenu::Closed,
            on_tab_change,
        }
    }

    /// Resume with a known drawer state, e.g. one carried by a request.
    #[must_use]
    pub fn with_menu(mut self, menu: MobileMenu) -> Self {
        self.menu = menu;
        self
    }

    pub fn active_tab(&self) -> &str {
        &self.active_tab
    }

    pub fn menu(&self) -> MobileMenu {
        self.menu
    }

    /// Whether entry `id` gets active styling.
    pub fn is_active(&self, id: &str) -> bool {
        crate::navigation::is_active(&self.active_tab, id)
    }

    /// Apply one interaction.
    pub fn dispatch(&mut self, event: &ShellEvent) {
        tracing::debug!(
            name: "shell.event.dispatched",
            event = ?event.kind(),
            active_tab = %self.active_tab,
            menu = %self.menu,
            "Shell event dispatched"
        );

        match event {
            ShellEvent::DesktopNav { tab } => self.request_tab(tab),
            ShellEvent::MobileToggle => self.menu.toggle(),
            ShellEvent::MobileNav { tab } => {
                self.request_tab(tab);
                self.menu.close();
            }
        }
    }

    fn request_tab(&mut self, tab: &str) {
        tracing::debug!(name: "shell.tab.requested", tab = %tab, "Tab change requested");
        (self.on_tab_change)(tab);
    }
}

impl<F> fmt::Debug for NavigationShell<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationShell")
            .field("active_tab", &self.active_tab)
            .field("menu", &self.menu)
            .finish_non_exhaustive()
    }
}
