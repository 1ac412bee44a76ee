//! Navigation entries and the active-entry predicate.
//!
//! The shell renders a fixed table of four sections. Which one is highlighted
//! is decided purely by comparing each entry's id with the caller's active tab,
//! so nothing here carries state.

/// One selectable tab descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationItem {
    /// Identifier handed to the tab-change callback.
    pub id: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Glyph rendered in front of the label.
    pub icon: &'static str,
}

impl NavigationItem {
    /// Whether this entry is the one selected by `active_tab`.
    #[must_use]
    pub fn is_active(&self, active_tab: &str) -> bool {
        is_active(active_tab, self.id)
    }
}

/// The navigation entries, in render order.
pub static NAVIGATION: [NavigationItem; 4] = [
    NavigationItem {
        id: "dashboard",
        label: "Dashboard",
        icon: "🏠",
    },
    NavigationItem {
        id: "invoices",
        label: "Invoices",
        icon: "📄",
    },
    NavigationItem {
        id: "payments",
        label: "Payments",
        icon: "💳",
    },
    NavigationItem {
        id: "analytics",
        label: "Analytics",
        icon: "📊",
    },
];

/// Stateless "is this entry active" predicate.
///
/// Plain string equality: unknown or empty tab ids simply match nothing.
#[must_use]
pub fn is_active(active_tab: &str, id: &str) -> bool {
    active_tab == id
}

/// Look up an entry by id.
#[must_use]
pub fn find(id: &str) -> Option<&'static NavigationItem> {
    NAVIGATION.iter().find(|item| item.id == id)
}
