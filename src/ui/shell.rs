//! Navigation shell layout: header, desktop nav, toolbar, mobile drawer and
//! the content slot.
//!
//! Every interactive control posts its [`ShellEventForm`] back to
//! [`EVENTS_PATH`] and swaps the whole `#app-shell` element with the response.
//! The notification and settings buttons render without any behaviour.

use leptos::prelude::*;

use crate::config::ShellConfig;
use crate::navigation::{NAVIGATION, NavigationItem};
use crate::shell::{MobileMenu, ShellEvent, ShellEventForm};
use crate::ui::components::{BellIcon, CloseIcon, IconButton, MenuIcon, SettingsIcon, UserBadge};

/// Endpoint receiving shell interactions.
pub const EVENTS_PATH: &str = "/shell/events";

/// Element replaced on every interaction.
pub const SHELL_TARGET: &str = "#app-shell";

const ACTIVE_CLASSES: &str = "bg-blue-50 text-blue-700";
const INACTIVE_CLASSES: &str = "text-gray-600 hover:text-gray-900 hover:bg-gray-50";

/// Where a navigation entry is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavPlacement {
    /// Horizontal bar, visible from `md` up.
    Desktop,
    /// Stacked list inside the mobile drawer.
    Mobile,
}

impl NavPlacement {
    /// CSS classes for an entry in this placement.
    #[must_use]
    pub fn classes(self, active: bool) -> String {
        let base = match self {
            Self::Desktop => "px-3 py-2 rounded-md text-sm font-medium transition-colors",
            Self::Mobile => {
                "block px-3 py-2 rounded-md text-base font-medium w-full text-left transition-colors"
            }
        };
        let state = if active {
            ACTIVE_CLASSES
        } else {
            INACTIVE_CLASSES
        };
        format!("{base} {state}")
    }

    /// Event produced by clicking entry `tab` here.
    #[must_use]
    pub fn event(self, tab: &str) -> ShellEvent {
        let tab = tab.to_owned();
        match self {
            Self::Desktop => ShellEvent::DesktopNav { tab },
            Self::Mobile => ShellEvent::MobileNav { tab },
        }
    }
}

/// Page chrome around caller-provided content.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <ShellLayout active_tab="payments".to_string() menu=MobileMenu::Open>
///         <TabContent active_tab="payments".to_string() />
///     </ShellLayout>
/// }
/// ```
#[component]
pub fn ShellLayout(
    /// Caller-owned active tab id; any string is accepted.
    active_tab: String,
    /// Mobile drawer state.
    #[prop(optional)]
    menu: MobileMenu,
    /// Brand, tagline and user label.
    #[prop(optional)]
    branding: ShellConfig,
    /// Page content.
    children: Children,
) -> impl IntoView {
    let desktop_entries = nav_entries(NavPlacement::Desktop, &active_tab, menu);
    let toggle_vals = ShellEventForm::new(&ShellEvent::MobileToggle, &active_tab, menu).hx_vals();
    let expanded = if menu.is_open() { "true" } else { "false" };
    let toggle_icon = if menu.is_open() {
        view! { <CloseIcon /> }.into_any()
    } else {
        view! { <MenuIcon /> }.into_any()
    };
    let drawer = menu.is_open().then(|| {
        let entries = nav_entries(NavPlacement::Mobile, &active_tab, menu);
        view! {
            <div id="mobile-menu" class="md:hidden">
                <div class="px-2 pt-2 pb-3 space-y-1 sm:px-3 bg-white border-t">
                    {entries}
                </div>
            </div>
        }
    });

    view! {
        <div
            id="app-shell"
            class="min-h-screen bg-gray-50"
            data-active-tab=active_tab
            data-menu=menu.as_str()
        >
            <header class="bg-white shadow-sm border-b">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex justify-between items-center h-16">
                        <div class="flex items-center">
                            <div class="flex-shrink-0">
                                <h1 class="text-2xl font-bold bg-gradient-to-r from-blue-800 to-blue-600 bg-clip-text text-transparent">
                                    {branding.brand}
                                </h1>
                                <p class="text-xs text-gray-500">{branding.tagline}</p>
                            </div>
                            <nav id="desktop-nav" class="hidden md:ml-10 md:flex md:space-x-8">
                                {desktop_entries}
                            </nav>
                        </div>

                        <div class="flex items-center space-x-4">
                            <IconButton label="Notifications">
                                <BellIcon />
                            </IconButton>
                            <IconButton label="Settings">
                                <SettingsIcon />
                            </IconButton>
                            <UserBadge label=branding.user_label />
                            <button
                                type="button"
                                class="md:hidden p-2"
                                aria-label="Toggle navigation menu"
                                aria-controls="mobile-menu"
                                aria-expanded=expanded
                                hx-post=EVENTS_PATH
                                hx-vals=toggle_vals
                                hx-target=SHELL_TARGET
                                hx-swap="outerHTML"
                            >
                                {toggle_icon}
                            </button>
                        </div>
                    </div>
                </div>

                {drawer}
            </header>

            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                {children()}
            </main>
        </div>
    }
}

fn nav_entries(
    placement: NavPlacement,
    active_tab: &str,
    menu: MobileMenu,
) -> impl IntoView + use<> {
    NAVIGATION
        .iter()
        .map(|item| {
            view! {
                <NavEntry
                    item=item
                    placement=placement
                    active_tab=active_tab.to_owned()
                    menu=menu
                />
            }
        })
        .collect_view()
}

/// One navigation button.
#[component]
fn NavEntry(
    item: &'static NavigationItem,
    placement: NavPlacement,
    active_tab: String,
    menu: MobileMenu,
) -> impl IntoView {
    let active = item.is_active(&active_tab);
    let vals = ShellEventForm::new(&placement.event(item.id), &active_tab, menu).hx_vals();

    view! {
        <button
            type="button"
            class=placement.classes(active)
            data-nav-id=item.id
            data-active=active.then_some("true")
            aria-current=active.then_some("page")
            hx-post=EVENTS_PATH
            hx-vals=vals
            hx-target=SHELL_TARGET
            hx-swap="outerHTML"
        >
            <span class="mr-2">{item.icon}</span>
            {item.label}
        </button>
    }
}
