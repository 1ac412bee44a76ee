//! Page document and the server-side render entry points.

use leptos::prelude::*;

use crate::config::ShellConfig;
use crate::navigation;
use crate::shell::MobileMenu;
use crate::ui::content::TabContent;
use crate::ui::shell::ShellLayout;

/// Render the complete HTML document for `active_tab`.
pub fn render_document(branding: &ShellConfig, active_tab: &str, menu: MobileMenu) -> String {
    let branding = branding.clone();
    let active_tab = active_tab.to_owned();
    let html = Owner::new().with(|| {
        view! { <Document branding=branding active_tab=active_tab menu=menu /> }.to_html()
    });
    format!("<!DOCTYPE html>{html}")
}

/// Render only the `#app-shell` element, for HTMX swaps.
pub fn render_shell(branding: &ShellConfig, active_tab: &str, menu: MobileMenu) -> String {
    let branding = branding.clone();
    let active_tab = active_tab.to_owned();
    Owner::new().with(|| {
        view! { <Shell branding=branding active_tab=active_tab menu=menu /> }.to_html()
    })
}

#[component]
fn Document(branding: ShellConfig, active_tab: String, menu: MobileMenu) -> impl IntoView {
    let title = match navigation::find(&active_tab) {
        Some(item) => format!("{} - {}", item.label, branding.brand),
        None => branding.brand.clone(),
    };
    let description = format!("{} - {}", branding.brand, branding.tagline);

    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=description />

                <title>{title}</title>

                // Local assets only
                <script src="/static/vendor/htmx.min.js"></script>
                <link rel="stylesheet" href="/static/app.css" />
            </head>

            <body class="antialiased">
                <Shell branding=branding active_tab=active_tab menu=menu />
            </body>
        </html>
    }
}

/// The shell with the application's section panel in its content slot.
#[component]
fn Shell(branding: ShellConfig, active_tab: String, menu: MobileMenu) -> impl IntoView {
    let content_tab = active_tab.clone();

    view! {
        <ShellLayout active_tab=active_tab menu=menu branding=branding>
            <TabContent active_tab=content_tab />
        </ShellLayout>
    }
}
