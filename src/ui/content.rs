//! Section panels rendered into the shell's content slot.
//!
//! These belong to the hosting application, not to the shell: the shell only
//! displays whatever it is handed.

use leptos::prelude::*;

use crate::navigation;
use crate::ui::components::{Card, CardContent, CardHeader};

/// One-line description of a section.
fn section_summary(id: &str) -> &'static str {
    match id {
        "dashboard" => "Outstanding balances, aging buckets and today's collection activity.",
        "invoices" => "Issued invoices, due dates and delivery status.",
        "payments" => "Received payments and their allocation to open invoices.",
        "analytics" => "Collection trends, DSO and customer payment behaviour.",
        _ => "",
    }
}

/// Panel for the section named by `active_tab`.
///
/// Ids outside the navigation table get a "not found" panel rather than an
/// error page; the shell renders them with no active entry.
#[component]
pub fn TabContent(active_tab: String) -> impl IntoView {
    match navigation::find(&active_tab) {
        Some(item) => view! {
            <Card>
                <CardHeader>
                    <h2 class="text-2xl font-bold text-gray-900" data-section=item.id>
                        <span class="mr-2">{item.icon}</span>
                        {item.label}
                    </h2>
                    <p class="text-sm text-gray-500">{section_summary(item.id)}</p>
                </CardHeader>
                <CardContent>
                    <p class="text-gray-600">"Nothing to show yet."</p>
                </CardContent>
            </Card>
        }
        .into_any(),
        None => view! {
            <Card>
                <CardHeader>
                    <h2 class="text-2xl font-bold text-gray-900" data-section="">
                        "Section not found"
                    </h2>
                </CardHeader>
                <CardContent>
                    <p class="text-gray-600">"There is no section named " <code>{active_tab}</code> "."</p>
                </CardContent>
            </Card>
        }
        .into_any(),
    }
}
