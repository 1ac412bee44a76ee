//! Round icon-only button.

use leptos::prelude::*;

/// Icon button used in the header toolbar.
///
/// Carries no `hx-*` attributes: it renders a control and nothing else. Callers
/// that need behaviour render their own `<button>`.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <IconButton label="Notifications">
///         <BellIcon />
///     </IconButton>
/// }
/// ```
#[component]
pub fn IconButton(
    /// Accessible name (`aria-label`).
    label: &'static str,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Icon content.
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "p-2 text-gray-600 hover:text-gray-900 hover:bg-gray-50 rounded-full {class}"
    );

    view! {
        <button type="button" class=classes aria-label=label>
            {children()}
        </button>
    }
}
