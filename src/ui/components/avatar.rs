//! User badge: round avatar plus role label.

use leptos::prelude::*;

use super::UserIcon;

/// Signed-in user indicator.
///
/// The label hides on narrow viewports; the avatar circle always shows.
#[component]
pub fn UserBadge(
    /// Role or name shown next to the avatar.
    label: String,
    /// Avatar size class.
    #[prop(default = "h-8 w-8")]
    size: &'static str,
) -> impl IntoView {
    let avatar_classes =
        format!("{size} rounded-full bg-blue-600 flex items-center justify-center");

    view! {
        <div class="flex items-center space-x-2" data-user-badge="">
            <div class=avatar_classes>
                <UserIcon class="h-4 w-4 text-white" />
            </div>
            <span class="hidden md:block text-sm font-medium text-gray-700">{label}</span>
        </div>
    }
}
