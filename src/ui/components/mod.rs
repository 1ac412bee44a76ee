//! Reusable UI components, rendered via Leptos SSR.
//!
//! # Components
//!
//! - [`IconButton`]: Round icon-only toolbar button
//! - [`UserBadge`]: Avatar circle with role label
//! - [`Card`], [`CardHeader`], [`CardContent`]: Card container
//! - [`icons`]: SVG icon components

mod avatar;
mod button;
mod card;
mod icons;

pub use avatar::UserBadge;
pub use button::IconButton;
pub use card::{Card, CardContent, CardHeader};
pub use icons::*;
