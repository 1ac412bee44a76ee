//! UI components and layouts.
//!
//! Leptos SSR components rendering the navigation shell. Interactivity is
//! carried by HTMX attributes that post shell events back to the server.
//!
//! # Structure
//!
//! - [`app`]: Page document and render entry points
//! - [`shell`]: The navigation shell layout
//! - [`content`]: Section panels placed in the shell's content slot
//! - [`components`]: Reusable UI components

pub mod app;
pub mod components;
pub mod content;
pub mod shell;

pub use app::{render_document, render_shell};
pub use shell::{EVENTS_PATH, SHELL_TARGET, ShellLayout};
