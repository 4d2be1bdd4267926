//! # Fluent Widgets - Base Layer
//!
//! Foundation crate for Fluent Studio applications. Provides:
//!
//! - **Theme constants** - Shared `live_design!` color palette used by the
//!   shell and the page apps
//! - **App trait** - Standard interface for apps plugged into the shell
//! - **Page router** - Visibility and title routing for the shell's pages
//!
//! Higher-level reusable widgets (chat panel, modals, shell chrome) live in
//! `fluent-ui`; this crate stays dependency-light so every app can build on
//! it without pulling in the whole component library.

pub mod app_trait;
pub mod theme;

pub use app_trait::{
    tab_clicked, AppInfo, AppRegistry, FluentApp, PageId, PageRouter, PageTitle,
};

use makepad_widgets::Cx;

/// Register the base live designs (theme constants) with Makepad.
///
/// Must be called before any crate that references `fluent_widgets::theme::*`
/// in its `live_design!` blocks.
pub fn live_design(cx: &mut Cx) {
    theme::live_design(cx);
}
