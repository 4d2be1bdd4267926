//! Shell Chrome Components for Fluent Studio
//!
//! ## Components
//!
//! - [`ShellHeader`] - Page title/subtitle header with user chip and theme toggle
//! - [`ShellSidebar`] - Navigation sidebar with page tabs
//! - [`StatusBar`] - Speech capability and activity bar
//!
//! ## Architecture
//!
//! The shell composes these around the page stack:
//!
//! ```text
//! ┌─────────┬───────────────────────────────────┐
//! │         │  ShellHeader                      │
//! │ Shell   ├───────────────────────────────────┤
//! │ Sidebar │                                   │
//! │         │     Page stack (one visible)      │
//! │         │                                   │
//! ├─────────┴───────────────────────────────────┤
//! │  StatusBar                                  │
//! └─────────────────────────────────────────────┘
//! ```

pub mod header;
pub mod sidebar;
pub mod status_bar;

// Re-export main types
pub use header::{ShellHeader, ShellHeaderAction, ShellHeaderRef, ShellHeaderWidgetExt};
pub use sidebar::{ShellSidebar, ShellSidebarAction, ShellSidebarRef, ShellSidebarWidgetExt};
pub use status_bar::{StatusBar, StatusBarRef, StatusBarWidgetExt};

use makepad_widgets::Cx;

/// Register all shell live designs with Makepad.
///
/// Called from `fluent_ui::live_design()`.
pub fn live_design(cx: &mut Cx) {
    header::live_design(cx);
    sidebar::live_design(cx);
    status_bar::live_design(cx);
}
