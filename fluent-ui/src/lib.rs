//! # Fluent UI - Shared Component Library
//!
//! Reusable UI components, shell chrome, and infrastructure for Fluent
//! Studio applications.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Widget Registry** - Runtime widget discovery and registration
//! - **App Data** - Scope-based state injection for widgets
//! - **Theme** - Runtime dark mode management with animations
//! - **Traits** - Common widget interfaces for consistency
//! - **Widgets** - Reusable UI components (chat, dialogs)
//! - **Shell** - Header, sidebar, and status bar chrome
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fluent_ui::{FluentAppData, FluentTheme};
//! use fluent_speech_bridge::SharedSpeechState;
//!
//! // 1. Create app data for scope injection
//! let app_data = FluentAppData::new();
//!
//! // 2. Register widgets in live_design
//! impl LiveRegister for MyApp {
//!     fn live_register(cx: &mut Cx) {
//!         fluent_widgets::live_design(cx);
//!         fluent_ui::live_design(cx);
//!         // ... your app widgets
//!     }
//! }
//!
//! // 3. Pass app_data through scope
//! impl AppMain for MyApp {
//!     fn handle_event(&mut self, cx: &mut Cx, event: &Event) {
//!         self.ui.handle_event(cx, event, &mut Scope::with_data(&mut self.app_data));
//!     }
//! }
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`registry`] | Widget discovery and registration |
//! | [`app_data`] | Scope-based state injection |
//! | [`theme`] | Runtime dark mode management |
//! | [`traits`] | Common widget interfaces |
//! | [`widgets`] | Reusable UI components |
//! | [`shell`] | Shell chrome components |

pub mod app_data;
pub mod registry;
pub mod shell;
pub mod theme;
pub mod traits;
pub mod widgets;

// Re-export main types for convenience
pub use app_data::{AppConfig, FluentAppData};
pub use registry::{FluentWidgetDef, FluentWidgetRegistry, WidgetCategory};
pub use theme::{FluentTheme, THEME_TRANSITION_DURATION};
pub use traits::{Clearable, Focusable, FluentWidget, Themeable};

// Re-export widgets and their WidgetExt traits
pub use widgets::{
    ChatInput, ChatInputAction, ChatInputRef, ChatInputWidgetExt,
    ChatMessage, ChatPanel, ChatPanelAction, ChatPanelRef, ChatPanelWidgetExt,
    ConfirmDialog, ConfirmDialogAction, ConfirmDialogRef, ConfirmDialogWidgetExt,
    NoticeModal, NoticeModalAction, NoticeModalRef, NoticeModalWidgetExt,
    Sender,
};

// Re-export shell components
pub use shell::{
    ShellHeader, ShellHeaderAction, ShellHeaderRef, ShellHeaderWidgetExt,
    ShellSidebar, ShellSidebarAction, ShellSidebarRef, ShellSidebarWidgetExt,
    StatusBar, StatusBarRef, StatusBarWidgetExt,
};

use makepad_widgets::Cx;

/// Register all fluent-ui widgets and components with Makepad.
///
/// Call this in your app's `LiveRegister::live_register` implementation
/// after `fluent_widgets::live_design` (the widgets reference its theme
/// constants) and before registering app-specific widgets.
pub fn live_design(cx: &mut Cx) {
    widgets::live_design(cx);
    shell::live_design(cx);
}

/// Create a default widget registry with the standard fluent-ui widgets.
pub fn create_default_registry() -> FluentWidgetRegistry {
    let mut registry = FluentWidgetRegistry::new();

    registry.register(
        FluentWidgetDef::new("chat_panel", "Chat Panel", WidgetCategory::Chat)
            .description("Chat message display with markdown support"),
    );
    registry.register(
        FluentWidgetDef::new("chat_input", "Chat Input", WidgetCategory::Chat)
            .requires_speech(true)
            .description("Text input with send button and voice toggle"),
    );
    registry.register(
        FluentWidgetDef::new("notice_modal", "Notice Modal", WidgetCategory::Dialog)
            .description("Blocking notice with a dismiss button"),
    );
    registry.register(
        FluentWidgetDef::new("confirm_dialog", "Confirm Dialog", WidgetCategory::Dialog)
            .description("Confirm/cancel prompt for destructive actions"),
    );
    registry.register(
        FluentWidgetDef::new("shell_header", "Shell Header", WidgetCategory::Shell)
            .description("Page title/subtitle header with user chip and theme toggle"),
    );
    registry.register(
        FluentWidgetDef::new("shell_sidebar", "Shell Sidebar", WidgetCategory::Shell)
            .description("Navigation sidebar with page tabs"),
    );
    registry.register(
        FluentWidgetDef::new("status_bar", "Status Bar", WidgetCategory::Shell)
            .description("Speech capability and activity bar"),
    );

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_default_registry() {
        let registry = create_default_registry();
        assert_eq!(registry.len(), 7);
        assert!(registry.contains("chat_panel"));
        assert!(registry.contains("chat_input"));
        assert!(registry.contains("notice_modal"));
        assert!(registry.contains("confirm_dialog"));
        assert!(registry.contains("shell_header"));
        assert!(registry.contains("shell_sidebar"));
        assert!(registry.contains("status_bar"));
    }

    #[test]
    fn test_re_exports() {
        let _registry = FluentWidgetRegistry::new();
        let _theme = FluentTheme::default();
        let _config = AppConfig::default();
    }
}
