//! Reusable UI Widgets for Fluent Studio Applications
//!
//! ## Chat Widgets
//!
//! - [`ChatPanel`] - Conversation transcript display
//! - [`ChatInput`] - Text input with voice toggle and send button
//!
//! ## Dialogs
//!
//! - [`NoticeModal`] - Blocking notice with a single dismiss button
//! - [`ConfirmDialog`] - Confirm/cancel prompt for destructive actions
//!
//! ## Usage
//!
//! ```rust,ignore
//! live_design! {
//!     use fluent_ui::widgets::chat_panel::*;
//!     use fluent_ui::widgets::chat_input::*;
//!     use fluent_ui::widgets::notice_modal::*;
//!
//!     MyScreen = <View> {
//!         flow: Overlay
//!         chat = <ChatPanel> {}
//!         prompt = <ChatInput> {}
//!         notice = <NoticeModal> {}
//!     }
//! }
//! ```

pub mod chat_input;
pub mod chat_panel;
pub mod confirm_dialog;
pub mod notice_modal;

pub use chat_input::{ChatInput, ChatInputAction, ChatInputRef, ChatInputWidgetExt};
pub use chat_panel::{
    ChatMessage, ChatPanel, ChatPanelAction, ChatPanelRef, ChatPanelWidgetExt, Sender,
};
pub use confirm_dialog::{
    ConfirmDialog, ConfirmDialogAction, ConfirmDialogRef, ConfirmDialogWidgetExt,
};
pub use notice_modal::{NoticeModal, NoticeModalAction, NoticeModalRef, NoticeModalWidgetExt};

use makepad_widgets::Cx;

/// Register all widget live designs with Makepad.
///
/// Called from `fluent_ui::live_design()`.
pub fn live_design(cx: &mut Cx) {
    chat_panel::live_design(cx);
    chat_input::live_design(cx);
    notice_modal::live_design(cx);
    confirm_dialog::live_design(cx);
}
