//! Fluent Chat App - Practice conversation with the simulated tutor
//!
//! The tutor is a fixed keyword rule table with a random fallback pool; see
//! [`tutor`] for the exact matching order.

pub mod history;
pub mod screen;
pub mod tutor;

pub use history::ChatHistory;
pub use screen::{ChatScreen, ChatScreenRef, ChatScreenWidgetRefExt};

use fluent_widgets::{AppInfo, FluentApp};
use makepad_widgets::{live_id, Cx};

/// Practice Chat app descriptor
pub struct FluentChatApp;

impl FluentApp for FluentChatApp {
    fn info() -> AppInfo {
        AppInfo {
            name: "Practice Chat",
            id: "fluent-chat",
            description: "Chat with the simulated tutor to practice English",
            tab_id: Some(live_id!(chat_tab)),
            page_id: Some(live_id!(chat_page)),
            show_in_sidebar: true,
        }
    }

    fn live_design(cx: &mut Cx) {
        screen::live_design(cx);
    }
}

/// Register all Practice Chat widgets with Makepad
pub fn live_design(cx: &mut Cx) {
    FluentChatApp::live_design(cx);
}
