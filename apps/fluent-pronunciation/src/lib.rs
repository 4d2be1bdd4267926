//! Fluent Pronunciation App - Practice dashboard with fixed display stats

pub mod screen;

pub use screen::{PronunciationScreen, PronunciationScreenRef, PronunciationScreenWidgetRefExt};

use fluent_widgets::{AppInfo, FluentApp};
use makepad_widgets::{live_id, Cx};

/// Pronunciation Practice app descriptor
pub struct FluentPronunciationApp;

impl FluentApp for FluentPronunciationApp {
    fn info() -> AppInfo {
        AppInfo {
            name: "Pronunciation Practice",
            id: "fluent-pronunciation",
            description: "Accent and clarity practice dashboard",
            tab_id: Some(live_id!(pronunciation_tab)),
            page_id: Some(live_id!(pronunciation_page)),
            show_in_sidebar: true,
        }
    }

    fn live_design(cx: &mut Cx) {
        screen::live_design(cx);
    }
}

/// Register all Pronunciation Practice widgets with Makepad
pub fn live_design(cx: &mut Cx) {
    FluentPronunciationApp::live_design(cx);
}
