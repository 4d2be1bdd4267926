//! Fluent Vocabulary App - Daily word cards and practice exercise stubs

pub mod screen;
pub mod words;

pub use screen::{VocabularyScreen, VocabularyScreenRef, VocabularyScreenWidgetRefExt};
pub use words::{practice_phrase, VocabularyEntry, VOCABULARY};

use fluent_widgets::{AppInfo, FluentApp};
use makepad_widgets::{live_id, Cx};

/// Vocabulary Builder app descriptor
pub struct FluentVocabularyApp;

impl FluentApp for FluentVocabularyApp {
    fn info() -> AppInfo {
        AppInfo {
            name: "Vocabulary Builder",
            id: "fluent-vocabulary",
            description: "Daily word cards with practice exercises",
            tab_id: Some(live_id!(vocabulary_tab)),
            page_id: Some(live_id!(vocabulary_page)),
            show_in_sidebar: true,
        }
    }

    fn live_design(cx: &mut Cx) {
        screen::live_design(cx);
    }
}

/// Register all Vocabulary Builder widgets with Makepad
pub fn live_design(cx: &mut Cx) {
    FluentVocabularyApp::live_design(cx);
}
