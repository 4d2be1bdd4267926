//! Fluent Settings App - Profile, notification, and speech preferences

pub mod data;
pub mod screen;

pub use data::{Preferences, NATIVE_LANGUAGES, VOICE_GENDERS};
pub use screen::{SettingsScreen, SettingsScreenRef, SettingsScreenWidgetRefExt};

use fluent_widgets::{AppInfo, FluentApp};
use makepad_widgets::{live_id, Cx};

/// Settings app descriptor
pub struct FluentSettingsApp;

impl FluentApp for FluentSettingsApp {
    fn info() -> AppInfo {
        AppInfo {
            name: "Settings",
            id: "fluent-settings",
            description: "Profile, notification, and speech preferences",
            tab_id: Some(live_id!(settings_tab)),
            page_id: Some(live_id!(settings_page)),
            show_in_sidebar: false,
        }
    }

    fn live_design(cx: &mut Cx) {
        screen::live_design(cx);
    }
}

/// Register all Settings widgets with Makepad
pub fn live_design(cx: &mut Cx) {
    FluentSettingsApp::live_design(cx);
}
