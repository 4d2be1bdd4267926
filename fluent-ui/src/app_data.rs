//! Shared App Data for Makepad Scope Injection
//!
//! This module provides `FluentAppData`, a container for all shared
//! application state passed through Makepad's `Scope` mechanism to child
//! widgets.
//!
//! ## Why Scope Injection?
//!
//! Widgets need access to shared state (speech bridge, theme, config) but
//! constructor parameters are not possible under the `live_design!` macro.
//! Scope injection solves this:
//!
//! 1. The root app creates a single `FluentAppData`
//! 2. It passes it through `Scope::with_data()` during event handling
//! 3. Widgets access it via `scope.data.get_mut::<FluentAppData>()`
//!
//! ## Usage
//!
//! ```rust,ignore
//! impl Widget for ChatScreen {
//!     fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
//!         if let Some(data) = scope.data.get_mut::<FluentAppData>() {
//!             data.speech_mut().speak("Hello!", &VoiceSettings::default(), true).ok();
//!         }
//!     }
//! }
//! ```

use std::sync::Arc;

use fluent_speech_bridge::{SharedSpeechState, SpeechBridge};

use crate::registry::FluentWidgetRegistry;
use crate::theme::FluentTheme;

/// Application configuration
#[derive(Clone, Debug, Default)]
pub struct AppConfig {
    /// Application name
    pub name: String,

    /// Application ID (for persistence)
    pub id: String,

    /// Whether debug mode is enabled
    pub debug: bool,
}

impl AppConfig {
    /// Create a new app config
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            debug: false,
        }
    }

    /// Enable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Shared data passed through Makepad's Scope mechanism.
///
/// Holds the state widgets need access to: the speech bridge and its
/// shared status, theme settings, app configuration, and the widget
/// registry.
///
/// ## Thread Safety
///
/// `FluentAppData` is UI-thread only. The `SharedSpeechState` inside is
/// thread-safe and may be cloned to engine threads via `Arc::clone()`.
pub struct FluentAppData {
    /// Platform speech capability boundary
    speech: SpeechBridge,

    /// Speech status mirror for widgets outside the chat screen
    speech_state: Arc<SharedSpeechState>,

    /// Current theme settings
    theme: FluentTheme,

    /// App-specific configuration
    config: AppConfig,

    /// Widget registry
    registry: Arc<FluentWidgetRegistry>,
}

impl FluentAppData {
    /// Create new app data, probing the platform for speech engines
    pub fn new() -> Self {
        Self::with_speech(SpeechBridge::probe())
    }

    /// Create with an explicit speech bridge (tests, demos)
    pub fn with_speech(speech: SpeechBridge) -> Self {
        let speech_state = SharedSpeechState::new();
        speech_state.set_capabilities(speech.has_synthesis(), speech.has_recognition());
        Self {
            speech,
            speech_state,
            theme: FluentTheme::default(),
            config: AppConfig::default(),
            registry: Arc::new(FluentWidgetRegistry::new()),
        }
    }

    /// Create with all custom components
    pub fn with_all(
        speech: SpeechBridge,
        theme: FluentTheme,
        config: AppConfig,
        registry: Arc<FluentWidgetRegistry>,
    ) -> Self {
        let speech_state = SharedSpeechState::new();
        speech_state.set_capabilities(speech.has_synthesis(), speech.has_recognition());
        Self {
            speech,
            speech_state,
            theme,
            config,
            registry,
        }
    }

    // --- Accessors ---

    /// Get the speech bridge
    pub fn speech(&self) -> &SpeechBridge {
        &self.speech
    }

    /// Get the speech bridge mutably (speak, start/stop recognition)
    pub fn speech_mut(&mut self) -> &mut SpeechBridge {
        &mut self.speech
    }

    /// Get shared speech status (for cloning to status displays)
    pub fn speech_state(&self) -> &Arc<SharedSpeechState> {
        &self.speech_state
    }

    /// Get current theme
    pub fn theme(&self) -> &FluentTheme {
        &self.theme
    }

    /// Get mutable theme
    pub fn theme_mut(&mut self) -> &mut FluentTheme {
        &mut self.theme
    }

    /// Get app configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get mutable app configuration
    pub fn config_mut(&mut self) -> &mut AppConfig {
        &mut self.config
    }

    /// Get widget registry
    pub fn registry(&self) -> &Arc<FluentWidgetRegistry> {
        &self.registry
    }

    // --- Convenience Methods ---

    /// Check if dark mode is enabled
    pub fn is_dark_mode(&self) -> bool {
        self.theme.is_dark()
    }

    /// Get dark mode animation value (0.0 = light, 1.0 = dark)
    pub fn dark_mode_value(&self) -> f64 {
        self.theme.dark_mode_anim
    }

    /// Toggle dark mode
    pub fn toggle_dark_mode(&mut self) {
        self.theme.toggle();
    }

    /// Record the voice toggle state in the shared status
    pub fn set_listening(&self, listening: bool) {
        self.speech_state.set_listening(listening);
    }
}

impl Default for FluentAppData {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_data_default() {
        let data = FluentAppData::with_speech(SpeechBridge::with_engines(None, None));
        assert!(!data.is_dark_mode());
        assert!(!data.speech().has_synthesis());
        assert!(!data.speech().has_recognition());
    }

    #[test]
    fn test_capabilities_mirrored_to_shared_state() {
        let data = FluentAppData::with_speech(SpeechBridge::with_engines(None, None));
        let status = data.speech_state().status.read();
        assert!(!status.synthesis_available);
        assert!(!status.recognition_available);
    }

    #[test]
    fn test_dark_mode_toggle() {
        let mut data = FluentAppData::with_speech(SpeechBridge::with_engines(None, None));

        assert!(!data.is_dark_mode());
        data.toggle_dark_mode();
        assert!(data.is_dark_mode());
        data.toggle_dark_mode();
        assert!(!data.is_dark_mode());
    }

    #[test]
    fn test_listening_mirror() {
        let data = FluentAppData::with_speech(SpeechBridge::with_engines(None, None));
        data.set_listening(true);
        assert!(data.speech_state().status.read().listening);
    }
}
