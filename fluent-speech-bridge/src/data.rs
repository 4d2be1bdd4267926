//! Data types exchanged between engines and the UI
//!
//! | Type | Purpose | Direction |
//! |------|---------|-----------|
//! | [`SpeechEvent`] | Recognition outcomes | Engine → UI |
//! | [`VoiceSettings`] | Locale / rate / pitch for synthesis | UI → Engine |

use serde::{Deserialize, Serialize};

use crate::SPEECH_LOCALE;

/// Event delivered by an engine through the bridge channel.
///
/// Recognition is single-shot: exactly one of these terminates a listening
/// session, and either one forces the voice toggle back to idle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechEvent {
    /// The engine produced a final transcript
    RecognitionResult { transcript: String },
    /// The engine reported an error; logged, never surfaced to the user
    RecognitionError { message: String },
}

/// Synthesis voice parameters.
///
/// Rate and pitch are clamped to the range the settings sliders expose
/// before any engine sees them; the engine may clamp further.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    /// BCP-47 locale tag (e.g. "en-IN")
    pub locale: String,
    /// Speaking rate, 1.0 = normal
    pub rate: f32,
    /// Voice pitch, 1.0 = normal
    pub pitch: f32,
}

impl VoiceSettings {
    /// Lower bound for rate and pitch
    pub const MIN: f32 = 0.5;
    /// Upper bound for rate and pitch
    pub const MAX: f32 = 1.5;

    pub fn new(rate: f32, pitch: f32) -> Self {
        Self {
            locale: SPEECH_LOCALE.to_string(),
            rate,
            pitch,
        }
        .clamped()
    }

    /// Return a copy with rate and pitch clamped to the supported range
    pub fn clamped(mut self) -> Self {
        self.rate = self.rate.clamp(Self::MIN, Self::MAX);
        self.pitch = self.pitch.clamp(Self::MIN, Self::MAX);
        self
    }
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            locale: SPEECH_LOCALE.to_string(),
            // Slightly slow, easier for learners
            rate: 0.9,
            pitch: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = VoiceSettings::default();
        assert_eq!(settings.locale, "en-IN");
        assert_eq!(settings.rate, 0.9);
        assert_eq!(settings.pitch, 1.0);
    }

    #[test]
    fn test_clamping() {
        let settings = VoiceSettings::new(3.0, 0.1);
        assert_eq!(settings.rate, VoiceSettings::MAX);
        assert_eq!(settings.pitch, VoiceSettings::MIN);

        let settings = VoiceSettings::new(1.2, 0.8);
        assert_eq!(settings.rate, 1.2);
        assert_eq!(settings.pitch, 0.8);
    }

    #[test]
    fn test_settings_serialization_roundtrip() {
        let settings = VoiceSettings::new(1.1, 0.7);
        let json = serde_json::to_string(&settings).unwrap();
        let restored: VoiceSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, settings);
    }
}
