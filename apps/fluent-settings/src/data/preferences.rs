//! User preferences storage

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use fluent_speech_bridge::VoiceSettings;

/// Native language choices offered on the profile form: (value, label)
pub const NATIVE_LANGUAGES: [(&str, &str); 6] = [
    ("hindi", "Hindi"),
    ("tamil", "Tamil"),
    ("telugu", "Telugu"),
    ("bengali", "Bengali"),
    ("marathi", "Marathi"),
    ("gujarati", "Gujarati"),
];

/// Tutor voice gender choices: (value, label)
pub const VOICE_GENDERS: [(&str, &str); 2] = [("female", "Female"), ("male", "Male")];

/// User preferences for the studio
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Preferences {
    /// Profile
    pub full_name: String,
    pub email: String,
    pub native_language: String,

    /// Notifications
    #[serde(default = "default_true")]
    pub daily_reminders: bool,
    #[serde(default = "default_true")]
    pub progress_reports: bool,
    #[serde(default = "default_true")]
    pub feature_updates: bool,

    /// Tutor voice
    #[serde(default)]
    pub voice: VoiceSettings,
    #[serde(default = "default_voice_gender")]
    pub voice_gender: String,

    /// Dark mode preference (true = dark, false = light)
    #[serde(default)]
    pub dark_mode: bool,
}

fn default_true() -> bool {
    true
}

fn default_voice_gender() -> String {
    "female".to_string()
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            full_name: "John Smith".to_string(),
            email: "john@example.com".to_string(),
            native_language: "hindi".to_string(),
            daily_reminders: true,
            progress_reports: true,
            feature_updates: true,
            voice: VoiceSettings::default(),
            voice_gender: default_voice_gender(),
            dark_mode: false,
        }
    }
}

impl Preferences {
    /// Get the preferences file path
    pub fn preferences_path() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".fluent-studio").join("preferences.json")
    }

    /// Load preferences from the default location, falling back to defaults
    pub fn load() -> Self {
        Self::load_from(&Self::preferences_path())
    }

    /// Load preferences from `path`, or defaults if missing or unreadable
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match serde_json::from_str::<Preferences>(&content) {
                    Ok(prefs) => return prefs,
                    Err(e) => {
                        log::error!("Failed to parse preferences: {e}");
                    }
                },
                Err(e) => {
                    log::error!("Failed to read preferences file: {e}");
                }
            }
        }

        Self::default()
    }

    /// Save preferences to the default location
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::preferences_path())
    }

    /// Save preferences to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;

        Ok(())
    }

    /// Display label for the selected native language
    pub fn native_language_label(&self) -> &'static str {
        NATIVE_LANGUAGES
            .iter()
            .find(|(value, _)| *value == self.native_language)
            .map(|(_, label)| *label)
            .unwrap_or("Hindi")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_preferences_default() {
        let prefs = Preferences::default();

        assert_eq!(prefs.full_name, "John Smith");
        assert_eq!(prefs.email, "john@example.com");
        assert_eq!(prefs.native_language, "hindi");
        assert!(prefs.daily_reminders);
        assert!(prefs.progress_reports);
        assert!(prefs.feature_updates);
        assert_eq!(prefs.voice.rate, 0.9);
        assert_eq!(prefs.voice.pitch, 1.0);
        assert_eq!(prefs.voice_gender, "female");
        assert!(!prefs.dark_mode);
    }

    #[test]
    fn test_preferences_path() {
        let path = Preferences::preferences_path();
        assert!(path.ends_with(".fluent-studio/preferences.json"));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");

        let mut prefs = Preferences::default();
        prefs.full_name = "Asha Rao".to_string();
        prefs.email = "asha@example.com".to_string();
        prefs.native_language = "tamil".to_string();
        prefs.daily_reminders = false;
        prefs.voice.rate = 1.2;
        prefs.voice_gender = "male".to_string();
        prefs.dark_mode = true;

        prefs.save_to(&path).unwrap();
        let restored = Preferences::load_from(&path);

        assert_eq!(restored, prefs);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let restored = Preferences::load_from(&dir.path().join("absent.json"));
        assert_eq!(restored, Preferences::default());
    }

    #[test]
    fn test_load_corrupt_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "{not json").unwrap();

        let restored = Preferences::load_from(&path);
        assert_eq!(restored, Preferences::default());
    }

    #[test]
    fn test_deserialization_with_missing_optional_fields() {
        // JSON with only the profile fields (backwards compatibility)
        let json = r#"{
            "full_name": "John Smith",
            "email": "john@example.com",
            "native_language": "hindi"
        }"#;

        let prefs: Preferences = serde_json::from_str(json).unwrap();

        assert!(prefs.daily_reminders);
        assert!(prefs.progress_reports);
        assert!(prefs.feature_updates);
        assert_eq!(prefs.voice, VoiceSettings::default());
        assert_eq!(prefs.voice_gender, "female");
        assert!(!prefs.dark_mode);
    }

    #[test]
    fn test_native_language_label() {
        let mut prefs = Preferences::default();
        assert_eq!(prefs.native_language_label(), "Hindi");

        prefs.native_language = "bengali".to_string();
        assert_eq!(prefs.native_language_label(), "Bengali");

        prefs.native_language = "unknown".to_string();
        assert_eq!(prefs.native_language_label(), "Hindi");
    }
}
