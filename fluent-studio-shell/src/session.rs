//! Login session persistence
//!
//! The session file is the only state that survives a restart: a logged-in
//! flag plus the display name derived from the login email. Logging out
//! removes the file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Persisted login session
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    /// Whether a user is logged in
    pub logged_in: bool,
    /// Display name derived from the login email (the part before '@')
    pub display_name: String,
}

impl Session {
    /// Get the session file path
    pub fn session_path() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".fluent-studio").join("session.json")
    }

    /// Both login fields must be non-empty; nothing else is checked
    pub fn validate_credentials(email: &str, password: &str) -> bool {
        !email.trim().is_empty() && !password.is_empty()
    }

    /// Create a logged-in session for `email`
    pub fn login(email: &str) -> Self {
        let display_name = email.split('@').next().unwrap_or(email).to_string();
        Self {
            logged_in: true,
            display_name,
        }
    }

    /// Load the session from the default location; absent file means
    /// logged out
    pub fn load() -> Self {
        Self::load_from(&Self::session_path())
    }

    /// Load the session from `path`
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match serde_json::from_str::<Session>(&content) {
                    Ok(session) => return session,
                    Err(e) => {
                        log::error!("Failed to parse session file: {e}");
                    }
                },
                Err(e) => {
                    log::error!("Failed to read session file: {e}");
                }
            }
        }

        Self::default()
    }

    /// Save the session to the default location
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::session_path())
    }

    /// Save the session to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;

        Ok(())
    }

    /// Remove the persisted session (logout)
    pub fn clear() -> Result<(), std::io::Error> {
        Self::clear_at(&Self::session_path())
    }

    /// Remove the session file at `path`; an absent file is fine
    pub fn clear_at(path: &Path) -> Result<(), std::io::Error> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_credentials() {
        assert!(Session::validate_credentials("a@b.com", "secret"));
        assert!(!Session::validate_credentials("", "secret"));
        assert!(!Session::validate_credentials("a@b.com", ""));
        assert!(!Session::validate_credentials("   ", "secret"));
    }

    #[test]
    fn test_login_derives_display_name() {
        let session = Session::login("asha@example.com");
        assert!(session.logged_in);
        assert_eq!(session.display_name, "asha");

        // No '@': the whole string is the display name
        let session = Session::login("asha");
        assert_eq!(session.display_name, "asha");
    }

    #[test]
    fn test_session_persists_across_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");

        let session = Session::login("a@b.com");
        session.save_to(&path).unwrap();

        // "Reload": a fresh load sees the logged-in flag
        let restored = Session::load_from(&path);
        assert!(restored.logged_in);
        assert_eq!(restored.display_name, "a");
    }

    #[test]
    fn test_logout_clears_session() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");

        Session::login("a@b.com").save_to(&path).unwrap();
        Session::clear_at(&path).unwrap();

        // "Reload" after logout: back to logged out
        let restored = Session::load_from(&path);
        assert!(!restored.logged_in);
    }

    #[test]
    fn test_clear_absent_file_is_ok() {
        let dir = TempDir::new().unwrap();
        assert!(Session::clear_at(&dir.path().join("absent.json")).is_ok());
    }

    #[test]
    fn test_load_missing_file_is_logged_out() {
        let dir = TempDir::new().unwrap();
        let session = Session::load_from(&dir.path().join("absent.json"));
        assert!(!session.logged_in);
        assert!(session.display_name.is_empty());
    }
}
