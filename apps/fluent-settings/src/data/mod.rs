//! Settings data layer

pub mod preferences;

pub use preferences::{Preferences, NATIVE_LANGUAGES, VOICE_GENDERS};
