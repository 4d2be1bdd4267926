//! Voice toggle state machine
//!
//! The microphone button is a two-state toggle (idle/listening). State is
//! driven from two directions: the user clicking the toggle, and the engine
//! delivering a terminal event. Both recognition results *and* recognition
//! errors force the toggle back to idle, so a failed recognition looks like
//! a silent no-op to the user. That asymmetry is intentional and preserved
//! here; the engine error is logged instead of surfaced.
//!
//! All mutation happens on the UI thread, which runs each event to
//! completion before the next, so no lock is needed.

use crate::bridge::SpeechBridge;
use crate::data::SpeechEvent;
use crate::error::{SpeechError, SpeechResult};

/// Outcome of a successful toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceToggle {
    /// The toggle entered the listening state
    Started,
    /// The toggle returned to idle
    Stopped,
}

/// Idle/listening state for the voice input button
#[derive(Default)]
pub struct VoiceController {
    listening: bool,
}

impl VoiceController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Flip the toggle, starting or stopping recognition on the bridge.
    ///
    /// With no recognition engine available this returns
    /// [`SpeechError::Unsupported`] and leaves the state unchanged; the
    /// caller surfaces a blocking notice.
    pub fn toggle(&mut self, bridge: &mut SpeechBridge) -> SpeechResult<VoiceToggle> {
        if !bridge.has_recognition() {
            return Err(SpeechError::Unsupported);
        }
        if self.listening {
            bridge.stop_recognition();
            self.listening = false;
            Ok(VoiceToggle::Stopped)
        } else {
            bridge.start_recognition()?;
            self.listening = true;
            Ok(VoiceToggle::Started)
        }
    }

    /// Apply a terminal engine event; returns true if the toggle state
    /// changed (the caller refreshes the button visuals).
    pub fn on_event(&mut self, event: &SpeechEvent) -> bool {
        match event {
            SpeechEvent::RecognitionResult { .. } => {
                let was_listening = self.listening;
                self.listening = false;
                was_listening
            }
            SpeechEvent::RecognitionError { message } => {
                log::error!("Speech recognition error: {message}");
                let was_listening = self.listening;
                self.listening = false;
                was_listening
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::scripted::ScriptedRecognition;

    fn bridge_with_recognition() -> SpeechBridge {
        let mut bridge = SpeechBridge::with_engines(None, None);
        let engine = ScriptedRecognition::new(
            bridge.event_sender(),
            SpeechEvent::RecognitionResult {
                transcript: "test".into(),
            },
        );
        bridge.install_recognition(Box::new(engine));
        bridge
    }

    #[test]
    fn test_toggle_unsupported_leaves_state_unchanged() {
        let mut bridge = SpeechBridge::with_engines(None, None);
        let mut controller = VoiceController::new();

        assert_eq!(controller.toggle(&mut bridge), Err(SpeechError::Unsupported));
        assert!(!controller.is_listening());
    }

    #[test]
    fn test_toggle_starts_and_stops() {
        let mut bridge = bridge_with_recognition();
        let mut controller = VoiceController::new();

        assert_eq!(controller.toggle(&mut bridge), Ok(VoiceToggle::Started));
        assert!(controller.is_listening());

        assert_eq!(controller.toggle(&mut bridge), Ok(VoiceToggle::Stopped));
        assert!(!controller.is_listening());
    }

    #[test]
    fn test_result_event_forces_idle() {
        let mut bridge = bridge_with_recognition();
        let mut controller = VoiceController::new();
        controller.toggle(&mut bridge).unwrap();

        let changed = controller.on_event(&SpeechEvent::RecognitionResult {
            transcript: "hello".into(),
        });
        assert!(changed);
        assert!(!controller.is_listening());
    }

    #[test]
    fn test_error_event_forces_idle_silently() {
        let mut bridge = bridge_with_recognition();
        let mut controller = VoiceController::new();
        controller.toggle(&mut bridge).unwrap();

        let changed = controller.on_event(&SpeechEvent::RecognitionError {
            message: "no-speech".into(),
        });
        assert!(changed);
        assert!(!controller.is_listening());
    }

    #[test]
    fn test_event_while_idle_reports_no_change() {
        let mut controller = VoiceController::new();
        let changed = controller.on_event(&SpeechEvent::RecognitionError {
            message: "aborted".into(),
        });
        assert!(!changed);
        assert!(!controller.is_listening());
    }
}
