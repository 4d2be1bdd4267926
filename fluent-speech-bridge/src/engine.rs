//! Speech engine traits and platform probing
//!
//! Engines wrap whatever speech services the host platform provides. The
//! probe functions are the single place platform support is decided: they
//! return `None` where no service is available, and the rest of the system
//! treats the capability as absent.
//!
//! Recognition is configured single-shot (non-continuous), locale
//! [`SPEECH_LOCALE`](crate::SPEECH_LOCALE), no interim results: the engine
//! delivers exactly one [`SpeechEvent`] per listening session.

use crossbeam_channel::Sender;

use crate::data::{SpeechEvent, VoiceSettings};
use crate::error::SpeechResult;

/// Text-to-speech capability.
///
/// `speak` is fire-and-forget: the call returns once the utterance has been
/// handed to the platform, with no queuing discipline beyond what the
/// engine itself provides.
pub trait SynthesisEngine: Send {
    fn speak(&mut self, text: &str, settings: &VoiceSettings) -> SpeechResult<()>;
}

/// Speech-to-text capability.
///
/// `start` begins a single listening session; the outcome arrives later as
/// a [`SpeechEvent`] on the bridge channel. `stop` aborts the session; an
/// aborted session may still deliver an error event.
pub trait RecognitionEngine: Send {
    fn start(&mut self) -> SpeechResult<()>;
    fn stop(&mut self);
}

/// Probe the platform for a synthesis service.
///
/// Desktop targets currently expose no bundled engine; the UI treats the
/// capability as absent and skips vocalization.
pub fn probe_synthesis() -> Option<Box<dyn SynthesisEngine>> {
    log::info!("No synthesis engine available on this platform");
    None
}

/// Probe the platform for a recognition service.
///
/// Same story as [`probe_synthesis`]: absent engine means the voice toggle
/// reports the capability as unsupported.
pub fn probe_recognition(_events: Sender<SpeechEvent>) -> Option<Box<dyn RecognitionEngine>> {
    log::info!("No recognition engine available on this platform");
    None
}

/// Scripted engines for tests and demos: recognition immediately delivers a
/// pre-programmed event, synthesis records what it was asked to speak.
pub mod scripted {
    use std::sync::Arc;

    use crossbeam_channel::Sender;
    use parking_lot::Mutex;

    use super::{RecognitionEngine, SynthesisEngine};
    use crate::data::{SpeechEvent, VoiceSettings};
    use crate::error::SpeechResult;

    /// Recognition engine that replies with a fixed event on every start
    pub struct ScriptedRecognition {
        events: Sender<SpeechEvent>,
        script: SpeechEvent,
    }

    impl ScriptedRecognition {
        pub fn new(events: Sender<SpeechEvent>, script: SpeechEvent) -> Self {
            Self { events, script }
        }
    }

    impl RecognitionEngine for ScriptedRecognition {
        fn start(&mut self) -> SpeechResult<()> {
            let _ = self.events.send(self.script.clone());
            Ok(())
        }

        fn stop(&mut self) {}
    }

    /// Synthesis engine that records every utterance it receives
    #[derive(Default)]
    pub struct RecordingSynthesis {
        pub utterances: Arc<Mutex<Vec<(String, VoiceSettings)>>>,
    }

    impl RecordingSynthesis {
        pub fn new() -> (Self, Arc<Mutex<Vec<(String, VoiceSettings)>>>) {
            let log = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    utterances: Arc::clone(&log),
                },
                log,
            )
        }
    }

    impl SynthesisEngine for RecordingSynthesis {
        fn speak(&mut self, text: &str, settings: &VoiceSettings) -> SpeechResult<()> {
            self.utterances.lock().push((text.to_string(), settings.clone()));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::scripted::*;
    use super::*;

    #[test]
    fn test_probe_reports_absent_engines() {
        let (tx, _rx) = crossbeam_channel::unbounded();
        assert!(probe_synthesis().is_none());
        assert!(probe_recognition(tx).is_none());
    }

    #[test]
    fn test_scripted_recognition_delivers_event() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut engine = ScriptedRecognition::new(
            tx,
            SpeechEvent::RecognitionResult {
                transcript: "hello tutor".into(),
            },
        );

        engine.start().unwrap();

        match rx.try_recv().unwrap() {
            SpeechEvent::RecognitionResult { transcript } => {
                assert_eq!(transcript, "hello tutor");
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_recording_synthesis_captures_utterance() {
        let (mut engine, log) = RecordingSynthesis::new();
        engine.speak("Well done!", &VoiceSettings::default()).unwrap();

        let recorded = log.lock();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].0, "Well done!");
        assert_eq!(recorded[0].1.rate, 0.9);
    }
}
