//! The speech bridge: engines plus the event channel

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::data::{SpeechEvent, VoiceSettings};
use crate::engine::{self, RecognitionEngine, SynthesisEngine};
use crate::error::{SpeechError, SpeechResult};

/// Owns the platform speech engines and the channel their events arrive on.
///
/// One bridge per application; screens reach it through the scope-injected
/// app data. All methods are UI-thread calls; only engine internals may
/// touch other threads.
pub struct SpeechBridge {
    synthesis: Option<Box<dyn SynthesisEngine>>,
    recognition: Option<Box<dyn RecognitionEngine>>,
    event_tx: Sender<SpeechEvent>,
    event_rx: Receiver<SpeechEvent>,
}

impl SpeechBridge {
    /// Build a bridge from whatever the platform probe finds
    pub fn probe() -> Self {
        let (event_tx, event_rx) = unbounded();
        let synthesis = engine::probe_synthesis();
        let recognition = engine::probe_recognition(event_tx.clone());
        log::info!(
            "Speech bridge ready: synthesis={}, recognition={}",
            synthesis.is_some(),
            recognition.is_some()
        );
        Self {
            synthesis,
            recognition,
            event_tx,
            event_rx,
        }
    }

    /// Build a bridge with explicit engines (tests, demos)
    pub fn with_engines(
        synthesis: Option<Box<dyn SynthesisEngine>>,
        recognition: Option<Box<dyn RecognitionEngine>>,
    ) -> Self {
        let (event_tx, event_rx) = unbounded();
        Self {
            synthesis,
            recognition,
            event_tx,
            event_rx,
        }
    }

    /// Sender half of the event channel, for engine construction
    pub fn event_sender(&self) -> Sender<SpeechEvent> {
        self.event_tx.clone()
    }

    /// Install a synthesis engine after construction
    pub fn install_synthesis(&mut self, engine: Box<dyn SynthesisEngine>) {
        self.synthesis = Some(engine);
    }

    /// Install a recognition engine after construction.
    ///
    /// The engine should have been built with this bridge's
    /// [`event_sender`](Self::event_sender) so its events arrive here.
    pub fn install_recognition(&mut self, engine: Box<dyn RecognitionEngine>) {
        self.recognition = Some(engine);
    }

    pub fn has_synthesis(&self) -> bool {
        self.synthesis.is_some()
    }

    pub fn has_recognition(&self) -> bool {
        self.recognition.is_some()
    }

    /// Vocalize `text`, fire-and-forget.
    ///
    /// Absent engine is not an error for callers that vocalize
    /// opportunistically (tutor replies): they pass `quiet = true` and the
    /// call becomes a logged no-op.
    pub fn speak(&mut self, text: &str, settings: &VoiceSettings, quiet: bool) -> SpeechResult<()> {
        let settings = settings.clone().clamped();
        match self.synthesis.as_mut() {
            Some(engine) => engine.speak(text, &settings),
            None if quiet => {
                log::debug!("Synthesis unavailable, skipping utterance");
                Ok(())
            }
            None => Err(SpeechError::Unsupported),
        }
    }

    /// Begin a single-shot listening session
    pub fn start_recognition(&mut self) -> SpeechResult<()> {
        match self.recognition.as_mut() {
            Some(engine) => engine.start(),
            None => Err(SpeechError::Unsupported),
        }
    }

    /// Abort the current listening session, if any
    pub fn stop_recognition(&mut self) {
        if let Some(engine) = self.recognition.as_mut() {
            engine.stop();
        }
    }

    /// Drain all pending engine events (called from the UI poll timer)
    pub fn drain_events(&self) -> Vec<SpeechEvent> {
        self.event_rx.try_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::scripted::{RecordingSynthesis, ScriptedRecognition};

    #[test]
    fn test_speak_without_engine() {
        let mut bridge = SpeechBridge::with_engines(None, None);

        // Opportunistic callers get a silent no-op
        assert!(bridge.speak("hello", &VoiceSettings::default(), true).is_ok());
        // Explicit callers get Unsupported
        assert_eq!(
            bridge.speak("hello", &VoiceSettings::default(), false),
            Err(SpeechError::Unsupported)
        );
    }

    #[test]
    fn test_speak_clamps_settings() {
        let (engine, log) = RecordingSynthesis::new();
        let mut bridge = SpeechBridge::with_engines(Some(Box::new(engine)), None);

        let wild = VoiceSettings {
            locale: "en-IN".into(),
            rate: 9.0,
            pitch: 0.0,
        };
        bridge.speak("clamped", &wild, false).unwrap();

        let recorded = log.lock();
        assert_eq!(recorded[0].1.rate, VoiceSettings::MAX);
        assert_eq!(recorded[0].1.pitch, VoiceSettings::MIN);
    }

    #[test]
    fn test_recognition_without_engine() {
        let mut bridge = SpeechBridge::with_engines(None, None);
        assert_eq!(bridge.start_recognition(), Err(SpeechError::Unsupported));
        // stop on an absent engine is a no-op
        bridge.stop_recognition();
    }

    #[test]
    fn test_recognition_event_flow() {
        let mut bridge = SpeechBridge::with_engines(None, None);
        let engine = ScriptedRecognition::new(
            bridge.event_sender(),
            SpeechEvent::RecognitionResult {
                transcript: "good morning".into(),
            },
        );
        bridge.install_recognition(Box::new(engine));

        bridge.start_recognition().unwrap();

        let events = bridge.drain_events();
        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0],
            SpeechEvent::RecognitionResult {
                transcript: "good morning".into()
            }
        );
        // Drained; nothing left
        assert!(bridge.drain_events().is_empty());
    }
}
