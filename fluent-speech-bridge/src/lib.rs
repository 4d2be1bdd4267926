//! # Fluent Speech Bridge
//!
//! Capability boundary between the Fluent Studio UI and the platform's
//! speech services. The UI never talks to a speech engine directly; it goes
//! through [`SpeechBridge`], which holds whatever engines the platform
//! probe discovered and delivers engine callbacks as typed [`SpeechEvent`]s
//! over a channel the UI drains on its poll timer.
//!
//! ## Architecture
//!
//! ```text
//! Chat / Settings screens
//!         │  speak / start / stop
//!         ▼
//!   SpeechBridge ──── Option<Box<dyn SynthesisEngine>>
//!         │     └──── Option<Box<dyn RecognitionEngine>>
//!         │ SpeechEvent (crossbeam channel)
//!         ▼
//!   UI poll timer ── VoiceController (idle/listening)
//! ```
//!
//! Both capabilities are optional: a platform without an engine simply
//! yields `None` from the probe, and the UI degrades (recognition toggle
//! reports [`SpeechError::Unsupported`], tutor replies go unspoken).
//!
//! ## Threading
//!
//! Engines may run on their own threads and push events through the
//! channel; everything else is UI-thread only. [`VoiceController`] state is
//! mutated exclusively from the UI event loop, which handles each event to
//! completion before the next.

pub mod bridge;
pub mod controller;
pub mod data;
pub mod engine;
pub mod error;
pub mod shared_state;

// Re-exports
pub use bridge::SpeechBridge;
pub use controller::{VoiceController, VoiceToggle};
pub use data::{SpeechEvent, VoiceSettings};
pub use engine::{RecognitionEngine, SynthesisEngine};
pub use error::{SpeechError, SpeechResult};
pub use shared_state::{DirtyValue, SharedSpeechState, SpeechStatus};

/// Recognition and synthesis locale for the English tutor
pub const SPEECH_LOCALE: &str = "en-IN";
