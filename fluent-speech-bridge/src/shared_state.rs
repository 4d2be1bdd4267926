//! Shared state for speech↔UI communication
//!
//! Uses dirty tracking to minimize UI updates - widgets only redraw when a
//! value actually changed since they last looked.

use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Dirty-trackable single value
pub struct DirtyValue<T> {
    data: RwLock<T>,
    dirty: AtomicBool,
}

impl<T: Clone> DirtyValue<T> {
    pub fn new(initial: T) -> Self {
        Self {
            data: RwLock::new(initial),
            dirty: AtomicBool::new(false),
        }
    }

    /// Set value and mark dirty
    pub fn set(&self, value: T) {
        *self.data.write() = value;
        self.dirty.store(true, Ordering::Release);
    }

    /// Read value if dirty, clearing dirty flag
    pub fn read_if_dirty(&self) -> Option<T> {
        if self.dirty.swap(false, Ordering::AcqRel) {
            Some(self.data.read().clone())
        } else {
            None
        }
    }

    /// Read value unconditionally
    pub fn read(&self) -> T {
        self.data.read().clone()
    }
}

impl<T: Default> Default for DirtyValue<T> {
    fn default() -> Self {
        Self {
            data: RwLock::new(T::default()),
            dirty: AtomicBool::new(false),
        }
    }
}

/// Capability and activity status shown in the status bar
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeechStatus {
    /// A synthesis engine was found at startup
    pub synthesis_available: bool,
    /// A recognition engine was found at startup
    pub recognition_available: bool,
    /// The voice toggle is currently in the listening state
    pub listening: bool,
}

/// Shared speech status for widgets outside the chat screen.
///
/// The chat screen owns the live [`VoiceController`](crate::VoiceController)
/// state; it mirrors changes here so the status bar can display them
/// without coupling to the chat widget tree.
pub struct SharedSpeechState {
    pub status: DirtyValue<SpeechStatus>,
}

impl SharedSpeechState {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            status: DirtyValue::default(),
        })
    }

    /// Record capability detection results (startup)
    pub fn set_capabilities(&self, synthesis: bool, recognition: bool) {
        let mut status = self.status.read();
        status.synthesis_available = synthesis;
        status.recognition_available = recognition;
        self.status.set(status);
    }

    /// Record the voice toggle state
    pub fn set_listening(&self, listening: bool) {
        let mut status = self.status.read();
        if status.listening != listening {
            status.listening = listening;
            self.status.set(status);
        }
    }
}

impl Default for SharedSpeechState {
    fn default() -> Self {
        Self {
            status: DirtyValue::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirty_value() {
        let value: DirtyValue<i32> = DirtyValue::new(1);

        // Initially not dirty
        assert!(value.read_if_dirty().is_none());
        assert_eq!(value.read(), 1);

        // Set makes dirty
        value.set(2);
        assert_eq!(value.read_if_dirty(), Some(2));

        // Read cleared the flag
        assert!(value.read_if_dirty().is_none());
    }

    #[test]
    fn test_capabilities_mark_dirty() {
        let state = SharedSpeechState::new();
        state.set_capabilities(true, false);

        let status = state.status.read_if_dirty().unwrap();
        assert!(status.synthesis_available);
        assert!(!status.recognition_available);
    }

    #[test]
    fn test_listening_change_detection() {
        let state = SharedSpeechState::new();

        state.set_listening(true);
        assert!(state.status.read_if_dirty().unwrap().listening);

        // Same value again: no dirty flag
        state.set_listening(true);
        assert!(state.status.read_if_dirty().is_none());

        state.set_listening(false);
        assert!(!state.status.read_if_dirty().unwrap().listening);
    }
}
