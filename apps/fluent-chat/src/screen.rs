//! Practice Chat Screen
//!
//! Hosts the conversation transcript, the prompt input with voice toggle,
//! and the tutor reply loop: a sent message is committed immediately, then
//! a one-second timer delivers the generated reply and hands it to speech
//! synthesis. Replies pending when the user navigates away still fire; the
//! shell keeps this screen alive, so a late reply lands in the transcript.

use makepad_widgets::*;

use fluent_speech_bridge::{SpeechError, SpeechEvent, VoiceController, VoiceSettings, VoiceToggle};
use fluent_ui::{ChatInputWidgetExt, ChatPanelWidgetExt, FluentAppData, NoticeModalWidgetExt, Sender};

use crate::history::ChatHistory;
use crate::tutor;

/// Delay before the tutor reply is committed, in seconds
const REPLY_DELAY: f64 = 1.0;

/// Speech event poll interval, in seconds
const SPEECH_POLL_INTERVAL: f64 = 0.1;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    use fluent_ui::widgets::chat_panel::*;
    use fluent_ui::widgets::chat_input::*;
    use fluent_ui::widgets::notice_modal::*;

    pub ChatScreen = {{ChatScreen}} {
        width: Fill, height: Fill
        flow: Overlay

        content = <View> {
            width: Fill, height: Fill
            flow: Down
            spacing: 12
            padding: 20

            chat = <ChatPanel> {}
            prompt = <ChatInput> {}
        }

        notice_modal = <NoticeModal> {}
    }
}

#[derive(Live, LiveHook, Widget)]
pub struct ChatScreen {
    #[deref]
    view: View,

    #[rust]
    initialized: bool,

    /// Speech event poll timer
    #[rust]
    speech_timer: Timer,

    /// Conversation transcript
    #[rust]
    history: ChatHistory,

    /// Pending tutor replies: the timer and the user message it answers.
    /// Each send schedules its own timer; none are cancelled by navigation.
    #[rust]
    pending_replies: Vec<(Timer, String)>,

    /// Voice input toggle state
    #[rust]
    voice: VoiceController,
}

impl Widget for ChatScreen {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        let actions = cx.capture_actions(|cx| self.view.handle_event(cx, event, scope));

        if !self.initialized {
            self.initialized = true;
            self.speech_timer = cx.start_interval(SPEECH_POLL_INTERVAL);
            log::info!("ChatScreen initialized");
        }

        if self.speech_timer.is_event(event).is_some() {
            self.poll_speech_events(cx, scope);
        }

        self.check_pending_replies(cx, scope, event);

        // Prompt submit
        if let Some(text) = self.view.chat_input(ids!(content.prompt)).submitted(&actions) {
            self.send_message(cx, &text);
        }

        // Voice toggle
        if self
            .view
            .chat_input(ids!(content.prompt))
            .voice_toggle_clicked(&actions)
        {
            self.toggle_voice(cx, scope);
        }
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        self.view.draw_walk(cx, scope, walk)
    }
}

impl ChatScreen {
    /// Commit a user message and schedule its tutor reply.
    ///
    /// `text` is already trimmed and non-empty (the input widget drops
    /// whitespace-only submissions before they get here).
    fn send_message(&mut self, cx: &mut Cx, text: &str) {
        self.history.push(Sender::User, text);
        self.update_chat_display(cx);

        let timer = cx.start_timeout(REPLY_DELAY);
        self.pending_replies.push((timer, text.to_string()));
    }

    /// Deliver any tutor replies whose timers fired with this event
    fn check_pending_replies(&mut self, cx: &mut Cx, scope: &mut Scope, event: &Event) {
        let mut fired = Vec::new();
        for (index, (timer, _)) in self.pending_replies.iter().enumerate() {
            if timer.is_event(event).is_some() {
                fired.push(index);
            }
        }

        for index in fired.into_iter().rev() {
            let (_, user_text) = self.pending_replies.remove(index);
            self.deliver_reply(cx, scope, &user_text);
        }
    }

    /// Generate, commit, and vocalize the tutor reply to `user_text`
    fn deliver_reply(&mut self, cx: &mut Cx, scope: &mut Scope, user_text: &str) {
        let reply = tutor::reply(user_text);
        self.history.push(Sender::Tutor, reply);
        self.update_chat_display(cx);

        // Fire-and-forget; missing synthesis engine means a silent tutor
        if let Some(data) = scope.data.get_mut::<FluentAppData>() {
            if let Err(err) = data.speech_mut().speak(reply, &VoiceSettings::default(), true) {
                log::error!("Failed to vocalize tutor reply: {err}");
            }
        }
    }

    /// Flip the voice toggle, surfacing a notice when unsupported
    fn toggle_voice(&mut self, cx: &mut Cx, scope: &mut Scope) {
        let Some(data) = scope.data.get_mut::<FluentAppData>() else {
            return;
        };

        match self.voice.toggle(data.speech_mut()) {
            Ok(VoiceToggle::Started) => {
                data.set_listening(true);
                self.view.chat_input(ids!(content.prompt)).set_listening(cx, true);
            }
            Ok(VoiceToggle::Stopped) => {
                data.set_listening(false);
                self.view.chat_input(ids!(content.prompt)).set_listening(cx, false);
            }
            Err(SpeechError::Unsupported) => {
                self.view.notice_modal(ids!(notice_modal)).show(
                    cx,
                    "Voice input",
                    "Speech recognition is not supported on this device.",
                );
            }
            Err(err) => {
                log::error!("Voice toggle failed: {err}");
            }
        }
    }

    /// Drain recognition events; either kind forces the toggle back to idle
    fn poll_speech_events(&mut self, cx: &mut Cx, scope: &mut Scope) {
        let Some(data) = scope.data.get_mut::<FluentAppData>() else {
            return;
        };

        for event in data.speech().drain_events() {
            if let SpeechEvent::RecognitionResult { ref transcript } = event {
                self.view
                    .chat_input(ids!(content.prompt))
                    .set_text(cx, transcript);
            }
            if self.voice.on_event(&event) {
                data.set_listening(false);
                self.view.chat_input(ids!(content.prompt)).set_listening(cx, false);
            }
        }
    }

    /// Render the transcript into the chat panel
    fn update_chat_display(&mut self, cx: &mut Cx) {
        self.view
            .chat_panel(ids!(content.chat))
            .set_messages(cx, self.history.messages());
    }

    /// Pre-fill the prompt with a quick-start topic and send it
    pub fn start_topic(&mut self, cx: &mut Cx, topic: &str) {
        let trimmed = topic.trim();
        if trimmed.is_empty() {
            return;
        }
        self.send_message(cx, trimmed);
    }

    /// Reset the conversation (logout)
    pub fn clear_session(&mut self, cx: &mut Cx) {
        self.history.clear();
        self.pending_replies.clear();
        self.view.chat_panel(ids!(content.chat)).clear(cx);
        self.view.chat_input(ids!(content.prompt)).clear(cx);
    }

    /// Apply dark mode to the screen's widgets
    pub fn apply_dark_mode(&mut self, cx: &mut Cx, dark_mode: f64) {
        self.view.chat_panel(ids!(content.chat)).apply_dark_mode(cx, dark_mode);
        self.view.chat_input(ids!(content.prompt)).apply_dark_mode(cx, dark_mode);
        self.view
            .notice_modal(ids!(notice_modal))
            .apply_dark_mode(cx, dark_mode);
    }
}

impl ChatScreenRef {
    /// Pre-fill the prompt with a quick-start topic and send it
    pub fn start_topic(&self, cx: &mut Cx, topic: &str) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.start_topic(cx, topic);
        }
    }

    /// Reset the conversation (logout)
    pub fn clear_session(&self, cx: &mut Cx) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.clear_session(cx);
        }
    }

    /// Apply dark mode
    pub fn apply_dark_mode(&self, cx: &mut Cx, dark_mode: f64) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.apply_dark_mode(cx, dark_mode);
        }
    }
}
