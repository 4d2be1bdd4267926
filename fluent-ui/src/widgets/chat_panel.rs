//! Chat Panel Widget
//!
//! A chat transcript panel with header and scrollable message display.
//!
//! ## Usage
//!
//! ```rust,ignore
//! live_design! {
//!     use fluent_ui::widgets::chat_panel::*;
//!
//!     chat = <ChatPanel> {}
//! }
//! ```
//!
//! ## Updating Messages
//!
//! ```rust,ignore
//! let chat = self.view.chat_panel(id!(chat));
//! chat.set_messages(cx, &messages);
//! ```

use makepad_widgets::*;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    // Panel styling constants
    PANEL_RADIUS = 8.0
    PANEL_PADDING = 12.0
    PANEL_BG = vec4(0.976, 0.980, 0.984, 1.0)
    PANEL_BG_DARK = vec4(0.118, 0.161, 0.231, 1.0)
    HEADER_BG = vec4(0.973, 0.980, 0.988, 1.0)
    HEADER_BG_DARK = vec4(0.118, 0.161, 0.231, 1.0)
    TEXT_PRIMARY = vec4(0.067, 0.090, 0.125, 1.0)
    TEXT_PRIMARY_DARK = vec4(0.945, 0.961, 0.976, 1.0)
    BORDER = vec4(0.878, 0.906, 0.925, 1.0)
    SLATE_600 = vec4(0.278, 0.337, 0.412, 1.0)

    /// Panel header with title
    ChatPanelHeader = <View> {
        width: Fill, height: Fit
        flow: Right
        align: {y: 0.5}
        padding: {left: 12, right: 12, top: 10, bottom: 10}
        show_bg: true
        draw_bg: {
            instance dark_mode: 0.0
            fn pixel(self) -> vec4 {
                return mix((HEADER_BG), (HEADER_BG_DARK), self.dark_mode);
            }
        }

        title = <Label> {
            text: "Conversation"
            draw_text: {
                instance dark_mode: 0.0
                text_style: { font_size: 13.0 }
                fn get_color(self) -> vec4 {
                    return mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
                }
            }
        }
        <Filler> {}
    }

    /// Chat panel widget - displays the conversation transcript
    pub ChatPanel = {{ChatPanel}} {
        width: Fill, height: Fill
        flow: Down
        show_bg: true
        draw_bg: {
            instance dark_mode: 0.0
            border_radius: (PANEL_RADIUS)
            border_size: 1.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(0., 0., self.rect_size.x, self.rect_size.y, self.border_radius);
                let bg = mix((PANEL_BG), (PANEL_BG_DARK), self.dark_mode);
                let border = mix((BORDER), (SLATE_600), self.dark_mode);
                sdf.fill(bg);
                sdf.stroke(border, self.border_size);
                return sdf.result;
            }
        }

        header = <ChatPanelHeader> {}

        chat_scroll = <ScrollYView> {
            width: Fill, height: Fill
            flow: Down
            scroll_bars: <ScrollBars> {
                show_scroll_x: false
                show_scroll_y: true
            }

            content_wrapper = <View> {
                width: Fill, height: Fit
                padding: (PANEL_PADDING)
                flow: Down

                content = <Markdown> {
                    width: Fill, height: Fit
                    font_size: 13.0
                    font_color: (TEXT_PRIMARY)
                    paragraph_spacing: 8

                    draw_normal: {
                        text_style: { font_size: 13.0 }
                    }
                    draw_bold: {
                        text_style: { font_size: 13.0 }
                    }
                }
            }
        }
    }
}

/// Who authored a chat message
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Tutor,
}

impl Sender {
    /// Display name used in the transcript
    pub fn display_name(&self) -> &'static str {
        match self {
            Sender::User => "You",
            Sender::Tutor => "Tutor",
        }
    }
}

/// Chat message entry for display.
///
/// Created on send or reply, never mutated afterwards; the whole transcript
/// is discarded when the app exits.
#[derive(Clone, Debug)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    pub timestamp_ms: u64,
}

impl ChatMessage {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            sender,
            text: text.into(),
            timestamp_ms: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0),
        }
    }

    /// Format Unix timestamp (milliseconds) to HH:MM time of day
    pub fn format_timestamp(timestamp_ms: u64) -> String {
        let total_secs = timestamp_ms / 1000;
        let secs_in_day = total_secs % 86400;
        let hours = secs_in_day / 3600;
        let minutes = (secs_in_day % 3600) / 60;
        format!("{:02}:{:02}", hours, minutes)
    }
}

/// Actions emitted by ChatPanel
#[derive(Clone, Debug, DefaultNone)]
pub enum ChatPanelAction {
    None,
}

#[derive(Live, LiveHook, Widget)]
pub struct ChatPanel {
    #[deref]
    view: View,

    /// Current dark mode value
    #[rust]
    dark_mode: f64,

    /// Last message count (for auto-scroll)
    #[rust]
    last_message_count: usize,

    /// Empty state text
    #[live]
    empty_text: String,
}

impl Widget for ChatPanel {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        self.view.handle_event(cx, event, scope);
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        self.view.draw_walk(cx, scope, walk)
    }
}

impl ChatPanel {
    /// Set messages and update display
    pub fn set_messages(&mut self, cx: &mut Cx, messages: &[ChatMessage]) {
        let text = if messages.is_empty() {
            if self.empty_text.is_empty() {
                "Say hello to start practicing...".to_string()
            } else {
                self.empty_text.clone()
            }
        } else {
            messages
                .iter()
                .map(|msg| {
                    let timestamp = ChatMessage::format_timestamp(msg.timestamp_ms);
                    format!(
                        "**{}** ({}):  \n{}",
                        msg.sender.display_name(),
                        timestamp,
                        msg.text
                    )
                })
                .collect::<Vec<_>>()
                .join("\n\n---\n\n")
        };

        self.view
            .markdown(ids!(chat_scroll.content_wrapper.content))
            .set_text(cx, &text);

        // Auto-scroll to bottom on new messages
        if messages.len() > self.last_message_count {
            self.view
                .view(ids!(chat_scroll))
                .set_scroll_pos(cx, DVec2 { x: 0.0, y: 1e10 });
            self.last_message_count = messages.len();
        }

        self.view.redraw(cx);
    }

    /// Clear the transcript display
    pub fn clear(&mut self, cx: &mut Cx) {
        self.last_message_count = 0;
        let empty = if self.empty_text.is_empty() {
            "Say hello to start practicing..."
        } else {
            &self.empty_text
        };
        self.view
            .markdown(ids!(chat_scroll.content_wrapper.content))
            .set_text(cx, empty);
        self.view.redraw(cx);
    }

    /// Apply dark mode
    pub fn apply_dark_mode(&mut self, cx: &mut Cx, dark_mode: f64) {
        self.dark_mode = dark_mode;
        self.view.apply_over(cx, live! {
            draw_bg: { dark_mode: (dark_mode) }
        });
        self.view.view(ids!(header)).apply_over(cx, live! {
            draw_bg: { dark_mode: (dark_mode) }
        });
        self.view.label(ids!(header.title)).apply_over(cx, live! {
            draw_text: { dark_mode: (dark_mode) }
        });
        self.view.redraw(cx);
    }
}

impl ChatPanelRef {
    /// Set messages
    pub fn set_messages(&self, cx: &mut Cx, messages: &[ChatMessage]) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.set_messages(cx, messages);
        }
    }

    /// Clear the transcript display
    pub fn clear(&self, cx: &mut Cx) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.clear(cx);
        }
    }

    /// Apply dark mode
    pub fn apply_dark_mode(&self, cx: &mut Cx, dark_mode: f64) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.apply_dark_mode(cx, dark_mode);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_display_names() {
        assert_eq!(Sender::User.display_name(), "You");
        assert_eq!(Sender::Tutor.display_name(), "Tutor");
    }

    #[test]
    fn test_message_carries_creation_timestamp() {
        let msg = ChatMessage::new(Sender::User, "hello");
        assert!(msg.timestamp_ms > 0);
        assert_eq!(msg.text, "hello");
        assert_eq!(msg.sender, Sender::User);
    }

    #[test]
    fn test_format_timestamp() {
        // 12:34:56 into a day
        let ms = ((12 * 3600 + 34 * 60 + 56) * 1000) as u64;
        assert_eq!(ChatMessage::format_timestamp(ms), "12:34");

        // Leading zeros
        let ms = ((3 * 3600 + 7 * 60) * 1000) as u64;
        assert_eq!(ChatMessage::format_timestamp(ms), "03:07");

        assert_eq!(ChatMessage::format_timestamp(0), "00:00");
    }
}
