//! Chat Input Widget
//!
//! A prompt input field with a voice toggle and send button.
//!
//! ## Usage
//!
//! ```rust,ignore
//! live_design! {
//!     use fluent_ui::widgets::chat_input::*;
//!
//!     prompt = <ChatInput> {}
//! }
//! ```
//!
//! ## Handling Submit
//!
//! ```rust,ignore
//! let input = self.view.chat_input(id!(prompt));
//! if let Some(text) = input.submitted(&actions) {
//!     // text is already trimmed and non-empty
//! }
//! if input.voice_toggle_clicked(&actions) {
//!     // flip the voice controller
//! }
//! ```

use makepad_widgets::*;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    // Panel styling constants
    PANEL_RADIUS = 8.0
    PANEL_BG = vec4(0.976, 0.980, 0.984, 1.0)
    PANEL_BG_DARK = vec4(0.118, 0.161, 0.231, 1.0)
    INPUT_BG = vec4(0.969, 0.973, 0.980, 1.0)
    INPUT_BG_DARK = vec4(0.118, 0.161, 0.231, 1.0)
    TEXT_PRIMARY = vec4(0.067, 0.090, 0.125, 1.0)
    TEXT_PRIMARY_DARK = vec4(0.945, 0.961, 0.976, 1.0)
    BORDER = vec4(0.878, 0.906, 0.925, 1.0)
    SLATE_400 = vec4(0.580, 0.639, 0.702, 1.0)
    SLATE_500 = vec4(0.392, 0.455, 0.545, 1.0)
    SLATE_600 = vec4(0.278, 0.337, 0.412, 1.0)
    INDIGO_200 = vec4(0.780, 0.824, 0.996, 1.0)
    ACCENT_BLUE = vec4(0.231, 0.510, 0.965, 1.0)
    RED_500 = vec4(0.937, 0.267, 0.267, 1.0)

    /// Send button with hover/pressed states
    SendButton = <Button> {
        width: 72, height: 36
        text: "Send"
        padding: {left: 16, right: 16}

        animator: {
            hover = {
                default: off,
                off = {
                    from: {all: Forward {duration: 0.15}}
                    apply: { draw_bg: {hover: 0.0} }
                }
                on = {
                    from: {all: Forward {duration: 0.15}}
                    apply: { draw_bg: {hover: 1.0} }
                }
            }
            pressed = {
                default: off,
                off = {
                    from: {all: Forward {duration: 0.1}}
                    apply: { draw_bg: {pressed: 0.0} }
                }
                on = {
                    from: {all: Forward {duration: 0.1}}
                    apply: { draw_bg: {pressed: 1.0} }
                }
            }
        }

        draw_text: {
            instance dark_mode: 0.0
            text_style: { font_size: 13.0 }
            fn get_color(self) -> vec4 {
                return vec4(1.0, 1.0, 1.0, 1.0);
            }
        }

        draw_bg: {
            instance hover: 0.0
            instance pressed: 0.0
            instance dark_mode: 0.0
            border_radius: 6.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(0., 0., self.rect_size.x, self.rect_size.y, self.border_radius);
                let base = (ACCENT_BLUE);
                let hover_color = vec4(0.369, 0.580, 0.976, 1.0);
                let pressed_color = vec4(0.188, 0.420, 0.839, 1.0);
                let color = mix(mix(base, hover_color, self.hover), pressed_color, self.pressed);
                sdf.fill(color);
                return sdf.result;
            }
        }
    }

    /// Microphone toggle. Idle: outlined mic. Listening: red stop square.
    VoiceButton = <View> {
        width: 36, height: 36
        cursor: Hand
        show_bg: true
        draw_bg: {
            instance dark_mode: 0.0
            instance listening: 0.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                let c = self.rect_size * 0.5;

                // Circular backdrop, red while listening
                sdf.circle(c.x, c.y, 16.0);
                let idle_bg = mix((INPUT_BG), (INPUT_BG_DARK), self.dark_mode);
                sdf.fill(mix(idle_bg, (RED_500), self.listening));
                sdf.circle(c.x, c.y, 16.0);
                sdf.stroke(mix((BORDER), (SLATE_600), self.dark_mode), 1.0);

                let idle_icon = mix((SLATE_500), (SLATE_400), self.dark_mode);
                let icon_color = mix(idle_icon, vec4(1.0, 1.0, 1.0, 1.0), self.listening);

                // Mic capsule (fades out while listening)
                sdf.box(c.x - 2.5, c.y - 8.0, 5.0, 9.0, 2.5);
                sdf.fill(mix(icon_color, vec4(0.0, 0.0, 0.0, 0.0), self.listening));
                // Mic stand
                sdf.move_to(c.x, c.y + 1.0);
                sdf.line_to(c.x, c.y + 6.0);
                sdf.stroke(mix(icon_color, vec4(0.0, 0.0, 0.0, 0.0), self.listening), 1.5);

                // Stop square (fades in while listening)
                sdf.box(c.x - 4.0, c.y - 4.0, 8.0, 8.0, 1.5);
                sdf.fill(mix(vec4(0.0, 0.0, 0.0, 0.0), icon_color, self.listening));

                return sdf.result;
            }
        }
    }

    /// Chat input widget - text input with voice toggle and send button
    pub ChatInput = {{ChatInput}} {
        width: Fill, height: Fit
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
        padding: 12

        input_row = <View> {
            width: Fill, height: Fit
            flow: Right
            spacing: 8
            align: {y: 0.5}

            text_input = <TextInput> {
                width: Fill, height: 36
                empty_text: "Type a message..."
                draw_bg: {
                    instance dark_mode: 0.0
                    border_radius: 6.0
                    fn pixel(self) -> vec4 {
                        let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                        sdf.box(0., 0., self.rect_size.x, self.rect_size.y, self.border_radius);
                        let bg = mix((INPUT_BG), (INPUT_BG_DARK), self.dark_mode);
                        let border = mix((BORDER), (SLATE_600), self.dark_mode);
                        sdf.fill(bg);
                        sdf.stroke(border, 1.0);
                        return sdf.result;
                    }
                }
                draw_text: {
                    instance dark_mode: 0.0
                    text_style: { font_size: 13.0 }
                    fn get_color(self) -> vec4 {
                        return mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
                    }
                }
                draw_selection: {
                    color: (INDIGO_200)
                }
                draw_cursor: {
                    color: (ACCENT_BLUE)
                }
            }

            voice_btn = <VoiceButton> {}
            send_btn = <SendButton> {}
        }
    }
}

/// Actions emitted by ChatInput
#[derive(Clone, Debug, DefaultNone)]
pub enum ChatInputAction {
    None,
    /// User submitted a non-empty trimmed message
    Submitted(String),
    /// The microphone toggle was clicked
    VoiceToggleClicked,
}

#[derive(Live, LiveHook, Widget)]
pub struct ChatInput {
    #[deref]
    view: View,

    /// Current dark mode value
    #[rust]
    dark_mode: f64,
}

impl Widget for ChatInput {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        let actions = cx.capture_actions(|cx| self.view.handle_event(cx, event, scope));

        // Check for send button click
        if self.view.button(ids!(input_row.send_btn)).clicked(&actions) {
            self.submit(cx, scope);
        }

        // Check for Enter key in text input
        for action in actions.iter() {
            if let TextInputAction::Returned(..) = action.as_widget_action().cast() {
                self.submit(cx, scope);
            }
        }

        // Voice toggle click
        let voice_btn = self.view.view(ids!(input_row.voice_btn));
        match event.hits(cx, voice_btn.area()) {
            Hit::FingerUp(fe) if fe.was_tap() => {
                cx.widget_action(
                    self.widget_uid(),
                    &scope.path,
                    ChatInputAction::VoiceToggleClicked,
                );
            }
            _ => {}
        }
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        self.view.draw_walk(cx, scope, walk)
    }
}

impl ChatInput {
    /// Submit the current input.
    ///
    /// Whitespace-only input is silently ignored; the field is cleared only
    /// when a message actually goes out.
    fn submit(&mut self, cx: &mut Cx, scope: &mut Scope) {
        let text = self.text();
        let trimmed = text.trim();

        if trimmed.is_empty() {
            return;
        }

        cx.widget_action(
            self.widget_uid(),
            &scope.path,
            ChatInputAction::Submitted(trimmed.to_string()),
        );
        self.clear(cx);
    }

    /// Get current text
    pub fn text(&self) -> String {
        self.view.text_input(ids!(input_row.text_input)).text()
    }

    /// Set text (used by recognition results and quick topics)
    pub fn set_text(&mut self, cx: &mut Cx, text: &str) {
        self.view
            .text_input(ids!(input_row.text_input))
            .set_text(cx, text);
    }

    /// Clear input
    pub fn clear(&mut self, cx: &mut Cx) {
        self.view.text_input(ids!(input_row.text_input)).set_text(cx, "");
    }

    /// Reflect the voice toggle state on the mic button
    pub fn set_listening(&mut self, cx: &mut Cx, listening: bool) {
        let value = if listening { 1.0 } else { 0.0 };
        self.view.view(ids!(input_row.voice_btn)).apply_over(cx, live! {
            draw_bg: { listening: (value) }
        });
        self.view.redraw(cx);
    }

    /// Apply dark mode
    pub fn apply_dark_mode(&mut self, cx: &mut Cx, dark_mode: f64) {
        self.dark_mode = dark_mode;
        self.view.apply_over(cx, live! {
            draw_bg: { dark_mode: (dark_mode) }
        });
        self.view.text_input(ids!(input_row.text_input)).apply_over(cx, live! {
            draw_bg: { dark_mode: (dark_mode) }
            draw_text: { dark_mode: (dark_mode) }
        });
        self.view.view(ids!(input_row.voice_btn)).apply_over(cx, live! {
            draw_bg: { dark_mode: (dark_mode) }
        });
        self.view.redraw(cx);
    }
}

impl ChatInputRef {
    /// Get current text
    pub fn text(&self) -> String {
        self.borrow().map(|inner| inner.text()).unwrap_or_default()
    }

    /// Set text
    pub fn set_text(&self, cx: &mut Cx, text: &str) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.set_text(cx, text);
        }
    }

    /// Clear input
    pub fn clear(&self, cx: &mut Cx) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.clear(cx);
        }
    }

    /// Reflect the voice toggle state on the mic button
    pub fn set_listening(&self, cx: &mut Cx, listening: bool) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.set_listening(cx, listening);
        }
    }

    /// Apply dark mode
    pub fn apply_dark_mode(&self, cx: &mut Cx, dark_mode: f64) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.apply_dark_mode(cx, dark_mode);
        }
    }

    /// Check if input was submitted, returns the submitted text
    pub fn submitted(&self, actions: &Actions) -> Option<String> {
        if let ChatInputAction::Submitted(text) =
            actions.find_widget_action(self.widget_uid()).cast()
        {
            Some(text)
        } else {
            None
        }
    }

    /// Check if the voice toggle was clicked
    pub fn voice_toggle_clicked(&self, actions: &Actions) -> bool {
        matches!(
            actions.find_widget_action(self.widget_uid()).cast(),
            ChatInputAction::VoiceToggleClicked
        )
    }
}
