//! Status Bar Widget
//!
//! Bottom bar showing speech capability and listening activity.
//!
//! ## Usage
//!
//! ```rust,ignore
//! live_design! {
//!     use fluent_ui::shell::status_bar::*;
//!
//!     status = <StatusBar> {}
//! }
//!
//! // On the UI poll timer:
//! if let Some(status) = speech_state.status.read_if_dirty() {
//!     self.ui.status_bar(id!(status)).set_speech_status(cx, &status);
//! }
//! ```

use fluent_speech_bridge::SpeechStatus;
use makepad_widgets::*;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    // Color constants
    PANEL_BG = vec4(0.976, 0.980, 0.984, 1.0)
    PANEL_BG_DARK = vec4(0.118, 0.161, 0.231, 1.0)
    TEXT_SECONDARY = vec4(0.392, 0.455, 0.545, 1.0)
    TEXT_SECONDARY_DARK = vec4(0.580, 0.639, 0.722, 1.0)
    GREEN_500 = vec4(0.133, 0.773, 0.373, 1.0)
    AMBER_500 = vec4(0.961, 0.624, 0.043, 1.0)
    RED_500 = vec4(0.937, 0.267, 0.267, 1.0)
    BORDER = vec4(0.878, 0.906, 0.925, 1.0)
    BORDER_DARK = vec4(0.278, 0.337, 0.412, 1.0)

    /// Speech status indicator dot
    StatusDot = <View> {
        width: 8, height: 8
        show_bg: true
        draw_bg: {
            instance status: 0.0  // 0=unavailable, 1=listening, 2=ready
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                let c = self.rect_size * 0.5;
                sdf.circle(c.x, c.y, 4.0);
                let unavailable = (RED_500);
                let listening = (AMBER_500);
                let ready = (GREEN_500);
                let color = mix(
                    mix(unavailable, listening, min(self.status, 1.0)),
                    ready,
                    max(self.status - 1.0, 0.0)
                );
                sdf.fill(color);
                return sdf.result;
            }
        }
    }

    /// Status Bar Widget
    pub StatusBar = {{StatusBar}} {
        width: Fill, height: 28
        flow: Right
        align: {y: 0.5}
        padding: {left: 16, right: 16}
        spacing: 12
        show_bg: true
        draw_bg: {
            instance dark_mode: 0.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.rect(0., 0., self.rect_size.x, self.rect_size.y);
                let bg = mix((PANEL_BG), (PANEL_BG_DARK), self.dark_mode);
                sdf.fill(bg);
                // Top border
                sdf.rect(0., 0., self.rect_size.x, 1.0);
                let border = mix((BORDER), (BORDER_DARK), self.dark_mode);
                sdf.fill(border);
                return sdf.result;
            }
        }

        speech_dot = <StatusDot> {}

        speech_label = <Label> {
            text: "Voice unavailable"
            draw_text: {
                instance dark_mode: 0.0
                text_style: { font_size: 10.0 }
                fn get_color(self) -> vec4 {
                    return mix((TEXT_SECONDARY), (TEXT_SECONDARY_DARK), self.dark_mode);
                }
            }
        }

        <Filler> {}

        version_label = <Label> {
            text: "Fluent Studio 0.1"
            draw_text: {
                instance dark_mode: 0.0
                text_style: { font_size: 10.0 }
                fn get_color(self) -> vec4 {
                    return mix((TEXT_SECONDARY), (TEXT_SECONDARY_DARK), self.dark_mode);
                }
            }
        }
    }
}

#[derive(Live, LiveHook, Widget)]
pub struct StatusBar {
    #[deref]
    view: View,

    /// Current dark mode value
    #[rust]
    dark_mode: f64,
}

impl Widget for StatusBar {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        self.view.handle_event(cx, event, scope);
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        self.view.draw_walk(cx, scope, walk)
    }
}

impl StatusBar {
    /// Reflect the shared speech status
    pub fn set_speech_status(&mut self, cx: &mut Cx, status: &SpeechStatus) {
        let (dot, text) = if status.listening {
            (1.0, "Listening...")
        } else if status.recognition_available || status.synthesis_available {
            (2.0, "Voice ready")
        } else {
            (0.0, "Voice unavailable")
        };

        self.view.view(ids!(speech_dot)).apply_over(cx, live! {
            draw_bg: { status: (dot) }
        });
        self.view.label(ids!(speech_label)).set_text(cx, text);
        self.view.redraw(cx);
    }

    /// Apply dark mode
    pub fn apply_dark_mode(&mut self, cx: &mut Cx, dark_mode: f64) {
        self.dark_mode = dark_mode;

        self.view.apply_over(cx, live! {
            draw_bg: { dark_mode: (dark_mode) }
        });
        self.view.label(ids!(speech_label)).apply_over(cx, live! {
            draw_text: { dark_mode: (dark_mode) }
        });
        self.view.label(ids!(version_label)).apply_over(cx, live! {
            draw_text: { dark_mode: (dark_mode) }
        });
        self.view.redraw(cx);
    }
}

impl StatusBarRef {
    /// Reflect the shared speech status
    pub fn set_speech_status(&self, cx: &mut Cx, status: &SpeechStatus) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.set_speech_status(cx, status);
        }
    }

    /// Apply dark mode
    pub fn apply_dark_mode(&self, cx: &mut Cx, dark_mode: f64) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.apply_dark_mode(cx, dark_mode);
        }
    }
}
