//! Notice Modal - Blocking notice dialog
//!
//! The desktop counterpart of a blocking alert: a dimmed overlay with a
//! short message and a single dismiss button. Used for empty login fields,
//! unsupported speech capability, and the intentionally-stubbed practice
//! actions.
//!
//! ## Usage
//!
//! ```rust,ignore
//! // In live_design, last child of an Overlay-flow screen:
//! notice_modal = <NoticeModal> {}
//!
//! // Showing
//! self.view.notice_modal(id!(notice_modal)).show(cx, "Heads up", "Please log in first.");
//!
//! // Dismissal is handled internally; listen if you care:
//! if self.view.notice_modal(id!(notice_modal)).dismissed(&actions) { ... }
//! ```

use makepad_widgets::*;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    DIALOG_BG = vec4(0.976, 0.980, 0.984, 1.0)
    DIALOG_BG_DARK = vec4(0.118, 0.161, 0.231, 1.0)
    TEXT_PRIMARY = vec4(0.067, 0.090, 0.125, 1.0)
    TEXT_PRIMARY_DARK = vec4(0.945, 0.961, 0.976, 1.0)
    TEXT_SECONDARY = vec4(0.392, 0.455, 0.545, 1.0)
    TEXT_SECONDARY_DARK = vec4(0.580, 0.639, 0.722, 1.0)
    BORDER = vec4(0.878, 0.906, 0.925, 1.0)
    SLATE_600 = vec4(0.278, 0.337, 0.412, 1.0)
    ACCENT_BLUE = vec4(0.231, 0.510, 0.965, 1.0)

    /// Primary dismiss button
    NoticeOkButton = <Button> {
        width: Fit, height: 36
        padding: {left: 24, right: 24}
        text: "OK"

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
            text_style: { font_size: 12.0 }
            fn get_color(self) -> vec4 {
                return vec4(1.0, 1.0, 1.0, 1.0);
            }
        }

        draw_bg: {
            instance hover: 0.0
            instance pressed: 0.0
            border_radius: 6.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(0., 0., self.rect_size.x, self.rect_size.y, self.border_radius);
                let base = (ACCENT_BLUE);
                let hover_color = vec4(0.369, 0.580, 0.976, 1.0);
                let pressed_color = vec4(0.188, 0.420, 0.839, 1.0);
                sdf.fill(mix(mix(base, hover_color, self.hover), pressed_color, self.pressed));
                return sdf.result;
            }
        }
    }

    /// Notice modal - full-screen scrim with a centered dialog
    pub NoticeModal = {{NoticeModal}} {
        width: Fill, height: Fill
        visible: false
        align: {x: 0.5, y: 0.5}
        show_bg: true
        draw_bg: {
            fn pixel(self) -> vec4 {
                return vec4(0.0, 0.0, 0.0, 0.45);
            }
        }

        dialog = <View> {
            width: 380, height: Fit
            flow: Down
            spacing: 12
            padding: 24
            show_bg: true
            draw_bg: {
                instance dark_mode: 0.0
                border_radius: 10.0
                fn pixel(self) -> vec4 {
                    let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                    sdf.box(0., 0., self.rect_size.x, self.rect_size.y, self.border_radius);
                    let bg = mix((DIALOG_BG), (DIALOG_BG_DARK), self.dark_mode);
                    let border = mix((BORDER), (SLATE_600), self.dark_mode);
                    sdf.fill(bg);
                    sdf.stroke(border, 1.0);
                    return sdf.result;
                }
            }

            title = <Label> {
                text: "Notice"
                draw_text: {
                    instance dark_mode: 0.0
                    text_style: { font_size: 15.0 }
                    fn get_color(self) -> vec4 {
                        return mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
                    }
                }
            }

            message = <Label> {
                width: Fill
                text: ""
                draw_text: {
                    instance dark_mode: 0.0
                    text_style: { font_size: 12.0 }
                    wrap: Word
                    fn get_color(self) -> vec4 {
                        return mix((TEXT_SECONDARY), (TEXT_SECONDARY_DARK), self.dark_mode);
                    }
                }
            }

            button_row = <View> {
                width: Fill, height: Fit
                flow: Right
                align: {x: 1.0}

                ok_btn = <NoticeOkButton> {}
            }
        }
    }
}

/// Actions emitted by NoticeModal
#[derive(Clone, Debug, DefaultNone)]
pub enum NoticeModalAction {
    None,
    /// The notice was dismissed
    Dismissed,
}

#[derive(Live, LiveHook, Widget)]
pub struct NoticeModal {
    #[deref]
    view: View,

    /// Current dark mode value
    #[rust]
    dark_mode: f64,
}

impl Widget for NoticeModal {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        let actions = cx.capture_actions(|cx| self.view.handle_event(cx, event, scope));

        if self.view.button(ids!(dialog.button_row.ok_btn)).clicked(&actions) {
            self.hide(cx);
            cx.widget_action(self.widget_uid(), &scope.path, NoticeModalAction::Dismissed);
        }
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        self.view.draw_walk(cx, scope, walk)
    }
}

impl NoticeModal {
    /// Show the notice with the given title and message
    pub fn show(&mut self, cx: &mut Cx, title: &str, message: &str) {
        self.view.label(ids!(dialog.title)).set_text(cx, title);
        self.view.label(ids!(dialog.message)).set_text(cx, message);
        self.view.set_visible(cx, true);
        self.view.redraw(cx);
    }

    /// Hide the notice
    pub fn hide(&mut self, cx: &mut Cx) {
        self.view.set_visible(cx, false);
        self.view.redraw(cx);
    }

    /// Apply dark mode
    pub fn apply_dark_mode(&mut self, cx: &mut Cx, dark_mode: f64) {
        self.dark_mode = dark_mode;
        self.view.view(ids!(dialog)).apply_over(cx, live! {
            draw_bg: { dark_mode: (dark_mode) }
        });
        self.view.label(ids!(dialog.title)).apply_over(cx, live! {
            draw_text: { dark_mode: (dark_mode) }
        });
        self.view.label(ids!(dialog.message)).apply_over(cx, live! {
            draw_text: { dark_mode: (dark_mode) }
        });
        self.view.redraw(cx);
    }
}

impl NoticeModalRef {
    /// Show the notice with the given title and message
    pub fn show(&self, cx: &mut Cx, title: &str, message: &str) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.show(cx, title, message);
        }
    }

    /// Hide the notice
    pub fn hide(&self, cx: &mut Cx) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.hide(cx);
        }
    }

    /// Apply dark mode
    pub fn apply_dark_mode(&self, cx: &mut Cx, dark_mode: f64) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.apply_dark_mode(cx, dark_mode);
        }
    }

    /// Check if the notice was dismissed
    pub fn dismissed(&self, actions: &Actions) -> bool {
        matches!(
            actions.find_widget_action(self.widget_uid()).cast(),
            NoticeModalAction::Dismissed
        )
    }
}
