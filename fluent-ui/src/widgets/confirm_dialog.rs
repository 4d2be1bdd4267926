//! Confirm Dialog - Confirm/cancel prompt for destructive actions
//!
//! Used by the settings danger zone (delete account, reset progress). The
//! dialog carries a caller-supplied tag so one dialog instance can serve
//! several actions.
//!
//! ## Usage
//!
//! ```rust,ignore
//! // Opening
//! self.view.confirm_dialog(id!(confirm)).open(
//!     cx,
//!     "delete_account",
//!     "Delete Account",
//!     "Are you sure? This action cannot be undone.",
//! );
//!
//! // Handling
//! if let Some(tag) = self.view.confirm_dialog(id!(confirm)).confirmed(&actions) {
//!     match tag.as_str() {
//!         "delete_account" => { ... }
//!         _ => {}
//!     }
//! }
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
    GRAY_50 = vec4(0.980, 0.980, 0.980, 1.0)
    GRAY_100 = vec4(0.953, 0.957, 0.965, 1.0)
    GRAY_300 = vec4(0.820, 0.840, 0.860, 1.0)
    RED_500 = vec4(0.937, 0.267, 0.267, 1.0)
    RED_600 = vec4(0.863, 0.149, 0.149, 1.0)
    WHITE = vec4(1.0, 1.0, 1.0, 1.0)

    /// Destructive confirm button
    ConfirmButton = <Button> {
        width: Fit, height: 36
        padding: {left: 20, right: 20}
        text: "Confirm"

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
        }

        draw_text: {
            text_style: { font_size: 12.0 }
            fn get_color(self) -> vec4 {
                return (WHITE);
            }
        }

        draw_bg: {
            instance hover: 0.0
            border_radius: 6.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(0., 0., self.rect_size.x, self.rect_size.y, self.border_radius);
                sdf.fill(mix((RED_500), (RED_600), self.hover));
                return sdf.result;
            }
        }
    }

    /// Neutral cancel button
    CancelButton = <Button> {
        width: Fit, height: 36
        padding: {left: 20, right: 20}
        text: "Cancel"

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
        }

        draw_text: {
            instance dark_mode: 0.0
            text_style: { font_size: 12.0 }
            fn get_color(self) -> vec4 {
                return mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
            }
        }

        draw_bg: {
            instance hover: 0.0
            instance dark_mode: 0.0
            border_radius: 6.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(0., 0., self.rect_size.x, self.rect_size.y, self.border_radius);
                let light = mix((WHITE), (GRAY_100), self.hover);
                let dark = mix((DIALOG_BG_DARK), (SLATE_600), self.hover);
                sdf.fill(mix(light, dark, self.dark_mode));
                sdf.stroke(mix((GRAY_300), (SLATE_600), self.dark_mode), 1.0);
                return sdf.result;
            }
        }
    }

    /// Confirm dialog - full-screen scrim with a centered prompt
    pub ConfirmDialog = {{ConfirmDialog}} {
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
            width: 400, height: Fit
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
                text: "Are you sure?"
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
                spacing: 8
                align: {x: 1.0}

                cancel_btn = <CancelButton> {}
                confirm_btn = <ConfirmButton> {}
            }
        }
    }
}

/// Actions emitted by ConfirmDialog
#[derive(Clone, Debug, DefaultNone)]
pub enum ConfirmDialogAction {
    None,
    /// The user confirmed; carries the tag passed to `open`
    Confirmed(String),
    /// The user cancelled
    Cancelled,
}

#[derive(Live, LiveHook, Widget)]
pub struct ConfirmDialog {
    #[deref]
    view: View,

    /// Current dark mode value
    #[rust]
    dark_mode: f64,

    /// Tag identifying the action being confirmed
    #[rust]
    tag: String,
}

impl Widget for ConfirmDialog {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        let actions = cx.capture_actions(|cx| self.view.handle_event(cx, event, scope));

        if self
            .view
            .button(ids!(dialog.button_row.confirm_btn))
            .clicked(&actions)
        {
            let tag = std::mem::take(&mut self.tag);
            self.hide(cx);
            cx.widget_action(
                self.widget_uid(),
                &scope.path,
                ConfirmDialogAction::Confirmed(tag),
            );
        }

        if self
            .view
            .button(ids!(dialog.button_row.cancel_btn))
            .clicked(&actions)
        {
            self.hide(cx);
            cx.widget_action(self.widget_uid(), &scope.path, ConfirmDialogAction::Cancelled);
        }
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        self.view.draw_walk(cx, scope, walk)
    }
}

impl ConfirmDialog {
    /// Open the dialog for the action identified by `tag`
    pub fn open(&mut self, cx: &mut Cx, tag: &str, title: &str, message: &str) {
        self.tag = tag.to_string();
        self.view.label(ids!(dialog.title)).set_text(cx, title);
        self.view.label(ids!(dialog.message)).set_text(cx, message);
        self.view.set_visible(cx, true);
        self.view.redraw(cx);
    }

    /// Hide the dialog
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
        self.view
            .button(ids!(dialog.button_row.cancel_btn))
            .apply_over(cx, live! {
                draw_bg: { dark_mode: (dark_mode) }
                draw_text: { dark_mode: (dark_mode) }
            });
        self.view.redraw(cx);
    }
}

impl ConfirmDialogRef {
    /// Open the dialog for the action identified by `tag`
    pub fn open(&self, cx: &mut Cx, tag: &str, title: &str, message: &str) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.open(cx, tag, title, message);
        }
    }

    /// Hide the dialog
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

    /// Check if the dialog was confirmed, returning the action tag
    pub fn confirmed(&self, actions: &Actions) -> Option<String> {
        if let ConfirmDialogAction::Confirmed(tag) =
            actions.find_widget_action(self.widget_uid()).cast()
        {
            Some(tag)
        } else {
            None
        }
    }

    /// Check if the dialog was cancelled
    pub fn cancelled(&self, actions: &Actions) -> bool {
        matches!(
            actions.find_widget_action(self.widget_uid()).cast(),
            ConfirmDialogAction::Cancelled
        )
    }
}
