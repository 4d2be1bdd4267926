//! Login Page Widget
//!
//! Full-window login form shown until a session exists. Validation is
//! minimal on purpose: both fields non-empty, nothing else checked, no
//! account store behind it. Empty fields are blocked with a notice; a
//! valid submission is emitted for the shell to turn into a session.

use makepad_widgets::*;

use fluent_ui::NoticeModalWidgetExt;

use crate::session::Session;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    use fluent_ui::widgets::notice_modal::*;

    PAGE_BG = vec4(0.933, 0.941, 0.953, 1.0)
    PAGE_BG_DARK = vec4(0.067, 0.090, 0.125, 1.0)
    CARD_BG = vec4(0.976, 0.980, 0.984, 1.0)
    CARD_BG_DARK = vec4(0.118, 0.161, 0.231, 1.0)
    INPUT_BG = vec4(0.945, 0.961, 0.976, 1.0)
    INPUT_BG_DARK = vec4(0.200, 0.220, 0.250, 1.0)
    TEXT_PRIMARY = vec4(0.067, 0.090, 0.125, 1.0)
    TEXT_PRIMARY_DARK = vec4(0.945, 0.961, 0.976, 1.0)
    TEXT_SECONDARY = vec4(0.392, 0.455, 0.545, 1.0)
    TEXT_SECONDARY_DARK = vec4(0.580, 0.639, 0.722, 1.0)
    BORDER = vec4(0.878, 0.906, 0.925, 1.0)
    BORDER_DARK = vec4(0.350, 0.380, 0.420, 1.0)
    ACCENT_BLUE = vec4(0.231, 0.510, 0.965, 1.0)
    BLUE_600 = vec4(0.369, 0.580, 0.976, 1.0)
    BLUE_700 = vec4(0.188, 0.420, 0.839, 1.0)
    WHITE = vec4(1.0, 1.0, 1.0, 1.0)

    LoginTextInput = <TextInput> {
        width: Fill, height: 44
        padding: {left: 12, right: 12, top: 10, bottom: 10}

        draw_bg: {
            instance dark_mode: 0.0
            instance radius: 6.0

            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(1.0, 1.0, self.rect_size.x - 2.0, self.rect_size.y - 2.0, self.radius);
                sdf.fill(mix((INPUT_BG), (INPUT_BG_DARK), self.dark_mode));
                sdf.stroke(mix((BORDER), (BORDER_DARK), self.dark_mode), 1.0);
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
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(0.0, 0.0, self.rect_size.x, self.rect_size.y, 1.0);
                sdf.fill(vec4(0.26, 0.52, 0.96, 0.4));
                return sdf.result;
            }
        }
    }

    LoginButton = <Button> {
        width: Fill, height: 44
        text: "Log In"

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
            text_style: { font_size: 13.0 }
            fn get_color(self) -> vec4 {
                return (WHITE);
            }
        }

        draw_bg: {
            instance hover: 0.0
            instance pressed: 0.0
            border_radius: 6.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(0., 0., self.rect_size.x, self.rect_size.y, self.border_radius);
                sdf.fill(mix(mix((ACCENT_BLUE), (BLUE_600), self.hover), (BLUE_700), self.pressed));
                return sdf.result;
            }
        }
    }

    pub LoginPage = {{LoginPage}} {
        width: Fill, height: Fill
        flow: Overlay
        align: {x: 0.5, y: 0.5}
        show_bg: true
        draw_bg: {
            instance dark_mode: 0.0
            fn pixel(self) -> vec4 {
                return mix((PAGE_BG), (PAGE_BG_DARK), self.dark_mode);
            }
        }

        card = <View> {
            width: 380, height: Fit
            flow: Down
            spacing: 14
            padding: 32
            show_bg: true
            draw_bg: {
                instance dark_mode: 0.0
                border_radius: 10.0
                fn pixel(self) -> vec4 {
                    let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                    sdf.box(0., 0., self.rect_size.x, self.rect_size.y, self.border_radius);
                    let bg = mix((CARD_BG), (CARD_BG_DARK), self.dark_mode);
                    let border = mix((BORDER), (BORDER_DARK), self.dark_mode);
                    sdf.fill(bg);
                    sdf.stroke(border, 1.0);
                    return sdf.result;
                }
            }

            brand = <Label> {
                text: "Fluent Studio"
                draw_text: {
                    instance dark_mode: 0.0
                    text_style: { font_size: 22.0 }
                    fn get_color(self) -> vec4 {
                        return mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
                    }
                }
            }

            tagline = <Label> {
                text: "Practice English every day"
                draw_text: {
                    instance dark_mode: 0.0
                    text_style: { font_size: 11.0 }
                    fn get_color(self) -> vec4 {
                        return mix((TEXT_SECONDARY), (TEXT_SECONDARY_DARK), self.dark_mode);
                    }
                }
            }

            email = <LoginTextInput> { empty_text: "Email address" }
            password = <LoginTextInput> { empty_text: "Password" }

            login_btn = <LoginButton> {}
        }

        notice_modal = <NoticeModal> {}
    }
}

/// Actions emitted by LoginPage
#[derive(Clone, Debug, DefaultNone)]
pub enum LoginPageAction {
    None,
    /// Both fields were non-empty; carries the email
    LoginSubmitted(String),
}

#[derive(Live, LiveHook, Widget)]
pub struct LoginPage {
    #[deref]
    view: View,

    /// Current dark mode value
    #[rust]
    dark_mode: f64,
}

impl Widget for LoginPage {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        let actions = cx.capture_actions(|cx| self.view.handle_event(cx, event, scope));

        let submit_requested = self.view.button(ids!(card.login_btn)).clicked(&actions)
            || actions.iter().any(|action| {
                matches!(
                    action.as_widget_action().cast(),
                    TextInputAction::Returned(..)
                )
            });

        if submit_requested {
            self.submit(cx, scope);
        }
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        self.view.draw_walk(cx, scope, walk)
    }
}

impl LoginPage {
    fn submit(&mut self, cx: &mut Cx, scope: &mut Scope) {
        let email = self.view.text_input(ids!(card.email)).text();
        let password = self.view.text_input(ids!(card.password)).text();

        if !Session::validate_credentials(&email, &password) {
            self.view.notice_modal(ids!(notice_modal)).show(
                cx,
                "Login",
                "Please enter both email and password",
            );
            return;
        }

        cx.widget_action(
            self.widget_uid(),
            &scope.path,
            LoginPageAction::LoginSubmitted(email.trim().to_string()),
        );
    }

    /// Clear the form (shown again after logout)
    pub fn reset(&mut self, cx: &mut Cx) {
        self.view.text_input(ids!(card.email)).set_text(cx, "");
        self.view.text_input(ids!(card.password)).set_text(cx, "");
    }

    /// Apply dark mode
    pub fn apply_dark_mode(&mut self, cx: &mut Cx, dark_mode: f64) {
        self.dark_mode = dark_mode;
        self.view.apply_over(cx, live! {
            draw_bg: { dark_mode: (dark_mode) }
        });
        self.view.view(ids!(card)).apply_over(cx, live! {
            draw_bg: { dark_mode: (dark_mode) }
        });
        for label_id in [ids!(card.brand), ids!(card.tagline)] {
            self.view.label(label_id).apply_over(cx, live! {
                draw_text: { dark_mode: (dark_mode) }
            });
        }
        for input_id in [ids!(card.email), ids!(card.password)] {
            self.view.text_input(input_id).apply_over(cx, live! {
                draw_bg: { dark_mode: (dark_mode) }
                draw_text: { dark_mode: (dark_mode) }
            });
        }
        self.view
            .notice_modal(ids!(notice_modal))
            .apply_dark_mode(cx, dark_mode);
        self.view.redraw(cx);
    }
}

impl LoginPageRef {
    /// Clear the form
    pub fn reset(&self, cx: &mut Cx) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.reset(cx);
        }
    }

    /// Apply dark mode
    pub fn apply_dark_mode(&self, cx: &mut Cx, dark_mode: f64) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.apply_dark_mode(cx, dark_mode);
        }
    }

    /// Check if login was submitted, returning the email
    pub fn login_submitted(&self, actions: &Actions) -> Option<String> {
        if let LoginPageAction::LoginSubmitted(email) =
            actions.find_widget_action(self.widget_uid()).cast()
        {
            Some(email)
        } else {
            None
        }
    }
}
