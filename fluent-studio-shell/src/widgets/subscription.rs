//! Subscription Plans Screen
//!
//! Three fixed plan cards. Choosing a plan is a stub: it confirms via a
//! notice dialog and changes nothing.

use makepad_widgets::*;

use fluent_ui::NoticeModalWidgetExt;

/// Plan display data: (name, price, blurb)
const PLANS: [(&str, &str, &str); 3] = [
    ("Free", "Rs 0 / month", "Daily chat practice and five words a day"),
    ("Pro", "Rs 299 / month", "Unlimited chat, pronunciation feedback, quizzes"),
    ("Premium", "Rs 599 / month", "Everything in Pro plus live tutor sessions"),
];

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    use fluent_ui::widgets::notice_modal::*;

    CARD_BG = vec4(0.976, 0.980, 0.984, 1.0)
    CARD_BG_DARK = vec4(0.118, 0.161, 0.231, 1.0)
    TEXT_PRIMARY = vec4(0.067, 0.090, 0.125, 1.0)
    TEXT_PRIMARY_DARK = vec4(0.945, 0.961, 0.976, 1.0)
    TEXT_SECONDARY = vec4(0.392, 0.455, 0.545, 1.0)
    TEXT_SECONDARY_DARK = vec4(0.580, 0.639, 0.722, 1.0)
    BORDER = vec4(0.878, 0.906, 0.925, 1.0)
    SLATE_600 = vec4(0.278, 0.337, 0.412, 1.0)
    ACCENT_BLUE = vec4(0.231, 0.510, 0.965, 1.0)
    BLUE_600 = vec4(0.369, 0.580, 0.976, 1.0)
    WHITE = vec4(1.0, 1.0, 1.0, 1.0)

    ChooseButton = <Button> {
        width: Fill, height: 36
        text: "Choose Plan"

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
            text_style: { font_size: 11.0 }
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
                sdf.fill(mix((ACCENT_BLUE), (BLUE_600), self.hover));
                return sdf.result;
            }
        }
    }

    PlanCard = <View> {
        width: Fill, height: Fit
        flow: Down
        spacing: 8
        padding: 20
        show_bg: true
        draw_bg: {
            instance dark_mode: 0.0
            border_radius: 8.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(0., 0., self.rect_size.x, self.rect_size.y, self.border_radius);
                let bg = mix((CARD_BG), (CARD_BG_DARK), self.dark_mode);
                let border = mix((BORDER), (SLATE_600), self.dark_mode);
                sdf.fill(bg);
                sdf.stroke(border, 1.0);
                return sdf.result;
            }
        }

        name = <Label> {
            text: ""
            draw_text: {
                instance dark_mode: 0.0
                text_style: { font_size: 15.0 }
                fn get_color(self) -> vec4 {
                    return mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
                }
            }
        }

        price = <Label> {
            text: ""
            draw_text: {
                text_style: { font_size: 13.0 }
                fn get_color(self) -> vec4 {
                    return (ACCENT_BLUE);
                }
            }
        }

        blurb = <Label> {
            width: Fill
            text: ""
            draw_text: {
                instance dark_mode: 0.0
                text_style: { font_size: 11.0 }
                wrap: Word
                fn get_color(self) -> vec4 {
                    return mix((TEXT_SECONDARY), (TEXT_SECONDARY_DARK), self.dark_mode);
                }
            }
        }

        choose_btn = <ChooseButton> {}
    }

    pub SubscriptionScreen = {{SubscriptionScreen}} {
        width: Fill, height: Fill
        flow: Overlay

        content = <View> {
            width: Fill, height: Fit
            flow: Right
            spacing: 12
            padding: 20

            plan0 = <PlanCard> {}
            plan1 = <PlanCard> {}
            plan2 = <PlanCard> {}
        }

        notice_modal = <NoticeModal> {}
    }
}

#[derive(Live, LiveHook, Widget)]
pub struct SubscriptionScreen {
    #[deref]
    view: View,

    #[rust]
    initialized: bool,
}

impl Widget for SubscriptionScreen {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        let actions = cx.capture_actions(|cx| self.view.handle_event(cx, event, scope));

        if !self.initialized {
            self.initialized = true;
            self.populate_plans(cx);
        }

        for (index, (name, _, _)) in PLANS.iter().enumerate() {
            if self.choose_button(index).clicked(&actions) {
                self.view.notice_modal(ids!(notice_modal)).show(
                    cx,
                    "Subscription",
                    &format!("The {name} plan would be activated in a real application."),
                );
            }
        }
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        self.view.draw_walk(cx, scope, walk)
    }
}

impl SubscriptionScreen {
    fn plan_card(&self, index: usize) -> ViewRef {
        match index {
            0 => self.view.view(ids!(content.plan0)),
            1 => self.view.view(ids!(content.plan1)),
            _ => self.view.view(ids!(content.plan2)),
        }
    }

    fn choose_button(&self, index: usize) -> ButtonRef {
        match index {
            0 => self.view.button(ids!(content.plan0.choose_btn)),
            1 => self.view.button(ids!(content.plan1.choose_btn)),
            _ => self.view.button(ids!(content.plan2.choose_btn)),
        }
    }

    fn populate_plans(&mut self, cx: &mut Cx) {
        for (index, (name, price, blurb)) in PLANS.iter().enumerate() {
            let card = self.plan_card(index);
            card.label(ids!(name)).set_text(cx, name);
            card.label(ids!(price)).set_text(cx, price);
            card.label(ids!(blurb)).set_text(cx, blurb);
        }
        self.view.redraw(cx);
    }

    /// Apply dark mode to the screen's widgets
    pub fn apply_dark_mode(&mut self, cx: &mut Cx, dark_mode: f64) {
        for index in 0..PLANS.len() {
            let card = self.plan_card(index);
            card.apply_over(cx, live! {
                draw_bg: { dark_mode: (dark_mode) }
            });
            card.label(ids!(name)).apply_over(cx, live! {
                draw_text: { dark_mode: (dark_mode) }
            });
            card.label(ids!(blurb)).apply_over(cx, live! {
                draw_text: { dark_mode: (dark_mode) }
            });
        }
        self.view
            .notice_modal(ids!(notice_modal))
            .apply_dark_mode(cx, dark_mode);
        self.view.redraw(cx);
    }
}

impl SubscriptionScreenRef {
    /// Apply dark mode
    pub fn apply_dark_mode(&self, cx: &mut Cx, dark_mode: f64) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.apply_dark_mode(cx, dark_mode);
        }
    }
}
