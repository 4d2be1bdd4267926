//! Dashboard Screen
//!
//! Landing page after login: fixed progress tiles and quick-start topic
//! cards. Picking a topic emits an action the shell routes to the chat
//! screen, which sends the topic as a message.

use makepad_widgets::*;

/// Quick-start conversation topics, in card order
pub const QUICK_TOPICS: [&str; 3] = [
    "Tell me about your hobbies",
    "What is your favorite food?",
    "Describe your last vacation",
];

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    CARD_BG = vec4(0.976, 0.980, 0.984, 1.0)
    CARD_BG_DARK = vec4(0.118, 0.161, 0.231, 1.0)
    TEXT_PRIMARY = vec4(0.067, 0.090, 0.125, 1.0)
    TEXT_PRIMARY_DARK = vec4(0.945, 0.961, 0.976, 1.0)
    TEXT_SECONDARY = vec4(0.392, 0.455, 0.545, 1.0)
    TEXT_SECONDARY_DARK = vec4(0.580, 0.639, 0.722, 1.0)
    BORDER = vec4(0.878, 0.906, 0.925, 1.0)
    SLATE_600 = vec4(0.278, 0.337, 0.412, 1.0)
    ACCENT_BLUE = vec4(0.231, 0.510, 0.965, 1.0)

    /// Fixed progress tile
    ProgressTile = <View> {
        width: Fill, height: Fit
        flow: Down
        spacing: 4
        padding: 16
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

        value = <Label> {
            text: ""
            draw_text: {
                instance dark_mode: 0.0
                text_style: { font_size: 20.0 }
                fn get_color(self) -> vec4 {
                    return mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
                }
            }
        }

        caption = <Label> {
            text: ""
            draw_text: {
                instance dark_mode: 0.0
                text_style: { font_size: 10.0 }
                fn get_color(self) -> vec4 {
                    return mix((TEXT_SECONDARY), (TEXT_SECONDARY_DARK), self.dark_mode);
                }
            }
        }
    }

    /// Quick-start topic card
    TopicCard = <View> {
        width: Fill, height: Fit
        flow: Down
        spacing: 4
        padding: 16
        cursor: Hand
        show_bg: true
        draw_bg: {
            instance dark_mode: 0.0
            border_radius: 8.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(0., 0., self.rect_size.x, self.rect_size.y, self.border_radius);
                let bg = mix((CARD_BG), (CARD_BG_DARK), self.dark_mode);
                sdf.fill(bg);
                sdf.stroke((ACCENT_BLUE), 1.0);
                return sdf.result;
            }
        }

        topic = <Label> {
            width: Fill
            text: ""
            draw_text: {
                instance dark_mode: 0.0
                text_style: { font_size: 12.0 }
                wrap: Word
                fn get_color(self) -> vec4 {
                    return mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
                }
            }
        }

        hint = <Label> {
            text: "Start a chat on this topic"
            draw_text: {
                instance dark_mode: 0.0
                text_style: { font_size: 10.0 }
                fn get_color(self) -> vec4 {
                    return mix((TEXT_SECONDARY), (TEXT_SECONDARY_DARK), self.dark_mode);
                }
            }
        }
    }

    pub DashboardScreen = {{DashboardScreen}} {
        width: Fill, height: Fill
        flow: Down
        spacing: 12
        padding: 20

        tiles = <View> {
            width: Fill, height: Fit
            flow: Right
            spacing: 10

            streak_tile = <ProgressTile> {
                value = { text: "7" }
                caption = { text: "Day Streak" }
            }
            words_tile = <ProgressTile> {
                value = { text: "35" }
                caption = { text: "Words Learned" }
            }
            sessions_tile = <ProgressTile> {
                value = { text: "12" }
                caption = { text: "Chat Sessions" }
            }
        }

        topics_title = <Label> {
            margin: {top: 8}
            text: "Quick Start Topics"
            draw_text: {
                instance dark_mode: 0.0
                text_style: { font_size: 16.0 }
                fn get_color(self) -> vec4 {
                    return mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
                }
            }
        }

        topics = <View> {
            width: Fill, height: Fit
            flow: Right
            spacing: 10

            topic0 = <TopicCard> {}
            topic1 = <TopicCard> {}
            topic2 = <TopicCard> {}
        }
    }
}

/// Actions emitted by DashboardScreen
#[derive(Clone, Debug, DefaultNone)]
pub enum DashboardAction {
    None,
    /// A quick-start topic card was clicked
    TopicPicked(String),
}

#[derive(Live, LiveHook, Widget)]
pub struct DashboardScreen {
    #[deref]
    view: View,

    #[rust]
    initialized: bool,
}

impl Widget for DashboardScreen {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        self.view.handle_event(cx, event, scope);

        if !self.initialized {
            self.initialized = true;
            for (index, topic) in QUICK_TOPICS.iter().enumerate() {
                self.topic_card(index).label(ids!(topic)).set_text(cx, topic);
            }
            self.view.redraw(cx);
        }

        for (index, topic) in QUICK_TOPICS.iter().enumerate() {
            if let Hit::FingerUp(fe) = event.hits(cx, self.topic_card(index).area()) {
                if fe.was_tap() {
                    cx.widget_action(
                        self.widget_uid(),
                        &scope.path,
                        DashboardAction::TopicPicked(topic.to_string()),
                    );
                }
            }
        }
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        self.view.draw_walk(cx, scope, walk)
    }
}

impl DashboardScreen {
    fn topic_card(&self, index: usize) -> ViewRef {
        match index {
            0 => self.view.view(ids!(topics.topic0)),
            1 => self.view.view(ids!(topics.topic1)),
            _ => self.view.view(ids!(topics.topic2)),
        }
    }

    /// Apply dark mode to the screen's widgets
    pub fn apply_dark_mode(&mut self, cx: &mut Cx, dark_mode: f64) {
        for tile_id in [
            ids!(tiles.streak_tile),
            ids!(tiles.words_tile),
            ids!(tiles.sessions_tile),
        ] {
            let tile = self.view.view(tile_id);
            tile.apply_over(cx, live! {
                draw_bg: { dark_mode: (dark_mode) }
            });
            tile.label(ids!(value)).apply_over(cx, live! {
                draw_text: { dark_mode: (dark_mode) }
            });
            tile.label(ids!(caption)).apply_over(cx, live! {
                draw_text: { dark_mode: (dark_mode) }
            });
        }

        self.view.label(ids!(topics_title)).apply_over(cx, live! {
            draw_text: { dark_mode: (dark_mode) }
        });

        for index in 0..QUICK_TOPICS.len() {
            let card = self.topic_card(index);
            card.apply_over(cx, live! {
                draw_bg: { dark_mode: (dark_mode) }
            });
            card.label(ids!(topic)).apply_over(cx, live! {
                draw_text: { dark_mode: (dark_mode) }
            });
            card.label(ids!(hint)).apply_over(cx, live! {
                draw_text: { dark_mode: (dark_mode) }
            });
        }

        self.view.redraw(cx);
    }
}

impl DashboardScreenRef {
    /// Apply dark mode
    pub fn apply_dark_mode(&self, cx: &mut Cx, dark_mode: f64) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.apply_dark_mode(cx, dark_mode);
        }
    }

    /// Check if a topic card was clicked, returning the topic text
    pub fn topic_picked(&self, actions: &Actions) -> Option<String> {
        if let DashboardAction::TopicPicked(topic) =
            actions.find_widget_action(self.widget_uid()).cast()
        {
            Some(topic)
        } else {
            None
        }
    }
}
