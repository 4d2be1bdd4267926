//! Pronunciation Practice Screen
//!
//! Fixed display data throughout: the stat tiles, exercise progress fills,
//! and the practice history are presentation-only numbers with no backing
//! computation. The Start buttons are intentional stubs that confirm via a
//! notice dialog.

use makepad_widgets::*;

use fluent_ui::NoticeModalWidgetExt;

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
    SLATE_200 = vec4(0.878, 0.906, 0.925, 1.0)
    ACCENT_BLUE = vec4(0.231, 0.510, 0.965, 1.0)
    GREEN_500 = vec4(0.133, 0.773, 0.373, 1.0)
    AMBER_500 = vec4(0.961, 0.624, 0.043, 1.0)
    ORANGE_500 = vec4(0.976, 0.451, 0.086, 1.0)
    WHITE = vec4(1.0, 1.0, 1.0, 1.0)

    /// Stat tile with a fixed headline number
    StatCard = <View> {
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

    /// Thin progress bar; `progress` is the filled fraction
    ProgressBar = <View> {
        width: Fill, height: 6
        show_bg: true
        draw_bg: {
            instance dark_mode: 0.0
            instance progress: 0.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(0., 0., self.rect_size.x, self.rect_size.y, 3.0);
                sdf.fill(mix((SLATE_200), (SLATE_600), self.dark_mode));
                sdf.box(0., 0., self.rect_size.x * self.progress, self.rect_size.y, 3.0);
                sdf.fill((ACCENT_BLUE));
                return sdf.result;
            }
        }
    }

    /// Start button for an exercise card
    StartButton = <Button> {
        width: Fit, height: 32
        padding: {left: 18, right: 18}
        text: "Start"

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
                let base = (ACCENT_BLUE);
                let hover_color = vec4(0.369, 0.580, 0.976, 1.0);
                sdf.fill(mix(base, hover_color, self.hover));
                return sdf.result;
            }
        }
    }

    /// Exercise row: name, blurb, progress, start button
    ExerciseRow = <View> {
        width: Fill, height: Fit
        flow: Right
        spacing: 16
        padding: 16
        align: {y: 0.5}
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

        details = <View> {
            width: Fill, height: Fit
            flow: Down
            spacing: 6

            name = <Label> {
                text: ""
                draw_text: {
                    instance dark_mode: 0.0
                    text_style: { font_size: 13.0 }
                    fn get_color(self) -> vec4 {
                        return mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
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

            progress = <ProgressBar> {}
        }

        start_btn = <StartButton> {}
    }

    /// Practice history row with a colored result dot
    HistoryRow = <View> {
        width: Fill, height: Fit
        flow: Right
        spacing: 12
        padding: {left: 16, right: 16, top: 10, bottom: 10}
        align: {y: 0.5}

        dot = <View> {
            width: 10, height: 10
            show_bg: true
            draw_bg: {
                instance ok: 1.0
                fn pixel(self) -> vec4 {
                    let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                    let c = self.rect_size * 0.5;
                    sdf.circle(c.x, c.y, 5.0);
                    sdf.fill(mix((AMBER_500), (GREEN_500), self.ok));
                    return sdf.result;
                }
            }
        }

        entry = <View> {
            width: Fill, height: Fit
            flow: Down
            spacing: 2

            name = <Label> {
                text: ""
                draw_text: {
                    instance dark_mode: 0.0
                    text_style: { font_size: 12.0 }
                    fn get_color(self) -> vec4 {
                        return mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
                    }
                }
            }

            detail = <Label> {
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
    }

    pub PronunciationScreen = {{PronunciationScreen}} {
        width: Fill, height: Fill
        flow: Overlay

        scroll = <ScrollYView> {
            width: Fill, height: Fill
            flow: Down
            scroll_bars: <ScrollBars> {
                show_scroll_x: false
                show_scroll_y: true
            }

            content = <View> {
                width: Fill, height: Fit
                flow: Down
                spacing: 12
                padding: 20

                stats = <View> {
                    width: Fill, height: Fit
                    flow: Right
                    spacing: 10

                    score_card = <StatCard> {
                        value = { text: "87%" }
                        caption = { text: "Overall Score" }
                    }
                    sessions_card = <StatCard> {
                        value = { text: "24" }
                        caption = { text: "Sessions Completed" }
                    }
                    trend_card = <StatCard> {
                        value = { text: "+12%" }
                        caption = { text: "This Month" }
                    }
                }

                exercises_title = <Label> {
                    margin: {top: 8}
                    text: "Practice Exercises"
                    draw_text: {
                        instance dark_mode: 0.0
                        text_style: { font_size: 16.0 }
                        fn get_color(self) -> vec4 {
                            return mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
                        }
                    }
                }

                exercises = <View> {
                    width: Fill, height: Fit
                    flow: Down
                    spacing: 10

                    minimal_pairs = <ExerciseRow> {
                        details = {
                            name = { text: "Minimal Pairs" }
                            blurb = { text: "Practice similar sounding words like \"ship\" and \"sheep\"" }
                            progress = { draw_bg: { progress: 0.75 } }
                        }
                    }
                    tongue_twisters = <ExerciseRow> {
                        details = {
                            name = { text: "Tongue Twisters" }
                            blurb = { text: "Improve articulation with fun tongue twisters" }
                            progress = { draw_bg: { progress: 0.6 } }
                        }
                    }
                    sentence_stress = <ExerciseRow> {
                        details = {
                            name = { text: "Sentence Stress" }
                            blurb = { text: "Learn where to place emphasis in sentences" }
                            progress = { draw_bg: { progress: 0.45 } }
                        }
                    }
                }

                history_title = <Label> {
                    margin: {top: 8}
                    text: "Recent Practice"
                    draw_text: {
                        instance dark_mode: 0.0
                        text_style: { font_size: 16.0 }
                        fn get_color(self) -> vec4 {
                            return mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
                        }
                    }
                }

                history = <View> {
                    width: Fill, height: Fit
                    flow: Down
                    spacing: 4
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

                    vowel_sounds = <HistoryRow> {
                        dot = { draw_bg: { ok: 1.0 } }
                        entry = {
                            name = { text: "Vowel Sounds" }
                            detail = { text: "Completed just now - Score: 92%" }
                        }
                    }
                    consonant_clusters = <HistoryRow> {
                        dot = { draw_bg: { ok: 0.0 } }
                        entry = {
                            name = { text: "Consonant Clusters" }
                            detail = { text: "2 hours ago - Score: 78%" }
                        }
                    }
                    intonation = <HistoryRow> {
                        dot = { draw_bg: { ok: 1.0 } }
                        entry = {
                            name = { text: "Intonation Practice" }
                            detail = { text: "Yesterday - Score: 85%" }
                        }
                    }
                }
            }
        }

        notice_modal = <NoticeModal> {}
    }
}

#[derive(Live, LiveHook, Widget)]
pub struct PronunciationScreen {
    #[deref]
    view: View,
}

impl Widget for PronunciationScreen {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        let actions = cx.capture_actions(|cx| self.view.handle_event(cx, event, scope));

        let launchers = [
            (
                ids!(scroll.content.exercises.minimal_pairs.start_btn),
                "Starting Minimal Pairs practice!",
            ),
            (
                ids!(scroll.content.exercises.tongue_twisters.start_btn),
                "Starting Tongue Twisters practice!",
            ),
            (
                ids!(scroll.content.exercises.sentence_stress.start_btn),
                "Starting Sentence Stress practice!",
            ),
        ];

        for (button_id, message) in launchers {
            if self.view.button(button_id).clicked(&actions) {
                self.view
                    .notice_modal(ids!(notice_modal))
                    .show(cx, "Practice", message);
            }
        }
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        self.view.draw_walk(cx, scope, walk)
    }
}

impl PronunciationScreen {
    /// Apply dark mode to the screen's widgets
    pub fn apply_dark_mode(&mut self, cx: &mut Cx, dark_mode: f64) {
        for card_id in [
            ids!(scroll.content.stats.score_card),
            ids!(scroll.content.stats.sessions_card),
            ids!(scroll.content.stats.trend_card),
        ] {
            let card = self.view.view(card_id);
            card.apply_over(cx, live! {
                draw_bg: { dark_mode: (dark_mode) }
            });
            card.label(ids!(value)).apply_over(cx, live! {
                draw_text: { dark_mode: (dark_mode) }
            });
            card.label(ids!(caption)).apply_over(cx, live! {
                draw_text: { dark_mode: (dark_mode) }
            });
        }

        for row_id in [
            ids!(scroll.content.exercises.minimal_pairs),
            ids!(scroll.content.exercises.tongue_twisters),
            ids!(scroll.content.exercises.sentence_stress),
        ] {
            let row = self.view.view(row_id);
            row.apply_over(cx, live! {
                draw_bg: { dark_mode: (dark_mode) }
            });
            row.label(ids!(details.name)).apply_over(cx, live! {
                draw_text: { dark_mode: (dark_mode) }
            });
            row.label(ids!(details.blurb)).apply_over(cx, live! {
                draw_text: { dark_mode: (dark_mode) }
            });
            row.view(ids!(details.progress)).apply_over(cx, live! {
                draw_bg: { dark_mode: (dark_mode) }
            });
        }

        for label_id in [
            ids!(scroll.content.exercises_title),
            ids!(scroll.content.history_title),
        ] {
            self.view.label(label_id).apply_over(cx, live! {
                draw_text: { dark_mode: (dark_mode) }
            });
        }

        let history = self.view.view(ids!(scroll.content.history));
        history.apply_over(cx, live! {
            draw_bg: { dark_mode: (dark_mode) }
        });
        for row_id in [
            ids!(scroll.content.history.vowel_sounds),
            ids!(scroll.content.history.consonant_clusters),
            ids!(scroll.content.history.intonation),
        ] {
            let row = self.view.view(row_id);
            row.label(ids!(entry.name)).apply_over(cx, live! {
                draw_text: { dark_mode: (dark_mode) }
            });
            row.label(ids!(entry.detail)).apply_over(cx, live! {
                draw_text: { dark_mode: (dark_mode) }
            });
        }

        self.view
            .notice_modal(ids!(notice_modal))
            .apply_dark_mode(cx, dark_mode);
        self.view.redraw(cx);
    }
}

impl PronunciationScreenRef {
    /// Apply dark mode
    pub fn apply_dark_mode(&self, cx: &mut Cx, dark_mode: f64) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.apply_dark_mode(cx, dark_mode);
        }
    }
}
