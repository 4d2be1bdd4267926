//! Vocabulary Builder Screen
//!
//! Word cards from the fixed daily list plus the practice exercise
//! launchers. Every exercise action is an intentional stub: it confirms via
//! a notice dialog and does nothing else. The Practice button on a word
//! card vocalizes a practice phrase when synthesis is available.

use makepad_widgets::*;

use fluent_speech_bridge::VoiceSettings;
use fluent_ui::{FluentAppData, NoticeModalWidgetExt};

use crate::words::{practice_phrase, VOCABULARY};

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
    BLUE_100 = vec4(0.859, 0.906, 0.996, 1.0)
    BLUE_900 = vec4(0.118, 0.161, 0.353, 1.0)
    WHITE = vec4(1.0, 1.0, 1.0, 1.0)

    /// Small outlined action button on a word card
    CardActionButton = <Button> {
        width: Fit, height: 30
        padding: {left: 12, right: 12}

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
            text_style: { font_size: 10.0 }
            fn get_color(self) -> vec4 {
                return (ACCENT_BLUE);
            }
        }

        draw_bg: {
            instance hover: 0.0
            instance dark_mode: 0.0
            border_radius: 6.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(0., 0., self.rect_size.x, self.rect_size.y, self.border_radius);
                let light = mix((CARD_BG), (BLUE_100), self.hover);
                let dark = mix((CARD_BG_DARK), (BLUE_900), self.hover);
                sdf.fill(mix(light, dark, self.dark_mode));
                sdf.stroke((ACCENT_BLUE), 1.0);
                return sdf.result;
            }
        }
    }

    /// One word card: word, level badge, meaning, actions
    WordCard = <View> {
        width: Fill, height: Fit
        flow: Down
        spacing: 8
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
                let border = mix((BORDER), (SLATE_600), self.dark_mode);
                sdf.fill(bg);
                sdf.stroke(border, 1.0);
                return sdf.result;
            }
        }

        word_header = <View> {
            width: Fill, height: Fit
            flow: Right
            align: {y: 0.5}

            word = <Label> {
                text: ""
                draw_text: {
                    instance dark_mode: 0.0
                    text_style: { font_size: 16.0 }
                    fn get_color(self) -> vec4 {
                        return mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
                    }
                }
            }

            <Filler> {}

            level = <View> {
                width: Fit, height: Fit
                padding: {left: 10, right: 10, top: 4, bottom: 4}
                show_bg: true
                draw_bg: {
                    instance dark_mode: 0.0
                    fn pixel(self) -> vec4 {
                        let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                        sdf.box(0., 0., self.rect_size.x, self.rect_size.y, 9.0);
                        sdf.fill(mix((BLUE_100), (BLUE_900), self.dark_mode));
                        return sdf.result;
                    }
                }

                level_text = <Label> {
                    text: "Intermediate"
                    draw_text: {
                        text_style: { font_size: 9.0 }
                        fn get_color(self) -> vec4 {
                            return (ACCENT_BLUE);
                        }
                    }
                }
            }
        }

        meaning = <Label> {
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

        actions = <View> {
            width: Fill, height: Fit
            flow: Right
            spacing: 8

            practice_btn = <CardActionButton> { text: "Practice" }
            save_btn = <CardActionButton> { text: "Save" }
        }
    }

    /// Practice exercise launcher card
    ExerciseCard = <View> {
        width: Fill, height: Fit
        flow: Down
        spacing: 6
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

        badge = <Label> {
            text: ""
            draw_text: {
                text_style: { font_size: 9.0 }
                fn get_color(self) -> vec4 {
                    return (ACCENT_BLUE);
                }
            }
        }
    }

    pub VocabularyScreen = {{VocabularyScreen}} {
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

                section_title = <Label> {
                    text: "Today's Words"
                    draw_text: {
                        instance dark_mode: 0.0
                        text_style: { font_size: 16.0 }
                        fn get_color(self) -> vec4 {
                            return mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
                        }
                    }
                }

                section_blurb = <Label> {
                    text: "Learn 5 new words every day"
                    draw_text: {
                        instance dark_mode: 0.0
                        text_style: { font_size: 11.0 }
                        fn get_color(self) -> vec4 {
                            return mix((TEXT_SECONDARY), (TEXT_SECONDARY_DARK), self.dark_mode);
                        }
                    }
                }

                cards = <View> {
                    width: Fill, height: Fit
                    flow: Down
                    spacing: 10

                    word0 = <WordCard> {}
                    word1 = <WordCard> {}
                    word2 = <WordCard> {}
                    word3 = <WordCard> {}
                    word4 = <WordCard> {}
                }

                practice_title = <Label> {
                    margin: {top: 12}
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
                    flow: Right
                    spacing: 10

                    flashcards_card = <ExerciseCard> {
                        name = { text: "Flashcards" }
                        blurb = { text: "Review saved words with flashcards" }
                        badge = { text: "42 cards" }
                    }
                    quiz_card = <ExerciseCard> {
                        name = { text: "Quiz" }
                        blurb = { text: "Test your vocabulary knowledge" }
                        badge = { text: "10 questions" }
                    }
                    sentences_card = <ExerciseCard> {
                        name = { text: "Sentences" }
                        blurb = { text: "Practice using words in sentences" }
                        badge = { text: "New" }
                    }
                }
            }
        }

        notice_modal = <NoticeModal> {}
    }
}

#[derive(Live, LiveHook, Widget)]
pub struct VocabularyScreen {
    #[deref]
    view: View,

    #[rust]
    initialized: bool,
}

impl Widget for VocabularyScreen {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        let actions = cx.capture_actions(|cx| self.view.handle_event(cx, event, scope));

        if !self.initialized {
            self.initialized = true;
            self.populate_cards(cx);
        }

        // Per-card Practice / Save buttons
        for index in 0..VOCABULARY.len() {
            if self.practice_button(index).clicked(&actions) {
                self.practice_word(scope, index);
            }
            if self.save_button(index).clicked(&actions) {
                let word = VOCABULARY[index].word;
                self.view.notice_modal(ids!(notice_modal)).show(
                    cx,
                    "Flashcards",
                    &format!("\"{word}\" has been added to your flashcards!"),
                );
            }
        }

        // Card body click: word detail stub
        for index in 0..VOCABULARY.len() {
            let card = self.word_card(index);
            if let Hit::FingerUp(fe) = event.hits(cx, card.area()) {
                if fe.was_tap() {
                    self.view.notice_modal(ids!(notice_modal)).show(
                        cx,
                        VOCABULARY[index].word,
                        &format!("Word details for word #{}", index + 1),
                    );
                }
            }
        }

        // Exercise launcher stubs
        let launchers = [
            (ids!(scroll.content.exercises.flashcards_card), "Starting flashcards practice!"),
            (ids!(scroll.content.exercises.quiz_card), "Starting vocabulary quiz!"),
            (ids!(scroll.content.exercises.sentences_card), "Starting sentence practice!"),
        ];
        for (card_id, message) in launchers {
            if let Hit::FingerUp(fe) = event.hits(cx, self.view.view(card_id).area()) {
                if fe.was_tap() {
                    self.view
                        .notice_modal(ids!(notice_modal))
                        .show(cx, "Practice", message);
                }
            }
        }
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        self.view.draw_walk(cx, scope, walk)
    }
}

impl VocabularyScreen {
    fn word_card(&self, index: usize) -> ViewRef {
        match index {
            0 => self.view.view(ids!(scroll.content.cards.word0)),
            1 => self.view.view(ids!(scroll.content.cards.word1)),
            2 => self.view.view(ids!(scroll.content.cards.word2)),
            3 => self.view.view(ids!(scroll.content.cards.word3)),
            _ => self.view.view(ids!(scroll.content.cards.word4)),
        }
    }

    fn practice_button(&self, index: usize) -> ButtonRef {
        match index {
            0 => self.view.button(ids!(scroll.content.cards.word0.actions.practice_btn)),
            1 => self.view.button(ids!(scroll.content.cards.word1.actions.practice_btn)),
            2 => self.view.button(ids!(scroll.content.cards.word2.actions.practice_btn)),
            3 => self.view.button(ids!(scroll.content.cards.word3.actions.practice_btn)),
            _ => self.view.button(ids!(scroll.content.cards.word4.actions.practice_btn)),
        }
    }

    fn save_button(&self, index: usize) -> ButtonRef {
        match index {
            0 => self.view.button(ids!(scroll.content.cards.word0.actions.save_btn)),
            1 => self.view.button(ids!(scroll.content.cards.word1.actions.save_btn)),
            2 => self.view.button(ids!(scroll.content.cards.word2.actions.save_btn)),
            3 => self.view.button(ids!(scroll.content.cards.word3.actions.save_btn)),
            _ => self.view.button(ids!(scroll.content.cards.word4.actions.save_btn)),
        }
    }

    /// Fill the fixed word cards from the literal list
    fn populate_cards(&mut self, cx: &mut Cx) {
        for (index, entry) in VOCABULARY.iter().enumerate() {
            let card = self.word_card(index);
            card.label(ids!(word_header.word)).set_text(cx, entry.word);
            card.label(ids!(meaning)).set_text(cx, entry.meaning);
        }
        self.view.redraw(cx);
    }

    /// Vocalize the practice phrase for the card's word
    fn practice_word(&mut self, scope: &mut Scope, index: usize) {
        let phrase = practice_phrase(VOCABULARY[index].word);
        if let Some(data) = scope.data.get_mut::<FluentAppData>() {
            if let Err(err) = data.speech_mut().speak(&phrase, &VoiceSettings::default(), true) {
                log::error!("Failed to vocalize practice phrase: {err}");
            }
        }
    }

    /// Apply dark mode to the screen's widgets
    pub fn apply_dark_mode(&mut self, cx: &mut Cx, dark_mode: f64) {
        for label_id in [
            ids!(scroll.content.section_title),
            ids!(scroll.content.section_blurb),
            ids!(scroll.content.practice_title),
        ] {
            self.view.label(label_id).apply_over(cx, live! {
                draw_text: { dark_mode: (dark_mode) }
            });
        }

        for index in 0..VOCABULARY.len() {
            let card = self.word_card(index);
            card.apply_over(cx, live! {
                draw_bg: { dark_mode: (dark_mode) }
            });
            card.label(ids!(word_header.word)).apply_over(cx, live! {
                draw_text: { dark_mode: (dark_mode) }
            });
            card.label(ids!(meaning)).apply_over(cx, live! {
                draw_text: { dark_mode: (dark_mode) }
            });
        }

        for card_id in [
            ids!(scroll.content.exercises.flashcards_card),
            ids!(scroll.content.exercises.quiz_card),
            ids!(scroll.content.exercises.sentences_card),
        ] {
            let card = self.view.view(card_id);
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

impl VocabularyScreenRef {
    /// Apply dark mode
    pub fn apply_dark_mode(&self, cx: &mut Cx, dark_mode: f64) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.apply_dark_mode(cx, dark_mode);
        }
    }
}
