//! Settings Screen - profile, notifications, speech, danger zone
//!
//! Profile fields persist on "Save Changes"; notification toggles and
//! speech settings persist as soon as they change. The danger-zone actions
//! are confirmed stubs: they acknowledge the request and do nothing else.

use makepad_widgets::*;

use fluent_speech_bridge::{VoiceSettings, SPEECH_LOCALE};
use fluent_ui::{ConfirmDialogWidgetExt, FluentAppData, NoticeModalWidgetExt};

use crate::data::{Preferences, NATIVE_LANGUAGES, VOICE_GENDERS};

/// Discrete rate/pitch levels exposed by the dropdowns: 0.5 to 1.5 in 0.1 steps
const VOICE_LEVEL_COUNT: usize = 11;

/// Dropdown index -> rate/pitch value
fn level_from_index(index: usize) -> f32 {
    let index = index.min(VOICE_LEVEL_COUNT - 1);
    ((0.5 + 0.1 * index as f32) * 10.0).round() / 10.0
}

/// Rate/pitch value -> nearest dropdown index
fn index_from_level(level: f32) -> usize {
    let index = ((level - 0.5) / 0.1).round() as i32;
    index.clamp(0, VOICE_LEVEL_COUNT as i32 - 1) as usize
}

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    use fluent_ui::widgets::notice_modal::*;
    use fluent_ui::widgets::confirm_dialog::*;

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
    SLATE_600 = vec4(0.278, 0.337, 0.412, 1.0)
    SLATE_200 = vec4(0.878, 0.906, 0.925, 1.0)
    ACCENT_BLUE = vec4(0.231, 0.510, 0.965, 1.0)
    BLUE_600 = vec4(0.369, 0.580, 0.976, 1.0)
    BLUE_700 = vec4(0.188, 0.420, 0.839, 1.0)
    RED_500 = vec4(0.937, 0.267, 0.267, 1.0)
    RED_600 = vec4(0.863, 0.149, 0.149, 1.0)
    WHITE = vec4(1.0, 1.0, 1.0, 1.0)

    /// Form field caption
    FormLabel = <Label> {
        draw_text: {
            instance dark_mode: 0.0
            text_style: { font_size: 11.0 }
            fn get_color(self) -> vec4 {
                return mix((TEXT_SECONDARY), (TEXT_SECONDARY_DARK), self.dark_mode);
            }
        }
    }

    /// Settings text input with light/dark styling
    SettingsTextInput = <TextInput> {
        width: Fill, height: 40
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
            text_style: { font_size: 12.0 }

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

    /// Settings dropdown with light/dark styling
    SettingsDropDown = <DropDown> {
        width: 200, height: Fit
        padding: {left: 10, right: 10, top: 8, bottom: 8}
        popup_menu_position: BelowInput
        draw_bg: {
            instance dark_mode: 0.0
            border_radius: 6.0
            border_size: 1.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(0., 0., self.rect_size.x, self.rect_size.y, self.border_radius);
                sdf.fill(mix((INPUT_BG), (INPUT_BG_DARK), self.dark_mode));
                sdf.stroke(mix((BORDER), (BORDER_DARK), self.dark_mode), self.border_size);
                return sdf.result;
            }
        }
    }

    /// Two-state switch drawn as a track with a sliding knob
    SettingToggle = <Button> {
        width: 44, height: 24
        text: ""

        draw_bg: {
            instance on: 0.0
            instance dark_mode: 0.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                // Track
                sdf.box(0., 2., self.rect_size.x, self.rect_size.y - 4.0, 10.0);
                let off_track = mix((SLATE_200), (SLATE_600), self.dark_mode);
                sdf.fill(mix(off_track, (ACCENT_BLUE), self.on));
                // Knob
                let knob_x = mix(12.0, self.rect_size.x - 12.0, self.on);
                sdf.circle(knob_x, self.rect_size.y * 0.5, 8.0);
                sdf.fill((WHITE));
                return sdf.result;
            }
        }
    }

    /// One notification row: name, description, toggle
    SettingRow = <View> {
        width: Fill, height: Fit
        flow: Right
        align: {y: 0.5}
        spacing: 12

        info = <View> {
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

            blurb = <Label> {
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

        toggle = <SettingToggle> {}
    }

    /// Primary action button
    PrimaryButton = <Button> {
        width: Fit, height: 38
        padding: {left: 20, right: 20}

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
            text_style: { font_size: 11.0 }
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

    /// Destructive action button
    DangerButton = <Button> {
        width: Fit, height: 38
        padding: {left: 20, right: 20}

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
                sdf.fill(mix((RED_500), (RED_600), self.hover));
                return sdf.result;
            }
        }
    }

    /// Card container for one settings section
    SettingsSection = <View> {
        width: Fill, height: Fit
        flow: Down
        spacing: 12
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

        section_title = <Label> {
            text: ""
            draw_text: {
                instance dark_mode: 0.0
                text_style: { font_size: 14.0 }
                fn get_color(self) -> vec4 {
                    return mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
                }
            }
        }
    }

    pub SettingsScreen = {{SettingsScreen}} {
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
                spacing: 14
                padding: 20

                profile_section = <SettingsSection> {
                    section_title = { text: "Profile Settings" }

                    name_label = <FormLabel> { text: "Full Name" }
                    full_name = <SettingsTextInput> { empty_text: "Enter your full name" }

                    email_label = <FormLabel> { text: "Email Address" }
                    email = <SettingsTextInput> { empty_text: "Enter your email" }

                    language_label = <FormLabel> { text: "Native Language" }
                    language_dropdown = <SettingsDropDown> {
                        labels: ["Hindi", "Tamil", "Telugu", "Bengali", "Marathi", "Gujarati"]
                        selected_item: 0
                    }

                    save_row = <View> {
                        width: Fill, height: Fit
                        margin: {top: 4}
                        save_btn = <PrimaryButton> { text: "Save Changes" }
                    }
                }

                notifications_section = <SettingsSection> {
                    section_title = { text: "Notifications" }

                    daily_row = <SettingRow> {
                        info = {
                            name = { text: "Daily Reminders" }
                            blurb = { text: "Get notified to practice daily" }
                        }
                    }
                    reports_row = <SettingRow> {
                        info = {
                            name = { text: "Progress Reports" }
                            blurb = { text: "Weekly progress updates" }
                        }
                    }
                    features_row = <SettingRow> {
                        info = {
                            name = { text: "New Features" }
                            blurb = { text: "Notifications about new features" }
                        }
                    }
                }

                speech_section = <SettingsSection> {
                    section_title = { text: "Speech Settings" }

                    speed_label = <FormLabel> { text: "AI Voice Speed" }
                    speed_dropdown = <SettingsDropDown> {
                        labels: ["0.5", "0.6", "0.7", "0.8", "0.9", "1.0", "1.1", "1.2", "1.3", "1.4", "1.5"]
                        selected_item: 4
                    }

                    pitch_label = <FormLabel> { text: "AI Voice Pitch" }
                    pitch_dropdown = <SettingsDropDown> {
                        labels: ["0.5", "0.6", "0.7", "0.8", "0.9", "1.0", "1.1", "1.2", "1.3", "1.4", "1.5"]
                        selected_item: 5
                    }

                    gender_label = <FormLabel> { text: "Voice Gender" }
                    gender_dropdown = <SettingsDropDown> {
                        labels: ["Female", "Male"]
                        selected_item: 0
                    }

                    test_row = <View> {
                        width: Fill, height: Fit
                        margin: {top: 4}
                        test_voice_btn = <PrimaryButton> { text: "Test Voice" }
                    }
                }

                danger_section = <SettingsSection> {
                    section_title = { text: "Danger Zone" }

                    delete_row = <View> {
                        width: Fill, height: Fit
                        flow: Right
                        align: {y: 0.5}
                        spacing: 12

                        info = <View> {
                            width: Fill, height: Fit
                            flow: Down
                            spacing: 2

                            name = <Label> {
                                text: "Delete Account"
                                draw_text: {
                                    instance dark_mode: 0.0
                                    text_style: { font_size: 12.0 }
                                    fn get_color(self) -> vec4 {
                                        return mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
                                    }
                                }
                            }
                            blurb = <Label> {
                                text: "Permanently delete your account and all data"
                                draw_text: {
                                    instance dark_mode: 0.0
                                    text_style: { font_size: 10.0 }
                                    fn get_color(self) -> vec4 {
                                        return mix((TEXT_SECONDARY), (TEXT_SECONDARY_DARK), self.dark_mode);
                                    }
                                }
                            }
                        }

                        delete_btn = <DangerButton> { text: "Delete Account" }
                    }

                    reset_row = <View> {
                        width: Fill, height: Fit
                        flow: Right
                        align: {y: 0.5}
                        spacing: 12

                        info = <View> {
                            width: Fill, height: Fit
                            flow: Down
                            spacing: 2

                            name = <Label> {
                                text: "Reset Progress"
                                draw_text: {
                                    instance dark_mode: 0.0
                                    text_style: { font_size: 12.0 }
                                    fn get_color(self) -> vec4 {
                                        return mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
                                    }
                                }
                            }
                            blurb = <Label> {
                                text: "Reset all your learning progress"
                                draw_text: {
                                    instance dark_mode: 0.0
                                    text_style: { font_size: 10.0 }
                                    fn get_color(self) -> vec4 {
                                        return mix((TEXT_SECONDARY), (TEXT_SECONDARY_DARK), self.dark_mode);
                                    }
                                }
                            }
                        }

                        reset_btn = <DangerButton> { text: "Reset Progress" }
                    }
                }
            }
        }

        notice_modal = <NoticeModal> {}
        confirm_dialog = <ConfirmDialog> {}
    }
}

#[derive(Live, LiveHook, Widget)]
pub struct SettingsScreen {
    #[deref]
    view: View,

    #[rust]
    preferences: Option<Preferences>,
}

impl Widget for SettingsScreen {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        let actions = cx.capture_actions(|cx| self.view.handle_event(cx, event, scope));

        if self.preferences.is_none() {
            let prefs = Preferences::load();
            self.populate_controls(cx, &prefs);
            self.preferences = Some(prefs);
        }

        // Profile save
        if self
            .view
            .button(ids!(scroll.content.profile_section.save_row.save_btn))
            .clicked(&actions)
        {
            self.save_profile(cx);
        }

        // Language selection
        if let Some(index) = self
            .view
            .drop_down(ids!(scroll.content.profile_section.language_dropdown))
            .selected(&actions)
        {
            if let Some(prefs) = self.preferences.as_mut() {
                if let Some((value, _)) = NATIVE_LANGUAGES.get(index) {
                    prefs.native_language = value.to_string();
                }
            }
        }

        // Notification toggles: flip, redraw, persist
        self.handle_toggles(cx, &actions);

        // Speech settings
        self.handle_speech_controls(cx, &actions);

        // Test voice
        if self
            .view
            .button(ids!(scroll.content.speech_section.test_row.test_voice_btn))
            .clicked(&actions)
        {
            self.test_voice(scope);
        }

        // Danger zone
        if self
            .view
            .button(ids!(scroll.content.danger_section.delete_row.delete_btn))
            .clicked(&actions)
        {
            self.view.confirm_dialog(ids!(confirm_dialog)).open(
                cx,
                "delete_account",
                "Delete Account",
                "Are you sure you want to delete your account? This action cannot be undone.",
            );
        }
        if self
            .view
            .button(ids!(scroll.content.danger_section.reset_row.reset_btn))
            .clicked(&actions)
        {
            self.view.confirm_dialog(ids!(confirm_dialog)).open(
                cx,
                "reset_progress",
                "Reset Progress",
                "Are you sure you want to reset all your progress? This cannot be undone.",
            );
        }

        if let Some(tag) = self.view.confirm_dialog(ids!(confirm_dialog)).confirmed(&actions) {
            let message = match tag.as_str() {
                "delete_account" => {
                    "Account deletion requested. This feature would be implemented in a real application."
                }
                "reset_progress" => {
                    "Progress reset requested. This feature would be implemented in a real application."
                }
                _ => return,
            };
            self.view
                .notice_modal(ids!(notice_modal))
                .show(cx, "Requested", message);
        }
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        self.view.draw_walk(cx, scope, walk)
    }
}

impl SettingsScreen {
    /// Push loaded preferences into the form controls
    fn populate_controls(&mut self, cx: &mut Cx, prefs: &Preferences) {
        self.view
            .text_input(ids!(scroll.content.profile_section.full_name))
            .set_text(cx, &prefs.full_name);
        self.view
            .text_input(ids!(scroll.content.profile_section.email))
            .set_text(cx, &prefs.email);

        let language_index = NATIVE_LANGUAGES
            .iter()
            .position(|(value, _)| *value == prefs.native_language)
            .unwrap_or(0);
        self.view
            .drop_down(ids!(scroll.content.profile_section.language_dropdown))
            .set_selected_item(cx, language_index);

        self.apply_toggle(cx, ToggleKind::DailyReminders, prefs.daily_reminders);
        self.apply_toggle(cx, ToggleKind::ProgressReports, prefs.progress_reports);
        self.apply_toggle(cx, ToggleKind::FeatureUpdates, prefs.feature_updates);

        self.view
            .drop_down(ids!(scroll.content.speech_section.speed_dropdown))
            .set_selected_item(cx, index_from_level(prefs.voice.rate));
        self.view
            .drop_down(ids!(scroll.content.speech_section.pitch_dropdown))
            .set_selected_item(cx, index_from_level(prefs.voice.pitch));

        let gender_index = VOICE_GENDERS
            .iter()
            .position(|(value, _)| *value == prefs.voice_gender)
            .unwrap_or(0);
        self.view
            .drop_down(ids!(scroll.content.speech_section.gender_dropdown))
            .set_selected_item(cx, gender_index);

        self.view.redraw(cx);
    }

    fn handle_toggles(&mut self, cx: &mut Cx, actions: &Actions) {
        let toggles = [
            (ToggleKind::DailyReminders, ids!(scroll.content.notifications_section.daily_row.toggle)),
            (ToggleKind::ProgressReports, ids!(scroll.content.notifications_section.reports_row.toggle)),
            (ToggleKind::FeatureUpdates, ids!(scroll.content.notifications_section.features_row.toggle)),
        ];

        for (kind, toggle_id) in toggles {
            if self.view.button(toggle_id).clicked(actions) {
                let new_value = {
                    let Some(prefs) = self.preferences.as_mut() else { return };
                    let field = match kind {
                        ToggleKind::DailyReminders => &mut prefs.daily_reminders,
                        ToggleKind::ProgressReports => &mut prefs.progress_reports,
                        ToggleKind::FeatureUpdates => &mut prefs.feature_updates,
                    };
                    *field = !*field;
                    *field
                };
                self.apply_toggle(cx, kind, new_value);
                self.persist(cx);
            }
        }
    }

    fn handle_speech_controls(&mut self, cx: &mut Cx, actions: &Actions) {
        let mut changed = false;

        if let Some(index) = self
            .view
            .drop_down(ids!(scroll.content.speech_section.speed_dropdown))
            .selected(actions)
        {
            if let Some(prefs) = self.preferences.as_mut() {
                prefs.voice.rate = level_from_index(index);
                changed = true;
            }
        }
        if let Some(index) = self
            .view
            .drop_down(ids!(scroll.content.speech_section.pitch_dropdown))
            .selected(actions)
        {
            if let Some(prefs) = self.preferences.as_mut() {
                prefs.voice.pitch = level_from_index(index);
                changed = true;
            }
        }
        if let Some(index) = self
            .view
            .drop_down(ids!(scroll.content.speech_section.gender_dropdown))
            .selected(actions)
        {
            if let Some(prefs) = self.preferences.as_mut() {
                if let Some((value, _)) = VOICE_GENDERS.get(index) {
                    prefs.voice_gender = value.to_string();
                    changed = true;
                }
            }
        }

        if changed {
            self.persist(cx);
        }
    }

    fn apply_toggle(&mut self, cx: &mut Cx, kind: ToggleKind, on: bool) {
        let toggle_id = match kind {
            ToggleKind::DailyReminders => ids!(scroll.content.notifications_section.daily_row.toggle),
            ToggleKind::ProgressReports => ids!(scroll.content.notifications_section.reports_row.toggle),
            ToggleKind::FeatureUpdates => ids!(scroll.content.notifications_section.features_row.toggle),
        };
        let value = if on { 1.0 } else { 0.0 };
        self.view.button(toggle_id).apply_over(cx, live! {
            draw_bg: { on: (value) }
        });
        self.view.redraw(cx);
    }

    /// Read form fields, persist, and confirm via notice
    fn save_profile(&mut self, cx: &mut Cx) {
        let full_name = self
            .view
            .text_input(ids!(scroll.content.profile_section.full_name))
            .text();
        let email = self
            .view
            .text_input(ids!(scroll.content.profile_section.email))
            .text();

        let message = {
            let Some(prefs) = self.preferences.as_mut() else { return };
            prefs.full_name = full_name;
            prefs.email = email;
            format!(
                "Profile saved!\nName: {}\nEmail: {}\nNative Language: {}",
                prefs.full_name, prefs.email, prefs.native_language
            )
        };

        self.persist(cx);
        self.view
            .notice_modal(ids!(notice_modal))
            .show(cx, "Profile", &message);
    }

    /// Vocalize a settings summary with the current (clamped) voice values
    fn test_voice(&mut self, scope: &mut Scope) {
        let Some(prefs) = self.preferences.as_ref() else { return };

        let settings = VoiceSettings {
            locale: SPEECH_LOCALE.to_string(),
            rate: prefs.voice.rate,
            pitch: prefs.voice.pitch,
        }
        .clamped();

        let message = format!(
            "This is a test of the voice settings. Speed: {:.1}, Pitch: {:.1}, Gender: {}.",
            settings.rate, settings.pitch, prefs.voice_gender
        );

        // Fire-and-forget; silently skipped when synthesis is absent
        if let Some(data) = scope.data.get_mut::<FluentAppData>() {
            if let Err(err) = data.speech_mut().speak(&message, &settings, true) {
                log::error!("Voice test failed: {err}");
            }
        }
    }

    /// Save preferences, logging on failure and carrying on
    fn persist(&mut self, _cx: &mut Cx) {
        if let Some(prefs) = self.preferences.as_ref() {
            if let Err(err) = prefs.save() {
                log::error!("Failed to save preferences: {err}");
            }
        }
    }

    /// Apply dark mode to the screen's widgets
    pub fn apply_dark_mode(&mut self, cx: &mut Cx, dark_mode: f64) {
        for section_id in [
            ids!(scroll.content.profile_section),
            ids!(scroll.content.notifications_section),
            ids!(scroll.content.speech_section),
            ids!(scroll.content.danger_section),
        ] {
            let section = self.view.view(section_id);
            section.apply_over(cx, live! {
                draw_bg: { dark_mode: (dark_mode) }
            });
            section.label(ids!(section_title)).apply_over(cx, live! {
                draw_text: { dark_mode: (dark_mode) }
            });
        }

        for input_id in [
            ids!(scroll.content.profile_section.full_name),
            ids!(scroll.content.profile_section.email),
        ] {
            self.view.text_input(input_id).apply_over(cx, live! {
                draw_bg: { dark_mode: (dark_mode) }
                draw_text: { dark_mode: (dark_mode) }
            });
        }

        for dropdown_id in [
            ids!(scroll.content.profile_section.language_dropdown),
            ids!(scroll.content.speech_section.speed_dropdown),
            ids!(scroll.content.speech_section.pitch_dropdown),
            ids!(scroll.content.speech_section.gender_dropdown),
        ] {
            self.view.drop_down(dropdown_id).apply_over(cx, live! {
                draw_bg: { dark_mode: (dark_mode) }
            });
        }

        self.view
            .notice_modal(ids!(notice_modal))
            .apply_dark_mode(cx, dark_mode);
        self.view
            .confirm_dialog(ids!(confirm_dialog))
            .apply_dark_mode(cx, dark_mode);
        self.view.redraw(cx);
    }
}

/// Which notification toggle a control event refers to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ToggleKind {
    DailyReminders,
    ProgressReports,
    FeatureUpdates,
}

impl SettingsScreenRef {
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
    fn test_level_index_mapping() {
        assert_eq!(level_from_index(0), 0.5);
        assert_eq!(level_from_index(4), 0.9);
        assert_eq!(level_from_index(5), 1.0);
        assert_eq!(level_from_index(10), 1.5);
        // Out-of-range index saturates
        assert_eq!(level_from_index(99), 1.5);
    }

    #[test]
    fn test_index_from_level_roundtrip() {
        for index in 0..VOICE_LEVEL_COUNT {
            assert_eq!(index_from_level(level_from_index(index)), index);
        }
        // Values outside the slider range clamp to the ends
        assert_eq!(index_from_level(0.1), 0);
        assert_eq!(index_from_level(3.0), VOICE_LEVEL_COUNT - 1);
    }
}
