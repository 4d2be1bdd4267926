//! Root application: window, login gate, and page routing
//!
//! One window, one login page, and the shell (sidebar + header + page
//! stack + status bar). Every page widget exists from startup; navigation
//! only toggles visibility, so pending chat-reply timers keep delivering
//! into the hidden chat screen.

use std::time::Instant;

use makepad_widgets::*;
use parking_lot::Mutex;

use fluent_chat::{ChatScreenWidgetRefExt, FluentChatApp};
use fluent_pronunciation::{FluentPronunciationApp, PronunciationScreenWidgetRefExt};
use fluent_settings::{FluentSettingsApp, Preferences, SettingsScreenWidgetRefExt};
use fluent_studio_shell::widgets::{
    DashboardScreenWidgetRefExt, LoginPageWidgetRefExt, SubscriptionScreenWidgetRefExt,
};
use fluent_studio_shell::Session;
use fluent_ui::{
    FluentAppData, ShellHeaderWidgetExt, ShellSidebarWidgetExt, StatusBarWidgetExt,
    THEME_TRANSITION_DURATION,
};
use fluent_vocabulary::{FluentVocabularyApp, VocabularyScreenWidgetRefExt};
use fluent_widgets::{AppRegistry, FluentApp, PageId, PageRouter};

use crate::cli::Args;

/// CLI arguments stashed before the UI event loop starts
static CLI_ARGS: Mutex<Option<Args>> = Mutex::new(None);

/// Store parsed CLI arguments for the app to pick up at startup
pub fn set_cli_args(args: Args) {
    *CLI_ARGS.lock() = Some(args);
}

fn cli_args() -> Args {
    CLI_ARGS.lock().clone().unwrap_or_default()
}

/// Speech status poll interval, in seconds
const STATUS_POLL_INTERVAL: f64 = 0.2;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    use fluent_ui::shell::header::*;
    use fluent_ui::shell::sidebar::*;
    use fluent_ui::shell::status_bar::*;
    use fluent_chat::screen::*;
    use fluent_vocabulary::screen::*;
    use fluent_pronunciation::screen::*;
    use fluent_settings::screen::*;
    use fluent_studio_shell::widgets::login_page::*;
    use fluent_studio_shell::widgets::dashboard::*;
    use fluent_studio_shell::widgets::subscription::*;

    DARK_BG = vec4(0.933, 0.941, 0.953, 1.0)
    DARK_BG_DARK = vec4(0.067, 0.090, 0.125, 1.0)

    App = {{App}} {
        ui: <Window> {
            window: {inner_size: vec2(1400, 900), title: "Fluent Studio"}

            body = <View> {
                width: Fill, height: Fill
                flow: Overlay
                show_bg: true
                draw_bg: {
                    instance dark_mode: 0.0
                    fn pixel(self) -> vec4 {
                        return mix((DARK_BG), (DARK_BG_DARK), self.dark_mode);
                    }
                }

                // Shell: hidden until a session exists
                main = <View> {
                    width: Fill, height: Fill
                    visible: false
                    flow: Right

                    sidebar = <ShellSidebar> {}

                    right_column = <View> {
                        width: Fill, height: Fill
                        flow: Down

                        header = <ShellHeader> {}

                        pages = <View> {
                            width: Fill, height: Fill
                            flow: Overlay

                            dashboard_page = <View> {
                                width: Fill, height: Fill
                                dashboard = <DashboardScreen> {}
                            }
                            chat_page = <View> {
                                width: Fill, height: Fill
                                visible: false
                                chat = <ChatScreen> {}
                            }
                            vocabulary_page = <View> {
                                width: Fill, height: Fill
                                visible: false
                                vocabulary = <VocabularyScreen> {}
                            }
                            pronunciation_page = <View> {
                                width: Fill, height: Fill
                                visible: false
                                pronunciation = <PronunciationScreen> {}
                            }
                            subscription_page = <View> {
                                width: Fill, height: Fill
                                visible: false
                                subscription = <SubscriptionScreen> {}
                            }
                            settings_page = <View> {
                                width: Fill, height: Fill
                                visible: false
                                settings = <SettingsScreen> {}
                            }
                        }

                        status_bar = <StatusBar> {}
                    }
                }

                // Login gate, on top until dismissed
                login_gate = <View> {
                    width: Fill, height: Fill
                    login = <LoginPage> {}
                }
            }
        }
    }
}

#[derive(Live)]
pub struct App {
    #[live]
    ui: WidgetRef,

    /// Shared state injected into every widget through the scope
    #[rust]
    app_data: FluentAppData,

    /// Page visibility and title routing
    #[rust]
    router: PageRouter,

    /// Installed app metadata
    #[rust]
    app_registry: AppRegistry,

    /// Persisted login session
    #[rust]
    session: Session,

    #[rust]
    initialized: bool,

    /// Speech status poll timer
    #[rust]
    status_timer: Timer,

    /// Theme transition start, while animating
    #[rust]
    theme_anim_start: Option<Instant>,
}

impl LiveHook for App {
    fn after_new_from_doc(&mut self, _cx: &mut Cx) {
        self.router = PageRouter::new();
        self.app_registry.register(FluentChatApp::info());
        self.app_registry.register(FluentVocabularyApp::info());
        self.app_registry.register(FluentPronunciationApp::info());
        self.app_registry.register(FluentSettingsApp::info());
        log::debug!("Registered {} apps", self.app_registry.len());
    }
}

impl LiveRegister for App {
    fn live_register(cx: &mut Cx) {
        makepad_widgets::live_design(cx);
        fluent_widgets::live_design(cx);
        fluent_ui::live_design(cx);
        <FluentChatApp as FluentApp>::live_design(cx);
        <FluentVocabularyApp as FluentApp>::live_design(cx);
        <FluentPronunciationApp as FluentApp>::live_design(cx);
        <FluentSettingsApp as FluentApp>::live_design(cx);
        fluent_studio_shell::widgets::live_design(cx);
    }
}

impl AppMain for App {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event) {
        if !self.initialized {
            self.initialized = true;
            self.startup(cx);
        }

        if self.status_timer.is_event(event).is_some() {
            self.poll_speech_status(cx);
        }

        if let Event::NextFrame(_) = event {
            self.step_theme_animation(cx);
        }

        self.ui
            .handle_event(cx, event, &mut Scope::with_data(&mut self.app_data));

        if let Event::Actions(actions) = event {
            self.handle_actions(cx, actions);
        }
    }
}

impl App {
    /// First-event setup: session restore, theme, speech status polling
    fn startup(&mut self, cx: &mut Cx) {
        let args = cli_args();
        let preferences = Preferences::load();

        self.status_timer = cx.start_interval(STATUS_POLL_INTERVAL);

        // CLI flag wins over the saved preference
        let dark = args.dark_mode || preferences.dark_mode;
        self.app_data.theme_mut().set_dark_mode(dark);
        self.ui.shell_header(ids!(header)).set_dark_mode(cx, dark);
        self.apply_theme(cx, self.app_data.dark_mode_value());

        // A persisted session skips the login page
        self.session = Session::load();
        if self.session.logged_in {
            log::info!("Restoring session for {}", self.session.display_name);
            self.enter_shell(cx);
        }

        self.poll_speech_status(cx);
    }

    fn handle_actions(&mut self, cx: &mut Cx, actions: &Actions) {
        // Login
        if let Some(email) = self.ui.login_page(ids!(login_gate.login)).login_submitted(actions) {
            self.login(cx, &email);
        }

        // Header: logout and theme
        if self.ui.shell_header(ids!(header)).logout_clicked(actions) {
            self.logout(cx);
        }
        if self.ui.shell_header(ids!(header)).theme_toggled(actions) {
            self.toggle_theme(cx);
        }

        // Sidebar navigation
        if let Some(page) = self.router.check_tab_click(actions) {
            self.router.show_page(page.id());
            self.apply_routing(cx);
        }

        // Dashboard quick-start topics route into the chat screen
        if let Some(topic) = self
            .ui
            .dashboard_screen(ids!(pages.dashboard_page.dashboard))
            .topic_picked(actions)
        {
            self.router.navigate_to(PageId::Chat);
            self.apply_routing(cx);
            self.ui
                .chat_screen(ids!(pages.chat_page.chat))
                .start_topic(cx, &topic);
        }
    }

    /// Create and persist the session, then reveal the shell
    fn login(&mut self, cx: &mut Cx, email: &str) {
        self.session = Session::login(email);
        if let Err(err) = self.session.save() {
            log::error!("Failed to persist session: {err}");
        }
        log::info!("Logged in as {}", self.session.display_name);
        self.enter_shell(cx);
    }

    /// Clear the session and fall back to the login page
    fn logout(&mut self, cx: &mut Cx) {
        if let Err(err) = Session::clear() {
            log::error!("Failed to remove session file: {err}");
        }
        self.session = Session::default();

        self.ui.chat_screen(ids!(pages.chat_page.chat)).clear_session(cx);
        self.ui.login_page(ids!(login_gate.login)).reset(cx);

        self.router = PageRouter::new();
        self.apply_routing(cx);

        self.ui.view(ids!(main)).set_visible(cx, false);
        self.ui.view(ids!(login_gate)).set_visible(cx, true);
        self.ui.redraw(cx);
    }

    /// Reveal the shell on the dashboard for the current session
    fn enter_shell(&mut self, cx: &mut Cx) {
        self.ui
            .shell_header(ids!(header))
            .set_user(cx, &self.session.display_name);

        self.router.navigate_to(PageId::Dashboard);
        self.apply_routing(cx);

        self.ui.view(ids!(login_gate)).set_visible(cx, false);
        self.ui.view(ids!(main)).set_visible(cx, true);
        self.ui.redraw(cx);
    }

    fn page_wrapper(&self, page: PageId) -> ViewRef {
        match page {
            PageId::Dashboard => self.ui.view(ids!(pages.dashboard_page)),
            PageId::Chat => self.ui.view(ids!(pages.chat_page)),
            PageId::Vocabulary => self.ui.view(ids!(pages.vocabulary_page)),
            PageId::Pronunciation => self.ui.view(ids!(pages.pronunciation_page)),
            PageId::Subscription => self.ui.view(ids!(pages.subscription_page)),
            PageId::Settings => self.ui.view(ids!(pages.settings_page)),
        }
    }

    /// Apply the router outcome: page visibility, header titles, sidebar
    /// marker. With no current page everything stays hidden and the header
    /// keeps its previous text.
    fn apply_routing(&mut self, cx: &mut Cx) {
        for page in self.router.pages_to_hide() {
            self.page_wrapper(page).set_visible(cx, false);
        }

        if let Some(page) = self.router.current() {
            self.page_wrapper(page).set_visible(cx, true);
            let titles = page.page_title();
            self.ui
                .shell_header(ids!(header))
                .set_titles(cx, titles.title, titles.subtitle);
        }

        self.ui
            .shell_sidebar(ids!(sidebar))
            .set_active(cx, self.router.current());
        self.ui.redraw(cx);
    }

    /// Flip dark mode, persist the preference, start the transition
    fn toggle_theme(&mut self, cx: &mut Cx) {
        self.app_data.toggle_dark_mode();
        let dark = self.app_data.is_dark_mode();

        let mut preferences = Preferences::load();
        preferences.dark_mode = dark;
        if let Err(err) = preferences.save() {
            log::error!("Failed to persist dark mode preference: {err}");
        }

        self.ui.shell_header(ids!(header)).set_dark_mode(cx, dark);
        self.theme_anim_start = Some(Instant::now());
        cx.new_next_frame();
    }

    /// Advance the dark mode transition while it runs
    fn step_theme_animation(&mut self, cx: &mut Cx) {
        let Some(start) = self.theme_anim_start else {
            return;
        };

        let elapsed = start.elapsed().as_secs_f64();
        let in_progress = self
            .app_data
            .theme_mut()
            .update_animation(elapsed, THEME_TRANSITION_DURATION);
        let dark_mode = self.app_data.dark_mode_value();
        self.apply_theme(cx, dark_mode);

        if in_progress {
            cx.new_next_frame();
        } else {
            self.theme_anim_start = None;
        }
    }

    /// Push a dark mode value into every themed widget
    fn apply_theme(&mut self, cx: &mut Cx, dark_mode: f64) {
        self.ui.view(ids!(body)).apply_over(cx, live! {
            draw_bg: { dark_mode: (dark_mode) }
        });

        self.ui.shell_sidebar(ids!(sidebar)).apply_dark_mode(cx, dark_mode);
        self.ui.shell_header(ids!(header)).apply_dark_mode(cx, dark_mode);
        self.ui.status_bar(ids!(status_bar)).apply_dark_mode(cx, dark_mode);
        self.ui.login_page(ids!(login_gate.login)).apply_dark_mode(cx, dark_mode);

        self.ui
            .dashboard_screen(ids!(pages.dashboard_page.dashboard))
            .apply_dark_mode(cx, dark_mode);
        self.ui
            .chat_screen(ids!(pages.chat_page.chat))
            .apply_dark_mode(cx, dark_mode);
        self.ui
            .vocabulary_screen(ids!(pages.vocabulary_page.vocabulary))
            .apply_dark_mode(cx, dark_mode);
        self.ui
            .pronunciation_screen(ids!(pages.pronunciation_page.pronunciation))
            .apply_dark_mode(cx, dark_mode);
        self.ui
            .subscription_screen(ids!(pages.subscription_page.subscription))
            .apply_dark_mode(cx, dark_mode);
        self.ui
            .settings_screen(ids!(pages.settings_page.settings))
            .apply_dark_mode(cx, dark_mode);

        self.ui.redraw(cx);
    }

    /// Mirror shared speech status into the status bar
    fn poll_speech_status(&mut self, cx: &mut Cx) {
        if let Some(status) = self.app_data.speech_state().status.read_if_dirty() {
            self.ui
                .status_bar(ids!(status_bar))
                .set_speech_status(cx, &status);
        }
    }
}

app_main!(App);
