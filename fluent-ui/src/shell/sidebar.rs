//! Shell Sidebar Widget
//!
//! The navigation sidebar: brand mark on top, one tab button per page, and
//! the settings tab pinned at the bottom. The shell detects tab clicks
//! through the page router's path-based matching; this widget only renders
//! and tracks the active marker.
//!
//! ## Usage
//!
//! ```rust,ignore
//! live_design! {
//!     use fluent_ui::shell::sidebar::*;
//!
//!     sidebar = <ShellSidebar> {}
//! }
//! ```

use fluent_widgets::PageId;
use makepad_widgets::*;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    // Color constants
    SLATE_50 = vec4(0.976, 0.980, 0.984, 1.0)
    SLATE_200 = vec4(0.878, 0.906, 0.925, 1.0)
    SLATE_400 = vec4(0.580, 0.639, 0.702, 1.0)
    SLATE_500 = vec4(0.392, 0.455, 0.545, 1.0)
    SLATE_700 = vec4(0.204, 0.224, 0.275, 1.0)
    SLATE_800 = vec4(0.118, 0.161, 0.231, 1.0)
    BLUE_100 = vec4(0.859, 0.906, 0.996, 1.0)
    BLUE_900 = vec4(0.118, 0.161, 0.353, 1.0)
    TEXT_PRIMARY = vec4(0.067, 0.090, 0.125, 1.0)
    TEXT_PRIMARY_DARK = vec4(0.945, 0.961, 0.976, 1.0)
    DIVIDER = vec4(0.878, 0.906, 0.925, 1.0)
    DIVIDER_DARK = vec4(0.278, 0.337, 0.412, 1.0)

    /// Sidebar menu button with selection and hover states
    SidebarButton = <Button> {
        width: Fill, height: Fit
        padding: {top: 12, bottom: 12, left: 12, right: 12}
        margin: 0
        align: {x: 0.0, y: 0.5}

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

        draw_bg: {
            instance hover: 0.0
            instance pressed: 0.0
            instance selected: 0.0
            instance dark_mode: 0.0

            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                let light_normal = (SLATE_50);
                let light_hover = (SLATE_200);
                let light_selected = (BLUE_100);
                let dark_normal = (SLATE_800);
                let dark_hover = (SLATE_700);
                let dark_selected = (BLUE_900);
                let normal = mix(light_normal, dark_normal, self.dark_mode);
                let hover_color = mix(light_hover, dark_hover, self.dark_mode);
                let selected_color = mix(light_selected, dark_selected, self.dark_mode);
                let color = mix(
                    mix(normal, hover_color, self.hover),
                    selected_color,
                    self.selected
                );
                sdf.box(2.0, 2.0, self.rect_size.x - 4.0, self.rect_size.y - 4.0, 6.0);
                sdf.fill(color);
                return sdf.result;
            }
        }

        draw_text: {
            instance dark_mode: 0.0
            text_style: { font_size: 12.0 }

            fn get_color(self) -> vec4 {
                return mix((SLATE_500), (SLATE_400), self.dark_mode);
            }
        }
    }

    /// Sidebar divider line
    SidebarDivider = <View> {
        width: Fill, height: 1
        margin: {top: 8, bottom: 8}
        show_bg: true
        draw_bg: {
            instance dark_mode: 0.0
            fn pixel(self) -> vec4 {
                return mix((DIVIDER), (DIVIDER_DARK), self.dark_mode);
            }
        }
    }

    /// Shell Sidebar Widget
    pub ShellSidebar = {{ShellSidebar}} {
        width: 220, height: Fill
        flow: Down
        spacing: 4.0
        padding: {top: 15, bottom: 15, left: 10, right: 10}
        margin: 0

        show_bg: true
        draw_bg: {
            instance dark_mode: 0.0

            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.rect(0.0, 0.0, self.rect_size.x, self.rect_size.y);
                let bg = mix((SLATE_50), (SLATE_800), self.dark_mode);
                sdf.fill(bg);
                // Right border
                sdf.rect(self.rect_size.x - 1.0, 0., 1.0, self.rect_size.y);
                let border = mix((DIVIDER), (DIVIDER_DARK), self.dark_mode);
                sdf.fill(border);
                return sdf.result;
            }
        }

        brand = <Label> {
            margin: {left: 12, bottom: 12}
            text: "Fluent Studio"
            draw_text: {
                instance dark_mode: 0.0
                text_style: { font_size: 16.0 }
                fn get_color(self) -> vec4 {
                    return mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
                }
            }
        }

        // Main navigation
        nav_slot = <View> {
            width: Fill, height: Fit
            flow: Down
            spacing: 4.0

            dashboard_tab = <SidebarButton> { text: "Dashboard" }
            chat_tab = <SidebarButton> { text: "Practice Chat" }
            vocabulary_tab = <SidebarButton> { text: "Vocabulary" }
            pronunciation_tab = <SidebarButton> { text: "Pronunciation" }
            subscription_tab = <SidebarButton> { text: "Subscription" }
        }

        // Spacer to push settings to bottom
        <View> { width: Fill, height: Fill }

        // Bottom divider
        bottom_divider = <SidebarDivider> {}

        // Settings section (bottom of sidebar)
        settings_slot = <View> {
            width: Fill, height: Fit
            flow: Down
            spacing: 4.0

            settings_tab = <SidebarButton> { text: "Settings" }
        }
    }
}

/// Actions emitted by ShellSidebar
#[derive(Clone, Debug, DefaultNone)]
pub enum ShellSidebarAction {
    None,
}

#[derive(Live, LiveHook, Widget)]
pub struct ShellSidebar {
    #[deref]
    view: View,

    /// Current dark mode value
    #[rust]
    dark_mode: f64,

    /// Currently marked-active page
    #[rust]
    active_page: Option<PageId>,
}

impl Widget for ShellSidebar {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        self.view.handle_event(cx, event, scope);
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        self.view.draw_walk(cx, scope, walk)
    }
}

impl ShellSidebar {
    fn tab_button(&self, page: PageId) -> ButtonRef {
        match page {
            PageId::Dashboard => self.view.button(ids!(nav_slot.dashboard_tab)),
            PageId::Chat => self.view.button(ids!(nav_slot.chat_tab)),
            PageId::Vocabulary => self.view.button(ids!(nav_slot.vocabulary_tab)),
            PageId::Pronunciation => self.view.button(ids!(nav_slot.pronunciation_tab)),
            PageId::Subscription => self.view.button(ids!(nav_slot.subscription_tab)),
            PageId::Settings => self.view.button(ids!(settings_slot.settings_tab)),
        }
    }

    /// Mark the tab matching `page` active; `None` clears every marker
    /// (the state after an unrecognized navigation request).
    pub fn set_active(&mut self, cx: &mut Cx, page: Option<PageId>) {
        self.active_page = page;
        for candidate in PageId::ALL {
            let selected = if Some(candidate) == page { 1.0 } else { 0.0 };
            self.tab_button(candidate).apply_over(cx, live! {
                draw_bg: { selected: (selected) }
            });
        }
        self.view.redraw(cx);
    }

    /// Currently marked-active page
    pub fn active(&self) -> Option<PageId> {
        self.active_page
    }

    /// Apply dark mode
    pub fn apply_dark_mode(&mut self, cx: &mut Cx, dark_mode: f64) {
        self.dark_mode = dark_mode;

        self.view.apply_over(cx, live! {
            draw_bg: { dark_mode: (dark_mode) }
        });
        self.view.label(ids!(brand)).apply_over(cx, live! {
            draw_text: { dark_mode: (dark_mode) }
        });
        self.view.view(ids!(bottom_divider)).apply_over(cx, live! {
            draw_bg: { dark_mode: (dark_mode) }
        });
        for page in PageId::ALL {
            self.tab_button(page).apply_over(cx, live! {
                draw_bg: { dark_mode: (dark_mode) }
                draw_text: { dark_mode: (dark_mode) }
            });
        }
        self.view.redraw(cx);
    }
}

impl ShellSidebarRef {
    /// Mark the tab matching `page` active
    pub fn set_active(&self, cx: &mut Cx, page: Option<PageId>) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.set_active(cx, page);
        }
    }

    /// Currently marked-active page
    pub fn active(&self) -> Option<PageId> {
        self.borrow().and_then(|inner| inner.active())
    }

    /// Apply dark mode
    pub fn apply_dark_mode(&self, cx: &mut Cx, dark_mode: f64) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.apply_dark_mode(cx, dark_mode);
        }
    }
}
