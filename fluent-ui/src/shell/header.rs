//! Shell Header Widget
//!
//! Application header showing the current page title/subtitle, with theme
//! toggle, the logged-in user chip, and a logout button.
//!
//! ## Usage
//!
//! ```rust,ignore
//! live_design! {
//!     use fluent_ui::shell::header::*;
//!
//!     header = <ShellHeader> {}
//! }
//! ```
//!
//! The shell updates the title pair from the page router on navigation:
//!
//! ```rust,ignore
//! header.set_titles(cx, "Practice Chat", "Chat with AI to improve your English fluency");
//! ```

use makepad_widgets::*;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    // Color constants (vec4 to avoid hex parsing issues)
    PANEL_BG = vec4(0.976, 0.980, 0.984, 1.0)
    PANEL_BG_DARK = vec4(0.118, 0.161, 0.231, 1.0)
    TEXT_PRIMARY = vec4(0.067, 0.090, 0.125, 1.0)
    TEXT_PRIMARY_DARK = vec4(0.945, 0.961, 0.976, 1.0)
    TEXT_SECONDARY = vec4(0.392, 0.455, 0.545, 1.0)
    TEXT_SECONDARY_DARK = vec4(0.580, 0.639, 0.722, 1.0)
    SLATE_400 = vec4(0.580, 0.639, 0.702, 1.0)
    SLATE_500 = vec4(0.392, 0.455, 0.545, 1.0)
    HOVER_BG = vec4(0.0, 0.0, 0.0, 0.05)
    TRANSPARENT = vec4(0.0, 0.0, 0.0, 0.0)
    AMBER_500 = vec4(0.961, 0.624, 0.043, 1.0)
    INDIGO_500 = vec4(0.388, 0.400, 0.945, 1.0)
    ACCENT_BLUE = vec4(0.231, 0.510, 0.965, 1.0)
    WHITE = vec4(1.0, 1.0, 1.0, 1.0)

    /// Theme toggle button with sun/moon icons
    ThemeToggle = <View> {
        width: 36, height: 36
        align: {x: 0.5, y: 0.5}
        cursor: Hand
        show_bg: true
        draw_bg: {
            instance hover: 0.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                let cx = self.rect_size.x * 0.5;
                let cy = self.rect_size.y * 0.5;
                sdf.circle(cx, cy, 16.0);
                sdf.fill(mix((TRANSPARENT), (HOVER_BG), self.hover));
                return sdf.result;
            }
        }

        sun_icon = <View> {
            width: 20, height: 20
            show_bg: true
            draw_bg: {
                fn pixel(self) -> vec4 {
                    let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                    let c = self.rect_size * 0.5;
                    let amber = (AMBER_500);
                    // Sun circle
                    sdf.circle(c.x, c.y, 4.0);
                    sdf.fill(amber);
                    // Sun rays
                    let ray_len = 2.5;
                    let ray_dist = 6.5;
                    sdf.move_to(c.x, c.y - ray_dist);
                    sdf.line_to(c.x, c.y - ray_dist - ray_len);
                    sdf.stroke(amber, 1.5);
                    sdf.move_to(c.x, c.y + ray_dist);
                    sdf.line_to(c.x, c.y + ray_dist + ray_len);
                    sdf.stroke(amber, 1.5);
                    sdf.move_to(c.x - ray_dist, c.y);
                    sdf.line_to(c.x - ray_dist - ray_len, c.y);
                    sdf.stroke(amber, 1.5);
                    sdf.move_to(c.x + ray_dist, c.y);
                    sdf.line_to(c.x + ray_dist + ray_len, c.y);
                    sdf.stroke(amber, 1.5);
                    return sdf.result;
                }
            }
        }

        moon_icon = <View> {
            width: 20, height: 20
            visible: false
            show_bg: true
            draw_bg: {
                fn pixel(self) -> vec4 {
                    let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                    let c = self.rect_size * 0.5;
                    let indigo = (INDIGO_500);
                    sdf.circle(c.x, c.y, 6.0);
                    sdf.fill(indigo);
                    sdf.circle(c.x + 3.5, c.y - 2.5, 4.5);
                    sdf.fill((WHITE));
                    return sdf.result;
                }
            }
        }
    }

    /// Logged-in user chip: avatar initial plus display name
    UserChip = <View> {
        width: Fit, height: Fill
        flow: Right
        align: {x: 0.5, y: 0.5}
        spacing: 8

        avatar = <View> {
            width: 32, height: 32
            align: {x: 0.5, y: 0.5}
            show_bg: true
            draw_bg: {
                fn pixel(self) -> vec4 {
                    let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                    let cx = self.rect_size.x * 0.5;
                    let cy = self.rect_size.y * 0.5;
                    sdf.circle(cx, cy, 15.0);
                    sdf.fill((ACCENT_BLUE));
                    return sdf.result;
                }
            }

            initial = <Label> {
                text: ""
                draw_text: {
                    text_style: { font_size: 13.0 }
                    fn get_color(self) -> vec4 {
                        return (WHITE);
                    }
                }
            }
        }

        user_name = <Label> {
            text: ""
            draw_text: {
                instance dark_mode: 0.0
                text_style: { font_size: 12.0 }
                fn get_color(self) -> vec4 {
                    return mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
                }
            }
        }
    }

    /// Logout button, understated next to the user chip
    LogoutButton = <Button> {
        width: Fit, height: 32
        padding: {left: 12, right: 12}
        text: "Log out"

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
            text_style: { font_size: 11.0 }
            fn get_color(self) -> vec4 {
                return mix((SLATE_500), (SLATE_400), self.dark_mode);
            }
        }

        draw_bg: {
            instance hover: 0.0
            instance dark_mode: 0.0
            border_radius: 6.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(0., 0., self.rect_size.x, self.rect_size.y, self.border_radius);
                sdf.fill(mix((TRANSPARENT), (HOVER_BG), self.hover));
                return sdf.result;
            }
        }
    }

    /// Shell Header Widget
    pub ShellHeader = {{ShellHeader}} {
        width: Fill, height: Fit
        flow: Right
        spacing: 12
        align: {y: 0.5}
        padding: {left: 20, right: 20, top: 15, bottom: 15}
        show_bg: true
        draw_bg: {
            instance dark_mode: 0.0
            fn pixel(self) -> vec4 {
                return mix((PANEL_BG), (PANEL_BG_DARK), self.dark_mode);
            }
        }

        title_column = <View> {
            width: Fit, height: Fit
            flow: Down
            spacing: 2

            title_label = <Label> {
                text: "Dashboard"
                draw_text: {
                    instance dark_mode: 0.0
                    text_style: { font_size: 20.0 }
                    fn get_color(self) -> vec4 {
                        return mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
                    }
                }
            }

            subtitle_label = <Label> {
                text: "Welcome back! Ready to practice today?"
                draw_text: {
                    instance dark_mode: 0.0
                    text_style: { font_size: 11.0 }
                    fn get_color(self) -> vec4 {
                        return mix((TEXT_SECONDARY), (TEXT_SECONDARY_DARK), self.dark_mode);
                    }
                }
            }
        }

        // Spacer
        <View> { width: Fill, height: 1 }

        // Action slots (right side)
        actions_slot = <View> {
            width: Fit, height: Fill
            flow: Right
            spacing: 8
            align: {y: 0.5}

            theme_toggle = <ThemeToggle> {}
            user_chip = <UserChip> {}
            logout_btn = <LogoutButton> {}
        }
    }
}

/// Actions emitted by ShellHeader
#[derive(Clone, Debug, DefaultNone)]
pub enum ShellHeaderAction {
    None,
    /// Theme toggle clicked
    ThemeToggled,
    /// Logout button clicked
    LogoutClicked,
}

#[derive(Live, LiveHook, Widget)]
pub struct ShellHeader {
    #[deref]
    view: View,

    /// Current dark mode value
    #[rust]
    dark_mode: f64,
}

impl Widget for ShellHeader {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        let actions = cx.capture_actions(|cx| self.view.handle_event(cx, event, scope));

        if self
            .view
            .button(ids!(actions_slot.logout_btn))
            .clicked(&actions)
        {
            cx.widget_action(self.widget_uid(), &scope.path, ShellHeaderAction::LogoutClicked);
        }

        // Handle theme toggle
        let theme_toggle = self.view.view(ids!(actions_slot.theme_toggle));
        match event.hits(cx, theme_toggle.area()) {
            Hit::FingerHoverIn(_) => {
                self.view.view(ids!(actions_slot.theme_toggle)).apply_over(cx, live! {
                    draw_bg: { hover: 1.0 }
                });
                self.view.redraw(cx);
            }
            Hit::FingerHoverOut(_) => {
                self.view.view(ids!(actions_slot.theme_toggle)).apply_over(cx, live! {
                    draw_bg: { hover: 0.0 }
                });
                self.view.redraw(cx);
            }
            Hit::FingerUp(_) => {
                cx.widget_action(self.widget_uid(), &scope.path, ShellHeaderAction::ThemeToggled);
            }
            _ => {}
        }
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        self.view.draw_walk(cx, scope, walk)
    }
}

impl ShellHeader {
    /// Set the page title and subtitle
    pub fn set_titles(&mut self, cx: &mut Cx, title: &str, subtitle: &str) {
        self.view.label(ids!(title_column.title_label)).set_text(cx, title);
        self.view
            .label(ids!(title_column.subtitle_label))
            .set_text(cx, subtitle);
    }

    /// Set the logged-in user chip from the display name.
    ///
    /// The avatar shows the upper-cased first letter of the name.
    pub fn set_user(&mut self, cx: &mut Cx, display_name: &str) {
        let initial = display_name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default();
        self.view
            .label(ids!(actions_slot.user_chip.avatar.initial))
            .set_text(cx, &initial);
        self.view
            .label(ids!(actions_slot.user_chip.user_name))
            .set_text(cx, display_name);
    }

    /// Set dark mode (for theme toggle icon)
    pub fn set_dark_mode(&mut self, cx: &mut Cx, is_dark: bool) {
        self.view
            .view(ids!(actions_slot.theme_toggle.sun_icon))
            .set_visible(cx, !is_dark);
        self.view
            .view(ids!(actions_slot.theme_toggle.moon_icon))
            .set_visible(cx, is_dark);
        self.view.redraw(cx);
    }

    /// Apply dark mode animation value
    pub fn apply_dark_mode(&mut self, cx: &mut Cx, dark_mode: f64) {
        self.dark_mode = dark_mode;

        self.view.apply_over(cx, live! {
            draw_bg: { dark_mode: (dark_mode) }
        });
        self.view.label(ids!(title_column.title_label)).apply_over(cx, live! {
            draw_text: { dark_mode: (dark_mode) }
        });
        self.view
            .label(ids!(title_column.subtitle_label))
            .apply_over(cx, live! {
                draw_text: { dark_mode: (dark_mode) }
            });
        self.view
            .label(ids!(actions_slot.user_chip.user_name))
            .apply_over(cx, live! {
                draw_text: { dark_mode: (dark_mode) }
            });
        self.view.redraw(cx);
    }
}

impl ShellHeaderRef {
    /// Set the page title and subtitle
    pub fn set_titles(&self, cx: &mut Cx, title: &str, subtitle: &str) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.set_titles(cx, title, subtitle);
        }
    }

    /// Set the logged-in user chip
    pub fn set_user(&self, cx: &mut Cx, display_name: &str) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.set_user(cx, display_name);
        }
    }

    /// Set dark mode (for theme toggle icon)
    pub fn set_dark_mode(&self, cx: &mut Cx, is_dark: bool) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.set_dark_mode(cx, is_dark);
        }
    }

    /// Apply dark mode animation value
    pub fn apply_dark_mode(&self, cx: &mut Cx, dark_mode: f64) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.apply_dark_mode(cx, dark_mode);
        }
    }

    /// Check if theme toggle was clicked
    pub fn theme_toggled(&self, actions: &Actions) -> bool {
        matches!(
            actions.find_widget_action(self.widget_uid()).cast(),
            ShellHeaderAction::ThemeToggled
        )
    }

    /// Check if logout was clicked
    pub fn logout_clicked(&self, actions: &Actions) -> bool {
        matches!(
            actions.find_widget_action(self.widget_uid()).cast(),
            ShellHeaderAction::LogoutClicked
        )
    }
}
