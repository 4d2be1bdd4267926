//! Runtime Theme State for Fluent UI
//!
//! Complements the static `live_design!` color constants in
//! `fluent-widgets/src/theme.rs`: those define the palette, this module
//! tracks which end of it the app is currently showing.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fluent_ui::FluentTheme;
//!
//! let mut theme = FluentTheme::default(); // Light mode
//! theme.toggle();
//! assert!(theme.is_dark());
//!
//! // Apply to a widget
//! widget.apply_over(cx, live! {
//!     draw_bg: { dark_mode: (theme.dark_mode_anim) }
//! });
//! ```
//!
//! ## Animation Support
//!
//! For smooth transitions, call `update_animation` from a NextFrame handler
//! with the elapsed time since the toggle; it eases `dark_mode_anim`
//! towards the target and reports whether another frame is needed.

/// Duration of theme transition animation in seconds
pub const THEME_TRANSITION_DURATION: f64 = 0.25;

/// Runtime theme state for Fluent Studio.
///
/// Manages dark mode state and provides smooth animated transitions
/// between light and dark themes.
#[derive(Clone, Debug)]
pub struct FluentTheme {
    /// Whether dark mode is enabled
    pub dark_mode: bool,

    /// Animation value (0.0 = light, 1.0 = dark).
    /// Use this value in shader `dark_mode` instance variables.
    pub dark_mode_anim: f64,
}

impl FluentTheme {
    /// Create a new theme in light mode
    pub fn new() -> Self {
        Self {
            dark_mode: false,
            dark_mode_anim: 0.0,
        }
    }

    /// Create a theme with specified dark mode state
    pub fn with_dark_mode(dark: bool) -> Self {
        Self {
            dark_mode: dark,
            dark_mode_anim: if dark { 1.0 } else { 0.0 },
        }
    }

    /// Check if dark mode is enabled
    pub fn is_dark(&self) -> bool {
        self.dark_mode
    }

    /// Toggle dark mode.
    ///
    /// Only flips the state; for animated transitions drive
    /// `update_animation` afterwards.
    pub fn toggle(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// Set dark mode state immediately (no animation)
    pub fn set_dark_mode(&mut self, dark: bool) {
        self.dark_mode = dark;
        self.dark_mode_anim = if dark { 1.0 } else { 0.0 };
    }

    /// Update animation value based on elapsed time.
    ///
    /// Returns `true` while the animation is in progress, `false` once
    /// complete.
    pub fn update_animation(&mut self, elapsed: f64, duration: f64) -> bool {
        let target = if self.dark_mode { 1.0 } else { 0.0 };

        if elapsed >= duration {
            self.dark_mode_anim = target;
            false
        } else {
            // Ease-out cubic for smooth deceleration
            let t = (elapsed / duration).min(1.0);
            let ease_t = 1.0 - (1.0 - t).powi(3);

            let start = if self.dark_mode { 0.0 } else { 1.0 };
            self.dark_mode_anim = start + (target - start) * ease_t;

            true
        }
    }

    /// Target animation value once the transition completes
    pub fn target_value(&self) -> f64 {
        if self.dark_mode {
            1.0
        } else {
            0.0
        }
    }
}

impl Default for FluentTheme {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_default() {
        let theme = FluentTheme::default();
        assert!(!theme.is_dark());
        assert_eq!(theme.dark_mode_anim, 0.0);
    }

    #[test]
    fn test_theme_toggle() {
        let mut theme = FluentTheme::default();

        theme.toggle();
        assert!(theme.is_dark());

        theme.toggle();
        assert!(!theme.is_dark());
    }

    #[test]
    fn test_theme_set_dark_mode() {
        let mut theme = FluentTheme::default();

        theme.set_dark_mode(true);
        assert!(theme.is_dark());
        assert_eq!(theme.dark_mode_anim, 1.0);

        theme.set_dark_mode(false);
        assert!(!theme.is_dark());
        assert_eq!(theme.dark_mode_anim, 0.0);
    }

    #[test]
    fn test_theme_animation() {
        let mut theme = FluentTheme::default();
        theme.toggle(); // Switch to dark

        // In progress at 50%
        let in_progress = theme.update_animation(0.125, 0.25);
        assert!(in_progress);
        assert!(theme.dark_mode_anim > 0.0);
        assert!(theme.dark_mode_anim < 1.0);

        // Complete at 100%
        let in_progress = theme.update_animation(0.25, 0.25);
        assert!(!in_progress);
        assert_eq!(theme.dark_mode_anim, 1.0);
    }
}
