//! Static theme constants for Fluent Studio
//!
//! Shared color palette for `live_design!` blocks. Widgets mix the light and
//! dark variant of each color with their `dark_mode` shader instance:
//!
//! ```text
//! let bg = mix((PANEL_BG), (PANEL_BG_DARK), self.dark_mode);
//! ```
//!
//! Runtime dark-mode state and animation live in `fluent_ui::theme`.

use makepad_widgets::*;

live_design! {
    // Slate scale
    pub SLATE_50 = vec4(0.976, 0.980, 0.984, 1.0)
    pub SLATE_100 = vec4(0.945, 0.961, 0.976, 1.0)
    pub SLATE_200 = vec4(0.878, 0.906, 0.925, 1.0)
    pub SLATE_400 = vec4(0.580, 0.639, 0.702, 1.0)
    pub SLATE_500 = vec4(0.392, 0.455, 0.545, 1.0)
    pub SLATE_600 = vec4(0.278, 0.337, 0.412, 1.0)
    pub SLATE_700 = vec4(0.204, 0.224, 0.275, 1.0)
    pub SLATE_800 = vec4(0.118, 0.161, 0.231, 1.0)

    // Gray scale
    pub GRAY_50 = vec4(0.980, 0.980, 0.980, 1.0)
    pub GRAY_100 = vec4(0.953, 0.957, 0.965, 1.0)
    pub GRAY_300 = vec4(0.820, 0.840, 0.860, 1.0)
    pub GRAY_600 = vec4(0.294, 0.333, 0.388, 1.0)

    // Surfaces
    pub DARK_BG = vec4(0.933, 0.941, 0.953, 1.0)
    pub DARK_BG_DARK = vec4(0.067, 0.090, 0.125, 1.0)
    pub PANEL_BG = vec4(0.976, 0.980, 0.984, 1.0)
    pub PANEL_BG_DARK = vec4(0.118, 0.161, 0.231, 1.0)
    pub BORDER = vec4(0.878, 0.906, 0.925, 1.0)
    pub BORDER_DARK = vec4(0.278, 0.337, 0.412, 1.0)
    pub DIVIDER = vec4(0.878, 0.906, 0.925, 1.0)
    pub DIVIDER_DARK = vec4(0.278, 0.337, 0.412, 1.0)

    // Text
    pub TEXT_PRIMARY = vec4(0.067, 0.090, 0.125, 1.0)
    pub TEXT_PRIMARY_DARK = vec4(0.945, 0.961, 0.976, 1.0)
    pub TEXT_SECONDARY = vec4(0.392, 0.455, 0.545, 1.0)
    pub TEXT_SECONDARY_DARK = vec4(0.580, 0.639, 0.722, 1.0)

    // Accents
    pub ACCENT_BLUE = vec4(0.231, 0.510, 0.965, 1.0)
    pub BLUE_100 = vec4(0.859, 0.906, 0.996, 1.0)
    pub BLUE_600 = vec4(0.369, 0.580, 0.976, 1.0)
    pub BLUE_700 = vec4(0.188, 0.420, 0.839, 1.0)
    pub BLUE_900 = vec4(0.118, 0.161, 0.353, 1.0)
    pub INDIGO_200 = vec4(0.780, 0.824, 0.996, 1.0)
    pub INDIGO_500 = vec4(0.388, 0.400, 0.945, 1.0)
    pub GREEN_500 = vec4(0.133, 0.773, 0.373, 1.0)
    pub AMBER_500 = vec4(0.961, 0.624, 0.043, 1.0)
    pub ORANGE_500 = vec4(0.976, 0.451, 0.086, 1.0)
    pub RED_500 = vec4(0.937, 0.267, 0.267, 1.0)
    pub RED_600 = vec4(0.863, 0.149, 0.149, 1.0)
    pub WHITE = vec4(1.0, 1.0, 1.0, 1.0)
    pub TRANSPARENT = vec4(0.0, 0.0, 0.0, 0.0)
    pub HOVER_BG = vec4(0.0, 0.0, 0.0, 0.05)
}
