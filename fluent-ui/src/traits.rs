//! Base Widget Traits for Fluent UI
//!
//! Common traits that fluent-ui widgets implement for consistent behavior
//! across the component library.
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | `FluentWidget` | Base trait for all fluent-ui widgets |
//! | `Themeable` | Widgets that support dark mode theming |
//! | `Clearable` | Widgets that can reset their state |
//! | `Focusable` | Widgets participating in input focus |

use makepad_widgets::Cx;

/// Base trait for all fluent-ui widgets.
///
/// Provides widget identification for registry and debugging.
pub trait FluentWidget {
    /// Unique identifier for this widget type
    fn widget_id(&self) -> &str;

    /// Human-readable title for this widget
    fn widget_title(&self) -> &str;

    /// Optional description of the widget's purpose
    fn widget_description(&self) -> Option<&str> {
        None
    }
}

/// Trait for widgets that support dark mode theming.
///
/// The `dark_mode` value ranges from 0.0 (light) to 1.0 (dark);
/// intermediate values occur during animated transitions. Implementations
/// use `apply_over` with `live!{}` to update shader instance variables.
pub trait Themeable {
    /// Apply dark mode value to the widget.
    fn apply_dark_mode(&self, cx: &mut Cx, dark_mode: f64);
}

/// Trait for widgets that can reset their state.
///
/// Used when logging out or starting a fresh session.
pub trait Clearable {
    /// Clear all widget state and redraw.
    fn clear(&self, cx: &mut Cx);
}

/// Trait for widgets that can be focused.
///
/// Used for keyboard navigation and input focus management.
pub trait Focusable {
    /// Check if the widget currently has focus.
    fn has_focus(&self) -> bool;

    /// Request focus for this widget.
    fn request_focus(&self, cx: &mut Cx);

    /// Release focus from this widget.
    fn release_focus(&self, cx: &mut Cx);
}
