//! Widget Registry for Fluent UI Components
//!
//! Provides a registry for registering and discovering reusable UI widgets.
//! Widgets can be categorized and queried at runtime for dynamic composition.

use std::collections::HashMap;

/// Category of a widget for organization and filtering
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum WidgetCategory {
    /// Chat and messaging widgets
    Chat,
    /// Modal dialogs and notices
    Dialog,
    /// Navigation widgets (tabs, sidebars)
    Navigation,
    /// Shell chrome (header, sidebar, status bar)
    Shell,
    /// Custom app-specific widgets
    Custom(String),
}

impl WidgetCategory {
    /// Get display name for the category
    pub fn display_name(&self) -> &str {
        match self {
            WidgetCategory::Chat => "Chat",
            WidgetCategory::Dialog => "Dialog",
            WidgetCategory::Navigation => "Navigation",
            WidgetCategory::Shell => "Shell",
            WidgetCategory::Custom(name) => name,
        }
    }
}

/// Definition of a registerable widget
#[derive(Clone, Debug)]
pub struct FluentWidgetDef {
    /// Unique identifier (e.g., "chat_panel")
    pub id: String,

    /// Display name for UI
    pub title: String,

    /// Category for organization
    pub category: WidgetCategory,

    /// Whether this widget depends on a speech capability
    pub requires_speech: bool,

    /// Description of the widget's functionality
    pub description: String,
}

impl FluentWidgetDef {
    /// Create a new widget definition with minimal required fields
    pub fn new(id: impl Into<String>, title: impl Into<String>, category: WidgetCategory) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category,
            requires_speech: false,
            description: String::new(),
        }
    }

    /// Set whether this widget depends on a speech capability
    pub fn requires_speech(mut self, requires: bool) -> Self {
        self.requires_speech = requires;
        self
    }

    /// Set the description
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }
}

/// Registry for all available widgets
///
/// The registry maintains a collection of widget definitions that can be
/// queried by ID or category, preserving registration order.
pub struct FluentWidgetRegistry {
    definitions: HashMap<String, FluentWidgetDef>,
    order: Vec<String>,
}

impl FluentWidgetRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            definitions: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Register a widget definition.
    ///
    /// If a widget with the same ID already exists, it will be replaced.
    pub fn register(&mut self, def: FluentWidgetDef) {
        let id = def.id.clone();
        if !self.definitions.contains_key(&id) {
            self.order.push(id.clone());
        }
        self.definitions.insert(id, def);
    }

    /// Get a widget definition by ID
    pub fn get(&self, id: &str) -> Option<&FluentWidgetDef> {
        self.definitions.get(id)
    }

    /// Get all widget definitions in registration order
    pub fn all(&self) -> Vec<&FluentWidgetDef> {
        self.order
            .iter()
            .filter_map(|id| self.definitions.get(id))
            .collect()
    }

    /// Get widget definitions by category
    pub fn by_category(&self, category: &WidgetCategory) -> Vec<&FluentWidgetDef> {
        self.order
            .iter()
            .filter_map(|id| self.definitions.get(id))
            .filter(|def| &def.category == category)
            .collect()
    }

    /// Get widget definitions that depend on a speech capability
    pub fn speech_widgets(&self) -> Vec<&FluentWidgetDef> {
        self.order
            .iter()
            .filter_map(|id| self.definitions.get(id))
            .filter(|def| def.requires_speech)
            .collect()
    }

    /// Check if a widget is registered
    pub fn contains(&self, id: &str) -> bool {
        self.definitions.contains_key(id)
    }

    /// Number of registered widgets
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Default for FluentWidgetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_def_builder() {
        let def = FluentWidgetDef::new("test", "Test Widget", WidgetCategory::Chat)
            .requires_speech(true)
            .description("A test widget");

        assert_eq!(def.id, "test");
        assert_eq!(def.title, "Test Widget");
        assert!(def.requires_speech);
        assert_eq!(def.description, "A test widget");
    }

    #[test]
    fn test_registry_register_and_get() {
        let mut registry = FluentWidgetRegistry::new();
        registry.register(FluentWidgetDef::new(
            "chat_panel",
            "Chat Panel",
            WidgetCategory::Chat,
        ));

        assert!(registry.contains("chat_panel"));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("chat_panel").unwrap().title, "Chat Panel");
    }

    #[test]
    fn test_registry_by_category() {
        let mut registry = FluentWidgetRegistry::new();
        registry.register(FluentWidgetDef::new("a", "A", WidgetCategory::Chat));
        registry.register(FluentWidgetDef::new("b", "B", WidgetCategory::Chat));
        registry.register(FluentWidgetDef::new("c", "C", WidgetCategory::Dialog));

        assert_eq!(registry.by_category(&WidgetCategory::Chat).len(), 2);
        assert_eq!(registry.by_category(&WidgetCategory::Dialog).len(), 1);
        assert!(registry.by_category(&WidgetCategory::Shell).is_empty());
    }

    #[test]
    fn test_registry_order_preserved() {
        let mut registry = FluentWidgetRegistry::new();
        registry.register(FluentWidgetDef::new("first", "First", WidgetCategory::Chat));
        registry.register(FluentWidgetDef::new("second", "Second", WidgetCategory::Dialog));
        registry.register(FluentWidgetDef::new("third", "Third", WidgetCategory::Shell));

        let all = registry.all();
        assert_eq!(all[0].id, "first");
        assert_eq!(all[1].id, "second");
        assert_eq!(all[2].id, "third");
    }

    #[test]
    fn test_speech_widgets_filter() {
        let mut registry = FluentWidgetRegistry::new();
        registry.register(
            FluentWidgetDef::new("voice", "Voice", WidgetCategory::Chat).requires_speech(true),
        );
        registry.register(FluentWidgetDef::new("plain", "Plain", WidgetCategory::Chat));

        let speech = registry.speech_widgets();
        assert_eq!(speech.len(), 1);
        assert_eq!(speech[0].id, "voice");
    }
}
