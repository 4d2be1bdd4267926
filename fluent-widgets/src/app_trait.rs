//! # FluentApp Trait - Plugin App Interface
//!
//! This module defines the standard interface for page apps that integrate
//! with the Fluent Studio shell, plus the [`PageRouter`] that drives page
//! visibility, header titles, and sidebar selection.
//!
//! ## Architecture
//!
//! Due to Makepad's compile-time `live_design!` macro requirements, widget
//! types must still be imported directly in the shell. This module provides:
//!
//! - **Standardized metadata** - App name, ID, description via [`AppInfo`]
//! - **Consistent registration** - Widget registration via [`FluentApp::live_design`]
//! - **Page routing** - Centralized show/hide and title logic via [`PageRouter`]
//! - **Runtime queries** - App discovery via [`AppRegistry`]
//!
//! ## Usage in Shell
//!
//! ```rust,ignore
//! // On a sidebar click
//! if let Some(page) = self.router.check_tab_click(actions) {
//!     self.router.show_page(page.id());
//!     self.apply_routing(cx);
//! }
//!
//! // Applying the router outcome
//! for page in self.router.pages_to_hide() {
//!     self.ui.view(page.page_live_id()).set_visible(cx, false);
//! }
//! if let Some(page) = self.router.current() {
//!     self.ui.view(page.page_live_id()).set_visible(cx, true);
//!     header.set_titles(cx, page.title(), page.subtitle());
//! }
//! ```

use makepad_widgets::{live_id, Action, ButtonAction, Cx, LiveId, WidgetActionCast};

/// Metadata about a registered app
#[derive(Clone, Debug)]
pub struct AppInfo {
    /// Display name shown in UI
    pub name: &'static str,
    /// Unique identifier for the app
    pub id: &'static str,
    /// Description of the app
    pub description: &'static str,
    /// LiveId for the sidebar tab button (for click detection)
    pub tab_id: Option<LiveId>,
    /// LiveId for the page view (for visibility control)
    pub page_id: Option<LiveId>,
    /// Whether this app is shown in the main sidebar section
    pub show_in_sidebar: bool,
}

impl Default for AppInfo {
    fn default() -> Self {
        Self {
            name: "",
            id: "",
            description: "",
            tab_id: None,
            page_id: None,
            show_in_sidebar: true,
        }
    }
}

/// Page identifiers for routing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageId {
    /// Learner overview with quick-start topics
    Dashboard,
    /// Practice Chat with the tutor
    Chat,
    /// Vocabulary Builder
    Vocabulary,
    /// Pronunciation Practice
    Pronunciation,
    /// Subscription plans
    Subscription,
    /// Settings page
    Settings,
}

/// Header text pair shown for a page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageTitle {
    pub title: &'static str,
    pub subtitle: &'static str,
}

impl PageId {
    /// All routable pages, in sidebar order
    pub const ALL: [PageId; 6] = [
        PageId::Dashboard,
        PageId::Chat,
        PageId::Vocabulary,
        PageId::Pronunciation,
        PageId::Subscription,
        PageId::Settings,
    ];

    /// Stable string identifier used for navigation requests
    pub fn id(&self) -> &'static str {
        match self {
            PageId::Dashboard => "dashboard",
            PageId::Chat => "chat",
            PageId::Vocabulary => "vocabulary",
            PageId::Pronunciation => "pronunciation",
            PageId::Subscription => "subscription",
            PageId::Settings => "settings",
        }
    }

    /// Resolve a string identifier; `None` for unrecognized ids
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.id() == id)
    }

    /// Header title/subtitle pair for this page
    pub fn page_title(&self) -> PageTitle {
        match self {
            PageId::Dashboard => PageTitle {
                title: "Dashboard",
                subtitle: "Welcome back! Ready to practice today?",
            },
            PageId::Chat => PageTitle {
                title: "Practice Chat",
                subtitle: "Chat with AI to improve your English fluency",
            },
            PageId::Vocabulary => PageTitle {
                title: "Vocabulary Builder",
                subtitle: "Learn and practice new words daily",
            },
            PageId::Pronunciation => PageTitle {
                title: "Pronunciation Practice",
                subtitle: "Improve your accent and speech clarity",
            },
            PageId::Subscription => PageTitle {
                title: "Subscription Plans",
                subtitle: "Choose a plan that fits your learning goals",
            },
            PageId::Settings => PageTitle {
                title: "Settings",
                subtitle: "Customize your learning experience",
            },
        }
    }

    /// Get the LiveId for this page's sidebar tab button
    pub fn tab_live_id(&self) -> LiveId {
        match self {
            PageId::Dashboard => live_id!(dashboard_tab),
            PageId::Chat => live_id!(chat_tab),
            PageId::Vocabulary => live_id!(vocabulary_tab),
            PageId::Pronunciation => live_id!(pronunciation_tab),
            PageId::Subscription => live_id!(subscription_tab),
            PageId::Settings => live_id!(settings_tab),
        }
    }

    /// Get the LiveId for this page's view
    pub fn page_live_id(&self) -> LiveId {
        match self {
            PageId::Dashboard => live_id!(dashboard_page),
            PageId::Chat => live_id!(chat_page),
            PageId::Vocabulary => live_id!(vocabulary_page),
            PageId::Pronunciation => live_id!(pronunciation_page),
            PageId::Subscription => live_id!(subscription_page),
            PageId::Settings => live_id!(settings_page),
        }
    }
}

/// Router for managing page visibility and navigation
///
/// Centralizes page switching so the shell applies one outcome instead of
/// repeating visibility code per page. A navigation request with an
/// unrecognized identifier leaves every page hidden and reports no title
/// change; no error is raised.
#[derive(Default)]
pub struct PageRouter {
    /// Currently active page; `None` after an unrecognized request
    current_page: Option<PageId>,
    /// All registered pages
    pages: Vec<PageId>,
}

impl PageRouter {
    pub fn new() -> Self {
        Self {
            current_page: Some(PageId::Dashboard),
            pages: PageId::ALL.to_vec(),
        }
    }

    /// Get the current active page
    pub fn current(&self) -> Option<PageId> {
        self.current_page
    }

    /// Navigate by string identifier.
    ///
    /// A recognized id becomes current and its title pair is returned for
    /// the header. An unrecognized id clears the current page (all pages
    /// hidden) and returns `None`: the header keeps its previous text.
    pub fn show_page(&mut self, id: &str) -> Option<PageTitle> {
        match PageId::from_id(id) {
            Some(page) => {
                self.current_page = Some(page);
                Some(page.page_title())
            }
            None => {
                log::warn!("Navigation request for unknown page id: {id}");
                self.current_page = None;
                None
            }
        }
    }

    /// Navigate to a known page, returns true if the page changed
    pub fn navigate_to(&mut self, page: PageId) -> bool {
        if self.current_page == Some(page) {
            return false;
        }
        self.current_page = Some(page);
        true
    }

    /// Get all pages that should be hidden (all except current)
    pub fn pages_to_hide(&self) -> impl Iterator<Item = PageId> + '_ {
        self.pages
            .iter()
            .copied()
            .filter(move |p| Some(*p) != self.current_page)
    }

    /// Check if any registered tab was clicked in actions (path-based detection).
    /// Returns the PageId if a tab click was detected
    pub fn check_tab_click(&self, actions: &[Action]) -> Option<PageId> {
        for action in actions {
            if let Some(wa) = action.as_widget_action() {
                if let ButtonAction::Clicked(_) = wa.cast() {
                    for page in &self.pages {
                        let tab_id = page.tab_live_id();
                        if wa.path.data.iter().any(|id| *id == tab_id) {
                            return Some(*page);
                        }
                    }
                }
            }
        }
        None
    }
}

/// Helper to check if a specific tab was clicked using path-based detection.
/// Avoids WidgetUid mismatch issues with nested widgets
pub fn tab_clicked(actions: &[Action], tab_id: LiveId) -> bool {
    actions.iter().filter_map(|a| a.as_widget_action()).any(|wa| {
        if let ButtonAction::Clicked(_) = wa.cast() {
            wa.path.data.iter().any(|id| *id == tab_id)
        } else {
            false
        }
    })
}

/// Trait for apps that integrate with the Fluent Studio shell
///
/// # Example
/// ```ignore
/// impl FluentApp for FluentChatApp {
///     fn info() -> AppInfo {
///         AppInfo {
///             name: "Practice Chat",
///             id: "fluent-chat",
///             description: "Simulated tutor conversation",
///             tab_id: Some(live_id!(chat_tab)),
///             page_id: Some(live_id!(chat_page)),
///             ..Default::default()
///         }
///     }
///
///     fn live_design(cx: &mut Cx) {
///         screen::live_design(cx);
///     }
/// }
/// ```
pub trait FluentApp {
    /// Returns metadata about this app
    fn info() -> AppInfo
    where
        Self: Sized;

    /// Register this app's widgets with Makepad
    fn live_design(cx: &mut Cx);
}

/// Registry of all installed apps
///
/// Note: Due to Makepad's architecture, apps must still be imported at
/// compile time. This registry provides metadata for runtime queries
/// (e.g., sidebar generation).
pub struct AppRegistry {
    apps: Vec<AppInfo>,
}

impl AppRegistry {
    /// Create a new empty registry
    pub const fn new() -> Self {
        Self { apps: Vec::new() }
    }

    /// Register an app in the registry
    pub fn register(&mut self, info: AppInfo) {
        self.apps.push(info);
    }

    /// Get all registered apps
    pub fn apps(&self) -> &[AppInfo] {
        &self.apps
    }

    /// Find an app by ID
    pub fn find_by_id(&self, id: &str) -> Option<&AppInfo> {
        self.apps.iter().find(|app| app.id == id)
    }

    /// Number of registered apps
    pub fn len(&self) -> usize {
        self.apps.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }
}

impl Default for AppRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_app_info(id: &'static str) -> AppInfo {
        AppInfo {
            name: "Test App",
            id,
            description: "A test app for unit tests",
            ..Default::default()
        }
    }

    #[test]
    fn test_page_id_roundtrip() {
        for page in PageId::ALL {
            assert_eq!(PageId::from_id(page.id()), Some(page));
        }
        assert_eq!(PageId::from_id("nonexistent"), None);
        assert_eq!(PageId::from_id(""), None);
        // Identifier matching is exact, not case-folded
        assert_eq!(PageId::from_id("Dashboard"), None);
    }

    #[test]
    fn test_page_titles() {
        let t = PageId::Dashboard.page_title();
        assert_eq!(t.title, "Dashboard");
        assert_eq!(t.subtitle, "Welcome back! Ready to practice today?");

        let t = PageId::Chat.page_title();
        assert_eq!(t.title, "Practice Chat");
        assert_eq!(t.subtitle, "Chat with AI to improve your English fluency");

        let t = PageId::Subscription.page_title();
        assert_eq!(t.title, "Subscription Plans");
    }

    #[test]
    fn test_router_defaults_to_dashboard() {
        let router = PageRouter::new();
        assert_eq!(router.current(), Some(PageId::Dashboard));
    }

    #[test]
    fn test_show_page_known_id() {
        let mut router = PageRouter::new();

        let titles = router.show_page("vocabulary");
        assert_eq!(router.current(), Some(PageId::Vocabulary));
        assert_eq!(titles.unwrap().title, "Vocabulary Builder");
    }

    #[test]
    fn test_show_page_unknown_id_hides_all_and_keeps_titles() {
        let mut router = PageRouter::new();
        router.show_page("chat");

        // Unknown id: no current page, no title update, no panic
        let titles = router.show_page("profile");
        assert!(titles.is_none());
        assert_eq!(router.current(), None);

        // Every page is now slated for hiding
        let hidden: Vec<_> = router.pages_to_hide().collect();
        assert_eq!(hidden.len(), PageId::ALL.len());
    }

    #[test]
    fn test_pages_to_hide_excludes_current() {
        let mut router = PageRouter::new();
        router.show_page("settings");

        let hidden: Vec<_> = router.pages_to_hide().collect();
        assert_eq!(hidden.len(), PageId::ALL.len() - 1);
        assert!(!hidden.contains(&PageId::Settings));
    }

    #[test]
    fn test_navigate_to_reports_change() {
        let mut router = PageRouter::new();

        assert!(!router.navigate_to(PageId::Dashboard)); // already there
        assert!(router.navigate_to(PageId::Pronunciation));
        assert!(!router.navigate_to(PageId::Pronunciation));
    }

    #[test]
    fn test_app_registry_register_and_find() {
        let mut registry = AppRegistry::new();
        assert!(registry.is_empty());

        registry.register(create_test_app_info("app1"));
        registry.register(create_test_app_info("app2"));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.apps()[0].id, "app1");
        assert!(registry.find_by_id("app2").is_some());
        assert!(registry.find_by_id("nonexistent").is_none());
    }
}
