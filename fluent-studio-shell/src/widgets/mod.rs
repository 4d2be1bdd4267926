//! Shell-owned screens and pages
//!
//! The login page plus the two pages with no app crate of their own
//! (dashboard and subscription plans).

pub mod dashboard;
pub mod login_page;
pub mod subscription;

pub use dashboard::{
    DashboardAction, DashboardScreen, DashboardScreenRef, DashboardScreenWidgetRefExt,
    QUICK_TOPICS,
};
pub use login_page::{LoginPage, LoginPageAction, LoginPageRef, LoginPageWidgetRefExt};
pub use subscription::{
    SubscriptionScreen, SubscriptionScreenRef, SubscriptionScreenWidgetRefExt,
};

use makepad_widgets::Cx;

/// Register the shell's own widget live designs with Makepad
pub fn live_design(cx: &mut Cx) {
    login_page::live_design(cx);
    dashboard::live_design(cx);
    subscription::live_design(cx);
}
