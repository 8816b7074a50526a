use crate::model::constants::MOBILE_BREAKPOINT;
use std::fmt::Display;
use thiserror::Error;

/// Where closing a modal, and any other "go home" action, lands.
pub const DEFAULT_PATH: &str = "/dashboard";

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("Navigation path must start with `/`, got `{0}`")]
    Relative(String),
}

/// The application's route table. Paths match exactly.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Route {
    Dashboard,
    Transactions,
    Send,
    Receive,
    Settings,
    Login,
    NotFound(String),
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" | "/dashboard" => Self::Dashboard,
            "/transactions" => Self::Transactions,
            "/send" => Self::Send,
            "/receive" => Self::Receive,
            "/settings" => Self::Settings,
            "/login" => Self::Login,
            _ => Self::NotFound(path.to_string()),
        }
    }

    /// Canonical path for this route.
    pub fn path(&self) -> &str {
        match self {
            Self::Dashboard => DEFAULT_PATH,
            Self::Transactions => "/transactions",
            Self::Send => "/send",
            Self::Receive => "/receive",
            Self::Settings => "/settings",
            Self::Login => "/login",
            Self::NotFound(path) => path,
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// An entry in the header and bottom tab navigation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    /// Shown in the primary navigation bars; secondary items live in the profile menu.
    pub is_primary: bool,
    /// Opens a transaction modal rather than a full page.
    pub is_modal: bool,
}

pub const NAVIGATION_ITEMS: [NavItem; 5] = [
    NavItem {
        path: "/dashboard",
        label: "Dashboard",
        is_primary: true,
        is_modal: false,
    },
    NavItem {
        path: "/transactions",
        label: "Transactions",
        is_primary: true,
        is_modal: false,
    },
    NavItem {
        path: "/send",
        label: "Send",
        is_primary: true,
        is_modal: true,
    },
    NavItem {
        path: "/receive",
        label: "Receive",
        is_primary: true,
        is_modal: true,
    },
    NavItem {
        path: "/settings",
        label: "Settings",
        is_primary: false,
        is_modal: false,
    },
];

/// Primary navigation entries, in display order.
pub fn primary_items() -> impl Iterator<Item = &'static NavItem> {
    NAVIGATION_ITEMS.iter().filter(|item| item.is_primary)
}

/// True when a viewport of this width gets the mobile layout.
pub fn is_mobile(viewport_width: u32) -> bool {
    viewport_width < MOBILE_BREAKPOINT
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn route_table() {
        assert_eq!(Route::from_path("/"), Route::Dashboard);
        assert_eq!(Route::from_path("/dashboard"), Route::Dashboard);
        assert_eq!(Route::from_path("/send"), Route::Send);
        assert_eq!(
            Route::from_path("/send/"),
            Route::NotFound("/send/".to_string())
        );

        for item in NAVIGATION_ITEMS {
            let route = Route::from_path(item.path);
            assert!(!matches!(route, Route::NotFound(_)), "{}", item.path);
            assert_eq!(route.path(), item.path);
        }
    }

    #[test]
    #[traced_test]
    fn primary_navigation() {
        let labels: Vec<_> = primary_items().map(|item| item.label).collect();
        assert_eq!(labels, ["Dashboard", "Transactions", "Send", "Receive"]);

        assert!(is_mobile(375));
        assert!(is_mobile(1023));
        assert!(!is_mobile(1024));
    }
}
