use crate::nav::{Route, RouteError, DEFAULT_PATH, NAVIGATION_ITEMS};
use crate::nav::NavItem;
use tracing::debug;

/// Handle returned by [`NavigationProvider::subscribe`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Subscription(u64);

type Listener = Box<dyn FnMut(&str)>;

/// Owner of the current navigation path.
///
/// The path is the single source of truth for route-derived state. Interested parties subscribe
/// and are called with the new path every time it changes, and once immediately on subscription.
pub struct NavigationProvider {
    current: String,
    history: Vec<String>,
    listeners: Vec<(Subscription, Listener)>,
    next_id: u64,
}

impl std::fmt::Debug for NavigationProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationProvider")
            .field("current", &self.current)
            .field("history", &self.history)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for NavigationProvider {
    fn default() -> Self {
        Self {
            current: DEFAULT_PATH.to_string(),
            history: Vec::new(),
            listeners: Vec::new(),
            next_id: 0,
        }
    }
}

impl NavigationProvider {
    /// Start at `path`, e.g. the URL the app was deep-linked to.
    pub fn new(path: &str) -> Result<Self, RouteError> {
        check_path(path)?;

        Ok(Self {
            current: path.to_string(),
            ..Default::default()
        })
    }

    pub fn current_path(&self) -> &str {
        &self.current
    }

    pub fn route(&self) -> Route {
        Route::from_path(&self.current)
    }

    /// The highlighted navigation tab is simply the current path.
    pub fn active_tab(&self) -> &str {
        &self.current
    }

    pub fn is_active(&self, path: &str) -> bool {
        self.current == path
    }

    pub fn items(&self) -> &'static [NavItem] {
        &NAVIGATION_ITEMS
    }

    /// Paths visited before the current one, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn subscribe(&mut self, mut listener: impl FnMut(&str) + 'static) -> Subscription {
        let subscription = Subscription(self.next_id);
        self.next_id += 1;

        listener(&self.current);
        self.listeners.push((subscription, Box::new(listener)));

        subscription
    }

    /// Returns `false` if the subscription was not registered.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(id, _)| *id != subscription);

        self.listeners.len() != before
    }

    /// Navigate to `path`. Returns whether the path changed; listeners only hear about changes.
    pub fn navigate(&mut self, path: &str) -> Result<bool, RouteError> {
        check_path(path)?;

        Ok(self.set_path(path.to_string(), true))
    }

    /// Navigate to a known route. Route paths are always absolute, so this cannot fail.
    pub fn navigate_to(&mut self, route: &Route) -> bool {
        self.set_path(route.path().to_string(), true)
    }

    /// Return to the previous path, if any.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => self.set_path(previous, false),
            None => false,
        }
    }

    fn set_path(&mut self, path: String, record: bool) -> bool {
        if path == self.current {
            return false;
        }

        debug!("Navigating from `{}` to `{path}`", self.current);
        let previous = std::mem::replace(&mut self.current, path);
        if record {
            self.history.push(previous);
        }

        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.current);
        }

        true
    }
}

fn check_path(path: &str) -> Result<(), RouteError> {
    if path.starts_with('/') {
        Ok(())
    } else {
        Err(RouteError::Relative(path.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn listeners_hear_changes_only() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut nav = NavigationProvider::default();

        let log = Rc::clone(&seen);
        let subscription = nav.subscribe(move |path| log.borrow_mut().push(path.to_string()));

        assert!(nav.navigate("/transactions").unwrap());
        assert!(!nav.navigate("/transactions").unwrap());
        assert!(nav.navigate_to(&Route::Send));
        assert!(nav.is_active("/send"));
        assert_eq!(nav.active_tab(), "/send");

        assert!(nav.unsubscribe(subscription));
        assert!(!nav.unsubscribe(subscription));
        nav.navigate("/settings").unwrap();

        assert_eq!(
            *seen.borrow(),
            ["/dashboard", "/transactions", "/send"].map(String::from)
        );
    }

    #[test]
    #[traced_test]
    fn back_walks_history() {
        let mut nav = NavigationProvider::new("/login").unwrap();
        nav.navigate("/dashboard").unwrap();
        nav.navigate("/receive").unwrap();

        assert_eq!(nav.history(), ["/login", "/dashboard"]);
        assert!(nav.back());
        assert_eq!(nav.route(), Route::Dashboard);
        assert!(nav.back());
        assert_eq!(nav.route(), Route::Login);
        assert!(!nav.back());
    }

    #[test]
    #[traced_test]
    fn relative_paths_are_rejected() {
        assert!(NavigationProvider::new("dashboard").is_err());

        let mut nav = NavigationProvider::default();
        let err = nav.navigate("send").unwrap_err();
        assert!(matches!(err, RouteError::Relative(ref path) if path == "send"));
        assert_eq!(nav.current_path(), DEFAULT_PATH);
    }
}
