use crate::nav::{NavigationProvider, Route, Subscription, DEFAULT_PATH};
use std::{cell::Cell, rc::Rc};
use tracing::debug;

/// Which transaction modal is shown.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ModalType {
    #[default]
    Send,
    Receive,
}

impl ModalType {
    pub fn path(self) -> &'static str {
        match self {
            Self::Send => "/send",
            Self::Receive => "/receive",
        }
    }

    pub fn route(self) -> Route {
        match self {
            Self::Send => Route::Send,
            Self::Receive => Route::Receive,
        }
    }
}

/// The modal a path asks for, if any.
pub fn active_modal(path: &str) -> Option<ModalType> {
    match path {
        "/send" => Some(ModalType::Send),
        "/receive" => Some(ModalType::Receive),
        _ => None,
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ModalState {
    pub is_open: bool,
    /// Kept while closed so the closing modal still knows what it was showing.
    pub modal_type: ModalType,
}

impl ModalState {
    /// State after the path changes to `path`.
    pub fn next(self, path: &str) -> Self {
        match active_modal(path) {
            Some(modal_type) => Self {
                is_open: true,
                modal_type,
            },
            None => Self {
                is_open: false,
                ..self
            },
        }
    }
}

/// Keeps a [`ModalState`] in step with a [`NavigationProvider`].
///
/// The path is authoritative in both directions: opening and closing are navigations, and the
/// state only ever changes in response to the provider announcing a new path.
#[derive(Debug, Default)]
pub struct ModalController {
    state: Rc<Cell<ModalState>>,
    subscription: Option<Subscription>,
}

impl ModalController {
    /// Create a controller subscribed to `nav`. The state reflects the current path immediately.
    pub fn attach(nav: &mut NavigationProvider) -> Self {
        let state = Rc::new(Cell::new(ModalState::default()));

        let shared = Rc::clone(&state);
        let subscription = nav.subscribe(move |path| {
            let next = shared.get().next(path);
            if next != shared.get() {
                debug!("Modal state for `{path}`: {next:?}");
            }
            shared.set(next);
        });

        Self {
            state,
            subscription: Some(subscription),
        }
    }

    /// Stop following navigation. The last state is kept.
    pub fn detach(&mut self, nav: &mut NavigationProvider) {
        if let Some(subscription) = self.subscription.take() {
            nav.unsubscribe(subscription);
        }
    }

    pub fn state(&self) -> ModalState {
        self.state.get()
    }

    pub fn is_open(&self) -> bool {
        self.state.get().is_open
    }

    pub fn modal_type(&self) -> ModalType {
        self.state.get().modal_type
    }

    pub fn open(&self, nav: &mut NavigationProvider, kind: ModalType) -> bool {
        nav.navigate_to(&kind.route())
    }

    pub fn close(&self, nav: &mut NavigationProvider) -> bool {
        nav.navigate_to(&Route::from_path(DEFAULT_PATH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbtest::arbitrary::{Result as ArbResult, Unstructured};
    use arbtest::arbtest;
    use tracing_test::traced_test;

    fn arbitrary_path(u: &mut Unstructured<'_>) -> ArbResult<String> {
        let segment: String = u.arbitrary()?;
        Ok(format!("/{segment}"))
    }

    #[test]
    #[traced_test]
    fn follows_deep_links_and_clicks() {
        let mut nav = NavigationProvider::new("/send").unwrap();
        let modal = ModalController::attach(&mut nav);
        assert_eq!(
            modal.state(),
            ModalState {
                is_open: true,
                modal_type: ModalType::Send,
            }
        );

        assert!(modal.open(&mut nav, ModalType::Receive));
        assert_eq!(nav.current_path(), "/receive");
        assert!(modal.is_open());
        assert_eq!(modal.modal_type(), ModalType::Receive);

        assert!(modal.close(&mut nav));
        assert_eq!(nav.current_path(), DEFAULT_PATH);
        assert!(!modal.is_open());
        assert_eq!(modal.modal_type(), ModalType::Receive);
    }

    #[test]
    #[traced_test]
    fn detached_controller_stops_following() {
        let mut nav = NavigationProvider::default();
        let mut modal = ModalController::attach(&mut nav);
        modal.detach(&mut nav);

        nav.navigate("/send").unwrap();
        assert!(!modal.is_open());
    }

    #[test]
    fn other_paths_are_closed() {
        arbtest(|u| {
            let path = arbitrary_path(u)?;
            let prior = ModalState {
                is_open: u.arbitrary()?,
                modal_type: if u.arbitrary()? {
                    ModalType::Send
                } else {
                    ModalType::Receive
                },
            };

            let next = prior.next(&path);
            match path.as_str() {
                "/send" => assert_eq!(next.modal_type, ModalType::Send),
                "/receive" => assert_eq!(next.modal_type, ModalType::Receive),
                _ => {
                    assert!(!next.is_open);
                    assert_eq!(next.modal_type, prior.modal_type);
                }
            }
            Ok(())
        });
    }

    #[test]
    fn close_always_lands_closed() {
        arbtest(|u| {
            let mut nav = NavigationProvider::new(&arbitrary_path(u)?).unwrap();
            let modal = ModalController::attach(&mut nav);

            if u.arbitrary()? {
                modal.open(&mut nav, ModalType::Send);
            }
            modal.close(&mut nav);

            assert!(!modal.is_open());
            assert!(active_modal(nav.current_path()).is_none());
            Ok(())
        });
    }
}
