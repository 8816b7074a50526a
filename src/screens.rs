//! Screen state machines and the application shell that mounts them.
//!
//! Exactly one screen is mounted at a time, chosen by the current route. Screens queue their
//! simulated network calls on the shared [`Scheduler`]; each call is tied to the screen's
//! [`Lifetime`](crate::util::timer::Lifetime), so unmounting a screen discards its pending work.

use crate::model::Transaction;
use crate::nav::{ModalController, ModalType, NavigationProvider, Route, RouteError};
use crate::util::timer::Scheduler;
use rand::Rng;
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, warn};

use self::dashboard::DashboardScreen;
use self::login::LoginScreen;
use self::quick_transfer::QuickTransferForm;
use self::receive::ReceiveScreen;
use self::send::SendScreen;
use self::settings::{Preferences, SettingsScreen};
use self::transactions::TransactionsScreen;

pub mod dashboard;
pub mod login;
pub mod quick_transfer;
pub mod receive;
pub mod send;
pub mod settings;
pub mod transactions;

/// Per-field validation messages. Empty means the form is valid.
pub type FormErrors<F> = BTreeMap<F, String>;

/// Round half away from zero and pad to exactly `dp` decimal places.
///
/// Values too large to carry `dp` fractional digits keep the digits they have, then get padded.
pub(crate) fn fixed(value: Decimal, dp: u32) -> String {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    let scale = rounded.scale().min(dp);
    let padding = "0".repeat((dp - scale) as usize);

    match (scale, padding.is_empty()) {
        (_, true) => rounded.to_string(),
        (0, false) => format!("{rounded}.{padding}"),
        _ => format!("{rounded}{padding}"),
    }
}

/// A timed completion, addressed to the screen that scheduled it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AppEvent {
    Dashboard(dashboard::Completion),
    Transactions(transactions::Completion),
    Send(send::Completion),
    QuickTransfer(quick_transfer::Completion),
    Login(login::Completion),
}

/// The mounted screen.
#[derive(Debug)]
pub enum Screen {
    Dashboard(DashboardScreen),
    Transactions(TransactionsScreen),
    Send(SendScreen),
    Receive(ReceiveScreen),
    Settings(SettingsScreen),
    Login(LoginScreen),
    NotFound(String),
}

impl Screen {
    fn mount(
        route: &Route,
        scheduler: &mut Scheduler<AppEvent>,
        preferences: &Preferences,
    ) -> Self {
        debug!("Mounting screen for {route}");

        match route {
            Route::Dashboard => Self::Dashboard(DashboardScreen::new()),
            Route::Transactions => Self::Transactions(TransactionsScreen::enter(scheduler)),
            Route::Send => Self::Send(SendScreen::new()),
            Route::Receive => Self::Receive(ReceiveScreen::new(chrono::Utc::now().naive_utc())),
            Route::Settings => Self::Settings(SettingsScreen::new(preferences.clone())),
            Route::Login => Self::Login(LoginScreen::new()),
            Route::NotFound(path) => Self::NotFound(path.clone()),
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Self::Dashboard(_) => Route::Dashboard,
            Self::Transactions(_) => Route::Transactions,
            Self::Send(_) => Route::Send,
            Self::Receive(_) => Route::Receive,
            Self::Settings(_) => Route::Settings,
            Self::Login(_) => Route::Login,
            Self::NotFound(path) => Route::NotFound(path.clone()),
        }
    }
}

/// Mutable access to the mounted screen along with what its actions need.
pub struct ScreenMut<'a, R> {
    pub screen: &'a mut Screen,
    pub scheduler: &'a mut Scheduler<AppEvent>,
    pub rng: &'a mut R,
}

/// The application shell: navigation, the route-driven modal, and the mounted screen.
pub struct App<R> {
    nav: NavigationProvider,
    modal: ModalController,
    scheduler: Scheduler<AppEvent>,
    screen: Screen,
    quick_transfer: Option<QuickTransferForm>,
    transactions: Vec<Transaction>,
    preferences: Preferences,
    rng: R,
}

impl<R: Rng> App<R> {
    /// Start the app at `path` (a deep link), e.g. `/send` opens the send modal immediately.
    pub fn new(
        path: &str,
        transactions: Vec<Transaction>,
        preferences: Preferences,
        rng: R,
    ) -> Result<Self, RouteError> {
        let mut nav = NavigationProvider::new(path)?;
        let modal = ModalController::attach(&mut nav);
        let mut scheduler = Scheduler::new();
        let screen = Screen::mount(&nav.route(), &mut scheduler, &preferences);

        let mut app = Self {
            nav,
            modal,
            scheduler,
            screen,
            quick_transfer: None,
            transactions,
            preferences,
            rng,
        };
        app.sync_modal();

        Ok(app)
    }

    pub fn nav(&self) -> &NavigationProvider {
        &self.nav
    }

    pub fn modal(&self) -> &ModalController {
        &self.modal
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> ScreenMut<'_, R> {
        ScreenMut {
            screen: &mut self.screen,
            scheduler: &mut self.scheduler,
            rng: &mut self.rng,
        }
    }

    /// The quick-transfer form, present exactly while the transaction modal is open.
    pub fn quick_transfer(&self) -> Option<&QuickTransferForm> {
        self.quick_transfer.as_ref()
    }

    pub fn quick_transfer_mut(&mut self) -> Option<&mut QuickTransferForm> {
        self.quick_transfer.as_mut()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Committed preferences. Edits on the settings screen are committed when it unmounts.
    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    pub fn pending(&self) -> usize {
        self.scheduler.pending()
    }

    pub fn navigate(&mut self, path: &str) -> Result<(), RouteError> {
        if self.nav.navigate(path)? {
            self.sync();
        }

        Ok(())
    }

    pub fn navigate_to(&mut self, route: &Route) {
        if self.nav.navigate_to(route) {
            self.sync();
        }
    }

    pub fn back(&mut self) {
        if self.nav.back() {
            self.sync();
        }
    }

    pub fn open_modal(&mut self, kind: ModalType) {
        if self.modal.open(&mut self.nav, kind) {
            self.sync();
        }
    }

    pub fn close_modal(&mut self) {
        if self.modal.close(&mut self.nav) {
            self.sync();
        }
    }

    pub fn submit_quick_transfer(&mut self) -> bool {
        match self.quick_transfer.as_mut() {
            Some(form) => form.submit(&mut self.scheduler),
            None => false,
        }
    }

    /// Move the clock forward, delivering every completion that falls due on the way.
    ///
    /// Follow-up work scheduled by a completion is delivered too if it falls due in time.
    pub fn advance(&mut self, by: Duration) {
        let until = self.scheduler.now() + by;

        while let Some(event) = self.scheduler.pop_due(until) {
            if let Some(route) = self.dispatch(event) {
                self.navigate_to(&route);
            }
        }
    }

    fn dispatch(&mut self, event: AppEvent) -> Option<Route> {
        debug!("Delivering {event:?}");

        match (event, &mut self.screen) {
            (AppEvent::Dashboard(completion), Screen::Dashboard(screen)) => {
                screen.handle(completion);
                None
            }
            (AppEvent::Transactions(completion), Screen::Transactions(screen)) => {
                screen.handle(completion);
                None
            }
            (AppEvent::Send(completion), Screen::Send(screen)) => {
                screen.handle(completion, &mut self.scheduler, &mut self.rng)
            }
            (AppEvent::Login(completion), Screen::Login(screen)) => {
                screen.handle(completion, &mut self.scheduler)
            }
            (AppEvent::QuickTransfer(completion), _) => {
                let form = self.quick_transfer.as_mut()?;
                form.handle(completion)
                    .then(|| Route::from_path(crate::nav::DEFAULT_PATH))
            }
            (event, screen) => {
                warn!("Dropping {event:?}, {} is mounted", screen.route());
                None
            }
        }
    }

    fn sync(&mut self) {
        let route = self.nav.route();
        if self.screen.route() != route {
            let next = Screen::mount(&route, &mut self.scheduler, &self.preferences);
            if let Screen::Settings(settings) = std::mem::replace(&mut self.screen, next) {
                self.preferences = settings.into_preferences();
            }
        }

        self.sync_modal();
    }

    fn sync_modal(&mut self) {
        let state = self.modal.state();
        match &self.quick_transfer {
            Some(form) if state.is_open && form.kind() == state.modal_type => {}
            _ if state.is_open => {
                self.quick_transfer = Some(QuickTransferForm::new(state.modal_type));
            }
            _ => self.quick_transfer = None,
        }
    }
}
