use super::AppEvent;
use crate::model::fixtures::{dashboard_assets, portfolio_summary, MarketAsset, PortfolioSummary};
use crate::util::timer::{Lifetime, Scheduler};
use std::time::Duration;
use tracing::debug;

pub const REFRESH_DELAY: Duration = Duration::from_millis(1500);

/// Minimum downward pull, in pixels, that triggers a refresh on release.
pub const PULL_THRESHOLD: f64 = 100.0;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Completion {
    Refreshed,
}

/// Tracks a single pull-to-refresh touch sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PullGesture {
    start_y: Option<f64>,
    distance: f64,
}

impl PullGesture {
    /// A touch only starts a pull while the page is scrolled to the top.
    pub fn start(&mut self, y: f64, at_top: bool) {
        if at_top {
            self.start_y = Some(y);
        }
    }

    /// Returns `true` when the page should suppress its own scrolling for this move.
    pub fn move_to(&mut self, y: f64, at_top: bool) -> bool {
        let Some(start_y) = self.start_y.filter(|_| at_top) else {
            return false;
        };
        self.distance = y - start_y;

        self.distance > 0.0 && self.distance < PULL_THRESHOLD * 2.0
    }

    /// Finish the touch. Returns `true` when it was pulled far enough to refresh.
    pub fn end(&mut self) -> bool {
        let triggered = self.distance > PULL_THRESHOLD;
        *self = Self::default();

        triggered
    }
}

#[derive(Debug)]
pub struct DashboardScreen {
    lifetime: Lifetime,
    is_refreshing: bool,
    pull: PullGesture,
    assets: Vec<MarketAsset>,
    summary: PortfolioSummary,
}

impl Default for DashboardScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardScreen {
    pub fn new() -> Self {
        Self {
            lifetime: Lifetime::new(),
            is_refreshing: false,
            pull: PullGesture::default(),
            assets: dashboard_assets(),
            summary: portfolio_summary(),
        }
    }

    pub fn is_refreshing(&self) -> bool {
        self.is_refreshing
    }

    pub fn assets(&self) -> &[MarketAsset] {
        &self.assets
    }

    pub fn summary(&self) -> &PortfolioSummary {
        &self.summary
    }

    pub fn refresh(&mut self, scheduler: &mut Scheduler<AppEvent>) {
        if self.is_refreshing {
            debug!("Refresh already in flight");
            return;
        }

        self.is_refreshing = true;
        scheduler.schedule(
            REFRESH_DELAY,
            self.lifetime.token(),
            AppEvent::Dashboard(Completion::Refreshed),
        );
    }

    pub fn touch_start(&mut self, y: f64, at_top: bool) {
        self.pull.start(y, at_top);
    }

    pub fn touch_move(&mut self, y: f64, at_top: bool) -> bool {
        self.pull.move_to(y, at_top)
    }

    pub fn touch_end(&mut self, scheduler: &mut Scheduler<AppEvent>) {
        if self.pull.end() {
            self.refresh(scheduler);
        }
    }

    pub fn handle(&mut self, completion: Completion) {
        match completion {
            Completion::Refreshed => {
                self.is_refreshing = false;
                self.assets = dashboard_assets();
                self.summary = portfolio_summary();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn short_pulls_do_not_refresh() {
        let mut scheduler = Scheduler::new();
        let mut screen = DashboardScreen::new();

        screen.touch_start(50.0, true);
        assert!(screen.touch_move(140.0, true));
        screen.touch_end(&mut scheduler);
        assert!(!screen.is_refreshing());

        // Not scrolled to the top, so the touch never started a pull
        screen.touch_start(50.0, false);
        assert!(!screen.touch_move(400.0, true));
        screen.touch_end(&mut scheduler);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    #[traced_test]
    fn long_pull_refreshes_once() {
        let mut scheduler = Scheduler::new();
        let mut screen = DashboardScreen::new();

        screen.touch_start(50.0, true);
        assert!(!screen.touch_move(300.0, true));
        screen.touch_end(&mut scheduler);
        assert!(screen.is_refreshing());

        screen.refresh(&mut scheduler);
        assert_eq!(scheduler.pending(), 1);

        let Some(AppEvent::Dashboard(completion)) = scheduler.pop_due(REFRESH_DELAY) else {
            panic!("Expected the refresh to complete");
        };
        screen.handle(completion);
        assert!(!screen.is_refreshing());
        assert_eq!(screen.assets().len(), 3);
    }
}
