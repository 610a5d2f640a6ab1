use std::time::Duration;

use log::warn;
use rand::rngs::StdRng;

use crate::feedback::Feedback;
use crate::navigation::{NavOptions, Navigator, Route, Router};
use crate::scheduler::Scheduler;
use crate::screens::{self, Action, Screen, ScreenContext, View};
use crate::session::SessionStore;

/// Upper bound on navigations applied back to back (guard redirects).
const MAX_HOPS: usize = 8;

/// Owns the collaborators and the single mounted screen.
///
/// Every entry point takes the current time explicitly. After each screen
/// callback the pending navigation, if any, is applied: the old screen is
/// torn down before the new one is entered.
pub struct Host<F: Feedback> {
    store: SessionStore,
    scheduler: Scheduler,
    router: Router,
    feedback: F,
    rng: StdRng,
    screen: Option<Box<dyn Screen>>,
}

impl<F: Feedback> Host<F> {
    pub fn new(feedback: F, rng: StdRng) -> Self {
        Self {
            store: SessionStore::new(),
            scheduler: Scheduler::new(),
            router: Router::new(),
            feedback,
            rng,
            screen: None,
        }
    }

    pub fn start(&mut self, route: Route, now: Duration) {
        self.router.navigate(route, NavOptions::push());
        self.settle(now);
    }

    pub fn dispatch(&mut self, action: Action, now: Duration) {
        self.call(now, |screen, ctx| screen.on_action(action, ctx));
        self.settle(now);
    }

    /// Fire due timers one at a time, then deliver one frame to each
    /// live subscription.
    pub fn advance(&mut self, now: Duration) {
        while let Some(id) = self.scheduler.pop_due(now) {
            self.call(now, |screen, ctx| screen.on_timer(id, ctx));
            self.settle(now);
        }
        for id in self.scheduler.frame_subscriptions() {
            if self.scheduler.is_subscribed(id) {
                self.call(now, |screen, ctx| screen.on_frame(id, ctx));
                self.settle(now);
            }
        }
    }

    /// Tear down the mounted screen, e.g. on quit.
    pub fn shutdown(&mut self, now: Duration) {
        self.call(now, |screen, ctx| screen.teardown(ctx));
        self.screen = None;
    }

    pub fn current_route(&self) -> Option<Route> {
        self.screen.as_ref().map(|s| s.route())
    }

    pub fn view(&self) -> Option<View<'_>> {
        self.screen.as_ref().map(|s| s.view())
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut SessionStore {
        &mut self.store
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    pub fn feedback_mut(&mut self) -> &mut F {
        &mut self.feedback
    }

    fn call(&mut self, now: Duration, f: impl FnOnce(&mut dyn Screen, &mut ScreenContext<'_>)) {
        let Host {
            store,
            scheduler,
            router,
            feedback,
            rng,
            screen,
        } = self;
        let Some(screen) = screen.as_mut() else {
            return;
        };
        let mut ctx = ScreenContext {
            now,
            store,
            scheduler,
            navigator: router,
            feedback,
            rng,
        };
        f(&mut **screen, &mut ctx);
    }

    fn settle(&mut self, now: Duration) {
        for _ in 0..MAX_HOPS {
            let Some(nav) = self.router.take_pending() else {
                return;
            };
            self.call(now, |screen, ctx| screen.teardown(ctx));
            self.router.commit(nav);
            self.screen = Some(screens::build(nav.route));
            self.call(now, |screen, ctx| screen.enter(ctx));
        }
        if self.router.take_pending().is_some() {
            warn!("host: dropped navigation after {MAX_HOPS} consecutive hops");
        }
    }
}
