use std::time::Duration;

use super::{clear_timer, Screen, ScreenContext, View};
use crate::navigation::{NavOptions, Route};
use crate::scheduler::TimerId;

pub const HOLD_DURATION: Duration = Duration::from_millis(2500);

/// Shown briefly between the landing page and the game menu.
#[derive(Debug, Default)]
pub struct DisclaimerScreen {
    timer: Option<TimerId>,
}

impl DisclaimerScreen {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Screen for DisclaimerScreen {
    fn route(&self) -> Route {
        Route::Disclaimer
    }

    fn enter(&mut self, ctx: &mut ScreenContext<'_>) {
        self.timer = Some(ctx.scheduler.set_timeout(ctx.now, HOLD_DURATION));
    }

    fn on_timer(&mut self, id: TimerId, ctx: &mut ScreenContext<'_>) {
        if self.timer == Some(id) {
            self.timer = None;
            ctx.navigator.navigate(Route::Home, NavOptions::push());
        }
    }

    fn teardown(&mut self, ctx: &mut ScreenContext<'_>) {
        clear_timer(&mut self.timer, ctx.scheduler);
    }

    fn view(&self) -> View<'_> {
        View::Disclaimer(self)
    }
}
