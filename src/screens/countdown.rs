use std::time::Duration;

use log::{debug, info};

use super::{clear_timer, Screen, ScreenContext, View};
use crate::feedback;
use crate::guard::{self, Entry};
use crate::navigation::{NavOptions, Route};
use crate::scheduler::TimerId;
use crate::sequencer::{Phase, PhaseSequencer, Tick};

pub const TICK: Duration = Duration::from_secs(1);

/// Breathing countdown: inspire for `seconds_y`, hold for `seconds_x`,
/// then wipe the session and return to the wheel.
#[derive(Debug, Default)]
pub struct CountdownScreen {
    sequencer: Option<PhaseSequencer>,
    tick_timer: Option<TimerId>,
}

impl CountdownScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` until the guard has passed.
    pub fn phase(&self) -> Option<Phase> {
        self.sequencer.as_ref().map(|s| s.phase())
    }

    pub fn remaining(&self) -> Option<u32> {
        self.sequencer.as_ref().map(|s| s.remaining())
    }

    fn schedule_tick(&mut self, ctx: &mut ScreenContext<'_>) {
        self.tick_timer = Some(ctx.scheduler.set_timeout(ctx.now, TICK));
    }
}

impl Screen for CountdownScreen {
    fn route(&self) -> Route {
        Route::Countdown
    }

    fn enter(&mut self, ctx: &mut ScreenContext<'_>) {
        match guard::require_xy(&ctx.store.state()) {
            Entry::Ready(values) => {
                debug!("countdown: inspire {}s, hold {}s", values.y, values.x);
                self.sequencer = Some(PhaseSequencer::new(values));
                ctx.feedback.vibrate(feedback::INSPIRE_START);
                self.schedule_tick(ctx);
            }
            Entry::Redirect(route) => {
                info!(
                    "countdown: session values missing, redirecting to {}",
                    route.path()
                );
                ctx.navigator.navigate(route, NavOptions::replace());
            }
        }
    }

    fn on_timer(&mut self, id: TimerId, ctx: &mut ScreenContext<'_>) {
        if self.tick_timer != Some(id) {
            return;
        }
        self.tick_timer = None;
        let Some(sequencer) = self.sequencer.as_mut() else {
            return;
        };

        match sequencer.tick() {
            Tick::Counting => {
                ctx.feedback.tone();
                self.schedule_tick(ctx);
            }
            Tick::PhaseChanged(phase) => {
                debug!("countdown: entering {phase}");
                ctx.feedback.vibrate(feedback::HOLD_START);
                self.schedule_tick(ctx);
            }
            Tick::Complete => {
                info!("countdown: session complete");
                ctx.store.reset();
                ctx.navigator.navigate(Route::Wheel, NavOptions::replace());
            }
        }
    }

    fn teardown(&mut self, ctx: &mut ScreenContext<'_>) {
        clear_timer(&mut self.tick_timer, ctx.scheduler);
    }

    fn view(&self) -> View<'_> {
        View::Countdown(self)
    }
}
