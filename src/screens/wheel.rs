use std::time::Duration;

use log::{debug, info};
use rand::Rng;

use super::{clear_timer, Action, Screen, ScreenContext, View};
use crate::feedback;
use crate::navigation::{NavOptions, Route};
use crate::scheduler::TimerId;

pub const SPIN_DURATION: Duration = Duration::from_millis(3000);
pub const FLASH_DURATION: Duration = Duration::from_millis(500);
pub const MIN_SECONDS: u32 = 8;
pub const MAX_SECONDS: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelState {
    Idle,
    Spinning {
        result: u32,
        /// Visual only; total rotation in degrees.
        rotation: f64,
        started_at: Duration,
    },
    Settled {
        result: u32,
        rotation: f64,
    },
}

/// Produces `seconds_x`.
///
/// The result is drawn when the spin starts; the 3 s animation only plays it
/// out. Moving on to the timing game needs an explicit confirm.
#[derive(Debug)]
pub struct WheelScreen {
    state: WheelState,
    flash: bool,
    settle_timer: Option<TimerId>,
    flash_timer: Option<TimerId>,
}

impl Default for WheelScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl WheelScreen {
    pub fn new() -> Self {
        Self {
            state: WheelState::Idle,
            flash: false,
            settle_timer: None,
            flash_timer: None,
        }
    }

    pub fn state(&self) -> WheelState {
        self.state
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.state, WheelState::Spinning { .. })
    }

    pub fn result(&self) -> Option<u32> {
        match self.state {
            WheelState::Idle => None,
            WheelState::Spinning { result, .. } | WheelState::Settled { result, .. } => {
                Some(result)
            }
        }
    }

    pub fn flash(&self) -> bool {
        self.flash
    }

    fn spin(&mut self, ctx: &mut ScreenContext<'_>) {
        let result = ctx.rng.gen_range(MIN_SECONDS..=MAX_SECONDS);
        let turns: f64 = 5.0 + ctx.rng.gen::<f64>() * 3.0;
        self.state = WheelState::Spinning {
            result,
            rotation: turns * 360.0,
            started_at: ctx.now,
        };
        self.flash = false;
        clear_timer(&mut self.flash_timer, ctx.scheduler);
        self.settle_timer = Some(ctx.scheduler.set_timeout(ctx.now, SPIN_DURATION));
        debug!("wheel: spinning towards {result}s");
    }

    fn settle(&mut self, ctx: &mut ScreenContext<'_>) {
        let WheelState::Spinning {
            result, rotation, ..
        } = self.state
        else {
            return;
        };
        ctx.store.set_x(result);
        self.state = WheelState::Settled { result, rotation };
        ctx.feedback.vibrate(feedback::WHEEL_SETTLE);
        self.flash = true;
        self.flash_timer = Some(ctx.scheduler.set_timeout(ctx.now, FLASH_DURATION));
        info!("wheel: settled on {result}s");
    }
}

impl Screen for WheelScreen {
    fn route(&self) -> Route {
        Route::Wheel
    }

    fn enter(&mut self, _ctx: &mut ScreenContext<'_>) {}

    fn on_action(&mut self, action: Action, ctx: &mut ScreenContext<'_>) {
        match (action, self.state) {
            (Action::Primary, WheelState::Idle) => self.spin(ctx),
            (Action::Primary, WheelState::Settled { .. }) => {
                ctx.navigator.navigate(Route::Timing, NavOptions::push());
            }
            (Action::Back, _) => {
                if self.is_spinning() {
                    debug!("wheel: left mid-spin, result discarded");
                }
                ctx.feedback.vibrate(feedback::BACK);
                ctx.navigator.navigate(Route::Home, NavOptions::push());
            }
            _ => {}
        }
    }

    fn on_timer(&mut self, id: TimerId, ctx: &mut ScreenContext<'_>) {
        if self.settle_timer == Some(id) {
            self.settle_timer = None;
            self.settle(ctx);
        } else if self.flash_timer == Some(id) {
            self.flash_timer = None;
            self.flash = false;
        }
    }

    fn teardown(&mut self, ctx: &mut ScreenContext<'_>) {
        clear_timer(&mut self.settle_timer, ctx.scheduler);
        clear_timer(&mut self.flash_timer, ctx.scheduler);
    }

    fn view(&self) -> View<'_> {
        View::Wheel(self)
    }
}
