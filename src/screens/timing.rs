use std::time::Duration;

use log::{debug, info};

use super::{clear_timer, Action, Screen, ScreenContext, View};
use crate::guard::{self, Entry};
use crate::navigation::{NavOptions, Route};
use crate::scheduler::{FrameId, TimerId};
use crate::scoring::{self, Tier};
use crate::util::triangle_position;

/// One-way sweep of the cursor, 0 → 100.
pub const SWEEP: Duration = Duration::from_millis(950);
/// Time the score stays on screen before the countdown starts.
pub const ADVANCE_DELAY: Duration = Duration::from_millis(950);
pub const IMPACT_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimingState {
    /// Waiting for the guard, or redirected away.
    Inactive,
    Running,
    Locked { score: u32, tier: Tier },
}

/// Produces `seconds_y` from a single well-timed fire.
#[derive(Debug)]
pub struct TimingScreen {
    state: TimingState,
    position: f64,
    origin: Option<Duration>,
    impact: bool,
    frames: Option<FrameId>,
    advance_timer: Option<TimerId>,
    impact_timer: Option<TimerId>,
}

impl Default for TimingScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl TimingScreen {
    pub fn new() -> Self {
        Self {
            state: TimingState::Inactive,
            position: 0.0,
            origin: None,
            impact: false,
            frames: None,
            advance_timer: None,
            impact_timer: None,
        }
    }

    pub fn state(&self) -> TimingState {
        self.state
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn is_locked(&self) -> bool {
        matches!(self.state, TimingState::Locked { .. })
    }

    pub fn impact(&self) -> bool {
        self.impact
    }

    fn fire(&mut self, ctx: &mut ScreenContext<'_>) {
        if self.state != TimingState::Running {
            return;
        }
        if let Some(id) = self.frames.take() {
            ctx.scheduler.cancel_frames(id);
        }

        let score = scoring::score(self.position);
        let tier = Tier::of(score);
        self.state = TimingState::Locked { score, tier };

        self.impact = true;
        self.impact_timer = Some(ctx.scheduler.set_timeout(ctx.now, IMPACT_DURATION));

        ctx.store.set_y(score);
        ctx.feedback.vibrate(tier.vibration());
        self.advance_timer = Some(ctx.scheduler.set_timeout(ctx.now, ADVANCE_DELAY));
        info!(
            "timing: locked at {:.1}% -> {score}s ({tier})",
            self.position
        );
    }
}

impl Screen for TimingScreen {
    fn route(&self) -> Route {
        Route::Timing
    }

    fn enter(&mut self, ctx: &mut ScreenContext<'_>) {
        match guard::require_x(&ctx.store.state()) {
            Entry::Ready(x) => {
                debug!("timing: entered with seconds_x = {x}");
                self.state = TimingState::Running;
                self.frames = Some(ctx.scheduler.request_frames());
            }
            Entry::Redirect(route) => {
                info!("timing: no wheel result, redirecting to {}", route.path());
                ctx.navigator.navigate(route, NavOptions::replace());
            }
        }
    }

    fn on_action(&mut self, action: Action, ctx: &mut ScreenContext<'_>) {
        if action == Action::Primary {
            self.fire(ctx);
        }
    }

    fn on_frame(&mut self, id: FrameId, ctx: &mut ScreenContext<'_>) {
        if self.frames != Some(id) || self.state != TimingState::Running {
            return;
        }
        let origin = *self.origin.get_or_insert(ctx.now);
        self.position = triangle_position(ctx.now.saturating_sub(origin), SWEEP);
    }

    fn on_timer(&mut self, id: TimerId, ctx: &mut ScreenContext<'_>) {
        if self.advance_timer == Some(id) {
            self.advance_timer = None;
            ctx.navigator.navigate(Route::Countdown, NavOptions::push());
        } else if self.impact_timer == Some(id) {
            self.impact_timer = None;
            self.impact = false;
        }
    }

    fn teardown(&mut self, ctx: &mut ScreenContext<'_>) {
        if let Some(id) = self.frames.take() {
            ctx.scheduler.cancel_frames(id);
        }
        clear_timer(&mut self.advance_timer, ctx.scheduler);
        clear_timer(&mut self.impact_timer, ctx.scheduler);
    }

    fn view(&self) -> View<'_> {
        View::Timing(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback;
    use crate::navigation::Navigation;
    use crate::screens::harness::Harness;
    use assert_matches::assert_matches;

    const FRAME: Duration = Duration::from_millis(10);

    fn entered(x: Option<u32>) -> (Harness, TimingScreen) {
        let mut h = Harness::new();
        if let Some(x) = x {
            h.store.set_x(x);
        }
        let mut screen = TimingScreen::new();
        h.with(|ctx| screen.enter(ctx));
        (h, screen)
    }

    #[test]
    fn guard_redirects_without_wheel_result() {
        let (h, screen) = entered(None);

        assert_eq!(
            h.nav.calls,
            vec![Navigation {
                route: Route::Wheel,
                options: NavOptions::replace()
            }]
        );
        assert_eq!(screen.state(), TimingState::Inactive);
        assert!(h.scheduler.frame_subscriptions().is_empty());
        assert_eq!(h.scheduler.pending(), 0);
    }

    #[test]
    fn cursor_oscillates_with_wall_clock() {
        let (mut h, mut screen) = entered(Some(10));

        // First frame fixes the origin at t = 10ms
        h.advance(&mut screen, Duration::from_millis(10), FRAME);
        assert_eq!(screen.position(), 0.0);

        h.advance(&mut screen, Duration::from_millis(475), FRAME);
        assert!((screen.position() - 50.0).abs() < 1e-6);

        h.advance(&mut screen, Duration::from_millis(475), FRAME);
        assert!((screen.position() - 100.0).abs() < 1e-6);

        h.advance(&mut screen, Duration::from_millis(475), FRAME);
        assert!((screen.position() - 50.0).abs() < 1e-6);
    }

    #[test]
    fn fire_at_centre_scores_best_and_advances_after_delay() {
        let (mut h, mut screen) = entered(Some(10));
        h.advance(&mut screen, Duration::from_millis(10 + 475), FRAME);

        h.with(|ctx| screen.on_action(Action::Primary, ctx));

        assert_matches!(
            screen.state(),
            TimingState::Locked {
                score: 4,
                tier: Tier::Perfect
            }
        );
        assert_eq!(h.store.seconds_y(), Some(4));
        assert_eq!(h.feedback.vibrations(), vec![feedback::PERFECT]);
        assert!(h.scheduler.frame_subscriptions().is_empty());
        assert!(h.nav.calls.is_empty());

        h.advance(&mut screen, ADVANCE_DELAY, FRAME);
        assert_eq!(
            h.nav.calls,
            vec![Navigation {
                route: Route::Countdown,
                options: NavOptions::push()
            }]
        );
    }

    #[test]
    fn second_fire_is_a_no_op() {
        let (mut h, mut screen) = entered(Some(10));
        h.advance(&mut screen, Duration::from_millis(200), FRAME);

        h.with(|ctx| screen.on_action(Action::Primary, ctx));
        let locked = screen.state();
        let pending = h.scheduler.pending();

        h.with(|ctx| screen.on_action(Action::Primary, ctx));

        assert_eq!(screen.state(), locked);
        assert_eq!(h.scheduler.pending(), pending);
        assert_eq!(h.feedback.vibrations().len(), 1);

        h.advance(&mut screen, Duration::from_millis(5000), FRAME);
        assert_eq!(h.nav.calls.len(), 1);
    }

    #[test]
    fn position_freezes_on_lock() {
        let (mut h, mut screen) = entered(Some(10));
        h.advance(&mut screen, Duration::from_millis(300), FRAME);
        h.with(|ctx| screen.on_action(Action::Primary, ctx));
        let frozen = screen.position();

        h.advance(&mut screen, Duration::from_millis(400), FRAME);
        assert_eq!(screen.position(), frozen);
    }

    #[test]
    fn fire_at_edge_is_a_miss() {
        let (mut h, mut screen) = entered(Some(10));
        // origin at 10ms, frame at 10ms: position 0
        h.advance(&mut screen, Duration::from_millis(10), FRAME);
        h.with(|ctx| screen.on_action(Action::Primary, ctx));

        assert_matches!(
            screen.state(),
            TimingState::Locked {
                score: 12,
                tier: Tier::Miss
            }
        );
        assert_eq!(h.feedback.vibrations(), vec![feedback::PLAIN]);
    }

    #[test]
    fn impact_flash_is_short_lived() {
        let (mut h, mut screen) = entered(Some(10));
        h.advance(&mut screen, Duration::from_millis(100), FRAME);
        h.with(|ctx| screen.on_action(Action::Primary, ctx));
        assert!(screen.impact());

        h.advance(&mut screen, IMPACT_DURATION, FRAME);
        assert!(!screen.impact());
    }

    #[test]
    fn teardown_while_running_stops_frames() {
        let (mut h, mut screen) = entered(Some(10));
        h.advance(&mut screen, Duration::from_millis(100), FRAME);
        let before = screen.position();

        h.with(|ctx| screen.teardown(ctx));
        h.advance(&mut screen, Duration::from_millis(300), FRAME);

        assert_eq!(screen.position(), before);
        assert!(h.scheduler.frame_subscriptions().is_empty());
    }

    #[test]
    fn teardown_after_lock_cancels_navigation() {
        let (mut h, mut screen) = entered(Some(10));
        h.advance(&mut screen, Duration::from_millis(100), FRAME);
        h.with(|ctx| screen.on_action(Action::Primary, ctx));

        h.with(|ctx| screen.teardown(ctx));
        h.advance(&mut screen, Duration::from_millis(5000), FRAME);

        assert!(h.nav.calls.is_empty());
        assert_eq!(h.scheduler.pending(), 0);
    }
}
