use std::time::Duration;

use assert_matches::assert_matches;
use rand::{rngs::StdRng, SeedableRng};

use slom::feedback::{self, RecordingFeedback};
use slom::host::Host;
use slom::navigation::Route;
use slom::screens::timing::TimingState;
use slom::screens::wheel::{MAX_SECONDS, MIN_SECONDS};
use slom::screens::{Action, View};
use slom::sequencer::Phase;
use slom::session::SessionState;

/// Virtual clock driving a host in fixed frames.
struct Session {
    host: Host<RecordingFeedback>,
    now: Duration,
}

const FRAME: Duration = Duration::from_millis(10);

impl Session {
    fn new(seed: u64) -> Self {
        Self {
            host: Host::new(RecordingFeedback::new(), StdRng::seed_from_u64(seed)),
            now: Duration::ZERO,
        }
    }

    fn start(&mut self, route: Route) {
        self.host.start(route, self.now);
    }

    fn press(&mut self, action: Action) {
        self.host.dispatch(action, self.now);
    }

    fn wait(&mut self, by: Duration) {
        let end = self.now + by;
        while self.now < end {
            self.now = (self.now + FRAME).min(end);
            self.host.advance(self.now);
        }
    }

    fn route(&self) -> Option<Route> {
        self.host.current_route()
    }

    fn countdown(&self) -> Option<(Phase, u32)> {
        match self.host.view() {
            Some(View::Countdown(c)) => c.phase().zip(c.remaining()),
            _ => None,
        }
    }
}

#[test]
fn full_session_returns_the_store_to_its_initial_state() {
    let mut s = Session::new(21);
    s.start(Route::Landing);

    s.press(Action::Primary);
    assert_eq!(s.route(), Some(Route::Disclaimer));
    s.wait(Duration::from_millis(2500));
    assert_eq!(s.route(), Some(Route::Home));

    s.press(Action::Choose(0));
    assert_eq!(s.route(), Some(Route::Wheel));

    s.press(Action::Primary);
    s.wait(Duration::from_millis(3000));
    let x = s.host.store().seconds_x().expect("wheel settled");
    assert!((MIN_SECONDS..=MAX_SECONDS).contains(&x));
    // Settling does not move on by itself
    s.wait(Duration::from_secs(2));
    assert_eq!(s.route(), Some(Route::Wheel));

    s.press(Action::Primary);
    assert_eq!(s.route(), Some(Route::Timing));
    s.wait(Duration::from_millis(300));
    s.press(Action::Primary);
    let y = s.host.store().seconds_y().expect("timing locked");
    assert!((4..=12).contains(&y));

    s.wait(Duration::from_millis(950));
    assert_eq!(s.route(), Some(Route::Countdown));
    assert_eq!(s.countdown(), Some((Phase::Inspire, y)));

    let mut seen = vec![s.countdown().unwrap()];
    while s.route() == Some(Route::Countdown) {
        s.wait(Duration::from_secs(1));
        if let Some(step) = s.countdown() {
            seen.push(step);
        }
    }

    let expected: Vec<(Phase, u32)> = (1..=y)
        .rev()
        .map(|n| (Phase::Inspire, n))
        .chain((1..=x).rev().map(|n| (Phase::Hold, n)))
        .collect();
    assert_eq!(seen, expected);

    assert_eq!(s.route(), Some(Route::Wheel));
    assert_eq!(s.host.store().state(), SessionState::default());
    // The countdown replaced itself with the wheel
    assert_eq!(
        s.host.router().history(),
        &[
            Route::Landing,
            Route::Disclaimer,
            Route::Home,
            Route::Wheel,
            Route::Timing,
            Route::Wheel,
        ]
    );
    assert_eq!(s.host.scheduler().pending(), 0);
    assert!(s.host.scheduler().frame_subscriptions().is_empty());
}

#[test]
fn feedback_cues_follow_the_session() {
    let mut s = Session::new(4);
    s.host.store_mut().set_x(8);
    s.start(Route::Timing);
    // Origin is the first frame; half a sweep later the cursor is centred
    s.wait(FRAME);
    s.wait(Duration::from_millis(475));
    s.press(Action::Primary);
    assert_matches!(
        s.host.view(),
        Some(View::Timing(t)) if matches!(t.state(), TimingState::Locked { score: 4, .. })
    );

    s.wait(Duration::from_millis(950));
    s.wait(Duration::from_secs(4 + 8));

    assert_eq!(
        s.host.feedback().vibrations(),
        vec![feedback::PERFECT, feedback::INSPIRE_START, feedback::HOLD_START]
    );
    // Every countdown second except the two phase boundaries rings once
    assert_eq!(s.host.feedback().tones(), (4 - 1) + (8 - 1));
    assert_eq!(s.route(), Some(Route::Wheel));
}

#[test]
fn deep_links_without_session_values_land_on_the_wheel() {
    for route in [Route::Timing, Route::Countdown] {
        let mut s = Session::new(1);
        s.start(route);

        assert_eq!(s.route(), Some(Route::Wheel));
        assert_eq!(s.host.router().history(), &[Route::Wheel]);
        assert_eq!(s.host.scheduler().pending(), 0);
        assert!(s.host.scheduler().frame_subscriptions().is_empty());
        assert!(s.host.feedback().cues.is_empty());
    }
}

#[test]
fn countdown_with_only_x_redirects() {
    let mut s = Session::new(1);
    s.host.store_mut().set_x(10);
    s.start(Route::Countdown);
    assert_eq!(s.route(), Some(Route::Wheel));
}

#[test]
fn leaving_the_wheel_mid_spin_discards_the_result() {
    let mut s = Session::new(9);
    s.start(Route::Wheel);
    s.press(Action::Primary);
    s.wait(Duration::from_millis(1000));

    s.press(Action::Back);
    assert_eq!(s.route(), Some(Route::Home));
    assert_eq!(s.host.feedback().vibrations(), vec![feedback::BACK]);
    assert_eq!(s.host.scheduler().pending(), 0);

    s.wait(Duration::from_secs(5));
    assert_eq!(s.route(), Some(Route::Home));
    assert_eq!(s.host.store().seconds_x(), None);
    assert_eq!(s.host.scheduler().pending(), 0);
}

#[test]
fn back_from_a_settled_wheel_goes_home() {
    let mut s = Session::new(9);
    s.start(Route::Wheel);
    s.press(Action::Primary);
    s.wait(Duration::from_millis(3000));

    s.press(Action::Back);
    assert_eq!(s.route(), Some(Route::Home));
    assert_eq!(
        s.host.feedback().vibrations(),
        vec![feedback::WHEEL_SETTLE, feedback::BACK]
    );
    // The settle flash timer went with the wheel
    assert_eq!(s.host.scheduler().pending(), 0);
}
