//! Per-screen state machines.
//!
//! A screen is mounted by the host, receives user actions, timer and frame
//! callbacks through a [`ScreenContext`], and is torn down before the next
//! screen is entered. Rendering lives in `ui`; screens only expose a [`View`].

pub mod countdown;
pub mod disclaimer;
pub mod home;
pub mod landing;
pub mod timing;
pub mod wheel;

use std::time::Duration;

use rand::rngs::StdRng;

use crate::feedback::Feedback;
use crate::navigation::{Navigator, Route};
use crate::scheduler::{FrameId, Scheduler, TimerId};
use crate::session::SessionStore;

pub use countdown::CountdownScreen;
pub use disclaimer::DisclaimerScreen;
pub use home::HomeScreen;
pub use landing::LandingScreen;
pub use timing::TimingScreen;
pub use wheel::WheelScreen;

/// Input, already decoupled from concrete keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Start, continue, fire, open.
    Primary,
    Back,
    Next,
    Previous,
    /// Zero-based direct pick on menus.
    Choose(usize),
}

/// Everything a screen may touch while handling a callback.
pub struct ScreenContext<'a> {
    pub now: Duration,
    pub store: &'a mut SessionStore,
    pub scheduler: &'a mut Scheduler,
    pub navigator: &'a mut dyn Navigator,
    pub feedback: &'a mut dyn Feedback,
    pub rng: &'a mut StdRng,
}

/// Borrowed view of the active screen for the renderer.
#[derive(Debug, Clone, Copy)]
pub enum View<'a> {
    Landing(&'a LandingScreen),
    Disclaimer(&'a DisclaimerScreen),
    Home(&'a HomeScreen),
    Wheel(&'a WheelScreen),
    Timing(&'a TimingScreen),
    Countdown(&'a CountdownScreen),
}

pub trait Screen {
    fn route(&self) -> Route;

    /// Called once after mounting. Guards run here.
    fn enter(&mut self, ctx: &mut ScreenContext<'_>);

    fn on_action(&mut self, _action: Action, _ctx: &mut ScreenContext<'_>) {}

    fn on_timer(&mut self, _id: TimerId, _ctx: &mut ScreenContext<'_>) {}

    fn on_frame(&mut self, _id: FrameId, _ctx: &mut ScreenContext<'_>) {}

    /// Must cancel every outstanding timer and frame subscription.
    fn teardown(&mut self, ctx: &mut ScreenContext<'_>);

    fn view(&self) -> View<'_>;
}

/// Fresh, unentered screen for a route.
pub fn build(route: Route) -> Box<dyn Screen> {
    match route {
        Route::Landing => Box::new(LandingScreen::new()),
        Route::Disclaimer => Box::new(DisclaimerScreen::new()),
        Route::Home => Box::new(HomeScreen::new()),
        Route::Wheel => Box::new(WheelScreen::new()),
        Route::Timing => Box::new(TimingScreen::new()),
        Route::Countdown => Box::new(CountdownScreen::new()),
    }
}

/// Cancels a timer slot if occupied.
pub(crate) fn clear_timer(slot: &mut Option<TimerId>, scheduler: &mut Scheduler) {
    if let Some(id) = slot.take() {
        scheduler.cancel(id);
    }
}
