use super::{Action, Screen, ScreenContext, View};
use crate::navigation::{NavOptions, Route};

pub const TITLE: &str = "Slom Slom";
pub const TAGLINE: &str = "This place is unstable. Go on if you dare.";

#[derive(Debug, Default)]
pub struct LandingScreen;

impl LandingScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Screen for LandingScreen {
    fn route(&self) -> Route {
        Route::Landing
    }

    fn enter(&mut self, _ctx: &mut ScreenContext<'_>) {}

    fn on_action(&mut self, action: Action, ctx: &mut ScreenContext<'_>) {
        if action == Action::Primary {
            ctx.navigator.navigate(Route::Disclaimer, NavOptions::push());
        }
    }

    fn teardown(&mut self, _ctx: &mut ScreenContext<'_>) {}

    fn view(&self) -> View<'_> {
        View::Landing(self)
    }
}
