use std::str::FromStr;

use log::info;

/// Every addressable screen. Nothing is passed through the route itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum Route {
    Landing,
    Disclaimer,
    Home,
    Wheel,
    Timing,
    Countdown,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Landing,
        Route::Disclaimer,
        Route::Home,
        Route::Wheel,
        Route::Timing,
        Route::Countdown,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Disclaimer => "/disclaimer",
            Route::Home => "/home",
            Route::Wheel => "/home/game1",
            Route::Timing => "/home/game1-curseur",
            Route::Countdown => "/home/game1-respiration",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRoute(pub String);

impl std::fmt::Display for UnknownRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "no screen is mounted at '{}'", self.0)
    }
}

impl std::error::Error for UnknownRoute {}

impl FromStr for Route {
    type Err = UnknownRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };
        Route::ALL
            .into_iter()
            .find(|r| r.path() == normalized)
            .ok_or_else(|| UnknownRoute(s.to_string()))
    }
}

/// Whether a transition pushes a new history entry or replaces the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavOptions {
    pub replace: bool,
}

impl NavOptions {
    pub fn push() -> Self {
        Self { replace: false }
    }

    pub fn replace() -> Self {
        Self { replace: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub route: Route,
    pub options: NavOptions,
}

/// The navigate(path, options) primitive screens talk to.
pub trait Navigator {
    fn navigate(&mut self, route: Route, options: NavOptions);
}

/// History-keeping navigator used by the host.
///
/// Calls are not applied immediately: the latest request is held as pending
/// and the host performs teardown/mount once the current callback returns.
#[derive(Debug, Default)]
pub struct Router {
    history: Vec<Route>,
    pending: Option<Navigation>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<Route> {
        self.history.last().copied()
    }

    pub fn history(&self) -> &[Route] {
        &self.history
    }

    pub fn take_pending(&mut self) -> Option<Navigation> {
        self.pending.take()
    }

    /// Record the entry for a mounted route.
    pub fn commit(&mut self, nav: Navigation) {
        if nav.options.replace {
            self.history.pop();
        }
        self.history.push(nav.route);
    }
}

impl Navigator for Router {
    fn navigate(&mut self, route: Route, options: NavOptions) {
        info!(
            "navigate: {} ({})",
            route.path(),
            if options.replace { "replace" } else { "push" }
        );
        self.pending = Some(Navigation { route, options });
    }
}

/// Test navigator that records every call in order.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    pub calls: Vec<Navigation>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<Navigation> {
        self.calls.last().copied()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, route: Route, options: NavOptions) {
        self.calls.push(Navigation { route, options });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn paths_round_trip_through_from_str() {
        for route in Route::ALL {
            assert_eq!(route.path().parse::<Route>(), Ok(route));
        }
    }

    #[test]
    fn trailing_slash_is_accepted() {
        assert_eq!("/home/".parse::<Route>(), Ok(Route::Home));
        assert_eq!("/".parse::<Route>(), Ok(Route::Landing));
    }

    #[test]
    fn unknown_paths_are_rejected() {
        assert_matches!("/home/game-2".parse::<Route>(), Err(UnknownRoute(_)));
    }

    #[test]
    fn router_holds_only_the_latest_request() {
        let mut router = Router::new();
        router.navigate(Route::Home, NavOptions::push());
        router.navigate(Route::Wheel, NavOptions::replace());

        let pending = router.take_pending();
        assert_eq!(
            pending,
            Some(Navigation {
                route: Route::Wheel,
                options: NavOptions::replace()
            })
        );
        assert_eq!(router.take_pending(), None);
    }

    #[test]
    fn commit_push_and_replace() {
        let mut router = Router::new();
        router.commit(Navigation {
            route: Route::Wheel,
            options: NavOptions::push(),
        });
        router.commit(Navigation {
            route: Route::Timing,
            options: NavOptions::push(),
        });
        router.commit(Navigation {
            route: Route::Wheel,
            options: NavOptions::replace(),
        });

        assert_eq!(router.history(), &[Route::Wheel, Route::Wheel]);
        assert_eq!(router.current(), Some(Route::Wheel));
    }

    #[test]
    fn recording_navigator_keeps_order() {
        let mut nav = RecordingNavigator::new();
        nav.navigate(Route::Disclaimer, NavOptions::push());
        nav.navigate(Route::Home, NavOptions::push());
        assert_eq!(nav.calls.len(), 2);
        assert_eq!(nav.last().map(|n| n.route), Some(Route::Home));
    }
}
