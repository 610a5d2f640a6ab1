use log::info;

use super::{Action, Screen, ScreenContext, View};
use crate::navigation::{NavOptions, Route};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub name: &'static str,
    /// `None` for games that are announced but not playable yet.
    pub route: Option<Route>,
}

pub const TILES: [Tile; 6] = [
    Tile {
        name: "Game 1",
        route: Some(Route::Wheel),
    },
    Tile {
        name: "Game 2",
        route: None,
    },
    Tile {
        name: "Game 3",
        route: None,
    },
    Tile {
        name: "Game 4",
        route: None,
    },
    Tile {
        name: "Game 5",
        route: None,
    },
    Tile {
        name: "Game 6",
        route: None,
    },
];

/// Game menu laid out as a two-column grid.
#[derive(Debug, Default)]
pub struct HomeScreen {
    selected: usize,
}

impl HomeScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn tiles(&self) -> &'static [Tile] {
        &TILES
    }

    fn open(&mut self, index: usize, ctx: &mut ScreenContext<'_>) {
        let Some(tile) = TILES.get(index) else {
            return;
        };
        self.selected = index;
        match tile.route {
            Some(route) => ctx.navigator.navigate(route, NavOptions::push()),
            None => info!("home: {} is not available yet", tile.name),
        }
    }
}

impl Screen for HomeScreen {
    fn route(&self) -> Route {
        Route::Home
    }

    fn enter(&mut self, _ctx: &mut ScreenContext<'_>) {}

    fn on_action(&mut self, action: Action, ctx: &mut ScreenContext<'_>) {
        match action {
            Action::Next => self.selected = (self.selected + 1) % TILES.len(),
            Action::Previous => {
                self.selected = (self.selected + TILES.len() - 1) % TILES.len()
            }
            Action::Choose(index) => self.open(index, ctx),
            Action::Primary => self.open(self.selected, ctx),
            Action::Back => {}
        }
    }

    fn teardown(&mut self, _ctx: &mut ScreenContext<'_>) {}

    fn view(&self) -> View<'_> {
        View::Home(self)
    }
}
