use crate::navigation::Route;
use crate::session::SessionState;

/// Outcome of an entry-time precondition check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry<T> {
    Ready(T),
    Redirect(Route),
}

/// Both upstream results, as needed by the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionValues {
    pub x: u32,
    pub y: u32,
}

/// The timing game needs the wheel result.
pub fn require_x(state: &SessionState) -> Entry<u32> {
    match state.seconds_x {
        Some(x) => Entry::Ready(x),
        None => Entry::Redirect(Route::Wheel),
    }
}

/// The countdown needs both results; anything missing restarts at the wheel.
pub fn require_xy(state: &SessionState) -> Entry<SessionValues> {
    match (state.seconds_x, state.seconds_y) {
        (Some(x), Some(y)) => Entry::Ready(SessionValues { x, y }),
        _ => Entry::Redirect(Route::Wheel),
    }
}
