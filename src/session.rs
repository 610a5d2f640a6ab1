use log::debug;

/// Results carried from one mini-game to the next.
///
/// `seconds_x` comes from the wheel (8..=20), `seconds_y` from the timing
/// game (4..=12). Both start absent and are cleared together when a session
/// completes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionState {
    pub seconds_x: Option<u32>,
    pub seconds_y: Option<u32>,
}

impl SessionState {
    pub fn is_empty(&self) -> bool {
        self.seconds_x.is_none() && self.seconds_y.is_none()
    }
}

/// Last-write-wins holder for the session values.
///
/// No range validation happens here; the screens only ever write values
/// already inside their domain.
#[derive(Debug, Default)]
pub struct SessionStore {
    state: SessionState,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_x(&mut self, n: u32) {
        debug!("session: seconds_x = {n}");
        self.state.seconds_x = Some(n);
    }

    pub fn set_y(&mut self, n: u32) {
        debug!("session: seconds_y = {n}");
        self.state.seconds_y = Some(n);
    }

    /// Clears both values in a single assignment.
    pub fn reset(&mut self) {
        debug!("session: reset");
        self.state = SessionState::default();
    }

    pub fn seconds_x(&self) -> Option<u32> {
        self.state.seconds_x
    }

    pub fn seconds_y(&self) -> Option<u32> {
        self.state.seconds_y
    }

    pub fn state(&self) -> SessionState {
        self.state
    }
}
