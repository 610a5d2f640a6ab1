use std::io::{self, Write};

use log::debug;

pub const BACK: &[u64] = &[20];
pub const WHEEL_SETTLE: &[u64] = &[50, 100, 50];
pub const PERFECT: &[u64] = &[10, 25, 10];
pub const GREAT: &[u64] = &[15, 20];
pub const PLAIN: &[u64] = &[25];
pub const INSPIRE_START: &[u64] = &[25];
pub const HOLD_START: &[u64] = &[15, 60, 15];

/// Haptic and audio cues. Best effort: implementations swallow failures.
pub trait Feedback {
    /// Vibration pattern in milliseconds, alternating on/off.
    fn vibrate(&mut self, pattern_ms: &[u64]);
    /// A short tick sound.
    fn tone(&mut self);
}

/// Terminal rendition of the cues.
///
/// There is no motor to drive, so a vibration becomes a border pulse the UI
/// shows for the pattern's total length. The tone is the terminal bell.
#[derive(Debug)]
pub struct TerminalFeedback {
    haptics: bool,
    sound: bool,
    pulse_ms: Option<u64>,
}

impl TerminalFeedback {
    pub fn new(haptics: bool, sound: bool) -> Self {
        Self {
            haptics,
            sound,
            pulse_ms: None,
        }
    }

    /// Length of the most recent vibration, consumed by the renderer.
    pub fn take_pulse(&mut self) -> Option<u64> {
        self.pulse_ms.take()
    }
}

impl Feedback for TerminalFeedback {
    fn vibrate(&mut self, pattern_ms: &[u64]) {
        if !self.haptics {
            return;
        }
        let total: u64 = pattern_ms.iter().sum();
        if total > 0 {
            self.pulse_ms = Some(total);
        }
    }

    fn tone(&mut self) {
        if !self.sound {
            return;
        }
        let mut out = io::stdout();
        if let Err(e) = out.write_all(b"\x07").and_then(|_| out.flush()) {
            debug!("feedback: bell unavailable: {e}");
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cue {
    Vibrate(Vec<u64>),
    Tone,
}

/// Records cues for assertions.
#[derive(Debug, Default)]
pub struct RecordingFeedback {
    pub cues: Vec<Cue>,
}

impl RecordingFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vibrations(&self) -> Vec<&[u64]> {
        self.cues
            .iter()
            .filter_map(|c| match c {
                Cue::Vibrate(p) => Some(p.as_slice()),
                Cue::Tone => None,
            })
            .collect()
    }

    pub fn tones(&self) -> usize {
        self.cues.iter().filter(|c| **c == Cue::Tone).count()
    }
}

impl Feedback for RecordingFeedback {
    fn vibrate(&mut self, pattern_ms: &[u64]) {
        self.cues.push(Cue::Vibrate(pattern_ms.to_vec()));
    }

    fn tone(&mut self) {
        self.cues.push(Cue::Tone);
    }
}
