use crate::guard::SessionValues;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Phase {
    #[strum(serialize = "INSPIRE")]
    Inspire,
    #[strum(serialize = "HOLD")]
    Hold,
}

/// What a single one-second tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Counting,
    PhaseChanged(Phase),
    Complete,
}

/// Two back-to-back countdowns: inspire for `y` seconds, then hold for `x`.
///
/// Pure state; whoever owns the timer calls [`PhaseSequencer::tick`] once
/// per elapsed second.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseSequencer {
    values: SessionValues,
    phase: Phase,
    remaining: u32,
    complete: bool,
}

impl PhaseSequencer {
    pub fn new(values: SessionValues) -> Self {
        Self {
            values,
            phase: Phase::Inspire,
            remaining: values.y,
            complete: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn tick(&mut self) -> Tick {
        if self.complete {
            return Tick::Complete;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining > 0 {
            return Tick::Counting;
        }
        match self.phase {
            Phase::Inspire => {
                self.phase = Phase::Hold;
                self.remaining = self.values.x;
                Tick::PhaseChanged(Phase::Hold)
            }
            Phase::Hold => {
                self.complete = true;
                Tick::Complete
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn seq(x: u32, y: u32) -> PhaseSequencer {
        PhaseSequencer::new(SessionValues { x, y })
    }

    #[test]
    fn starts_inspiring_for_y() {
        let s = seq(14, 6);
        assert_eq!(s.phase(), Phase::Inspire);
        assert_eq!(s.remaining(), 6);
        assert!(!s.is_complete());
    }

    #[test]
    fn displayed_sequence_for_y3_x2() {
        let mut s = seq(2, 3);
        let mut shown = vec![(s.phase(), s.remaining())];
        loop {
            match s.tick() {
                Tick::Complete => break,
                _ => shown.push((s.phase(), s.remaining())),
            }
        }
        assert_eq!(
            shown,
            vec![
                (Phase::Inspire, 3),
                (Phase::Inspire, 2),
                (Phase::Inspire, 1),
                (Phase::Hold, 2),
                (Phase::Hold, 1),
            ]
        );
        assert!(s.is_complete());
    }

    #[test]
    fn phase_change_is_reported_once() {
        let mut s = seq(3, 1);
        assert_matches!(s.tick(), Tick::PhaseChanged(Phase::Hold));
        assert_matches!(s.tick(), Tick::Counting);
        assert_matches!(s.tick(), Tick::Counting);
        assert_matches!(s.tick(), Tick::Complete);
    }

    #[test]
    fn ticks_after_completion_are_no_ops() {
        let mut s = seq(1, 1);
        s.tick();
        assert_eq!(s.tick(), Tick::Complete);
        let frozen = s.clone();
        assert_eq!(s.tick(), Tick::Complete);
        assert_eq!(s, frozen);
    }

    #[test]
    fn zero_duration_is_consumed_by_first_tick() {
        let mut s = seq(0, 0);
        assert_eq!(s.tick(), Tick::PhaseChanged(Phase::Hold));
        assert_eq!(s.remaining(), 0);
        assert_eq!(s.tick(), Tick::Complete);
    }

    #[test]
    fn total_ticks_equal_x_plus_y() {
        for (x, y) in [(8, 4), (20, 12), (13, 7)] {
            let mut s = seq(x, y);
            let mut ticks = 0;
            while s.tick() != Tick::Complete {
                ticks += 1;
                assert!(ticks <= x + y);
            }
            assert_eq!(ticks + 1, x + y);
        }
    }

    #[test]
    fn phase_labels() {
        assert_eq!(Phase::Inspire.to_string(), "INSPIRE");
        assert_eq!(Phase::Hold.to_string(), "HOLD");
    }
}
