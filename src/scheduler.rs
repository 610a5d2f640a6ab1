use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::time::Duration;

use log::debug;

/// Handle for a one-shot timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Handle for a per-frame callback subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(u64);

/// Cooperative timer queue driven by an externally supplied clock.
///
/// Time is a `Duration` since the host started. Nothing here sleeps; the
/// event loop (or a test) calls [`Scheduler::pop_due`] with the current time.
#[derive(Debug, Default)]
pub struct Scheduler {
    next_id: u64,
    queue: BTreeMap<(Duration, u64), TimerId>,
    deadlines: HashMap<TimerId, Duration>,
    frames: BTreeSet<FrameId>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    pub fn set_timeout(&mut self, now: Duration, delay: Duration) -> TimerId {
        let seq = self.next_id();
        let id = TimerId(seq);
        let deadline = now + delay;
        self.queue.insert((deadline, seq), id);
        self.deadlines.insert(id, deadline);
        debug!("scheduler: timer {seq} due at {}ms", deadline.as_millis());
        id
    }

    /// Returns true if the timer was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.deadlines.remove(&id) {
            Some(deadline) => {
                self.queue.remove(&(deadline, id.0));
                debug!("scheduler: timer {} cancelled", id.0);
                true
            }
            None => false,
        }
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.deadlines.contains_key(&id)
    }

    /// Removes and returns the earliest timer whose deadline is `<= now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<TimerId> {
        let (&(deadline, seq), &id) = self.queue.iter().next()?;
        if deadline > now {
            return None;
        }
        self.queue.remove(&(deadline, seq));
        self.deadlines.remove(&id);
        Some(id)
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.keys().next().map(|(deadline, _)| *deadline)
    }

    pub fn pending(&self) -> usize {
        self.deadlines.len()
    }

    pub fn request_frames(&mut self) -> FrameId {
        let id = FrameId(self.next_id());
        self.frames.insert(id);
        id
    }

    pub fn cancel_frames(&mut self, id: FrameId) -> bool {
        self.frames.remove(&id)
    }

    pub fn is_subscribed(&self, id: FrameId) -> bool {
        self.frames.contains(&id)
    }

    pub fn frame_subscriptions(&self) -> Vec<FrameId> {
        self.frames.iter().copied().collect()
    }
}
