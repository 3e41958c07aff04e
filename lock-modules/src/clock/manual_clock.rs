use parking_lot::Mutex;
use quorum_lock::Clock;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Advance-only clock for deterministic tests. Clones share the same offset,
/// so every manager built on the same instance observes the same time.
#[derive(Clone, Debug)]
pub struct ManualClock {
    start: Instant,
    offset: Arc<Mutex<Duration>>,
}

impl ManualClock {
    pub fn new() -> ManualClock {
        ManualClock {
            start: Instant::now(),
            offset: Arc::new(Mutex::new(Duration::from_secs(0))),
        }
    }

    pub fn advance(&self, duration: Duration) {
        let mut offset = self.offset.lock();
        *offset += duration;

        debug!("Manual clock advanced by {:?} to offset {:?}", duration, *offset);
    }
}

impl Default for ManualClock {
    fn default() -> ManualClock {
        ManualClock::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.start + *self.offset.lock()
    }
}
