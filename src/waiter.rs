use std::collections::HashSet;
use std::time::Duration;

use crate::clock::Clock;
use crate::events::EventSink;
use crate::probe::Prober;
use crate::target::{Target, TargetStatus};


pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);
pub const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_secs(1);


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitSettings {
    pub timeout: Duration,
    pub retry_interval: Duration,
}


impl Default for WaitSettings {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            retry_interval: DEFAULT_RETRY_INTERVAL,
        }
    }
}


/// Final state of a session: every distinct target with its last known status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitOutcome {
    pub statuses: Vec<(Target, TargetStatus)>,
    pub all_available: bool,
}


impl WaitOutcome {
    pub fn is_success(&self) -> bool {
        self.all_available
    }
}


/// Distinct targets in first-seen order. Readiness is addressed by index, so
/// repeated targets share one entry.
struct Session {
    entries: Vec<(Target, TargetStatus)>,
}


impl Session {
    fn new(targets: &[Target]) -> Self {
        let mut seen = HashSet::new();
        let entries = targets
            .iter()
            .filter(|target| seen.insert(*target))
            .map(|target| (target.clone(), TargetStatus::Unknown))
            .collect();

        Self { entries }
    }

    fn pending(&self) -> Vec<Target> {
        self.entries
            .iter()
            .filter(|(_, status)| !status.is_available())
            .map(|(target, _)| target.clone())
            .collect()
    }

    fn finish(self, all_available: bool) -> WaitOutcome {
        WaitOutcome {
            statuses: self.entries,
            all_available,
        }
    }
}


pub struct Waiter<P, C, S> {
    prober: P,
    clock: C,
    events: S,
    settings: WaitSettings,
}


impl<P: Prober, C: Clock, S: EventSink> Waiter<P, C, S> {
    pub fn new(prober: P, clock: C, events: S, settings: WaitSettings) -> Self {
        Self {
            prober,
            clock,
            events,
            settings,
        }
    }

    #[cfg(test)]
    pub fn events(&self) -> &S {
        &self.events
    }

    /// Sweeps the unready targets until all of them accept a connection or
    /// the timeout is exceeded. The deadline is only checked between sweeps,
    /// so a session can overrun it by one sweep plus one retry interval.
    pub fn wait_for_all(&mut self, targets: &[Target]) -> WaitOutcome {
        let start = self.clock.now();
        let mut session = Session::new(targets);

        loop {
            let mut all_ready = true;

            for (target, status) in session.entries.iter_mut() {
                if status.is_available() {
                    continue;
                }

                self.events.checking(target);
                if self.prober.probe(target) {
                    *status = TargetStatus::Available;
                    self.events.available(target);
                } else {
                    *status = TargetStatus::Unavailable;
                    all_ready = false;
                    self.events.unavailable(target);
                }
            }

            if all_ready {
                self.events.all_available();
                return session.finish(true);
            }

            // Whole seconds only.
            let elapsed = self.clock.now().saturating_duration_since(start);
            if Duration::from_secs(elapsed.as_secs()) >= self.settings.timeout {
                self.events.timed_out(&session.pending());
                return session.finish(false);
            }

            self.clock.sleep(self.settings.retry_interval);
        }
    }
}
