use tracing::{debug, info, warn};

use crate::target::Target;


/// Receives what the waiter observes during a session.
pub trait EventSink {
    fn checking(&mut self, target: &Target);

    fn available(&mut self, target: &Target);

    fn unavailable(&mut self, target: &Target);

    fn all_available(&mut self);

    /// `pending` holds every target still unavailable when time ran out.
    fn timed_out(&mut self, pending: &[Target]);
}


/// Forwards events to `tracing`.
pub struct TracingSink;


impl EventSink for TracingSink {
    fn checking(&mut self, target: &Target) {
        debug!(host = %target.host, port = %target.port, "checking availability");
    }

    fn available(&mut self, target: &Target) {
        info!(host = %target.host, port = %target.port, "host is available");
    }

    fn unavailable(&mut self, target: &Target) {
        debug!(host = %target.host, port = %target.port, "host is not available yet");
    }

    fn all_available(&mut self) {
        info!("all hosts are available");
    }

    fn timed_out(&mut self, pending: &[Target]) {
        warn!("timeout reached, not all hosts became available");
        for target in pending {
            warn!(host = %target.host, port = %target.port, "host is still unavailable");
        }
    }
}


#[cfg(test)]
pub mod recording {
    use super::EventSink;
    use crate::target::Target;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Event {
        Checking(Target),
        Available(Target),
        Unavailable(Target),
        AllAvailable,
        TimedOut(Vec<Target>),
    }

    #[derive(Default)]
    pub struct RecordingSink {
        pub events: Vec<Event>,
    }

    impl RecordingSink {
        pub fn checks_of(&self, target: &Target) -> usize {
            self.events
                .iter()
                .filter(|event| matches!(event, Event::Checking(t) if t == target))
                .count()
        }

        pub fn last(&self) -> Option<&Event> {
            self.events.last()
        }
    }

    impl EventSink for RecordingSink {
        fn checking(&mut self, target: &Target) {
            self.events.push(Event::Checking(target.clone()));
        }

        fn available(&mut self, target: &Target) {
            self.events.push(Event::Available(target.clone()));
        }

        fn unavailable(&mut self, target: &Target) {
            self.events.push(Event::Unavailable(target.clone()));
        }

        fn all_available(&mut self) {
            self.events.push(Event::AllAvailable);
        }

        fn timed_out(&mut self, pending: &[Target]) {
            self.events.push(Event::TimedOut(pending.to_vec()));
        }
    }
}
