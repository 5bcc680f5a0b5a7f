use std::thread;
use std::time::{Duration, Instant};


pub trait Clock {
    fn now(&self) -> Instant;

    fn sleep(&self, duration: Duration);
}


/// Wall clock. `sleep` blocks the whole process.
pub struct SystemClock;


impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, duration: Duration) {
        thread::sleep(duration);
    }
}


#[cfg(test)]
pub mod manual {
    use std::sync::{Arc, Mutex};
    use std::time::{Duration, Instant};

    use super::Clock;

    /// Clock that only moves when slept on or advanced by hand.
    #[derive(Clone)]
    pub struct ManualClock {
        state: Arc<Mutex<State>>,
    }

    struct State {
        now: Instant,
        sleeps: Vec<Duration>,
    }

    impl ManualClock {
        pub fn new() -> Self {
            Self {
                state: Arc::new(Mutex::new(State {
                    now: Instant::now(),
                    sleeps: Vec::new(),
                })),
            }
        }

        pub fn advance(&self, duration: Duration) {
            self.state.lock().unwrap().now += duration;
        }

        pub fn sleeps(&self) -> Vec<Duration> {
            self.state.lock().unwrap().sleeps.clone()
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Instant {
            self.state.lock().unwrap().now
        }

        fn sleep(&self, duration: Duration) {
            let mut state = self.state.lock().unwrap();
            state.now += duration;
            state.sleeps.push(duration);
        }
    }
}
