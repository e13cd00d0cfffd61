//! Where event markers come from.
//!
//! There is no real backend: [`MockEventSource`] waits a moment on a worker
//! thread and then hands back a fixed map, the way a network call would.

use std::thread;
use std::time::Duration;

use eventcal::{Event, EventMap};
use tracing::{debug, error};

/// Default simulated latency of a fetch.
pub const DEFAULT_FETCH_DELAY: Duration = Duration::from_micros(40);

/// Continuation registered when a fetch starts. Called exactly once, on the
/// source's own thread, with the complete map.
pub type FetchCallback = Box<dyn FnOnce(EventMap) + Send + 'static>;

pub trait EventSource {
    fn fetch(&self, on_ready: FetchCallback);
}

pub struct MockEventSource {
    events: EventMap,
    delay: Duration,
}

impl MockEventSource {
    pub fn new(events: EventMap, delay: Duration) -> Self {
        Self { events, delay }
    }

    /// The built-in July 2020 fixture.
    pub fn with_sample_events() -> Self {
        Self::new(sample_events(), DEFAULT_FETCH_DELAY)
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Default for MockEventSource {
    fn default() -> Self {
        Self::with_sample_events()
    }
}

impl EventSource for MockEventSource {
    fn fetch(&self, on_ready: FetchCallback) {
        let events = self.events.clone();
        let delay = self.delay;

        let spawned = thread::Builder::new()
            .name("eventcal-fetch".to_owned())
            .spawn(move || {
                thread::sleep(delay);
                debug!("mock fetch finished after {delay:?} with {} days", events.len());
                on_ready(events);
            });

        if let Err(err) = spawned {
            error!("failed to spawn fetch thread: {err}");
        }
    }
}

pub fn sample_events() -> EventMap {
    [
        ("2020-07-16", Event::new(true, false)),
        ("2020-07-13", Event::new(false, true)),
        ("2020-07-17", Event::new(true, false)),
        ("2020-07-29", Event::new(true, true)),
        ("2020-07-30", Event::new(false, false)),
    ]
    .into_iter()
    .map(|(day, event)| (day.to_string(), event))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel as chan;

    #[test]
    fn test_mock_delivers_once_off_thread() {
        let (tx, rx) = chan::unbounded();
        let caller = thread::current().id();

        MockEventSource::with_sample_events().fetch(Box::new(move |events| {
            let _ = tx.send((thread::current().id(), events));
        }));

        let (thread_id, events) = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_ne!(thread_id, caller);
        assert_eq!(events, sample_events());

        // the callback was consumed, so the sender is gone
        assert!(rx.recv_timeout(Duration::from_secs(5)).is_err());
    }

    #[test]
    fn test_custom_fixture_and_delay() {
        let events: EventMap = [("2021-01-02".to_string(), Event::new(false, true))]
            .into_iter()
            .collect();
        let source = MockEventSource::new(events.clone(), Duration::ZERO)
            .with_delay(Duration::from_millis(10));

        let (tx, rx) = chan::bounded(1);
        source.fetch(Box::new(move |events| {
            let _ = tx.send(events);
        }));

        assert_eq!(rx.recv_timeout(Duration::from_secs(5)).unwrap(), events);
    }
}
