use tokio::sync::broadcast;

const EVENT_STREAM_CAPACITY: usize = 16;

/// Multi-subscriber publish channel for one-shot domain events.
///
/// There is no replay: a receiver only sees events emitted after it was
/// obtained from [`EventStream::subscribe`]. Emitting while nobody listens
/// drops the event silently.
#[derive(Debug)]
pub struct EventStream<T> {
    tx: broadcast::Sender<T>,
}

impl<T: Clone> EventStream<T> {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(EVENT_STREAM_CAPACITY);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<T> {
        self.tx.subscribe()
    }

    /// Publishes `event` and returns how many subscribers received it.
    pub fn emit(&self, event: T) -> usize {
        self.tx.send(event).unwrap_or(0)
    }
}

impl<T: Clone> Default for EventStream<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for EventStream<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emitting_without_subscribers_is_not_an_error() {
        let stream = EventStream::<u8>::new();

        assert_eq!(stream.emit(1), 0);
    }

    #[test]
    fn late_subscriber_misses_earlier_events() {
        let stream = EventStream::<u8>::new();
        stream.emit(1);

        let mut rx = stream.subscribe();
        stream.emit(2);

        assert_eq!(rx.try_recv().expect("second event"), 2);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn every_subscriber_receives_each_event() {
        let stream = EventStream::<u8>::new();
        let mut first = stream.subscribe();
        let mut second = stream.clone().subscribe();

        assert_eq!(stream.emit(7), 2);
        assert_eq!(first.try_recv().expect("first"), 7);
        assert_eq!(second.try_recv().expect("second"), 7);
    }
}
