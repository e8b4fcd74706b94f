//! Observer: a publisher and the readers who asked to hear from it.
//!
//! Subscribing hands back a [`SubscriptionId`]; that handle, not the
//! subscriber value, is what you give back to unsubscribe. News reaches
//! subscribers in the order they subscribed.

use std::fmt;
use std::io::Write;

use tracing::debug;

use crate::error::{Error, Result};

pub trait Subscriber {
    fn update(&self, news: &str, out: &mut dyn Write) -> Result<()>;
}

/// A subscriber that reads the news aloud, by name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Reader {
    name: String,
}

impl Reader {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Subscriber for Reader {
    fn update(&self, news: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{} received news: {news}", self.name)?;
        Ok(())
    }
}

/// Handle returned by [`NewsPublisher::subscribe`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "subscription #{}", self.0)
    }
}

#[derive(Default)]
pub struct NewsPublisher {
    subscribers: Vec<(SubscriptionId, Box<dyn Subscriber>)>,
    next_id: u64,
}

impl NewsPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, subscriber: impl Subscriber + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        debug!(%id, subscribers = self.subscribers.len(), "subscribed");
        id
    }

    /// Fails with [`Error::NotSubscribed`] if `id` was never issued here or
    /// has already been removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> Result<()> {
        let pos = self
            .subscribers
            .iter()
            .position(|(sub, _)| *sub == id)
            .ok_or(Error::NotSubscribed(id))?;
        self.subscribers.remove(pos);
        debug!(%id, subscribers = self.subscribers.len(), "unsubscribed");
        Ok(())
    }

    pub fn notify_subscribers(&self, news: &str, out: &mut dyn Write) -> Result<()> {
        for (_, subscriber) in &self.subscribers {
            subscriber.update(news, out)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize { self.subscribers.len() }
    pub fn is_empty(&self) -> bool { self.subscribers.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notify(publisher: &NewsPublisher, news: &str) -> String {
        let mut out = Vec::new();
        publisher.notify_subscribers(news, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn unsubscribed_readers_stop_hearing() {
        let mut publisher = NewsPublisher::new();
        let alice = publisher.subscribe(Reader::new("Alice"));
        publisher.subscribe(Reader::new("Bob"));

        assert_eq!(notify(&publisher, "one"), "Alice received news: one\nBob received news: one\n");

        publisher.unsubscribe(alice).unwrap();
        assert_eq!(notify(&publisher, "two"), "Bob received news: two\n");
        assert_eq!(publisher.len(), 1);
    }

    #[test]
    fn unsubscribing_twice_fails() {
        let mut publisher = NewsPublisher::new();
        let id = publisher.subscribe(Reader::new("Charlie"));
        publisher.unsubscribe(id).unwrap();
        let err = publisher.unsubscribe(id).unwrap_err();
        assert!(matches!(err, Error::NotSubscribed(got) if got == id));
        assert!(publisher.is_empty());
    }

    #[test]
    fn the_same_reader_may_subscribe_twice() {
        let mut publisher = NewsPublisher::new();
        let a = publisher.subscribe(Reader::new("Dana"));
        let b = publisher.subscribe(Reader::new("Dana"));
        assert_ne!(a, b);
        assert_eq!(notify(&publisher, "x").lines().count(), 2);
    }
}
