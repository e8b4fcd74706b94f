//! Decorators: stacking notification channels.
//!
//! Every decorator wraps another [`Notifier`], lets it send first, then adds
//! its own channel. Stacking order is delivery order.
//!
//! ```rust
//! use motif::decorator::{BasicNotifier, EmailNotifier, Notifier, SmsNotifier};
//!
//! let notifier = SmsNotifier::new(EmailNotifier::new(BasicNotifier));
//!
//! let mut out = Vec::new();
//! notifier.send("Hello, World!", &mut out).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "Sending basic notification: Hello, World!\n\
//!      Sending email notification: Hello, World!\n\
//!      Sending SMS notification: Hello, World!\n",
//! );
//! ```

use std::io::Write;

use crate::error::Result;

pub trait Notifier {
    fn send(&self, message: &str, out: &mut dyn Write) -> Result<()>;
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn send(&self, message: &str, out: &mut dyn Write) -> Result<()> {
        (**self).send(message, out)
    }
}

/// The undecorated notifier every stack starts from.
#[derive(Clone, Copy, Debug, Default)]
pub struct BasicNotifier;

impl Notifier for BasicNotifier {
    fn send(&self, message: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Sending basic notification: {message}")?;
        Ok(())
    }
}

/// Adds an email after whatever `N` sends.
#[derive(Clone, Debug)]
pub struct EmailNotifier<N> {
    inner: N,
}

impl<N: Notifier> EmailNotifier<N> {
    pub fn new(inner: N) -> Self {
        Self { inner }
    }
}

impl<N: Notifier> Notifier for EmailNotifier<N> {
    fn send(&self, message: &str, out: &mut dyn Write) -> Result<()> {
        self.inner.send(message, out)?;
        writeln!(out, "Sending email notification: {message}")?;
        Ok(())
    }
}

/// Adds a text message after whatever `N` sends.
#[derive(Clone, Debug)]
pub struct SmsNotifier<N> {
    inner: N,
}

impl<N: Notifier> SmsNotifier<N> {
    pub fn new(inner: N) -> Self {
        Self { inner }
    }
}

impl<N: Notifier> Notifier for SmsNotifier<N> {
    fn send(&self, message: &str, out: &mut dyn Write) -> Result<()> {
        self.inner.send(message, out)?;
        writeln!(out, "Sending SMS notification: {message}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sent(notifier: &dyn Notifier, message: &str) -> Vec<String> {
        let mut out = Vec::new();
        notifier.send(message, &mut out).unwrap();
        String::from_utf8(out).unwrap().lines().map(str::to_owned).collect()
    }

    #[test]
    fn stacking_order_is_delivery_order() {
        let notifier = EmailNotifier::new(SmsNotifier::new(BasicNotifier));
        assert_eq!(
            sent(&notifier, "hi"),
            [
                "Sending basic notification: hi",
                "Sending SMS notification: hi",
                "Sending email notification: hi",
            ],
        );
    }

    #[test]
    fn boxed_notifiers_decorate_too() {
        let inner: Box<dyn Notifier> = Box::new(BasicNotifier);
        let notifier = SmsNotifier::new(inner);
        assert_eq!(sent(&notifier, "x").len(), 2);
    }
}
