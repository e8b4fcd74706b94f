//! Strategy: the payment method is chosen at runtime and can be swapped.

use std::io::Write;

use crate::error::Result;

pub trait PaymentStrategy {
    fn pay(&self, amount: u64, out: &mut dyn Write) -> Result<()>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct CreditCardPayment;

impl PaymentStrategy for CreditCardPayment {
    fn pay(&self, amount: u64, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Paid {amount} using Credit Card.")?;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PayPalPayment;

impl PaymentStrategy for PayPalPayment {
    fn pay(&self, amount: u64, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Paid {amount} using PayPal.")?;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BitcoinPayment;

impl PaymentStrategy for BitcoinPayment {
    fn pay(&self, amount: u64, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Paid {amount} using Bitcoin.")?;
        Ok(())
    }
}

/// Holds the current strategy and pays through it.
pub struct PaymentContext {
    strategy: Box<dyn PaymentStrategy>,
}

impl PaymentContext {
    pub fn new(strategy: impl PaymentStrategy + 'static) -> Self {
        Self { strategy: Box::new(strategy) }
    }

    pub fn set_strategy(&mut self, strategy: impl PaymentStrategy + 'static) {
        self.strategy = Box::new(strategy);
    }

    pub fn execute_payment(&self, amount: u64, out: &mut dyn Write) -> Result<()> {
        self.strategy.pay(amount, out)
    }
}
