//! The outcome of one middleware check.

use std::fmt;

/// How a node judged the request.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Outcome {
    /// The check looked for something and found it.
    Passed,
    /// The check looked for something and did not find it. The chain keeps going.
    Failed,
    /// The node only looked; there was nothing to pass or fail.
    Observed,
}

/// One line of a chain trace: what a node decided and the text it prints.
///
/// A verdict is data, not control flow. Returning [`Verdict::failed`] does not
/// stop the chain.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Verdict {
    outcome: Outcome,
    message: String,
}

impl Verdict {
    pub fn new(outcome: Outcome, message: impl Into<String>) -> Self {
        Self { outcome, message: message.into() }
    }

    pub fn passed(message: impl Into<String>) -> Self { Self::new(Outcome::Passed, message) }
    pub fn failed(message: impl Into<String>) -> Self { Self::new(Outcome::Failed, message) }
    pub fn observed(message: impl Into<String>) -> Self { Self::new(Outcome::Observed, message) }

    pub fn outcome(&self) -> Outcome { self.outcome }
    pub fn message(&self) -> &str { &self.message }

    pub fn is_failure(&self) -> bool {
        self.outcome == Outcome::Failed
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
