//! Middleware chain.
//!
//! A [`Chain`] is a singly linked list of checks. Each node looks at the same
//! [`Request`], writes one verdict line, and hands the request to the next
//! node. That is the whole protocol.
//!
//! ```text
//! head ──► Authentication ──► Logging ──► Validation ──► (end)
//!              │                  │             │
//!              ▼                  ▼             ▼
//!   "Authentication failed."  "Logging …"  "Invalid request data."
//! ```
//!
//! # Fail-open
//!
//! A failed check does not stop the chain. Every node runs exactly once per
//! request, in the order it was appended, whatever the nodes before it
//! decided. A request without a `"user"` key still gets logged and validated.
//! Callers that need a gate rather than a trace should read
//! [`Chain::verdicts`] and act on the first failure themselves.
//!
//! # Building a chain
//!
//! ```rust
//! use motif::middleware::{Authentication, Chain, Logging, Validation};
//! use motif::Request;
//!
//! let chain = Chain::new()
//!     .with(Authentication::new())
//!     .with(Logging::new())
//!     .with(Validation::new());
//!
//! let mut out = Vec::new();
//! chain.process_into(&Request::new().with("user", "Alice").with("data", "X"), &mut out).unwrap();
//!
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "Authentication successful.\n\
//!      Logging request: {\"user\":\"Alice\",\"data\":\"X\"}\n\
//!      Request data validated.\n",
//! );
//! ```
//!
//! Chains are built once, on one thread, then traversed. There is no removal
//! and no locking.

mod builtin;
mod func;
mod verdict;

use std::fmt;
use std::io::{self, Write};

use tracing::{debug, error, trace};

use crate::error::Result;
use crate::request::Request;

pub use builtin::{Authentication, Logging, Validation};
pub use func::{FromFn, from_fn};
pub use verdict::{Outcome, Verdict};

// ── Middleware trait ──────────────────────────────────────────────────────────

/// One check in a chain.
///
/// Implement it on a struct, or wrap a closure with [`from_fn`]. A check sees
/// the request by shared reference and returns its verdict; it cannot alter
/// the request and it cannot end the chain early.
pub trait Middleware {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    fn check(&self, req: &Request) -> Verdict;
}

// ── Node ──────────────────────────────────────────────────────────────────────

/// One link. Owns its check and the rest of the chain behind it.
struct Node {
    middleware: Box<dyn Middleware>,
    next: Option<Box<Node>>,
}

impl Node {
    fn new(middleware: Box<dyn Middleware>) -> Box<Self> {
        Box::new(Self { middleware, next: None })
    }
}

// ── Chain ─────────────────────────────────────────────────────────────────────

/// The chain manager: owns the head node and drives every request from it.
#[derive(Default)]
pub struct Chain {
    head: Option<Box<Node>>,
    len: usize,
}

impl Chain {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Links `middleware` after the current tail (the node whose `next` is
    /// empty). On an empty chain it becomes the head. Always succeeds.
    pub fn append(&mut self, middleware: impl Middleware + 'static) {
        let mut slot = &mut self.head;
        while let Some(node) = slot {
            slot = &mut node.next;
        }
        *slot = Some(Node::new(Box::new(middleware)));
        self.len += 1;
        debug!(len = self.len, "middleware appended");
    }

    /// [`append`](Chain::append) that returns `self`, for building a chain in
    /// one expression.
    pub fn with(mut self, middleware: impl Middleware + 'static) -> Self {
        self.append(middleware);
        self
    }

    pub fn len(&self) -> usize { self.len }
    pub fn is_empty(&self) -> bool { self.head.is_none() }

    /// Names of the nodes in traversal order.
    pub fn names(&self) -> Vec<&str> {
        self.nodes().map(|node| node.middleware.name()).collect()
    }

    /// Runs every check against `req` and returns the verdicts in append
    /// order. Nothing is written anywhere.
    pub fn verdicts(&self, req: &Request) -> Vec<Verdict> {
        self.nodes().map(|node| check(node, req)).collect()
    }

    /// Runs every check against `req`, writing one verdict per line to `out`.
    ///
    /// Every node runs even if writing to `out` fails part-way; the first
    /// write error is returned once the chain has finished.
    pub fn process_into<W: Write + ?Sized>(&self, req: &Request, out: &mut W) -> Result<()> {
        let mut first_err: Option<io::Error> = None;

        for node in self.nodes() {
            let verdict = check(node, req);
            if first_err.is_none() {
                first_err = writeln!(out, "{verdict}").err();
            }
        }

        match first_err {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }

    /// Runs the chain against `req` and prints the trace to stdout.
    ///
    /// No return value: a stdout that refuses writes is logged, not reported.
    /// An empty chain prints nothing.
    pub fn process_request(&self, req: &Request) {
        let stdout = io::stdout();
        if let Err(e) = self.process_into(req, &mut stdout.lock()) {
            error!("failed to write middleware trace: {e}");
        }
    }

    fn nodes(&self) -> Nodes<'_> {
        Nodes { cursor: self.head.as_deref() }
    }
}

/// Unlinks one node at a time so a long chain does not drop recursively.
impl Drop for Chain {
    fn drop(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

fn check(node: &Node, req: &Request) -> Verdict {
    let verdict = node.middleware.check(req);
    trace!(middleware = node.middleware.name(), outcome = ?verdict.outcome(), "checked");
    verdict
}

/// Head-to-tail walk over the nodes.
struct Nodes<'a> {
    cursor: Option<&'a Node>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.cursor?;
        self.cursor = node.next.as_deref();
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    fn standard() -> Chain {
        Chain::new()
            .with(Authentication::new())
            .with(Logging::new())
            .with(Validation::new())
    }

    fn trace_of(chain: &Chain, req: &Request) -> String {
        let mut out = Vec::new();
        chain.process_into(req, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn append_keeps_insertion_order() {
        let chain = standard();
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.names(), ["authentication", "logging", "validation"]);
    }

    #[test]
    fn complete_request_passes_every_check() {
        let req = Request::new().with("user", "Alice").with("data", "X");
        assert_eq!(
            trace_of(&standard(), &req),
            "Authentication successful.\n\
             Logging request: {\"user\":\"Alice\",\"data\":\"X\"}\n\
             Request data validated.\n",
        );
    }

    #[test]
    fn empty_request_fails_open() {
        let verdicts = standard().verdicts(&Request::new());
        let outcomes: Vec<_> = verdicts.iter().map(Verdict::outcome).collect();
        assert_eq!(outcomes, [Outcome::Failed, Outcome::Observed, Outcome::Failed]);
        assert_eq!(
            trace_of(&standard(), &Request::new()),
            "Authentication failed.\nLogging request: {}\nInvalid request data.\n",
        );
    }

    #[test]
    fn logging_only_chain_prints_one_line() {
        let chain = Chain::new().with(Logging::new());
        let req = Request::new().with("k", 1);
        assert_eq!(trace_of(&chain, &req), "Logging request: {\"k\":1}\n");
    }

    #[test]
    fn empty_chain_does_nothing() {
        let chain = Chain::new();
        assert!(chain.is_empty());
        assert_eq!(trace_of(&chain, &Request::new().with("user", "x")), "");
        assert!(chain.verdicts(&Request::new()).is_empty());
    }

    #[test]
    fn long_chains_append_run_and_drop_without_recursion() {
        let mut chain = Chain::new();
        for _ in 0..25_000 {
            chain.append(Logging::new());
        }
        assert_eq!(chain.len(), 25_000);
        assert_eq!(chain.verdicts(&Request::new()).len(), 25_000);
        drop(chain);
    }

    #[test]
    fn process_request_prints_to_stdout() {
        Chain::new().process_request(&Request::new().with("user", "Alice"));
        standard().process_request(&Request::new().with("user", "Alice").with("data", "X"));
        standard().process_request(&Request::new());
    }

    #[test]
    fn every_node_runs_even_when_the_sink_fails() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> { Ok(()) }
        }

        let calls = Rc::new(Cell::new(0));
        let mut chain = Chain::new();
        for _ in 0..4 {
            let calls = Rc::clone(&calls);
            chain.append(from_fn("count", move |_: &Request| {
                calls.set(calls.get() + 1);
                Verdict::observed("seen")
            }));
        }

        assert!(chain.process_into(&Request::new(), &mut Broken).is_err());
        assert_eq!(calls.get(), 4);
    }
}
