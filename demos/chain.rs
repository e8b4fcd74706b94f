//! Minimal middleware-chain walk-through.
//!
//! Run with:
//!   RUST_LOG=trace cargo run --example chain
//!
//! The same three-node chain sees a complete request, then an empty one.
//! The empty request fails two checks and every node still runs.

use motif::Request;
use motif::middleware::{Authentication, Chain, Logging, Validation, Verdict, from_fn};

fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let mut chain = Chain::new();
    chain.append(Authentication::new());
    chain.append(Logging::new());
    chain.append(Validation::new());

    // Complete request: three successes.
    chain.process_request(&Request::new().with("user", "Alice").with("data", "X"));

    // Empty request: two failures, one log line, in append order.
    chain.process_request(&Request::new());

    // A closure is a middleware too.
    let chain = chain.with(from_fn("size", |req: &Request| {
        Verdict::observed(format!("Request has {} field(s).", req.len()))
    }));
    chain.process_request(&Request::new().with("k", 1));
}
