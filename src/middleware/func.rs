//! Closures as middleware.
//!
//! A check is usually one line of logic. Rather than a new struct per check,
//! hand [`from_fn`] a name and a closure:
//!
//! ```text
//! |req: &Request| -> Verdict { … }          ← user writes this
//!        ↓ from_fn("tenant", closure)
//! FromFn { name: "tenant", f: closure }     ← implements Middleware
//!        ↓ chain.append(…)
//! Box<dyn Middleware>                       ← stored in a chain node
//!        ↓
//! node.check(req)  at process time          ← one vtable dispatch
//! ```
//!
//! The closure is captured when the node is built. Nothing is looked up by
//! name at call time.

use std::fmt;

use super::{Middleware, Verdict};
use crate::request::Request;

/// Wraps `f` as a [`Middleware`] called `name`.
///
/// ```rust
/// use motif::middleware::{Chain, Verdict, from_fn};
/// use motif::Request;
///
/// let mut chain = Chain::new();
/// chain.append(from_fn("tenant", |req: &Request| {
///     if req.contains("tenant") {
///         Verdict::passed("Tenant resolved.")
///     } else {
///         Verdict::failed("No tenant.")
///     }
/// }));
/// assert_eq!(chain.len(), 1);
/// ```
pub fn from_fn<F>(name: impl Into<String>, f: F) -> FromFn<F>
where
    F: Fn(&Request) -> Verdict,
{
    FromFn { name: name.into(), f }
}

/// Middleware built from a closure. See [`from_fn`].
pub struct FromFn<F> {
    name: String,
    f: F,
}

impl<F> Middleware for FromFn<F>
where
    F: Fn(&Request) -> Verdict,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn check(&self, req: &Request) -> Verdict {
        (self.f)(req)
    }
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").field("name", &self.name).finish_non_exhaustive()
    }
}
