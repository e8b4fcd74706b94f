//! The three stock checks: authentication, logging, validation.
//!
//! Each one inspects the request, produces a verdict and leaves the decision
//! of what happens next to the chain. None of them stops it.

use super::{Middleware, Verdict};
use crate::request::Request;

/// Passes when the request carries a user.
///
/// This is a key-presence check, not authentication in any security sense.
#[derive(Clone, Debug)]
pub struct Authentication {
    key: String,
}

impl Authentication {
    pub fn new() -> Self {
        Self::with_key("user")
    }

    /// Looks for `key` instead of `"user"`.
    pub fn with_key(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl Default for Authentication {
    fn default() -> Self { Self::new() }
}

impl Middleware for Authentication {
    fn name(&self) -> &str {
        "authentication"
    }

    fn check(&self, req: &Request) -> Verdict {
        if req.contains(&self.key) {
            Verdict::passed("Authentication successful.")
        } else {
            Verdict::failed("Authentication failed.")
        }
    }
}

/// Echoes the whole request.
#[derive(Clone, Copy, Debug, Default)]
pub struct Logging;

impl Logging {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for Logging {
    fn name(&self) -> &str {
        "logging"
    }

    fn check(&self, req: &Request) -> Verdict {
        Verdict::observed(format!("Logging request: {req}"))
    }
}

/// Passes when the request carries a payload.
#[derive(Clone, Debug)]
pub struct Validation {
    key: String,
}

impl Validation {
    pub fn new() -> Self {
        Self::with_key("data")
    }

    /// Looks for `key` instead of `"data"`.
    pub fn with_key(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl Default for Validation {
    fn default() -> Self { Self::new() }
}

impl Middleware for Validation {
    fn name(&self) -> &str {
        "validation"
    }

    fn check(&self, req: &Request) -> Verdict {
        if req.contains(&self.key) {
            Verdict::passed("Request data validated.")
        } else {
            Verdict::failed("Invalid request data.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::Outcome;

    #[test]
    fn authentication_looks_for_user() {
        let auth = Authentication::new();
        assert_eq!(auth.check(&Request::new().with("user", "Alice")).outcome(), Outcome::Passed);
        assert_eq!(auth.check(&Request::new()).message(), "Authentication failed.");
    }

    #[test]
    fn custom_keys_replace_the_defaults() {
        let req = Request::new().with("token", "t").with("body", "b");
        assert!(!Authentication::with_key("token").check(&req).is_failure());
        assert!(!Validation::with_key("body").check(&req).is_failure());
        assert!(Validation::new().check(&req).is_failure());
    }

    #[test]
    fn logging_never_fails() {
        let verdict = Logging.check(&Request::new());
        assert_eq!(verdict.outcome(), Outcome::Observed);
        assert_eq!(verdict.to_string(), "Logging request: {}");
    }
}
