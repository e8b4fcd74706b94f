//! # motif
//!
//! Classic object-oriented design patterns, each played out as a small
//! smart-home scene. One module per pattern, no module depends on another.
//!
//! | Module | Pattern | Scene |
//! |---|---|---|
//! | [`middleware`] | Chain of responsibility | authentication, logging, validation over one request |
//! | [`adapter`] | Adapter | legacy alarms, cassette and CD players |
//! | [`decorator`] | Decorator | basic → email → SMS notifications |
//! | [`facade`] | Facade | movie night across four devices |
//! | [`factory`] | Factory | vehicles by name |
//! | [`observer`] | Observer | a news publisher and its readers |
//! | [`prototype`] | Prototype | a registry of shapes handing out copies |
//! | [`proxy`] | Proxy | a video loaded on first play |
//! | [`config`] | Singleton, redesigned | one settings object injected into every device |
//! | [`strategy`] | Strategy | swappable payment methods |
//!
//! ## What these are not
//!
//! There is no persistence, no network, no concurrency and no real security
//! here. "Authentication" means a `"user"` key is present. Everything runs on
//! one thread, in order, and prints what it did.
//!
//! ## Output
//!
//! Every operation that "prints" takes an [`std::io::Write`] sink. The binary
//! passes stdout; tests pass a `Vec<u8>` and compare text.
//!
//! ## Quick start
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
//! // Fail-open: the empty request fails two checks and all three still run.
//! let verdicts = chain.verdicts(&Request::new());
//! assert_eq!(verdicts.len(), 3);
//! assert_eq!(verdicts[0].message(), "Authentication failed.");
//! ```

mod error;
mod request;

pub mod adapter;
pub mod config;
pub mod decorator;
pub mod demo;
pub mod facade;
pub mod factory;
pub mod middleware;
pub mod observer;
pub mod prototype;
pub mod proxy;
pub mod strategy;

pub use error::{Error, Result};
pub use request::Request;
