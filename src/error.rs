//! Unified error type.

use thiserror::Error;

use crate::observer::SubscriptionId;

/// The error type returned by motif's fallible operations.
///
/// A failed middleware check is *not* an `Error`: it is a
/// [`Verdict`](crate::middleware::Verdict) and the chain keeps going. This type
/// covers the structural failures: a sink that refuses bytes, a lookup by a
/// name nobody registered, a settings file that does not parse.
#[derive(Debug, Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown vehicle type `{0}`")]
    UnknownVehicle(String),

    #[error("no shape registered under `{0}`")]
    UnknownShape(String),

    #[error("{0} is not subscribed")]
    NotSubscribed(SubscriptionId),

    #[error("invalid settings: {0}")]
    Config(#[from] toml::de::Error),

    #[error("no security system integrated")]
    NoSecuritySystem,

    #[error("request must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// Shorthand for `Result<T, motif::Error>`.
pub type Result<T, E = Error> = std::result::Result<T, E>;
