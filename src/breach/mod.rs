//! Breach lookup against a k-anonymity hash-range service.
//!
//! Only the first five hex characters of the password's SHA-1 leave the
//! process; the service answers with every known suffix under that prefix and
//! matching happens locally.

mod result;

pub use result::{BreachLookupResult, UnknownReason};

#[cfg(feature = "async")]
mod checker;
#[cfg(feature = "async")]
mod config;
#[cfg(feature = "async")]
mod range;

#[cfg(feature = "async")]
pub use checker::BreachChecker;
#[cfg(feature = "async")]
pub use config::{BreachConfig, BreachConfigError, DEFAULT_API_URL};
#[cfg(feature = "async")]
pub use range::{HashRange, find_suffix};
