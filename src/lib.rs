//! Password generation, strength analysis and breach lookup
//!
//! This library generates random passwords, scores password strength with
//! weighted heuristics and checks passwords against a public breach corpus
//! through a k-anonymity hash-range lookup.
//!
//! # Features
//!
//! - `async` (default): Enables the breach checker (tokio + reqwest)
//! - `tracing`: Enables logging via tracing crate
//! - `cli` (default): Builds the `pwd-guard` binary
//!
//! # Environment Variables
//!
//! - `PWD_BLACKLIST_PATH`: Extra common-password file, one entry per line
//! - `PWD_BREACH_API_URL`: Breach range service
//!   (default: `https://api.pwnedpasswords.com`)
//! - `PWD_BREACH_TIMEOUT_SECS`: Per-attempt timeout (default: 10)
//! - `PWD_BREACH_MAX_ATTEMPTS`: Attempts per lookup (default: 3)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_guard::{PasswordToolkit, recommend};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let toolkit = PasswordToolkit::from_env()?;
//!
//! let password = toolkit.generate(16, true, true)?;
//! let stats = toolkit.analyze(&password)?;
//! println!("Strength: {} ({})", stats.strength_label, stats.strength_score);
//!
//! for advice in recommend(&stats) {
//!     println!("- {advice}");
//! }
//!
//! #[cfg(feature = "async")]
//! println!("{:?}", toolkit.check_breach(&password).await);
//! # Ok(())
//! # }
//! ```

pub mod breach;
pub mod charset;

mod analyzer;
mod common;
mod error;
mod generator;
mod recommend;
mod sections;
mod stats;
mod toolkit;
mod usage;

// Public API
pub use analyzer::Analyzer;
pub use breach::{BreachLookupResult, UnknownReason};
pub use charset::CharacterPool;
pub use common::{COMMON_LIST_ENV, CommonListError, CommonPasswordSet};
pub use error::PasswordError;
pub use generator::{MAX_LENGTH, MIN_LENGTH, generate, generate_with};
pub use recommend::{Recommendation, recommend};
pub use sections::{DICTIONARY_WORDS, KEYBOARD_PATTERNS};
pub use stats::{PasswordStats, StrengthLabel};
pub use toolkit::{PasswordToolkit, ToolkitError};
pub use usage::{NoopUsage, UsageEvent, UsageSink, UsageSnapshot, UsageStats};

#[cfg(feature = "async")]
pub use breach::{BreachChecker, BreachConfig, BreachConfigError};
