use serde::Serialize;
use thiserror::Error;

/// Outcome of a breach lookup.
///
/// `Unknown` means the lookup could not be completed and says nothing about
/// the password; it must never be reported as clean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum BreachLookupResult {
    /// The password appears in the corpus this many times.
    Found(u64),
    /// The full range was retrieved and the password is not in it.
    NotFound,
    Unknown(UnknownReason),
}

impl BreachLookupResult {
    pub fn is_breached(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// `true` for `Found` and `NotFound`.
    pub fn is_conclusive(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum UnknownReason {
    #[error("gave up after {attempts} attempts: {last_error}")]
    Exhausted { attempts: u32, last_error: String },
    #[error("unexpected HTTP status {0}")]
    UnexpectedStatus(u16),
    #[error("malformed range response: {0}")]
    MalformedResponse(String),
    #[error("request could not be sent: {0}")]
    Client(String),
    #[error("lookup cancelled")]
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_is_not_clean() {
        let unknown = BreachLookupResult::Unknown(UnknownReason::Cancelled);
        assert!(!unknown.is_breached());
        assert!(!unknown.is_conclusive());
        assert_ne!(unknown, BreachLookupResult::NotFound);
        assert!(BreachLookupResult::NotFound.is_conclusive());
        assert!(BreachLookupResult::Found(1).is_breached());
    }

    #[test]
    fn test_reason_messages() {
        let reason = UnknownReason::Exhausted {
            attempts: 3,
            last_error: "server error (503)".into(),
        };
        assert_eq!(reason.to_string(), "gave up after 3 attempts: server error (503)");
    }
}
