//! Usage counters
//!
//! The toolkit reports what it did to a [`UsageSink`]. Counts are telemetry
//! only; nothing in the scoring or lookup paths reads them back.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UsageEvent {
    PasswordGenerated,
    PasswordChecked,
    BreachFound,
    ApiError,
}

/// Receives usage events. Implementations must tolerate concurrent callers.
pub trait UsageSink: Send + Sync {
    fn record(&self, event: UsageEvent);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopUsage;

impl UsageSink for NoopUsage {
    fn record(&self, _event: UsageEvent) {}
}

/// Counter values, as persisted by front ends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageSnapshot {
    pub passwords_generated: u64,
    pub passwords_checked: u64,
    pub breaches_found: u64,
    #[serde(default)]
    pub api_errors: u64,
    #[serde(default, deserialize_with = "deserialize_last_used")]
    pub last_used: Option<DateTime<Utc>>,
}

/// Accepts RFC 3339 as well as offset-less ISO 8601 timestamps, read as UTC.
fn deserialize_last_used<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| parse_timestamp(&raw).map_err(serde::de::Error::custom))
        .transpose()
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| raw.parse::<NaiveDateTime>().map(|naive| naive.and_utc()))
}

/// In-memory counters behind a mutex.
#[derive(Debug, Default)]
pub struct UsageStats {
    inner: Mutex<UsageSnapshot>,
}

impl UsageStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resumes counting from previously saved values.
    pub fn from_snapshot(snapshot: UsageSnapshot) -> Self {
        Self {
            inner: Mutex::new(snapshot),
        }
    }

    pub fn snapshot(&self) -> UsageSnapshot {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl UsageSink for UsageStats {
    fn record(&self, event: UsageEvent) {
        let mut stats = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let counter = match event {
            UsageEvent::PasswordGenerated => &mut stats.passwords_generated,
            UsageEvent::PasswordChecked => &mut stats.passwords_checked,
            UsageEvent::BreachFound => &mut stats.breaches_found,
            UsageEvent::ApiError => &mut stats.api_errors,
        };
        *counter = counter.saturating_add(1);
        stats.last_used = Some(Utc::now());
    }
}
