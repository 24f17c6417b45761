use std::time::Duration;

use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use tokio_util::sync::CancellationToken;

use super::config::{BreachConfig, BreachConfigError};
use super::range::{HashRange, find_suffix};
use super::result::{BreachLookupResult, UnknownReason};

/// k-anonymity client for a `/range/{prefix}` breach service.
///
/// Lookups never fail: every network problem ends in
/// [`BreachLookupResult::Unknown`].
#[derive(Debug, Clone)]
pub struct BreachChecker {
    client: Client,
    config: BreachConfig,
}

/// Request path states. `Attempting(n)` is 1-based.
#[derive(Debug)]
enum LookupState {
    Attempting(u32),
    Backoff { attempt: u32, delay: Duration },
    Done(BreachLookupResult),
}

/// What a single HTTP attempt produced.
#[derive(Debug)]
enum AttemptOutcome {
    Body(String),
    Transient { reason: String, cooldown: Duration },
    Fatal(UnknownReason),
}

impl BreachChecker {
    pub fn new(config: BreachConfig) -> Result<Self, BreachConfigError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &BreachConfig {
        &self.config
    }

    /// Looks the password up in the breach corpus.
    pub async fn check(&self, password: &SecretString) -> BreachLookupResult {
        self.check_with_cancel(password, &CancellationToken::new())
            .await
    }

    /// Like [`check`](Self::check), but stops with
    /// `Unknown(Cancelled)` once `token` is cancelled. Cancellation is observed
    /// before each attempt and during backoff.
    pub async fn check_with_cancel(
        &self,
        password: &SecretString,
        token: &CancellationToken,
    ) -> BreachLookupResult {
        let range = HashRange::of(password.expose_secret());
        let url = self.config.range_url(&range.prefix);
        let max_attempts = self.config.max_attempts.max(1);

        #[cfg(feature = "tracing")]
        tracing::debug!(prefix = %range.prefix, "starting breach lookup");

        let mut state = LookupState::Attempting(1);
        loop {
            state = match state {
                LookupState::Attempting(_) if token.is_cancelled() => {
                    LookupState::Done(BreachLookupResult::Unknown(UnknownReason::Cancelled))
                }
                LookupState::Attempting(attempt) => match self.attempt(&url).await {
                    AttemptOutcome::Body(body) => {
                        LookupState::Done(match find_suffix(&body, &range.suffix) {
                            Ok(Some(count)) => BreachLookupResult::Found(count),
                            Ok(None) => BreachLookupResult::NotFound,
                            Err(msg) => {
                                BreachLookupResult::Unknown(UnknownReason::MalformedResponse(msg))
                            }
                        })
                    }
                    AttemptOutcome::Transient { reason, cooldown } => {
                        #[cfg(feature = "tracing")]
                        tracing::warn!(attempt, max_attempts, %reason, "breach lookup attempt failed");

                        if attempt >= max_attempts {
                            LookupState::Done(BreachLookupResult::Unknown(
                                UnknownReason::Exhausted {
                                    attempts: attempt,
                                    last_error: reason,
                                },
                            ))
                        } else {
                            LookupState::Backoff {
                                attempt,
                                delay: cooldown + self.config.base_backoff * attempt,
                            }
                        }
                    }
                    AttemptOutcome::Fatal(reason) => {
                        LookupState::Done(BreachLookupResult::Unknown(reason))
                    }
                },
                LookupState::Backoff { attempt, delay } => {
                    tokio::select! {
                        _ = token.cancelled() => {
                            LookupState::Done(BreachLookupResult::Unknown(UnknownReason::Cancelled))
                        }
                        _ = tokio::time::sleep(delay) => LookupState::Attempting(attempt + 1),
                    }
                }
                LookupState::Done(result) => {
                    #[cfg(feature = "tracing")]
                    match &result {
                        BreachLookupResult::Unknown(reason) => {
                            tracing::error!(%reason, "breach lookup inconclusive")
                        }
                        other => tracing::info!(breached = other.is_breached(), "breach lookup finished"),
                    }
                    return result;
                }
            };
        }
    }

    async fn attempt(&self, url: &str) -> AttemptOutcome {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(err) if should_retry_error(&err) => {
                return AttemptOutcome::Transient {
                    reason: err.to_string(),
                    cooldown: Duration::ZERO,
                };
            }
            Err(err) => return AttemptOutcome::Fatal(UnknownReason::Client(err.to_string())),
        };

        let status = response.status();
        match status {
            StatusCode::OK => match response.text().await {
                Ok(body) => AttemptOutcome::Body(body),
                Err(err) => AttemptOutcome::Transient {
                    reason: format!("failed to read body: {err}"),
                    cooldown: Duration::ZERO,
                },
            },
            StatusCode::TOO_MANY_REQUESTS => AttemptOutcome::Transient {
                reason: "rate limited (429)".to_string(),
                cooldown: self.config.rate_limit_cooldown,
            },
            s if s.is_server_error() => AttemptOutcome::Transient {
                reason: format!("server error ({})", s.as_u16()),
                cooldown: Duration::ZERO,
            },
            s => AttemptOutcome::Fatal(UnknownReason::UnexpectedStatus(s.as_u16())),
        }
    }
}

fn should_retry_error(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_connect() || err.is_request()
}
