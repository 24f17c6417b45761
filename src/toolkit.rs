//! Facade wiring the generator, analyzer and breach checker to a usage sink.

use secrecy::SecretString;
use std::sync::Arc;
use thiserror::Error;

use crate::analyzer::Analyzer;
use crate::common::{CommonListError, CommonPasswordSet};
use crate::error::PasswordError;
use crate::generator;
use crate::recommend::{Recommendation, recommend};
use crate::stats::PasswordStats;
use crate::usage::{NoopUsage, UsageEvent, UsageSink};

#[cfg(feature = "async")]
use crate::breach::{BreachChecker, BreachConfig, BreachConfigError, BreachLookupResult};

#[derive(Error, Debug)]
pub enum ToolkitError {
    #[error(transparent)]
    CommonList(#[from] CommonListError),
    #[cfg(feature = "async")]
    #[error(transparent)]
    BreachConfig(#[from] BreachConfigError),
}

/// The operations exposed to front ends.
pub struct PasswordToolkit {
    analyzer: Analyzer,
    #[cfg(feature = "async")]
    breach: BreachChecker,
    usage: Arc<dyn UsageSink>,
}

impl PasswordToolkit {
    /// Creates a toolkit that reports to [`NoopUsage`].
    pub fn new(analyzer: Analyzer, #[cfg(feature = "async")] breach: BreachChecker) -> Self {
        Self {
            analyzer,
            #[cfg(feature = "async")]
            breach,
            usage: Arc::new(NoopUsage),
        }
    }

    /// Builds every component from the environment.
    ///
    /// See [`CommonPasswordSet::from_env`] and `BreachConfig::from_env`.
    pub fn from_env() -> Result<Self, ToolkitError> {
        let analyzer = Analyzer::new(CommonPasswordSet::from_env()?);

        #[cfg(feature = "async")]
        let toolkit = Self::new(analyzer, BreachChecker::new(BreachConfig::from_env()?)?);

        #[cfg(not(feature = "async"))]
        let toolkit = Self::new(analyzer);

        Ok(toolkit)
    }

    pub fn with_usage(mut self, usage: Arc<dyn UsageSink>) -> Self {
        self.usage = usage;
        self
    }

    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    pub fn generate(
        &self,
        length: usize,
        include_symbols: bool,
        exclude_ambiguous: bool,
    ) -> Result<SecretString, PasswordError> {
        let password = generator::generate(length, include_symbols, exclude_ambiguous)?;
        self.usage.record(UsageEvent::PasswordGenerated);
        Ok(password)
    }

    pub fn analyze(&self, password: &SecretString) -> Result<PasswordStats, PasswordError> {
        let stats = self.analyzer.analyze(password)?;
        self.usage.record(UsageEvent::PasswordChecked);
        Ok(stats)
    }

    pub fn recommend(&self, stats: &PasswordStats) -> Vec<Recommendation> {
        recommend(stats)
    }

    /// Breach lookup; never fails, see [`BreachLookupResult`].
    #[cfg(feature = "async")]
    pub async fn check_breach(&self, password: &SecretString) -> BreachLookupResult {
        let result = self.breach.check(password).await;
        match &result {
            BreachLookupResult::Found(_) => self.usage.record(UsageEvent::BreachFound),
            BreachLookupResult::Unknown(_) => self.usage.record(UsageEvent::ApiError),
            BreachLookupResult::NotFound => {}
        }
        result
    }
}
