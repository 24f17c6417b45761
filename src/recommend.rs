//! Advice derived from analysis results.

use serde::Serialize;
use std::fmt;

use crate::stats::PasswordStats;

/// A single piece of advice, rendered through [`fmt::Display`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Recommendation {
    MinimumLength,
    AddUppercase,
    AddLowercase,
    AddDigits,
    AddSpecial,
    AvoidCommon,
    UsePasswordManager,
    GenerateRandom,
    PreferLongPasswords,
}

impl Recommendation {
    pub fn message(&self) -> &'static str {
        match self {
            Self::MinimumLength => "Use at least 12 characters (16+ recommended)",
            Self::AddUppercase => "Include uppercase letters (A-Z)",
            Self::AddLowercase => "Include lowercase letters (a-z)",
            Self::AddDigits => "Include numbers (0-9)",
            Self::AddSpecial => "Include special characters (!@#$%^&*)",
            Self::AvoidCommon => "Avoid common passwords",
            Self::UsePasswordManager => "Consider using a password manager",
            Self::GenerateRandom => "Try generating a random password",
            Self::PreferLongPasswords => "Use 16 or more characters for stronger protection",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Derives advice from `stats`, in a fixed order.
///
/// Returns an empty list when every criterion passes.
pub fn recommend(stats: &PasswordStats) -> Vec<Recommendation> {
    let checks = [
        (stats.length < 12, Recommendation::MinimumLength),
        (!stats.has_upper, Recommendation::AddUppercase),
        (!stats.has_lower, Recommendation::AddLowercase),
        (!stats.has_digits, Recommendation::AddDigits),
        (!stats.has_special, Recommendation::AddSpecial),
        (stats.is_common, Recommendation::AvoidCommon),
        (stats.strength_score < 70, Recommendation::UsePasswordManager),
        (stats.strength_score < 70, Recommendation::GenerateRandom),
        (stats.length < 16, Recommendation::PreferLongPasswords),
    ];

    checks
        .into_iter()
        .filter_map(|(applies, advice)| applies.then_some(advice))
        .collect()
}
