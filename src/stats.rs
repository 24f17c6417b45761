//! Analysis result types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::breach::BreachLookupResult;

/// Qualitative tier derived from the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StrengthLabel {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    /// Maps a score to its tier. Scores above 100 are treated as 100.
    pub fn from_score(score: u8) -> Self {
        match score.min(100) {
            85.. => Self::VeryStrong,
            70..=84 => Self::Strong,
            50..=69 => Self::Moderate,
            30..=49 => Self::Weak,
            _ => Self::VeryWeak,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VeryWeak => "Very Weak",
            Self::Weak => "Weak",
            Self::Moderate => "Moderate",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of analyzing a single password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordStats {
    pub length: usize,
    pub has_upper: bool,
    pub has_lower: bool,
    pub has_digits: bool,
    pub has_special: bool,
    pub strength_score: u8,
    pub strength_label: StrengthLabel,
    pub is_common: bool,
    /// `None` when no lookup ran or the lookup could not be completed.
    pub breach_count: Option<u64>,
}

impl PasswordStats {
    /// Copy of these stats annotated with a breach lookup outcome.
    pub fn with_breach_count(&self, lookup: &BreachLookupResult) -> Self {
        let breach_count = match lookup {
            BreachLookupResult::Found(count) => Some(*count),
            BreachLookupResult::NotFound => Some(0),
            BreachLookupResult::Unknown(_) => None,
        };
        Self {
            breach_count,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breach::UnknownReason;

    #[test]
    fn test_label_thresholds() {
        assert_eq!(StrengthLabel::from_score(0), StrengthLabel::VeryWeak);
        assert_eq!(StrengthLabel::from_score(29), StrengthLabel::VeryWeak);
        assert_eq!(StrengthLabel::from_score(30), StrengthLabel::Weak);
        assert_eq!(StrengthLabel::from_score(49), StrengthLabel::Weak);
        assert_eq!(StrengthLabel::from_score(50), StrengthLabel::Moderate);
        assert_eq!(StrengthLabel::from_score(69), StrengthLabel::Moderate);
        assert_eq!(StrengthLabel::from_score(70), StrengthLabel::Strong);
        assert_eq!(StrengthLabel::from_score(84), StrengthLabel::Strong);
        assert_eq!(StrengthLabel::from_score(85), StrengthLabel::VeryStrong);
        assert_eq!(StrengthLabel::from_score(255), StrengthLabel::VeryStrong);
    }

    #[test]
    fn test_labels_are_ordered() {
        assert!(StrengthLabel::VeryWeak < StrengthLabel::Weak);
        assert!(StrengthLabel::Strong < StrengthLabel::VeryStrong);
        assert_eq!(StrengthLabel::VeryStrong.to_string(), "Very Strong");
    }

    #[test]
    fn test_with_breach_count() {
        let stats = PasswordStats {
            length: 8,
            has_upper: false,
            has_lower: true,
            has_digits: false,
            has_special: false,
            strength_score: 0,
            strength_label: StrengthLabel::VeryWeak,
            is_common: true,
            breach_count: None,
        };

        assert_eq!(
            stats.with_breach_count(&BreachLookupResult::Found(37)).breach_count,
            Some(37)
        );
        assert_eq!(
            stats.with_breach_count(&BreachLookupResult::NotFound).breach_count,
            Some(0)
        );
        let unknown = BreachLookupResult::Unknown(UnknownReason::UnexpectedStatus(404));
        assert_eq!(stats.with_breach_count(&unknown).breach_count, None);
    }
}
