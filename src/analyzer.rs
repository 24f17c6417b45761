//! Password strength analyzer - main scoring logic.

use secrecy::{ExposeSecret, SecretString};

use crate::common::CommonPasswordSet;
use crate::error::PasswordError;
use crate::sections::{
    Penalty, character_variety_section, common_section, dictionary_section, length_section,
    pattern_section,
};
use crate::stats::{PasswordStats, StrengthLabel};

/// Scores passwords against a common-password list.
///
/// Analysis is a pure function of the password and the list the analyzer was
/// built with.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    common: CommonPasswordSet,
}

impl Analyzer {
    pub fn new(common: CommonPasswordSet) -> Self {
        Self { common }
    }

    pub fn common_passwords(&self) -> &CommonPasswordSet {
        &self.common
    }

    /// Analyzes password strength.
    ///
    /// # Arguments
    /// * `password` - The password to analyze
    ///
    /// # Errors
    /// Returns [`PasswordError::EmptyInput`] for an empty password.
    pub fn analyze(&self, password: &SecretString) -> Result<PasswordStats, PasswordError> {
        let pwd = password.expose_secret();
        if pwd.is_empty() {
            return Err(PasswordError::EmptyInput);
        }

        let length = pwd.chars().count();
        let classes = character_variety_section(pwd);
        let is_common = common_section(pwd, &self.common);

        // Bonus sections
        let mut score = u32::from(length_section(length)) + u32::from(classes.points());

        // Penalty sections, in order, each floored at zero
        let mut penalties = Vec::new();
        if is_common {
            penalties.push(Penalty::Common);
        }
        if let Some(_kind) = pattern_section(pwd) {
            #[cfg(feature = "tracing")]
            tracing::trace!(pattern = ?_kind, "pattern penalty applied");
            penalties.push(Penalty::Pattern);
        }
        if dictionary_section(pwd).is_some() {
            penalties.push(Penalty::Dictionary);
        }
        for penalty in penalties {
            score = score.saturating_sub(u32::from(penalty.points()));
        }

        let strength_score = score.min(100) as u8;

        Ok(PasswordStats {
            length,
            has_upper: classes.upper,
            has_lower: classes.lower,
            has_digits: classes.digit,
            has_special: classes.special,
            strength_score,
            strength_label: StrengthLabel::from_score(strength_score),
            is_common,
            breach_count: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(pwd: &str) -> Result<PasswordStats, PasswordError> {
        Analyzer::default().analyze(&SecretString::new(pwd.to_string().into()))
    }

    #[test]
    fn test_analyze_empty_password() {
        assert_eq!(analyze(""), Err(PasswordError::EmptyInput));
    }

    #[test]
    fn test_analyze_common_password() {
        let stats = analyze("password").unwrap();
        assert!(stats.is_common);
        // base would be 15 (length) + 15 (lowercase) = 30
        assert_eq!(stats.strength_score, 0);
        assert!(matches!(
            stats.strength_label,
            StrengthLabel::VeryWeak | StrengthLabel::Weak
        ));
        assert_eq!(stats.breach_count, None);
    }

    #[test]
    fn test_analyze_strong_password() {
        let stats = analyze("Tr7$kL9!mQ2@xR4w").unwrap();
        assert_eq!(stats.length, 16);
        assert!(stats.has_upper && stats.has_lower && stats.has_digits && stats.has_special);
        assert!(!stats.is_common);
        assert_eq!(stats.strength_score, 90);
        assert_eq!(stats.strength_label, StrengthLabel::VeryStrong);
    }

    #[test]
    fn test_analyze_long_password_reaches_cap() {
        let stats = analyze("Tr7$kL9!mQ2@xR4w#Vp8").unwrap();
        assert_eq!(stats.length, 20);
        assert_eq!(stats.strength_score, 100);
    }

    #[test]
    fn test_analyze_repeated_pattern_penalty() {
        // 15 (length) + 15 (lower) + 15 (digit) - 25
        let stats = analyze("aaa12345").unwrap();
        assert_eq!(stats.strength_score, 20);
        assert_eq!(stats.strength_label, StrengthLabel::VeryWeak);
    }

    #[test]
    fn test_analyze_ascending_pattern_penalty() {
        let stats = analyze("abc12345").unwrap();
        assert_eq!(stats.strength_score, 20);
    }

    #[test]
    fn test_analyze_dictionary_penalty() {
        // 25 (length) + 60 (classes) - 15
        let stats = analyze("Xq7!Server#9").unwrap();
        assert_eq!(stats.length, 12);
        assert_eq!(stats.strength_score, 70);
        assert_eq!(stats.strength_label, StrengthLabel::Strong);
    }

    #[test]
    fn test_analyze_penalties_floor_at_zero() {
        let stats = analyze("admin").unwrap();
        assert!(stats.is_common);
        assert_eq!(stats.strength_score, 0);
        assert_eq!(stats.strength_label, StrengthLabel::VeryWeak);
    }

    #[test]
    fn test_analyze_counts_characters_not_bytes() {
        let stats = analyze("ééééé").unwrap();
        assert_eq!(stats.length, 5);
    }

    #[test]
    fn test_analyze_is_deterministic() {
        let analyzer = Analyzer::default();
        let pwd = SecretString::new("MyPass123!".to_string().into());
        let first = analyzer.analyze(&pwd).unwrap();
        let _ = analyzer.analyze(&SecretString::new("other".to_string().into()));
        let second = analyzer.analyze(&pwd).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_analyze_uses_extended_list() {
        let mut common = CommonPasswordSet::builtin();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"Zq9!Vortex\n").unwrap();
        common.extend_from_path(file.path()).unwrap();

        let analyzer = Analyzer::new(common);
        let stats = analyzer
            .analyze(&SecretString::new("zq9!vortex".to_string().into()))
            .unwrap();
        assert!(stats.is_common);
    }
}
