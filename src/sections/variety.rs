//! Character variety section - detects uppercase, lowercase, digits, special chars.

use crate::charset::is_symbol;

const CLASS_POINTS: u8 = 15;

/// Which character classes a password contains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharacterClasses {
    pub upper: bool,
    pub lower: bool,
    pub digit: bool,
    pub special: bool,
}

impl CharacterClasses {
    /// 15 points per class present.
    pub fn points(&self) -> u8 {
        [self.upper, self.lower, self.digit, self.special]
            .iter()
            .filter(|&&b| b)
            .count() as u8
            * CLASS_POINTS
    }
}

/// Detects the classes present in `password`.
///
/// Only ASCII letters and digits count; "special" means a member of the
/// generator's symbol set, so characters like spaces or `~` count for nothing.
pub fn character_variety_section(password: &str) -> CharacterClasses {
    password.chars().fold(CharacterClasses::default(), |mut classes, c| {
        classes.upper |= c.is_ascii_uppercase();
        classes.lower |= c.is_ascii_lowercase();
        classes.digit |= c.is_ascii_digit();
        classes.special |= is_symbol(c);
        classes
    })
}
