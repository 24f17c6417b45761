//! Password scoring sections
//!
//! Each section inspects one aspect of a password. Bonus sections return the
//! points they award; penalty sections return what they detected, and the
//! analyzer turns that into a [`Penalty`].

mod common;
mod dictionary;
mod length;
mod pattern;
mod variety;

pub use common::common_section;
pub use dictionary::{DICTIONARY_WORDS, dictionary_section};
pub use length::length_section;
pub use pattern::{KEYBOARD_PATTERNS, pattern_section};
pub use variety::character_variety_section;

/// Deductions applied after the bonus sections, each floored at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Penalty {
    Common,
    Pattern,
    Dictionary,
}

impl Penalty {
    pub fn points(self) -> u8 {
        match self {
            Penalty::Common => 60,
            Penalty::Pattern => 25,
            Penalty::Dictionary => 15,
        }
    }
}
