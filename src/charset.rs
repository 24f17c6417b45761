//! Character pools used by the generator and the class detection sections.

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Glyphs that are easy to confuse when read back.
pub const AMBIGUOUS: &str = "0O1lI|";

/// Returns `true` if `c` belongs to the fixed symbol set.
pub fn is_symbol(c: char) -> bool {
    SYMBOLS.contains(c)
}

/// The four named subsets a generated password draws from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPool {
    pub lowercase: Vec<char>,
    pub uppercase: Vec<char>,
    pub digits: Vec<char>,
    pub symbols: Vec<char>,
}

impl CharacterPool {
    /// Builds the pools, optionally stripping [`AMBIGUOUS`] from every one of them.
    pub fn new(exclude_ambiguous: bool) -> Self {
        let filter = |set: &str| -> Vec<char> {
            set.chars()
                .filter(|c| !exclude_ambiguous || !AMBIGUOUS.contains(*c))
                .collect()
        };

        Self {
            lowercase: filter(LOWERCASE),
            uppercase: filter(UPPERCASE),
            digits: filter(DIGITS),
            symbols: filter(SYMBOLS),
        }
    }

    /// Union of the enabled pools.
    pub fn union(&self, include_symbols: bool) -> Vec<char> {
        let mut all = Vec::with_capacity(
            self.lowercase.len() + self.uppercase.len() + self.digits.len() + self.symbols.len(),
        );
        all.extend_from_slice(&self.lowercase);
        all.extend_from_slice(&self.uppercase);
        all.extend_from_slice(&self.digits);
        if include_symbols {
            all.extend_from_slice(&self.symbols);
        }
        all
    }
}
